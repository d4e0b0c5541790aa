//! Bitcoin network parameters
//!
//! Maps Bitcoin-family chain IDs to the magic bytes and address prefixes that
//! distinguish mainnet, testnet3 and regtest, and back.

use crate::error::ChainError;
use crate::registry::{BITCOIN_MAINNET, BITCOIN_REGTEST, BITCOIN_TESTNET};

/// Address and wire constants of a Bitcoin network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BtcChainParams {
    /// Network name as used by Bitcoin Core
    pub name: &'static str,
    /// P2P message start (magic) bytes, little-endian on the wire
    pub net: u32,
    /// Human-readable part of segwit (bech32/bech32m) addresses
    pub bech32_hrp: &'static str,
    /// Base58Check version byte for P2PKH addresses
    pub pubkey_hash_addr_id: u8,
    /// Base58Check version byte for P2SH addresses
    pub script_hash_addr_id: u8,
    pub default_port: &'static str,
}

pub const MAIN_NET_PARAMS: BtcChainParams = BtcChainParams {
    name: "mainnet",
    net: 0xd9b4_bef9,
    bech32_hrp: "bc",
    pubkey_hash_addr_id: 0x00,
    script_hash_addr_id: 0x05,
    default_port: "8333",
};

pub const TEST_NET3_PARAMS: BtcChainParams = BtcChainParams {
    name: "testnet3",
    net: 0x0709_110b,
    bech32_hrp: "tb",
    pubkey_hash_addr_id: 0x6f,
    script_hash_addr_id: 0xc4,
    default_port: "18333",
};

pub const REGRESSION_NET_PARAMS: BtcChainParams = BtcChainParams {
    name: "regtest",
    net: 0xdab5_bffa,
    bech32_hrp: "bcrt",
    pubkey_hash_addr_id: 0x6f,
    script_hash_addr_id: 0xc4,
    default_port: "18444",
};

const BTC_CHAIN_PARAMS: [(i64, &BtcChainParams); 3] = [
    (BITCOIN_MAINNET.chain_id, &MAIN_NET_PARAMS),
    (BITCOIN_TESTNET.chain_id, &TEST_NET3_PARAMS),
    (BITCOIN_REGTEST.chain_id, &REGRESSION_NET_PARAMS),
];

/// Get the network parameters for a Bitcoin-family chain ID
pub fn get_btc_chain_params(chain_id: i64) -> Result<&'static BtcChainParams, ChainError> {
    BTC_CHAIN_PARAMS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, params)| *params)
        .ok_or(ChainError::UnknownBtcChain(chain_id))
}

/// Get the chain ID for a set of network parameters.
///
/// Matches on network name and magic bytes.
pub fn get_btc_chain_id_from_chain_params(params: &BtcChainParams) -> Result<i64, ChainError> {
    BTC_CHAIN_PARAMS
        .iter()
        .find(|(_, known)| known.name == params.name && known.net == params.net)
        .map(|(id, _)| *id)
        .ok_or_else(|| ChainError::UnknownBtcParams(params.name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ETHEREUM;

    #[test]
    fn test_get_btc_chain_params() {
        let params = get_btc_chain_params(BITCOIN_MAINNET.chain_id).unwrap();
        assert_eq!(params, &MAIN_NET_PARAMS);

        assert_eq!(
            get_btc_chain_params(BITCOIN_TESTNET.chain_id).unwrap(),
            &TEST_NET3_PARAMS
        );
        assert_eq!(
            get_btc_chain_params(BITCOIN_REGTEST.chain_id).unwrap(),
            &REGRESSION_NET_PARAMS
        );
    }

    #[test]
    fn test_get_btc_chain_params_unknown_chain() {
        assert_eq!(
            get_btc_chain_params(9999),
            Err(ChainError::UnknownBtcChain(9999))
        );
        assert!(get_btc_chain_params(ETHEREUM.chain_id).is_err());
    }

    #[test]
    fn test_get_btc_chain_id_from_chain_params() {
        assert_eq!(
            get_btc_chain_id_from_chain_params(&MAIN_NET_PARAMS),
            Ok(8332)
        );
        assert_eq!(
            get_btc_chain_id_from_chain_params(&REGRESSION_NET_PARAMS),
            Ok(18444)
        );
        assert_eq!(
            get_btc_chain_id_from_chain_params(&TEST_NET3_PARAMS),
            Ok(18332)
        );
    }

    #[test]
    fn test_get_btc_chain_id_from_unknown_params() {
        let unknown = BtcChainParams {
            name: "unknown",
            ..MAIN_NET_PARAMS
        };
        assert_eq!(
            get_btc_chain_id_from_chain_params(&unknown),
            Err(ChainError::UnknownBtcParams("unknown".to_string()))
        );

        // Known name with foreign magic bytes does not match either
        let signet_like = BtcChainParams {
            net: 0x40cf_030a,
            ..TEST_NET3_PARAMS
        };
        assert!(get_btc_chain_id_from_chain_params(&signet_like).is_err());
    }

    #[test]
    fn test_params_lookup_is_inverse() {
        for chain_id in [8332, 18332, 18444] {
            let params = get_btc_chain_params(chain_id).unwrap();
            assert_eq!(get_btc_chain_id_from_chain_params(params), Ok(chain_id));
        }
    }
}
