//! Chain Address Encoding
//!
//! Converts between a chain's display address and the canonical bytes stored
//! internally. The codec is picked from the chain's network and vm, never from
//! its ID, so new chain IDs within a known family need no codec changes.
//!
//! ## Families
//!
//! - **Bitcoin** (`network == btc`): addresses are kept in their string form.
//!   Encoding and decoding only check that the string is a valid address for
//!   the chain's network parameters (segwit bech32/bech32m or Base58Check).
//! - **EVM** (`vm == evm`): canonical form is the raw 20-byte address; display
//!   form is the EIP-55 checksummed `0x` hex string.
//!
//! Any other network/vm combination is [`ChainError::UnsupportedChain`].

use bech32::{self, u5, FromBase32, ToBase32, Variant};
use tiny_keccak::{Hasher, Keccak};

use crate::btc_params::{get_btc_chain_params, BtcChainParams};
use crate::chain::Chain;
use crate::error::ChainError;
use crate::types::Vm;

/// Length of an EVM address in bytes
pub const EVM_ADDRESS_LEN: usize = 20;

/// Length of a P2WPKH witness program (HASH160 of a compressed pubkey)
pub const P2WPKH_PROGRAM_LEN: usize = 20;

/// Length of a P2WSH witness program (SHA256 of the witness script)
pub const P2WSH_PROGRAM_LEN: usize = 32;

const MAX_BECH32_LEN: usize = 90;

// ============================================================================
// Codec Dispatch
// ============================================================================

/// Address conversion for one chain family
pub trait AddressCodec: Send + Sync {
    /// Family name for logging
    fn name(&self) -> &'static str;

    /// Canonical bytes → display string
    fn encode_address(&self, chain: &Chain, bytes: &[u8]) -> Result<String, ChainError>;

    /// Display string → canonical bytes
    fn decode_address(&self, chain: &Chain, addr: &str) -> Result<Vec<u8>, ChainError>;
}

/// Select the codec for a chain from its network and vm
pub fn codec_for(chain: &Chain) -> Result<&'static dyn AddressCodec, ChainError> {
    if chain.is_bitcoin_chain() {
        Ok(&BitcoinCodec)
    } else if chain.vm == Vm::Evm {
        Ok(&EvmCodec)
    } else {
        Err(ChainError::UnsupportedChain(chain.chain_id))
    }
}

/// Encode canonical address bytes into the chain's display form.
///
/// For EVM chains `bytes` is either the raw 20-byte address or the ASCII
/// text of a full `0x` + 40 hex digit address. A `0x` prefix followed by raw
/// bytes is not stripped and is rejected.
pub fn encode_address(chain: &Chain, bytes: &[u8]) -> Result<String, ChainError> {
    let codec = codec_for(chain)?;
    codec.encode_address(chain, bytes).map_err(|e| {
        tracing::debug!(
            chain_id = chain.chain_id,
            codec = codec.name(),
            input_len = bytes.len(),
            error = %e,
            "Address encode rejected"
        );
        e
    })
}

/// Decode a display-form address into the chain's canonical bytes
pub fn decode_address(chain: &Chain, addr: &str) -> Result<Vec<u8>, ChainError> {
    let codec = codec_for(chain)?;
    codec.decode_address(chain, addr).map_err(|e| {
        tracing::debug!(
            chain_id = chain.chain_id,
            codec = codec.name(),
            input_len = addr.len(),
            error = %e,
            "Address decode rejected"
        );
        e
    })
}

// ============================================================================
// Bitcoin Family
// ============================================================================

/// Bitcoin-family codec: validates address strings against network params
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCodec;

impl AddressCodec for BitcoinCodec {
    fn name(&self) -> &'static str {
        "bitcoin"
    }

    fn encode_address(&self, chain: &Chain, bytes: &[u8]) -> Result<String, ChainError> {
        let addr = std::str::from_utf8(bytes)
            .map_err(|e| ChainError::AddressDecode(format!("address is not UTF-8: {}", e)))?;
        let params = get_btc_chain_params(chain.chain_id)?;
        validate_btc_address(addr, params)?;
        Ok(addr.to_string())
    }

    fn decode_address(&self, chain: &Chain, addr: &str) -> Result<Vec<u8>, ChainError> {
        let params = get_btc_chain_params(chain.chain_id)?;
        validate_btc_address(addr, params)?;
        Ok(addr.as_bytes().to_vec())
    }
}

/// Check that `addr` is a valid address on the network described by `params`.
///
/// Accepts segwit addresses (bech32 for v0, bech32m for v1+) with the
/// network's HRP, and Base58Check P2PKH/P2SH addresses with the network's
/// version bytes.
pub fn validate_btc_address(addr: &str, params: &BtcChainParams) -> Result<(), ChainError> {
    if addr.is_empty() {
        return Err(ChainError::AddressDecode("empty bitcoin address".to_string()));
    }

    match bech32::decode(addr) {
        Ok((hrp, data, variant)) => validate_segwit(addr, &hrp, &data, variant, params),
        Err(_) => validate_base58(addr, params),
    }
}

fn validate_segwit(
    addr: &str,
    hrp: &str,
    data: &[u5],
    variant: Variant,
    params: &BtcChainParams,
) -> Result<(), ChainError> {
    if addr.len() > MAX_BECH32_LEN {
        return Err(ChainError::AddressDecode(format!(
            "segwit address too long: {} chars",
            addr.len()
        )));
    }
    if hrp != params.bech32_hrp {
        return Err(ChainError::AddressDecode(format!(
            "address prefix {:?} does not match network {} (expected {:?})",
            hrp, params.name, params.bech32_hrp
        )));
    }

    let (version, program) = data
        .split_first()
        .ok_or_else(|| ChainError::AddressDecode("missing witness version".to_string()))?;
    let version = version.to_u8();
    if version > 16 {
        return Err(ChainError::AddressDecode(format!(
            "invalid witness version {}",
            version
        )));
    }

    let program = Vec::<u8>::from_base32(program)
        .map_err(|e| ChainError::AddressDecode(format!("invalid witness program: {}", e)))?;

    if version == 0 {
        if variant != Variant::Bech32 {
            return Err(ChainError::AddressDecode(
                "witness v0 address must use bech32 checksum".to_string(),
            ));
        }
        if program.len() != P2WPKH_PROGRAM_LEN && program.len() != P2WSH_PROGRAM_LEN {
            return Err(ChainError::AddressDecode(format!(
                "invalid witness v0 program length: {}",
                program.len()
            )));
        }
    } else {
        if variant != Variant::Bech32m {
            return Err(ChainError::AddressDecode(format!(
                "witness v{} address must use bech32m checksum",
                version
            )));
        }
        if !(2..=40).contains(&program.len()) {
            return Err(ChainError::AddressDecode(format!(
                "invalid witness program length: {}",
                program.len()
            )));
        }
    }

    Ok(())
}

fn validate_base58(addr: &str, params: &BtcChainParams) -> Result<(), ChainError> {
    let payload = bs58::decode(addr)
        .with_check(None)
        .into_vec()
        .map_err(|e| ChainError::AddressDecode(format!("invalid bitcoin address: {}", e)))?;

    // version byte + HASH160
    if payload.len() != 21 {
        return Err(ChainError::AddressDecode(format!(
            "invalid base58 payload length: expected 21 bytes, got {}",
            payload.len()
        )));
    }

    let version = payload[0];
    if version != params.pubkey_hash_addr_id && version != params.script_hash_addr_id {
        return Err(ChainError::AddressDecode(format!(
            "address version 0x{:02x} does not belong to network {}",
            version, params.name
        )));
    }

    Ok(())
}

/// Build the P2WPKH (witness v0, bech32) address for `program` on `chain`.
///
/// Fails with [`ChainError::UnknownBtcChain`] if `chain` has no Bitcoin
/// network params, or [`ChainError::AddressDecode`] if the program is not
/// exactly 20 bytes.
pub fn btc_address_from_witness_program(
    chain: &Chain,
    program: &[u8],
) -> Result<String, ChainError> {
    let params = get_btc_chain_params(chain.chain_id)?;

    if program.len() != P2WPKH_PROGRAM_LEN {
        return Err(ChainError::AddressDecode(format!(
            "witness program for P2WPKH must be {} bytes, got {}",
            P2WPKH_PROGRAM_LEN,
            program.len()
        )));
    }

    let mut data = vec![u5::try_from_u8(0).map_err(bech32_error)?];
    data.extend(program.to_base32());

    bech32::encode(params.bech32_hrp, data, Variant::Bech32).map_err(bech32_error)
}

fn bech32_error(e: bech32::Error) -> ChainError {
    ChainError::AddressDecode(format!("bech32 encoding failed: {}", e))
}

// ============================================================================
// EVM Family
// ============================================================================

/// EVM codec: 20-byte canonical form, EIP-55 checksummed display form
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmCodec;

impl AddressCodec for EvmCodec {
    fn name(&self) -> &'static str {
        "evm"
    }

    /// Accepts the raw 20 bytes, or the ASCII text of a `0x`-prefixed
    /// 40-digit hex address. Raw bytes behind a `0x` prefix are rejected.
    fn encode_address(&self, _chain: &Chain, bytes: &[u8]) -> Result<String, ChainError> {
        let raw: [u8; EVM_ADDRESS_LEN] = match bytes.try_into() {
            Ok(raw) => raw,
            Err(_) => match std::str::from_utf8(bytes) {
                Ok(text) if text.len() == 42 && has_hex_prefix(text) => parse_evm_address(text)?,
                _ => {
                    return Err(ChainError::AddressDecode(format!(
                        "invalid EVM address: expected {} bytes, got {}",
                        EVM_ADDRESS_LEN,
                        bytes.len()
                    )))
                }
            },
        };
        Ok(to_checksum_address(&raw))
    }

    fn decode_address(&self, _chain: &Chain, addr: &str) -> Result<Vec<u8>, ChainError> {
        parse_evm_address(addr).map(|raw| raw.to_vec())
    }
}

fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x") || s.starts_with("0X")
}

/// Parse a hex EVM address (with or without `0x` prefix, any case) to 20 bytes
pub fn parse_evm_address(addr: &str) -> Result<[u8; EVM_ADDRESS_LEN], ChainError> {
    let hex_str = if has_hex_prefix(addr) { &addr[2..] } else { addr };

    if hex_str.len() != EVM_ADDRESS_LEN * 2 {
        return Err(ChainError::AddressDecode(format!(
            "invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let mut result = [0u8; EVM_ADDRESS_LEN];
    hex::decode_to_slice(hex_str, &mut result)
        .map_err(|e| ChainError::AddressDecode(format!("invalid EVM address hex: {}", e)))?;
    Ok(result)
}

/// Encode 20 bytes as an EIP-55 checksummed `0x` hex string
pub fn to_checksum_address(raw: &[u8; EVM_ADDRESS_LEN]) -> String {
    let lower = hex::encode(raw);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}
