//! Chains-RS: Chain Registry and Address Codec for Cross-Chain Bridging
//!
//! This crate describes the chains a cross-chain platform knows about and
//! converts addresses between their string and byte forms:
//!
//! - **Types** - Chain name, network, network type, VM and consensus tags
//! - **Chain** - Chain descriptors, validation, classification predicates
//! - **Registry** - Built-in chain table and lookups by ID, network, consensus
//! - **Address Codec** - Bitcoin (bech32/bech32m, base58check) and EVM (EIP-55) addresses
//! - **BTC Params** - Bitcoin network parameters keyed by chain ID
//! - **Config** - Extra chains layered over the built-in registry from env
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! chains-rs = { path = "../chains-rs" }
//! ```
//!
//! ```
//! use chains_rs::{get_chain_from_chain_id, ETHEREUM};
//!
//! let chain = get_chain_from_chain_id(1).unwrap();
//! assert_eq!(chain, ETHEREUM);
//! assert!(chain.is_evm_chain());
//! ```

pub mod address_codec;
pub mod btc_params;
pub mod chain;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used items at the crate root
pub use address_codec::{
    btc_address_from_witness_program, codec_for, decode_address, encode_address, keccak256,
    parse_evm_address, to_checksum_address, validate_btc_address, AddressCodec, BitcoinCodec,
    EvmCodec,
};

pub use btc_params::{
    get_btc_chain_id_from_chain_params, get_btc_chain_params, BtcChainParams, MAIN_NET_PARAMS,
    REGRESSION_NET_PARAMS, TEST_NET3_PARAMS,
};

pub use chain::{Chain, Chains, RawChain};
pub use config::RegistryConfig;
pub use error::ChainError;

pub use registry::{
    chain_id_in_chain_list, chain_list_by_consensus, chain_list_by_network,
    chain_list_by_network_type, chain_list_for_header_support, default_chains_list,
    default_registry, external_chain_list, get_chain_from_chain_id, is_bitcoin_chain,
    is_ethereum_chain, is_evm_chain, is_header_supported_chain, is_zeta_chain,
    zeta_chain_from_cosmos_chain_id, ChainRegistry, AMOY, BASE_MAINNET, BASE_SEPOLIA,
    BITCOIN_MAINNET, BITCOIN_REGTEST, BITCOIN_TESTNET, BSC_MAINNET, BSC_TESTNET, ETHEREUM,
    GOERLI, GOERLI_LOCALNET, MUMBAI, OPTIMISM_MAINNET, OPTIMISM_SEPOLIA, POLYGON, SEPOLIA,
    ZETA_CHAIN_DEVNET, ZETA_CHAIN_MAINNET, ZETA_CHAIN_PRIVNET, ZETA_CHAIN_TESTNET,
};

pub use types::{ChainName, Consensus, Network, NetworkType, Vm};
