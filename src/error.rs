//! Error types for chain validation and address conversion

use thiserror::Error;

/// Errors returned by chain descriptor validation, registry lookups that can
/// fail, and the address codecs.
///
/// Every variant means "this input is not acceptable". None of them are fatal;
/// callers reject the offending descriptor, address, or parameter record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    // ========================================================================
    // Descriptor Errors
    // ========================================================================
    #[error("invalid chain: {0}")]
    InvalidChain(String),

    #[error("chain {0} is not supported by any address codec")]
    UnsupportedChain(i64),

    // ========================================================================
    // Address Errors
    // ========================================================================
    #[error("address decode error: {0}")]
    AddressDecode(String),

    // ========================================================================
    // Bitcoin Network Parameter Errors
    // ========================================================================
    #[error("no bitcoin network params for chain ID {0}")]
    UnknownBtcChain(i64),

    #[error("no chain ID for bitcoin network params: {0}")]
    UnknownBtcParams(String),
}
