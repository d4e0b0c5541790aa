//! Chain descriptor
//!
//! A [`Chain`] bundles a numeric chain ID with its classifiers and an
//! externality flag. [`RawChain`] is the untyped wire form decoded from
//! external messages; it must pass [`RawChain::validate`] before it becomes a
//! [`Chain`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use crate::address_codec;
use crate::error::ChainError;
use crate::types::{ChainName, Consensus, Network, NetworkType, Vm};

// ============================================================================
// Chain Descriptor
// ============================================================================

/// A chain the platform can interoperate with.
///
/// `Chain::default()` is the distinguished empty descriptor: chain ID 0 and
/// every classifier at its zero tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Chain {
    pub chain_id: i64,
    pub chain_name: ChainName,
    pub network: Network,
    pub network_type: NetworkType,
    pub vm: Vm,
    pub consensus: Consensus,
    /// False only for the platform's own network
    pub is_external: bool,
}

impl Chain {
    /// Validate the descriptor.
    ///
    /// Classifiers are valid by construction here, so only the chain ID can
    /// fail. The check shares its ordering and messages with
    /// [`RawChain::validate`].
    pub fn validate(&self) -> Result<(), ChainError> {
        RawChain::from(*self).validate()
    }

    /// True if this is the distinguished empty descriptor
    pub fn is_empty(&self) -> bool {
        *self == Chain::default()
    }

    /// True if this chain is the platform's own network
    pub fn is_zeta_chain(&self) -> bool {
        self.network == Network::Zeta
    }

    /// True if this chain is external to the platform
    pub fn is_external_chain(&self) -> bool {
        self.is_external
    }

    /// True for external chains running the EVM
    pub fn is_evm_chain(&self) -> bool {
        self.vm == Vm::Evm && !self.is_zeta_chain()
    }

    pub fn is_bitcoin_chain(&self) -> bool {
        self.network == Network::Btc
    }

    pub fn is_ethereum_chain(&self) -> bool {
        self.network == Network::Eth
    }

    /// True if block headers of this chain can be tracked for proof
    /// verification (external chains with Ethereum or Bitcoin consensus)
    pub fn is_header_supported_chain(&self) -> bool {
        self.is_external
            && matches!(self.consensus, Consensus::Ethereum | Consensus::Bitcoin)
    }

    /// Merkle proofs are verified for external EVM and Bitcoin chains only;
    /// the platform never proves against its own ledger.
    pub fn supports_merkle_proof(&self) -> bool {
        self.is_evm_chain() || self.is_bitcoin_chain()
    }

    /// True if a chain with the same ID is in `list`
    pub fn in_chain_list(&self, list: &[Chain]) -> bool {
        list.iter().any(|c| c.chain_id == self.chain_id)
    }

    /// Encode canonical address bytes into this chain's display form.
    ///
    /// See [`address_codec::encode_address`].
    pub fn encode_address(&self, bytes: &[u8]) -> Result<String, ChainError> {
        address_codec::encode_address(self, bytes)
    }

    /// Decode a display-form address into canonical bytes.
    ///
    /// See [`address_codec::decode_address`].
    pub fn decode_address(&self, addr: &str) -> Result<Vec<u8>, ChainError> {
        address_codec::decode_address(self, addr)
    }

    /// Build a P2WPKH address on this chain from a raw witness program
    pub fn btc_address_from_witness_program(&self, program: &[u8]) -> Result<String, ChainError> {
        address_codec::btc_address_from_witness_program(self, program)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chain_id:{} chain_name:{} network:{} network_type:{} vm:{} consensus:{} is_external:{}",
            self.chain_id,
            self.chain_name,
            self.network,
            self.network_type,
            self.vm,
            self.consensus,
            self.is_external
        )
    }
}

// ============================================================================
// Wire Form
// ============================================================================

/// Chain descriptor as decoded from an external message, with untyped tags.
///
/// Nothing in a `RawChain` is trusted until [`RawChain::validate`] passes;
/// convert with `Chain::try_from(raw)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawChain {
    pub chain_id: i64,
    pub chain_name: i32,
    pub network: i32,
    pub network_type: i32,
    pub vm: i32,
    pub consensus: i32,
    pub is_external: bool,
}

impl RawChain {
    /// Validate the descriptor, reporting only the first violation.
    ///
    /// Checks run in a fixed order: chain ID, chain name, network, network
    /// type, vm, consensus.
    pub fn validate(&self) -> Result<(), ChainError> {
        self.parse().map(|_| ())
    }

    fn parse(&self) -> Result<Chain, ChainError> {
        if self.chain_id <= 0 {
            return Err(ChainError::InvalidChain(format!(
                "chain ID must be positive ({})",
                self.chain_id
            )));
        }

        let chain_name = ChainName::try_from(self.chain_name)
            .map_err(|v| ChainError::InvalidChain(format!("invalid chain name ({})", v)))?;
        let network = Network::try_from(self.network)
            .map_err(|v| ChainError::InvalidChain(format!("invalid network ({})", v)))?;
        let network_type = NetworkType::try_from(self.network_type)
            .map_err(|v| ChainError::InvalidChain(format!("invalid network type ({})", v)))?;
        let vm = Vm::try_from(self.vm)
            .map_err(|v| ChainError::InvalidChain(format!("invalid vm ({})", v)))?;
        let consensus = Consensus::try_from(self.consensus)
            .map_err(|v| ChainError::InvalidChain(format!("invalid consensus ({})", v)))?;

        Ok(Chain {
            chain_id: self.chain_id,
            chain_name,
            network,
            network_type,
            vm,
            consensus,
            is_external: self.is_external,
        })
    }
}

impl From<Chain> for RawChain {
    fn from(chain: Chain) -> Self {
        Self {
            chain_id: chain.chain_id,
            chain_name: chain.chain_name.as_i32(),
            network: chain.network.as_i32(),
            network_type: chain.network_type.as_i32(),
            vm: chain.vm.as_i32(),
            consensus: chain.consensus.as_i32(),
            is_external: chain.is_external,
        }
    }
}

impl TryFrom<RawChain> for Chain {
    type Error = ChainError;

    fn try_from(raw: RawChain) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

// ============================================================================
// Chain Sequences
// ============================================================================

/// An ordered sequence of chains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chains(pub Vec<Chain>);

impl Chains {
    /// Remove duplicate chain IDs, keeping the first occurrence of each in order
    pub fn distinct(&self) -> Chains {
        let mut seen: HashSet<i64> = HashSet::new();
        self.0
            .iter()
            .filter(|c| seen.insert(c.chain_id))
            .copied()
            .collect()
    }

    /// True if a chain with the same ID is in the sequence
    pub fn has(&self, chain: &Chain) -> bool {
        chain.in_chain_list(&self.0)
    }

    /// Display strings of every chain, in order
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }

    pub fn into_inner(self) -> Vec<Chain> {
        self.0
    }
}

impl Deref for Chains {
    type Target = [Chain];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Chain>> for Chains {
    fn from(chains: Vec<Chain>) -> Self {
        Chains(chains)
    }
}

impl FromIterator<Chain> for Chains {
    fn from_iter<I: IntoIterator<Item = Chain>>(iter: I) -> Self {
        Chains(iter.into_iter().collect())
    }
}

impl IntoIterator for Chains {
    type Item = Chain;
    type IntoIter = std::vec::IntoIter<Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chains {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
