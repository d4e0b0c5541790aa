//! Chain Registry
//!
//! Built-in chain descriptors and lookups over them.
//!
//! The default table is built once per process and never mutated. Adding or
//! overwriting chains (e.g. from a governance update or configuration)
//! produces a new [`ChainRegistry`] version with [`ChainRegistry::with_chain`];
//! readers holding the previous version keep a complete, consistent table.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::chain::{Chain, Chains};
use crate::error::ChainError;
use crate::types::{ChainName, Consensus, Network, NetworkType, Vm};

// ============================================================================
// Platform Chains
// ============================================================================

pub const ZETA_CHAIN_MAINNET: Chain = Chain {
    chain_id: 7000,
    chain_name: ChainName::ZetaMainnet,
    network: Network::Zeta,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::Tendermint,
    is_external: false,
};

pub const ZETA_CHAIN_TESTNET: Chain = Chain {
    chain_id: 7001,
    chain_name: ChainName::ZetaTestnet,
    network: Network::Zeta,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Tendermint,
    is_external: false,
};

pub const ZETA_CHAIN_DEVNET: Chain = Chain {
    chain_id: 70000,
    chain_name: ChainName::ZetaMainnet,
    network: Network::Zeta,
    network_type: NetworkType::Devnet,
    vm: Vm::Evm,
    consensus: Consensus::Tendermint,
    is_external: false,
};

pub const ZETA_CHAIN_PRIVNET: Chain = Chain {
    chain_id: 101,
    chain_name: ChainName::ZetaMainnet,
    network: Network::Zeta,
    network_type: NetworkType::Privnet,
    vm: Vm::Evm,
    consensus: Consensus::Tendermint,
    is_external: false,
};

// ============================================================================
// Mainnets
// ============================================================================

pub const ETHEREUM: Chain = Chain {
    chain_id: 1,
    chain_name: ChainName::EthMainnet,
    network: Network::Eth,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const BSC_MAINNET: Chain = Chain {
    chain_id: 56,
    chain_name: ChainName::BscMainnet,
    network: Network::Bsc,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const BITCOIN_MAINNET: Chain = Chain {
    chain_id: 8332,
    chain_name: ChainName::BtcMainnet,
    network: Network::Btc,
    network_type: NetworkType::Mainnet,
    vm: Vm::NoVm,
    consensus: Consensus::Bitcoin,
    is_external: true,
};

pub const POLYGON: Chain = Chain {
    chain_id: 137,
    chain_name: ChainName::PolygonMainnet,
    network: Network::Polygon,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const OPTIMISM_MAINNET: Chain = Chain {
    chain_id: 10,
    chain_name: ChainName::OptimismMainnet,
    network: Network::Optimism,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::OpStack,
    is_external: true,
};

pub const BASE_MAINNET: Chain = Chain {
    chain_id: 8453,
    chain_name: ChainName::BaseMainnet,
    network: Network::Base,
    network_type: NetworkType::Mainnet,
    vm: Vm::Evm,
    consensus: Consensus::OpStack,
    is_external: true,
};

// ============================================================================
// Testnets
// ============================================================================

pub const SEPOLIA: Chain = Chain {
    chain_id: 11155111,
    chain_name: ChainName::SepoliaTestnet,
    network: Network::Eth,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

/// Deprecated upstream; kept so historical transfers still resolve
pub const GOERLI: Chain = Chain {
    chain_id: 5,
    chain_name: ChainName::GoerliTestnet,
    network: Network::Eth,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const BSC_TESTNET: Chain = Chain {
    chain_id: 97,
    chain_name: ChainName::BscTestnet,
    network: Network::Bsc,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const BITCOIN_TESTNET: Chain = Chain {
    chain_id: 18332,
    chain_name: ChainName::BtcTestnet,
    network: Network::Btc,
    network_type: NetworkType::Testnet,
    vm: Vm::NoVm,
    consensus: Consensus::Bitcoin,
    is_external: true,
};

/// Deprecated upstream in favour of Amoy
pub const MUMBAI: Chain = Chain {
    chain_id: 80001,
    chain_name: ChainName::MumbaiTestnet,
    network: Network::Polygon,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const AMOY: Chain = Chain {
    chain_id: 80002,
    chain_name: ChainName::AmoyTestnet,
    network: Network::Polygon,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

pub const OPTIMISM_SEPOLIA: Chain = Chain {
    chain_id: 11155420,
    chain_name: ChainName::OptimismSepolia,
    network: Network::Optimism,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::OpStack,
    is_external: true,
};

pub const BASE_SEPOLIA: Chain = Chain {
    chain_id: 84532,
    chain_name: ChainName::BaseSepolia,
    network: Network::Base,
    network_type: NetworkType::Testnet,
    vm: Vm::Evm,
    consensus: Consensus::OpStack,
    is_external: true,
};

// ============================================================================
// Privnets
// ============================================================================

pub const BITCOIN_REGTEST: Chain = Chain {
    chain_id: 18444,
    chain_name: ChainName::BtcRegtest,
    network: Network::Btc,
    network_type: NetworkType::Privnet,
    vm: Vm::NoVm,
    consensus: Consensus::Bitcoin,
    is_external: true,
};

pub const GOERLI_LOCALNET: Chain = Chain {
    chain_id: 1337,
    chain_name: ChainName::GoerliLocalnet,
    network: Network::Eth,
    network_type: NetworkType::Privnet,
    vm: Vm::Evm,
    consensus: Consensus::Ethereum,
    is_external: true,
};

/// Every built-in chain, mainnets first
pub fn default_chains_list() -> Chains {
    Chains(vec![
        ZETA_CHAIN_MAINNET,
        ETHEREUM,
        BSC_MAINNET,
        BITCOIN_MAINNET,
        POLYGON,
        OPTIMISM_MAINNET,
        BASE_MAINNET,
        ZETA_CHAIN_TESTNET,
        SEPOLIA,
        GOERLI,
        BSC_TESTNET,
        BITCOIN_TESTNET,
        MUMBAI,
        AMOY,
        OPTIMISM_SEPOLIA,
        BASE_SEPOLIA,
        ZETA_CHAIN_DEVNET,
        ZETA_CHAIN_PRIVNET,
        BITCOIN_REGTEST,
        GOERLI_LOCALNET,
    ])
}

// ============================================================================
// Registry Table
// ============================================================================

/// Immutable table of chain descriptors keyed by chain ID.
///
/// Chains keep their registration order; overwriting a chain keeps its
/// original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: Vec<Chain>,
    /// Index by chain ID → position in `chains`
    chain_id_map: HashMap<i64, usize>,
}

impl Default for ChainRegistry {
    /// The built-in table from [`default_chains_list`]
    fn default() -> Self {
        Self::build(default_chains_list())
    }
}

impl ChainRegistry {
    /// Create a registry from a list of chains, validating each one.
    ///
    /// A later chain with the same ID overwrites an earlier one.
    pub fn new(chains: impl IntoIterator<Item = Chain>) -> Result<Self, ChainError> {
        let chains: Vec<Chain> = chains.into_iter().collect();
        for chain in &chains {
            chain.validate()?;
        }
        Ok(Self::build(chains))
    }

    fn build(chains: impl IntoIterator<Item = Chain>) -> Self {
        let mut registry = Self {
            chains: Vec::new(),
            chain_id_map: HashMap::new(),
        };
        for chain in chains {
            registry.upsert(chain);
        }
        registry
    }

    /// Insert or overwrite; returns the replaced chain if any
    fn upsert(&mut self, chain: Chain) -> Option<Chain> {
        match self.chain_id_map.get(&chain.chain_id) {
            Some(&idx) => Some(std::mem::replace(&mut self.chains[idx], chain)),
            None => {
                self.chain_id_map.insert(chain.chain_id, self.chains.len());
                self.chains.push(chain);
                None
            }
        }
    }

    /// Produce a new registry version with `chain` added or overwritten.
    ///
    /// The chain is validated first; on error no new version is produced.
    pub fn with_chain(&self, chain: Chain) -> Result<Self, ChainError> {
        self.with_chains([chain])
    }

    /// Produce a new registry version with every chain in `chains` applied in
    /// order. Any invalid chain aborts the whole update.
    pub fn with_chains(
        &self,
        chains: impl IntoIterator<Item = Chain>,
    ) -> Result<Self, ChainError> {
        let mut next = self.clone();
        for chain in chains {
            chain.validate()?;
            match next.upsert(chain) {
                Some(previous) if is_built_in_chain(chain.chain_id) => tracing::warn!(
                    chain_id = chain.chain_id,
                    previous = %previous,
                    updated = %chain,
                    "Overwriting built-in chain"
                ),
                Some(previous) => tracing::info!(
                    chain_id = chain.chain_id,
                    previous = %previous,
                    updated = %chain,
                    "Overwriting registered chain"
                ),
                None => tracing::info!(
                    chain_id = chain.chain_id,
                    network = %chain.network,
                    network_type = %chain.network_type,
                    "Registered chain"
                ),
            }
        }
        Ok(next)
    }

    /// Get chain by ID
    pub fn get(&self, chain_id: i64) -> Option<&Chain> {
        self.chain_id_map
            .get(&chain_id)
            .map(|&idx| &self.chains[idx])
    }

    pub fn contains(&self, chain_id: i64) -> bool {
        self.chain_id_map.contains_key(&chain_id)
    }

    /// All chains in registration order
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Chains matching `pred`, in registration order
    pub fn filter(&self, pred: impl Fn(&Chain) -> bool) -> Chains {
        self.chains.iter().filter(|c| pred(c)).copied().collect()
    }

    pub fn by_network(&self, network: Network) -> Chains {
        self.filter(|c| c.network == network)
    }

    pub fn by_network_type(&self, network_type: NetworkType) -> Chains {
        self.filter(|c| c.network_type == network_type)
    }

    pub fn by_consensus(&self, consensus: Consensus) -> Chains {
        self.filter(|c| c.consensus == consensus)
    }

    pub fn external_chains(&self) -> Chains {
        self.filter(Chain::is_external_chain)
    }

    pub fn header_supported_chains(&self) -> Chains {
        self.filter(Chain::is_header_supported_chain)
    }

    // Routing predicates: unknown IDs are never an error, just false.

    pub fn is_zeta_chain(&self, chain_id: i64) -> bool {
        self.get(chain_id).is_some_and(Chain::is_zeta_chain)
    }

    pub fn is_evm_chain(&self, chain_id: i64) -> bool {
        self.get(chain_id).is_some_and(Chain::is_evm_chain)
    }

    pub fn is_bitcoin_chain(&self, chain_id: i64) -> bool {
        self.get(chain_id).is_some_and(Chain::is_bitcoin_chain)
    }

    pub fn is_ethereum_chain(&self, chain_id: i64) -> bool {
        self.get(chain_id).is_some_and(Chain::is_ethereum_chain)
    }

    pub fn is_header_supported_chain(&self, chain_id: i64) -> bool {
        self.get(chain_id).is_some_and(Chain::is_header_supported_chain)
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: ChainRegistry = ChainRegistry::default();
}

/// The process-wide built-in registry
pub fn default_registry() -> &'static ChainRegistry {
    &DEFAULT_REGISTRY
}

// ============================================================================
// Lookups Over the Built-in Registry
// ============================================================================

/// Get a built-in chain by ID
pub fn get_chain_from_chain_id(chain_id: i64) -> Option<Chain> {
    default_registry().get(chain_id).copied()
}

/// Built-in chains of the given network family
pub fn chain_list_by_network(network: Network) -> Chains {
    default_registry().by_network(network)
}

pub fn chain_list_by_network_type(network_type: NetworkType) -> Chains {
    default_registry().by_network_type(network_type)
}

pub fn chain_list_by_consensus(consensus: Consensus) -> Chains {
    default_registry().by_consensus(consensus)
}

/// Built-in chains external to the platform
pub fn external_chain_list() -> Chains {
    default_registry().external_chains()
}

/// Built-in chains whose block headers can be tracked
pub fn chain_list_for_header_support() -> Chains {
    default_registry().header_supported_chains()
}

/// True if a chain with `chain_id` is in `list`
pub fn chain_id_in_chain_list(chain_id: i64, list: &[Chain]) -> bool {
    list.iter().any(|c| c.chain_id == chain_id)
}

pub fn is_zeta_chain(chain_id: i64) -> bool {
    default_registry().is_zeta_chain(chain_id)
}

pub fn is_evm_chain(chain_id: i64) -> bool {
    default_registry().is_evm_chain(chain_id)
}

pub fn is_bitcoin_chain(chain_id: i64) -> bool {
    default_registry().is_bitcoin_chain(chain_id)
}

pub fn is_ethereum_chain(chain_id: i64) -> bool {
    default_registry().is_ethereum_chain(chain_id)
}

pub fn is_header_supported_chain(chain_id: i64) -> bool {
    default_registry().is_header_supported_chain(chain_id)
}

/// Resolve a Cosmos-style chain ID string to a platform chain.
///
/// The format is `<name>_<number>-<revision>`, e.g. `zetachain_7000-1` or
/// `athens_7001-1`. `<number>` must be the ID of a built-in platform chain.
pub fn zeta_chain_from_cosmos_chain_id(cosmos_chain_id: &str) -> Result<Chain, ChainError> {
    let malformed = || {
        ChainError::InvalidChain(format!(
            "malformed cosmos chain ID: {:?} (expected <name>_<number>-<revision>)",
            cosmos_chain_id
        ))
    };

    let (name, rest) = cosmos_chain_id.rsplit_once('_').ok_or_else(malformed)?;
    let (number, revision) = rest.split_once('-').ok_or_else(malformed)?;
    if name.is_empty() || !is_ascii_number(number) || !is_ascii_number(revision) {
        return Err(malformed());
    }
    let chain_id: i64 = number.parse().map_err(|_| malformed())?;

    match get_chain_from_chain_id(chain_id) {
        Some(chain) if chain.is_zeta_chain() => Ok(chain),
        _ => Err(ChainError::InvalidChain(format!(
            "cosmos chain ID {} does not name a platform chain",
            cosmos_chain_id
        ))),
    }
}

/// True if `chain_id` is one of the built-in chains
fn is_built_in_chain(chain_id: i64) -> bool {
    default_registry().contains(chain_id)
}

fn is_ascii_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_default_chains_are_valid() {
        for chain in default_chains_list() {
            assert!(chain.validate().is_ok(), "invalid default chain: {}", chain);
        }
    }

    #[test]
    fn test_default_chain_ids_are_unique() {
        let chains = default_chains_list();
        assert_eq!(chains.distinct().len(), chains.len());
        assert_eq!(default_registry().len(), chains.len());
    }

    #[test]
    fn test_only_platform_chains_are_internal() {
        for chain in default_chains_list() {
            assert_eq!(chain.is_external, !chain.is_zeta_chain(), "{}", chain);
        }
    }

    #[test]
    fn test_get_chain_from_chain_id() {
        let chain = get_chain_from_chain_id(ZETA_CHAIN_MAINNET.chain_id);
        assert_eq!(chain, Some(ZETA_CHAIN_MAINNET));
        assert!(get_chain_from_chain_id(9999).is_none());
    }

    #[test]
    fn test_chain_id_in_chain_list() {
        let zeta_chains = chain_list_by_network(Network::Zeta);
        assert!(chain_id_in_chain_list(ZETA_CHAIN_MAINNET.chain_id, &zeta_chains));
        assert!(!chain_id_in_chain_list(ETHEREUM.chain_id, &zeta_chains));
    }

    #[test]
    fn test_chain_list_by_network() {
        let btc: Vec<i64> = chain_list_by_network(Network::Btc)
            .iter()
            .map(|c| c.chain_id)
            .collect();
        assert_eq!(btc, vec![8332, 18332, 18444]);

        assert_eq!(chain_list_by_network(Network::Zeta).len(), 4);
    }

    #[test]
    fn test_chain_list_by_network_type_and_consensus() {
        let privnets = chain_list_by_network_type(NetworkType::Privnet);
        assert!(privnets.has(&BITCOIN_REGTEST));
        assert!(privnets.has(&GOERLI_LOCALNET));
        assert!(privnets.has(&ZETA_CHAIN_PRIVNET));
        assert!(!privnets.has(&ETHEREUM));

        let op_stack = chain_list_by_consensus(Consensus::OpStack);
        assert_eq!(op_stack.len(), 4);
        assert!(op_stack.iter().all(|c| c.vm == Vm::Evm));
    }

    #[test]
    fn test_external_chain_list() {
        let external = external_chain_list();
        assert!(external.iter().all(|c| !c.is_zeta_chain()));
        assert_eq!(external.len(), default_chains_list().len() - 4);
    }

    #[test]
    fn test_chain_list_for_header_support() {
        let chains = chain_list_for_header_support();
        assert!(chains.has(&ETHEREUM));
        assert!(chains.has(&BITCOIN_MAINNET));
        assert!(!chains.has(&ZETA_CHAIN_MAINNET));
        assert!(!chains.has(&BASE_MAINNET));
    }

    #[test]
    fn test_is_zeta_chain() {
        let cases = [
            ("Zeta Mainnet", ZETA_CHAIN_MAINNET.chain_id, true),
            ("Zeta Testnet", ZETA_CHAIN_TESTNET.chain_id, true),
            ("Zeta Devnet", ZETA_CHAIN_DEVNET.chain_id, true),
            ("Zeta Privnet", ZETA_CHAIN_PRIVNET.chain_id, true),
            ("Non-Zeta", ETHEREUM.chain_id, false),
            ("Unknown", 9999, false),
        ];
        for (name, chain_id, want) in cases {
            assert_eq!(is_zeta_chain(chain_id), want, "{}", name);
        }

        for chain in external_chain_list() {
            assert!(!is_zeta_chain(chain.chain_id), "{}", chain);
        }
    }

    #[test]
    fn test_is_evm_chain() {
        let cases = [
            ("Ethereum Mainnet", ETHEREUM.chain_id, true),
            ("Goerli Testnet", GOERLI.chain_id, true),
            ("Sepolia Testnet", SEPOLIA.chain_id, true),
            ("Base Sepolia", BASE_SEPOLIA.chain_id, true),
            ("Non-EVM", BITCOIN_MAINNET.chain_id, false),
            ("Zeta Mainnet", ZETA_CHAIN_MAINNET.chain_id, false),
            ("Unknown", 9999, false),
        ];
        for (name, chain_id, want) in cases {
            assert_eq!(is_evm_chain(chain_id), want, "{}", name);
        }
    }

    #[test]
    fn test_is_header_supported_chain() {
        let cases = [
            ("Ethereum Mainnet", ETHEREUM.chain_id, true),
            ("Goerli Testnet", GOERLI.chain_id, true),
            ("Goerli Localnet", GOERLI_LOCALNET.chain_id, true),
            ("Sepolia Testnet", SEPOLIA.chain_id, true),
            ("BSC Testnet", BSC_TESTNET.chain_id, true),
            ("BSC Mainnet", BSC_MAINNET.chain_id, true),
            ("BTC", BITCOIN_MAINNET.chain_id, true),
            ("Zeta Mainnet", ZETA_CHAIN_MAINNET.chain_id, false),
        ];
        for (name, chain_id, want) in cases {
            assert_eq!(is_header_supported_chain(chain_id), want, "{}", name);
        }
    }

    #[test]
    fn test_is_bitcoin_chain() {
        let cases = [
            ("Bitcoin Mainnet", BITCOIN_MAINNET.chain_id, true),
            ("Bitcoin Testnet", BITCOIN_TESTNET.chain_id, true),
            ("Bitcoin Regtest", BITCOIN_REGTEST.chain_id, true),
            ("Non-Bitcoin", ETHEREUM.chain_id, false),
            ("Zeta Mainnet", ZETA_CHAIN_MAINNET.chain_id, false),
        ];
        for (name, chain_id, want) in cases {
            assert_eq!(is_bitcoin_chain(chain_id), want, "{}", name);
        }
    }

    #[test]
    fn test_is_ethereum_chain() {
        let cases = [
            ("Ethereum Mainnet", ETHEREUM.chain_id, true),
            ("Goerli Testnet", GOERLI.chain_id, true),
            ("Sepolia Testnet", SEPOLIA.chain_id, true),
            ("Non-Ethereum", BITCOIN_MAINNET.chain_id, false),
            ("Zeta Mainnet", ZETA_CHAIN_MAINNET.chain_id, false),
            ("Polygon", POLYGON.chain_id, false),
        ];
        for (name, chain_id, want) in cases {
            assert_eq!(is_ethereum_chain(chain_id), want, "{}", name);
        }
    }

    #[test]
    fn test_with_chain_adds_new_version() {
        let arbitrum = Chain {
            chain_id: 42161,
            chain_name: ChainName::Empty,
            ..ETHEREUM
        };

        let base = ChainRegistry::default();
        let next = base.with_chain(arbitrum).unwrap();

        assert_eq!(next.len(), base.len() + 1);
        assert_eq!(next.get(42161), Some(&arbitrum));
        assert!(next.is_evm_chain(42161));

        // The previous version is untouched
        assert!(!base.contains(42161));
        assert!(!is_evm_chain(42161));
    }

    #[test]
    fn test_with_chain_overwrites_in_place() {
        let base = ChainRegistry::default();
        let position = base
            .chains()
            .iter()
            .position(|c| c.chain_id == GOERLI.chain_id)
            .unwrap();

        let updated = Chain {
            network_type: NetworkType::Devnet,
            ..GOERLI
        };
        let next = base.with_chain(updated).unwrap();

        assert_eq!(next.len(), base.len());
        assert_eq!(next.chains()[position], updated);
        assert_eq!(base.get(GOERLI.chain_id), Some(&GOERLI));
    }

    #[test]
    fn test_overwrite_of_built_in_vs_added_chain() {
        let arbitrum = Chain {
            chain_id: 42161,
            ..ETHEREUM
        };
        let with_arbitrum = ChainRegistry::default().with_chain(arbitrum).unwrap();

        // Built-in IDs are only those of the default table, not later additions
        assert!(is_built_in_chain(GOERLI.chain_id));
        assert!(!is_built_in_chain(arbitrum.chain_id));

        let arbitrum_testnet = Chain {
            network_type: NetworkType::Testnet,
            ..arbitrum
        };
        let next = with_arbitrum.with_chain(arbitrum_testnet).unwrap();
        assert_eq!(next.len(), with_arbitrum.len());
        assert_eq!(next.get(42161), Some(&arbitrum_testnet));
    }

    #[test]
    fn test_with_chains_rejects_invalid_without_partial_update() {
        let base = ChainRegistry::default();
        let good = Chain {
            chain_id: 42161,
            ..ETHEREUM
        };
        let bad = Chain {
            chain_id: 0,
            ..ETHEREUM
        };

        let result = base.with_chains([good, bad]);
        assert!(matches!(result, Err(ChainError::InvalidChain(_))));
        assert!(!base.contains(42161));
    }

    #[test]
    fn test_new_validates_chains() {
        assert!(ChainRegistry::new([ETHEREUM, BITCOIN_MAINNET]).is_ok());
        assert!(ChainRegistry::new([Chain::default()]).is_err());

        let empty = ChainRegistry::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_zeta_chain(ZETA_CHAIN_MAINNET.chain_id));
    }

    #[test]
    fn test_zeta_chain_from_cosmos_chain_id() {
        assert_eq!(
            zeta_chain_from_cosmos_chain_id("zetachain_7000-1"),
            Ok(ZETA_CHAIN_MAINNET)
        );
        assert_eq!(
            zeta_chain_from_cosmos_chain_id("athens_7001-1"),
            Ok(ZETA_CHAIN_TESTNET)
        );
        assert_eq!(
            zeta_chain_from_cosmos_chain_id("athens_101-1"),
            Ok(ZETA_CHAIN_PRIVNET)
        );
    }

    #[test]
    fn test_zeta_chain_from_cosmos_chain_id_rejects_malformed() {
        for input in [
            "",
            "zetachain",
            "zetachain_7000",
            "_7000-1",
            "zetachain_abc-1",
            "zetachain_7000-x",
            "zetachain_1-1",
            "zetachain_9999-1",
            "zetachain_+7000-1",
            "zetachain_7000-+1",
            "zetachain_+7000-+1",
            "zetachain_7000-",
        ] {
            assert!(
                zeta_chain_from_cosmos_chain_id(input).is_err(),
                "expected error for {:?}",
                input
            );
        }
    }
}
