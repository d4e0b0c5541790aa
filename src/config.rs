//! Registry Configuration
//!
//! Extra chains layered over the built-in registry, loaded from environment
//! variables (optionally from a `.env` file first).
//!
//! # Environment Variable Schema
//!
//! ```text
//! EXTRA_CHAINS_COUNT=1                   # Number of extra chains
//! EXTRA_CHAIN_1_CHAIN_ID=42161           # Positive chain ID
//! EXTRA_CHAIN_1_NETWORK=eth              # eth, zeta, btc, polygon, bsc, optimism, base
//! EXTRA_CHAIN_1_NETWORK_TYPE=mainnet     # mainnet, testnet, privnet, devnet
//! EXTRA_CHAIN_1_VM=evm                   # evm, no_vm
//! EXTRA_CHAIN_1_CONSENSUS=ethereum       # ethereum, tendermint, bitcoin, op_stack
//! EXTRA_CHAIN_1_CHAIN_NAME=empty         # optional, default empty
//! EXTRA_CHAIN_1_IS_EXTERNAL=true         # optional, default true
//! ```

use eyre::{eyre, Result, WrapErr};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use crate::chain::Chain;
use crate::registry::ChainRegistry;
use crate::types::ChainName;

/// Chains to add to (or overwrite in) the built-in registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub extra_chains: Vec<Chain>,
}

impl RegistryConfig {
    /// Load configuration from environment variables
    /// Loads .env file if present, then reads from environment
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::load_from_env()
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Result<Self> {
        Self::load_from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// Returns an empty config if `EXTRA_CHAINS_COUNT` is unset or 0.
    pub fn load_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count: usize = match lookup("EXTRA_CHAINS_COUNT") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| eyre!("Invalid EXTRA_CHAINS_COUNT: must be a non-negative integer"))?,
            None => return Ok(Self::default()),
        };

        let mut extra_chains = Vec::new();
        for i in 1..=count {
            extra_chains.push(load_chain(&lookup, i)?);
        }

        let config = Self { extra_chains };
        config.validate()?;

        tracing::debug!(count = config.extra_chains.len(), "Loaded extra chain config");
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for chain in &self.extra_chains {
            chain
                .validate()
                .wrap_err_with(|| format!("Extra chain {} is invalid", chain.chain_id))?;
            if !seen.insert(chain.chain_id) {
                return Err(eyre!("Duplicate extra chain ID: {}", chain.chain_id));
            }
        }
        Ok(())
    }

    /// Build the built-in registry with the extra chains applied
    pub fn build_registry(&self) -> Result<ChainRegistry> {
        ChainRegistry::default()
            .with_chains(self.extra_chains.iter().copied())
            .wrap_err("Failed to apply extra chains to registry")
    }
}

fn load_chain<F>(lookup: &F, index: usize) -> Result<Chain>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = format!("EXTRA_CHAIN_{}", index);

    let chain_id: i64 = required(lookup, &prefix, "CHAIN_ID")?
        .parse()
        .map_err(|_| eyre!("Invalid {}_CHAIN_ID: must be an integer", prefix))?;

    let chain_name = match lookup(&format!("{}_CHAIN_NAME", prefix)) {
        Some(s) => parse_tag(&prefix, "CHAIN_NAME", &s)?,
        None => ChainName::Empty,
    };

    let is_external = match lookup(&format!("{}_IS_EXTERNAL", prefix)) {
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| eyre!("Invalid {}_IS_EXTERNAL: must be true or false", prefix))?,
        None => true,
    };

    Ok(Chain {
        chain_id,
        chain_name,
        network: parse_tag(&prefix, "NETWORK", &required(lookup, &prefix, "NETWORK")?)?,
        network_type: parse_tag(
            &prefix,
            "NETWORK_TYPE",
            &required(lookup, &prefix, "NETWORK_TYPE")?,
        )?,
        vm: parse_tag(&prefix, "VM", &required(lookup, &prefix, "VM")?)?,
        consensus: parse_tag(&prefix, "CONSENSUS", &required(lookup, &prefix, "CONSENSUS")?)?,
        is_external,
    })
}

fn required<F>(lookup: &F, prefix: &str, field: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&format!("{}_{}", prefix, field)).ok_or_else(|| eyre!("Missing {}_{}", prefix, field))
}

fn parse_tag<T>(prefix: &str, field: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .to_ascii_lowercase()
        .parse()
        .wrap_err_with(|| format!("Invalid {}_{}", prefix, field))
}
