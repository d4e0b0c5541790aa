//! Chain classifiers
//!
//! Closed sets of tags used to describe a chain: its name, network family,
//! network type, virtual machine and consensus. Each tag has a fixed `i32`
//! wire value and a snake_case name.
//!
//! Converting a wire value with `TryFrom<i32>` is exhaustive: any value that
//! is not a declared tag is rejected, whether it is one past the last tag,
//! negative, or far out of range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

macro_rules! classifier {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal => $s:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $tag, )+
        }

        impl $name {
            /// Every declared tag, in wire order
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Get the tag as its snake_case name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $s, )+
                }
            }

            /// Get the wire value
            pub fn as_i32(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            /// The rejected wire value
            type Error = i32;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( $tag => Ok($name::$variant), )+
                    other => Err(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.as_i32()
            }
        }

        impl FromStr for $name {
            type Err = ChainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $s => Ok($name::$variant), )+
                    other => Err(ChainError::InvalidChain(format!(
                        "invalid {} ({})",
                        $what, other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

classifier! {
    /// Well-known chain names. `Empty` marks a chain with no registered name.
    ChainName, "chain name" {
        #[default]
        Empty = 0 => "empty",
        EthMainnet = 1 => "eth_mainnet",
        ZetaMainnet = 2 => "zeta_mainnet",
        BtcMainnet = 3 => "btc_mainnet",
        PolygonMainnet = 4 => "polygon_mainnet",
        BscMainnet = 5 => "bsc_mainnet",
        GoerliTestnet = 6 => "goerli_testnet",
        MumbaiTestnet = 7 => "mumbai_testnet",
        BscTestnet = 8 => "bsc_testnet",
        ZetaTestnet = 9 => "zeta_testnet",
        BtcTestnet = 10 => "btc_testnet",
        SepoliaTestnet = 11 => "sepolia_testnet",
        GoerliLocalnet = 12 => "goerli_localnet",
        BtcRegtest = 13 => "btc_regtest",
        AmoyTestnet = 14 => "amoy_testnet",
        OptimismMainnet = 15 => "optimism_mainnet",
        OptimismSepolia = 16 => "optimism_sepolia",
        BaseMainnet = 17 => "base_mainnet",
        BaseSepolia = 18 => "base_sepolia",
    }
}

classifier! {
    /// Network family a chain belongs to
    Network, "network" {
        #[default]
        Eth = 0 => "eth",
        Zeta = 1 => "zeta",
        Btc = 2 => "btc",
        Polygon = 3 => "polygon",
        Bsc = 4 => "bsc",
        Optimism = 5 => "optimism",
        Base = 6 => "base",
    }
}

classifier! {
    /// Deployment stage of a network
    NetworkType, "network type" {
        #[default]
        Mainnet = 0 => "mainnet",
        Testnet = 1 => "testnet",
        Privnet = 2 => "privnet",
        Devnet = 3 => "devnet",
    }
}

classifier! {
    /// Virtual machine executing contracts on the chain
    Vm, "vm" {
        #[default]
        NoVm = 0 => "no_vm",
        Evm = 1 => "evm",
    }
}

classifier! {
    /// Consensus or rollup stack securing the chain
    Consensus, "consensus" {
        #[default]
        Ethereum = 0 => "ethereum",
        Tendermint = 1 => "tendermint",
        Bitcoin = 2 => "bitcoin",
        OpStack = 3 => "op_stack",
    }
}
