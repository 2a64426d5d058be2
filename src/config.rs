use clap::{Parser, ValueEnum};
use std::{path::PathBuf, time::Duration};

pub const ACCESS_NODE_ENV: &str = "FLOW_ACCESS_NODE";

#[derive(Debug, Parser)]
#[command(name = "flow-account-tui", version, about)]
pub struct Cli {
    /// Account address to open, with or without `0x`
    pub address: Option<String>,

    #[arg(long, value_enum, default_value_t = Network::Mainnet)]
    pub network: Network,

    /// Flow REST access node, overrides the network default
    #[arg(long, env = ACCESS_NODE_ENV)]
    pub access_node: Option<String>,

    /// HTTP timeout for access node requests
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Directory for settings and logs
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Mainnet,
    Testnet,
    Emulator,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Emulator => "Emulator",
        }
    }

    pub fn default_access_node(self) -> &'static str {
        match self {
            Network::Mainnet => "https://rest-mainnet.onflow.org",
            Network::Testnet => "https://rest-testnet.onflow.org",
            Network::Emulator => "http://localhost:8888",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessNodeSource {
    Flag,
    Stored,
    NetworkDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    pub url: String,
    pub source: AccessNodeSource,
}

/// Runtime settings after merging CLI, environment and persisted values.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: Network,
    pub access_node: AccessNode,
    pub timeout: Duration,
    pub initial_address: Option<String>,
}

impl Config {
    /// Flag (or `FLOW_ACCESS_NODE`, which clap folds into the flag) wins over
    /// the stored URL, which wins over the network default. The CLI address
    /// wins over the last viewed one.
    pub fn resolve(cli: &Cli, stored_node: Option<String>, last_address: Option<String>) -> Self {
        let access_node = match (non_empty(cli.access_node.clone()), non_empty(stored_node)) {
            (Some(url), _) => AccessNode {
                url,
                source: AccessNodeSource::Flag,
            },
            (None, Some(url)) => AccessNode {
                url,
                source: AccessNodeSource::Stored,
            },
            (None, None) => AccessNode {
                url: cli.network.default_access_node().to_string(),
                source: AccessNodeSource::NetworkDefault,
            },
        };

        Self {
            network: cli.network,
            access_node,
            timeout: Duration::from_secs(cli.timeout_secs),
            initial_address: non_empty(cli.address.clone()).or_else(|| non_empty(last_address)),
        }
    }
}

pub fn validate_access_node(url: &str) -> Result<(), &'static str> {
    let url = url.trim();
    if url.is_empty() {
        return Err("Access node URL is required");
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("Access node URL must start with http:// or https://");
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
