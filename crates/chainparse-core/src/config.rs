//! Structured parser configuration and the pluggable config parser contract.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for a parser run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chain: ChainConfig,
    pub node: NodeConfig,
    pub database: DatabaseConfig,
    pub parsing: ParsingConfig,
}

/// Chain-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain identifier (e.g. `"cosmoshub-4"`).
    pub id: String,
    /// Bech32 address prefix (e.g. `"cosmos"`).
    pub bech32_prefix: String,
    /// Names of the modules enabled for this run.
    pub modules: Vec<String>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            id: "cosmoshub-4".into(),
            bech32_prefix: "cosmos".into(),
            modules: vec![],
        }
    }
}

/// Node connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// RPC endpoint of the chain node.
    pub rpc_address: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_address: "http://localhost:26657".into(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL or file path (backend-specific).
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "chainparse.db".into(),
            max_connections: 10,
        }
    }
}

/// Settings for the block-parsing loop itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Number of concurrent parse workers.
    pub workers: u32,
    /// First block height to parse.
    pub start_height: u64,
    /// Whether to follow newly produced blocks.
    pub listen_new_blocks: bool,
    /// Whether to re-parse blocks below the start height.
    pub parse_old_blocks: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            start_height: 1,
            listen_new_blocks: true,
            parse_old_blocks: false,
        }
    }
}

// ─── ConfigParser ─────────────────────────────────────────────────────────────

/// Turns raw configuration input into a structured [`Config`].
pub trait ConfigParser: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Result<Config, ParseError>;
}

/// Default config parser — reads a JSON document.
///
/// Missing sections and fields fall back to their defaults, so an empty
/// object (`{}`) is a valid configuration.
#[derive(Debug, Default)]
pub struct JsonConfigParser;

impl ConfigParser for JsonConfigParser {
    fn parse(&self, raw: &[u8]) -> Result<Config, ParseError> {
        serde_json::from_slice(raw).map_err(|e| ParseError::Config(e.to_string()))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
