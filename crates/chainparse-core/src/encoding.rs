//! Encoding configuration and its pluggable builder contract.

use serde::{Deserialize, Serialize};

// ─── EncodingConfig ───────────────────────────────────────────────────────────

/// Serialization configuration for a parser run: the set of message types the
/// codec can decode, in type-URL form, and the name of the builder that
/// produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Registered message type URLs (e.g. `"/cosmos.bank.v1beta1.MsgSend"`).
    pub registered_types: Vec<String>,
    /// Name of the builder that produced this configuration (e.g. `"test"`).
    pub builder: String,
}

impl EncodingConfig {
    /// Returns `true` if `type_url` is registered.
    pub fn supports(&self, type_url: &str) -> bool {
        self.registered_types.iter().any(|t| t == type_url)
    }
}

// ─── EncodingConfigBuilder ────────────────────────────────────────────────────

/// Produces the encoding configuration; takes no input.
pub trait EncodingConfigBuilder: Send + Sync {
    fn build(&self) -> EncodingConfig;
}

/// Default encoding builder.
///
/// Registers only the handful of standard message types needed to exercise a
/// pipeline in tests. Production deployments supply their own builder with
/// the full type set for their chain.
#[derive(Debug, Default)]
pub struct TestEncodingConfigBuilder;

impl EncodingConfigBuilder for TestEncodingConfigBuilder {
    fn build(&self) -> EncodingConfig {
        EncodingConfig {
            registered_types: vec![
                "/cosmos.bank.v1beta1.MsgSend".into(),
                "/cosmos.staking.v1beta1.MsgDelegate".into(),
                "/cosmos.gov.v1beta1.MsgVote".into(),
            ],
            builder: "test".into(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
