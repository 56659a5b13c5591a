//! Shared types exchanged between the node and storage contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── ChainBlock ───────────────────────────────────────────────────────────────

/// A minimal summary of a chain block — enough for the parse pipeline to
/// track progress and for modules to key their work off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBlock {
    /// Block height.
    pub height: u64,
    /// Block hash (hex).
    pub hash: String,
    /// Address of the validator that proposed the block.
    pub proposer: String,
    /// Unix timestamp of the block (seconds since epoch).
    pub timestamp: i64,
    /// Number of transactions in the block.
    pub tx_count: u32,
}

impl ChainBlock {
    /// Returns `true` if `self` sits immediately after `prev` in the chain.
    pub fn follows(&self, prev: &ChainBlock) -> bool {
        self.height == prev.height + 1
    }

    /// The block time as a UTC datetime (`None` if the timestamp is out of range).
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

// ─── ChainTransaction ─────────────────────────────────────────────────────────

/// A transaction included in a block, with its decoded body kept as JSON
/// so modules can pick out the fields they care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainTransaction {
    /// Transaction hash (hex).
    pub hash: String,
    /// Height of the containing block.
    pub height: u64,
    /// Whether the transaction executed successfully.
    pub success: bool,
    /// Decoded transaction body.
    pub payload: serde_json::Value,
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn block(height: u64) -> ChainBlock {
        ChainBlock {
            height,
            hash: format!("{height:064x}"),
            proposer: "cosmosvaloper1aaa".into(),
            timestamp: 1_700_000_000 + height as i64,
            tx_count: 2,
        }
    }

    #[test]
    fn block_follows_parent() {
        let parent = block(100);
        let child = block(101);
        assert!(child.follows(&parent));
        assert!(!parent.follows(&child));
    }

    #[test]
    fn block_follows_false_on_gap() {
        let a = block(100);
        let b = block(102); // gap
        assert!(!b.follows(&a));
    }

    #[test]
    fn block_time_conversion() {
        let b = block(1);
        assert_eq!(b.time().unwrap().timestamp(), b.timestamp);
    }
}
