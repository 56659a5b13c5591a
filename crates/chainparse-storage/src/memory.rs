//! In-memory storage backend.
//!
//! Stores parsed blocks and transactions in RAM, with the query helpers the
//! pipeline's tooling needs. Useful for testing and short-lived parsers that
//! don't need persistence.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chainparse_core::config::Config;
use chainparse_core::error::ParseError;
use chainparse_core::logging::Logger;
use chainparse_core::types::{ChainBlock, ChainTransaction};
use chainparse_core::{Database, StorageBuilder};

/// In-memory parser storage.
///
/// All data is lost when the process exits.
#[derive(Default)]
pub struct InMemoryDatabase {
    blocks: Mutex<BTreeMap<u64, ChainBlock>>,
    transactions: Mutex<Vec<ChainTransaction>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously saved block.
    pub fn block(&self, height: u64) -> Option<ChainBlock> {
        self.blocks.lock().unwrap().get(&height).cloned()
    }

    /// Total number of saved blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.lock().unwrap().len()
    }

    /// All transactions saved for the block at `height`.
    pub fn transactions_at(&self, height: u64) -> Vec<ChainTransaction> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| tx.height == height)
            .cloned()
            .collect()
    }

    /// Total number of saved transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    /// Delete all blocks and transactions **above** `height`.
    ///
    /// Used when re-parsing a range after a faulty module run.
    pub fn prune_above(&self, height: u64) {
        let mut blocks = self.blocks.lock().unwrap();
        blocks.retain(|h, _| *h <= height);
        let mut txs = self.transactions.lock().unwrap();
        txs.retain(|tx| tx.height <= height);
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn save_block(&self, block: &ChainBlock) -> Result<(), ParseError> {
        self.blocks.lock().unwrap().insert(block.height, block.clone());
        Ok(())
    }

    async fn save_transactions(&self, txs: &[ChainTransaction]) -> Result<(), ParseError> {
        self.transactions.lock().unwrap().extend_from_slice(txs);
        Ok(())
    }

    async fn has_block(&self, height: u64) -> Result<bool, ParseError> {
        Ok(self.blocks.lock().unwrap().contains_key(&height))
    }

    async fn last_block_height(&self) -> Result<Option<u64>, ParseError> {
        Ok(self.blocks.lock().unwrap().keys().next_back().copied())
    }
}

// ─── StorageBuilder impl ─────────────────────────────────────────────────────

/// Storage builder for the in-memory backend.
///
/// Opens a fresh [`InMemoryDatabase`], ignoring the database section of the
/// configuration; suitable as an override for the builder's storage slot.
#[derive(Debug, Default)]
pub struct InMemoryStorageBuilder;

#[async_trait]
impl StorageBuilder for InMemoryStorageBuilder {
    async fn build(
        &self,
        _cfg: &Config,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Database>, ParseError> {
        logger.debug("opened in-memory database", &[]);
        Ok(Arc::new(InMemoryDatabase::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(height: u64) -> ChainBlock {
        ChainBlock {
            height,
            hash: format!("{height:064x}"),
            proposer: "cosmosvaloper1aaa".into(),
            timestamp: 1_700_000_000 + height as i64,
            tx_count: 1,
        }
    }

    fn tx(height: u64, hash: &str) -> ChainTransaction {
        ChainTransaction {
            hash: hash.into(),
            height,
            success: true,
            payload: serde_json::json!({
                "@type": "/cosmos.bank.v1beta1.MsgSend",
                "amount": height.to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn save_and_query_blocks() {
        let db = InMemoryDatabase::new();
        db.save_block(&block(100)).await.unwrap();
        db.save_block(&block(101)).await.unwrap();

        assert_eq!(db.block_count(), 2);
        assert!(db.has_block(100).await.unwrap());
        assert_eq!(db.block(101).unwrap().height, 101);
        assert_eq!(db.last_block_height().await.unwrap(), Some(101));
    }

    #[tokio::test]
    async fn save_and_query_transactions() {
        let db = InMemoryDatabase::new();
        db.save_transactions(&[tx(100, "a1"), tx(100, "a2"), tx(101, "b1")])
            .await
            .unwrap();

        let at_100 = db.transactions_at(100);
        assert_eq!(at_100.len(), 2);
        assert_eq!(at_100[0].hash, "a1");
        assert_eq!(db.transactions_at(999).len(), 0);
    }

    #[tokio::test]
    async fn builder_opens_usable_database() {
        use chainparse_core::logging::MemoryLogger;

        let logger = Arc::new(MemoryLogger::new());
        let db = InMemoryStorageBuilder
            .build(&Config::default(), logger.clone())
            .await
            .unwrap();

        db.save_block(&block(1)).await.unwrap();
        assert!(db.has_block(1).await.unwrap());
        assert_eq!(logger.len(), 1);
    }

    #[tokio::test]
    async fn prune_clears_data_above_height() {
        let db = InMemoryDatabase::new();
        for i in 100u64..=105 {
            db.save_block(&block(i)).await.unwrap();
            db.save_transactions(&[tx(i, &format!("tx{i}"))]).await.unwrap();
        }
        assert_eq!(db.block_count(), 6);

        db.prune_above(102);

        assert_eq!(db.block_count(), 3); // 100, 101, 102 remain
        assert!(!db.has_block(103).await.unwrap());
        assert!(db.has_block(102).await.unwrap());
        assert_eq!(db.transaction_count(), 3);
    }
}
