//! Storage contract, its builder, and the in-memory default.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::error::ParseError;
use crate::logging::Logger;
use crate::types::{ChainBlock, ChainTransaction};

// ─── Database ─────────────────────────────────────────────────────────────────

/// An open storage handle the parse pipeline writes into.
///
/// Implementations include [`MemoryDatabase`] and the backends in
/// `chainparse-storage`.
#[async_trait]
pub trait Database: Send + Sync {
    /// Persist (upsert) a block summary.
    async fn save_block(&self, block: &ChainBlock) -> Result<(), ParseError>;

    /// Persist the transactions of a block.
    async fn save_transactions(&self, txs: &[ChainTransaction]) -> Result<(), ParseError>;

    /// Returns `true` if the block at `height` was already saved.
    async fn has_block(&self, height: u64) -> Result<bool, ParseError>;

    /// Height of the highest saved block (`None` if the store is empty).
    async fn last_block_height(&self) -> Result<Option<u64>, ParseError>;
}

// ─── StorageBuilder ───────────────────────────────────────────────────────────

/// Builds an open storage handle from a resolved configuration.
///
/// Opening may involve blocking I/O (connecting, running migrations); any
/// failure propagates to the embedding application unmodified.
#[async_trait]
pub trait StorageBuilder: Send + Sync {
    async fn build(
        &self,
        cfg: &Config,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Database>, ParseError>;
}

// ─── In-memory default ────────────────────────────────────────────────────────

/// Minimal in-memory database, for tests and ephemeral parsers.
///
/// All data is lost when the process exits.
#[derive(Default)]
pub struct MemoryDatabase {
    blocks: Mutex<HashMap<u64, ChainBlock>>,
    transactions: Mutex<Vec<ChainTransaction>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.lock().unwrap().len()
    }

    /// Number of saved transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
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
        Ok(self.blocks.lock().unwrap().keys().max().copied())
    }
}

/// Default storage builder — opens a fresh [`MemoryDatabase`].
///
/// Ignores the database section of the configuration; nothing to connect to.
#[derive(Debug, Default)]
pub struct MemoryStorageBuilder;

#[async_trait]
impl StorageBuilder for MemoryStorageBuilder {
    async fn build(
        &self,
        _cfg: &Config,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Database>, ParseError> {
        logger.debug("opened in-memory database", &[]);
        Ok(Arc::new(MemoryDatabase::new()))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
