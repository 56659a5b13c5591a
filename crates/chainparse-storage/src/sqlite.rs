//! SQLite storage backend for ChainParse.
//!
//! Persists blocks and transactions to a single SQLite file. Uses `sqlx`
//! with WAL mode for concurrent read performance.
//!
//! # Usage
//! ```rust,no_run
//! use chainparse_storage::sqlite::SqliteDatabase;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // File-backed (persistent)
//! let db = SqliteDatabase::open("./chainparse.db").await?;
//!
//! // In-memory (tests / ephemeral)
//! let db = SqliteDatabase::in_memory().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tracing::debug;

use chainparse_core::config::Config;
use chainparse_core::error::ParseError;
use chainparse_core::logging::Logger;
use chainparse_core::types::{ChainBlock, ChainTransaction};
use chainparse_core::{Database, StorageBuilder};

/// SQLite-backed storage for parsed blocks and transactions.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a SQLite database at `path`.
    ///
    /// The path may be a plain file path (`"./chainparse.db"`) or a full
    /// SQLite URL (`"sqlite:./chainparse.db?mode=rwc"`).
    pub async fn open(path: &str) -> Result<Self, ParseError> {
        let url = if path.starts_with("sqlite:") {
            path.to_string()
        } else {
            format!("sqlite:{path}?mode=rwc")
        };

        let pool = SqlitePool::connect(&url)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Open an in-memory SQLite database.
    ///
    /// All data is lost when the pool is dropped. Ideal for tests.
    pub async fn in_memory() -> Result<Self, ParseError> {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Create tables and enable WAL mode.
    async fn init_schema(&self) -> Result<(), ParseError> {
        // WAL mode — better concurrent read throughput
        sqlx::query("PRAGMA journal_mode=WAL;")
            .execute(&self.pool)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS blocks (
                height     INTEGER PRIMARY KEY,
                hash       TEXT    NOT NULL,
                proposer   TEXT    NOT NULL,
                timestamp  INTEGER NOT NULL,
                tx_count   INTEGER NOT NULL,
                indexed_at INTEGER NOT NULL
            );",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ParseError::Storage(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS transactions (
                id      INTEGER PRIMARY KEY AUTOINCREMENT,
                hash    TEXT    NOT NULL,
                height  INTEGER NOT NULL,
                success INTEGER NOT NULL,
                payload TEXT    NOT NULL
            );",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ParseError::Storage(e.to_string()))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_transactions_height ON transactions (height);",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ParseError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Total number of saved blocks.
    pub async fn block_count(&self) -> Result<u64, ParseError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM blocks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        let cnt: i64 = row.get("cnt");
        Ok(cnt as u64)
    }

    /// All transactions saved for the block at `height`, in insertion order.
    pub async fn transactions_at(&self, height: u64) -> Result<Vec<ChainTransaction>, ParseError> {
        let rows = sqlx::query(
            "SELECT hash, height, success, payload
             FROM transactions WHERE height = ? ORDER BY id",
        )
        .bind(height as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ParseError::Storage(e.to_string()))?;

        let mut txs = Vec::with_capacity(rows.len());
        for row in rows {
            let payload_str: String = row.get("payload");
            let payload: serde_json::Value =
                serde_json::from_str(&payload_str).unwrap_or(serde_json::Value::Null);

            txs.push(ChainTransaction {
                hash: row.get("hash"),
                height: row.get::<i64, _>("height") as u64,
                success: row.get::<i64, _>("success") != 0,
                payload,
            });
        }
        Ok(txs)
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn save_block(&self, block: &ChainBlock) -> Result<(), ParseError> {
        sqlx::query(
            "INSERT OR REPLACE INTO blocks (height, hash, proposer, timestamp, tx_count, indexed_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(block.height as i64)
        .bind(&block.hash)
        .bind(&block.proposer)
        .bind(block.timestamp)
        .bind(block.tx_count as i64)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| ParseError::Storage(e.to_string()))?;

        debug!(height = block.height, "block stored");
        Ok(())
    }

    async fn save_transactions(&self, txs: &[ChainTransaction]) -> Result<(), ParseError> {
        for tx in txs {
            let payload = serde_json::to_string(&tx.payload)
                .map_err(|e| ParseError::Storage(e.to_string()))?;

            sqlx::query(
                "INSERT INTO transactions (hash, height, success, payload)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(&tx.hash)
            .bind(tx.height as i64)
            .bind(tx.success as i64)
            .bind(&payload)
            .execute(&self.pool)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    async fn has_block(&self, height: u64) -> Result<bool, ParseError> {
        let row = sqlx::query("SELECT height FROM blocks WHERE height = ?")
            .bind(height as i64)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn last_block_height(&self) -> Result<Option<u64>, ParseError> {
        let row = sqlx::query("SELECT MAX(height) as max_height FROM blocks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ParseError::Storage(e.to_string()))?;

        let max: Option<i64> = row.get("max_height");
        Ok(max.map(|h| h as u64))
    }
}

// ─── StorageBuilder impl ─────────────────────────────────────────────────────

/// Storage builder for the SQLite backend.
///
/// Opens the database at `config.database.url`; suitable as an override for
/// the builder's storage slot.
#[derive(Debug, Default)]
pub struct SqliteStorageBuilder;

#[async_trait]
impl StorageBuilder for SqliteStorageBuilder {
    async fn build(
        &self,
        cfg: &Config,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Database>, ParseError> {
        let db = SqliteDatabase::open(&cfg.database.url).await?;
        logger.info("opened sqlite database", &[("url", cfg.database.url.as_str())]);
        Ok(Arc::new(db))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chainparse_core::logging::MemoryLogger;

    fn block(height: u64) -> ChainBlock {
        ChainBlock {
            height,
            hash: format!("{height:064x}"),
            proposer: "cosmosvaloper1aaa".into(),
            timestamp: 1_700_000_000 + height as i64,
            tx_count: 2,
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
    async fn block_roundtrip() {
        let db = SqliteDatabase::in_memory().await.unwrap();

        db.save_block(&block(100)).await.unwrap();
        db.save_block(&block(101)).await.unwrap();

        assert!(db.has_block(100).await.unwrap());
        assert!(!db.has_block(999).await.unwrap());
        assert_eq!(db.last_block_height().await.unwrap(), Some(101));
        assert_eq!(db.block_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn save_block_is_upsert() {
        let db = SqliteDatabase::in_memory().await.unwrap();

        db.save_block(&block(50)).await.unwrap();
        db.save_block(&block(50)).await.unwrap();

        assert_eq!(db.block_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn transaction_payload_roundtrip() {
        let db = SqliteDatabase::in_memory().await.unwrap();

        db.save_transactions(&[tx(100, "a1"), tx(100, "a2"), tx(101, "b1")])
            .await
            .unwrap();

        let at_100 = db.transactions_at(100).await.unwrap();
        assert_eq!(at_100.len(), 2);
        assert_eq!(at_100[0].hash, "a1");
        assert_eq!(at_100[0].payload["@type"], "/cosmos.bank.v1beta1.MsgSend");
        assert!(at_100[0].success);

        assert!(db.transactions_at(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_store_has_no_last_height() {
        let db = SqliteDatabase::in_memory().await.unwrap();
        assert_eq!(db.last_block_height().await.unwrap(), None);
    }

    #[tokio::test]
    async fn builder_opens_database_from_config() {
        let mut cfg = Config::default();
        cfg.database.url = "sqlite::memory:".into();

        let logger = Arc::new(MemoryLogger::new());
        let db = SqliteStorageBuilder.build(&cfg, logger.clone()).await.unwrap();

        db.save_block(&block(1)).await.unwrap();
        assert!(db.has_block(1).await.unwrap());
        assert_eq!(logger.len(), 1);
    }
}
