//! Chain node connection contract.
//!
//! Concrete clients (RPC, gRPC) live with the embedding application; the
//! composition layer only needs the read queries the pipeline performs.

use async_trait::async_trait;

use crate::error::ParseError;
use crate::types::{ChainBlock, ChainTransaction};

/// Connection to a chain node.
#[async_trait]
pub trait Node: Send + Sync {
    /// Identifier of the chain the node is following.
    async fn chain_id(&self) -> Result<String, ParseError>;

    /// Height of the latest block the node knows about.
    async fn latest_height(&self) -> Result<u64, ParseError>;

    /// Fetch the block at `height` (`None` if not yet produced).
    async fn block(&self, height: u64) -> Result<Option<ChainBlock>, ParseError>;

    /// Fetch the transactions included in the block at `height`.
    async fn transactions(&self, height: u64) -> Result<Vec<ChainTransaction>, ParseError>;
}
