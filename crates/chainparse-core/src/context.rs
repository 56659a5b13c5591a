//! The frozen execution context handed to the parse pipeline.

use std::sync::Arc;

use crate::database::Database;
use crate::encoding::EncodingConfig;
use crate::logging::Logger;
use crate::module::Module;
use crate::node::Node;

/// Immutable aggregate of the fully resolved parser dependencies.
///
/// Constructed exactly once per run, after every builder slot has been
/// resolved and the heavier objects (node connection, storage handle) have
/// been built. Every field is required and nothing is mutated afterwards, so
/// a single context can be shared across any number of workers. The builder
/// that produced the inputs is not retained.
#[derive(Clone)]
pub struct ParseContext {
    encoding: EncodingConfig,
    node: Arc<dyn Node>,
    database: Arc<dyn Database>,
    logger: Arc<dyn Logger>,
    modules: Vec<Arc<dyn Module>>,
}

impl ParseContext {
    /// Aggregate the five resolved dependencies.
    ///
    /// Pure construction — failures in producing any input (a storage handle
    /// failing to open, a node refusing the connection) happen before this
    /// step and are that collaborator's concern.
    pub fn new(
        encoding: EncodingConfig,
        node: Arc<dyn Node>,
        database: Arc<dyn Database>,
        logger: Arc<dyn Logger>,
        modules: Vec<Arc<dyn Module>>,
    ) -> Self {
        Self {
            encoding,
            node,
            database,
            logger,
            modules,
        }
    }

    /// The resolved encoding configuration.
    pub fn encoding(&self) -> &EncodingConfig {
        &self.encoding
    }

    /// The chain node connection.
    pub fn node(&self) -> &Arc<dyn Node> {
        &self.node
    }

    /// The open storage handle.
    pub fn database(&self) -> &Arc<dyn Database> {
        &self.database
    }

    /// The logger.
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// The processing modules, in dispatch order.
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::database::MemoryDatabase;
    use crate::error::ParseError;
    use crate::logging::MemoryLogger;
    use crate::types::{ChainBlock, ChainTransaction};

    struct StubNode;

    #[async_trait]
    impl Node for StubNode {
        async fn chain_id(&self) -> Result<String, ParseError> {
            Ok("test-1".into())
        }

        async fn latest_height(&self) -> Result<u64, ParseError> {
            Ok(0)
        }

        async fn block(&self, _height: u64) -> Result<Option<ChainBlock>, ParseError> {
            Ok(None)
        }

        async fn transactions(&self, _height: u64) -> Result<Vec<ChainTransaction>, ParseError> {
            Ok(vec![])
        }
    }

    struct Named(&'static str);

    #[async_trait]
    impl Module for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn accessors_return_constructor_inputs_unchanged() {
        let encoding = EncodingConfig {
            registered_types: vec!["/cosmos.bank.v1beta1.MsgSend".into()],
            builder: "test".into(),
        };
        let node: Arc<dyn Node> = Arc::new(StubNode);
        let database: Arc<dyn Database> = Arc::new(MemoryDatabase::new());
        let logger: Arc<dyn Logger> = Arc::new(MemoryLogger::new());
        let m1: Arc<dyn Module> = Arc::new(Named("bank"));
        let m2: Arc<dyn Module> = Arc::new(Named("staking"));

        let ctx = ParseContext::new(
            encoding.clone(),
            node.clone(),
            database.clone(),
            logger.clone(),
            vec![m1.clone(), m2.clone()],
        );

        assert_eq!(ctx.encoding(), &encoding);
        assert!(Arc::ptr_eq(ctx.node(), &node));
        assert!(Arc::ptr_eq(ctx.database(), &database));
        assert!(Arc::ptr_eq(ctx.logger(), &logger));
        assert_eq!(ctx.modules().len(), 2);
        assert!(Arc::ptr_eq(&ctx.modules()[0], &m1));
        assert!(Arc::ptr_eq(&ctx.modules()[1], &m2));
    }

    #[test]
    fn module_order_is_preserved() {
        let ctx = ParseContext::new(
            EncodingConfig::default(),
            Arc::new(StubNode),
            Arc::new(MemoryDatabase::new()),
            Arc::new(MemoryLogger::new()),
            vec![Arc::new(Named("bank")), Arc::new(Named("staking"))],
        );

        let names: Vec<_> = ctx.modules().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec!["bank", "staking"]);
    }

    #[tokio::test]
    async fn context_is_shareable_across_tasks() {
        let ctx = ParseContext::new(
            EncodingConfig::default(),
            Arc::new(StubNode),
            Arc::new(MemoryDatabase::new()),
            Arc::new(MemoryLogger::new()),
            vec![],
        );

        let ctx = Arc::new(ctx);
        let mut handles = vec![];
        for _ in 0..4 {
            let ctx = ctx.clone();
            handles.push(tokio::spawn(async move {
                assert_eq!(ctx.node().latest_height().await.unwrap(), 0);
                assert!(ctx.modules().is_empty());
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
