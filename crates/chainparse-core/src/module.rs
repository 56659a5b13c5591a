//! Processing module contract and the module registrar.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::database::Database;
use crate::encoding::EncodingConfig;
use crate::error::ParseError;
use crate::logging::Logger;
use crate::types::ChainBlock;

// ─── Module ───────────────────────────────────────────────────────────────────

/// A pluggable unit of domain logic dispatched by the parse pipeline.
///
/// Modules are dispatched in the order the registrar returned them.
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique module name (e.g. `"bank"`).
    fn name(&self) -> &str;

    /// Called once per parsed block.
    async fn handle_block(&self, _block: &ChainBlock) -> Result<(), ParseError> {
        Ok(())
    }
}

// ─── Registrar ────────────────────────────────────────────────────────────────

/// Everything a registrar needs to construct its modules.
pub struct RegistrarContext {
    pub config: Config,
    pub encoding: EncodingConfig,
    pub database: Arc<dyn Database>,
    pub logger: Arc<dyn Logger>,
}

impl RegistrarContext {
    pub fn new(
        config: Config,
        encoding: EncodingConfig,
        database: Arc<dyn Database>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            config,
            encoding,
            database,
            logger,
        }
    }
}

/// Supplies the ordered module list for a parser run.
pub trait Registrar: Send + Sync {
    /// Build the modules. The order of the returned vector is the dispatch
    /// order used downstream.
    fn build_modules(&self, ctx: &RegistrarContext) -> Vec<Arc<dyn Module>>;
}

/// Default registrar — contributes no modules.
#[derive(Debug, Default)]
pub struct EmptyRegistrar;

impl Registrar for EmptyRegistrar {
    fn build_modules(&self, _ctx: &RegistrarContext) -> Vec<Arc<dyn Module>> {
        vec![]
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
