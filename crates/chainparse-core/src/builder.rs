//! Fluent builder for the pluggable parser dependencies.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chainparse_core::builder::ParseBuilder;
//! use chainparse_core::logging::TracingLogger;
//!
//! let builder = ParseBuilder::new()
//!     .with_logger(Arc::new(TracingLogger::new()));
//!
//! let logger = builder.logger();       // the override
//! let registrar = builder.registrar(); // the default (no modules)
//! ```

use std::sync::Arc;

use crate::config::{ConfigParser, JsonConfigParser};
use crate::database::{MemoryStorageBuilder, StorageBuilder};
use crate::encoding::{EncodingConfigBuilder, TestEncodingConfigBuilder};
use crate::logging::{Logger, TracingLogger};
use crate::module::{EmptyRegistrar, Registrar};
use crate::setup::{NoopRuntimeSetup, RuntimeSetup};

/// Accumulates overrides for the six pluggable dependency slots.
///
/// Every slot starts unset; the resolution accessors fall back to a
/// documented default, so an application only overrides what it needs.
/// A later override for a slot replaces the earlier one.
///
/// Intended for single-owner use during initialization; once an execution
/// context has been assembled from the resolved values the builder should not
/// be touched again. That is a usage convention, not something the type
/// enforces.
#[derive(Clone, Default)]
pub struct ParseBuilder {
    registrar: Option<Arc<dyn Registrar>>,
    config_parser: Option<Arc<dyn ConfigParser>>,
    encoding_builder: Option<Arc<dyn EncodingConfigBuilder>>,
    runtime_setup: Option<Arc<dyn RuntimeSetup>>,
    storage_builder: Option<Arc<dyn StorageBuilder>>,
    logger: Option<Arc<dyn Logger>>,
}

impl ParseBuilder {
    /// Create a builder with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module registrar to be used.
    pub fn with_registrar(mut self, registrar: Arc<dyn Registrar>) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// The module registrar: the override, or [`EmptyRegistrar`].
    pub fn registrar(&self) -> Arc<dyn Registrar> {
        self.registrar
            .clone()
            .unwrap_or_else(|| Arc::new(EmptyRegistrar))
    }

    /// Set the configuration parser to be used.
    pub fn with_config_parser(mut self, parser: Arc<dyn ConfigParser>) -> Self {
        self.config_parser = Some(parser);
        self
    }

    /// The configuration parser: the override, or [`JsonConfigParser`].
    pub fn config_parser(&self) -> Arc<dyn ConfigParser> {
        self.config_parser
            .clone()
            .unwrap_or_else(|| Arc::new(JsonConfigParser))
    }

    /// Set the encoding config builder to be used.
    pub fn with_encoding_builder(mut self, builder: Arc<dyn EncodingConfigBuilder>) -> Self {
        self.encoding_builder = Some(builder);
        self
    }

    /// The encoding config builder: the override, or
    /// [`TestEncodingConfigBuilder`] (non-production type set).
    pub fn encoding_builder(&self) -> Arc<dyn EncodingConfigBuilder> {
        self.encoding_builder
            .clone()
            .unwrap_or_else(|| Arc::new(TestEncodingConfigBuilder))
    }

    /// Set the runtime setup to be used.
    pub fn with_runtime_setup(mut self, setup: Arc<dyn RuntimeSetup>) -> Self {
        self.runtime_setup = Some(setup);
        self
    }

    /// The runtime setup: the override, or [`NoopRuntimeSetup`].
    pub fn runtime_setup(&self) -> Arc<dyn RuntimeSetup> {
        self.runtime_setup
            .clone()
            .unwrap_or_else(|| Arc::new(NoopRuntimeSetup))
    }

    /// Set the storage builder to be used.
    pub fn with_storage_builder(mut self, builder: Arc<dyn StorageBuilder>) -> Self {
        self.storage_builder = Some(builder);
        self
    }

    /// The storage builder: the override, or [`MemoryStorageBuilder`].
    pub fn storage_builder(&self) -> Arc<dyn StorageBuilder> {
        self.storage_builder
            .clone()
            .unwrap_or_else(|| Arc::new(MemoryStorageBuilder))
    }

    /// Set the logger to be used while parsing.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The logger: the override, or [`TracingLogger`].
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger
            .clone()
            .unwrap_or_else(|| Arc::new(TracingLogger::new()))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
