//! chainparse-core — dependency-composition layer for the ChainParse pipeline.
//!
//! # Architecture
//!
//! ```text
//! ParseBuilder ──resolve──▶ collaborators ──assemble──▶ ParseContext
//!      ├── Registrar              (ordered module list)      ├── EncodingConfig
//!      ├── ConfigParser           (raw bytes → Config)       ├── Node
//!      ├── EncodingConfigBuilder                             ├── Database
//!      ├── RuntimeSetup           (process-global init)      ├── Logger
//!      ├── StorageBuilder         (Config + Logger → DB)     └── Modules (ordered)
//!      └── Logger
//! ```
//!
//! The builder accumulates overrides for six pluggable slots and resolves
//! each slot to a default when no override was set. The embedding application
//! resolves the slots, constructs the heavier runtime objects, and freezes
//! everything into a [`ParseContext`] that the downstream pipeline only reads.

pub mod builder;
pub mod config;
pub mod context;
pub mod database;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod module;
pub mod node;
pub mod setup;
pub mod types;

pub use builder::ParseBuilder;
pub use config::{Config, ConfigParser, JsonConfigParser};
pub use context::ParseContext;
pub use database::{Database, MemoryDatabase, MemoryStorageBuilder, StorageBuilder};
pub use encoding::{EncodingConfig, EncodingConfigBuilder, TestEncodingConfigBuilder};
pub use error::ParseError;
pub use logging::{LogLevel, Logger, MemoryLogger, TracingLogger};
pub use module::{EmptyRegistrar, Module, Registrar, RegistrarContext};
pub use node::Node;
pub use setup::{NoopRuntimeSetup, RuntimeSetup};
pub use types::{ChainBlock, ChainTransaction};
