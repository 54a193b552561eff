//! Shared types, error model, and configuration for Strategist.
//!
//! This crate is the foundation depended on by all other Strategist crates.
//! It provides:
//! - [`StrategistError`]: the unified error type
//! - Domain types ([`KnowledgeDomain`], [`Framework`], [`Experience`], [`Profile`], [`Career`])
//! - Configuration ([`AppConfig`], [`ConsultLimits`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ConsultConfig, ConsultLimits, KnowledgeConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from, validate_config,
};
pub use error::{Result, StrategistError};
pub use types::{
    Career, CareerEntry, Contact, DomainTable, Experience, Framework, KnowledgeDomain, Profile,
    UnknownDomain,
};
