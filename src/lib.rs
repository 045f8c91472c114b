//! Android Flavor Config
//!
//! A standalone port of a Gradle product-flavor declaration: a validated,
//! enumerable table of build flavors.
//!
//! This library provides:
//! - TOML manifest schema for flavor declarations
//! - Integrity validation (unique names, unique application ids)
//! - Name-based flavor resolution
//! - Configuration management

pub mod cli;
pub mod config;
pub mod flavor;

// Re-exports for clean public API
pub use config::Config;
pub use flavor::{FlavorError, FlavorManifest, FlavorRecord, FlavorTable, ResValue};
