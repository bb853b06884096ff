//! # Curio Config
//!
//! Configuration management for the Curio item service: typed configuration
//! sections with layered TOML/environment loading.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
