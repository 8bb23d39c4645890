//! vizdriver library
//!
//! Exposes the configuration model for the CLI and integration tests.

pub mod config;

pub use config::{Config, TargetConfig};
