//! Configuration loading and management for the salary engine.
//!
//! This module loads input and display settings from a YAML file. The NDFL
//! rate is deliberately absent: it is a fixed constant in
//! [`crate::calculation`].
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Breakdown modes: {:?}", config.display().breakdown_modes);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DisplayConfig, EngineConfig, InputConfig};
