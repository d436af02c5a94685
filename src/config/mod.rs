//! Configuration loading for the business-day service.
//!
//! This module loads the YAML service configuration: the server bind
//! address, upstream fetch settings, and the holiday page of each
//! jurisdiction.
//!
//! # Example
//!
//! ```no_run
//! use business_days::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{JurisdictionConfig, ServerConfig, ServiceConfig, UpstreamConfig, YEAR_PLACEHOLDER};
