//! Configuration types for the business-day service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::holidays::Jurisdiction;

/// Placeholder replaced by the requested year in a source URL.
pub const YEAR_PLACEHOLDER: &str = "{year}";

fn default_timeout_secs() -> u64 {
    20
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:8787").
    pub bind_address: String,
}

/// Settings for fetching upstream holiday pages.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// User-Agent header sent with every upstream request.
    pub user_agent: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where to find one jurisdiction's holiday page.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionConfig {
    /// URL of the holiday page. May contain `{year}`.
    pub source_url: String,
}

/// The complete service configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Upstream fetch settings.
    pub upstream: UpstreamConfig,
    /// Holiday page per jurisdiction.
    pub jurisdictions: BTreeMap<Jurisdiction, JurisdictionConfig>,
}
