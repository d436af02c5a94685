//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::holidays::Jurisdiction;

use super::types::{ServiceConfig, UpstreamConfig, YEAR_PLACEHOLDER};

/// Default location of the service configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:8787"
/// upstream:
///   user_agent: "business-days/0.1"
///   timeout_secs: 20
/// jurisdictions:
///   victoria:
///     source_url: "https://example.vic.gov.au/holidays-{year}"
///   new-south-wales:
///     source_url: "https://example.nsw.gov.au/holidays"
/// ```
///
/// # Example
///
/// ```no_run
/// use business_days::config::ConfigLoader;
/// use business_days::holidays::Jurisdiction;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// let url = loader.source_url(Jurisdiction::Victoria, 2025)?;
/// println!("Victorian holidays: {}", url);
/// # Ok::<(), business_days::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file is not valid YAML or lacks a required field
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let config = serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Socket address the server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Upstream fetch settings.
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.config.upstream
    }

    /// Jurisdictions that have a configured source.
    pub fn jurisdictions(&self) -> impl Iterator<Item = Jurisdiction> + '_ {
        self.config.jurisdictions.keys().copied()
    }

    /// Returns the holiday page URL for a jurisdiction and year.
    ///
    /// Any `{year}` placeholder in the configured URL is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownJurisdiction`] if the jurisdiction has
    /// no configured source.
    pub fn source_url(&self, jurisdiction: Jurisdiction, year: i32) -> EngineResult<String> {
        self.config
            .jurisdictions
            .get(&jurisdiction)
            .map(|j| j.source_url.replace(YEAR_PLACEHOLDER, &year.to_string()))
            .ok_or_else(|| EngineError::UnknownJurisdiction {
                name: jurisdiction.to_string(),
            })
    }
}
