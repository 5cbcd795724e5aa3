//! Loading and validating `DashboardConfig`.
//!
//! Parsing only checks the document shape. `validate` then rejects values
//! the dashboard cannot run with; `from_file` and `from_toml_str` call it
//! before returning.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use supervisor_contracts::{
    error::{SupervisorError, SupervisorResult},
    records::Role,
};
use supervisor_core::traits::RegionDirectory;
use supervisor_mock::roles::find_role;

use crate::schema::DashboardConfig;

impl DashboardConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `SupervisorError::ConfigError` if the TOML is malformed, has
    /// unknown keys, or holds an invalid value.
    pub fn from_toml_str(s: &str) -> SupervisorResult<Self> {
        let config: DashboardConfig = toml::from_str(s).map_err(|e| SupervisorError::ConfigError {
            reason: format!("failed to parse dashboard TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as dashboard configuration.
    pub fn from_file(path: &Path) -> SupervisorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SupervisorError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), region = %config.dashboard.default_region, "loaded dashboard config");
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to the defaults.
    pub fn load(path: Option<&Path>) -> SupervisorResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> SupervisorResult<()> {
        if self.dashboard.tick_rate_ms == 0 {
            return Err(SupervisorError::ConfigError {
                reason: "tick_rate_ms must be greater than zero".to_string(),
            });
        }
        if self.logging.filter.trim().is_empty() {
            return Err(SupervisorError::ConfigError {
                reason: "logging filter must not be empty".to_string(),
            });
        }
        find_role(&self.dashboard.role).map_err(|e| SupervisorError::ConfigError {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// The configured role. `validate` guarantees the id is known.
    pub fn role(&self) -> SupervisorResult<Role> {
        find_role(&self.dashboard.role)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.dashboard.tick_rate_ms)
    }

    /// The startup region, or the root when the configured name has no
    /// entry of its own.
    pub fn resolved_region(&self, directory: &dyn RegionDirectory) -> String {
        let name = self.dashboard.default_region.trim();
        if directory.find(name).is_some() {
            return name.to_string();
        }
        let root = directory.root().name;
        warn!(region = name, fallback = root, "configured region not found, using root");
        root.to_string()
    }
}
