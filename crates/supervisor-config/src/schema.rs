//! Configuration schema.
//!
//! Every table and key is optional. A missing key takes the default shown
//! in the TOML example below.
//!
//! ```toml
//! [dashboard]
//! default_region = "贵州省"
//! role = "SUPER"
//! tick_rate_ms = 200
//!
//! [logging]
//! filter = "warn"
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "贵州省";
pub const DEFAULT_ROLE: &str = "SUPER";
pub const DEFAULT_TICK_RATE_MS: u64 = 200;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for the dashboard itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSection {
    /// Region selected at startup. Unknown names fall back to the root.
    pub default_region: String,

    /// Role id shown in the header: SUPER, PROV, CITY or COUNTY.
    pub role: String,

    /// Terminal event poll interval. Must be greater than zero.
    pub tick_rate_ms: u64,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            role: DEFAULT_ROLE.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub dashboard: DashboardSection,
    pub logging: LoggingSection,
}
