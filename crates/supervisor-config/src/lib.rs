//! # supervisor-config
//!
//! TOML configuration for the supervisory dashboard binaries.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use supervisor_config::DashboardConfig;
//!
//! let config = DashboardConfig::from_file(Path::new("config/dashboard.toml"))?;
//! let region = config.resolved_region(&supervisor_mock::StaticRegions);
//! ```

pub mod loader;
pub mod schema;

pub use schema::DashboardConfig;
