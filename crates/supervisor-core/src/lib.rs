//! # supervisor-core
//!
//! Logic of the supervisory dashboard, independent of any data source.
//!
//! This crate provides:
//! - The `RegionDirectory` trait through which region data is read
//! - `dashboard_data`, the region-scaled home projection
//! - `DashboardState`, the navigation state container
//! - Filter option builders and number formatting
//!
//! ## Usage
//!
//! ```rust,ignore
//! use supervisor_core::{dashboard_data, traits::RegionDirectory};
//! ```

pub mod filter;
pub mod format;
pub mod navigation;
pub mod projection;
pub mod traits;

#[cfg(test)]
mod testing;

pub use navigation::DashboardState;
pub use projection::dashboard_data;
