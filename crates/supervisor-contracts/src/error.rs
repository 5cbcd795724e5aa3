//! Error types for the supervisory dashboard.
//!
//! The region projection and the navigation state machine are total and
//! never fail. Errors only arise at the edges: loading configuration,
//! parsing command-line names, and driving the terminal.

use thiserror::Error;

/// The unified error type for the dashboard crates.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// A configuration file is unreadable, malformed, or holds an invalid value.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A panel name given on the command line does not name a view.
    #[error("unknown view '{name}'")]
    UnknownView { name: String },

    /// A role identifier does not match any supervisory role.
    #[error("unknown role '{id}'")]
    UnknownRole { id: String },

    /// The terminal could not be set up, drawn to, or restored.
    #[error("terminal error: {reason}")]
    Terminal { reason: String },
}

impl From<std::io::Error> for SupervisorError {
    fn from(e: std::io::Error) -> Self {
        SupervisorError::Terminal {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the dashboard crates.
pub type SupervisorResult<T> = Result<T, SupervisorError>;
