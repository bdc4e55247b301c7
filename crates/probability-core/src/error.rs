//! Error types for closed-form distributions
//!
//! Provides a unified error type for all probability crates.

use crate::support::Interval;
use thiserror::Error;

/// Core error type for distribution construction and queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter or query argument fell outside its declared domain
    #[error("{name} = {value} is outside its domain {interval}")]
    OutOfDomain {
        name: String,
        value: f64,
        interval: Interval,
    },

    /// A value was checked against a limits table that does not declare it
    #[error("Unknown parameter: {0} has no declared limits")]
    UnknownParameter(String),

    /// Interval notation could not be parsed
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a value outside its declared interval
    pub fn out_of_domain(name: &str, value: f64, interval: Interval) -> Self {
        Self::OutOfDomain {
            name: name.to_string(),
            value,
            interval,
        }
    }

    /// Name of the offending parameter or variable, if the error carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::OutOfDomain { name, .. } => Some(name),
            Self::UnknownParameter(name) => Some(name),
            Self::InvalidInterval(_) => None,
        }
    }
}
