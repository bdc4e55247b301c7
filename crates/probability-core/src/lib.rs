//! Core traits and types for closed-form probability distributions
//!
//! This crate provides the pieces every distribution in the workspace shares:
//!
//! 1. **Error handling** - a single [`Error`] type whose `OutOfDomain` variant
//!    names the offending variable, its value and its legal interval
//! 2. **Support limits** - declarative [`Interval`] tables checked by one
//!    generic routine, [`check_limits`]
//! 3. **Capability traits** - [`Distribution`], [`ContinuousDistribution`] and
//!    [`Parameterized`], implemented independently by each distribution
//!
//! # Example
//!
//! ```rust
//! use probability_core::{check_limits, Error, Interval, Limits};
//!
//! const PARAMETER_LIMITS: Limits = &[
//!     ("location", Interval::REAL_LINE),
//!     ("scale", Interval::POSITIVE),
//! ];
//!
//! let err = check_limits(PARAMETER_LIMITS, &[("location", 0.0), ("scale", -1.0)]).unwrap_err();
//! assert!(matches!(err, Error::OutOfDomain { .. }));
//! assert_eq!(err.to_string(), "scale = -1 is outside its domain (0,∞)");
//! ```

pub mod error;
pub mod support;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use support::{check_limits, Bound, Interval, Limits};
pub use traits::{ContinuousDistribution, Distribution, Parameterized};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        check_limits, ContinuousDistribution, Distribution, Error, Interval, Parameterized,
        Result,
    };
}
