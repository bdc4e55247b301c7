//! Closed-form probability distribution models
//!
//! Facade over the workspace crates:
//!
//! - [`probability_core`] - error type, declarative support limits and the
//!   capability traits
//! - [`probability_continuous`] - continuous distributions such as [`Laplace`]
//!
//! # Example
//!
//! ```rust
//! use probability::prelude::*;
//!
//! let laplace = Laplace::new(0.0, 1.0).unwrap();
//! assert_eq!(laplace.pdf(0.0).unwrap(), 0.5);
//! assert_eq!(laplace.mean(), 0.0);
//! ```

pub use probability_continuous::{Laplace, LaplaceParams};
pub use probability_core::{
    check_limits, Bound, ContinuousDistribution, Distribution, Error, Interval, Limits,
    Parameterized, Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use probability_continuous::{Laplace, LaplaceParams};
    pub use probability_core::prelude::*;
}
