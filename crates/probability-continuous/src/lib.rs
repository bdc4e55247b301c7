//! Continuous closed-form probability distributions
//!
//! Each distribution is an immutable value validated at construction. Queries
//! validate their own arguments and evaluate an analytic formula; nothing is
//! cached and nothing is sampled.
//!
//! # Distributions
//!
//! | Distribution | Parameters | Support |
//! |--------------|------------|---------|
//! | [`Laplace`] | location ∈ (-∞,∞), scale ∈ (0,∞) | x ∈ (-∞,∞) |
//!
//! # Example
//!
//! ```rust
//! use probability_continuous::Laplace;
//! use probability_core::prelude::*;
//!
//! let laplace = Laplace::new(2.0, 3.0)?;
//! assert_eq!(laplace.cdf(2.0)?, 0.5);
//! assert!((laplace.pdf(2.0)? - 1.0 / 6.0).abs() < 1e-12);
//!
//! match laplace.pdf(f64::NAN) {
//!     Err(Error::OutOfDomain { name, .. }) => assert_eq!(name, "x"),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), probability_core::Error>(())
//! ```

pub mod laplace;

pub use laplace::{Laplace, LaplaceParams};
