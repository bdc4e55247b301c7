//! Capability traits for probability distributions
//!
//! Distributions do not share a base type. Each concrete distribution
//! implements the capabilities it supports: summary statistics through
//! [`Distribution`], density and probability queries through
//! [`ContinuousDistribution`], and declarative domain limits through
//! [`Parameterized`].

use crate::support::{check_limits, Limits};
use crate::Result;

/// Closed-form summary statistics of a distribution
pub trait Distribution: Send + Sync {
    /// Human-readable name of the distribution family
    fn name(&self) -> &str;

    fn mean(&self) -> f64;

    fn median(&self) -> f64;

    fn mode(&self) -> f64;

    fn variance(&self) -> f64;

    /// Standard deviation, the square root of the variance
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Differential entropy in nats
    fn entropy(&self) -> f64;
}

/// Density and probability queries over a continuous support
///
/// Every query validates its arguments against the distribution's support and
/// fails with [`crate::Error::OutOfDomain`] instead of returning NaN.
///
/// # Example
///
/// ```rust
/// use probability_core::{ContinuousDistribution, Distribution, Interval, Result};
///
/// /// Uniform distribution on [0, 1]
/// struct StandardUniform;
///
/// impl Distribution for StandardUniform {
///     fn name(&self) -> &str { "StandardUniform" }
///     fn mean(&self) -> f64 { 0.5 }
///     fn median(&self) -> f64 { 0.5 }
///     fn mode(&self) -> f64 { 0.5 }
///     fn variance(&self) -> f64 { 1.0 / 12.0 }
///     fn entropy(&self) -> f64 { 0.0 }
/// }
///
/// impl ContinuousDistribution for StandardUniform {
///     fn pdf(&self, x: f64) -> Result<f64> {
///         Interval::UNIT.check("x", x)?;
///         Ok(1.0)
///     }
///     fn cdf(&self, x: f64) -> Result<f64> {
///         Interval::UNIT.check("x", x)
///     }
///     fn inverse_cdf(&self, p: f64) -> Result<f64> {
///         Interval::UNIT.check("p", p)
///     }
/// }
///
/// let u = StandardUniform;
/// assert_eq!(u.between(0.25, 0.75).unwrap(), 0.5);
/// assert!(u.pdf(2.0).is_err());
/// ```
pub trait ContinuousDistribution: Distribution {
    /// Probability density function
    fn pdf(&self, x: f64) -> Result<f64>;

    /// Natural logarithm of the density
    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }

    /// Cumulative distribution function, P(X ≤ x)
    fn cdf(&self, x: f64) -> Result<f64>;

    /// Quantile function, the inverse of [`cdf`](Self::cdf) for `p` in [0, 1]
    fn inverse_cdf(&self, p: f64) -> Result<f64>;

    /// Survival function, P(X > x)
    fn above(&self, x: f64) -> Result<f64> {
        Ok(1.0 - self.cdf(x)?)
    }

    /// P(lower < X ≤ upper)
    fn between(&self, lower: f64, upper: f64) -> Result<f64> {
        Ok(self.cdf(upper)? - self.cdf(lower)?)
    }

    /// P(X ≤ lower or X > upper)
    fn outside(&self, lower: f64, upper: f64) -> Result<f64> {
        Ok(self.cdf(lower)? + self.above(upper)?)
    }
}

/// Declarative parameter and support limits
pub trait Parameterized {
    /// Legal values of each construction parameter
    const PARAMETER_LIMITS: Limits;

    /// Legal values of each query variable
    const SUPPORT_LIMITS: Limits;

    /// Current parameter values, in `PARAMETER_LIMITS` order
    fn parameters(&self) -> Vec<(&'static str, f64)>;

    /// Check the current parameters against `PARAMETER_LIMITS`
    fn validate_parameters(&self) -> Result<()> {
        check_limits(Self::PARAMETER_LIMITS, &self.parameters())
    }

    /// Check a query variable against `SUPPORT_LIMITS`
    fn check_support(&self, name: &str, value: f64) -> Result<f64> {
        check_limits(Self::SUPPORT_LIMITS, &[(name, value)])?;
        Ok(value)
    }
}
