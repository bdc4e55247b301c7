//! Laplace (double exponential) distribution
//!
//! The Laplace distribution is two exponential distributions spliced back to
//! back at the location μ, with scale b > 0:
//!
//! ```text
//!            1      /  |x - μ| \
//! f(x|μ,b) = -- exp| - -------  |
//!            2b     \     b    /
//! ```
//!
//! Its location is at once the mean, median and mode.

use log::trace;
use probability_core::{
    ContinuousDistribution, Distribution, Error, Interval, Limits, Parameterized, Result,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::{LN_2, SQRT_2};
use std::fmt;

const LOCATION: &str = "location";
const SCALE: &str = "scale";

/// [Laplace](https://en.wikipedia.org/wiki/Laplace_distribution) distribution
/// over x in (-∞, ∞)
///
/// # Example
///
/// ```rust
/// use probability_continuous::Laplace;
/// use probability_core::{ContinuousDistribution, Distribution};
///
/// let laplace = Laplace::new(0.0, 1.0).unwrap();
/// assert_eq!(laplace.pdf(0.0).unwrap(), 0.5);
/// assert_eq!(laplace.cdf(0.0).unwrap(), 0.5);
/// assert_eq!(laplace.mean(), 0.0);
///
/// assert!(Laplace::new(0.0, 0.0).is_err());
/// assert!(laplace.pdf(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    location: f64,
    scale: f64,
}

/// Serializable Laplace parameters
///
/// Missing fields fall back to the standard Laplace distribution. Converting
/// into a [`Laplace`] re-validates the values.
///
/// ```rust
/// use probability_continuous::{Laplace, LaplaceParams};
///
/// let params = LaplaceParams { location: 2.0, scale: 3.0 };
/// let laplace = Laplace::try_from(params).unwrap();
/// assert_eq!(laplace.params(), params);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaplaceParams {
    pub location: f64,
    pub scale: f64,
}

impl Default for LaplaceParams {
    fn default() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }
}

impl Laplace {
    /// Create a Laplace distribution with the given location and scale
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `location` is not finite or `scale`
    /// is not in (0, ∞). `location` is checked first.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        let laplace = Self { location, scale };
        laplace.validate_parameters()?;
        trace!("constructed {laplace}");
        Ok(laplace)
    }

    /// The standard Laplace distribution, location 0 and scale 1
    pub fn standard() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }

    /// Location parameter μ
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter b
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current parameters as a serializable [`LaplaceParams`]
    pub fn params(&self) -> LaplaceParams {
        LaplaceParams {
            location: self.location,
            scale: self.scale,
        }
    }
}

impl TryFrom<LaplaceParams> for Laplace {
    type Error = Error;

    fn try_from(params: LaplaceParams) -> Result<Self> {
        Self::new(params.location, params.scale)
    }
}

impl Default for Laplace {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Laplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Laplace(location: {}, scale: {})",
            self.location, self.scale
        )
    }
}

impl Parameterized for Laplace {
    const PARAMETER_LIMITS: Limits = &[
        (LOCATION, Interval::REAL_LINE),
        (SCALE, Interval::POSITIVE),
    ];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL_LINE)];

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![(LOCATION, self.location), (SCALE, self.scale)]
    }
}

impl Distribution for Laplace {
    fn name(&self) -> &str {
        "Laplace"
    }

    /// μ
    fn mean(&self) -> f64 {
        self.location
    }

    fn median(&self) -> f64 {
        self.location
    }

    fn mode(&self) -> f64 {
        self.location
    }

    /// 2b²
    fn variance(&self) -> f64 {
        2.0 * self.scale * self.scale
    }

    fn std_dev(&self) -> f64 {
        SQRT_2 * self.scale
    }

    /// 1 + ln(2b), expanded so that 2b cannot overflow
    fn entropy(&self) -> f64 {
        1.0 + LN_2 + self.scale.ln()
    }
}

impl ContinuousDistribution for Laplace {
    /// Probability density function
    ///
    /// ```text
    ///            1      /  |x - μ| \
    /// f(x|μ,b) = -- exp| - -------  |
    ///            2b     \     b    /
    /// ```
    ///
    /// b is divided out last, so neither 1/(2b) nor 2b is ever formed.
    fn pdf(&self, x: f64) -> Result<f64> {
        let x = self.check_support("x", x)?;
        let z = (x - self.location).abs() / self.scale;
        Ok(0.5 * (-z).exp() / self.scale)
    }

    /// ```text
    /// ln f(x|μ,b) = -ln 2 - ln b - |x - μ| / b
    /// ```
    fn ln_pdf(&self, x: f64) -> Result<f64> {
        let x = self.check_support("x", x)?;
        let z = (x - self.location).abs() / self.scale;
        Ok(-LN_2 - self.scale.ln() - z)
    }

    /// Cumulative distribution function, from -∞ to x
    ///
    /// ```text
    ///        1     / x - μ \
    /// F(x) = - exp|  ------ |       if x < μ
    ///        2     \   b   /
    ///
    ///            1     /  x - μ \
    /// F(x) = 1 - - exp| - ------ |  if x ≥ μ
    ///            2     \    b   /
    /// ```
    fn cdf(&self, x: f64) -> Result<f64> {
        let x = self.check_support("x", x)?;
        let z = (x - self.location) / self.scale;

        if x < self.location {
            return Ok(0.5 * z.exp());
        }
        Ok(1.0 - 0.5 * (-z).exp())
    }

    /// Quantile function
    ///
    /// ```text
    /// μ + b ln(2p)        if p ≤ 1/2
    /// μ - b ln(2 - 2p)    if p > 1/2
    /// ```
    ///
    /// `p = 0` and `p = 1` map to `-∞` and `+∞`.
    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        let p = Interval::UNIT.check("p", p)?;

        if p <= 0.5 {
            Ok(self.location + self.scale * (2.0 * p).ln())
        } else {
            Ok(self.location - self.scale * (2.0 - 2.0 * p).ln())
        }
    }
}
