//! Declarative domain limits for parameters and support variables
//!
//! Every distribution declares its legal parameter values and its support as
//! small constant tables mapping a name to an [`Interval`]. The tables are
//! checked by one shared routine, [`check_limits`], so no distribution has to
//! hand-code its own range comparisons.
//!
//! # Example
//!
//! ```rust
//! use probability_core::support::{check_limits, Interval, Limits};
//!
//! const LIMITS: Limits = &[("rate", Interval::POSITIVE), ("p", Interval::UNIT)];
//!
//! assert!(check_limits(LIMITS, &[("rate", 2.0), ("p", 0.5)]).is_ok());
//! assert!(check_limits(LIMITS, &[("rate", 0.0)]).is_err());
//!
//! let parsed: Interval = "(0,∞)".parse().unwrap();
//! assert_eq!(parsed, Interval::POSITIVE);
//! ```

use crate::{Error, Result};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Whether an interval endpoint belongs to the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Endpoint excluded: `(` or `)`
    Open,
    /// Endpoint included: `[` or `]`
    Closed,
}

/// A real interval with open or closed endpoints, possibly unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    lower_bound: Bound,
    upper: f64,
    upper_bound: Bound,
}

/// Table mapping parameter or variable names to their declared interval
pub type Limits = &'static [(&'static str, Interval)];

impl Interval {
    /// `(-∞,∞)`: every finite real number
    pub const REAL_LINE: Interval = Interval::open(f64::NEG_INFINITY, f64::INFINITY);

    /// `(0,∞)`: strictly positive finite numbers
    pub const POSITIVE: Interval = Interval::open(0.0, f64::INFINITY);

    /// `[0,1]`: probabilities
    pub const UNIT: Interval = Interval::closed(0.0, 1.0);

    /// Create an interval from explicit endpoints and bounds
    pub const fn new(lower: f64, lower_bound: Bound, upper: f64, upper_bound: Bound) -> Self {
        Self {
            lower,
            lower_bound,
            upper,
            upper_bound,
        }
    }

    /// `(lower, upper)`
    pub const fn open(lower: f64, upper: f64) -> Self {
        Self::new(lower, Bound::Open, upper, Bound::Open)
    }

    /// `[lower, upper]`
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, Bound::Closed, upper, Bound::Closed)
    }

    /// `(lower, upper]`
    pub const fn left_open(lower: f64, upper: f64) -> Self {
        Self::new(lower, Bound::Open, upper, Bound::Closed)
    }

    /// `[lower, upper)`
    pub const fn right_open(lower: f64, upper: f64) -> Self {
        Self::new(lower, Bound::Closed, upper, Bound::Open)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn lower_bound(&self) -> Bound {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> Bound {
        self.upper_bound
    }

    /// Check whether `value` lies within the interval
    ///
    /// NaN is never contained. An open infinite endpoint excludes the
    /// infinity itself, so [`Interval::REAL_LINE`] rejects `±∞`.
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = match self.lower_bound {
            Bound::Open => value > self.lower,
            Bound::Closed => value >= self.lower,
        };
        let below_upper = match self.upper_bound {
            Bound::Open => value < self.upper,
            Bound::Closed => value <= self.upper,
        };
        above_lower && below_upper
    }

    /// Return `value` unchanged if contained, otherwise an `OutOfDomain` error
    /// naming `name`
    pub fn check(&self, name: &str, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            debug!("rejected {name} = {value}: outside {self}");
            Err(Error::out_of_domain(name, value, *self))
        }
    }
}

/// Check each named value against its declared interval
///
/// Values are checked in the order given and the first violation is
/// returned. A name missing from `limits` is reported as
/// [`Error::UnknownParameter`].
pub fn check_limits(limits: &[(&str, Interval)], values: &[(&str, f64)]) -> Result<()> {
    for &(name, value) in values {
        let interval = limits
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, interval)| *interval)
            .ok_or_else(|| {
                debug!("no declared limits for {name}");
                Error::UnknownParameter(name.to_string())
            })?;
        interval.check(name, value)?;
    }
    Ok(())
}

fn fmt_endpoint(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == f64::INFINITY {
        write!(f, "∞")
    } else if value == f64::NEG_INFINITY {
        write!(f, "-∞")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.lower_bound {
            Bound::Open => "(",
            Bound::Closed => "[",
        })?;
        fmt_endpoint(f, self.lower)?;
        f.write_str(",")?;
        fmt_endpoint(f, self.upper)?;
        f.write_str(match self.upper_bound {
            Bound::Open => ")",
            Bound::Closed => "]",
        })
    }
}

fn invalid(reason: &str, source: &str) -> Error {
    Error::InvalidInterval(format!("{reason} in '{source}'"))
}

fn parse_endpoint(text: &str, source: &str) -> Result<f64> {
    let value = match text.trim() {
        "∞" | "+∞" => f64::INFINITY,
        "-∞" => f64::NEG_INFINITY,
        other => match other.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return Err(invalid("bad endpoint", source)),
        },
    };
    if value.is_nan() {
        return Err(invalid("NaN endpoint", source));
    }
    Ok(value)
}

impl FromStr for Interval {
    type Err = Error;

    /// Parse mathematical interval notation such as `(0,∞)`, `[0,1]` or
    /// `(-inf, 5]`
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        let lower_bound = match text.chars().next() {
            Some('(') => Bound::Open,
            Some('[') => Bound::Closed,
            _ => return Err(invalid("missing opening bracket", s)),
        };
        let upper_bound = match text.chars().last() {
            Some(')') if text.len() > 1 => Bound::Open,
            Some(']') if text.len() > 1 => Bound::Closed,
            _ => return Err(invalid("missing closing bracket", s)),
        };

        // Both brackets are single-byte ASCII
        let inner = &text[1..text.len() - 1];
        let Some((lower, upper)) = inner.split_once(',') else {
            return Err(invalid("expected two endpoints", s));
        };
        if upper.contains(',') {
            return Err(invalid("expected two endpoints", s));
        }

        let lower = parse_endpoint(lower, s)?;
        let upper = parse_endpoint(upper, s)?;
        if lower > upper {
            return Err(invalid("lower endpoint exceeds upper endpoint", s));
        }

        Ok(Interval::new(lower, lower_bound, upper, upper_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LIMITS: Limits = &[
        ("location", Interval::REAL_LINE),
        ("scale", Interval::POSITIVE),
        ("p", Interval::UNIT),
    ];

    #[test]
    fn test_contains_open_and_closed() {
        assert!(!Interval::POSITIVE.contains(0.0));
        assert!(Interval::POSITIVE.contains(f64::MIN_POSITIVE));
        assert!(!Interval::POSITIVE.contains(f64::INFINITY));

        assert!(Interval::UNIT.contains(0.0));
        assert!(Interval::UNIT.contains(1.0));
        assert!(!Interval::UNIT.contains(1.0 + f64::EPSILON));

        let half_open = Interval::left_open(0.0, 1.0);
        assert!(!half_open.contains(0.0));
        assert!(half_open.contains(1.0));

        let half_open = Interval::right_open(0.0, 1.0);
        assert!(half_open.contains(0.0));
        assert!(!half_open.contains(1.0));
    }

    #[test]
    fn test_real_line_rejects_non_finite() {
        assert!(Interval::REAL_LINE.contains(f64::MAX));
        assert!(Interval::REAL_LINE.contains(f64::MIN));
        assert!(!Interval::REAL_LINE.contains(f64::NAN));
        assert!(!Interval::REAL_LINE.contains(f64::INFINITY));
        assert!(!Interval::REAL_LINE.contains(f64::NEG_INFINITY));
    }

    #[test]
    fn test_closed_infinite_endpoint() {
        let interval = Interval::closed(0.0, f64::INFINITY);
        assert!(interval.contains(f64::INFINITY));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_check_limits_ok() {
        assert!(check_limits(LIMITS, &[("location", -3.0), ("scale", 0.5)]).is_ok());
        assert!(check_limits(LIMITS, &[]).is_ok());
    }

    #[test]
    fn test_check_limits_reports_first_violation() {
        let err = check_limits(LIMITS, &[("location", f64::NAN), ("scale", -1.0)]).unwrap_err();
        assert_eq!(err.name(), Some("location"));

        let err = check_limits(LIMITS, &[("location", 1.0), ("scale", 0.0)]).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfDomain {
                name: "scale".to_string(),
                value: 0.0,
                interval: Interval::POSITIVE,
            }
        );
    }

    #[test]
    fn test_check_limits_unknown_name() {
        let err = check_limits(LIMITS, &[("shape", 1.0)]).unwrap_err();
        assert_eq!(err, Error::UnknownParameter("shape".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::REAL_LINE.to_string(), "(-∞,∞)");
        assert_eq!(Interval::POSITIVE.to_string(), "(0,∞)");
        assert_eq!(Interval::UNIT.to_string(), "[0,1]");
        assert_eq!(Interval::left_open(-1.5, 2.0).to_string(), "(-1.5,2]");
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("(-∞,∞)".parse::<Interval>().unwrap(), Interval::REAL_LINE);
        assert_eq!("(0,∞)".parse::<Interval>().unwrap(), Interval::POSITIVE);
        assert_eq!("[0, 1]".parse::<Interval>().unwrap(), Interval::UNIT);
        assert_eq!(
            " (-inf, 5] ".parse::<Interval>().unwrap(),
            Interval::left_open(f64::NEG_INFINITY, 5.0)
        );
        assert_eq!(
            "[1e-3,+∞)".parse::<Interval>().unwrap(),
            Interval::right_open(0.001, f64::INFINITY)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "(", "0,1)", "[0,1", "(0;1)", "(0,1,2)", "(a,1)", "(NaN,1)", "(2,1)"] {
            match text.parse::<Interval>() {
                Err(Error::InvalidInterval(_)) => {}
                other => panic!("expected InvalidInterval for {text:?}, got {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_display_parse_agree(
            lower in -1e6f64..1e6,
            width in 0.0f64..1e6,
            lower_closed in any::<bool>(),
            upper_closed in any::<bool>(),
        ) {
            let bound = |closed: bool| if closed { Bound::Closed } else { Bound::Open };
            let upper = lower + width;
            let interval = Interval::new(lower, bound(lower_closed), upper, bound(upper_closed));
            let parsed: Interval = interval.to_string().parse().unwrap();
            prop_assert_eq!(parsed, interval);
        }

        #[test]
        fn prop_check_agrees_with_contains(value in any::<f64>()) {
            let interval = Interval::right_open(-10.0, 10.0);
            prop_assert_eq!(interval.check("v", value).is_ok(), interval.contains(value));
        }
    }
}
