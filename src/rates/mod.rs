pub mod grouper;
pub mod selector;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Serialize, Serializer};
use thiserror::Error;

pub use grouper::group_rates_by_area;
pub use selector::{second_lowest, second_lowest_by_area};

/// Metal tier whose plans feed the benchmark.
pub const SILVER: &str = "Silver";

/// State code followed by rate-area number, e.g. `NY1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RateAreaKey(String);

impl RateAreaKey {
    pub fn new(state: &str, rate_area: &str) -> Self {
        Self(format!("{}{}", state.trim(), rate_area.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RateAreaKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A monthly premium held as an exact decimal.
///
/// Equality and ordering are numeric, so `350.0` and `350.00` are the same
/// rate. `Display` renders exactly two fraction digits, rounding half to even.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rate(BigDecimal);

#[derive(Debug, Error)]
#[error("invalid rate: {0:?}")]
pub struct RateParseError(pub String);

impl Rate {
    /// Whole cents after half-to-even rounding, as an integral decimal.
    pub fn to_cents(&self) -> BigDecimal {
        let rounded = self.0.with_scale_round(2, RoundingMode::HalfEven);
        (rounded * BigDecimal::from(100i64)).with_scale(0)
    }

    /// Formats from the cent count so zero still renders as `0.00`.
    pub fn to_cents_string(&self) -> String {
        let (cents, _) = self.to_cents().as_bigint_and_exponent();
        let digits = cents.to_string();
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits.as_str()),
        };
        let padded = format!("{digits:0>3}");
        let (whole, fraction) = padded.split_at(padded.len() - 2);
        format!("{sign}{whole}.{fraction}")
    }
}

impl FromStr for Rate {
    type Err = RateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RateParseError(s.to_string()));
        }
        BigDecimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| RateParseError(s.to_string()))
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_cents_string())
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_cents_string())
    }
}

/// One Silver plan reduced to the fields the benchmark needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRecord {
    pub rate_area: RateAreaKey,
    pub rate: Rate,
}

impl PlanRecord {
    pub fn new(rate_area: RateAreaKey, rate: Rate) -> Self {
        Self { rate_area, rate }
    }
}

/// Rates per rate area in input order, duplicates kept.
pub type RateAreaRates = BTreeMap<RateAreaKey, Vec<Rate>>;

/// Second lowest distinct rate per rate area; `None` when there is no second.
pub type SlcspRates = BTreeMap<RateAreaKey, Option<Rate>>;

#[cfg(test)]
pub(crate) fn rate(raw: &str) -> Rate {
    raw.parse().expect("valid test rate")
}
