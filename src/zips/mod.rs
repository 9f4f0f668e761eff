pub mod resolver;

use std::collections::HashMap;

use serde::Serialize;

use crate::rates::{Rate, RateAreaKey};

pub use resolver::resolve_targets;

/// ZIP code to rate area. A repeated ZIP keeps the last area inserted.
#[derive(Debug, Clone, Default)]
pub struct ZipMapping {
    areas: HashMap<String, RateAreaKey>,
}

impl ZipMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the area the ZIP mapped to before, if any.
    pub fn insert(&mut self, zipcode: impl Into<String>, area: RateAreaKey) -> Option<RateAreaKey> {
        self.areas.insert(zipcode.into(), area)
    }

    pub fn get(&self, zipcode: &str) -> Option<&RateAreaKey> {
        self.areas.get(zipcode)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl<Z: Into<String>> FromIterator<(Z, RateAreaKey)> for ZipMapping {
    fn from_iter<T: IntoIterator<Item = (Z, RateAreaKey)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (zipcode, area) in iter {
            mapping.insert(zipcode, area);
        }
        mapping
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Resolved,
    UnknownZip,
    NoSilverPlans,
    NoSecondLowest,
}

impl Resolution {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::UnknownZip => "unknown zip",
            Self::NoSilverPlans => "no silver plans",
            Self::NoSecondLowest => "no second lowest",
        }
    }
}

/// One target ZIP after the join. `rate` is set only when `Resolved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedZip {
    pub zipcode: String,
    pub rate_area: Option<RateAreaKey>,
    pub rate: Option<Rate>,
    pub resolution: Resolution,
}
