use std::collections::BTreeSet;

use crate::rates::{Rate, RateAreaRates, SlcspRates};

/// Second smallest distinct rate, or `None` with fewer than two distinct rates.
pub fn second_lowest(rates: &[Rate]) -> Option<Rate> {
    let distinct: BTreeSet<&Rate> = rates.iter().collect();
    distinct.into_iter().nth(1).cloned()
}

pub fn second_lowest_by_area(grouped: &RateAreaRates) -> SlcspRates {
    grouped
        .iter()
        .map(|(area, rates)| (area.clone(), second_lowest(rates)))
        .collect()
}
