use crate::rates::{PlanRecord, RateAreaRates};

/// Collects every plan rate under its rate area, keeping input order.
/// Areas with no plans are absent rather than mapped to an empty list.
pub fn group_rates_by_area<'a, I>(plans: I) -> RateAreaRates
where
    I: IntoIterator<Item = &'a PlanRecord>,
{
    let mut grouped = RateAreaRates::new();
    for plan in plans {
        grouped
            .entry(plan.rate_area.clone())
            .or_default()
            .push(plan.rate.clone());
    }
    grouped
}
