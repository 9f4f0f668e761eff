use crate::rates::SlcspRates;
use crate::zips::{Resolution, ResolvedZip, ZipMapping};

/// Joins each target ZIP to its rate area and that area's benchmark rate.
///
/// Output has one entry per target, in target order, duplicates included.
/// An unknown ZIP, an area without Silver plans and an area without a second
/// distinct rate all leave `rate` empty; `resolution` records which.
pub fn resolve_targets(
    targets: &[String],
    zips: &ZipMapping,
    slcsp: &SlcspRates,
) -> Vec<ResolvedZip> {
    targets
        .iter()
        .map(|zipcode| resolve_one(zipcode, zips, slcsp))
        .collect()
}

fn resolve_one(zipcode: &str, zips: &ZipMapping, slcsp: &SlcspRates) -> ResolvedZip {
    let Some(area) = zips.get(zipcode) else {
        return ResolvedZip {
            zipcode: zipcode.to_string(),
            rate_area: None,
            rate: None,
            resolution: Resolution::UnknownZip,
        };
    };
    let (rate, resolution) = match slcsp.get(area) {
        None => (None, Resolution::NoSilverPlans),
        Some(None) => (None, Resolution::NoSecondLowest),
        Some(Some(rate)) => (Some(rate.clone()), Resolution::Resolved),
    };
    ResolvedZip {
        zipcode: zipcode.to_string(),
        rate_area: Some(area.clone()),
        rate,
        resolution,
    }
}
