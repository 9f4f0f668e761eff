use serde::Serialize;
use tracing::info;

use crate::config::RunPaths;
use crate::error::SlcspError;
use crate::input::{read_silver_plans, read_target_zips, read_zip_mapping};
use crate::output::write_results;
use crate::rates::{group_rates_by_area, second_lowest_by_area, PlanRecord, SlcspRates};
use crate::zips::{resolve_targets, Resolution, ResolvedZip, ZipMapping};

/// The three input tables, fully loaded.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub zips: ZipMapping,
    pub silver_plans: Vec<PlanRecord>,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlcspReport {
    pub rate_areas: SlcspRates,
    pub results: Vec<ResolvedZip>,
}

impl SlcspReport {
    pub fn resolved_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.resolution == Resolution::Resolved)
            .count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.results.len().saturating_sub(self.resolved_count())
    }
}

pub fn load_datasets(paths: &RunPaths) -> Result<Datasets, SlcspError> {
    Ok(Datasets {
        zips: read_zip_mapping(&paths.zips)?,
        silver_plans: read_silver_plans(&paths.plans)?,
        targets: read_target_zips(&paths.targets)?,
    })
}

pub fn compute(datasets: &Datasets) -> SlcspReport {
    let grouped = group_rates_by_area(&datasets.silver_plans);
    let rate_areas = second_lowest_by_area(&grouped);
    info!(
        "{} rate areas with silver plans, {} with a second lowest rate",
        rate_areas.len(),
        rate_areas.values().filter(|r| r.is_some()).count()
    );
    let results = resolve_targets(&datasets.targets, &datasets.zips, &rate_areas);
    SlcspReport {
        rate_areas,
        results,
    }
}

/// Loads every input, resolves all targets, then writes the answer file.
/// Nothing is written unless every input loads.
pub fn run(paths: &RunPaths) -> Result<SlcspReport, SlcspError> {
    let datasets = load_datasets(paths)?;
    let report = compute(&datasets);
    write_results(&paths.output, &report.results)?;
    info!(
        "resolved {} of {} zip codes into {}",
        report.resolved_count(),
        report.results.len(),
        paths.output.display()
    );
    Ok(report)
}
