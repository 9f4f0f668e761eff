use serde::Serialize;

use crate::pipeline::SlcspReport;
use crate::rates::SlcspRates;
use crate::zips::ResolvedZip;

#[derive(Serialize)]
struct ReportView<'a> {
    resolved: usize,
    unresolved: usize,
    results: &'a [ResolvedZip],
    rate_areas: &'a SlcspRates,
}

/// Pretty JSON of the per-zip results, the per-area benchmark rates and totals.
pub fn render_report_json(report: &SlcspReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportView {
        resolved: report.resolved_count(),
        unresolved: report.unresolved_count(),
        results: &report.results,
        rate_areas: &report.rate_areas,
    })
}
