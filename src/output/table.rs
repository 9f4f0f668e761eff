use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::rates::SlcspRates;
use crate::zips::{Resolution, ResolvedZip};

pub fn render_results_table(results: &[ResolvedZip]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Zipcode", "Rate Area", "SLCSP", "Status"]);

    for r in results {
        let status = if r.resolution == Resolution::Resolved {
            Cell::new(r.resolution.as_label()).fg(Color::Green)
        } else {
            Cell::new(r.resolution.as_label()).fg(Color::Yellow)
        };
        table.add_row(Row::from(vec![
            Cell::new(&r.zipcode),
            Cell::new(
                r.rate_area
                    .as_ref()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                r.rate
                    .as_ref()
                    .map(|rate| rate.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            status,
        ]));
    }
    table.to_string()
}

pub fn render_rate_areas_table(slcsp: &SlcspRates) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rate Area", "SLCSP"]);
    for (area, rate) in slcsp {
        table.add_row(vec![
            area.to_string(),
            rate.as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.to_string()
}
