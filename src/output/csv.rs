use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::SlcspError;
use crate::zips::ResolvedZip;

pub const OUTPUT_HEADER: [&str; 2] = ["zipcode", "rate"];

/// A line of the answer file. `rate` is empty when no benchmark rate exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub zipcode: String,
    pub rate: String,
}

pub fn format_rows(results: &[ResolvedZip]) -> Vec<OutputRow> {
    results
        .iter()
        .map(|result| OutputRow {
            zipcode: result.zipcode.clone(),
            rate: result
                .rate
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn results_to_csv(results: &[ResolvedZip]) -> Result<String> {
    let data = render_csv_bytes(results)?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

/// Renders the whole file in memory and persists it over `path` with a single
/// rename from a sibling temp file.
pub fn write_results(path: &Path, results: &[ResolvedZip]) -> Result<(), SlcspError> {
    let output_error = |source: std::io::Error| SlcspError::Output {
        path: path.to_path_buf(),
        source,
    };
    let data = render_csv_bytes(results).map_err(|err| output_error(err.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(output_error)?;
    staged.write_all(&data).map_err(output_error)?;
    staged.flush().map_err(output_error)?;
    staged
        .persist(path)
        .map_err(|err| output_error(err.error))?;
    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn render_csv_bytes(results: &[ResolvedZip]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(OUTPUT_HEADER)?;
    for row in format_rows(results) {
        writer.write_record([row.zipcode.as_str(), row.rate.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::output::csv::{format_rows, results_to_csv, write_results, OutputRow};
    use crate::rates::{rate, RateAreaKey};
    use crate::zips::{Resolution, ResolvedZip};

    fn results() -> Vec<ResolvedZip> {
        vec![
            ResolvedZip {
                zipcode: "45678".to_string(),
                rate_area: Some(RateAreaKey::new("TX", "1")),
                rate: Some(rate("300.0")),
                resolution: Resolution::Resolved,
            },
            ResolvedZip {
                zipcode: "88888".to_string(),
                rate_area: None,
                rate: None,
                resolution: Resolution::UnknownZip,
            },
            ResolvedZip {
                zipcode: "67890".to_string(),
                rate_area: Some(RateAreaKey::new("FL", "1")),
                rate: Some(rate("275")),
                resolution: Resolution::Resolved,
            },
        ]
    }

    #[test]
    fn rows_carry_two_decimal_rates_or_blank() {
        let rows = format_rows(&results());
        assert_eq!(
            rows[0],
            OutputRow {
                zipcode: "45678".to_string(),
                rate: "300.00".to_string(),
            }
        );
        assert_eq!(rows[1].rate, "");
        assert_eq!(rows[2].rate, "275.00");
    }

    #[test]
    fn csv_has_fixed_header_and_target_order() {
        let csv = results_to_csv(&results()).expect("render csv");
        assert_eq!(csv, "zipcode,rate\n45678,300.00\n88888,\n67890,275.00\n");
    }

    #[test]
    fn empty_results_still_write_header() {
        let csv = results_to_csv(&[]).expect("render csv");
        assert_eq!(csv, "zipcode,rate\n");
    }

    #[test]
    fn write_results_replaces_existing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("slcsp.csv");
        fs::write(&path, "zipcode,rate\n45678,\n").expect("seed output");

        write_results(&path, &results()).expect("write output");
        let written = fs::read_to_string(&path).expect("read output");
        assert_eq!(written, "zipcode,rate\n45678,300.00\n88888,\n67890,275.00\n");
    }

    #[test]
    fn write_results_fails_for_missing_directory() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_results(&path, &results()).is_err());
        assert!(!path.exists());
    }
}
