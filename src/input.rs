use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::{InputKind, SlcspError};
use crate::rates::{PlanRecord, Rate, RateAreaKey, SILVER};
use crate::zips::ZipMapping;

const ZIP_COLUMNS: [&str; 3] = ["zipcode", "state", "rate_area"];
const PLAN_COLUMNS: [&str; 4] = ["state", "rate_area", "rate", "metal_level"];
const TARGET_COLUMNS: [&str; 1] = ["zipcode"];

/// Reads `zipcode,state,rate_area` rows into a mapping, last row winning.
pub fn read_zip_mapping(path: &Path) -> Result<ZipMapping, SlcspError> {
    let kind = InputKind::Zips;
    let mut reader = open_table(kind, path)?;
    let [zip_idx, state_idx, area_idx] = column_indices(kind, path, &mut reader, ZIP_COLUMNS)?;

    let mut mapping = ZipMapping::new();
    let mut rows = 0usize;
    let mut overrides = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(kind, path, source))?;
        rows += 1;
        let zipcode = field(&record, zip_idx);
        let area = RateAreaKey::new(field(&record, state_idx), field(&record, area_idx));
        if let Some(previous) = mapping.insert(zipcode, area.clone()) {
            if previous != area {
                overrides += 1;
                warn!("zip {zipcode} listed in {previous} and {area}, keeping {area}");
            }
        }
    }
    info!(
        "loaded {} zip codes from {} rows ({overrides} rate area overrides)",
        mapping.len(),
        rows
    );
    Ok(mapping)
}

/// Reads the plans file, keeping only Silver plans. Rates of other tiers are
/// never parsed.
pub fn read_silver_plans(path: &Path) -> Result<Vec<PlanRecord>, SlcspError> {
    let kind = InputKind::Plans;
    let mut reader = open_table(kind, path)?;
    let [state_idx, area_idx, rate_idx, metal_idx] =
        column_indices(kind, path, &mut reader, PLAN_COLUMNS)?;

    let mut plans = Vec::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(kind, path, source))?;
        rows += 1;
        if field(&record, metal_idx) != SILVER {
            continue;
        }
        let raw_rate = field(&record, rate_idx);
        let rate: Rate = raw_rate.parse().map_err(|_| SlcspError::InvalidRate {
            path: path.to_path_buf(),
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            value: raw_rate.to_string(),
        })?;
        let area = RateAreaKey::new(field(&record, state_idx), field(&record, area_idx));
        plans.push(PlanRecord::new(area, rate));
    }
    info!("loaded {} silver plans from {} rows", plans.len(), rows);
    Ok(plans)
}

/// Reads the target ZIP list in file order, duplicates kept.
pub fn read_target_zips(path: &Path) -> Result<Vec<String>, SlcspError> {
    let kind = InputKind::Targets;
    let mut reader = open_table(kind, path)?;
    let [zip_idx] = column_indices(kind, path, &mut reader, TARGET_COLUMNS)?;

    let mut targets = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(kind, path, source))?;
        targets.push(field(&record, zip_idx).to_string());
    }
    info!("loaded {} target zip codes", targets.len());
    Ok(targets)
}

fn open_table(kind: InputKind, path: &Path) -> Result<Reader<File>, SlcspError> {
    let file = File::open(path).map_err(|source| SlcspError::MissingFile {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading {kind} file {}", path.display());
    Ok(ReaderBuilder::new().trim(Trim::All).from_reader(file))
}

fn column_indices<const N: usize>(
    kind: InputKind,
    path: &Path,
    reader: &mut Reader<File>,
    required: [&'static str; N],
) -> Result<[usize; N], SlcspError> {
    let headers = reader
        .headers()
        .map_err(|source| csv_error(kind, path, source))?;
    let mut indices = [0usize; N];
    for (slot, column) in indices.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SlcspError::MissingColumn {
                kind,
                path: path.to_path_buf(),
                column,
            })?;
    }
    Ok(indices)
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default()
}

fn csv_error(kind: InputKind, path: &Path, source: csv::Error) -> SlcspError {
    SlcspError::Csv {
        kind,
        path: path.to_path_buf(),
        source,
    }
}
