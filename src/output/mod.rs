pub mod csv;
pub mod json;
pub mod table;

pub use self::csv::{format_rows, results_to_csv, write_results, OutputRow, OUTPUT_HEADER};
