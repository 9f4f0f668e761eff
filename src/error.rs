use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// Which of the three input tables a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Zips,
    Plans,
    Targets,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Zips => "zips",
            Self::Plans => "plans",
            Self::Targets => "slcsp",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum SlcspError {
    #[error("{kind} file not found or unreadable: {}", .path.display())]
    MissingFile {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{kind} file is missing required column `{column}`: {}", .path.display())]
    MissingColumn {
        kind: InputKind,
        path: PathBuf,
        column: &'static str,
    },
    #[error("plans file has an unparseable rate `{value}` on line {line}: {}", .path.display())]
    InvalidRate {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("malformed CSV in {kind} file {}", .path.display())]
    Csv {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed writing output file {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
