//! Error types for dump parsing and report building.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A line inside a player section does not have the record shape.
    #[error("malformed record on line {line_no}: {reason}\n  {line}")]
    MalformedRecord {
        line_no: usize,
        line: String,
        reason: String,
    },

    /// A card symbol outside A, K, Q, J, T, 9..2.
    #[error("unknown rank '{symbol}' on line {line_no}\n  {line}")]
    UnknownRank {
        symbol: String,
        line_no: usize,
        line: String,
    },

    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub(crate) fn malformed(line_no: usize, line: &str, reason: impl Into<String>) -> Self {
        ReportError::MalformedRecord {
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
