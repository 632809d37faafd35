//! Parse statistics and the diagnostics channel.
//!
//! Fatal errors unwind a parse through `Result`; everything advisory lands
//! here instead, so a successful parse can still tell the caller how many
//! rows were dropped and why.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_file::BulkDataFile;

/// A non-fatal condition observed during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A data row was dropped because its identifier failed the check
    /// digit.
    ChecksumRejected { line: usize, identifier: String },

    /// A `DATARECORD=<n>` preamble count disagreed with the number of rows
    /// decoded by the time the marker was seen.
    RowCountMismatch { declared: usize, counted: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ChecksumRejected { line, identifier } => {
                write!(f, "line {line}: check digit invalid, row skipped for identifier {identifier}")
            }
            Diagnostic::RowCountMismatch { declared, counted } => {
                write!(f, "declared record count {declared} does not match {counted} rows decoded")
            }
        }
    }
}

/// Counters and collected diagnostics for one parse pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data lines encountered inside the data section.
    pub total_rows: usize,

    /// Rows decoded and accepted.
    pub rows_decoded: usize,

    /// Rows dropped for failed identifier checksums.
    pub rows_rejected: usize,

    /// Advisory conditions collected along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_decoded: 0,
            rows_rejected: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Fraction of data rows that decoded cleanly, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_decoded as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Whether every data row decoded and no advisory condition fired.
    pub fn is_clean(&self) -> bool {
        self.rows_rejected == 0 && self.diagnostics.is_empty()
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a successful parse: the decoded file plus its statistics.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The decoded, query-ready file.
    pub file: BulkDataFile,

    /// Counters and diagnostics for this pass.
    pub stats: ParseStats,
}
