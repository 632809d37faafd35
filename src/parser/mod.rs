//! Parser for section-delimited bulk export files.
//!
//! The input is consumed line by line through a state machine that tracks
//! which section of the file is active. Structural corruption (missing or
//! unbalanced markers, field-count mismatches) aborts the parse; row-level
//! corruption (a failed identifier checksum) drops only the offending row
//! and is reported through the collected diagnostics.
//!
//! ## Architecture
//!
//! - [`parser`] - Section state machine and parse orchestration
//! - [`record`] - Individual data row decoding
//! - [`stats`] - Parse statistics and the diagnostics channel
//!
//! ## Usage
//!
//! ```rust
//! use bulkfile_decoder::BulkFileParser;
//!
//! # fn example() -> bulkfile_decoder::Result<()> {
//! let parser = BulkFileParser::new();
//! let result = parser.parse_file(std::path::Path::new("preferreds.out"))?;
//!
//! println!(
//!     "decoded {} of {} rows",
//!     result.file.row_count(),
//!     result.stats.total_rows
//! );
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::BulkFileParser;
pub use stats::{Diagnostic, ParseResult, ParseStats};
