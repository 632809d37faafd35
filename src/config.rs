//! Decoder configuration.
//!
//! Parsing behavior that is legitimately a policy choice rather than part of
//! the wire format lives here. The defaults reproduce the standard decoder
//! contract: row-count mismatches are advisory.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::BulkFileParser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Treat a `DATARECORD=<n>` count that disagrees with the number of
    /// decoded rows as a fatal error instead of a collected diagnostic.
    pub strict_row_count: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict_row_count: false,
        }
    }
}

impl DecoderConfig {
    /// Escalate declared-row-count mismatches to fatal errors.
    pub fn with_strict_row_count(mut self) -> Self {
        self.strict_row_count = true;
        self
    }
}
