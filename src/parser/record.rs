//! Individual data row decoding.
//!
//! A data row is pipe-delimited: three leading tokens of format-internal
//! metadata, one token per declared field, and a trailing empty token from
//! the final delimiter. The last field value is the row's FIGI identifier
//! and decides whether the row is kept.

use tracing::debug;

use crate::constants::{FIELD_DELIMITER, METADATA_TOKEN_COUNT};
use crate::data_file::Record;
use crate::error::{DecodeError, Result};
use crate::figi;

/// Outcome of decoding one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RowOutcome {
    /// The row decoded and its identifier passed the check digit.
    Accepted(Record),

    /// The identifier failed the check digit; the row is dropped, the
    /// parse continues.
    Rejected { identifier: String },
}

/// Decode one trimmed, non-marker line from the data section.
///
/// A token count that disagrees with the declared field list is fatal: the
/// delimiter framing itself can no longer be trusted, so the whole parse
/// aborts rather than dropping the row.
pub(crate) fn decode_data_row(
    line: &str,
    fields: &[String],
    line_number: usize,
) -> Result<RowOutcome> {
    let tokens: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    // Drop the metadata prefix and the empty token after the final
    // delimiter; what remains must line up with the declared fields.
    let values = if tokens.len() > METADATA_TOKEN_COUNT {
        &tokens[METADATA_TOKEN_COUNT..tokens.len() - 1]
    } else {
        &[][..]
    };

    if values.len() != fields.len() {
        return Err(DecodeError::FieldCountMismatch {
            line: line_number,
            expected: fields.len(),
            found: values.len(),
        });
    }

    let Some(identifier) = values.last() else {
        // Zero declared fields: nothing to validate, accept the empty row.
        return Ok(RowOutcome::Accepted(Record::new(Vec::new())));
    };

    if !figi::is_valid(identifier) {
        debug!("rejecting row at line {line_number}: invalid check digit on {identifier}");
        return Ok(RowOutcome::Rejected {
            identifier: identifier.to_string(),
        });
    }

    Ok(RowOutcome::Accepted(Record::new(
        values.iter().map(|value| value.to_string()).collect(),
    )))
}
