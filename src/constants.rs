//! Format constants for the bulk export file layout.
//!
//! All marker strings and structural literals of the wire format live here,
//! so the parser and the tests share a single definition.

// =============================================================================
// Section Markers
// =============================================================================

/// Opens the file; nothing before this line is tolerated.
pub const START_OF_FILE: &str = "START-OF-FILE";

/// Opens the field-name section.
pub const START_OF_FIELDS: &str = "START-OF-FIELDS";

/// Closes the field-name section.
pub const END_OF_FIELDS: &str = "END-OF-FIELDS";

/// Opens the data section.
pub const START_OF_DATA: &str = "START-OF-DATA";

/// Closes the data section.
pub const END_OF_DATA: &str = "END-OF-DATA";

/// Preamble lines carrying a declared row count contain this marker,
/// followed by `=<count>`.
pub const ROW_COUNT_MARKER: &str = "DATARECORD";

// =============================================================================
// Data Row Layout
// =============================================================================

/// Delimiter between tokens of a data row.
pub const FIELD_DELIMITER: char = '|';

/// Number of leading tokens on each data row that are format-internal
/// metadata, not business field values.
pub const METADATA_TOKEN_COUNT: usize = 3;

// =============================================================================
// Identifier Layout
// =============================================================================

/// Full length of a FIGI identifier, check digit included.
pub const FIGI_LENGTH: usize = 12;

/// Length of the identifier body the check digit is computed over.
pub const FIGI_BODY_LENGTH: usize = FIGI_LENGTH - 1;
