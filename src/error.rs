//! Error handling for bulk file decoding.
//!
//! Fatal structural conditions abort a parse through [`DecodeError`];
//! row-level and advisory conditions travel separately as
//! [`crate::parser::Diagnostic`] values and never fail the parse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file structure invalid: no START-OF-FILE marker found")]
    MissingFileStart,

    #[error("file structure invalid: input ended inside an open {section} section")]
    UnterminatedFile { section: &'static str },

    #[error("duplicate field name declared in fields section: {name}")]
    DuplicateFieldName { name: String },

    #[error("data row at line {line} has {found} values but {expected} fields are declared")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("declared record count {declared} does not match {counted} rows decoded")]
    RowCountMismatch { declared: usize, counted: usize },

    #[error("data not available for requested fields: {}", columns.join(", "))]
    UnknownColumns { columns: Vec<String> },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
