//! Decoded file representation and column queries.
//!
//! A [`BulkDataFile`] is the immutable result of one parse: the declared
//! field order, a name-to-position index, and the accepted rows in file
//! order. Downstream loading stages consume it through [`BulkDataFile::project`]
//! without touching the parser.

use std::collections::HashMap;

use crate::error::{DecodeError, Result};

/// One decoded data row. Values are raw strings aligned positionally with
/// the file's declared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Raw field values in declared-field order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The row's FIGI identifier: by format convention the value of the
    /// last declared field.
    pub fn identifier(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

/// Build the field-name-to-position index, rejecting duplicate names.
///
/// Called when the fields section closes, so a corrupt declaration fails
/// the parse before any data row is decoded against it.
pub(crate) fn build_field_index(fields: &[String]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(fields.len());
    for (position, name) in fields.iter().enumerate() {
        if index.insert(name.clone(), position).is_some() {
            return Err(DecodeError::DuplicateFieldName { name: name.clone() });
        }
    }
    Ok(index)
}

/// Parsed bulk data file.
///
/// Immutable after construction; rows whose identifiers failed checksum
/// validation were dropped during the parse and are not represented here.
#[derive(Debug, Clone)]
pub struct BulkDataFile {
    fields: Vec<String>,
    field_index: HashMap<String, usize>,
    records: Vec<Record>,
}

impl BulkDataFile {
    pub(crate) fn new(
        fields: Vec<String>,
        field_index: HashMap<String, usize>,
        records: Vec<Record>,
    ) -> Self {
        Self {
            fields,
            field_index,
            records,
        }
    }

    /// Field names in the order the file declared them.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of accepted rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Accepted rows in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Extract the values of the requested columns from every row, in the
    /// requested column order.
    ///
    /// Every requested name must have been declared by the file. Unknown
    /// names fail with [`DecodeError::UnknownColumns`] carrying the complete
    /// list of offenders, not just the first.
    pub fn project(&self, columns: &[&str]) -> Result<Vec<Vec<&str>>> {
        let mut positions = Vec::with_capacity(columns.len());
        let mut unknown = Vec::new();
        for &name in columns {
            match self.field_index.get(name) {
                Some(&position) => positions.push(position),
                None => unknown.push(name.to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(DecodeError::UnknownColumns { columns: unknown });
        }

        Ok(self
            .records
            .iter()
            .map(|record| {
                positions
                    .iter()
                    .map(|&position| record.values[position].as_str())
                    .collect()
            })
            .collect())
    }
}
