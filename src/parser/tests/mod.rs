//! Test fixtures shared across the parser test modules.

use std::io::Write;

use tempfile::NamedTempFile;

mod stats_tests;

/// Identifiers with hand-verified check digits.
pub const VALID_FIGI_A: &str = "BBG000B9XRY4";
pub const VALID_FIGI_B: &str = "BBG000BLNNH6";
pub const VALID_FIGI_C: &str = "123456789012";

/// Same as [`VALID_FIGI_A`] with the check digit flipped.
pub const INVALID_FIGI: &str = "BBG000B9XRY5";

/// Build one pipe-delimited data row: three metadata tokens, the given
/// values, and the trailing delimiter.
pub fn data_row(values: &[&str]) -> String {
    format!("SEC DES|0|{}|{}|", values.len(), values.join("|"))
}

/// A complete well-formed file: four fields, three rows, all identifiers
/// valid, row count declared after the data section.
pub fn create_test_bulkfile() -> String {
    format!(
        "START-OF-FILE\n\
         PROGRAMNAME=getdata\n\
         DATEFORMAT=yyyymmdd\n\
         START-OF-FIELDS\n\
         NAME\n\
         CRNCY\n\
         PX_LAST\n\
         ID_BB_GLOBAL\n\
         END-OF-FIELDS\n\
         START-OF-DATA\n\
         {}\n\
         {}\n\
         {}\n\
         END-OF-DATA\n\
         DATARECORD=3\n",
        data_row(&["ACME 7.5 PFD", "USD", "101.25", VALID_FIGI_A]),
        data_row(&["GLOBEX 6 PFD", "CAD", "98.50", VALID_FIGI_B]),
        data_row(&["NORDIC 5.2 PFD", "EUR", "", VALID_FIGI_C]),
    )
}

/// Like [`create_test_bulkfile`], but the middle row's identifier fails
/// the check digit.
pub fn create_bulkfile_with_bad_checksum() -> String {
    format!(
        "START-OF-FILE\n\
         START-OF-FIELDS\n\
         NAME\n\
         ID_BB_GLOBAL\n\
         END-OF-FIELDS\n\
         START-OF-DATA\n\
         {}\n\
         {}\n\
         {}\n\
         END-OF-DATA\n",
        data_row(&["ACME 7.5 PFD", VALID_FIGI_A]),
        data_row(&["BROKEN ROW", INVALID_FIGI]),
        data_row(&["GLOBEX 6 PFD", VALID_FIGI_B]),
    )
}

/// Write content into a temporary file for `parse_file` tests.
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}
