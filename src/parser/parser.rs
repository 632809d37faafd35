//! Section state machine and parse orchestration.
//!
//! One parse pass owns all intermediate state; nothing is shared between
//! invocations, so separate inputs may be parsed concurrently without
//! coordination. The input handle is held only for the duration of the
//! pass and released on every exit path.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::record::{RowOutcome, decode_data_row};
use super::stats::{Diagnostic, ParseResult, ParseStats};
use crate::config::DecoderConfig;
use crate::constants::{
    END_OF_DATA, END_OF_FIELDS, ROW_COUNT_MARKER, START_OF_DATA, START_OF_FIELDS, START_OF_FILE,
};
use crate::data_file::{BulkDataFile, Record, build_field_index};
use crate::error::{DecodeError, Result};

/// Which part of the file the machine is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Nothing consumed yet; only `START-OF-FILE` is acceptable.
    AwaitingStart,

    /// Between sections. Marker lines open sections, row-count markers are
    /// checked, anything else is ignored for forward compatibility.
    Neutral,

    /// Inside `START-OF-FIELDS` .. `END-OF-FIELDS`.
    InFields,

    /// Inside `START-OF-DATA` .. `END-OF-DATA`.
    InData,
}

/// Parser for section-delimited bulk export files.
#[derive(Debug, Default)]
pub struct BulkFileParser {
    config: DecoderConfig,
}

impl BulkFileParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit configuration.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Parse a bulk export file from disk.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("parsing bulk data file: {}", file_path.display());
        let file = File::open(file_path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a bulk export file from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut machine = SectionMachine::new(&self.config);
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            machine.feed(line.trim(), number + 1)?;
        }
        machine.finish()
    }

    /// Parse a bulk export file already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let mut machine = SectionMachine::new(&self.config);
        for (number, line) in content.lines().enumerate() {
            machine.feed(line.trim(), number + 1)?;
        }
        machine.finish()
    }
}

/// State and accumulators for a single parse pass.
struct SectionMachine<'a> {
    config: &'a DecoderConfig,
    state: ParserState,
    fields: Vec<String>,
    field_index: HashMap<String, usize>,
    records: Vec<Record>,
    stats: ParseStats,
}

impl<'a> SectionMachine<'a> {
    fn new(config: &'a DecoderConfig) -> Self {
        Self {
            config,
            state: ParserState::AwaitingStart,
            fields: Vec::new(),
            field_index: HashMap::new(),
            records: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Consume one trimmed input line.
    fn feed(&mut self, line: &str, line_number: usize) -> Result<()> {
        match self.state {
            ParserState::AwaitingStart => {
                if line == START_OF_FILE {
                    self.state = ParserState::Neutral;
                    Ok(())
                } else {
                    Err(DecodeError::MissingFileStart)
                }
            }
            ParserState::Neutral => {
                match line {
                    START_OF_FIELDS => self.state = ParserState::InFields,
                    START_OF_DATA => self.state = ParserState::InData,
                    _ if line.contains(ROW_COUNT_MARKER) => self.check_row_count(line)?,
                    // Unrecognized preamble lines are tolerated so newer
                    // file revisions keep parsing.
                    _ => {}
                }
                Ok(())
            }
            ParserState::InFields => {
                if line == END_OF_FIELDS {
                    self.field_index = build_field_index(&self.fields)?;
                    debug!("fields section closed with {} names", self.fields.len());
                    self.state = ParserState::Neutral;
                } else {
                    self.fields.push(line.to_string());
                }
                Ok(())
            }
            ParserState::InData => {
                if line == END_OF_DATA {
                    self.state = ParserState::Neutral;
                    return Ok(());
                }
                self.stats.total_rows += 1;
                match decode_data_row(line, &self.fields, line_number)? {
                    RowOutcome::Accepted(record) => {
                        self.records.push(record);
                        self.stats.rows_decoded += 1;
                    }
                    RowOutcome::Rejected { identifier } => {
                        warn!("check digit invalid, skipping line {line_number} for {identifier}");
                        self.stats.rows_rejected += 1;
                        self.stats.diagnostics.push(Diagnostic::ChecksumRejected {
                            line: line_number,
                            identifier,
                        });
                    }
                }
                Ok(())
            }
        }
    }

    /// Compare a `DATARECORD=<n>` declaration against the rows decoded so
    /// far. Advisory unless the configuration escalates it.
    fn check_row_count(&mut self, line: &str) -> Result<()> {
        let Some((_, value)) = line.split_once('=') else {
            warn!("row count marker without a value, ignoring: {line}");
            return Ok(());
        };
        let declared = match value.trim().parse::<usize>() {
            Ok(declared) => declared,
            Err(_) => {
                warn!("row count marker with unparseable value, ignoring: {line}");
                return Ok(());
            }
        };

        let counted = self.records.len();
        if declared != counted {
            if self.config.strict_row_count {
                return Err(DecodeError::RowCountMismatch { declared, counted });
            }
            warn!("not all data rows loaded: declared {declared}, decoded {counted}");
            self.stats
                .diagnostics
                .push(Diagnostic::RowCountMismatch { declared, counted });
        }
        Ok(())
    }

    /// Apply the completion rule once input is exhausted.
    fn finish(self) -> Result<ParseResult> {
        match self.state {
            ParserState::AwaitingStart => Err(DecodeError::MissingFileStart),
            ParserState::InFields => Err(DecodeError::UnterminatedFile { section: "fields" }),
            ParserState::InData => Err(DecodeError::UnterminatedFile { section: "data" }),
            ParserState::Neutral => {
                info!(
                    "decoded {} of {} data rows across {} fields",
                    self.stats.rows_decoded,
                    self.stats.total_rows,
                    self.fields.len()
                );
                Ok(ParseResult {
                    file: BulkDataFile::new(self.fields, self.field_index, self.records),
                    stats: self.stats,
                })
            }
        }
    }
}
