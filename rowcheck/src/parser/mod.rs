//! Streaming comma-separated row parser.
//!
//! Lines are pulled one at a time from an async source, split on `,`, trimmed,
//! and handed to a [`RowSchema`]. With a schema the first row is a header and
//! is set aside; the first row the schema rejects stops the parse and becomes
//! the outcome. Lines after it are never read.
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌────────────┐     ┌──────────────┐
//! │ line source│────▶│ split+trim │────▶│  RowSchema │────▶│ ParseOutcome │
//! │  (lazy)    │     │    Row     │     │ (per row)  │     │ Data | Error │
//! └────────────┘     └────────────┘     └────────────┘     └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use rowcheck::{parse_csv, models::BasicPersonRow, ParseOutcome};
//!
//! match parse_csv("people.csv", &BasicPersonRow).await? {
//!     ParseOutcome::Data(people) => println!("{} people", people.len()),
//!     ParseOutcome::Error(err) => eprintln!("{}", err),
//! }
//! ```

pub mod source;

use futures::stream::{Stream, StreamExt};
use serde::Serialize;
use std::io;
use std::path::Path;
use tokio::io::AsyncBufRead;

use crate::error::{ParseError, ParseResult};
use crate::logs::{log_error, log_info, log_success, log_warning, log_warning_indent};
use crate::schema::{RawRows, Row, RowSchema};
use crate::validation::ValidationError;

/// Field delimiter. Fixed; no quoting or escaping.
pub const DELIMITER: char = ',';

/// Split a line on [`DELIMITER`] and trim every field.
///
/// A blank line yields a single empty field.
pub fn split_row(line: &str) -> Row {
    line.split(DELIMITER).map(|v| v.trim().to_string()).collect()
}

// =============================================================================
// ParseOutcome
// =============================================================================

/// Every typed row, or the first row's validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseOutcome<T> {
    Data(Vec<T>),
    Error(ValidationError),
}

impl<T> ParseOutcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, ParseOutcome::Data(_))
    }

    pub fn data(&self) -> Option<&[T]> {
        match self {
            ParseOutcome::Data(rows) => Some(rows),
            ParseOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ParseOutcome::Data(_) => None,
            ParseOutcome::Error(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Vec<T>, ValidationError> {
        match self {
            ParseOutcome::Data(rows) => Ok(rows),
            ParseOutcome::Error(err) => Err(err),
        }
    }
}

// =============================================================================
// RowParser
// =============================================================================

/// Drives one schema over a line source.
#[derive(Debug, Clone, Default)]
pub struct RowParser<S> {
    schema: S,
}

impl RowParser<RawRows> {
    /// A parser that returns every line as raw strings.
    pub fn raw() -> Self {
        Self { schema: RawRows }
    }
}

impl<S: RowSchema> RowParser<S> {
    pub fn new(schema: S) -> Self {
        Self { schema }
    }

    /// Open `path` and parse it line by line.
    pub async fn parse_file<P>(&self, path: P) -> ParseResult<ParseOutcome<S::Output>>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        log_info(format!("Parsing {}", path.display()));

        let lines = source::open_lines(path).await.map_err(|e| {
            log_error(e.to_string());
            e
        })?;
        self.parse_lines(lines).await
    }

    /// Parse from any async buffered reader.
    pub async fn parse_reader<R>(&self, reader: R) -> ParseResult<ParseOutcome<S::Output>>
    where
        R: AsyncBufRead + Unpin,
    {
        self.parse_lines(source::reader_lines(reader)).await
    }

    /// Parse a stream of lines, already stripped of their terminators.
    pub async fn parse_lines<L>(&self, mut lines: L) -> ParseResult<ParseOutcome<S::Output>>
    where
        L: Stream<Item = io::Result<String>> + Unpin,
    {
        let mut header: Option<Row> = None;
        let mut rows = Vec::new();
        let mut line_no = 0;

        while let Some(line) = lines.next().await {
            line_no += 1;
            let line = line.map_err(|source| ParseError::Read { line: line_no, source })?;
            let fields = split_row(&line);

            if self.schema.skips_header() && header.is_none() {
                header = Some(fields);
                continue;
            }

            match self.schema.validate_row(&fields) {
                Ok(value) => rows.push(value),
                Err(err) => {
                    let err = err.at_line(line_no);
                    log_warning(format!(
                        "Line {} rejected after {} valid rows",
                        line_no,
                        rows.len()
                    ));
                    log_warning_indent(err.message(), 1);
                    return Ok(ParseOutcome::Error(err));
                }
            }
        }

        log_success(format!("Parsed {} rows from {} lines", rows.len(), line_no));
        Ok(ParseOutcome::Data(rows))
    }
}

/// Parse a file through `schema`, setting the first row aside as a header.
pub async fn parse_csv<P, S>(path: P, schema: &S) -> ParseResult<ParseOutcome<S::Output>>
where
    P: AsRef<Path>,
    S: RowSchema,
{
    RowParser::new(schema).parse_file(path).await
}

/// Parse a file into raw string rows, header included.
pub async fn parse_csv_raw<P: AsRef<Path>>(path: P) -> ParseResult<ParseOutcome<Row>> {
    RowParser::raw().parse_file(path).await
}
