//! # rowcheck - streaming, schema-validated comma-separated rows
//!
//! rowcheck reads a comma-separated text file one line at a time and turns
//! every line into a typed record, stopping at the first row that fails
//! validation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Text file  │────▶│ Line stream │────▶│  RowSchema  │────▶│ ParseOutcome │
//! │ (\n, \r\n)  │     │ (lazy, I/O) │     │ (per row)   │     │ Data | Error │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowcheck::{parse_csv, models::PersonRow, ParseOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     match parse_csv("classroster.csv", &PersonRow).await? {
//!         ParseOutcome::Data(people) => println!("{} students", people.len()),
//!         ParseOutcome::Error(err) => eprintln!("{}", err),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - I/O and schema construction errors
//! - [`validation`] - Row issues and validation errors
//! - [`schema`] - The row schema trait and adapters
//! - [`parser`] - Line streaming and the row parser
//! - [`models`] - Built-in person schemas
//! - [`logs`] - Parse progress logging

// Core modules
pub mod error;
pub mod validation;

// Schemas
pub mod models;
pub mod schema;

// Parsing
pub mod parser;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ParseError, ParseResult, SchemaError, SchemaResult};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{Issue, IssueCode, ValidationError};

// =============================================================================
// Re-exports - Schemas
// =============================================================================

pub use schema::{from_fn, FieldReader, FnSchema, JsonSchemaRow, RawRows, Row, RowSchema};

pub use models::{BasicPerson, BasicPersonRow, Person, PersonRow};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_csv, parse_csv_raw, split_row, ParseOutcome, RowParser, DELIMITER};
