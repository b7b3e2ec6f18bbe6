//! Row schemas: the capability that turns raw field values into typed records.
//!
//! Anything implementing [`RowSchema`] can drive the parser:
//!
//! - [`RawRows`] - no validation, every line (header included) comes back as strings
//! - closures `Fn(&[String]) -> Result<T, ValidationError>` through [`from_fn`]
//! - hand-written schemas built on [`FieldReader`] (see [`crate::models`])
//! - [`JsonSchemaRow`] - draft 7 JSON Schema validation

pub mod fields;
pub mod json;

pub use fields::FieldReader;
pub use json::JsonSchemaRow;

use crate::validation::ValidationError;

/// One line's field values, split on the delimiter and trimmed.
pub type Row = Vec<String>;

/// Validates one row and produces its typed value.
pub trait RowSchema {
    type Output;

    fn validate_row(&self, fields: &[String]) -> Result<Self::Output, ValidationError>;

    /// Whether the first row is a header to set aside.
    fn skips_header(&self) -> bool {
        true
    }
}

impl<S: RowSchema + ?Sized> RowSchema for &S {
    type Output = S::Output;

    fn validate_row(&self, fields: &[String]) -> Result<Self::Output, ValidationError> {
        (**self).validate_row(fields)
    }

    fn skips_header(&self) -> bool {
        (**self).skips_header()
    }
}

/// Schema backed by a closure. Built with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSchema<F> {
    f: F,
}

/// Use a closure as a row schema.
pub fn from_fn<T, F>(f: F) -> FnSchema<F>
where
    F: Fn(&[String]) -> Result<T, ValidationError>,
{
    FnSchema { f }
}

impl<T, F> RowSchema for FnSchema<F>
where
    F: Fn(&[String]) -> Result<T, ValidationError>,
{
    type Output = T;

    fn validate_row(&self, fields: &[String]) -> Result<T, ValidationError> {
        (self.f)(fields)
    }
}

/// Pass-through mode: no header, no validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRows;

impl RowSchema for RawRows {
    type Output = Row;

    fn validate_row(&self, fields: &[String]) -> Result<Row, ValidationError> {
        Ok(fields.to_vec())
    }

    fn skips_header(&self) -> bool {
        false
    }
}
