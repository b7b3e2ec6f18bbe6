//! Positional field access for hand-written row schemas.
//!
//! A [`FieldReader`] walks one row, hands out typed field values, and records
//! an [`Issue`] for every field that does not satisfy its accessor. Nothing
//! short-circuits inside a row: all issues are collected in field order and
//! returned together from [`FieldReader::build`].
//!
//! ```rust,ignore
//! let mut row = FieldReader::new(fields, 2);
//! let name = row.text(0);
//! let age = row.integer(1, "Age must be an integer");
//! row.build(|| Some(BasicPerson { name: name?.to_string(), age: age? }))
//! ```

use crate::validation::{Issue, IssueCode, ValidationError};

/// Collects typed fields and issues for one row.
#[derive(Debug)]
pub struct FieldReader<'a> {
    fields: &'a [String],
    issues: Vec<Issue>,
}

impl<'a> FieldReader<'a> {
    /// Start reading a row declared to have `arity` fields.
    ///
    /// Extra fields are reported immediately; missing ones are reported by
    /// the accessor that asks for them.
    pub fn new(fields: &'a [String], arity: usize) -> Self {
        let mut issues = Vec::new();
        if fields.len() > arity {
            issues.push(Issue::too_big(arity, fields.len()));
        }
        Self { fields, issues }
    }

    /// The raw field at `index`.
    pub fn text(&mut self, index: usize) -> Option<&'a str> {
        match self.fields.get(index) {
            Some(value) => Some(value.as_str()),
            None => {
                self.issues.push(Issue::missing_field(index));
                None
            }
        }
    }

    /// The field at `index` coerced to an integer.
    ///
    /// Integral decimal and exponent forms (`23.0`, `1e1`) coerce; fractions,
    /// non-finite values, and empty fields do not.
    pub fn integer(&mut self, index: usize, message: &str) -> Option<i64> {
        let value = self.text(index)?;
        match coerce_integer(value) {
            Some(n) => Some(n),
            None => {
                self.issues.push(Issue::invalid_number(index, message));
                None
            }
        }
    }

    /// Record a refinement failure on `index` unless `ok`.
    pub fn check(&mut self, index: usize, ok: bool, message: &str) -> bool {
        if !ok {
            self.issues.push(Issue::custom(index, message));
        }
        ok
    }

    /// Finish the row.
    ///
    /// Returns every collected issue, or the value built by `make`. A `None`
    /// from `make` without a recorded issue is reported as a generic type error.
    pub fn build<T>(self, make: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        if let Some(err) = ValidationError::from_issues(self.issues) {
            return Err(err);
        }
        make().ok_or_else(|| ValidationError::message_only(IssueCode::InvalidType, "Invalid input"))
    }
}

fn coerce_integer(value: &str) -> Option<i64> {
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    let n = value.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    if n.is_finite() && n.fract() == 0.0 && in_range {
        Some(n as i64)
    } else {
        None
    }
}
