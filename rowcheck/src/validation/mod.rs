//! Validation issues reported by row schemas.
//!
//! A schema that rejects a row returns a [`ValidationError`]: a non-empty,
//! ordered list of [`Issue`]s. The parser attaches the line number of the
//! offending row before handing the error back to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use rowcheck::validation::{Issue, ValidationError};
//!
//! let issue = Issue::custom(2, "Class number must be one of 0220, 0300, or 0320");
//! let err = ValidationError::new(issue).at_line(4);
//! assert_eq!(err.to_string(), "Line 4: Class number must be one of 0220, 0300, or 0320");
//! ```

use serde::{Deserialize, Serialize};

/// Message for a field the row does not have.
pub const MISSING_FIELD_MESSAGE: &str = "Invalid input: expected string, received undefined";

// =============================================================================
// Issue
// =============================================================================

/// Kind of problem an [`Issue`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A field is missing or has the wrong shape.
    InvalidType,
    /// A field could not be coerced to a number.
    InvalidNumber,
    /// The row has more fields than the schema declares.
    TooBig,
    /// A refinement predicate failed.
    Custom,
    /// Reported by a JSON Schema validator.
    Schema,
}

/// One reason a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    /// Zero-based field index, when the issue concerns a single field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
        }
    }

    pub fn at_field(mut self, field: usize) -> Self {
        self.field = Some(field);
        self
    }

    /// The field at `field` is absent from the row.
    pub fn missing_field(field: usize) -> Self {
        Self::new(IssueCode::InvalidType, MISSING_FIELD_MESSAGE).at_field(field)
    }

    /// The field at `field` is not a number.
    pub fn invalid_number(field: usize, message: impl Into<String>) -> Self {
        Self::new(IssueCode::InvalidNumber, message).at_field(field)
    }

    /// A refinement on the field at `field` failed.
    pub fn custom(field: usize, message: impl Into<String>) -> Self {
        Self::new(IssueCode::Custom, message).at_field(field)
    }

    /// The row carries `received` fields where at most `expected` are allowed.
    pub fn too_big(expected: usize, received: usize) -> Self {
        Self::new(
            IssueCode::TooBig,
            format!("Too big: expected at most {} fields, received {}", expected, received),
        )
    }
}

// =============================================================================
// ValidationError
// =============================================================================

/// Why a row failed its schema.
///
/// Always holds at least one issue; the constructors enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    issues: Vec<Issue>,
    /// 1-based line of the failing row in the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl ValidationError {
    pub fn new(first: Issue) -> Self {
        Self {
            issues: vec![first],
            line: None,
        }
    }

    /// Build from collected issues. `None` when there are none.
    pub fn from_issues(issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues, line: None })
        }
    }

    /// Shorthand for a single issue with only a message.
    pub fn message_only(code: IssueCode, message: impl Into<String>) -> Self {
        Self::new(Issue::new(code, message))
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn first_issue(&self) -> &Issue {
        &self.issues[0]
    }

    /// Message of the first issue.
    pub fn message(&self) -> &str {
        &self.first_issue().message
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        Self::new(issue)
    }
}
