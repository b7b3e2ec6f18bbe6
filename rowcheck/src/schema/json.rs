//! JSON Schema (draft 7) row validation.
//!
//! Each row is turned into a JSON value and checked against a compiled
//! schema. Without column names the row is an array of strings:
//!
//! ```text
//! Alice, 23   ->  ["Alice", "23"]
//! ```
//!
//! With column names it becomes an object. Missing trailing fields are left
//! out so `required` can catch them; fields past the last column are dropped.
//!
//! ```text
//! columns = [name, age]
//! Alice, 23   ->  {"name": "Alice", "age": "23"}
//! Alice       ->  {"name": "Alice"}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use rowcheck::{parse_csv, JsonSchemaRow};
//!
//! let schema = JsonSchemaRow::new(&json!({
//!     "type": "object",
//!     "required": ["name", "age"],
//!     "properties": { "age": { "type": "string", "pattern": "^[0-9]+$" } }
//! }))?
//! .with_columns(["name", "age"]);
//!
//! let outcome = parse_csv("people.csv", &schema).await?;
//! ```

use serde_json::{Map, Value};
use std::path::Path;

use super::RowSchema;
use crate::error::{SchemaError, SchemaResult};
use crate::validation::{Issue, IssueCode, ValidationError};

/// A row schema backed by a compiled JSON Schema.
pub struct JsonSchemaRow {
    validator: jsonschema::Validator,
    columns: Option<Vec<String>>,
}

impl JsonSchemaRow {
    /// Compile `schema` as draft 7.
    pub fn new(schema: &Value) -> SchemaResult<Self> {
        let validator = jsonschema::draft7::new(schema)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        Ok(Self {
            validator,
            columns: None,
        })
    }

    /// Load and compile a schema file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let schema: Value = serde_json::from_str(&content)?;
        Self::new(&schema)
    }

    /// Validate rows as objects keyed by these column names.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// JSON shape of a row before validation.
    pub fn row_value(&self, fields: &[String]) -> Value {
        match &self.columns {
            None => Value::Array(fields.iter().cloned().map(Value::String).collect()),
            Some(columns) => {
                let obj: Map<String, Value> = columns
                    .iter()
                    .zip(fields.iter())
                    .map(|(column, value)| (column.clone(), Value::String(value.clone())))
                    .collect();
                Value::Object(obj)
            }
        }
    }
}

impl RowSchema for JsonSchemaRow {
    type Output = Value;

    fn validate_row(&self, fields: &[String]) -> Result<Value, ValidationError> {
        let value = self.row_value(fields);

        let issues: Vec<Issue> = self
            .validator
            .iter_errors(&value)
            .map(|e| Issue::new(IssueCode::Schema, e.to_string()))
            .collect();

        match ValidationError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
