//! Built-in row models.
//!
//! - [`BasicPersonRow`] - `name, age` rows into [`BasicPerson`]
//! - [`PersonRow`] - `name, age, class` rows into [`Person`], with class code checks
//!
//! Both coerce the age field to an integer and keep every other value exactly
//! as it appears in the input (case included).

use serde::{Deserialize, Serialize};

use crate::schema::{FieldReader, RowSchema};
use crate::validation::ValidationError;

pub const AGE_MESSAGE: &str = "Age must be an integer";
pub const DEPARTMENT_MESSAGE: &str = "Class department must be CSCI (case insensitive)";
pub const CLASS_NUMBER_MESSAGE: &str = "Class number must be one of 0220, 0300, or 0320";

/// Department every class code must belong to.
pub const DEPARTMENT: &str = "CSCI";

/// Class numbers a class code may carry.
pub const CLASS_NUMBERS: [&str; 3] = ["0220", "0300", "0320"];

// =============================================================================
// Basic Person
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicPerson {
    pub name: String,
    pub age: i64,
}

/// `name, age`
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPersonRow;

impl RowSchema for BasicPersonRow {
    type Output = BasicPerson;

    fn validate_row(&self, fields: &[String]) -> Result<BasicPerson, ValidationError> {
        let mut row = FieldReader::new(fields, 2);
        let name = row.text(0);
        let age = row.integer(1, AGE_MESSAGE);

        row.build(|| {
            Some(BasicPerson {
                name: name?.to_string(),
                age: age?,
            })
        })
    }
}

// =============================================================================
// Person
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub class: String,
}

/// `name, age, class`
///
/// The class code is `<department> <number>`, e.g. `CSCI 0320`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonRow;

impl RowSchema for PersonRow {
    type Output = Person;

    fn validate_row(&self, fields: &[String]) -> Result<Person, ValidationError> {
        let mut row = FieldReader::new(fields, 3);
        let name = row.text(0);
        let age = row.integer(1, AGE_MESSAGE);
        let class = row.text(2);

        if let Some(code) = class {
            let mut parts = code.split(' ');
            let department = parts.next().unwrap_or("");
            let number = parts.next();

            row.check(2, department.eq_ignore_ascii_case(DEPARTMENT), DEPARTMENT_MESSAGE);
            row.check(
                2,
                number.map_or(false, |n| CLASS_NUMBERS.contains(&n)),
                CLASS_NUMBER_MESSAGE,
            );
        }

        row.build(|| {
            Some(Person {
                name: name?.to_string(),
                age: age?,
                class: class?.to_string(),
            })
        })
    }
}
