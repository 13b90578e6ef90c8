//! Employee data model.
//!
//! `Person` and `Employee` are plain value types: structural equality,
//! cheap to clone, immutable once constructed. The reporter relies on
//! `Employee`'s `Display` rendering, which prints field names alongside
//! values so a report line is self-describing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person, identified (loosely) by first name. No uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name
    pub first_name: String,
}

/// An employee record: a person plus sick-day count and salary.
///
/// `sick_days` is unsigned, so a negative count is unrepresentable.
/// `salary` is an exact decimal amount; it plays no part in filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub person: Person,
    pub sick_days: u32,
    pub salary: Decimal,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, sick_days: u32, salary: Decimal) -> Self {
        Self {
            person: Person {
                first_name: first_name.into(),
            },
            sick_days,
            salary,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.person.first_name
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {{ first_name: {}, sick_days: {}, salary: {} }}",
            self.person.first_name, self.sick_days, self.salary
        )
    }
}
