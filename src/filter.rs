//! Sick-day threshold filtering.
//!
//! The filter exists in two deliberately equivalent forms: a declarative
//! iterator pipeline and an explicit element-by-element scan. Both return
//! the employees whose sick-day count is at least the threshold, in their
//! original relative order, without mutating the input. Their equivalence
//! is asserted by the property suite.

use crate::employee::Employee;
use crate::error::{ReportError, Result};
use crate::logging::log_filter_applied;

/// Select employees with at least `threshold` sick days, iterator form.
///
/// `threshold` is signed: a negative threshold matches every record, one
/// larger than any present count matches none.
pub fn with_at_least_sick_days(employees: &[Employee], threshold: i64) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| i64::from(e.sick_days) >= threshold)
        .cloned()
        .collect()
}

/// Select employees with at least `threshold` sick days, explicit-scan form.
///
/// Behaviorally identical to [`with_at_least_sick_days`]; kept as a second
/// implementation of the same contract.
pub fn with_at_least_sick_days_scan(employees: &[Employee], threshold: i64) -> Vec<Employee> {
    let mut result = Vec::new();

    for e in employees {
        if i64::from(e.sick_days) >= threshold {
            result.push(e.clone());
        }
    }

    result
}

/// Checked boundary for callers that cannot rule out an absent sequence.
///
/// Fails fast with `InvalidArgument` on `None` instead of leaving the
/// behavior undefined. Logs the filter outcome on the success path.
pub fn checked_with_at_least_sick_days(
    employees: Option<&[Employee]>,
    threshold: i64,
) -> Result<Vec<Employee>> {
    let employees = employees.ok_or_else(|| {
        ReportError::invalid_argument(
            "employees",
            "expected a sequence of employees but none was supplied",
        )
    })?;

    let matched = with_at_least_sick_days(employees, threshold);
    log_filter_applied(threshold, matched.len(), employees.len());

    Ok(matched)
}
