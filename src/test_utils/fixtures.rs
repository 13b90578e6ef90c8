//! Test fixtures and data builders for consistent test data

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::employee::Employee;

/// The three-employee list used by the scenario tests: one below the usual
/// threshold of four sick days, two above it.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("chris", 3, dec!(15.00)),
        Employee::new("sean", 5, Decimal::ZERO),
        Employee::new("NeverSick", 100, Decimal::ZERO),
    ]
}

/// Builds employees with the given sick-day counts and generated names.
pub fn employees_with_days(days: &[u32]) -> Vec<Employee> {
    days.iter()
        .enumerate()
        .map(|(i, &d)| Employee::new(format!("employee-{i}"), d, Decimal::ZERO))
        .collect()
}
