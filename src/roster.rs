//! The fixed employee roster.
//!
//! Demo-grade data source: the records are hard-coded and returned in a
//! stable order on every call. Loading never fails.

use rust_decimal_macros::dec;

use crate::employee::Employee;
use crate::logging::log_roster_loaded;

/// Load the employee roster.
///
/// Always returns the same records in the same order.
pub fn load_employees() -> Vec<Employee> {
    let employees = vec![
        Employee::new("chris", 5, dec!(15.00)),
        Employee::new("joe", 3, dec!(17.00)),
        Employee::new("harryNeverSick", 100, dec!(10.00)),
    ];

    log_roster_loaded(employees.len());

    employees
}
