//! Property-based tests for the filter and reporter contracts
//!
//! This test suite uses property-based testing to automatically generate
//! rosters and thresholds and check the laws the scenario tests only spot
//! check: the two filter forms agree everywhere, filtering is idempotent and
//! order preserving, and the reporter emits one line per record.

use proptest::prelude::*;
use quickcheck::QuickCheck;
use rust_decimal::Decimal;
use sickday_report::filter::{with_at_least_sick_days, with_at_least_sick_days_scan};
use sickday_report::{Employee, Reporter};

fn employees_from_days(days: &[u32]) -> Vec<Employee> {
    days.iter()
        .enumerate()
        .map(|(i, &d)| Employee::new(format!("employee-{i}"), d, Decimal::ZERO))
        .collect()
}

fn is_subsequence(sub: &[Employee], full: &[Employee]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == s))
}

/// Property: the declarative and explicit-scan forms agree for all inputs
#[test]
fn prop_filter_forms_agree() {
    fn check(days: Vec<u32>, threshold: i64) -> bool {
        let employees = employees_from_days(&days);
        with_at_least_sick_days(&employees, threshold)
            == with_at_least_sick_days_scan(&employees, threshold)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(check as fn(Vec<u32>, i64) -> bool);
}

/// Property: filtering an already-filtered list changes nothing
#[test]
fn prop_filter_idempotent() {
    fn check(days: Vec<u32>, threshold: i64) -> bool {
        let employees = employees_from_days(&days);
        let once = with_at_least_sick_days(&employees, threshold);
        let twice = with_at_least_sick_days(&once, threshold);
        once == twice
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(check as fn(Vec<u32>, i64) -> bool);
}

fn employee_strategy() -> impl Strategy<Value = Employee> {
    ("[a-z]{1,8}", any::<u32>())
        .prop_map(|(name, days)| Employee::new(name, days, Decimal::ZERO))
}

// Property: exactly the records meeting the threshold survive, in order
proptest! {
    #[test]
    fn prop_filter_postcondition(
        employees in prop::collection::vec(employee_strategy(), 0..24),
        threshold in any::<i64>()
    ) {
        let kept = with_at_least_sick_days(&employees, threshold);

        prop_assert!(kept.iter().all(|e| i64::from(e.sick_days) >= threshold));

        let expected = employees
            .iter()
            .filter(|e| i64::from(e.sick_days) >= threshold)
            .count();
        prop_assert_eq!(kept.len(), expected);

        prop_assert!(is_subsequence(&kept, &employees));
    }
}

// Property: a negative threshold keeps the whole roster unchanged
proptest! {
    #[test]
    fn prop_negative_threshold_is_identity(
        employees in prop::collection::vec(employee_strategy(), 0..24),
        threshold in i64::MIN..0i64
    ) {
        let kept = with_at_least_sick_days(&employees, threshold);
        prop_assert_eq!(kept, employees);
    }
}

// Property: the rendered block has one line per record
proptest! {
    #[test]
    fn prop_render_one_line_per_record(
        employees in prop::collection::vec(employee_strategy(), 0..16)
    ) {
        let reporter = Reporter::new(false);
        let block = reporter.render(&employees);
        prop_assert_eq!(block.lines().count(), employees.len());
    }
}

// Property: every rendered line carries its record's name and count
proptest! {
    #[test]
    fn prop_render_lines_match_records(
        employees in prop::collection::vec(employee_strategy(), 1..12)
    ) {
        let reporter = Reporter::new(false);
        let block = reporter.render(&employees);

        for (line, employee) in block.lines().zip(&employees) {
            prop_assert!(line.contains(employee.first_name()));
            prop_assert!(line.contains(&employee.sick_days.to_string()));
        }
    }
}
