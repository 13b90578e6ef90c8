use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io::{self, Write};

use sickday_report::error::ReportError;
use sickday_report::filter::checked_with_at_least_sick_days;
use sickday_report::logging::init_logging;
use sickday_report::report::Reporter;
use sickday_report::roster;

/// Minimum sick-day count for inclusion in the report.
const DEFAULT_THRESHOLD: i64 = 4;

#[derive(Parser)]
#[command(name = "sickdays")]
#[command(author = "Sickday Report Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Report employees at or above a sick-day threshold", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    let reporter = Reporter::new(cli.verbose);
    let mut stdout = io::stdout().lock();

    process_records(&reporter, DEFAULT_THRESHOLD, &mut stdout)?;

    Ok(())
}

/// Run the pipeline once: load, filter, report.
fn process_records(
    reporter: &Reporter,
    threshold: i64,
    out: &mut dyn Write,
) -> Result<(), ReportError> {
    let employees = roster::load_employees();

    writeln!(
        out,
        "{} Sick-day report (minimum {} days)",
        "→".green(),
        threshold.to_string().cyan()
    )
    .map_err(|e| ReportError::io_error("write report header", e))?;

    writeln!(out, "Employee List Count: {}", employees.len())
        .map_err(|e| ReportError::io_error("write roster count", e))?;

    let filtered = checked_with_at_least_sick_days(Some(&employees), threshold)?;

    reporter.write_records(&filtered, out)?;

    Ok(())
}
