//! Console reporting.
//!
//! A `Reporter` turns a sequence of records into a text block, one line per
//! record, and writes it to a sink preceded by a count line. The returned
//! block deliberately excludes the count line so callers can reuse the
//! record text on its own.

use std::any;
use std::fmt::Display;
use std::io::Write;

use crate::error::{ReportError, Result};
use crate::logging::log_report_written;

/// Bare type name for the count line, without the module path.
fn type_label<T>() -> &'static str {
    let name = any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Render records as a text block, one `Display` line per record.
    ///
    /// Empty input renders as an empty block.
    pub fn render<T: Display>(&self, records: &[T]) -> String {
        let mut block = String::new();

        for record in records {
            block.push_str(&record.to_string());
            block.push('\n');
        }

        block
    }

    /// Write a count line and the record block to `out`.
    ///
    /// Returns the record block (count line excluded). An empty sequence
    /// still emits a zero count and returns an empty block.
    pub fn write_records<T: Display>(&self, records: &[T], out: &mut dyn Write) -> Result<String> {
        let block = self.render(records);

        writeln!(out, "Count of {}: {}", type_label::<T>(), records.len())
            .map_err(|e| ReportError::io_error("write count line", e))?;
        out.write_all(block.as_bytes())
            .map_err(|e| ReportError::io_error("write record block", e))?;

        if self.verbose {
            eprintln!("Rendered {} record line(s)", records.len());
        }
        log_report_written(records.len(), block.len());

        Ok(block)
    }

    /// Checked boundary for callers that cannot rule out an absent sequence.
    ///
    /// Fails fast with `InvalidArgument` on `None`.
    pub fn checked_write_records<T: Display>(
        &self,
        records: Option<&[T]>,
        out: &mut dyn Write,
    ) -> Result<String> {
        let records = records.ok_or_else(|| {
            ReportError::invalid_argument(
                "records",
                "expected a sequence of records but none was supplied",
            )
        })?;

        self.write_records(records, out)
    }
}
