use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::model::ComparisonResult;

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total lines: {}", self.total)?;
        writeln!(f, "Differing lines: {}", self.differing)?;
        writeln!(f, "Matching lines: {}", self.matching)?;
        writeln!(f, "Accuracy: {:.2}%", self.accuracy)
    }
}

pub fn render_report(result: &ComparisonResult) -> String {
    result.to_string()
}

pub fn write_report<W: Write>(out: &mut W, result: &ComparisonResult) -> Result<()> {
    out.write_all(render_report(result).as_bytes())
        .context("write report")?;
    out.flush().context("flush report")
}

pub fn print_report(result: &ComparisonResult) -> Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), result)
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
