use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::lines::load_lines;
use crate::model::{ComparisonResult, FileRole, LineSequence};
use crate::trace::{TraceWriter, record};

/// One aligned position whose lines differ. A side that ran out of lines
/// reads as the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch<'a> {
    pub index: usize,
    pub expected: &'a str,
    pub actual: &'a str,
}

/// Walks both sequences by index up to the longer length and yields every
/// position where the effective lines are not exactly equal.
pub fn mismatches<'a>(
    expected: &'a LineSequence,
    actual: &'a LineSequence,
) -> impl Iterator<Item = Mismatch<'a>> + 'a {
    let total = expected.len().max(actual.len());
    (0..total).filter_map(move |index| {
        let e = expected.effective_line(index);
        let a = actual.effective_line(index);
        (e != a).then_some(Mismatch {
            index,
            expected: e,
            actual: a,
        })
    })
}

pub fn compare_lines(expected: &LineSequence, actual: &LineSequence) -> ComparisonResult {
    let total = expected.len().max(actual.len());
    let differing = mismatches(expected, actual).count();
    ComparisonResult::from_counts(total, differing)
}

/// Loads both files and compares them.
pub fn compare(expected_path: &Path, actual_path: &Path) -> Result<ComparisonResult> {
    compare_traced(expected_path, actual_path, &mut None)
}

/// Same as [`compare`], recording each load, each mismatch and the result to
/// `trace` when one is open.
pub fn compare_traced(
    expected_path: &Path,
    actual_path: &Path,
    trace: &mut Option<TraceWriter>,
) -> Result<ComparisonResult> {
    let expected = load_traced(expected_path, FileRole::Expected, trace)?;
    let actual = load_traced(actual_path, FileRole::Actual, trace)?;

    let mut differing = 0usize;
    for m in mismatches(&expected, &actual) {
        differing += 1;
        record(trace, "line_mismatch", &m);
    }

    let total = expected.len().max(actual.len());
    let result = ComparisonResult::from_counts(total, differing);
    log::debug!(
        "compared {} positions: {} differing, {} matching",
        result.total,
        result.differing,
        result.matching
    );
    record(trace, "report", &result);
    Ok(result)
}

fn load_traced(
    path: &Path,
    role: FileRole,
    trace: &mut Option<TraceWriter>,
) -> Result<LineSequence> {
    let seq = load_lines(path, role)?;
    record(
        trace,
        "file_loaded",
        json!({
            "role": role.as_str(),
            "path": path.display().to_string(),
            "lines": seq.len(),
            "bytes": seq.byte_len(),
            "blake3": seq.digest(),
        }),
    );
    Ok(seq)
}

#[cfg(test)]
#[path = "tests/compare_tests.rs"]
mod tests;
