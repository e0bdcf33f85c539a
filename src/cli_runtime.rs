use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use compare_outputs::compare::compare_traced;
use compare_outputs::report::print_report;
use compare_outputs::trace::{TraceWriter, record};

pub(crate) const EXPECTED_PATH: &str = "expected_output.txt";
pub(crate) const ACTUAL_PATH: &str = "output.txt";

#[derive(Parser)]
#[command(name = "compare-outputs", version)]
#[command(
    about = "Compare output.txt against expected_output.txt line by line",
    long_about = "Compares output.txt against expected_output.txt (both in the current \
                  directory) position by position and prints total, differing and \
                  matching line counts with an accuracy percentage."
)]
pub(crate) struct Cli {
    /// Append a JSONL trace of the run to this file
    #[arg(long = "trace", value_name = "PATH")]
    trace: Option<PathBuf>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut trace = cli.trace.as_deref().and_then(open_trace);

    record(
        &mut trace,
        "run_start",
        json!({
            "cwd": std::env::current_dir().ok().map(|p| p.display().to_string()),
            "expected": EXPECTED_PATH,
            "actual": ACTUAL_PATH,
        }),
    );

    let outcome = compare_traced(Path::new(EXPECTED_PATH), Path::new(ACTUAL_PATH), &mut trace)
        .and_then(|result| print_report(&result));

    match &outcome {
        Ok(()) => record(&mut trace, "run_end", json!({"reason": "ok"})),
        Err(err) => {
            record(&mut trace, "run_error", json!({"error": format!("{:#}", err)}));
            record(&mut trace, "run_end", json!({"reason": "error"}));
        }
    }
    if let Some(writer) = &trace {
        log::debug!(
            "trace: {} events written to {}",
            writer.events_written(),
            writer.path().display()
        );
    }
    outcome
}

fn open_trace(path: &Path) -> Option<TraceWriter> {
    match TraceWriter::open(path) {
        Ok(writer) => {
            log::debug!("trace enabled: {}", path.display());
            Some(writer)
        }
        Err(err) => {
            eprintln!("trace disabled: {:#}", err);
            None
        }
    }
}
