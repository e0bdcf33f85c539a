use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{FileRole, LineSequence};

/// Reads `path` fully and splits it into lines.
///
/// A missing file and any other read failure (permissions, I/O, invalid
/// UTF-8) are returned as errors; the caller decides whether to abort.
pub fn load_lines(path: &Path, role: FileRole) -> Result<LineSequence> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(err)
                .with_context(|| format!("{} file not found: {}", role, path.display()));
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("read {} file {}", role, path.display()));
        }
    };

    let text = String::from_utf8(bytes).with_context(|| {
        format!(
            "read {} file {}: not valid UTF-8 text",
            role,
            path.display()
        )
    })?;

    let seq = LineSequence::from_file_text(&text);
    log::debug!(
        "loaded {} file {}: {} lines, {} bytes",
        role,
        path.display(),
        seq.len(),
        seq.byte_len()
    );
    Ok(seq)
}

/// Splits text on `\n`, `\r\n` or a lone `\r`, dropping the terminators.
///
/// A trailing terminator does not open an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => out.push(std::mem::take(&mut cur)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(std::mem::take(&mut cur));
            }
            _ => cur.push(c),
        }
    }

    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

#[cfg(test)]
#[path = "tests/lines_tests.rs"]
mod tests;
