use std::fmt;

/// Which side of the comparison a file stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRole {
    Expected,
    Actual,
}

impl FileRole {
    pub fn as_str(self) -> &'static str {
        match self {
            FileRole::Expected => "expected",
            FileRole::Actual => "actual",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lines of one file, terminators removed.
///
/// Immutable once built; the comparison only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
    byte_len: usize,
    digest: String,
}

impl LineSequence {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }
        Self {
            byte_len: text.len(),
            digest: blake3::hash(text.as_bytes()).to_hex().to_string(),
            lines,
        }
    }

    pub(crate) fn from_file_text(text: &str) -> Self {
        Self {
            lines: crate::lines::split_lines(text),
            byte_len: text.len(),
            digest: blake3::hash(text.as_bytes()).to_hex().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Line at `idx`, or the empty string past the end.
    pub fn effective_line(&self, idx: usize) -> &str {
        self.get(idx).unwrap_or("")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// blake3 hex digest of the raw file content.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}
