//! Line-oriented output sink for demos

use std::fmt::{self, Display};

/// Ordered list of output lines produced by one demo run.
///
/// Demos never print directly; they write here and the runner decides
/// where the lines go. This keeps every demo checkable from a test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line rendered with `Display`
    pub fn line(&mut self, value: impl Display) {
        self.lines.push(value.to_string());
    }

    /// All lines written so far, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the transcript, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Extend<String> for Transcript {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}
