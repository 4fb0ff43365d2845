use serde::{Deserialize, Serialize};

/// Cursor position: zero-indexed line and character offset within that line.
/// Offsets count `char`s, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub line: usize,
    pub ch: usize,
}

impl Cursor {
    pub fn new(line: usize, ch: usize) -> Self {
        Cursor { line, ch }
    }
}

/// Error type for buffer access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("line {index} is out of range (buffer has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

/// The capability set a host editor hands to the editing operations.
///
/// Operations borrow the buffer for the duration of one call and never keep
/// it. Implementations own the text and the cursor.
pub trait LineBuffer {
    fn line_count(&self) -> usize;

    /// The line at `index`, or `None` past the end.
    fn line(&self, index: usize) -> Option<String>;

    fn set_line(&mut self, index: usize, text: &str) -> Result<(), BufferError>;

    /// All lines joined by `\n`.
    fn content(&self) -> String;

    /// Replace the whole buffer; `text` is split on `\n`.
    fn set_content(&mut self, text: &str);

    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);
}

/// In-memory line buffer with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl TextBuffer {
    /// Build a buffer from text. The cursor starts at the top.
    pub fn from_text(text: &str) -> Self {
        TextBuffer {
            lines: split_lines(text),
            cursor: Cursor::default(),
        }
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut lines: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        TextBuffer {
            lines,
            cursor: Cursor::default(),
        }
    }

    /// Builder-style cursor placement (clamped like `set_cursor`).
    pub fn with_cursor(mut self, line: usize, ch: usize) -> Self {
        self.set_cursor(Cursor::new(line, ch));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn clamp(&self, cursor: Cursor) -> Cursor {
        let line = cursor.line.min(self.lines.len().saturating_sub(1));
        let len = self.lines.get(line).map_or(0, |l| l.chars().count());
        Cursor::new(line, cursor.ch.min(len))
    }
}

impl LineBuffer for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }

    fn set_line(&mut self, index: usize, text: &str) -> Result<(), BufferError> {
        let len = self.lines.len();
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(BufferError::LineOutOfRange { index, len })?;
        *slot = text.to_string();
        self.cursor = self.clamp(self.cursor);
        Ok(())
    }

    fn content(&self) -> String {
        self.lines.join("\n")
    }

    fn set_content(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.cursor = self.clamp(self.cursor);
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = self.clamp(cursor);
    }
}

fn split_lines(text: &str) -> Vec<String> {
    // `split` always yields at least one item, so an empty text is one empty line
    text.split('\n').map(str::to_string).collect()
}
