use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a block move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// A task line (the anchor) plus the lines after it that are indented deeper.
///
/// Invariant: `end >= start` and `lines.len() == end - start + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlock {
    /// Index of the anchor line
    pub start: usize,
    /// Index of the last line (inclusive)
    pub end: usize,
    /// Line contents, in buffer order
    pub lines: Vec<String>,
}

impl TaskBlock {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line index just past this block
    pub fn next_line(&self) -> usize {
        self.end + 1
    }
}
