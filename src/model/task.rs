use serde::{Deserialize, Serialize};
use std::fmt;

/// Task checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Todo,
    InProgress,
    Done,
    Cancelled,
    /// Any other single status character
    Other(char),
}

impl TaskState {
    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(self) -> char {
        match self {
            TaskState::Todo => ' ',
            TaskState::InProgress => '/',
            TaskState::Done => 'x',
            TaskState::Cancelled => '-',
            TaskState::Other(c) => c,
        }
    }

    /// Parse a checkbox character into a state
    pub fn from_checkbox_char(c: char) -> TaskState {
        match c {
            ' ' => TaskState::Todo,
            '/' => TaskState::InProgress,
            'x' | 'X' => TaskState::Done,
            '-' => TaskState::Cancelled,
            other => TaskState::Other(other),
        }
    }

    /// Only open tasks may be rewritten by normalization
    pub fn is_open(self) -> bool {
        self == TaskState::Todo
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.checkbox_char())
    }
}

/// A date-stamped annotation appended to a task line, e.g. `➕ 2025-05-14`.
///
/// The marker glyph doubles as the idempotency key: a line that already
/// contains the glyph anywhere is considered annotated. New kinds must pick
/// glyphs that cannot collide with ordinary line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    /// `➕ 2025-05-14`
    Created,
    /// `⏳ 2025-05-14`
    Scheduled,
    /// `🛫 2025-05-14`
    Started,
}

impl Annotation {
    pub fn marker(self) -> &'static str {
        match self {
            Annotation::Created => "➕",
            Annotation::Scheduled => "⏳",
            Annotation::Started => "🛫",
        }
    }

    /// Returns the key name for this annotation
    pub fn key(self) -> &'static str {
        match self {
            Annotation::Created => "created",
            Annotation::Scheduled => "scheduled",
            Annotation::Started => "started",
        }
    }

    /// Whether `line` already carries this annotation
    pub fn is_present_in(self, line: &str) -> bool {
        line.contains(self.marker())
    }
}
