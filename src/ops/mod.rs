pub mod block_move;
pub mod normalize;

use crate::model::block::Direction;
use crate::model::buffer::{BufferError, LineBuffer};
use crate::model::task::TaskState;

/// Why an operation left the buffer untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("current line is not a task")]
    NotATask,
    #[error("task is not open: {state}")]
    NotOpen { state: TaskState },
    #[error("cannot move {direction}: boundary reached")]
    BoundaryReached { direction: Direction },
    #[error("no destination for the block")]
    NoDestination,
}

/// Result of an editing operation. Skips are not errors: the buffer and
/// cursor are unchanged and the caller carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(Skip),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn skip_reason(self) -> Option<Skip> {
        match self {
            Outcome::Applied => None,
            Outcome::Skipped(skip) => Some(skip),
        }
    }
}

/// Read a line the host promised exists (the cursor line, or an index below
/// `line_count`).
pub(crate) fn line_at<B>(buffer: &B, index: usize) -> Result<String, BufferError>
where
    B: LineBuffer + ?Sized,
{
    buffer.line(index).ok_or(BufferError::LineOutOfRange {
        index,
        len: buffer.line_count(),
    })
}

/// Log a skip on the diagnostic channel and wrap it.
pub(crate) fn skipped(op: &'static str, skip: Skip) -> Outcome {
    tracing::debug!(op, reason = %skip, "skipped");
    Outcome::Skipped(skip)
}
