use crate::model::block::{Direction, TaskBlock};
use crate::model::buffer::{BufferError, Cursor, LineBuffer};
use crate::ops::{Outcome, Skip, line_at, skipped};
use crate::parse::{char_len, count_indent, is_blank, is_task_line};

// ---------------------------------------------------------------------------
// Block detection
// ---------------------------------------------------------------------------

/// Collect the block anchored at `start`: the anchor plus every following
/// line indented deeper than `base_indent`. The first line at or above
/// `base_indent` ends the block, and so does an empty line.
pub fn find_task_block(lines: &[String], start: usize, base_indent: usize) -> TaskBlock {
    let sub_lines = lines
        .iter()
        .skip(start + 1)
        .take_while(|line| count_indent(line) > base_indent);

    let block_lines: Vec<String> = lines
        .get(start)
        .into_iter()
        .chain(sub_lines)
        .cloned()
        .collect();

    TaskBlock {
        start,
        end: start + block_lines.len().saturating_sub(1),
        lines: block_lines,
    }
}

/// Whether the nearest non-blank line beyond the block in `direction` is a
/// task. Document start/end and any other kind of line are boundaries.
pub fn can_move(lines: &[String], block: &TaskBlock, direction: Direction) -> bool {
    let first_non_blank = match direction {
        Direction::Up => lines[..block.start].iter().rev().find(|l| !is_blank(l)),
        Direction::Down => lines
            .iter()
            .skip(block.next_line())
            .find(|l| !is_blank(l)),
    };
    first_non_blank.is_some_and(|line| is_task_line(line))
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// Line index the block should be inserted before, in the coordinates of the
/// buffer as it is now (block still in place).
pub fn destination(lines: &[String], block: &TaskBlock, direction: Direction) -> usize {
    let indent = block.lines.first().map_or(0, |anchor| count_indent(anchor));
    match direction {
        Direction::Up => destination_up(lines, block.start, indent),
        Direction::Down => destination_down(lines, block.end, indent),
    }
}

/// Walk up to the previous sibling (land on it) or to the parent (land just
/// below it). Deeper lines are passed over.
fn destination_up(lines: &[String], start: usize, indent: usize) -> usize {
    for idx in (0..start).rev() {
        let line = &lines[idx];
        if is_blank(line) {
            continue;
        }
        let line_indent = count_indent(line);
        if line_indent == indent {
            return idx;
        }
        if line_indent < indent {
            return idx + 1;
        }
    }
    0
}

/// Land after the whole next sibling block, sub-lines included. With nothing
/// at or above our indentation further down, append at the end.
fn destination_down(lines: &[String], end: usize, indent: usize) -> usize {
    let next_start = (end + 1..lines.len())
        .find(|&idx| !is_blank(&lines[idx]) && count_indent(&lines[idx]) <= indent);

    match next_start {
        Some(next) => find_task_block(lines, next, indent).next_line(),
        None => lines.len(),
    }
}

// ---------------------------------------------------------------------------
// Relocation
// ---------------------------------------------------------------------------

/// Take the block out and insert it before `target`. Returns the new lines
/// and the index the anchor ended up at. `block` must come from
/// `find_task_block` over the same `lines`.
pub fn relocate_block(lines: &[String], block: &TaskBlock, target: usize) -> (Vec<String>, usize) {
    let mut without: Vec<String> = Vec::with_capacity(lines.len());
    without.extend_from_slice(&lines[..block.start]);
    without.extend_from_slice(&lines[block.next_line()..]);

    // Removing the block shifts everything below it up
    let adjusted = if target > block.end {
        target - block.len()
    } else {
        target
    };

    let mut result = Vec::with_capacity(lines.len());
    result.extend_from_slice(&without[..adjusted]);
    result.extend_from_slice(&block.lines);
    result.extend_from_slice(&without[adjusted..]);
    (result, adjusted)
}

/// Move the task block under the cursor past its neighbouring sibling block.
///
/// The buffer is rewritten in one `set_content` call. The cursor follows the
/// anchor line and keeps its column where the line allows.
pub fn move_task_block<B>(buffer: &mut B, direction: Direction) -> Result<Outcome, BufferError>
where
    B: LineBuffer + ?Sized,
{
    const OP: &str = "move_task_block";

    let cursor = buffer.cursor();
    let lines = (0..buffer.line_count())
        .map(|idx| line_at(&*buffer, idx))
        .collect::<Result<Vec<_>, _>>()?;

    let anchor = lines.get(cursor.line).ok_or(BufferError::LineOutOfRange {
        index: cursor.line,
        len: lines.len(),
    })?;
    if !is_task_line(anchor) {
        return Ok(skipped(OP, Skip::NotATask));
    }

    let block = find_task_block(&lines, cursor.line, count_indent(anchor));
    if !can_move(&lines, &block, direction) {
        return Ok(skipped(OP, Skip::BoundaryReached { direction }));
    }

    let target = destination(&lines, &block, direction);
    if target == block.start {
        return Ok(skipped(OP, Skip::NoDestination));
    }

    let (moved, new_line) = relocate_block(&lines, &block, target);
    tracing::debug!(
        op = OP,
        %direction,
        start = block.start,
        end = block.end,
        destination = target,
        new_line,
        "moving block"
    );
    buffer.set_content(&moved.join("\n"));

    let ch = if cursor.ch > 0 {
        cursor.ch.min(char_len(&moved[new_line]))
    } else {
        0
    };
    buffer.set_cursor(Cursor::new(new_line, ch));
    Ok(Outcome::Applied)
}
