use crate::model::task::TaskState;

/// The checkbox prefix every task line starts with (after indentation)
pub const CHECKBOX_PREFIX: &str = "- [";

/// The prefix inserted in front of a line that becomes a task
pub const OPEN_CHECKBOX: &str = "- [ ] ";

/// Count leading whitespace characters. Tabs and spaces count one each.
pub fn count_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Split a line into its indentation prefix and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let body = line.trim_start();
    line.split_at(line.len() - body.len())
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A task line is any line whose trimmed text starts with `- [`.
pub fn is_task_line(line: &str) -> bool {
    line.trim_start().starts_with(CHECKBOX_PREFIX)
}

/// The status inside the checkbox, or `None` if the line is not a task or
/// the marker is cut off right after `- [`.
pub fn checkbox_state(line: &str) -> Option<TaskState> {
    line.trim_start()
        .strip_prefix(CHECKBOX_PREFIX)
        .and_then(|rest| rest.chars().next())
        .map(TaskState::from_checkbox_char)
}

/// Character offset of the first occurrence of `needle` in `line`.
pub fn char_index_of(line: &str, needle: char) -> Option<usize> {
    line.chars().position(|c| c == needle)
}

pub fn char_len(line: &str) -> usize {
    line.chars().count()
}
