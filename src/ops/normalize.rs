use chrono::{Local, NaiveDate};

use crate::model::buffer::{BufferError, Cursor, LineBuffer};
use crate::model::config::NewTaskConfig;
use crate::model::task::Annotation;
use crate::ops::{Outcome, Skip, line_at, skipped};
use crate::parse::{CHECKBOX_PREFIX, OPEN_CHECKBOX, char_index_of, checkbox_state, split_indent};

/// Date format used in annotations
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

/// Append each annotation in `kinds` whose marker is not already somewhere in
/// the line, as ` <marker> <date>`.
pub fn annotate(line: &str, kinds: &[Annotation], date: NaiveDate) -> String {
    let stamp = date.format(DATE_FORMAT).to_string();
    let mut out = line.to_string();
    for &kind in kinds {
        if !kind.is_present_in(&out) {
            push_annotation(&mut out, kind, &stamp);
        }
    }
    out
}

/// The default annotation function handed to `normalize_as_task`.
pub fn annotator(kinds: Vec<Annotation>, date: NaiveDate) -> impl FnOnce(&str) -> String {
    move |line| annotate(line, &kinds, date)
}

fn push_annotation(out: &mut String, kind: Annotation, stamp: &str) {
    out.push(' ');
    out.push_str(kind.marker());
    out.push(' ');
    out.push_str(stamp);
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn the line under the cursor into an open task and run `annotate_with`
/// over it.
///
/// A line that is already a task keeps its checkbox; if that checkbox is not
/// open (`- [x]`, `- [/]`, ...) nothing changes. Otherwise `- [ ] ` goes
/// between the indentation and the text. Afterwards the cursor sits one
/// character past the first `]`.
pub fn normalize_as_task<B, F>(buffer: &mut B, annotate_with: F) -> Result<Outcome, BufferError>
where
    B: LineBuffer + ?Sized,
    F: FnOnce(&str) -> String,
{
    let cursor = buffer.cursor();
    let line = line_at(buffer, cursor.line)?;
    let (indent, body) = split_indent(&line);

    let normalized = if body.starts_with(CHECKBOX_PREFIX) {
        if let Some(state) = checkbox_state(body)
            && !state.is_open()
        {
            return Ok(skipped("normalize", Skip::NotOpen { state }));
        }
        line.clone()
    } else {
        format!("{indent}{OPEN_CHECKBOX}{body}")
    };

    let result = annotate_with(&normalized);
    buffer.set_line(cursor.line, &result)?;
    place_cursor_after_checkbox(buffer, cursor.line, &result);
    Ok(Outcome::Applied)
}

/// "New task": normalize and add the annotations enabled in `config`.
pub fn new_task<B>(
    buffer: &mut B,
    config: &NewTaskConfig,
    date: NaiveDate,
) -> Result<Outcome, BufferError>
where
    B: LineBuffer + ?Sized,
{
    normalize_as_task(buffer, annotator(config.annotations(), date))
}

/// "Start work": normalize and add the started annotation, whatever the
/// new-task settings say.
pub fn start_work<B>(buffer: &mut B, date: NaiveDate) -> Result<Outcome, BufferError>
where
    B: LineBuffer + ?Sized,
{
    normalize_as_task(buffer, annotator(vec![Annotation::Started], date))
}

/// Legacy "new task": always prepend a fresh `- [ ] ` and
/// append every enabled annotation, without looking at what the line holds.
pub fn new_task_unconditional<B>(
    buffer: &mut B,
    config: &NewTaskConfig,
    date: NaiveDate,
) -> Result<Outcome, BufferError>
where
    B: LineBuffer + ?Sized,
{
    let cursor = buffer.cursor();
    let line = line_at(buffer, cursor.line)?;
    let (indent, body) = split_indent(&line);

    let stamp = date.format(DATE_FORMAT).to_string();
    let mut result = format!("{indent}{OPEN_CHECKBOX}{body}");
    for kind in config.annotations() {
        push_annotation(&mut result, kind, &stamp);
    }

    buffer.set_line(cursor.line, &result)?;
    place_cursor_after_checkbox(buffer, cursor.line, &result);
    Ok(Outcome::Applied)
}

/// Put the cursor one character past the first `]`. The host clamps the
/// offset when the bracket ends the line.
fn place_cursor_after_checkbox<B>(buffer: &mut B, line_idx: usize, text: &str)
where
    B: LineBuffer + ?Sized,
{
    match char_index_of(text, ']') {
        Some(pos) => buffer.set_cursor(Cursor::new(line_idx, pos + 2)),
        None => tracing::warn!(line = line_idx, text, "unable to place cursor: no `]` in line"),
    }
}
