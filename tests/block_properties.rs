//! Whole-outline checks for block moves and normalization, run through the
//! public API the way a host editor would drive it.

use pretty_assertions::assert_eq;
use tasks_enhancer::model::{BufferError, Cursor, Direction, LineBuffer, NewTaskConfig, TextBuffer};
use tasks_enhancer::ops::block_move::{find_task_block, move_task_block};
use tasks_enhancer::ops::normalize::new_task;
use tasks_enhancer::parse::{count_indent, is_task_line};

use chrono::NaiveDate;

const NESTED: &[&str] = &[
    "- [ ] Alpha",
    "  - [ ] Alpha one",
    "    - [ ] Alpha one a",
    "  - [ ] Alpha two",
    "- [x] Bravo",
    "  - [ ] Bravo one",
    "  - [ ] Bravo two",
    "    - [ ] Bravo two a",
    "- [ ] Charlie",
];

const WITH_GAPS: &[&str] = &[
    "# Week",
    "",
    "- [ ] Alpha",
    "  notes for alpha",
    "",
    "- [ ] Bravo",
    "  - [ ] Bravo one",
    "",
    "    continued notes",
    "Trailing paragraph",
    "- [ ] Delta",
];

fn sorted(lines: &[String]) -> Vec<String> {
    let mut out = lines.to_vec();
    out.sort();
    out
}

#[test]
fn moves_keep_every_line_and_block_order() {
    for fixture in [NESTED, WITH_GAPS] {
        for line in 0..fixture.len() {
            for direction in [Direction::Up, Direction::Down] {
                let mut buf = TextBuffer::from_lines(fixture).with_cursor(line, 3);
                let before = buf.lines().to_vec();
                let outcome = move_task_block(&mut buf, direction).unwrap();

                if !outcome.is_applied() {
                    assert_eq!(buf.lines(), &before[..], "line {line} {direction}");
                    continue;
                }
                assert!(is_task_line(&before[line]));

                let block = find_task_block(&before, line, count_indent(&before[line]));
                let after = buf.lines();
                let at = buf.cursor().line;
                assert_eq!(sorted(after), sorted(&before));
                assert_eq!(&after[at..at + block.len()], &block.lines[..]);
            }
        }
    }
}

#[test]
fn up_then_down_is_identity_for_siblings() {
    for line in 0..NESTED.len() {
        let mut buf = TextBuffer::from_lines(NESTED).with_cursor(line, 4);
        if !move_task_block(&mut buf, Direction::Up).unwrap().is_applied() {
            continue;
        }
        let moved_down = move_task_block(&mut buf, Direction::Down).unwrap();
        assert!(moved_down.is_applied(), "line {line}");
        assert_eq!(buf.lines(), NESTED, "line {line}");
        assert_eq!(buf.cursor(), Cursor::new(line, 4));
    }
}

#[test]
fn nothing_crosses_a_paragraph() {
    // Bravo is followed by indented prose, Delta by a paragraph
    let mut buf = TextBuffer::from_lines(WITH_GAPS).with_cursor(5, 0);
    assert!(!move_task_block(&mut buf, Direction::Down).unwrap().is_applied());

    let mut buf = TextBuffer::from_lines(WITH_GAPS).with_cursor(10, 0);
    assert!(!move_task_block(&mut buf, Direction::Up).unwrap().is_applied());

    // Alpha sits right under the heading
    let mut buf = TextBuffer::from_lines(WITH_GAPS).with_cursor(2, 0);
    assert!(!move_task_block(&mut buf, Direction::Up).unwrap().is_applied());
}

/// Host buffer that records how it was written to.
struct RecordingBuffer {
    inner: TextBuffer,
    set_line_calls: usize,
    set_content_calls: usize,
}

impl RecordingBuffer {
    fn new(lines: &[&str], cursor: Cursor) -> Self {
        RecordingBuffer {
            inner: TextBuffer::from_lines(lines).with_cursor(cursor.line, cursor.ch),
            set_line_calls: 0,
            set_content_calls: 0,
        }
    }
}

impl LineBuffer for RecordingBuffer {
    fn line_count(&self) -> usize {
        self.inner.line_count()
    }
    fn line(&self, index: usize) -> Option<String> {
        self.inner.line(index)
    }
    fn set_line(&mut self, index: usize, text: &str) -> Result<(), BufferError> {
        self.set_line_calls += 1;
        self.inner.set_line(index, text)
    }
    fn content(&self) -> String {
        self.inner.content()
    }
    fn set_content(&mut self, text: &str) {
        self.set_content_calls += 1;
        self.inner.set_content(text)
    }
    fn cursor(&self) -> Cursor {
        self.inner.cursor()
    }
    fn set_cursor(&mut self, cursor: Cursor) {
        self.inner.set_cursor(cursor)
    }
}

#[test]
fn move_rewrites_buffer_once() {
    let mut buf = RecordingBuffer::new(NESTED, Cursor::new(4, 0));
    move_task_block(&mut buf, Direction::Down).unwrap();
    assert_eq!(buf.set_content_calls, 1);
    assert_eq!(buf.set_line_calls, 0);
    assert_eq!(buf.cursor(), Cursor::new(5, 0));
}

#[test]
fn skipped_move_does_not_write() {
    let mut buf = RecordingBuffer::new(NESTED, Cursor::new(0, 0));
    move_task_block(&mut buf, Direction::Up).unwrap();
    assert_eq!(buf.set_content_calls, 0);
}

#[test]
fn normalization_writes_a_single_line() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    let mut buf = RecordingBuffer::new(&["# Inbox", "call plumber"], Cursor::new(1, 0));
    new_task(&mut buf, &NewTaskConfig::default(), date).unwrap();
    assert_eq!(buf.set_line_calls, 1);
    assert_eq!(buf.set_content_calls, 0);
    assert_eq!(
        buf.line(1).as_deref(),
        Some("- [ ] call plumber ➕ 2025-01-09 ⏳ 2025-01-09")
    );
}

#[test]
fn normalization_keeps_indent_and_body_for_plain_lines() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    let config = NewTaskConfig {
        created: false,
        scheduled: false,
    };
    for line in ["x", "  two  spaces ", "\tTabbed", "- bullet", "[ ] bare box"] {
        let mut buf = TextBuffer::from_lines(&[line]);
        new_task(&mut buf, &config, date).unwrap();
        let indent_len = line.len() - line.trim_start().len();
        let expected = format!("{}- [ ] {}", &line[..indent_len], &line[indent_len..]);
        assert_eq!(buf.lines(), &[expected]);
    }
}
