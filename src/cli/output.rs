use serde::Serialize;

use crate::model::buffer::Cursor;
use crate::model::config::EnhancerConfig;
use crate::ops::Outcome;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EditReportJson {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub cursor: Cursor,
}

impl EditReportJson {
    pub fn new(outcome: Outcome, cursor: Cursor) -> Self {
        EditReportJson {
            applied: outcome.is_applied(),
            reason: outcome.skip_reason().map(|skip| skip.to_string()),
            cursor,
        }
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One-line report for an editing command. `verb` describes what applying
/// did (e.g. "moved").
pub fn format_edit_report(verb: &str, outcome: Outcome, cursor: Cursor) -> String {
    match outcome {
        Outcome::Applied => format!("{} (cursor {}:{})", verb, cursor.line, cursor.ch),
        Outcome::Skipped(skip) => format!("skipped: {}", skip),
    }
}

pub fn format_config(config: &EnhancerConfig) -> String {
    format!(
        "[new_task]\ncreated = {}\nscheduled = {}\n",
        config.new_task.created, config.new_task.scheduled
    )
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
