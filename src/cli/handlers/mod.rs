mod config;

pub use config::cmd_config;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, default_config_path};
use crate::io::document_io::{self, Document};
use crate::model::block::Direction;
use crate::model::buffer::{BufferError, Cursor, LineBuffer};
use crate::ops::{Outcome, block_move, normalize};

/// Main dispatch for all commands
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config_path = cli
        .config
        .unwrap_or_else(|| default_config_path(Path::new(".")));

    match cli.command {
        Commands::Task(args) => cmd_edit(EditKind::Task, args, &config_path, json),
        Commands::New(args) => cmd_edit(EditKind::NewUnconditional, args, &config_path, json),
        Commands::Start(args) => cmd_edit(EditKind::Start, args, &config_path, json),
        Commands::Up(args) => cmd_move(Direction::Up, args, json),
        Commands::Down(args) => cmd_move(Direction::Down, args, json),
        Commands::Config(cmd) => cmd_config(cmd, &config_path, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    Task,
    NewUnconditional,
    Start,
}

/// Load the file and put the cursor where the user asked. A line past the
/// end of the file is an error rather than being clamped.
fn open_at(args: &CursorArgs) -> Result<Document, Box<dyn std::error::Error>> {
    let mut doc = document_io::load_document(&args.file)?;
    let len = doc.buffer.line_count();
    if args.line >= len {
        return Err(BufferError::LineOutOfRange {
            index: args.line,
            len,
        }
        .into());
    }
    doc.buffer.set_cursor(Cursor::new(args.line, args.ch));
    Ok(doc)
}

/// Save when something changed, then print the report.
fn finish(
    doc: &Document,
    verb: &str,
    outcome: Outcome,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if outcome.is_applied() {
        document_io::save_document(doc)?;
    }
    let cursor = doc.buffer.cursor();
    if json {
        println!("{}", to_json(&EditReportJson::new(outcome, cursor))?);
    } else {
        println!("{}", format_edit_report(verb, outcome, cursor));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Editing commands
// ---------------------------------------------------------------------------

fn cmd_edit(
    kind: EditKind,
    args: EditArgs,
    config_path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = open_at(&args.cursor)?;
    let date = args.date.unwrap_or_else(normalize::today);

    let outcome = match kind {
        EditKind::Task => {
            let config = config_io::load_config(config_path)?;
            normalize::new_task(&mut doc.buffer, &config.new_task, date)?
        }
        EditKind::NewUnconditional => {
            let config = config_io::load_config(config_path)?;
            normalize::new_task_unconditional(&mut doc.buffer, &config.new_task, date)?
        }
        EditKind::Start => normalize::start_work(&mut doc.buffer, date)?,
    };
    tracing::debug!(file = %doc.path.display(), ?kind, ?outcome, "edit finished");

    finish(&doc, "updated", outcome, json)
}

fn cmd_move(
    direction: Direction,
    args: CursorArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = open_at(&args)?;
    let outcome = block_move::move_task_block(&mut doc.buffer, direction)?;
    tracing::debug!(file = %doc.path.display(), %direction, ?outcome, "move finished");

    finish(&doc, "moved", outcome, json)
}
