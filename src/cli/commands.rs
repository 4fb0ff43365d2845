use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "te", about = concat!("tasks-enhancer v", env!("CARGO_PKG_VERSION"), " - checklist editing for markdown outlines"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (default: ./.tasks-enhancer.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Turn the line into an open task and add the configured date annotations
    Task(EditArgs),
    /// Prepend a fresh checkbox whatever the line holds (legacy "new task")
    New(EditArgs),
    /// Turn the line into an open task and stamp today's start date
    Start(EditArgs),
    /// Move the task block at the cursor above its previous sibling
    Up(CursorArgs),
    /// Move the task block at the cursor below its next sibling
    Down(CursorArgs),
    /// Show or change settings
    Config(ConfigCmd),
}

// ---------------------------------------------------------------------------
// Editing args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CursorArgs {
    /// Markdown file to edit in place
    pub file: PathBuf,
    /// Cursor line (0-indexed)
    #[arg(short, long)]
    pub line: usize,
    /// Cursor column in characters (0-indexed)
    #[arg(long, default_value = "0")]
    pub ch: usize,
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub cursor: CursorArgs,
    /// Date for annotations, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Config args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Turn a new-task annotation on or off
    Set {
        /// `created` or `scheduled`
        key: String,
        /// true or false
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}
