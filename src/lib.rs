//! Editing helpers for markdown checklists.
//!
//! Two operations work on a host-owned [`model::LineBuffer`]:
//! [`ops::normalize`] turns the cursor line into an open task and stamps
//! date annotations, and [`ops::block_move`] moves the task block at the
//! cursor past its neighbouring sibling. The `te` binary wraps both for
//! markdown files on disk.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
