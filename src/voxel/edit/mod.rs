//! Reversible edits: operations, clipboards, planning and history.
//!
//! Every world change is captured as an [`Operation`] holding the prior and
//! new content of each touched cell, which makes undo a replay of the
//! `before` half and redo a replay of the `after` half.

pub mod operation;
pub mod clipboard;
pub mod planner;
pub mod history;

pub use operation::{CellChange, EditKind, Operation, OperationBuilder};
pub use clipboard::Clipboard;
pub use planner::{EditPlanner, DEFAULT_MAX_VOLUME};
pub use history::{HistoryManager, DEFAULT_UNDO_LIMIT};
