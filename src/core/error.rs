//! Error types for stellaris-edit

use std::fmt;

use thiserror::Error;

use crate::core::types::IVec3;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("World error: {0}")]
    World(#[from] WorldError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Which history stack a request targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

impl fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryDirection::Undo => f.write_str("undo"),
            HistoryDirection::Redo => f.write_str("redo"),
        }
    }
}

/// Discriminated outcome of an edit request that did not change the world.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("selection incomplete: set pos1 and pos2 first")]
    IncompleteSelection,

    #[error("invalid shape parameter: {0}")]
    InvalidShapeParameter(String),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("no matching cells")]
    NoMatches,

    #[error("nothing to {0}")]
    HistoryEmpty(HistoryDirection),

    #[error("clipboard is empty")]
    EmptyClipboard,

    #[error("no brush configured")]
    NoBrush,

    #[error("footprint at {0} leaves the coordinate range")]
    OutOfRange(IVec3),

    #[error("edit covers {volume} cells, limit is {limit}")]
    VolumeTooLarge { volume: u64, limit: u64 },

    #[error("write failed at {position}: {source} ({rolled_back} cells rolled back)")]
    WriteFailed {
        position: IVec3,
        #[source]
        source: WorldError,
        rolled_back: usize,
    },
}

/// Failure reported by a world backend for a single cell write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("position {0} is outside the world")]
    OutOfBounds(IVec3),

    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Failure loading or saving an [`EditConfig`](crate::session::EditConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
