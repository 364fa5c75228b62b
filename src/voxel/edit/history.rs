//! Per-actor undo/redo history.
//!
//! Each actor owns an undo stack capped at `max_depth` and an uncapped redo
//! stack. Recording clears redo; undo moves the top operation to redo after
//! reverting it, redo moves it back after re-applying it. Operations are
//! moved between stacks, never copied.

use std::collections::{HashMap, VecDeque};

use super::operation::Operation;
use crate::core::error::{EditError, HistoryDirection};
use crate::core::types::ActorId;
use crate::voxel::cell::CellContent;
use crate::voxel::world::VoxelWorld;

/// Default undo depth per actor.
pub const DEFAULT_UNDO_LIMIT: usize = 20;

/// Stacks for one actor. Front of `undo` is the oldest entry.
#[derive(Debug)]
struct ActorHistory<C: CellContent> {
    undo: VecDeque<Operation<C>>,
    redo: Vec<Operation<C>>,
}

impl<C: CellContent> Default for ActorHistory<C> {
    fn default() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }
}

/// Undo/redo stacks for every actor, created lazily on first use.
#[derive(Debug)]
pub struct HistoryManager<C: CellContent> {
    actors: HashMap<ActorId, ActorHistory<C>>,
    max_depth: usize,
}

impl<C: CellContent> HistoryManager<C> {
    /// Create a manager whose undo stacks hold at most `max_depth` entries.
    /// A depth of zero disables history.
    pub fn new(max_depth: usize) -> Self {
        Self {
            actors: HashMap::new(),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the cap, trimming the oldest entries of every undo stack.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for history in self.actors.values_mut() {
            while history.undo.len() > max_depth {
                history.undo.pop_front();
            }
        }
    }

    fn entry(&mut self, actor: ActorId) -> &mut ActorHistory<C> {
        self.actors.entry(actor).or_default()
    }

    /// Push an applied operation and discard the actor's redo stack.
    ///
    /// Returns the oldest operation if it fell off the bottom of the stack.
    pub fn record(&mut self, actor: ActorId, op: Operation<C>) -> Option<Operation<C>> {
        let max_depth = self.max_depth;
        let history = self.entry(actor);

        history.undo.push_back(op);
        history.redo.clear();

        let dropped = if history.undo.len() > max_depth {
            history.undo.pop_front()
        } else {
            None
        };
        if dropped.is_some() {
            log::debug!("{}: history full, dropped oldest entry", actor);
        }
        dropped
    }

    /// Revert the actor's most recent operation.
    ///
    /// Returns the number of cells written. If the revert fails the
    /// operation stays on the undo stack.
    pub fn undo<W: VoxelWorld<Cell = C>>(&mut self, actor: ActorId, world: &mut W) -> Result<usize, EditError> {
        let history = self.entry(actor);
        let op = history.undo.pop_back().ok_or(EditError::HistoryEmpty(HistoryDirection::Undo))?;

        match op.revert(world) {
            Ok(cells) => {
                log::debug!("{}: undid {} ({} cells)", actor, op.kind(), cells);
                history.redo.push(op);
                Ok(cells)
            }
            Err(e) => {
                history.undo.push_back(op);
                Err(e)
            }
        }
    }

    /// Re-apply the actor's most recently undone operation.
    ///
    /// Returns the number of cells written. If the apply fails the
    /// operation stays on the redo stack.
    pub fn redo<W: VoxelWorld<Cell = C>>(&mut self, actor: ActorId, world: &mut W) -> Result<usize, EditError> {
        let history = self.entry(actor);
        let op = history.redo.pop().ok_or(EditError::HistoryEmpty(HistoryDirection::Redo))?;

        match op.apply(world) {
            Ok(cells) => {
                log::debug!("{}: redid {} ({} cells)", actor, op.kind(), cells);
                history.undo.push_back(op);
                Ok(cells)
            }
            Err(e) => {
                history.redo.push(op);
                Err(e)
            }
        }
    }

    pub fn undo_depth(&self, actor: ActorId) -> usize {
        self.actors.get(&actor).map_or(0, |h| h.undo.len())
    }

    pub fn redo_depth(&self, actor: ActorId) -> usize {
        self.actors.get(&actor).map_or(0, |h| h.redo.len())
    }

    /// Operation the next undo would revert.
    pub fn peek_undo(&self, actor: ActorId) -> Option<&Operation<C>> {
        self.actors.get(&actor).and_then(|h| h.undo.back())
    }

    /// Operation the next redo would re-apply.
    pub fn peek_redo(&self, actor: ActorId) -> Option<&Operation<C>> {
        self.actors.get(&actor).and_then(|h| h.redo.last())
    }

    /// Forget both stacks of an actor.
    pub fn clear(&mut self, actor: ActorId) {
        self.actors.remove(&actor);
    }

    /// Number of actors with history state.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }
}

impl<C: CellContent> Default for HistoryManager<C> {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}
