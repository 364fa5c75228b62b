//! Composition root: selection → enumeration → operation → apply → history.

use std::collections::HashMap;

use super::config::EditConfig;
use super::state::{ActorSession, Selection};
use crate::core::error::EditError;
use crate::core::types::{ActorId, IVec3};
use crate::math::Region;
use crate::voxel::brush::Brush;
use crate::voxel::cell::{CellContent, CellMatcher, Mask};
use crate::voxel::edit::{EditPlanner, HistoryManager, Operation};
use crate::voxel::world::VoxelWorld;

/// Per-actor editing front end over a caller-supplied world.
///
/// The host serialises requests per world; the service holds no locks and
/// keeps each actor's state in its own map entry.
pub struct EditingService<C: CellContent> {
    planner: EditPlanner,
    history: HistoryManager<C>,
    sessions: HashMap<ActorId, ActorSession<C>>,
}

impl<C: CellContent> EditingService<C> {
    pub fn new(config: &EditConfig) -> Self {
        Self {
            planner: EditPlanner::new(config.max_volume),
            history: HistoryManager::new(config.undo_limit),
            sessions: HashMap::new(),
        }
    }

    pub fn planner(&self) -> &EditPlanner {
        &self.planner
    }

    pub fn history(&self) -> &HistoryManager<C> {
        &self.history
    }

    /// State of an actor, if it has touched the service.
    pub fn session(&self, actor: ActorId) -> Option<&ActorSession<C>> {
        self.sessions.get(&actor)
    }

    fn session_mut(&mut self, actor: ActorId) -> &mut ActorSession<C> {
        self.sessions.entry(actor).or_default()
    }

    fn selection(&self, actor: ActorId) -> Selection {
        self.sessions.get(&actor).map(|s| s.selection).unwrap_or_default()
    }

    pub fn set_pos1(&mut self, actor: ActorId, pos: IVec3) {
        self.session_mut(actor).selection.pos1 = Some(pos);
        log::debug!("{}: pos1 = {}", actor, pos);
    }

    pub fn set_pos2(&mut self, actor: ActorId, pos: IVec3) {
        self.session_mut(actor).selection.pos2 = Some(pos);
        log::debug!("{}: pos2 = {}", actor, pos);
    }

    /// Region spanned by the actor's two corners.
    pub fn selection_region(&self, actor: ActorId) -> Result<Region, EditError> {
        self.selection(actor).region()
    }

    pub fn clear_selection(&mut self, actor: ActorId) {
        if let Some(session) = self.sessions.get_mut(&actor) {
            session.selection.clear();
        }
    }

    /// Apply a freshly planned operation and push it onto the actor's history.
    fn commit<W: VoxelWorld<Cell = C>>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        op: Operation<C>,
    ) -> Result<usize, EditError> {
        let cells = op.apply(world)?;
        log::info!("{}: {} changed {} cells", actor, op.kind(), cells);
        if self.history.record(actor, op).is_some() {
            log::debug!("{}: oldest history entry discarded", actor);
        }
        Ok(cells)
    }

    /// Fill the actor's selection with `content`, optionally masked.
    pub fn fill<W: VoxelWorld<Cell = C>>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        mask: Option<&Mask<C::Category>>,
        content: &C,
    ) -> Result<usize, EditError> {
        let region = self.selection_region(actor)?;
        let op = self.planner.fill(&*world, &region, mask, content)?;
        self.commit(actor, world, op)
    }

    /// Replace matching cells in the actor's selection.
    pub fn replace<W, M>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        from: &M,
        to: &C,
    ) -> Result<usize, EditError>
    where
        W: VoxelWorld<Cell = C>,
        M: CellMatcher<C> + ?Sized,
    {
        let region = self.selection_region(actor)?;
        let op = self.planner.replace(&*world, &region, from, to)?;
        self.commit(actor, world, op)
    }

    /// Copy the actor's selection into its clipboard, replacing the old one.
    pub fn copy<W: VoxelWorld<Cell = C>>(&mut self, actor: ActorId, world: &W) -> Result<usize, EditError> {
        let region = self.selection_region(actor)?;
        let clipboard = self.planner.copy(world, &region)?;
        let cells = clipboard.len();
        self.session_mut(actor).set_clipboard(clipboard);
        log::info!("{}: copied {} cells", actor, cells);
        Ok(cells)
    }

    /// Paste the actor's clipboard with its minimum corner at `anchor`.
    pub fn paste<W: VoxelWorld<Cell = C>>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        anchor: IVec3,
    ) -> Result<usize, EditError> {
        let clipboard = self
            .sessions
            .get(&actor)
            .and_then(ActorSession::clipboard)
            .ok_or(EditError::EmptyClipboard)?;
        let op = self.planner.paste(&*world, clipboard, anchor)?;
        self.commit(actor, world, op)
    }

    /// Make `brush` the actor's active brush.
    pub fn set_brush(&mut self, actor: ActorId, brush: Brush<C>) {
        log::debug!("{}: brush {} r={}", actor, brush.shape().name(), brush.radius());
        self.session_mut(actor).set_brush(brush);
    }

    /// Stamp the actor's brush at `center`.
    pub fn paint<W: VoxelWorld<Cell = C>>(
        &mut self,
        actor: ActorId,
        world: &mut W,
        center: IVec3,
    ) -> Result<usize, EditError> {
        let brush = self
            .sessions
            .get(&actor)
            .and_then(ActorSession::brush)
            .ok_or(EditError::NoBrush)?;
        let op = self.planner.paint(&*world, brush, center)?;
        self.commit(actor, world, op)
    }

    pub fn undo<W: VoxelWorld<Cell = C>>(&mut self, actor: ActorId, world: &mut W) -> Result<usize, EditError> {
        let cells = self.history.undo(actor, world)?;
        log::info!("{}: undo restored {} cells", actor, cells);
        Ok(cells)
    }

    pub fn redo<W: VoxelWorld<Cell = C>>(&mut self, actor: ActorId, world: &mut W) -> Result<usize, EditError> {
        let cells = self.history.redo(actor, world)?;
        log::info!("{}: redo re-applied {} cells", actor, cells);
        Ok(cells)
    }

    /// Drop an actor's history only.
    pub fn clear_history(&mut self, actor: ActorId) {
        self.history.clear(actor);
    }

    /// Drop everything held for an actor.
    pub fn end_session(&mut self, actor: ActorId) {
        self.sessions.remove(&actor);
        self.history.clear(actor);
        log::debug!("{}: session ended", actor);
    }
}
