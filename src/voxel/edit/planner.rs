//! Candidate-cell enumeration for region and brush edits.
//!
//! Planning only reads the world. It returns a complete [`Operation`]
//! snapshot that the caller then applies, so a rejected plan never leaves
//! partial writes behind.

use super::clipboard::Clipboard;
use super::operation::{EditKind, Operation, OperationBuilder};
use crate::core::error::EditError;
use crate::core::types::IVec3;
use crate::math::{checked_offset, Region};
use crate::voxel::brush::Brush;
use crate::voxel::cell::{mask_allows, CellContent, CellMatcher, Mask};
use crate::voxel::world::VoxelWorld;

/// Largest candidate set a single edit may enumerate by default.
pub const DEFAULT_MAX_VOLUME: u64 = 256 * 256 * 128;

/// Builds operations from shapes and intents, bounded by a volume limit.
#[derive(Clone, Copy, Debug)]
pub struct EditPlanner {
    max_volume: u64,
}

impl EditPlanner {
    pub fn new(max_volume: u64) -> Self {
        Self { max_volume }
    }

    pub fn max_volume(&self) -> u64 {
        self.max_volume
    }

    fn check_volume(&self, volume: u64) -> Result<(), EditError> {
        if volume > self.max_volume {
            return Err(EditError::VolumeTooLarge { volume, limit: self.max_volume });
        }
        Ok(())
    }

    /// Set every cell of `region` (restricted to `mask` when given) to `content`.
    pub fn fill<W: VoxelWorld>(
        &self,
        world: &W,
        region: &Region,
        mask: Option<&Mask<<W::Cell as CellContent>::Category>>,
        content: &W::Cell,
    ) -> Result<Operation<W::Cell>, EditError> {
        self.check_volume(region.volume())?;

        let capacity = if mask.is_some() { 0 } else { region.volume() as usize };
        let mut builder = OperationBuilder::with_capacity(EditKind::Fill, capacity);
        for pos in region.cells() {
            let current = world.get_content(pos);
            if !mask_allows(mask, &current) {
                continue;
            }
            builder.record(pos, current, content.clone());
        }

        log::debug!("Fill planned {} of {} cells", builder.len(), region.volume());
        finish(builder)
    }

    /// Set every cell of `region` matched by `from` to `to`.
    pub fn replace<W, M>(
        &self,
        world: &W,
        region: &Region,
        from: &M,
        to: &W::Cell,
    ) -> Result<Operation<W::Cell>, EditError>
    where
        W: VoxelWorld,
        M: CellMatcher<W::Cell> + ?Sized,
    {
        self.check_volume(region.volume())?;

        let mut builder = OperationBuilder::new(EditKind::Replace);
        for pos in region.cells() {
            let current = world.get_content(pos);
            if from.matches(&current) {
                builder.record(pos, current, to.clone());
            }
        }

        log::debug!("Replace matched {} of {} cells", builder.len(), region.volume());
        finish(builder)
    }

    /// Snapshot `region` into a clipboard.
    pub fn copy<W: VoxelWorld>(&self, world: &W, region: &Region) -> Result<Clipboard<W::Cell>, EditError> {
        self.check_volume(region.volume())?;
        Ok(Clipboard::capture(world, region))
    }

    /// Write `clipboard` with its offset zero at `anchor`.
    pub fn paste<W: VoxelWorld>(
        &self,
        world: &W,
        clipboard: &Clipboard<W::Cell>,
        anchor: IVec3,
    ) -> Result<Operation<W::Cell>, EditError> {
        if clipboard.is_empty() {
            return Err(EditError::EmptyClipboard);
        }
        clipboard.paste_at(world, anchor)
    }

    /// Stamp `brush` centred on `center`.
    ///
    /// Cells outside the world's vertical range are skipped, as are cells
    /// the brush mask does not allow. If nothing survives the result is
    /// [`EditError::NoMatches`]. A shape reaching past the `i32` grid is
    /// [`EditError::OutOfRange`].
    pub fn paint<W: VoxelWorld>(
        &self,
        world: &W,
        brush: &Brush<W::Cell>,
        center: IVec3,
    ) -> Result<Operation<W::Cell>, EditError> {
        let shape = brush.shape();
        self.check_volume(shape.bounding_volume())?;

        let vertical = world.vertical_bounds();
        let mut builder = OperationBuilder::new(EditKind::Paint);
        for offset in shape.offsets() {
            let pos = checked_offset(center, offset).ok_or(EditError::OutOfRange(center))?;
            if !vertical.contains(&pos.y) {
                continue;
            }
            let current = world.get_content(pos);
            if !brush.allows(&current) {
                continue;
            }
            builder.record(pos, current, brush.content().clone());
        }

        log::debug!("Brush {} r={} covers {} cells at {}", shape.name(), shape.radius(), builder.len(), center);
        finish(builder)
    }
}

impl Default for EditPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOLUME)
    }
}

fn finish<C: CellContent>(builder: OperationBuilder<C>) -> Result<Operation<C>, EditError> {
    if builder.is_empty() {
        return Err(EditError::NoMatches);
    }
    Ok(builder.build())
}
