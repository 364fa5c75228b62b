//! World access used by the editing engine, plus an in-memory grid.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use super::cell::CellContent;
use crate::core::error::WorldError;
use crate::core::types::IVec3;

/// Narrow read/write surface the engine edits through.
///
/// Writes are raw assignments: implementations must not trigger secondary
/// updates (physics, neighbour notifications), otherwise history replay
/// would not be exact.
pub trait VoxelWorld {
    type Cell: CellContent;

    /// Current content at `pos`.
    fn get_content(&self, pos: IVec3) -> Self::Cell;

    /// Overwrite the content at `pos`.
    fn set_content(&mut self, pos: IVec3, cell: Self::Cell) -> Result<(), WorldError>;

    /// Valid y range, min inclusive and max exclusive.
    fn vertical_bounds(&self) -> Range<i32>;
}

/// Sparse in-memory world. Cells never written read as `default_cell`.
pub struct GridWorld<C: CellContent> {
    cells: HashMap<IVec3, C>,
    default_cell: C,
    vertical: Range<i32>,
    /// Positions whose writes are refused (for hosts with protected areas)
    locked: HashSet<IVec3>,
    writes: u64,
}

impl<C: CellContent> GridWorld<C> {
    /// Create an empty world spanning `vertical` on the y axis.
    pub fn new(default_cell: C, vertical: Range<i32>) -> Self {
        Self {
            cells: HashMap::new(),
            default_cell,
            vertical,
            locked: HashSet::new(),
            writes: 0,
        }
    }

    /// Number of explicitly stored cells.
    pub fn stored_count(&self) -> usize {
        self.cells.len()
    }

    /// Total successful writes since creation.
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Refuse future writes at `pos`.
    pub fn lock(&mut self, pos: IVec3) {
        self.locked.insert(pos);
    }

    pub fn unlock(&mut self, pos: IVec3) {
        self.locked.remove(&pos);
    }
}

impl<C: CellContent> VoxelWorld for GridWorld<C> {
    type Cell = C;

    fn get_content(&self, pos: IVec3) -> C {
        self.cells.get(&pos).cloned().unwrap_or_else(|| self.default_cell.clone())
    }

    fn set_content(&mut self, pos: IVec3, cell: C) -> Result<(), WorldError> {
        if !self.vertical.contains(&pos.y) {
            return Err(WorldError::OutOfBounds(pos));
        }
        if self.locked.contains(&pos) {
            return Err(WorldError::Rejected(format!("cell {} is locked", pos)));
        }

        if cell == self.default_cell {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, cell);
        }
        self.writes += 1;
        Ok(())
    }

    fn vertical_bounds(&self) -> Range<i32> {
        self.vertical.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::voxel::Voxel;

    fn world() -> GridWorld<Voxel> {
        GridWorld::new(Voxel::EMPTY, 0..256)
    }

    #[test]
    fn test_unwritten_cells_read_default() {
        let world = world();
        assert_eq!(world.get_content(IVec3::new(3, 4, 5)), Voxel::EMPTY);
        assert_eq!(world.stored_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut world = world();
        let pos = IVec3::new(1, 2, 3);
        let stone = Voxel::from_rgb565(0x8410, 1);

        world.set_content(pos, stone).unwrap();
        assert_eq!(world.get_content(pos), stone);
        assert_eq!(world.write_count(), 1);

        // Writing the default value frees the slot
        world.set_content(pos, Voxel::EMPTY).unwrap();
        assert_eq!(world.stored_count(), 0);
    }

    #[test]
    fn test_vertical_bounds_enforced() {
        let mut world = world();
        let below = IVec3::new(0, -1, 0);
        let above = IVec3::new(0, 256, 0);
        assert_eq!(world.set_content(below, Voxel::EMPTY), Err(WorldError::OutOfBounds(below)));
        assert_eq!(world.set_content(above, Voxel::EMPTY), Err(WorldError::OutOfBounds(above)));
        assert!(world.set_content(IVec3::new(0, 255, 0), Voxel::EMPTY).is_ok());
    }

    #[test]
    fn test_locked_cells_reject_writes() {
        let mut world = world();
        let pos = IVec3::new(4, 4, 4);
        world.lock(pos);
        assert!(matches!(world.set_content(pos, Voxel::new(1, 1, 1, 1)), Err(WorldError::Rejected(_))));
        world.unlock(pos);
        assert!(world.set_content(pos, Voxel::new(1, 1, 1, 1)).is_ok());
    }
}
