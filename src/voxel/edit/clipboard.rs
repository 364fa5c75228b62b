//! Copied region contents keyed by offset from the region's minimum corner.

use super::operation::{EditKind, Operation, OperationBuilder};
use crate::core::error::EditError;
use crate::core::types::IVec3;
use crate::math::Region;
use crate::voxel::cell::CellContent;
use crate::voxel::world::VoxelWorld;

/// Snapshot of a region, detached from where it was taken.
///
/// Cells are stored densely, x-major then y then z, so every offset in
/// `[0, size)` has exactly one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Clipboard<C: CellContent> {
    size: IVec3,
    cells: Vec<C>,
}

impl<C: CellContent> Clipboard<C> {
    /// Read every cell of `region` from the world.
    pub fn capture<W: VoxelWorld<Cell = C>>(world: &W, region: &Region) -> Self {
        let cells: Vec<C> = region.cells().map(|pos| world.get_content(pos)).collect();
        log::debug!("Captured {} cells from {:?}", cells.len(), region);
        Self {
            size: region.size(),
            cells,
        }
    }

    /// Per-axis extent of the copied region.
    pub fn size(&self) -> IVec3 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index_of(&self, offset: IVec3) -> Option<usize> {
        if offset.cmplt(IVec3::ZERO).any() || offset.cmpge(self.size).any() {
            return None;
        }
        let (sy, sz) = (self.size.y as usize, self.size.z as usize);
        Some((offset.x as usize * sy + offset.y as usize) * sz + offset.z as usize)
    }

    /// Content stored at `offset`, if it lies inside the clipboard.
    pub fn get(&self, offset: IVec3) -> Option<&C> {
        self.index_of(offset).and_then(|i| self.cells.get(i))
    }

    /// All `(offset, content)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, &C)> {
        Region::new(IVec3::ZERO, self.size - IVec3::ONE)
            .cells()
            .zip(self.cells.iter())
    }

    /// Footprint the clipboard would cover when pasted at `anchor`, or
    /// `None` if it would run past the edge of the grid.
    pub fn footprint(&self, anchor: IVec3) -> Option<Region> {
        Region::from_min_size(anchor, self.size)
    }

    /// Build the operation that writes the clipboard with offset zero at
    /// `anchor`, overwriting whatever is there.
    pub fn paste_at<W: VoxelWorld<Cell = C>>(&self, world: &W, anchor: IVec3) -> Result<Operation<C>, EditError> {
        let footprint = self.footprint(anchor).ok_or(EditError::OutOfRange(anchor))?;
        let mut builder = OperationBuilder::with_capacity(EditKind::Paste, self.cells.len());
        for (target, content) in footprint.cells().zip(self.cells.iter()) {
            builder.record(target, world.get_content(target), content.clone());
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::voxel::Voxel;
    use crate::voxel::world::GridWorld;

    fn material(id: u8) -> Voxel {
        Voxel::from_rgb565(id as u16 * 1000, id)
    }

    fn patterned_world(region: &Region) -> GridWorld<Voxel> {
        let mut world = GridWorld::new(Voxel::EMPTY, 0..128);
        for (i, pos) in region.cells().enumerate() {
            world.set_content(pos, material((i % 7) as u8 + 1)).unwrap();
        }
        world
    }

    #[test]
    fn test_capture_keys_are_relative() {
        let region = Region::new(IVec3::new(10, 20, 30), IVec3::new(11, 22, 30));
        let world = patterned_world(&region);
        let clipboard = Clipboard::capture(&world, &region);

        assert_eq!(clipboard.size(), IVec3::new(2, 3, 1));
        assert_eq!(clipboard.len(), 6);
        for (offset, content) in clipboard.iter() {
            assert!(offset.cmpge(IVec3::ZERO).all());
            assert!(offset.cmplt(clipboard.size()).all());
            assert_eq!(content, &world.get_content(region.min() + offset));
        }
        assert_eq!(clipboard.get(IVec3::ZERO), Some(&world.get_content(region.min())));
        assert_eq!(clipboard.get(IVec3::new(2, 0, 0)), None);
        assert_eq!(clipboard.get(IVec3::new(0, -1, 0)), None);
    }

    #[test]
    fn test_paste_at_origin_reproduces_region() {
        let region = Region::new(IVec3::new(0, 0, 0), IVec3::new(2, 2, 2));
        let mut world = patterned_world(&region);
        let clipboard = Clipboard::capture(&world, &region);

        // Scribble over the original, then paste it back where it came from
        for pos in region.cells() {
            world.set_content(pos, Voxel::EMPTY).unwrap();
        }
        let op = clipboard.paste_at(&world, region.min()).unwrap();
        op.apply(&mut world).unwrap();

        for (offset, content) in clipboard.iter() {
            assert_eq!(&world.get_content(region.min() + offset), content);
        }
    }

    #[test]
    fn test_paste_elsewhere_records_prior_contents() {
        let region = Region::new(IVec3::new(0, 0, 0), IVec3::new(1, 1, 1));
        let mut world = patterned_world(&region);
        let anchor = IVec3::new(50, 10, -4);
        world.set_content(anchor, material(9)).unwrap();

        let clipboard = Clipboard::capture(&world, &region);
        let op = clipboard.paste_at(&world, anchor).unwrap();
        assert_eq!(op.len(), 8);
        assert_eq!(op.kind(), EditKind::Paste);
        assert_eq!(op.change_at(anchor).unwrap().before, material(9));
        assert_eq!(op.bounds(), clipboard.footprint(anchor));

        op.apply(&mut world).unwrap();
        assert_eq!(world.get_content(anchor + IVec3::ONE), world.get_content(IVec3::ONE));
        op.revert(&mut world).unwrap();
        assert_eq!(world.get_content(anchor), material(9));
    }

    #[test]
    fn test_paste_past_grid_edge_is_rejected() {
        let region = Region::new(IVec3::ZERO, IVec3::new(1, 0, 0));
        let world = patterned_world(&region);
        let clipboard = Clipboard::capture(&world, &region);

        let edge = IVec3::new(i32::MAX, 0, 0);
        assert!(clipboard.footprint(edge).is_none());
        assert!(matches!(clipboard.paste_at(&world, edge), Err(EditError::OutOfRange(p)) if p == edge));

        // The last anchor that still fits
        let op = clipboard.paste_at(&world, IVec3::new(i32::MAX - 1, 0, 0)).unwrap();
        assert_eq!(op.bounds().unwrap().max(), edge);
    }
}
