//! Inclusive integer region (cuboid selection)

use crate::core::types::IVec3;

/// Axis-aligned box of grid cells with inclusive `min` and `max` corners.
///
/// Built from any two corners; the constructor orders them per axis, so a
/// region is never inverted and always holds at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    min: IVec3,
    max: IVec3,
}

impl Region {
    /// Create a region spanning two arbitrary corners.
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Region covering a single cell.
    pub fn single(pos: IVec3) -> Self {
        Self { min: pos, max: pos }
    }

    /// Region from a minimum corner and a per-axis size (each at least 1).
    ///
    /// `None` when the far corner lies beyond the `i32` grid.
    pub fn from_min_size(min: IVec3, size: IVec3) -> Option<Self> {
        let max = checked_offset(min, size.max(IVec3::ONE) - IVec3::ONE)?;
        Some(Self::new(min, max))
    }

    pub fn min(&self) -> IVec3 {
        self.min
    }

    pub fn max(&self) -> IVec3 {
        self.max
    }

    pub fn min_x(&self) -> i32 { self.min.x }
    pub fn min_y(&self) -> i32 { self.min.y }
    pub fn min_z(&self) -> i32 { self.min.z }
    pub fn max_x(&self) -> i32 { self.max.x }
    pub fn max_y(&self) -> i32 { self.max.y }
    pub fn max_z(&self) -> i32 { self.max.z }

    /// Per-axis cell count (`max - min + 1`).
    ///
    /// Computed in 64-bit so that regions spanning the full `i32` range do
    /// not overflow.
    pub fn extent(&self) -> [u64; 3] {
        [
            (self.max.x as i64 - self.min.x as i64 + 1) as u64,
            (self.max.y as i64 - self.min.y as i64 + 1) as u64,
            (self.max.z as i64 - self.min.z as i64 + 1) as u64,
        ]
    }

    /// Per-axis size as a vector. Saturates for regions wider than `i32::MAX`.
    pub fn size(&self) -> IVec3 {
        let [x, y, z] = self.extent();
        IVec3::new(
            x.min(i32::MAX as u64) as i32,
            y.min(i32::MAX as u64) as i32,
            z.min(i32::MAX as u64) as i32,
        )
    }

    /// Total number of cells.
    pub fn volume(&self) -> u64 {
        let [x, y, z] = self.extent();
        x.saturating_mul(y).saturating_mul(z)
    }

    /// Check if a cell lies inside the region
    pub fn contains(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Iterate every cell, x outermost and z innermost.
    pub fn cells(&self) -> RegionCells {
        RegionCells {
            region: *self,
            next: Some(self.min),
        }
    }
}

/// `base + offset`, or `None` if any component leaves the `i32` range.
pub fn checked_offset(base: IVec3, offset: IVec3) -> Option<IVec3> {
    Some(IVec3::new(
        base.x.checked_add(offset.x)?,
        base.y.checked_add(offset.y)?,
        base.z.checked_add(offset.z)?,
    ))
}

/// Iterator over the cells of a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionCells {
    region: Region,
    next: Option<IVec3>,
}

impl Iterator for RegionCells {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        let current = self.next?;
        let (min, max) = (self.region.min, self.region.max);

        self.next = if current.z < max.z {
            Some(IVec3::new(current.x, current.y, current.z + 1))
        } else if current.y < max.y {
            Some(IVec3::new(current.x, current.y + 1, min.z))
        } else if current.x < max.x {
            Some(IVec3::new(current.x + 1, min.y, min.z))
        } else {
            None
        };

        Some(current)
    }
}

impl IntoIterator for &Region {
    type Item = IVec3;
    type IntoIter = RegionCells;

    fn into_iter(self) -> RegionCells {
        self.cells()
    }
}
