//! Reversible multi-cell edit.

use std::collections::HashMap;
use std::fmt;

use crate::core::error::EditError;
use crate::core::types::IVec3;
use crate::math::Region;
use crate::voxel::cell::CellContent;
use crate::voxel::world::VoxelWorld;

/// What produced an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Fill,
    Replace,
    Paste,
    Paint,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Fill => "fill",
            EditKind::Replace => "replace",
            EditKind::Paste => "paste",
            EditKind::Paint => "paint",
        };
        f.write_str(name)
    }
}

/// Prior and new content of one touched cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellChange<C> {
    pub position: IVec3,
    pub before: C,
    pub after: C,
}

/// Before/after snapshot over a set of cells.
///
/// Every touched position carries both values, so `apply` and `revert` are
/// plain replays and can be repeated any number of times.
#[derive(Clone, Debug)]
pub struct Operation<C: CellContent> {
    kind: EditKind,
    changes: Vec<CellChange<C>>,
}

impl<C: CellContent> Operation<C> {
    pub fn builder(kind: EditKind) -> OperationBuilder<C> {
        OperationBuilder::new(kind)
    }

    pub fn kind(&self) -> EditKind {
        self.kind
    }

    /// Number of touched cells.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[CellChange<C>] {
        &self.changes
    }

    /// Prior content per touched position.
    pub fn before(&self) -> impl Iterator<Item = (IVec3, &C)> {
        self.changes.iter().map(|c| (c.position, &c.before))
    }

    /// New content per touched position.
    pub fn after(&self) -> impl Iterator<Item = (IVec3, &C)> {
        self.changes.iter().map(|c| (c.position, &c.after))
    }

    pub fn change_at(&self, pos: IVec3) -> Option<&CellChange<C>> {
        self.changes.iter().find(|c| c.position == pos)
    }

    /// Smallest region containing every touched cell.
    pub fn bounds(&self) -> Option<Region> {
        let first = self.changes.first()?.position;
        let (min, max) = self.changes.iter().fold((first, first), |(min, max), c| {
            (min.min(c.position), max.max(c.position))
        });
        Some(Region::new(min, max))
    }

    /// Write every `after` value.
    pub fn apply<W: VoxelWorld<Cell = C>>(&self, world: &mut W) -> Result<usize, EditError> {
        write_pass(world, self.changes.iter().map(|c| (c.position, &c.after)))
    }

    /// Write every `before` value.
    pub fn revert<W: VoxelWorld<Cell = C>>(&self, world: &mut W) -> Result<usize, EditError> {
        write_pass(world, self.changes.iter().map(|c| (c.position, &c.before)))
    }
}

/// Write `cells` in order. If the world rejects one, every cell written so
/// far in this pass gets its pre-pass value back before the error returns.
fn write_pass<'a, W, C>(
    world: &mut W,
    cells: impl Iterator<Item = (IVec3, &'a C)>,
) -> Result<usize, EditError>
where
    W: VoxelWorld<Cell = C>,
    C: CellContent + 'a,
{
    let mut written: Vec<(IVec3, C)> = Vec::new();

    for (pos, cell) in cells {
        let previous = world.get_content(pos);
        if let Err(source) = world.set_content(pos, cell.clone()) {
            let total = written.len();
            let mut rolled_back = 0;
            for (restore_pos, restore_cell) in written.into_iter().rev() {
                match world.set_content(restore_pos, restore_cell) {
                    Ok(()) => rolled_back += 1,
                    Err(e) => log::error!("Rollback write at {} failed: {}", restore_pos, e),
                }
            }
            log::warn!(
                "Write at {} failed ({}); rolled back {}/{} cells",
                pos, source, rolled_back, total
            );
            return Err(EditError::WriteFailed { position: pos, source, rolled_back });
        }
        written.push((pos, previous));
    }

    Ok(written.len())
}

/// Collects cell changes for one operation, one entry per position.
pub struct OperationBuilder<C: CellContent> {
    kind: EditKind,
    changes: Vec<CellChange<C>>,
    index: HashMap<IVec3, usize>,
}

impl<C: CellContent> OperationBuilder<C> {
    pub fn new(kind: EditKind) -> Self {
        Self {
            kind,
            changes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(kind: EditKind, capacity: usize) -> Self {
        Self {
            kind,
            changes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record a change. A repeated position keeps its first `before` and
    /// takes the latest `after`.
    pub fn record(&mut self, position: IVec3, before: C, after: C) -> &mut Self {
        match self.index.get(&position) {
            Some(&i) => self.changes[i].after = after,
            None => {
                self.index.insert(position, self.changes.len());
                self.changes.push(CellChange { position, before, after });
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn build(self) -> Operation<C> {
        Operation {
            kind: self.kind,
            changes: self.changes,
        }
    }
}
