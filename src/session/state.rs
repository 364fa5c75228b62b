//! Per-actor editing state: selection corners, clipboard and brush slots.

use crate::core::error::EditError;
use crate::core::types::IVec3;
use crate::math::Region;
use crate::voxel::brush::Brush;
use crate::voxel::cell::CellContent;
use crate::voxel::edit::Clipboard;

/// Two selection corners, each set independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub pos1: Option<IVec3>,
    pub pos2: Option<IVec3>,
}

impl Selection {
    /// Region spanned by both corners.
    pub fn region(&self) -> Result<Region, EditError> {
        match (self.pos1, self.pos2) {
            (Some(a), Some(b)) => Ok(Region::new(a, b)),
            _ => Err(EditError::IncompleteSelection),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pos1.is_some() && self.pos2.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything one actor owns besides history. Clipboard and brush are
/// single slots: a new copy or brush replaces the old one outright.
#[derive(Debug)]
pub struct ActorSession<C: CellContent> {
    pub selection: Selection,
    clipboard: Option<Clipboard<C>>,
    brush: Option<Brush<C>>,
}

impl<C: CellContent> Default for ActorSession<C> {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            clipboard: None,
            brush: None,
        }
    }
}

impl<C: CellContent> ActorSession<C> {
    pub fn clipboard(&self) -> Option<&Clipboard<C>> {
        self.clipboard.as_ref()
    }

    /// Store a clipboard, returning the one it replaced.
    pub fn set_clipboard(&mut self, clipboard: Clipboard<C>) -> Option<Clipboard<C>> {
        self.clipboard.replace(clipboard)
    }

    pub fn brush(&self) -> Option<&Brush<C>> {
        self.brush.as_ref()
    }

    /// Store a brush, returning the one it replaced.
    pub fn set_brush(&mut self, brush: Brush<C>) -> Option<Brush<C>> {
        self.brush.replace(brush)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::voxel::Voxel;
    use crate::voxel::world::GridWorld;

    #[test]
    fn test_selection_requires_both_corners() {
        let mut selection = Selection::default();
        assert!(matches!(selection.region(), Err(EditError::IncompleteSelection)));

        selection.pos1 = Some(IVec3::new(5, 0, 5));
        assert!(matches!(selection.region(), Err(EditError::IncompleteSelection)));

        selection.pos2 = Some(IVec3::new(0, 3, 0));
        let region = selection.region().unwrap();
        assert_eq!(region.min(), IVec3::new(0, 0, 0));
        assert_eq!(region.max(), IVec3::new(5, 3, 5));

        selection.clear();
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_slots_replace_wholesale() {
        let mut session = ActorSession::<Voxel>::default();
        let world = GridWorld::new(Voxel::EMPTY, 0..16);

        let small = Clipboard::capture(&world, &Region::single(IVec3::ZERO));
        let large = Clipboard::capture(&world, &Region::new(IVec3::ZERO, IVec3::ONE));
        assert!(session.set_clipboard(small.clone()).is_none());
        assert_eq!(session.set_clipboard(large), Some(small));
        assert_eq!(session.clipboard().unwrap().len(), 8);

        let first = Brush::sphere(1, Voxel::new(1, 1, 1, 1), None).unwrap();
        let second = Brush::sphere(4, Voxel::new(2, 2, 2, 2), None).unwrap();
        session.set_brush(first.clone());
        assert_eq!(session.set_brush(second), Some(first));
        assert_eq!(session.brush().unwrap().radius(), 4);
    }
}
