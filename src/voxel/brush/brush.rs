//! Active brush: a shape, the content it paints and an optional mask.

use super::primitive::BrushShape;
use crate::core::error::EditError;
use crate::voxel::cell::{mask_allows, CellContent, Mask};

/// Immutable brush configuration. Replaced wholesale when the actor picks a
/// new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush<C: CellContent> {
    shape: BrushShape,
    content: C,
    mask: Option<Mask<C::Category>>,
}

impl<C: CellContent> Brush<C> {
    pub fn new(shape: BrushShape, content: C, mask: Option<Mask<C::Category>>) -> Self {
        Self { shape, content, mask }
    }

    /// Sphere brush; fails for radius < 1.
    pub fn sphere(radius: i32, content: C, mask: Option<Mask<C::Category>>) -> Result<Self, EditError> {
        Ok(Self::new(BrushShape::sphere(radius)?, content, mask))
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    pub fn radius(&self) -> i32 {
        self.shape.radius()
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn mask(&self) -> Option<&Mask<C::Category>> {
        self.mask.as_ref()
    }

    /// Whether the brush may overwrite an existing cell.
    pub fn allows(&self, existing: &C) -> bool {
        mask_allows(self.mask.as_ref(), existing)
    }
}
