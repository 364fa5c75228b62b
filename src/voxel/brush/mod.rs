//! Brushes for painting shapes into the world

pub mod primitive;
pub mod brush;

pub use primitive::{BrushShape, SPHERE_ROUNDING};
pub use brush::Brush;
