//! Voxel data structures and editing operations

pub mod cell;
pub mod voxel;
pub mod material;
pub mod world;
pub mod brush;
pub mod edit;

pub use cell::{CellContent, CellMatcher, Mask};
pub use voxel::Voxel;
pub use material::{MaterialEntry, MaterialTable, VoxelPattern};
pub use world::{GridWorld, VoxelWorld};
pub use brush::{Brush, BrushShape};
pub use edit::{Clipboard, EditPlanner, HistoryManager, Operation};
