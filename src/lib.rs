//! Stellaris Edit - region, clipboard, brush and undo/redo editing for voxel worlds

pub mod core;
pub mod math;
pub mod voxel;
pub mod session;
