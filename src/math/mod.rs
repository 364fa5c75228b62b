//! Grid geometry

pub mod region;

pub use region::{checked_offset, Region, RegionCells};
