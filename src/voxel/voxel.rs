//! Voxel cell content

use serde::{Deserialize, Serialize};

use super::cell::CellContent;

/// Convert RGB888 to RGB565
pub fn rgb_to_565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r as u16 >> 3) & 0x1F;
    let g6 = (g as u16 >> 2) & 0x3F;
    let b5 = (b as u16 >> 3) & 0x1F;
    (r5 << 11) | (g6 << 5) | b5
}

/// Single voxel - exactly 4 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel {
    /// RGB565 encoded color
    pub color: u16,
    /// Material ID (index into the material palette)
    pub material_id: u8,
    /// Host-defined flag bits
    pub flags: u8,
}

impl Voxel {
    /// Empty/air voxel
    pub const EMPTY: Voxel = Voxel {
        color: 0,
        material_id: 0,
        flags: 0,
    };

    /// Create voxel from RGB888 values
    pub fn new(r: u8, g: u8, b: u8, material_id: u8) -> Self {
        Self {
            color: rgb_to_565(r, g, b),
            material_id,
            flags: 0,
        }
    }

    /// Create voxel from RGB565 color
    pub fn from_rgb565(color: u16, material_id: u8) -> Self {
        Self {
            color,
            material_id,
            flags: 0,
        }
    }

    /// Create a copy of this voxel with the given flags value
    pub fn with_flags_value(self, flags: u8) -> Self {
        Self { flags, ..self }
    }
}

impl CellContent for Voxel {
    type Category = u8;

    fn category(&self) -> u8 {
        self.material_id
    }
}
