//! Material palette and the text forms of voxel content, patterns and masks.
//!
//! Content is written as `<material>` or `<material>[key=value,...]`, where
//! `<material>` is a palette name (case-insensitive) or a numeric id and the
//! recognised keys are `color` (`#rrggbb` or a raw RGB565 integer) and
//! `flags`. Patterns use the same syntax; keys they leave out match anything.

use serde::{Deserialize, Serialize};

use super::cell::{CellMatcher, Mask};
use super::voxel::{rgb_to_565, Voxel};
use crate::core::error::EditError;

/// One palette entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: u8,
    pub name: String,
    /// Default RGB888 colour used when content text gives none
    pub color: [u8; 3],
}

impl MaterialEntry {
    pub fn new(id: u8, name: impl Into<String>, color: [u8; 3]) -> Self {
        Self { id, name: name.into(), color }
    }

    pub fn rgb565(&self) -> u16 {
        rgb_to_565(self.color[0], self.color[1], self.color[2])
    }
}

/// Built-in palette used when the configuration does not provide one.
pub fn default_materials() -> Vec<MaterialEntry> {
    vec![
        MaterialEntry::new(0, "air", [0, 0, 0]),
        MaterialEntry::new(1, "stone", [128, 128, 128]),
        MaterialEntry::new(2, "dirt", [134, 96, 67]),
        MaterialEntry::new(3, "grass", [95, 159, 53]),
        MaterialEntry::new(4, "sand", [219, 207, 163]),
        MaterialEntry::new(5, "water", [47, 67, 244]),
        MaterialEntry::new(6, "wood", [139, 90, 43]),
        MaterialEntry::new(7, "leaves", [34, 139, 34]),
        MaterialEntry::new(8, "glass", [200, 220, 255]),
        MaterialEntry::new(9, "brick", [150, 74, 60]),
    ]
}

/// Name/id lookup over a list of [`MaterialEntry`].
#[derive(Clone, Debug)]
pub struct MaterialTable {
    entries: Vec<MaterialEntry>,
}

impl MaterialTable {
    pub fn new(entries: Vec<MaterialEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    pub fn by_name(&self, name: &str) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn by_id(&self, id: u8) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a palette name or numeric id to a material id.
    ///
    /// Numeric ids need not be in the palette.
    pub fn resolve(&self, token: &str) -> Option<u8> {
        let token = token.trim();
        if let Some(entry) = self.by_name(token) {
            return Some(entry.id);
        }
        token.parse::<u8>().ok()
    }

    /// Parse content text into a concrete voxel.
    pub fn parse_content(&self, text: &str) -> Result<Voxel, EditError> {
        let parsed = self.parse_descriptor(text)?;
        let color = parsed
            .color
            .or_else(|| self.by_id(parsed.material_id).map(MaterialEntry::rgb565))
            .unwrap_or(0);
        Ok(Voxel {
            color,
            material_id: parsed.material_id,
            flags: parsed.flags.unwrap_or(0),
        })
    }

    /// Parse pattern text; keys not given are wildcards.
    pub fn parse_pattern(&self, text: &str) -> Result<VoxelPattern, EditError> {
        self.parse_descriptor(text)
    }

    /// Parse a comma-separated mask list.
    ///
    /// Unknown entries are skipped. When nothing usable remains the result is
    /// `None`, meaning the edit is unrestricted.
    pub fn parse_mask(&self, text: &str) -> Option<Mask<u8>> {
        let ids: Vec<u8> = text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| {
                let id = self.resolve(part);
                if id.is_none() {
                    log::debug!("Ignoring unknown mask material '{}'", part);
                }
                id
            })
            .collect();
        Mask::new(ids)
    }

    fn parse_descriptor(&self, text: &str) -> Result<VoxelPattern, EditError> {
        let text = text.trim();
        let (head, props) = match text.find('[') {
            Some(open) => {
                let inner = text[open + 1..]
                    .strip_suffix(']')
                    .ok_or_else(|| EditError::InvalidContent(format!("unterminated '[' in '{}'", text)))?;
                (&text[..open], Some(inner))
            }
            None => (text, None),
        };

        if head.is_empty() {
            return Err(EditError::InvalidContent(format!("missing material in '{}'", text)));
        }
        let material_id = self
            .resolve(head)
            .ok_or_else(|| EditError::InvalidContent(format!("unknown material '{}'", head)))?;

        let mut pattern = VoxelPattern::material(material_id);
        for prop in props.into_iter().flat_map(|p| p.split(',')) {
            let prop = prop.trim();
            if prop.is_empty() {
                continue;
            }
            let (key, value) = prop
                .split_once('=')
                .ok_or_else(|| EditError::InvalidContent(format!("expected key=value, got '{}'", prop)))?;
            match key.trim().to_ascii_lowercase().as_str() {
                "color" | "colour" => pattern.color = Some(parse_color(value.trim())?),
                "flags" => {
                    let flags = value.trim().parse::<u8>().map_err(|_| {
                        EditError::InvalidContent(format!("invalid flags '{}'", value.trim()))
                    })?;
                    pattern.flags = Some(flags);
                }
                other => {
                    return Err(EditError::InvalidContent(format!("unknown property '{}'", other)));
                }
            }
        }
        Ok(pattern)
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new(default_materials())
    }
}

fn parse_color(value: &str) -> Result<u16, EditError> {
    let invalid = || EditError::InvalidContent(format!("invalid color '{}'", value));
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return Ok(rgb_to_565((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
    }
    value.parse::<u16>().map_err(|_| invalid())
}

/// Partial voxel description used by replace.
///
/// The material always has to match; colour and flags only when given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelPattern {
    pub material_id: u8,
    pub color: Option<u16>,
    pub flags: Option<u8>,
}

impl VoxelPattern {
    /// Pattern matching every voxel of a material.
    pub fn material(material_id: u8) -> Self {
        Self { material_id, color: None, flags: None }
    }

    /// Pattern matching exactly one voxel value.
    pub fn exact(voxel: Voxel) -> Self {
        Self {
            material_id: voxel.material_id,
            color: Some(voxel.color),
            flags: Some(voxel.flags),
        }
    }
}

impl CellMatcher<Voxel> for VoxelPattern {
    fn matches(&self, cell: &Voxel) -> bool {
        cell.material_id == self.material_id
            && self.color.is_none_or(|c| c == cell.color)
            && self.flags.is_none_or(|f| f == cell.flags)
    }
}
