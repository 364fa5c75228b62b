//! Brush shapes voxelised onto the integer grid.

use crate::core::error::EditError;
use crate::core::types::IVec3;

/// Added to the radius when testing sphere membership so that voxelised
/// spheres come out round instead of pinched at the axis tips.
pub const SPHERE_ROUNDING: f64 = 0.5;

/// Brush primitive shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushShape {
    /// Ball of cells within `radius + 0.5` of the centre cell
    Sphere { radius: i32 },
}

impl BrushShape {
    /// Sphere shape; radius must be at least 1.
    pub fn sphere(radius: i32) -> Result<Self, EditError> {
        if radius < 1 {
            return Err(EditError::InvalidShapeParameter(format!(
                "invalid radius {}: must be at least 1",
                radius
            )));
        }
        Ok(BrushShape::Sphere { radius })
    }

    /// Shape from its command name.
    pub fn parse(name: &str, radius: i32) -> Result<Self, EditError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sphere" => Self::sphere(radius),
            other => Err(EditError::InvalidShapeParameter(format!("unknown brush shape '{}'", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BrushShape::Sphere { .. } => "sphere",
        }
    }

    pub fn radius(&self) -> i32 {
        match self {
            BrushShape::Sphere { radius } => *radius,
        }
    }

    /// Whether an offset from the centre cell belongs to the shape.
    pub fn contains_offset(&self, offset: IVec3) -> bool {
        match self {
            BrushShape::Sphere { radius } => {
                let (dx, dy, dz) = (offset.x as f64, offset.y as f64, offset.z as f64);
                let distance = (dx * dx + dy * dy + dz * dz).sqrt();
                distance <= *radius as f64 + SPHERE_ROUNDING
            }
        }
    }

    /// Number of cells in the shape's bounding cube.
    pub fn bounding_volume(&self) -> u64 {
        let side = 2 * self.radius() as u64 + 1;
        side.saturating_mul(side).saturating_mul(side)
    }

    /// All member offsets, x outermost and z innermost.
    pub fn offsets(&self) -> Vec<IVec3> {
        let r = self.radius();
        let mut offsets = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    let offset = IVec3::new(dx, dy, dz);
                    if self.contains_offset(offset) {
                        offsets.push(offset);
                    }
                }
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_must_be_positive() {
        assert!(matches!(BrushShape::sphere(0), Err(EditError::InvalidShapeParameter(_))));
        assert!(matches!(BrushShape::sphere(-3), Err(EditError::InvalidShapeParameter(_))));
        assert_eq!(BrushShape::sphere(1).unwrap().radius(), 1);
    }

    #[test]
    fn test_parse_shape_name() {
        assert_eq!(BrushShape::parse("SPHERE", 2).unwrap(), BrushShape::Sphere { radius: 2 });
        assert!(BrushShape::parse("cube", 2).is_err());
    }

    #[test]
    fn test_radius_one_excludes_corners() {
        let sphere = BrushShape::sphere(1).unwrap();
        let offsets = sphere.offsets();

        // Centre, 6 faces and 12 edges (sqrt(2) <= 1.5); the 8 corners sit at sqrt(3)
        assert_eq!(offsets.len(), 19);
        assert!(offsets.contains(&IVec3::ZERO));
        assert!(offsets.contains(&IVec3::new(0, 0, -1)));
        assert!(offsets.contains(&IVec3::new(1, 1, 0)));
        assert!(!offsets.contains(&IVec3::new(1, 1, 1)));
        assert!(!offsets.contains(&IVec3::new(-1, 1, -1)));
        assert!(offsets.iter().all(|o| o.length_squared() <= 2));
    }

    #[test]
    fn test_sphere_is_symmetric() {
        let sphere = BrushShape::sphere(4).unwrap();
        for offset in sphere.offsets() {
            assert!(sphere.contains_offset(-offset));
            assert!(sphere.contains_offset(IVec3::new(offset.z, offset.x, offset.y)));
        }
    }

    #[test]
    fn test_axis_tips_included() {
        let sphere = BrushShape::sphere(3).unwrap();
        assert!(sphere.contains_offset(IVec3::new(3, 0, 0)));
        assert!(sphere.contains_offset(IVec3::new(0, -3, 0)));
        assert!(!sphere.contains_offset(IVec3::new(4, 0, 0)));
        assert_eq!(sphere.bounding_volume(), 343);
    }

    #[test]
    fn test_extreme_offsets() {
        let sphere = BrushShape::sphere(i32::MAX).unwrap();
        assert!(!sphere.contains_offset(IVec3::splat(i32::MIN)));
        assert!(sphere.contains_offset(IVec3::new(i32::MAX, 0, 0)));
        assert_eq!(sphere.bounding_volume(), u64::MAX);
    }
}
