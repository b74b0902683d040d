//! Hand-placed level geometry
//!
//! Coordinates are authored in level units and scaled once by the world
//! scale factor when a [`CollisionHandler`](super::CollisionHandler) is
//! built. Keep the tables exactly as authored: they encode the farm layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Static obstacle layout in unscaled level coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Multiplier from level units to world units
    pub scale: f32,
    /// Radius for `trees` (world units, applied after scaling)
    pub tree_radius: f32,
    /// Radius for `small_objects` (world units, applied after scaling)
    pub small_object_radius: f32,
    pub trees: Vec<(f32, f32)>,
    pub small_objects: Vec<(f32, f32)>,
    /// Polygons as (x, z) vertex lists, usually 4-vertex rectangles
    pub structures: Vec<Vec<(f32, f32)>>,
}

impl LevelLayout {
    pub const SCALE: f32 = 7.0;
    pub const TREE_RADIUS: f32 = 1.5; // reduced from 14.0 so trunks, not canopies, block
    pub const SMALL_OBJECT_RADIUS: f32 = 1.5;

    /// The farm: tree line, two props, a lake and the barn complex
    pub fn farm() -> Self {
        let trees = vec![
            (12.393, 13.74),
            (14.078, 10.474),
            (6.3949, 10.571),
            (-13.1796, -5.71744),
            (-14.1795, -10.081),
            (-12.7376, -13.1353),
            (-9.12857, -15.5624),
            (-5.38219, -14.1682),
            (-2.95916, -13.0208),
            (-0.020705, -13.9497),
            (8.74049, -2.58273),
            (12.1852, -14.8262),
            (2.31538, -14.1933),
            (7.64738, -15.4393),
            (6.23518, -12.692),
            (9.37471, -12.9266),
            (2.0096, -10.4211),
            (7.03635, -7.36681),
            (10.7497, -10.6635),
            (14.3611, -9.92402),
            (9.75964, -6.10734),
            (13.3382, -4.24951),
        ];

        let small_objects = vec![(3.6358, -7.0076), (-2.3142, -6.9642)];

        let structures = vec![
            // Lake
            vec![(13.11, 8.485), (3.863, 8.485), (3.863, -0.7709), (13.11, -0.7709)],
            vec![(-3.857, -5.4), (-10.03, -5.4), (-10.03, -13.11), (-3.857, -13.11)],
            vec![(-0.773, 16.2), (-16.2, 16.2), (-16.2, 5.402), (-0.773, 5.402)],
            vec![(-3.857, 5.4), (-14.65, 5.4), (-14.65, 3.857), (-3.857, 3.857)],
            vec![(-5.4, 3.857), (-14.65, 3.857), (-14.65, 2.312), (-5.4, 2.312)],
            vec![(-6.942, 2.312), (-14.65, 2.312), (-14.65, -0.772), (-6.942, -0.772)],
            vec![(-8.485, -0.772), (-13.1, -0.772), (-13.1, -2.315), (-8.485, -2.315)],
        ];

        Self {
            scale: Self::SCALE,
            tree_radius: Self::TREE_RADIUS,
            small_object_radius: Self::SMALL_OBJECT_RADIUS,
            trees,
            small_objects,
            structures,
        }
    }

    /// Level with no obstacles, for tests and open-field scenarios
    pub fn empty() -> Self {
        Self {
            scale: 1.0,
            tree_radius: Self::TREE_RADIUS,
            small_object_radius: Self::SMALL_OBJECT_RADIUS,
            trees: Vec::new(),
            small_objects: Vec::new(),
            structures: Vec::new(),
        }
    }

    /// Parse a layout from RON text
    pub fn from_ron(text: &str) -> Result<Self, LevelError> {
        Ok(ron::from_str(text)?)
    }

    /// Scale a level-space point into world space
    pub fn scaled(&self, (x, z): (f32, f32)) -> Vec2 {
        Vec2::new(x * self.scale, z * self.scale)
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::farm()
    }
}
