//! Simulation tunables
//!
//! Every section deserializes with per-field defaults so a config file can
//! override a single value.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::entity::MotionPreset;
use crate::grid::{GridMapping, WorldBounds};

/// All simulation settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub robot: RobotSettings,
    pub hen: HenSettings,
    pub capture: CaptureSettings,
    pub world: WorldSettings,
}

/// Player robot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotSettings {
    /// World units per tick
    pub speed: f32,
    /// Degrees per tick
    pub turn_speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Body lift above the ground when drawn
    pub base_height: f32,
    pub scale: f32,
    /// Start position (x, z)
    pub start: (f32, f32),
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            speed: 0.5,
            turn_speed: 1.5,
            radius: 4.0,
            base_height: 5.5,
            scale: 3.0,
            start: (0.0, 0.0),
        }
    }
}

impl RobotSettings {
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(self.start.0, 0.0, self.start.1)
    }
}

/// Hens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HenSettings {
    pub radius: f32,
    pub base_height: f32,
    pub scale: f32,
    /// Heading change per tick while turning towards a target (degrees)
    pub turn_speed: f32,
    pub normal: MotionPreset,
    pub fleeing: MotionPreset,
    /// Spawn positions (x, z); one hen per entry, agent ids start at 2
    pub spawn_points: Vec<(f32, f32)>,
}

impl Default for HenSettings {
    fn default() -> Self {
        Self {
            radius: 3.0,
            base_height: 6.5,
            scale: 3.0,
            turn_speed: 5.0,
            normal: MotionPreset::NORMAL,
            fleeing: MotionPreset::FLEEING,
            spawn_points: vec![
                (20.0, -20.0),
                (-20.0, -30.0),
                (10.0, 30.0),
                (-30.0, 20.0),
                (40.0, -40.0),
            ],
        }
    }
}

/// Which free hen is grabbed when several are in reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupRule {
    /// First hen in spawn order
    #[default]
    FirstInOrder,
    /// Closest hen, ties broken by spawn order
    Nearest,
}

/// Pickup and delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Planar distance below which a free hen is picked up
    pub pickup_radius: f32,
    /// Distance in front of the robot where a carried hen is held
    pub standoff: f32,
    /// Centre of the drop-off zone (x, z)
    pub drop_point: (f32, f32),
    pub drop_radius: f32,
    /// Where delivered hens are placed (x, y, z)
    pub corral_point: (f32, f32, f32),
    pub pickup_rule: PickupRule,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            pickup_radius: 8.0,
            standoff: 6.0,
            drop_point: (100.0, 100.0),
            drop_radius: 10.0,
            corral_point: (105.0, 0.0, 105.0),
            pickup_rule: PickupRule::FirstInOrder,
        }
    }
}

impl CaptureSettings {
    pub fn drop_point(&self) -> Vec2 {
        Vec2::new(self.drop_point.0, self.drop_point.1)
    }

    pub fn corral_point(&self) -> Vec3 {
        Vec3::new(self.corral_point.0, self.corral_point.1, self.corral_point.2)
    }
}

/// Playable area and the decision-service grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// (x, z) corner
    pub bounds_min: (f32, f32),
    /// (x, z) corner
    pub bounds_max: (f32, f32),
    /// Cells per axis on the decision-service grid
    pub grid_size: u32,
    /// Ticks between robot position reports
    pub report_interval_ticks: u64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            bounds_min: (-115.0, -115.0),
            bounds_max: (115.0, 115.0),
            grid_size: 32,
            report_interval_ticks: 30,
        }
    }
}

impl WorldSettings {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(
            Vec2::new(self.bounds_min.0, self.bounds_min.1),
            Vec2::new(self.bounds_max.0, self.bounds_max.1),
        )
    }

    pub fn grid(&self) -> GridMapping {
        GridMapping::new(self.grid_size, self.bounds())
    }
}
