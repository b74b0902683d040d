//! Hen entity - target seeking, heading interpolation, capture state

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::mode::{MotionPreset, MovementMode};
use super::model::HenModels;
use crate::heading;
use crate::pose::{LegPair, WingPair};
use crate::settings::HenSettings;

/// Where a hen is in the herding cycle.
///
/// `Delivered` is absorbing: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HenState {
    #[default]
    Free,
    Captured,
    Delivered,
}

/// Pose of the entity carrying a hen, refreshed every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptorPose {
    pub position: Vec3,
    pub heading: f32,
    pub base_height: f32,
}

/// A hen driven by externally supplied goals
#[derive(Debug, Clone)]
pub struct Hen {
    pub position: Vec3,
    /// Degrees, [0, 360)
    pub heading: f32,
    target: Vec3,
    previous: Vec3,
    target_heading: f32,
    moving: bool,
    state: HenState,
    captor: Option<CaptorPose>,
    mode: MovementMode,
    normal: MotionPreset,
    fleeing: MotionPreset,
    interpolation_speed: f32,
    pub turn_speed: f32,
    pub radius: f32,
    pub base_height: f32,
    pub scale: f32,
    pub legs: LegPair,
    pub wings: WingPair,
    pub models: HenModels,
}

impl Hen {
    /// Offsets below which no new heading is computed (per axis)
    pub const HEADING_DEADBAND: f32 = 0.1;

    /// Limb joints relative to the body origin (model space)
    pub const LEFT_LEG_OFFSET: Vec3 = Vec3::new(0.24, -0.35, 0.0);
    pub const RIGHT_LEG_OFFSET: Vec3 = Vec3::new(-0.24, -0.35, 0.0);
    pub const LEFT_WING_OFFSET: Vec3 = Vec3::new(0.42, 0.3, -0.31);
    pub const RIGHT_WING_OFFSET: Vec3 = Vec3::new(-0.42, 0.3, -0.31);

    pub fn new(position: Vec3, settings: &HenSettings) -> Self {
        let mut hen = Self {
            position,
            heading: 0.0,
            target: position,
            previous: position,
            target_heading: 0.0,
            moving: false,
            state: HenState::Free,
            captor: None,
            mode: MovementMode::Normal,
            normal: settings.normal,
            fleeing: settings.fleeing,
            interpolation_speed: settings.normal.interpolation_speed,
            turn_speed: settings.turn_speed,
            radius: settings.radius,
            base_height: settings.base_height,
            scale: settings.scale,
            legs: LegPair::new(),
            wings: WingPair::new(),
            models: HenModels::default(),
        };
        hen.apply_preset(settings.normal);
        hen
    }

    pub fn with_models(mut self, models: HenModels) -> Self {
        self.models = models;
        self
    }

    pub fn state(&self) -> HenState {
        self.state
    }

    pub fn is_free(&self) -> bool {
        self.state == HenState::Free
    }

    pub fn is_captured(&self) -> bool {
        self.state == HenState::Captured
    }

    pub fn is_delivered(&self) -> bool {
        self.state == HenState::Delivered
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Position when the current target was accepted
    pub fn previous(&self) -> Vec3 {
        self.previous
    }

    pub fn target_heading(&self) -> f32 {
        self.target_heading
    }

    pub fn interpolation_speed(&self) -> f32 {
        self.interpolation_speed
    }

    pub fn captor(&self) -> Option<CaptorPose> {
        self.captor
    }

    pub fn planar_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    pub fn planar_target(&self) -> Vec2 {
        Vec2::new(self.target.x, self.target.z)
    }

    /// Lift of the drawn body above `position`. A carried hen already sits
    /// at the captor's base height.
    pub fn lift(&self) -> f32 {
        if self.is_captured() { 0.0 } else { self.base_height }
    }

    /// Switch preset; changes the interpolation speed and the forward limb
    /// speeds immediately.
    pub fn set_mode(&mut self, mode: MovementMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("Hen mode {} -> {}", self.mode, mode);
        self.mode = mode;
        let preset = match mode {
            MovementMode::Normal => self.normal,
            MovementMode::Fleeing => self.fleeing,
        };
        self.apply_preset(preset);
    }

    fn apply_preset(&mut self, preset: MotionPreset) {
        self.interpolation_speed = preset.interpolation_speed;
        self.legs.set_speed(preset.leg_speed);
        self.wings.set_speed(preset.wing_speed);
    }

    /// Accept a new goal (already collision-resolved).
    ///
    /// Ignored unless the hen is free or if it equals the current target.
    /// Returns whether the goal was taken.
    pub fn set_target(&mut self, target: Vec2) -> bool {
        if !self.is_free() || target == self.planar_target() {
            return false;
        }

        self.previous = self.position;
        self.target = Vec3::new(target.x, self.position.y, target.y);
        self.moving = true;

        let offset = target - self.planar_position();
        if offset.x.abs() > Self::HEADING_DEADBAND || offset.y.abs() > Self::HEADING_DEADBAND {
            self.target_heading = heading::towards(offset);
        }

        log::trace!(
            "Hen target {:?} -> {:?} (heading {:.1})",
            self.previous,
            self.target,
            self.target_heading
        );
        true
    }

    /// Advance motion, heading and limbs by one tick
    pub fn advance(&mut self) {
        match self.state {
            HenState::Free => {
                self.step_towards_target();
                self.turn_towards_target();
                self.animate(self.moving);
            }
            // Carried: position comes from the captor. Fleeing hens keep
            // flapping in the robot's arms.
            HenState::Captured => self.animate(self.mode == MovementMode::Fleeing),
            HenState::Delivered => self.animate(false),
        }
    }

    fn step_towards_target(&mut self) {
        if !self.moving {
            return;
        }

        let to_target = self.planar_target() - self.planar_position();
        let distance = to_target.length();

        if distance <= self.interpolation_speed {
            self.position.x = self.target.x;
            self.position.z = self.target.z;
            self.moving = false;
        } else {
            let step = to_target / distance * self.interpolation_speed;
            self.position.x += step.x;
            self.position.z += step.y;
        }
    }

    fn turn_towards_target(&mut self) {
        let diff = heading::shortest_delta(self.heading, self.target_heading);
        if diff.abs() <= self.turn_speed {
            self.heading = self.target_heading;
        } else {
            self.heading = heading::normalize(self.heading + self.turn_speed * diff.signum());
        }
    }

    fn animate(&mut self, active: bool) {
        self.legs.update(active);
        self.wings.update(active);
    }

    /// Free -> Captured
    pub(crate) fn capture(&mut self, captor: CaptorPose, standoff: f32) {
        debug_assert!(self.is_free());
        self.state = HenState::Captured;
        self.moving = false;
        self.follow(captor, standoff);
    }

    /// Rigidly attach in front of the captor
    pub(crate) fn follow(&mut self, captor: CaptorPose, standoff: f32) {
        let ahead = heading::direction(captor.heading) * standoff;
        self.position = Vec3::new(
            captor.position.x + ahead.x,
            captor.base_height,
            captor.position.z + ahead.y,
        );
        self.heading = captor.heading;
        self.captor = Some(captor);
    }

    /// Captured -> Delivered, teleporting to the corral
    pub(crate) fn deliver(&mut self, corral: Vec3) {
        debug_assert!(self.is_captured());
        self.state = HenState::Delivered;
        self.captor = None;
        self.moving = false;
        self.position = corral;
        self.previous = corral;
        self.target = corral;
    }
}
