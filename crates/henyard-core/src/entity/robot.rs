//! Player robot - drive input, vertical bob, arm swing

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::hen::CaptorPose;
use super::input::RobotInput;
use super::model::RobotModels;
use crate::collision::CollisionHandler;
use crate::grid::WorldBounds;
use crate::heading;
use crate::pose::ArmPair;
use crate::settings::RobotSettings;

/// Body bounce while driving forward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalBob {
    /// Current lift (world units)
    pub offset: f32,
    /// Degrees
    pub phase: f32,
    pub speed: f32,  // Degrees per tick
    pub height: f32, // Peak lift
    pub decay: f32,  // Lift lost per idle tick
}

impl VerticalBob {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            phase: 0.0,
            speed: 8.0,
            height: 1.0,
            decay: 0.1,
        }
    }

    pub fn update(&mut self, driving_forward: bool) {
        if driving_forward {
            self.phase = (self.phase + self.speed) % 360.0;
            self.offset = self.phase.to_radians().sin().abs() * self.height;
        } else if self.offset > self.decay {
            self.offset -= self.decay;
        } else {
            self.offset = 0.0;
            self.phase = 0.0;
        }
    }
}

impl Default for VerticalBob {
    fn default() -> Self {
        Self::new()
    }
}

/// The player-controlled robot
#[derive(Debug, Clone)]
pub struct Robot {
    /// Ground position; y is always 0
    pub position: Vec3,
    /// Degrees, [0, 360)
    pub heading: f32,
    pub speed: f32,
    pub turn_speed: f32,
    pub radius: f32,
    pub base_height: f32,
    pub scale: f32,
    pub bob: VerticalBob,
    pub arms: ArmPair,
    holding: bool,
    pub models: RobotModels,
}

impl Robot {
    /// Arm joints relative to the body origin (model space)
    pub const LEFT_ARM_OFFSET: Vec3 = Vec3::new(0.75, -0.4, 0.0);
    pub const RIGHT_ARM_OFFSET: Vec3 = Vec3::new(-0.75, -0.4, 0.0);

    pub fn new(settings: &RobotSettings) -> Self {
        Self {
            position: settings.start_position(),
            heading: 0.0,
            speed: settings.speed,
            turn_speed: settings.turn_speed,
            radius: settings.radius,
            base_height: settings.base_height,
            scale: settings.scale,
            bob: VerticalBob::new(),
            arms: ArmPair::new(),
            holding: false,
            models: RobotModels::default(),
        }
    }

    pub fn with_models(mut self, models: RobotModels) -> Self {
        self.models = models;
        self
    }

    pub fn planar_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub(crate) fn set_holding(&mut self, holding: bool) {
        self.holding = holding;
    }

    /// Apply one tick of drive input.
    ///
    /// Turning is applied before the forward vector is taken. The proposed
    /// position is kept inside `bounds` and then resolved against the
    /// obstacles, so a blocked move slides along an axis or stays put.
    pub fn drive(&mut self, input: &RobotInput, collision: &CollisionHandler, bounds: &WorldBounds) {
        if input.turn_left {
            self.heading += self.turn_speed;
        }
        if input.turn_right {
            self.heading -= self.turn_speed;
        }
        self.heading = heading::normalize(self.heading);

        let forward = heading::direction(self.heading) * self.speed;
        let mut proposed = self.planar_position();
        if input.forward {
            proposed += forward;
        }
        if input.backward {
            proposed -= forward;
        }

        let moving = input.forward || input.backward;
        if moving {
            let old = self.planar_position();
            let resolved = collision.resolve(old, bounds.clamp(proposed), self.radius);
            if resolved != old {
                log::trace!("Robot moved to ({:.2}, {:.2})", resolved.x, resolved.y);
            }
            self.position.x = resolved.x;
            self.position.z = resolved.y;
        }

        self.bob.update(input.forward);
        self.arms.update(moving, self.holding);
    }

    /// Pose handed to a carried hen
    pub fn captor_pose(&self) -> CaptorPose {
        CaptorPose {
            position: self.position,
            heading: self.heading,
            base_height: self.base_height,
        }
    }

    /// Lift of the drawn body above the ground
    pub fn lift(&self) -> f32 {
        self.base_height + self.bob.offset
    }
}
