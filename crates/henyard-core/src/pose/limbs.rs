//! Paired limbs: robot arms, hen legs and wings
//!
//! Each pair keeps one oscillator per side. Both sides receive the same
//! signal, so they carry the same stored angle; left/right mirroring is
//! applied only when the displayed angle is read.

use serde::{Deserialize, Serialize};

use super::oscillator::LimbOscillator;

/// Robot arms with a carry latch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmPair {
    pub left: LimbOscillator,
    pub right: LimbOscillator,
    latched: bool,
}

impl ArmPair {
    /// Both arms point straight ahead while carrying
    pub const LATCH_ANGLE: f32 = -90.0;

    pub fn new() -> Self {
        Self {
            left: LimbOscillator::arm(),
            right: LimbOscillator::arm(),
            latched: false,
        }
    }

    /// Advance one tick. `holding` overrides motion entirely.
    pub fn update(&mut self, moving: bool, holding: bool) {
        if holding {
            self.left.angle = Self::LATCH_ANGLE;
            self.right.angle = Self::LATCH_ANGLE;
            self.latched = true;
            return;
        }

        if self.latched {
            // -90° is far outside the swing band; restart from rest so the
            // reversal test does not fire on every tick
            self.left.reset();
            self.right.reset();
            self.latched = false;
        }

        self.left.update(moving);
        self.right.update(moving);
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// (left, right) angles as drawn. The right arm is mirrored, except
    /// when showing the latch pose, which both arms share unmirrored.
    pub fn display_angles(&self) -> (f32, f32) {
        let right = if self.right.angle == Self::LATCH_ANGLE {
            self.right.angle
        } else {
            -self.right.angle
        };
        (self.left.angle, right)
    }
}

impl Default for ArmPair {
    fn default() -> Self {
        Self::new()
    }
}

/// Hen legs marching in opposition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegPair {
    pub left: LimbOscillator,
    pub right: LimbOscillator,
}

impl LegPair {
    pub fn new() -> Self {
        Self {
            left: LimbOscillator::leg(),
            right: LimbOscillator::leg(),
        }
    }

    pub fn update(&mut self, active: bool) {
        self.left.update(active);
        self.right.update(active);
    }

    /// Forward march speed (degrees per tick); return speed is unchanged
    pub fn set_speed(&mut self, speed: f32) {
        self.left.speed = speed;
        self.right.speed = speed;
    }

    /// (left, right) march angles as drawn
    pub fn display_angles(&self) -> (f32, f32) {
        (self.left.angle, -self.right.angle)
    }
}

impl Default for LegPair {
    fn default() -> Self {
        Self::new()
    }
}

/// Displayed rotation of one wing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingAngles {
    /// Rotation about X (degrees, always >= 0)
    pub flap: f32,
    /// Rotation about Y (degrees), opposite sign per side
    pub sweep: f32,
}

/// Hen wings flapping together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingPair {
    pub left: LimbOscillator,
    pub right: LimbOscillator,
}

impl WingPair {
    /// Sweep follows flap at half amplitude
    pub const SWEEP_RATIO: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            left: LimbOscillator::wing(),
            right: LimbOscillator::wing(),
        }
    }

    pub fn update(&mut self, active: bool) {
        self.left.update(active);
        self.right.update(active);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.left.speed = speed;
        self.right.speed = speed;
    }

    /// (left, right) wing rotations as drawn. Sweep is derived from the
    /// flap angle at draw time; it is not separate state.
    pub fn display_angles(&self) -> (WingAngles, WingAngles) {
        let side = |osc: &LimbOscillator, sign: f32| {
            let flap = osc.angle.abs();
            WingAngles {
                flap,
                sweep: sign * flap * Self::SWEEP_RATIO,
            }
        };
        (side(&self.left, -1.0), side(&self.right, 1.0))
    }
}

impl Default for WingPair {
    fn default() -> Self {
        Self::new()
    }
}
