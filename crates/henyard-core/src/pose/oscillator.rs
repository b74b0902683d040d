//! Single-joint swing oscillator

use serde::{Deserialize, Serialize};

/// A joint angle driven by an on/off signal.
///
/// While active the angle walks by `speed` per tick and reverses once its
/// magnitude exceeds `max_angle`. The reversal happens after the step, so
/// the angle overshoots the bound by up to one step; the waveform is a
/// stepped triangle wave, never clamped. While inactive the angle returns
/// to rest by `return_speed` per tick and snaps to exactly 0 on the last
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbOscillator {
    /// Current angle (degrees)
    pub angle: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    /// Degrees per tick while active
    pub speed: f32,
    /// Reversal threshold (degrees)
    pub max_angle: f32,
    /// Degrees per tick while returning to rest
    pub return_speed: f32,
}

impl LimbOscillator {
    pub const fn new(speed: f32, max_angle: f32, return_speed: f32) -> Self {
        Self {
            angle: 0.0,
            direction: 1.0,
            speed,
            max_angle,
            return_speed,
        }
    }

    /// Robot arm swing: 2.5°/tick up to 45°
    pub const fn arm() -> Self {
        Self::new(2.5, 45.0, 2.5)
    }

    /// Hen leg march: 4°/tick up to 20°, returns at 6°/tick
    pub const fn leg() -> Self {
        Self::new(4.0, 20.0, 6.0)
    }

    /// Hen wing flap: 3°/tick up to 30°
    pub const fn wing() -> Self {
        Self::new(3.0, 30.0, 3.0)
    }

    /// Advance one tick
    pub fn update(&mut self, active: bool) {
        if !active {
            if self.angle.abs() > self.return_speed {
                self.angle -= self.return_speed.copysign(self.angle);
            } else {
                self.angle = 0.0;
            }
            return;
        }

        self.angle += self.speed * self.direction;

        if self.angle.abs() > self.max_angle {
            self.direction = -self.direction;
        }
    }

    /// Back to rest, swinging forward first
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.direction = 1.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.angle == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_strictly_greater() {
        let mut osc = LimbOscillator::new(5.0, 30.0, 5.0);
        for _ in 0..6 {
            osc.update(true);
        }
        assert_eq!(osc.angle, 30.0);
        assert_eq!(osc.direction, 1.0);

        osc.update(true);
        assert_eq!(osc.angle, 35.0);
        assert_eq!(osc.direction, -1.0);

        osc.update(true);
        assert_eq!(osc.angle, 30.0);
    }

    #[test]
    fn test_full_cycle_is_symmetric() {
        let mut osc = LimbOscillator::new(5.0, 30.0, 5.0);
        let mut min = 0.0f32;
        let mut max = 0.0f32;
        for _ in 0..200 {
            osc.update(true);
            min = min.min(osc.angle);
            max = max.max(osc.angle);
        }
        assert_eq!(max, 35.0);
        assert_eq!(min, -35.0);
    }

    #[test]
    fn test_return_to_rest_snaps() {
        let mut osc = LimbOscillator::leg();
        osc.angle = 14.0;
        osc.update(false);
        assert_eq!(osc.angle, 8.0);
        osc.update(false);
        assert_eq!(osc.angle, 2.0);
        osc.update(false);
        assert_eq!(osc.angle, 0.0);
        assert!(osc.is_at_rest());
    }

    #[test]
    fn test_return_from_negative_angle() {
        let mut osc = LimbOscillator::arm();
        osc.angle = -6.0;
        osc.update(false);
        assert_eq!(osc.angle, -3.5);
        osc.update(false);
        assert_eq!(osc.angle, -1.0);
        osc.update(false);
        assert_eq!(osc.angle, 0.0);
    }

    #[test]
    fn test_direction_survives_pause() {
        let mut osc = LimbOscillator::wing();
        for _ in 0..11 {
            osc.update(true);
        }
        assert_eq!(osc.direction, -1.0);
        osc.update(false);
        assert_eq!(osc.direction, -1.0);
    }
}
