//! Robot control input for one tick

use serde::{Deserialize, Serialize};

/// Which drive keys are held this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotInput {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,  // Increases heading
    pub turn_right: bool, // Decreases heading
}

impl RobotInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward() -> Self {
        Self {
            forward: true,
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_new_is_idle() {
        let input = RobotInput::new();
        assert!(input.is_idle());
        assert!(!input.forward);
        assert!(!input.turn_left);
    }

    #[test]
    fn test_input_forward() {
        let input = RobotInput::forward();
        assert!(input.forward);
        assert!(!input.backward);
        assert!(!input.is_idle());
    }

    #[test]
    fn test_input_partial_ron() {
        let input: RobotInput = ron::from_str("(turn_left: true)").unwrap();
        assert!(input.turn_left);
        assert!(!input.forward);
    }
}
