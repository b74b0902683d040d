//! Movement modes requested by the decision service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModeParseError;

/// Named movement preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    #[default]
    Normal,
    Fleeing,
}

impl MovementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementMode::Normal => "normal",
            MovementMode::Fleeing => "fleeing",
        }
    }
}

impl FromStr for MovementMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(MovementMode::Normal),
            "fleeing" => Ok(MovementMode::Fleeing),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speeds applied when a hen switches mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionPreset {
    /// World units per tick towards the current target
    pub interpolation_speed: f32,
    /// Leg march speed (degrees per tick)
    pub leg_speed: f32,
    /// Wing flap speed (degrees per tick)
    pub wing_speed: f32,
}

impl MotionPreset {
    pub const NORMAL: MotionPreset = MotionPreset {
        interpolation_speed: 0.5,
        leg_speed: 4.0,
        wing_speed: 3.0,
    };

    pub const FLEEING: MotionPreset = MotionPreset {
        interpolation_speed: 1.0,
        leg_speed: 8.0,
        wing_speed: 6.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("normal".parse::<MovementMode>(), Ok(MovementMode::Normal));
        assert_eq!(" Fleeing ".parse::<MovementMode>(), Ok(MovementMode::Fleeing));
        assert_eq!(
            "panicking".parse::<MovementMode>(),
            Err(ModeParseError("panicking".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in [MovementMode::Normal, MovementMode::Fleeing] {
            assert_eq!(mode.to_string().parse::<MovementMode>(), Ok(mode));
        }
    }
}
