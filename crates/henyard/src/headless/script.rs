//! Scripted robot input for headless runs
//!
//! A script is a list of steps, each holding one input for a number of
//! ticks. After the last step the robot idles, unless the script repeats.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use henyard_core::entity::RobotInput;
use serde::{Deserialize, Serialize};

/// One input held for `ticks` ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputStep {
    pub ticks: u64,
    #[serde(default)]
    pub input: RobotInput,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<InputStep>,
    #[serde(default)]
    pub repeat: bool,
}

impl InputScript {
    /// Robot stands still the whole run
    pub fn idle() -> Self {
        Self::default()
    }

    /// Drive a square loop around the start position
    pub fn patrol() -> Self {
        let turn_left = RobotInput {
            turn_left: true,
            ..RobotInput::default()
        };
        Self {
            steps: vec![
                InputStep {
                    ticks: 120,
                    input: RobotInput::forward(),
                },
                InputStep {
                    ticks: 60,
                    input: turn_left,
                },
                InputStep {
                    ticks: 120,
                    input: RobotInput::forward(),
                },
                InputStep {
                    ticks: 60,
                    input: turn_left,
                },
            ],
            repeat: true,
        }
    }

    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).context("Failed to parse input script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script {}", path.display()))?;
        Self::from_ron(&text)
    }

    /// Ticks covered by one pass through the steps
    pub fn len_ticks(&self) -> u64 {
        self.steps.iter().map(|s| s.ticks).sum()
    }

    /// Input for a 0-based tick
    pub fn input_at(&self, tick: u64) -> RobotInput {
        let total = self.len_ticks();
        if total == 0 {
            return RobotInput::new();
        }

        let mut offset = if self.repeat { tick % total } else { tick };
        for step in &self.steps {
            if offset < step.ticks {
                return step.input;
            }
            offset -= step.ticks;
        }
        RobotInput::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"(
        steps: [
            (ticks: 2, input: (turn_right: true)),
            (ticks: 3, input: (forward: true)),
            (ticks: 1),
        ],
    )"#;

    #[test]
    fn test_parse_and_step_through() {
        let script = InputScript::from_ron(SCRIPT).unwrap();
        assert_eq!(script.len_ticks(), 6);
        assert!(!script.repeat);

        assert!(script.input_at(0).turn_right);
        assert!(script.input_at(1).turn_right);
        assert!(script.input_at(2).forward);
        assert!(script.input_at(4).forward);
        assert!(script.input_at(5).is_idle());
        assert!(script.input_at(100).is_idle());
    }

    #[test]
    fn test_repeat_wraps() {
        let mut script = InputScript::from_ron(SCRIPT).unwrap();
        script.repeat = true;
        assert!(script.input_at(6).turn_right);
        assert!(script.input_at(8).forward);
    }

    #[test]
    fn test_empty_script_idles() {
        assert!(InputScript::idle().input_at(10).is_idle());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drive.ron");
        std::fs::write(&path, SCRIPT).unwrap();
        assert_eq!(InputScript::load(&path).unwrap().steps.len(), 3);
        assert!(InputScript::load(&dir.path().join("missing.ron")).is_err());
    }

    #[test]
    fn test_patrol_repeats() {
        let script = InputScript::patrol();
        assert!(script.repeat);
        assert_eq!(script.len_ticks(), 360);
    }
}
