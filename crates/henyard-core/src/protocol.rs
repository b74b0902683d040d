//! Messages exchanged with the external decision service
//!
//! Serialized as JSON on the wire. Agent id 1 is the robot; hens are
//! numbered from 2 in spawn order.

use serde::{Deserialize, Serialize};

use crate::grid::GridCell;

/// Agent id reserved for the robot
pub const ROBOT_AGENT_ID: u32 = 1;

/// Agent id of the first hen
pub const FIRST_HEN_AGENT_ID: u32 = 2;

/// Hen index for an agent id, if the id can name a hen at all
pub fn hen_index(agent_id: u32) -> Option<usize> {
    agent_id
        .checked_sub(FIRST_HEN_AGENT_ID)
        .map(|index| index as usize)
}

/// Goal location, either a grid cell or raw world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPosition {
    Grid { x: u32, y: u32 },
    World { x: f32, z: f32 },
}

/// New goal for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentGoal {
    pub id: u32,
    pub position: GoalPosition,
    /// Movement mode name, e.g. "normal" or "fleeing"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Batch of goals returned by the decision service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    #[serde(default)]
    pub agents: Vec<AgentGoal>,
}

/// Robot position report sent to the decision service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateReport {
    pub tick: u64,
    pub robot: GridCell,
}
