//! Error types for setup-time operations
//!
//! Per-tick queries (collision, pose, motion) are total and never fail;
//! only level loading, obstacle registration and incoming goal messages
//! can be rejected.

use thiserror::Error;

/// Obstacle registration failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    DegeneratePolygon { count: usize },
}

/// Level layout loading failures
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("failed to parse level layout: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid obstacle in level layout: {0}")]
    Obstacle(#[from] CollisionError),
}

/// Unknown movement mode name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown movement mode: {0:?}")]
pub struct ModeParseError(pub String);

/// Incoming goal messages that cannot be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("agent id {id} does not map to a hen (known: {count})")]
    UnknownAgent { id: u32, count: usize },
}
