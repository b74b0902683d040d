//! Herding simulation core for Henyard
//!
//! This crate implements:
//! - Static obstacle collision with axis-decomposed move resolution
//! - Limb oscillators and model matrices for the robot and the hens
//! - Robot drive and hen target-seeking motion
//! - The capture/drop state machine
//! - Grid mapping and the decision-service message types
//! - `World`, the context every tick runs against

pub mod capture;
pub mod collision;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heading;
pub mod pose;
pub mod protocol;
pub mod render;
pub mod settings;
pub mod snapshot;
pub mod sync;
pub mod world;

// Re-export main types for convenience
pub use capture::{CaptureEvent, CaptureSystem};
pub use collision::{CollisionHandler, LevelLayout, ObstaclesInfo};
pub use entity::{Hen, HenState, MovementMode, Robot, RobotInput};
pub use error::{CollisionError, GoalError, LevelError, ModeParseError};
pub use grid::{GridCell, GridMapping, WorldBounds};
pub use protocol::{AgentGoal, GoalPosition, GoalUpdate, StateReport};
pub use settings::SimulationSettings;
pub use snapshot::{EntitySnapshot, WorldSnapshot};
pub use sync::PositionReporter;
pub use world::{GoalOutcome, World};
