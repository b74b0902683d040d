//! Collision system - static obstacles, validity queries, sliding moves

mod handler;
pub mod level;

pub use handler::{CollisionHandler, ObstaclesInfo};
pub use level::LevelLayout;
