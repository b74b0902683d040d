//! Simulated entities: the player robot and the hens it herds

mod hen;
mod input;
mod mode;
mod model;
mod robot;

pub use hen::{CaptorPose, Hen, HenState};
pub use input::RobotInput;
pub use mode::{MotionPreset, MovementMode};
pub use model::{HenModels, ModelHandle, RobotModels};
pub use robot::{Robot, VerticalBob};
