//! Headless driver: scripted input in place of a keyboard

mod runner;
mod script;

pub use runner::{HeadlessRunner, RunSummary};
pub use script::{InputScript, InputStep};
