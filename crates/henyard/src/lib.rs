//! # Henyard - herd hens into the corral
//!
//! Headless driver around `henyard-core`: layered configuration, scripted
//! robot input and the background link to an external decision service.

pub mod app;
pub mod config;
pub mod headless;
pub mod remote;

// Re-export core modules for convenience
pub use henyard_core::collision;
pub use henyard_core::entity;
pub use henyard_core::protocol;
pub use henyard_core::world;

pub use app::{App, RunOptions};
