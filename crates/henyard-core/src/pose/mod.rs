//! Procedural limb animation
//!
//! Joint angles come from small per-limb state machines advanced once per
//! tick from the owner's motion flags. Matrices are only built when a
//! frame is drawn.

mod limbs;
mod oscillator;
pub mod transform;

pub use limbs::{ArmPair, LegPair, WingAngles, WingPair};
pub use oscillator::LimbOscillator;
