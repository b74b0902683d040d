//! Decision service link
//!
//! A single worker thread exchanges state reports for goal updates while
//! the simulation keeps ticking.

mod http;
mod slot;
mod worker;

pub use http::{DecisionService, HttpDecisionService};
pub use slot::LatestSlot;
pub use worker::RemoteLink;
