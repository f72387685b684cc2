//! Orchestration core: feed intake, classification, rocket lifecycle,
//! camera direction, and the scene that wires them together.

pub mod classify;
pub mod director;
pub mod events;
pub mod feed;
pub mod registry;
pub mod scene;
