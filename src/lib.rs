//! NANOGLOBE - live ledger visualization core
//!
//! Turns a stream of transaction confirmations into a bounded set of
//! animated rockets over a globe, and directs the camera between a
//! free-orbit view and a chase view following an active rocket.
//! Re-exports all modules for use by binary targets.

pub mod cli;
pub mod core;
pub mod entities;
pub mod hud;
pub mod settings;
pub mod utils;

// Re-export commonly used types from core
pub use core::classify::{Classifier, Intent};
pub use core::director::{CameraDirector, ViewMode};
pub use core::events::{SceneEvent, SceneEventSender};
pub use core::feed::{ConfirmationEvent, feed_channel};
pub use core::registry::RocketRegistry;
pub use core::scene::{DonationHook, SceneOrchestrator};

// Re-export entities
pub use entities::{BallisticFlight, CameraRig, FlightPath, Rocket, RocketStatus};
pub use hud::HudState;
pub use settings::SceneSettings;
