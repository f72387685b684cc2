//! Scene entities: rockets and the camera rig.

pub mod camera;
pub mod rocket;

pub use camera::CameraRig;
pub use rocket::{BallisticFlight, FlightPath, Rocket, RocketStatus};
