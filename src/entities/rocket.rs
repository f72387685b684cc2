//! Rocket entity - one transient animated object with a bounded lifetime.
//!
//! A rocket is created by the registry from a launch position on the globe
//! surface, advances along its flight path once per render tick, and signals
//! completion exactly once when the flight duration elapses. The registry is
//! the sole owner; everything else refers to rockets by id.

use glam::{Quat, Vec3};
use uuid::Uuid;

/// Seconds spent in the liftoff phase before a rocket counts as in-flight
const LIFTOFF_DURATION: f32 = 1.5;

/// Default flight duration in seconds
pub const DEFAULT_FLIGHT_DURATION: f32 = 40.0;

/// Lifecycle status of a rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketStatus {
    Launching,
    InFlight,
    Completed,
}

/// Flight path seam: maps elapsed time to a transform.
///
/// The actual trajectory construction is a collaborator concern; the
/// registry only needs a transform per tick and a finite duration.
pub trait FlightPath {
    /// Transform (position, orientation) at `elapsed` seconds after launch
    fn transform_at(&self, elapsed: f32) -> (Vec3, Quat);

    /// Total flight duration in seconds
    fn duration(&self) -> f32;
}

/// Radially-outward accelerating ascent from the launch point.
///
/// Altitude above the launch radius grows quadratically, so a full-length
/// flight carries the chase camera out through every narrative band.
/// Orientation tracks the (radial) velocity direction.
#[derive(Debug, Clone)]
pub struct BallisticFlight {
    origin: Vec3,
    duration: f32,
    /// Quadratic altitude gain coefficient (units / s^2)
    accel: f32,
}

impl BallisticFlight {
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            duration: DEFAULT_FLIGHT_DURATION,
            accel: 0.5,
        }
    }

    pub fn with_duration(origin: Vec3, duration: f32) -> Self {
        Self {
            origin,
            duration: duration.max(0.0),
            accel: 0.5,
        }
    }
}

impl FlightPath for BallisticFlight {
    fn transform_at(&self, elapsed: f32) -> (Vec3, Quat) {
        let t = elapsed.clamp(0.0, self.duration);
        let dir = self.origin.normalize_or_zero();
        let altitude = self.accel * t * t;
        let position = self.origin + dir * altitude;
        // Model nose points +Y; rotate it onto the ascent direction
        let orientation = Quat::from_rotation_arc(Vec3::Y, dir);
        (position, orientation)
    }

    fn duration(&self) -> f32 {
        self.duration
    }
}

/// One live rocket. Owned exclusively by the registry.
pub struct Rocket {
    id: Uuid,
    launch_position: Vec3,
    position: Vec3,
    orientation: Quat,
    status: RocketStatus,
    elapsed: f32,
    flight: Box<dyn FlightPath + Send>,
}

impl Rocket {
    /// Create a rocket at its launch position with the given flight path
    pub fn new(launch_position: Vec3, flight: Box<dyn FlightPath + Send>) -> Self {
        let (position, orientation) = flight.transform_at(0.0);
        Self {
            id: Uuid::new_v4(),
            launch_position,
            position,
            orientation,
            status: RocketStatus::Launching,
            elapsed: 0.0,
            flight,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn launch_position(&self) -> Vec3 {
        self.launch_position
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn status(&self) -> RocketStatus {
        self.status
    }

    pub fn is_live(&self) -> bool {
        self.status != RocketStatus::Completed
    }

    /// Advance the flight by `dt` seconds, updating the transform.
    ///
    /// Returns true exactly once, on the tick the flight duration elapses.
    /// Further calls after completion are no-ops returning false.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.status == RocketStatus::Completed {
            return false;
        }

        self.elapsed += dt.max(0.0);
        let (position, orientation) = self.flight.transform_at(self.elapsed);
        self.position = position;
        self.orientation = orientation;

        if self.status == RocketStatus::Launching && self.elapsed >= LIFTOFF_DURATION {
            self.status = RocketStatus::InFlight;
        }

        if self.elapsed >= self.flight.duration() {
            self.status = RocketStatus::Completed;
            return true;
        }
        false
    }
}

impl std::fmt::Debug for Rocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rocket")
            .field("id", &self.id)
            .field("status", &self.status)
            .field("elapsed", &self.elapsed)
            .field("position", &self.position)
            .finish()
    }
}
