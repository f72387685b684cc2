//! Rocket registry - owns the live set of animated rockets.
//!
//! Insertion order is launch order (the director cycles rockets in this
//! order), so storage is an `IndexMap` keyed by rocket id. The registry is
//! the sole mutator of rocket lifecycle; everything else looks rockets up
//! by id and must tolerate the id having gone stale, which is why
//! `advance`/`complete` on an unknown id are silent no-ops rather than
//! errors.

use glam::{Quat, Vec3};
use indexmap::IndexMap;
use log::{debug, warn};
use uuid::Uuid;

use crate::core::events::{SceneEvent, SceneEventSender};
use crate::entities::rocket::{BallisticFlight, FlightPath, Rocket};

/// Live rocket set with launch-order iteration.
pub struct RocketRegistry {
    rockets: IndexMap<Uuid, Rocket>,
    events: SceneEventSender,
    flight_duration: f32,
    /// Soft cap on live rockets; spawning at the cap evicts the oldest.
    /// None = unbounded (sustained high confirmation rates will degrade
    /// frame time).
    max_live: Option<usize>,
}

impl RocketRegistry {
    pub fn new(events: SceneEventSender, flight_duration: f32, max_live: Option<usize>) -> Self {
        Self {
            rockets: IndexMap::new(),
            events,
            flight_duration,
            max_live,
        }
    }

    /// Spawn a new rocket at `position` with the default ballistic flight.
    ///
    /// Never fails. At the soft cap the oldest live rocket completes first.
    pub fn spawn(&mut self, position: Vec3) -> Uuid {
        let flight = BallisticFlight::with_duration(position, self.flight_duration);
        self.spawn_with_flight(position, Box::new(flight))
    }

    /// Spawn with an explicit flight path (the collaborator seam)
    pub fn spawn_with_flight(
        &mut self,
        position: Vec3,
        flight: Box<dyn FlightPath + Send>,
    ) -> Uuid {
        if let Some(cap) = self.max_live {
            while self.live_count() >= cap.max(1) {
                let Some(oldest) = self.rockets.keys().next().copied() else {
                    break;
                };
                warn!("Rocket cap {} reached, evicting oldest {}", cap, oldest);
                self.complete(oldest);
            }
        }

        let rocket = Rocket::new(position, flight);
        let id = rocket.id();
        self.rockets.insert(id, rocket);
        debug!("Rocket {} launched from {:?}, {} live", id, position, self.live_count());

        self.events.emit(SceneEvent::RocketLaunched { id });
        self.events.emit(SceneEvent::RocketCountChanged {
            count: self.live_count(),
        });
        id
    }

    /// Advance one rocket by `dt`. Silent no-op for unknown ids.
    ///
    /// Returns true if the rocket's flight completed on this advance;
    /// the caller is expected to follow up with [`complete`](Self::complete).
    pub fn advance(&mut self, id: Uuid, dt: f32) -> bool {
        match self.rockets.get_mut(&id) {
            Some(rocket) => rocket.advance(dt),
            None => false,
        }
    }

    /// Advance every live rocket in launch order.
    ///
    /// Returns the ids whose flights completed this tick. Completions are
    /// not applied here: the per-tick ordering guarantee is that all
    /// advances happen before any removal, so a rocket may be advanced and
    /// completed within the same tick but no rocket is removed mid-pass.
    pub fn advance_all(&mut self, dt: f32) -> Vec<Uuid> {
        let mut finished = Vec::new();
        for (id, rocket) in self.rockets.iter_mut() {
            if rocket.advance(dt) {
                finished.push(*id);
            }
        }
        finished
    }

    /// Remove a completed rocket from the live set. Silent no-op for
    /// unknown ids - rockets complete on internal timers asynchronously
    /// relative to external calls referencing them.
    pub fn complete(&mut self, id: Uuid) {
        if self.rockets.shift_remove(&id).is_some() {
            debug!("Rocket {} completed, {} live", id, self.live_count());
            self.events.emit(SceneEvent::RocketCompleted { id });
            self.events.emit(SceneEvent::RocketCountChanged {
                count: self.live_count(),
            });
        }
    }

    /// Number of rockets not yet completed
    pub fn live_count(&self) -> usize {
        self.rockets.values().filter(|r| r.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.rockets.get(&id).map(|r| r.is_live()).unwrap_or(false)
    }

    /// Live rocket ids in launch order
    pub fn ids(&self) -> Vec<Uuid> {
        self.rockets
            .iter()
            .filter(|(_, r)| r.is_live())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Current position of a rocket, if it is still live
    pub fn position(&self, id: Uuid) -> Option<Vec3> {
        self.rockets.get(&id).filter(|r| r.is_live()).map(|r| r.position())
    }

    /// Per-frame transforms for the render surface, in launch order
    pub fn transforms(&self) -> Vec<(Uuid, Vec3, Quat)> {
        self.rockets
            .iter()
            .filter(|(_, r)| r.is_live())
            .map(|(id, r)| (*id, r.position(), r.orientation()))
            .collect()
    }
}
