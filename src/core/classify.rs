//! Event classifier - turns one confirmation into animation intents.
//!
//! Pure with respect to scene state: the classifier never touches the
//! registry or the director, it only emits intents for the orchestrator to
//! apply. This keeps classification testable in isolation and makes the
//! malformed-event policy trivial (no intents, nothing else to unwind).

use glam::Vec3;
use log::debug;

use crate::core::feed::ConfirmationEvent;
use crate::utils::{amount, geo};

/// What the scene should do in response to one confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Fire the one-shot donation effect with the parsed amount
    DonationEffect { units: f64 },
    /// Launch a new rocket from this position on the globe surface
    SpawnRocket { position: Vec3 },
}

/// Stateless classifier, configured once at scene construction
#[derive(Debug, Clone)]
pub struct Classifier {
    donation_account: String,
    globe_radius: f32,
}

impl Classifier {
    pub fn new(donation_account: impl Into<String>, globe_radius: f32) -> Self {
        Self {
            donation_account: donation_account.into(),
            globe_radius,
        }
    }

    /// Classify one confirmation into zero or more intents.
    ///
    /// `live_count` is the registry's live rocket count at classification
    /// time: when it is zero, a qualifying transfer always spawns at least
    /// one rocket so the scene never goes silently idle after a lull.
    ///
    /// Malformed events (unparsable amount) classify to no intents.
    pub fn classify(&self, event: &ConfirmationEvent, live_count: usize) -> Vec<Intent> {
        let Some(units) = amount::parse_raw(&event.amount) else {
            debug!("Dropping confirmation with malformed amount: {:?}", event.amount);
            return Vec::new();
        };

        let mut intents = Vec::new();

        let is_donation =
            !self.donation_account.is_empty() && event.link_as_account == self.donation_account;
        if is_donation {
            intents.push(Intent::DonationEffect { units });
        }

        if event.is_send() {
            let floor = if live_count == 0 { 1 } else { 0 };
            let count = amount::scale_rocket_count(units).max(floor);
            for _ in 0..count {
                // Fresh position per spawn - launches from one confirmation
                // scatter across the globe rather than stacking
                intents.push(Intent::SpawnRocket {
                    position: geo::random_point_on_globe(self.globe_radius),
                });
            }
        }

        intents
    }
}
