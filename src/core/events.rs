//! Event system for scene state changes.
//!
//! Events are emitted when significant state changes occur (rockets launched,
//! completed, live count changed) and handled by the scene orchestrator to
//! trigger side effects (camera retargeting, HUD refresh).

use crossbeam::channel::Sender;
use uuid::Uuid;

/// Events related to animation state changes
#[derive(Debug, Clone)]
pub enum SceneEvent {
    /// A rocket was spawned into the registry
    RocketLaunched { id: Uuid },

    /// A rocket finished its flight and was removed from the live set
    RocketCompleted { id: Uuid },

    /// Number of live rockets changed
    RocketCountChanged { count: usize },
}

/// Event sender wrapper for the registry
///
/// The registry holds this sender to emit events when its state changes.
#[derive(Clone, Debug)]
pub struct SceneEventSender {
    sender: Option<Sender<SceneEvent>>,
}

impl SceneEventSender {
    /// Create event sender (connected to channel)
    pub fn new(sender: Sender<SceneEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create dummy sender (for tests or when events not needed)
    pub fn dummy() -> Self {
        Self { sender: None }
    }

    /// Emit event (silent if no receiver)
    pub fn emit(&self, event: SceneEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event); // Ignore send errors (receiver might be dropped)
        }
    }
}

impl Default for SceneEventSender {
    fn default() -> Self {
        Self::dummy()
    }
}
