//! Camera director - state machine for orbit vs. chase view.
//!
//! Two states: `Orbit` (free orbit controls, owned by the render surface)
//! and `Chase` (camera follows one active rocket). The active rocket is a
//! revocable reference-by-id: rockets complete on internal timers
//! asynchronously relative to camera code, so the id is re-validated
//! against the registry on every frame instead of assumed stable.
//!
//! The "back to earth" camera reset is a scheduled, cancellable deferred
//! task on the director's own clock: the short delay keeps the pose write
//! from colliding with an in-progress camera transform from the previous
//! frame, and a superseding toggle/reset cancels it deterministically.

use log::debug;
use uuid::Uuid;

use crate::core::registry::RocketRegistry;
use crate::entities::camera::CameraRig;

/// Default deferred camera-reset delay in seconds of scene time
pub const DEFAULT_RESET_DELAY: f32 = 0.1;

/// Camera view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Free orbit around the globe (initial state)
    Orbit,
    /// Following the active rocket
    Chase,
}

/// Governs which view is active, which rocket is followed, and the
/// continuously-sampled camera distance that drives the narrative HUD.
pub struct CameraDirector {
    mode: ViewMode,
    active_rocket: Option<Uuid>,
    distance_from_earth: f32,
    /// Scene time, advanced by update(); basis for the deferred reset
    clock: f64,
    pending_reset_at: Option<f64>,
    reset_delay: f64,
}

impl CameraDirector {
    pub fn new(reset_delay: f32) -> Self {
        Self {
            mode: ViewMode::Orbit,
            active_rocket: None,
            distance_from_earth: 0.0,
            clock: 0.0,
            pending_reset_at: None,
            reset_delay: reset_delay.max(0.0) as f64,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_chasing(&self) -> bool {
        self.mode == ViewMode::Chase
    }

    /// Id of the rocket being followed; Some only in chase mode
    pub fn active_rocket(&self) -> Option<Uuid> {
        self.active_rocket
    }

    /// Camera distance to the globe center, republished every frame
    pub fn distance_from_earth(&self) -> f32 {
        self.distance_from_earth
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset_at.is_some()
    }

    /// User action: switch orbit <-> chase.
    ///
    /// Entering chase targets the first live rocket in launch order; with
    /// no live rockets the director stays in orbit. Cancels a pending
    /// camera reset either way.
    pub fn toggle_view(&mut self, registry: &RocketRegistry) {
        self.pending_reset_at = None;
        match self.mode {
            ViewMode::Orbit => {
                if let Some(first) = registry.ids().first().copied() {
                    debug!("Chase view on, following rocket {}", first);
                    self.mode = ViewMode::Chase;
                    self.active_rocket = Some(first);
                } else {
                    debug!("Chase view requested with no live rockets, staying in orbit");
                }
            }
            ViewMode::Chase => {
                debug!("Chase view off");
                self.mode = ViewMode::Orbit;
                self.active_rocket = None;
            }
        }
    }

    /// User action: follow the next rocket in launch order, cyclically.
    /// No-op in orbit mode or with zero live rockets.
    pub fn next_rocket(&mut self, registry: &RocketRegistry) {
        if self.mode != ViewMode::Chase {
            return;
        }
        let ids = registry.ids();
        if ids.is_empty() {
            return;
        }
        let next = match self.active_rocket.and_then(|id| ids.iter().position(|x| *x == id)) {
            Some(idx) => ids[(idx + 1) % ids.len()],
            None => ids[0],
        };
        debug!("Next rocket: {}", next);
        self.active_rocket = Some(next);
    }

    /// Registry notification: a rocket finished its flight.
    ///
    /// If it was the active rocket, re-target another live rocket or fall
    /// back to orbit. Completions of non-active rockets are ignored here
    /// (the count-changed path handles the empty-scene case).
    pub fn on_rocket_completed(&mut self, id: Uuid, registry: &RocketRegistry) {
        if self.active_rocket != Some(id) {
            return;
        }
        match registry.ids().first().copied() {
            Some(next) => {
                debug!("Active rocket {} completed, re-targeting {}", id, next);
                self.active_rocket = Some(next);
            }
            None => {
                debug!("Active rocket {} completed with none left, back to orbit", id);
                self.mode = ViewMode::Orbit;
                self.active_rocket = None;
            }
        }
    }

    /// Registry notification: live count changed.
    ///
    /// Zero live rockets forces orbit unconditionally - guards against any
    /// stale active reference.
    pub fn on_count_changed(&mut self, count: usize) {
        if count == 0 && self.mode == ViewMode::Chase {
            debug!("Live count reached zero, forcing orbit view");
            self.mode = ViewMode::Orbit;
            self.active_rocket = None;
        }
    }

    /// User action: back to earth.
    ///
    /// Leaves chase immediately; the actual camera pose reset fires after
    /// the configured delay on the next update() past the due time.
    /// Supersedes (reschedules) any reset already pending.
    pub fn reset_to_earth(&mut self) {
        debug!("Reset to earth requested, pose reset in {:.0} ms", self.reset_delay * 1000.0);
        self.mode = ViewMode::Orbit;
        self.active_rocket = None;
        self.pending_reset_at = Some(self.clock + self.reset_delay);
    }

    /// Per-frame update: re-validate the active rocket, drive the chase
    /// camera, fire a due deferred reset, and republish the distance.
    pub fn update(&mut self, dt: f32, registry: &RocketRegistry, camera: &mut CameraRig) {
        self.clock += dt.max(0.0) as f64;

        if self.mode == ViewMode::Chase {
            // Revocable reference: the active id must resolve to a live
            // rocket right now, not at the time it was selected
            let target = self
                .active_rocket
                .filter(|id| registry.contains(*id))
                .or_else(|| registry.ids().first().copied());
            match target {
                Some(id) => {
                    self.active_rocket = Some(id);
                    if let Some(pos) = registry.position(id) {
                        camera.follow(pos);
                    }
                }
                None => {
                    self.mode = ViewMode::Orbit;
                    self.active_rocket = None;
                }
            }
        }

        if let Some(due) = self.pending_reset_at
            && self.clock >= due
        {
            debug!("Deferred camera reset firing");
            camera.reset_to_earth();
            self.pending_reset_at = None;
        }

        // Sampled once per frame, after any pose change this frame
        self.distance_from_earth = camera.distance_from_origin();
    }
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::SceneEventSender;
    use crate::entities::camera::RESET_POSITION;
    use glam::Vec3;

    fn registry_with(n: usize) -> (RocketRegistry, Vec<Uuid>) {
        let mut reg = RocketRegistry::new(SceneEventSender::dummy(), 100.0, None);
        let ids = (0..n).map(|_| reg.spawn(Vec3::new(0.0, 1.2, 0.0))).collect();
        (reg, ids)
    }

    #[test]
    fn test_initial_state_is_orbit() {
        let d = CameraDirector::default();
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_toggle_without_rockets_stays_orbit() {
        let (reg, _) = registry_with(0);
        let mut d = CameraDirector::default();
        d.toggle_view(&reg);
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_toggle_targets_first_rocket_then_back() {
        let (reg, ids) = registry_with(3);
        let mut d = CameraDirector::default();

        d.toggle_view(&reg);
        assert_eq!(d.mode(), ViewMode::Chase);
        assert_eq!(d.active_rocket(), Some(ids[0]));

        d.toggle_view(&reg);
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_next_rocket_cycles_in_launch_order() {
        let (reg, ids) = registry_with(3);
        let mut d = CameraDirector::default();
        d.toggle_view(&reg);

        d.next_rocket(&reg);
        assert_eq!(d.active_rocket(), Some(ids[1]));
        d.next_rocket(&reg);
        assert_eq!(d.active_rocket(), Some(ids[2]));
        // Full cycle wraps back to the first
        d.next_rocket(&reg);
        assert_eq!(d.active_rocket(), Some(ids[0]));
    }

    #[test]
    fn test_next_rocket_noop_in_orbit() {
        let (reg, _) = registry_with(2);
        let mut d = CameraDirector::default();
        d.next_rocket(&reg);
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_active_completion_retargets() {
        let (mut reg, ids) = registry_with(2);
        let mut d = CameraDirector::default();
        d.toggle_view(&reg);
        assert_eq!(d.active_rocket(), Some(ids[0]));

        reg.complete(ids[0]);
        d.on_rocket_completed(ids[0], &reg);
        assert_eq!(d.mode(), ViewMode::Chase);
        assert_eq!(d.active_rocket(), Some(ids[1]));
    }

    #[test]
    fn test_last_completion_falls_back_to_orbit() {
        let (mut reg, ids) = registry_with(1);
        let mut d = CameraDirector::default();
        d.toggle_view(&reg);

        reg.complete(ids[0]);
        d.on_rocket_completed(ids[0], &reg);
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_zero_count_forces_orbit() {
        let (reg, _) = registry_with(1);
        let mut d = CameraDirector::default();
        d.toggle_view(&reg);

        d.on_count_changed(0);
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert_eq!(d.active_rocket(), None);
    }

    #[test]
    fn test_update_revalidates_stale_active_id() {
        let (mut reg, ids) = registry_with(2);
        let mut d = CameraDirector::default();
        let mut cam = CameraRig::new();
        d.toggle_view(&reg);

        // Active rocket vanishes without the director being told
        reg.complete(ids[0]);
        d.update(0.016, &reg, &mut cam);

        assert_eq!(d.mode(), ViewMode::Chase);
        assert_eq!(d.active_rocket(), Some(ids[1]));
        assert!(reg.contains(d.active_rocket().unwrap()));
    }

    #[test]
    fn test_deferred_reset_fires_after_delay() {
        let (reg, _) = registry_with(0);
        let mut d = CameraDirector::new(0.1);
        let mut cam = CameraRig::new();
        cam.set_pose(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);

        d.reset_to_earth();
        assert_eq!(d.mode(), ViewMode::Orbit);
        assert!(d.has_pending_reset());

        // Before the delay elapses the pose is untouched
        d.update(0.05, &reg, &mut cam);
        assert_ne!(cam.position(), RESET_POSITION);

        d.update(0.06, &reg, &mut cam);
        assert_eq!(cam.position(), RESET_POSITION);
        assert!(!d.has_pending_reset());
        // Distance republished from the reset pose, same frame
        assert!((d.distance_from_earth() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_cancels_pending_reset() {
        let (reg, _) = registry_with(1);
        let mut d = CameraDirector::new(0.1);
        let mut cam = CameraRig::new();
        cam.set_pose(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);

        d.reset_to_earth();
        d.toggle_view(&reg);
        assert!(!d.has_pending_reset());

        // Long past the old due time: no reset happens
        d.update(1.0, &reg, &mut cam);
        assert_ne!(cam.position(), RESET_POSITION);
    }

    #[test]
    fn test_reset_supersedes_pending_reset() {
        let (reg, _) = registry_with(0);
        let mut d = CameraDirector::new(0.1);
        let mut cam = CameraRig::new();
        cam.set_pose(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);

        d.reset_to_earth();
        d.update(0.05, &reg, &mut cam);
        // Second request reschedules from now
        d.reset_to_earth();
        d.update(0.05, &reg, &mut cam);
        assert_ne!(cam.position(), RESET_POSITION);
        d.update(0.06, &reg, &mut cam);
        assert_eq!(cam.position(), RESET_POSITION);
    }

    #[test]
    fn test_distance_sampled_every_frame_while_chasing() {
        let (mut reg, _) = registry_with(1);
        let mut d = CameraDirector::default();
        let mut cam = CameraRig::new();
        d.toggle_view(&reg);

        let mut last = -1.0f32;
        let mut ascending = 0;
        for _ in 0..100 {
            reg.advance_all(0.5);
            d.update(0.5, &reg, &mut cam);
            if d.distance_from_earth() > last {
                ascending += 1;
            }
            last = d.distance_from_earth();
        }
        // Quadratic ascent: distance keeps growing once past liftoff
        assert!(ascending >= 99);
    }
}
