//! Scene orchestrator - the top-level composition.
//!
//! Owns the registry, the director, the classifier, and the camera rig;
//! everything else reaches them through this type. Two external clocks
//! drive the scene on one logical thread: the render tick calls
//! [`SceneOrchestrator::tick`] once per frame, and the network client
//! pushes confirmations into the feed channel at arbitrary rates. The
//! channel decouples the two, and draining it at the top of each tick
//! preserves arrival order with no event straddling.
//!
//! The donation one-shot effect is an explicit callback handed in at
//! construction - the core never reaches into ambient global state.

use crossbeam::channel::{Receiver, unbounded};
use glam::{Mat4, Quat, Vec3};
use log::info;
use uuid::Uuid;

use crate::core::classify::{Classifier, Intent};
use crate::core::director::{CameraDirector, ViewMode};
use crate::core::events::{SceneEvent, SceneEventSender};
use crate::core::feed::ConfirmationEvent;
use crate::core::registry::RocketRegistry;
use crate::entities::camera::CameraRig;
use crate::hud::HudState;
use crate::settings::SceneSettings;

/// One-shot donation effect trigger (amount in whole units)
pub type DonationHook = Box<dyn FnMut(f64) + Send>;

/// Top-level scene state: feed in, camera pose and HUD out.
pub struct SceneOrchestrator {
    registry: RocketRegistry,
    director: CameraDirector,
    classifier: Classifier,
    camera: CameraRig,
    confirmations: Receiver<ConfirmationEvent>,
    scene_events: Receiver<SceneEvent>,
    donation_hook: Option<DonationHook>,
    hud: HudState,
}

impl SceneOrchestrator {
    pub fn new(
        settings: &SceneSettings,
        confirmations: Receiver<ConfirmationEvent>,
        donation_hook: Option<DonationHook>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let registry = RocketRegistry::new(
            SceneEventSender::new(event_tx),
            settings.flight_duration,
            settings.max_live_rockets,
        );
        info!(
            "Scene initialized: globe radius {}, flight {}s, cap {:?}",
            settings.globe_radius, settings.flight_duration, settings.max_live_rockets
        );

        let camera = CameraRig::new();
        let hud = HudState::new(0, false, camera.distance_from_origin());
        Self {
            registry,
            director: CameraDirector::new(settings.reset_delay),
            classifier: Classifier::new(settings.donation_account.clone(), settings.globe_radius),
            camera,
            confirmations,
            scene_events: event_rx,
            donation_hook,
            hud,
        }
    }

    // === Per-frame tick ===

    /// Run one frame. Order is fixed:
    /// 1. drain confirmations in arrival order, applying each event's
    ///    intents before classifying the next;
    /// 2. advance every rocket, then apply completions;
    /// 3. relay registry notifications into the director;
    /// 4. director update (camera follow, deferred reset, distance);
    /// 5. refresh the HUD snapshot.
    pub fn tick(&mut self, dt: f32) {
        while let Ok(event) = self.confirmations.try_recv() {
            self.ingest(&event);
        }

        let finished = self.registry.advance_all(dt);
        for id in finished {
            self.registry.complete(id);
        }

        while let Ok(event) = self.scene_events.try_recv() {
            match event {
                SceneEvent::RocketCompleted { id } => {
                    self.director.on_rocket_completed(id, &self.registry);
                }
                SceneEvent::RocketCountChanged { count } => {
                    self.director.on_count_changed(count);
                }
                SceneEvent::RocketLaunched { .. } => {}
            }
        }

        self.director.update(dt, &self.registry, &mut self.camera);

        self.hud = HudState::new(
            self.registry.live_count(),
            self.director.is_chasing(),
            self.director.distance_from_earth(),
        );
    }

    /// Classify one confirmation and apply its intents
    fn ingest(&mut self, event: &ConfirmationEvent) {
        let intents = self.classifier.classify(event, self.registry.live_count());
        for intent in intents {
            match intent {
                Intent::SpawnRocket { position } => {
                    self.registry.spawn(position);
                }
                Intent::DonationEffect { units } => {
                    info!("Donation received: {} units", units);
                    if let Some(hook) = self.donation_hook.as_mut() {
                        hook(units);
                    }
                }
            }
        }
    }

    // === User actions ===

    pub fn toggle_view(&mut self) {
        self.director.toggle_view(&self.registry);
    }

    pub fn next_rocket(&mut self) {
        self.director.next_rocket(&self.registry);
    }

    pub fn reset_to_earth(&mut self) {
        self.director.reset_to_earth();
    }

    // === Render surface outputs ===

    /// Per-frame transforms for every live rocket, launch order
    pub fn rocket_transforms(&self) -> Vec<(Uuid, Vec3, Quat)> {
        self.registry.transforms()
    }

    /// Current camera view matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    // === UI outputs ===

    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.director.mode()
    }

    pub fn is_rocket_view(&self) -> bool {
        self.director.is_chasing()
    }

    pub fn distance_from_earth(&self) -> f32 {
        self.director.distance_from_earth()
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feed::feed_channel;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DONATION: &str = "nano_donation_destination";

    fn settings(flight_duration: f32) -> SceneSettings {
        SceneSettings {
            donation_account: DONATION.into(),
            flight_duration,
            ..SceneSettings::default()
        }
    }

    fn send_event(raw_amount: &str) -> ConfirmationEvent {
        ConfirmationEvent {
            account: "nano_recipient".into(),
            amount: raw_amount.into(),
            subtype: "send".into(),
            link_as_account: "nano_sender".into(),
        }
    }

    /// Raw string for N whole units
    fn raw(units: u32) -> String {
        format!("{}{}", units, "0".repeat(30))
    }

    #[test]
    fn test_transfer_spawns_and_flight_completes() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(1.0), rx, None);

        tx.send(send_event(&raw(1))).unwrap();
        scene.tick(0.016);
        assert_eq!(scene.live_count(), 1);
        assert_eq!(scene.rocket_transforms().len(), 1);

        // Flight duration elapses: rocket completes and is removed
        scene.tick(1.1);
        assert_eq!(scene.live_count(), 0);
        assert!(scene.rocket_transforms().is_empty());
    }

    #[test]
    fn test_events_processed_in_arrival_order_without_straddling() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(100.0), rx, None);

        // First event lands on an idle scene: floor applies (1 rocket).
        // Second event sees live_count > 0: dust scales to zero rockets.
        tx.send(send_event("1")).unwrap();
        tx.send(send_event("1")).unwrap();
        scene.tick(0.016);
        assert_eq!(scene.live_count(), 1);
    }

    #[test]
    fn test_chase_falls_back_to_orbit_when_scene_empties() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(1.0), rx, None);

        tx.send(send_event(&raw(1))).unwrap();
        scene.tick(0.016);
        scene.toggle_view();
        assert!(scene.is_rocket_view());

        // Same tick: last rocket completes and the chase ends
        scene.tick(1.1);
        assert_eq!(scene.view_mode(), ViewMode::Orbit);
        assert_eq!(scene.live_count(), 0);
    }

    #[test]
    fn test_donation_hook_fires_with_amount() {
        let (tx, rx) = feed_channel();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_hook = Arc::clone(&calls);
        let mut scene = SceneOrchestrator::new(
            &settings(100.0),
            rx,
            Some(Box::new(move |units| {
                assert!((units - 10.0).abs() < 1e-9);
                calls_hook.fetch_add(1, Ordering::SeqCst);
            })),
        );

        let mut ev = send_event(&raw(10));
        ev.link_as_account = DONATION.into();
        tx.send(ev).unwrap();
        scene.tick(0.016);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_malformed_event_changes_nothing() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(100.0), rx, None);

        tx.send(send_event("definitely-not-raw-units")).unwrap();
        scene.tick(0.016);
        assert_eq!(scene.live_count(), 0);
        assert_eq!(scene.view_mode(), ViewMode::Orbit);
    }

    #[test]
    fn test_hud_reflects_scene_state() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(100.0), rx, None);

        tx.send(send_event(&raw(100))).unwrap();
        scene.tick(0.016);
        scene.toggle_view();
        scene.tick(0.016);

        let hud = scene.hud();
        assert_eq!(hud.rocket_count, 3);
        assert!(hud.rocket_view);
        assert!((hud.distance_from_earth - scene.distance_from_earth()).abs() < 1e-6);
    }

    #[test]
    fn test_reset_to_earth_mid_chase() {
        use crate::entities::camera::RESET_POSITION;

        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(100.0), rx, None);

        tx.send(send_event(&raw(1))).unwrap();
        scene.tick(0.016);
        scene.toggle_view();
        // Let the chase carry the camera away from the canonical pose
        for _ in 0..60 {
            scene.tick(0.5);
        }

        scene.reset_to_earth();
        assert_eq!(scene.view_mode(), ViewMode::Orbit);
        // Deferred: fires once the delay elapses in scene time
        scene.tick(0.2);
        assert_eq!(scene.camera().position(), RESET_POSITION);
    }

    #[test]
    fn test_next_rocket_cycles_through_live_set() {
        let (tx, rx) = feed_channel();
        let mut scene = SceneOrchestrator::new(&settings(100.0), rx, None);

        tx.send(send_event(&raw(100))).unwrap();
        scene.tick(0.016);
        scene.toggle_view();

        let mut seen = Vec::new();
        for _ in 0..3 {
            scene.tick(0.016);
            seen.push(scene.director.active_rocket().unwrap());
            scene.next_rocket();
        }
        // All three rockets visited exactly once per full cycle
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }
}
