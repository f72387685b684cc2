//! Utility functions and constants
//!
//! **Why**: Pure helpers shared by the classifier and the demo feed
//!
//! **Used by**: core::classify, main (synthetic feed)

/// Amount parsing and rocket-count scaling
pub mod amount {
    /// Raw units per whole ledger unit (10^30)
    pub const RAW_PER_UNIT: f64 = 1e30;

    /// Cap on rockets spawned from a single confirmation.
    /// One whale transfer must not flood the scene.
    pub const MAX_ROCKETS_PER_EVENT: usize = 8;

    /// Amounts below this are dust and spawn nothing on their own
    pub const DUST_THRESHOLD: f64 = 1e-6;

    /// Parse a raw amount string (decimal integer, raw units) into whole units.
    ///
    /// Returns `None` for malformed input - the caller drops the event.
    pub fn parse_raw(raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<u128>().ok().map(|v| v as f64 / RAW_PER_UNIT)
    }

    /// Map a transfer amount to a rocket count (log scale, monotonic).
    ///
    /// Dust maps to 0; each decade above 1 unit adds one rocket,
    /// capped at [`MAX_ROCKETS_PER_EVENT`].
    pub fn scale_rocket_count(units: f64) -> usize {
        if !units.is_finite() || units < DUST_THRESHOLD {
            return 0;
        }
        let decades = units.log10().floor().max(0.0) as usize;
        (1 + decades).min(MAX_ROCKETS_PER_EVENT)
    }
}

/// Sphere sampling for launch positions
pub mod geo {
    use glam::Vec3;
    use rand::Rng;

    /// Uniformly distributed random point on a sphere of given radius.
    ///
    /// phi uniform in [0, 2pi), cos(theta) uniform in [-1, 1] - uniform
    /// theta itself would cluster points at the poles.
    pub fn random_point_on_globe(radius: f32) -> Vec3 {
        let mut rng = rand::thread_rng();
        let phi = rng.gen_range(0.0..std::f32::consts::TAU);
        let theta = rng.gen_range(-1.0f32..=1.0).acos();

        Vec3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.sin() * phi.sin(),
            radius * theta.cos(),
        )
    }
}
