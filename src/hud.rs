//! HUD state - what the UI layer reads each frame.
//!
//! The director only publishes a numeric distance; mapping it to narrative
//! text is purely presentational and lives here, in a fixed ascending band
//! table. Band boundaries are exclusive-lower / inclusive-upper.

use serde::Serialize;

/// Earth's equatorial radius in kilometers, for the km readout
pub const EARTH_RADIUS_KM: f32 = 6357.0;

/// Distance above which the "Back to Earth" affordance shows
pub const BACK_TO_EARTH_DISTANCE: f32 = 10.0;

/// Narrative band table: (lower-exclusive, upper-inclusive, text).
///
/// NOTE: the gap between 100 and 200 is deliberate - no narrative text
/// shows in that range. Observed behavior, kept as-is.
const NARRATIVE_BANDS: &[(f32, f32, &str)] = &[
    (f32::NEG_INFINITY, 2.0, "Fast, feeless, green, and ready for liftoff!"),
    (2.0, 5.0, "1 unit = 1 unit, even in space!"),
    (5.0, 10.0, "All the way to Mars!"),
    (10.0, 20.0, "Proof-of-work? We left that back on Earth"),
    (20.0, 30.0, "The further we go, the smaller the fees get. Oh wait... it's feeless"),
    (30.0, 100.0, "Full speed ahead. The block lattice is unstoppable!"),
    (200.0, 350.0, "Not even cosmic inflation can inflate the supply!"),
    (350.0, 500.0, "Zero fees across the universe, boundless."),
    (500.0, 600.0, "It simply IS"),
    (600.0, f32::INFINITY, "What if... it falls to 2k"),
];

/// Narrative text for a camera distance, if the distance falls in a band
pub fn narrative_for_distance(distance: f32) -> Option<&'static str> {
    NARRATIVE_BANDS
        .iter()
        .find(|(lo, hi, _)| distance > *lo && distance <= *hi)
        .map(|(_, _, text)| *text)
}

/// Per-frame UI snapshot assembled by the scene orchestrator
#[derive(Debug, Clone, Serialize)]
pub struct HudState {
    /// "Active rockets: N"
    pub rocket_count: usize,
    /// True in chase view (drives button labels / orbit control lockout)
    pub rocket_view: bool,
    /// Camera distance to the globe center, scene units
    pub distance_from_earth: f32,
    /// Same distance in kilometers
    pub distance_km: f32,
    /// Narrative line for the current distance, if any
    pub narrative: Option<&'static str>,
    /// Whether the "Back to Earth" button shows
    pub show_back_to_earth: bool,
}

impl HudState {
    pub fn new(rocket_count: usize, rocket_view: bool, distance: f32) -> Self {
        Self {
            rocket_count,
            rocket_view,
            distance_from_earth: distance,
            distance_km: distance * EARTH_RADIUS_KM,
            narrative: narrative_for_distance(distance),
            show_back_to_earth: distance > BACK_TO_EARTH_DISTANCE,
        }
    }
}
