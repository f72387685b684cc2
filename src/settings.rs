//! Scene settings, JSON-persistable with defaults for every field.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::director::DEFAULT_RESET_DELAY;
use crate::entities::rocket::DEFAULT_FLIGHT_DURATION;

/// Scene configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Launch sphere radius, just above the globe surface
    pub globe_radius: f32,
    /// Donation destination account; empty disables donation detection
    pub donation_account: String,
    /// Deferred camera-reset delay, seconds of scene time
    pub reset_delay: f32,
    /// Rocket flight duration in seconds
    pub flight_duration: f32,
    /// Soft cap on live rockets (oldest evicted first); None = unbounded
    pub max_live_rockets: Option<usize>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            globe_radius: 1.2,
            donation_account: String::new(),
            reset_delay: DEFAULT_RESET_DELAY,
            flight_duration: DEFAULT_FLIGHT_DURATION,
            max_live_rockets: None,
        }
    }
}

impl SceneSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }
}
