//! Data-driven overrides for the gameplay constants
//!
//! Defaults mirror [`crate::consts`]; a JSON blob in LocalStorage can
//! override any subset without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay constants carried by every [`GameState`](crate::sim::GameState)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Downward acceleration per frame (px/frame²)
    pub gravity: f32,
    /// Velocity set on jump; negative = upward (px/frame)
    pub jump_velocity: f32,
    /// Leftward obstacle movement per frame (px/frame)
    pub obstacle_speed: f32,
    /// Minimum wall-clock gap between spawns (ms)
    pub spawn_interval_ms: f64,
    pub obstacle_width_min: f32,
    pub obstacle_width_range: f32,
    pub obstacle_height_min: f32,
    pub obstacle_height_range: f32,
    pub dot_radius: f32,
    pub dot_x: f32,
    pub ground_margin: f32,
    pub star_count: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            jump_velocity: consts::JUMP_VELOCITY,
            obstacle_speed: consts::OBSTACLE_SPEED,
            spawn_interval_ms: consts::SPAWN_INTERVAL_MS,
            obstacle_width_min: consts::OBSTACLE_WIDTH_MIN,
            obstacle_width_range: consts::OBSTACLE_WIDTH_RANGE,
            obstacle_height_min: consts::OBSTACLE_HEIGHT_MIN,
            obstacle_height_range: consts::OBSTACLE_HEIGHT_RANGE,
            dot_radius: consts::DOT_RADIUS,
            dot_x: consts::DOT_X,
            ground_margin: consts::GROUND_MARGIN,
            star_count: consts::STAR_COUNT,
        }
    }
}

impl Tunables {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "galaxy_dash_tuning";

    /// Parse overrides from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tunables) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tunables;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {e}"),
                }
            }
        }

        Self::default()
    }

    /// Save overrides to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning overrides saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
