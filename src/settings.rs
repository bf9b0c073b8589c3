//! Game settings and preferences
//!
//! Persisted in LocalStorage. A balance override can be stored next to them.

use serde::{Deserialize, Serialize};

use crate::reward::DEFAULT_REWARD_ENDPOINT;
use crate::tuning::Tuning;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Replace the stun flicker with a steady dim frog
    pub reduced_motion: bool,

    // === Debug ===
    /// Outline collision boxes
    pub show_hitboxes: bool,

    // === Rewards ===
    /// Wallet credited on level-up (None = rewards off)
    pub reward_wallet: Option<String>,
    pub reward_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            show_hitboxes: false,
            reward_wallet: None,
            reward_endpoint: DEFAULT_REWARD_ENDPOINT.to_string(),
        }
    }
}

/// Steady alpha used instead of flicker under reduced motion
pub const REDUCED_MOTION_ALPHA: f32 = 0.5;

impl Settings {
    /// LocalStorage keys
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "wenp_hop_settings";
    #[allow(dead_code)]
    const TUNING_KEY: &'static str = "wenp_hop_tuning";

    /// Player opacity to draw, honoring reduced motion
    pub fn player_alpha(&self, sim_alpha: f32, stunned: bool) -> f32 {
        if stunned && self.reduced_motion {
            REDUCED_MOTION_ALPHA
        } else {
            sim_alpha
        }
    }

    /// Parse a stored tuning override, falling back to defaults when it is
    /// missing or invalid
    pub fn tuning_from_override(json: Option<&str>) -> Tuning {
        match json.map(Tuning::from_json) {
            Some(Ok(tuning)) => {
                log::info!("Using tuning override");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load the balance override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_tuning() -> Tuning {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::TUNING_KEY).ok())
            .flatten();
        Self::tuning_from_override(json.as_deref())
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_tuning() -> Tuning {
        Tuning::default()
    }
}
