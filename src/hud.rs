//! HUD text projection
//!
//! Pure function of the progression counters; the shell decides where the
//! strings go.

use crate::sim::{LevelUpBanner, Progress};

/// Text for the three HUD labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub level: String,
    pub coins: String,
}

impl HudText {
    pub fn project(progress: &Progress) -> Self {
        Self {
            score: format!("Score: {}", progress.score),
            level: format!("Level: {}", progress.level),
            coins: format!(
                "Coins: {}/{}",
                progress.coins_collected, progress.coins_needed
            ),
        }
    }
}

/// Text shown in the level-up banner
pub const BANNER_TEXT: &str = "LEVEL UP!";

/// Banner text and opacity, if one is showing
pub fn banner(banner: Option<&LevelUpBanner>) -> Option<(&'static str, f32)> {
    banner.map(|b| (BANNER_TEXT, b.alpha()))
}
