//! Canvas 2D rendering module
//!
//! Draw order: lane stripes, coin, bears, frog, level-up banner. The palette
//! and sprite placement live here so they can be tested off the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;

/// Page background
pub const BACKGROUND: &str = "#0f172a";
/// Alternating lane stripe colors
pub const LANE_COLORS: [&str; 2] = ["#0f172a", "#111827"];
/// Banner fill and outline
pub const BANNER_FILL: &str = "#22c55e";
pub const BANNER_STROKE: &str = "#000000";
pub const BANNER_FONT: &str = "26px sans-serif";
/// Fallback fills while images load
pub const FROG_FALLBACK: &str = "#4ade80";
pub const BEAR_FALLBACK: &str = "#a16207";
pub const COIN_FALLBACK: &str = "#facc15";
pub const HITBOX_STROKE: &str = "#ef4444";

/// Sprite image paths
pub const FROG_IMAGE: &str = "assets/frog.png";
pub const BEAR_IMAGE: &str = "assets/bear.png";
pub const COIN_IMAGE: &str = "assets/pcoin.png";

/// Stripe color for lane `index`
pub fn lane_color(index: u32) -> &'static str {
    LANE_COLORS[(index % 2) as usize]
}

/// Top-left corner and size for a square sprite centered on `center`
pub fn sprite_rect(center: Vec2, size: f32) -> (Vec2, Vec2) {
    (center - Vec2::splat(size / 2.0), Vec2::splat(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_stripes_alternate() {
        assert_eq!(lane_color(0), "#0f172a");
        assert_eq!(lane_color(1), "#111827");
        assert_eq!(lane_color(2), lane_color(0));
    }

    #[test]
    fn test_sprite_rect_is_centered() {
        let (origin, size) = sprite_rect(Vec2::new(100.0, 50.0), 40.0);
        assert_eq!(origin, Vec2::new(80.0, 30.0));
        assert_eq!(size, Vec2::splat(40.0));
    }
}
