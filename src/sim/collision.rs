//! Axis-aligned hitboxes and overlap tests
//!
//! Sprites are drawn larger than they collide: each body's hitbox is its
//! display size scaled by a per-kind factor.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned box given by its center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub center: Vec2,
    pub half: Vec2,
}

impl Hitbox {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    /// Square hitbox of `display_size * scale`
    pub fn scaled(center: Vec2, display_size: f32, scale: f32) -> Self {
        Self::new(center, Vec2::splat(display_size * scale))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// True if the boxes share any interior area (touching edges don't count)
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

pub fn player_hitbox(pos: Vec2) -> Hitbox {
    Hitbox::scaled(pos, PLAYER_SIZE, PLAYER_HITBOX_SCALE)
}

pub fn bear_hitbox(pos: Vec2) -> Hitbox {
    Hitbox::scaled(pos, BEAR_SIZE, BEAR_HITBOX_SCALE)
}

pub fn goal_hitbox(pos: Vec2) -> Hitbox {
    Hitbox::scaled(pos, COIN_SIZE, COIN_HITBOX_SCALE)
}

/// Keep a sprite of `display_size` fully inside the play area
pub fn clamp_to_world(pos: Vec2, display_size: f32) -> Vec2 {
    let half = display_size / 2.0;
    Vec2::new(
        pos.x.clamp(half, GAME_WIDTH - half),
        pos.y.clamp(half, GAME_HEIGHT - half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_miss() {
        let a = Hitbox::new(Vec2::new(100.0, 100.0), Vec2::splat(20.0));
        let b = Hitbox::new(Vec2::new(115.0, 105.0), Vec2::splat(20.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Hitbox::new(Vec2::new(200.0, 100.0), Vec2::splat(20.0));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Hitbox::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Hitbox::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_home_row_is_clear_of_lowest_bear_lane() {
        let player = player_hitbox(crate::player_start());
        let bear = bear_hitbox(Vec2::new(PLAYER_START_X, crate::lane_y(8)));
        assert!(!player.overlaps(&bear));
    }

    #[test]
    fn test_player_reaches_goal_by_hopping() {
        let goal = goal_hitbox(Vec2::new(GOAL_X, GOAL_Y));
        let mut pos = crate::player_start();
        let mut hops = 0;
        while !player_hitbox(pos).overlaps(&goal) {
            pos.y -= HOP;
            hops += 1;
            assert!(hops < 30, "never reached goal");
        }
        assert!(pos.y > 0.0);
    }

    #[test]
    fn test_clamp_to_world() {
        let p = clamp_to_world(Vec2::new(-50.0, 700.0), PLAYER_SIZE);
        assert_eq!(p, Vec2::new(20.0, 620.0));
    }
}
