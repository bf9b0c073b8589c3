//! Canvas 2D renderer (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::*;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;
use crate::sim::collision::{Hitbox, bear_hitbox, goal_hitbox, player_hitbox};

/// Sprite images; drawn as colored squares until loaded
struct Sprites {
    frog: HtmlImageElement,
    bear: HtmlImageElement,
    coin: HtmlImageElement,
}

impl Sprites {
    fn load() -> Result<Self, JsValue> {
        let image = |src: &str| -> Result<HtmlImageElement, JsValue> {
            let img = HtmlImageElement::new()?;
            img.set_src(src);
            Ok(img)
        };
        Ok(Self {
            frog: image(FROG_IMAGE)?,
            bear: image(BEAR_IMAGE)?,
            coin: image(COIN_IMAGE)?,
        })
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
    /// Device pixels per game pixel
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        let scale = canvas.width() as f64 / GAME_WIDTH as f64;
        Ok(Self {
            ctx,
            sprites: Sprites::load()?,
            scale,
        })
    }

    pub fn render(&self, state: &GameState, settings: &Settings) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0)?;
        ctx.set_global_alpha(1.0);

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);
        for i in 0..LANE_COUNT {
            ctx.set_fill_style_str(lane_color(i));
            ctx.fill_rect(
                0.0,
                (i as f32 * LANE_HEIGHT) as f64,
                GAME_WIDTH as f64,
                LANE_HEIGHT as f64,
            );
        }

        self.sprite(&self.sprites.coin, COIN_FALLBACK, state.goal, COIN_SIZE)?;
        for bear in &state.spawner.bears {
            self.sprite(&self.sprites.bear, BEAR_FALLBACK, bear.pos, BEAR_SIZE)?;
        }

        let alpha = settings.player_alpha(state.player_alpha(), state.player.hit.is_stunned());
        ctx.set_global_alpha(alpha as f64);
        self.sprite(&self.sprites.frog, FROG_FALLBACK, state.player.pos, PLAYER_SIZE)?;
        ctx.set_global_alpha(1.0);

        if settings.show_hitboxes {
            self.outline(&player_hitbox(state.player.pos));
            self.outline(&goal_hitbox(state.goal));
            for bear in &state.spawner.bears {
                self.outline(&bear_hitbox(bear.pos));
            }
        }

        if let Some((text, alpha)) = crate::hud::banner(state.banner.as_ref()) {
            self.banner(text, alpha)?;
        }
        Ok(())
    }

    fn sprite(
        &self,
        img: &HtmlImageElement,
        fallback: &str,
        center: Vec2,
        size: f32,
    ) -> Result<(), JsValue> {
        let (origin, extent) = sprite_rect(center, size);
        let (x, y, w, h) = (
            origin.x as f64,
            origin.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
        if img.complete() && img.natural_width() > 0 {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
        } else {
            self.ctx.set_fill_style_str(fallback);
            self.ctx.fill_rect(x, y, w, h);
            Ok(())
        }
    }

    fn outline(&self, hitbox: &Hitbox) {
        let min = hitbox.min();
        let size = hitbox.max() - min;
        self.ctx.set_stroke_style_str(HITBOX_STROKE);
        self.ctx.set_line_width(1.0);
        self.ctx
            .stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
    }

    fn banner(&self, text: &str, alpha: f32) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (x, y) = ((GAME_WIDTH / 2.0) as f64, (GAME_HEIGHT / 2.0) as f64);
        ctx.set_global_alpha(alpha as f64);
        ctx.set_font(BANNER_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(4.0);
        ctx.set_stroke_style_str(BANNER_STROKE);
        ctx.stroke_text(text, x, y)?;
        ctx.set_fill_style_str(BANNER_FILL);
        ctx.fill_text(text, x, y)?;
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}
