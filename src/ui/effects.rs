//! Decorative particle layers: drifting heart/balloon glyphs behind the
//! content and a one-shot confetti burst in front of it.
//!
//! Positions are kept normalized (0..1) so window resizes do not scatter
//! the particles.

use egui::{Align2, Color32, FontId, Pos2, Rect};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const FLOATER_COUNT: usize = 12;
const CONFETTI_COUNT: usize = 500;
const CONFETTI_GRAVITY: f32 = 0.55;
const FLOATER_GLYPHS: [&str; 3] = ["💖", "💕", "🎈"];

const CONFETTI_COLORS: [Color32; 6] = [
    Color32::from_rgb(236, 72, 153),
    Color32::from_rgb(147, 51, 234),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(250, 204, 21),
    Color32::from_rgb(34, 197, 94),
    Color32::from_rgb(249, 115, 22),
];

struct Floater {
    x: f32,
    y: f32,
    speed: f32,
    sway: f32,
    phase: f32,
    size: f32,
    glyph: &'static str,
}

struct ConfettiPiece {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    color: Color32,
}

pub struct EffectsLayer {
    rng: SmallRng,
    floaters: Vec<Floater>,
    confetti: Vec<ConfettiPiece>,
    last_time: Option<f64>,
}

impl Default for EffectsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectsLayer {
    pub fn new() -> Self {
        let mut rng = SmallRng::from_entropy();
        let floaters = (0..FLOATER_COUNT)
            .map(|i| Floater {
                x: rng.gen_range(0.02..0.98),
                y: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.03..0.07),
                sway: rng.gen_range(0.004..0.015),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                size: rng.gen_range(18.0..30.0),
                glyph: FLOATER_GLYPHS[i % FLOATER_GLYPHS.len()],
            })
            .collect();
        Self {
            rng,
            floaters,
            confetti: Vec::new(),
            last_time: None,
        }
    }

    /// Launch a fresh confetti burst from the top of the window.
    pub fn burst_confetti(&mut self) {
        self.confetti.clear();
        for _ in 0..CONFETTI_COUNT {
            let color = CONFETTI_COLORS[self.rng.gen_range(0..CONFETTI_COLORS.len())];
            self.confetti.push(ConfettiPiece {
                x: self.rng.gen_range(0.0..1.0),
                y: self.rng.gen_range(-0.25..0.0),
                vx: self.rng.gen_range(-0.06..0.06),
                vy: self.rng.gen_range(0.05..0.35),
                size: self.rng.gen_range(3.0..7.0),
                color,
            });
        }
    }

    pub fn confetti_active(&self) -> bool {
        !self.confetti.is_empty()
    }

    /// Advance and paint both layers. Returns true while anything is still
    /// animating so the app can keep requesting repaints.
    pub fn paint(&mut self, ctx: &egui::Context, rect: Rect) -> bool {
        let time = ctx.input(|i| i.time);
        let dt = match self.last_time {
            Some(last) => ((time - last) as f32).clamp(0.0, 0.1),
            None => 0.0,
        };
        self.last_time = Some(time);

        self.advance(dt, time as f32);
        self.paint_floaters(ctx, rect);
        self.paint_confetti(ctx, rect);

        !self.floaters.is_empty() || !self.confetti.is_empty()
    }

    fn advance(&mut self, dt: f32, time: f32) {
        for floater in &mut self.floaters {
            floater.y -= floater.speed * dt;
            floater.x += (time + floater.phase).sin() * floater.sway * dt;
            // Drift out the top, respawn below the bottom edge.
            if floater.y < -0.06 {
                floater.y = 1.06;
                floater.x = self.rng.gen_range(0.02..0.98);
            }
        }

        for piece in &mut self.confetti {
            piece.vy += CONFETTI_GRAVITY * dt;
            piece.x += piece.vx * dt;
            piece.y += piece.vy * dt;
        }
        // One-shot burst: pieces that fall off the bottom are gone.
        self.confetti.retain(|piece| piece.y < 1.1);
    }

    fn paint_floaters(&self, ctx: &egui::Context, rect: Rect) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("tribute_floaters"),
        ));
        for floater in &self.floaters {
            let pos = Pos2::new(
                rect.left() + floater.x * rect.width(),
                rect.top() + floater.y * rect.height(),
            );
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                floater.glyph,
                FontId::proportional(floater.size),
                Color32::from_white_alpha(200),
            );
        }
    }

    fn paint_confetti(&self, ctx: &egui::Context, rect: Rect) {
        if self.confetti.is_empty() {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("tribute_confetti"),
        ));
        for piece in &self.confetti {
            let pos = Pos2::new(
                rect.left() + piece.x * rect.width(),
                rect.top() + piece.y * rect.height(),
            );
            let half = egui::vec2(piece.size * 0.5, piece.size);
            painter.rect_filled(
                Rect::from_min_max(pos - half, pos + half),
                1.0,
                piece.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_pieces_above_the_window() {
        let mut effects = EffectsLayer::new();
        assert!(!effects.confetti_active());

        effects.burst_confetti();
        assert!(effects.confetti_active());
        assert_eq!(effects.confetti.len(), CONFETTI_COUNT);
        assert!(effects.confetti.iter().all(|p| p.y <= 0.0));
    }

    #[test]
    fn fallen_confetti_is_retired() {
        let mut effects = EffectsLayer::new();
        effects.burst_confetti();
        // Step well past the time any piece needs to clear the window.
        for _ in 0..600 {
            effects.advance(0.1, 0.0);
        }
        assert!(!effects.confetti_active());
    }

    #[test]
    fn floaters_wrap_back_to_the_bottom() {
        let mut effects = EffectsLayer::new();
        for _ in 0..2_000 {
            effects.advance(0.1, 0.0);
        }
        assert!(effects
            .floaters
            .iter()
            .all(|f| (-0.06..=1.06).contains(&f.y)));
    }
}
