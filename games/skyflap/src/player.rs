use glam::Vec2;
use skyflap_engine::{Aabb, Body};

use crate::config::PlayerConfig;

/// The flapping player. Persists across runs; `reset` puts it back on the
/// start position.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Toggled by the blink timer while resuming.
    pub visible: bool,
    start: Vec2,
    flap_velocity: f32,
}

impl Player {
    pub fn new(cfg: &PlayerConfig) -> Self {
        let start = Vec2::new(cfg.start_x, cfg.start_y);
        Self {
            body: Body::new(start, Vec2::new(cfg.width, cfg.height))
                .with_max_fall_speed(cfg.max_fall_speed),
            visible: true,
            start,
            flap_velocity: cfg.flap_velocity,
        }
    }

    /// Back to the start position, hovering and visible.
    pub fn reset(&mut self) {
        self.body.pos = self.start;
        self.body.halt();
        self.visible = true;
    }

    /// Upward impulse. Overrides the current vertical velocity and turns
    /// gravity on.
    pub fn flap(&mut self) {
        self.body.gravity_enabled = true;
        self.body.vel.y = -self.flap_velocity;
    }

    /// Stop moving and ignore gravity.
    pub fn freeze(&mut self) {
        self.body.halt();
    }

    /// Give the body back to gravity.
    pub fn release(&mut self) {
        self.body.gravity_enabled = true;
    }

    pub fn snap_to(&mut self, y: f32) {
        self.body.pos.y = y;
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn step(&mut self, gravity: f32, dt: f32) {
        self.body.step(Vec2::new(0.0, gravity), dt);
    }

    pub fn x(&self) -> f32 {
        self.body.pos.x
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flap_overrides_velocity() {
        let cfg = PlayerConfig::default();
        let mut player = Player::new(&cfg);
        player.body.vel.y = 500.0;
        player.flap();
        assert_eq!(player.body.vel.y, -cfg.flap_velocity);
        assert!(player.body.gravity_enabled);
    }

    #[test]
    fn hovers_until_first_flap() {
        let cfg = PlayerConfig::default();
        let mut player = Player::new(&cfg);
        for _ in 0..60 {
            player.step(cfg.gravity, 1.0 / 60.0);
        }
        assert_eq!(player.body.pos.y, cfg.start_y);
    }

    #[test]
    fn freeze_and_release() {
        let cfg = PlayerConfig::default();
        let mut player = Player::new(&cfg);
        player.flap();
        player.step(cfg.gravity, 0.1);
        player.freeze();
        let y = player.body.pos.y;
        player.step(cfg.gravity, 0.1);
        assert_eq!(player.body.pos.y, y);

        player.release();
        player.step(cfg.gravity, 0.1);
        assert!(player.body.pos.y > y);
    }

    #[test]
    fn reset_restores_start() {
        let cfg = PlayerConfig::default();
        let mut player = Player::new(&cfg);
        player.flap();
        player.step(cfg.gravity, 0.3);
        player.toggle_visible();
        player.reset();
        assert_eq!(player.body.pos, Vec2::new(cfg.start_x, cfg.start_y));
        assert!(player.visible);
        assert!(!player.body.gravity_enabled);
    }
}
