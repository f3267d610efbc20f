use glam::Vec2;
use skyflap_engine::{Aabb, Body, Rng};

use crate::config::ObstacleConfig;
use crate::difficulty::DifficultySettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

/// One half of an obstacle pair.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pair: u32,
    pub side: Side,
    pub body: Body,
    /// Vertical center of the pair's opening.
    pub gap_center: f32,
    /// Set once the pair has been counted. Only top obstacles score.
    pub scored: bool,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    pub fn right_edge(&self) -> f32 {
        self.body.pos.x + self.body.size.x * 0.5
    }
}

/// Live obstacles, oldest first.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_pair: u32,
    frozen: bool,
    width: f32,
    padding: f32,
    world_width: f32,
    world_height: f32,
}

impl ObstacleField {
    pub fn new(cfg: &ObstacleConfig, world_width: f32, world_height: f32) -> Self {
        Self {
            obstacles: Vec::with_capacity(16),
            next_pair: 0,
            frozen: false,
            width: cfg.width,
            padding: cfg.spawn_padding,
            world_width,
            world_height,
        }
    }

    /// Range the gap center is drawn from. Empty ranges collapse to the
    /// world's vertical center.
    pub fn gap_range(&self, gap: f32) -> (f32, f32) {
        let lo = self.padding + gap * 0.5;
        let hi = self.world_height - self.padding - gap * 0.5;
        if lo > hi {
            let mid = self.world_height * 0.5;
            (mid, mid)
        } else {
            (lo, hi)
        }
    }

    /// Spawn a top/bottom pair just past the right edge. Returns the pair id.
    pub fn spawn_pair(&mut self, rng: &mut Rng, settings: &DifficultySettings) -> u32 {
        let (lo, hi) = self.gap_range(settings.gap);
        let gap_center = rng.range_f32(lo, hi);
        let pair = self.next_pair;
        self.next_pair += 1;

        let half_gap = settings.gap * 0.5;
        let x = self.world_width + self.width * 0.5;
        let vel = Vec2::new(-settings.scroll_speed, 0.0);

        let top_h = (gap_center - half_gap).max(0.0);
        let bottom_y = gap_center + half_gap;
        let bottom_h = (self.world_height - bottom_y).max(0.0);

        let halves = [
            (Side::Top, Vec2::new(x, top_h * 0.5), top_h),
            (Side::Bottom, Vec2::new(x, bottom_y + bottom_h * 0.5), bottom_h),
        ];
        for (side, pos, height) in halves {
            self.obstacles.push(Obstacle {
                pair,
                side,
                body: Body::new(pos, Vec2::new(self.width, height)).with_velocity(vel),
                gap_center,
                scored: false,
            });
        }

        log::debug!("spawned pair {} gap_center={:.1}", pair, gap_center);
        pair
    }

    /// Scroll every obstacle and drop the ones fully off the left edge.
    /// Frozen fields do not move.
    pub fn advance(&mut self, dt: f32) {
        if self.frozen {
            return;
        }
        for obstacle in self.obstacles.iter_mut() {
            obstacle.body.step(Vec2::ZERO, dt);
        }
        self.obstacles.retain(|o| o.right_edge() >= 0.0);
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn thaw(&mut self) {
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Remove every obstacle and unfreeze. Pair ids keep counting.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.frozen = false;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn pair_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.side == Side::Top).count()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DifficultySettings {
        DifficultySettings {
            gap: 160.0,
            spawn_delay: 1.5,
            scroll_speed: 200.0,
        }
    }

    fn field() -> ObstacleField {
        ObstacleField::new(&ObstacleConfig::default(), 480.0, 640.0)
    }

    #[test]
    fn pair_leaves_exact_gap() {
        let mut field = field();
        let mut rng = Rng::new(7);
        field.spawn_pair(&mut rng, &settings());

        let top = field.iter().find(|o| o.side == Side::Top).unwrap();
        let bottom = field.iter().find(|o| o.side == Side::Bottom).unwrap();
        let gap = bottom.bounds().min.y - top.bounds().max.y;
        assert!((gap - 160.0).abs() < 1e-3, "gap was {}", gap);
        assert!(top.bounds().min.y.abs() < 1e-3);
        assert!((bottom.bounds().max.y - 640.0).abs() < 1e-3);
        assert!(top.bounds().min.x >= 480.0, "pair must start off-screen");
        assert_eq!(top.pair, bottom.pair);
    }

    #[test]
    fn gap_center_stays_in_padded_range() {
        let mut field = field();
        let mut rng = Rng::new(99);
        let (lo, hi) = field.gap_range(160.0);
        assert_eq!((lo, hi), (140.0, 500.0));
        for _ in 0..200 {
            field.spawn_pair(&mut rng, &settings());
        }
        assert!(field.iter().all(|o| o.gap_center >= lo && o.gap_center <= hi));
    }

    #[test]
    fn empty_range_falls_back_to_center() {
        let cfg = ObstacleConfig {
            width: 64.0,
            spawn_padding: 300.0,
        };
        let field = ObstacleField::new(&cfg, 480.0, 640.0);
        assert_eq!(field.gap_range(160.0), (320.0, 320.0));
    }

    #[test]
    fn scrolls_left_and_culls() {
        let mut field = field();
        let mut rng = Rng::new(3);
        field.spawn_pair(&mut rng, &settings());
        field.advance(1.0);
        let x = field.iter().next().unwrap().body.pos.x;
        assert!((x - (512.0 - 200.0)).abs() < 1e-3);

        // Right edge starts at 544: still on screen after 540 units, gone after 560.
        field.advance(1.7);
        assert_eq!(field.pair_count(), 1);
        field.advance(0.1);
        assert!(field.is_empty());
    }

    #[test]
    fn frozen_field_does_not_move() {
        let mut field = field();
        let mut rng = Rng::new(3);
        field.spawn_pair(&mut rng, &settings());
        field.freeze();
        field.advance(1.0);
        assert_eq!(field.iter().next().unwrap().body.pos.x, 512.0);
        field.thaw();
        field.advance(1.0);
        assert!(field.iter().next().unwrap().body.pos.x < 512.0);
    }

    #[test]
    fn clear_keeps_pair_ids_unique() {
        let mut field = field();
        let mut rng = Rng::new(3);
        let a = field.spawn_pair(&mut rng, &settings());
        field.freeze();
        field.clear();
        assert!(field.is_empty());
        assert!(!field.is_frozen());
        let b = field.spawn_pair(&mut rng, &settings());
        assert_ne!(a, b);
    }
}
