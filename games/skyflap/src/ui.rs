use glam::Vec2;
use skyflap_engine::Aabb;

use crate::difficulty::Difficulty;

const BUTTON_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 44.0;
const BOTTOM_MARGIN: f32 = 24.0;

/// Easy/medium/hard buttons in a row along the bottom of the world.
#[derive(Debug, Clone)]
pub struct DifficultyButtons {
    buttons: [(Difficulty, Aabb); 3],
}

impl DifficultyButtons {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        let y = world_height - BOTTOM_MARGIN - BUTTON_HEIGHT * 0.5;
        let size = Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT);
        let slot = |i: usize| {
            let x = world_width * (i as f32 + 1.0) / 4.0;
            (Difficulty::ALL[i], Aabb::from_center(Vec2::new(x, y), size))
        };
        Self {
            buttons: [slot(0), slot(1), slot(2)],
        }
    }

    /// Button under a world-space point, if any.
    pub fn hit(&self, x: f32, y: f32) -> Option<Difficulty> {
        let p = Vec2::new(x, y);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains_point(p))
            .map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Difficulty, Aabb)> {
        self.buttons.iter()
    }
}
