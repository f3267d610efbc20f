use skyflap_engine::{Aabb, CollisionBackend};

use crate::spawner::{ObstacleField, Side};

/// What the player ran into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Obstacle { pair: u32, gap_center: f32 },
    /// Left the play area through the top or bottom.
    Bounds,
}

impl Hit {
    /// Height the player is moved to while it waits out the hit. Obstacle
    /// hits use the pair's opening; bounds hits use the opening of a pair
    /// the player overlaps horizontally, else the middle of the world.
    pub fn safe_height(&self, player: &Aabb, field: &ObstacleField, world_height: f32) -> f32 {
        match *self {
            Hit::Obstacle { gap_center, .. } => gap_center,
            Hit::Bounds => field
                .iter()
                .find(|o| {
                    let b = o.bounds();
                    b.min.x < player.max.x && b.max.x > player.min.x
                })
                .map(|o| o.gap_center)
                .unwrap_or(world_height * 0.5),
        }
    }
}

/// Mark every top obstacle whose right edge is behind `player_x` as scored.
/// Returns how many were newly passed.
pub fn award_passed(field: &mut ObstacleField, player_x: f32) -> u32 {
    let mut passed = 0;
    for obstacle in field.iter_mut() {
        if obstacle.side == Side::Top && !obstacle.scored && obstacle.right_edge() < player_x {
            obstacle.scored = true;
            passed += 1;
        }
    }
    passed
}

/// First obstacle overlap, then the vertical play-area bounds.
pub fn detect_hit(
    player: &Aabb,
    field: &ObstacleField,
    world_height: f32,
    collider: &dyn CollisionBackend,
) -> Option<Hit> {
    if let Some(o) = field.iter().find(|o| collider.overlaps(player, &o.bounds())) {
        return Some(Hit::Obstacle {
            pair: o.pair,
            gap_center: o.gap_center,
        });
    }
    if player.min.y < 0.0 || player.max.y > world_height {
        return Some(Hit::Bounds);
    }
    None
}
