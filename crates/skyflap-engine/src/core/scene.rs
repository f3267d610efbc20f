use crate::components::entity::Entity;

/// Render mirror of game state. Games own their records and rebuild the
/// scene from them every step; the runner turns it into instances.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// First entity carrying `tag`, in spawn order.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn count_tagged(&self, tag: &str) -> usize {
        self.entities.iter().filter(|e| e.tag == tag).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    #[test]
    fn rebuild_keeps_spawn_order() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("player").with_pos(Vec2::new(10.0, 20.0)));
        scene.spawn(Entity::new(EntityId(2)).with_tag("obstacle"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("obstacle"));

        assert_eq!(scene.find_by_tag("player").map(|e| e.pos), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(scene.find_by_tag("obstacle").map(|e| e.id), Some(EntityId(2)));
        assert_eq!(scene.count_tagged("obstacle"), 2);
        assert_eq!(scene.len(), 3);

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.find_by_tag("player").is_none());
    }
}
