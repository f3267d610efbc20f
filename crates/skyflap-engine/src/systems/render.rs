use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Hidden and sprite-less entities are skipped; the rest are ordered by
/// layer, keeping scene order within a layer.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut drawable: Vec<(&Entity, RenderInstance)> = entities
        .filter(|e| e.visible)
        .filter_map(|e| {
            let sprite = e.sprite.as_ref()?;
            Some((
                e,
                RenderInstance {
                    x: e.pos.x,
                    y: e.pos.y,
                    width: e.size.x,
                    height: e.size.y,
                    sprite: sprite.sprite.0 as f32,
                    alpha: sprite.alpha,
                    tint: sprite.tint as f32,
                    layer: e.layer.as_u8() as f32,
                },
            ))
        })
        .collect();

    drawable.sort_by_key(|(e, _)| e.layer);

    let mut dropped = 0usize;
    for (_, instance) in drawable {
        if !buffer.push(instance) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!("render buffer full, dropped {} instances", dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::{SpriteComponent, SpriteId};
    use glam::Vec2;

    #[test]
    fn build_buffer_orders_by_layer() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_layer(RenderLayer::Ui)
                .with_sprite(SpriteComponent::new(SpriteId(7))),
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(30.0, 40.0))
                .with_size(Vec2::new(64.0, 200.0))
                .with_layer(RenderLayer::Obstacles)
                .with_sprite(SpriteComponent::new(SpriteId(1))),
            Entity::new(EntityId(3))
                .with_layer(RenderLayer::Player)
                .with_sprite(SpriteComponent::new(SpriteId(0))),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        let layers: Vec<f32> = buffer.instances.iter().map(|i| i.layer).collect();
        assert_eq!(layers, vec![1.0, 2.0, 3.0]);
        assert_eq!(buffer.instances[0].width, 64.0);
        assert_eq!(buffer.instances[0].height, 200.0);
    }

    #[test]
    fn hidden_and_spriteless_entities_are_skipped() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_sprite(SpriteComponent::default())
                .with_visible(false),
            Entity::new(EntityId(2)),
        ];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
