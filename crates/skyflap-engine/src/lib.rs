pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, SpriteId, TINT_NONE};
pub use crate::core::physics::{Aabb, AabbOverlap, Body, CollisionBackend};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::core::timer::{Timer, TimerSet};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{FrameHeader, ProtocolLayout, HEADER_FLOATS};
pub use systems::render::build_render_buffer;

