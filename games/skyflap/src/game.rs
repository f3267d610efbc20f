use glam::Vec2;
use skyflap_engine::*;

use crate::config::{ConfigError, FlappyConfig};
use crate::difficulty::Difficulty;
use crate::session::{Session, SessionEvent};
use crate::spawner::Side;
use crate::state::GameState;
use crate::ui::DifficultyButtons;

/// Game event kinds (Rust → page).
pub mod events {
    pub const SCENE_READY: f32 = 1.0;
    pub const STATE: f32 = 2.0;
    pub const SCORE: f32 = 3.0;
    pub const LIVES: f32 = 4.0;
    pub const DIFFICULTY: f32 = 5.0;
}

/// Sound ids the page maps to audio clips.
pub mod sounds {
    use skyflap_engine::SoundEvent;

    pub const FLAP: SoundEvent = SoundEvent(0);
    pub const SCORE: SoundEvent = SoundEvent(1);
    pub const HIT: SoundEvent = SoundEvent(2);
    pub const GAME_OVER: SoundEvent = SoundEvent(3);
}

/// Sprite sheet slots.
pub mod sprites {
    use skyflap_engine::SpriteId;

    pub const BACKGROUND: SpriteId = SpriteId(0);
    pub const PLAYER: SpriteId = SpriteId(1);
    pub const OBSTACLE_TOP: SpriteId = SpriteId(2);
    pub const OBSTACLE_BOTTOM: SpriteId = SpriteId(3);
    pub const BUTTON_EASY: SpriteId = SpriteId(4);
    pub const BUTTON_MEDIUM: SpriteId = SpriteId(5);
    pub const BUTTON_HARD: SpriteId = SpriteId(6);
}

// Custom event kinds (page → Rust)
/// `a` = difficulty index. Not gated: abandons a live run, so the page checks
/// `game_difficulty_locked()` before sending it.
pub const CUSTOM_SET_DIFFICULTY: u32 = 1;

const SELECTED_TINT: u32 = 0xFF_D5_4A;

pub struct FlappyGame {
    session: Session,
    buttons: DifficultyButtons,
    /// SCENE_READY goes out on the first update only.
    announced: bool,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self::with_session(Session::new(FlappyConfig::default()))
    }

    pub fn with_session(session: Session) -> Self {
        let cfg = session.config();
        let buttons = DifficultyButtons::new(cfg.world_width, cfg.world_height);
        Self {
            session,
            buttons,
            announced: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn difficulty_locked(&self) -> bool {
        self.session.difficulty_locked()
    }

    /// Select a difficulty by name. Unknown names are ignored.
    pub fn set_difficulty_by_name(&mut self, name: &str) -> bool {
        match Difficulty::from_name(name) {
            Some(d) => self.session.set_difficulty(d),
            None => {
                log::debug!("unknown difficulty {:?} ignored", name);
                false
            }
        }
    }

    /// Replace the configuration from JSON. On error the current one stays.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = FlappyConfig::from_json(json)?;
        self.buttons = DifficultyButtons::new(config.world_width, config.world_height);
        self.session.apply_config(config);
        log::info!("config loaded");
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } if !self.session.difficulty_locked() => {
                if let Some(d) = self.buttons.hit(x, y) {
                    self.session.set_difficulty(d);
                    return;
                }
            }
            InputEvent::Custom { kind: CUSTOM_SET_DIFFICULTY, a, .. } => {
                match Difficulty::from_index(a) {
                    Some(d) => {
                        self.session.set_difficulty(d);
                    }
                    None => log::debug!("difficulty index {} ignored", a),
                }
                return;
            }
            _ => {}
        }

        if event.is_press(self.session.config().flap_key) {
            self.session.flap();
        }
    }

    fn announce(&mut self, ctx: &mut EngineContext) {
        let difficulty = self.session.difficulty();
        ctx.emit_event(GameEvent::new(
            events::SCENE_READY,
            difficulty.index() as f32,
            self.session.lives().max() as f32,
            0.0,
        ));
        self.emit_difficulty(ctx, difficulty);
        ctx.emit_event(GameEvent::new(events::STATE, self.session.state().code() as f32, 0.0, 0.0));
        ctx.emit_event(GameEvent::new(
            events::LIVES,
            self.session.lives().remaining() as f32,
            0.0,
            0.0,
        ));
        self.announced = true;
    }

    fn emit_difficulty(&self, ctx: &mut EngineContext, difficulty: Difficulty) {
        let settings = self.session.config().difficulties.get(difficulty);
        ctx.emit_event(GameEvent::new(
            events::DIFFICULTY,
            difficulty.index() as f32,
            settings.gap,
            settings.scroll_speed,
        ));
    }

    fn forward_events(&mut self, ctx: &mut EngineContext) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::StateChanged(state) => {
                    ctx.emit_event(GameEvent::new(events::STATE, state.code() as f32, 0.0, 0.0));
                    if state == GameState::GameOver {
                        ctx.emit_sound(sounds::GAME_OVER);
                    }
                }
                SessionEvent::Flapped => ctx.emit_sound(sounds::FLAP),
                SessionEvent::Scored { score, best } => {
                    ctx.emit_event(GameEvent::new(events::SCORE, score as f32, best as f32, 0.0));
                    if score > 0 {
                        ctx.emit_sound(sounds::SCORE);
                    }
                }
                SessionEvent::LivesChanged(lives) => {
                    ctx.emit_event(GameEvent::new(events::LIVES, lives as f32, 0.0, 0.0));
                }
                SessionEvent::Hit => ctx.emit_sound(sounds::HIT),
                SessionEvent::DifficultyChanged(d) => self.emit_difficulty(ctx, d),
            }
        }
    }

    /// Mirror the session into the scene. Rebuilt from scratch each step.
    fn sync_scene(&self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        ctx.reset_ids();

        let cfg = self.session.config();
        let world = Vec2::new(cfg.world_width, cfg.world_height);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("background")
                .with_pos(world * 0.5)
                .with_size(world)
                .with_layer(RenderLayer::Background)
                .with_sprite(SpriteComponent::new(sprites::BACKGROUND)),
        );

        for obstacle in self.session.field().iter() {
            let sprite = match obstacle.side {
                Side::Top => sprites::OBSTACLE_TOP,
                Side::Bottom => sprites::OBSTACLE_BOTTOM,
            };
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("obstacle")
                    .with_pos(obstacle.body.pos)
                    .with_size(obstacle.body.size)
                    .with_layer(RenderLayer::Obstacles)
                    .with_sprite(SpriteComponent::new(sprite)),
            );
        }

        let player = self.session.player();
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("player")
                .with_pos(player.body.pos)
                .with_size(player.body.size)
                .with_layer(RenderLayer::Player)
                .with_visible(player.visible)
                .with_sprite(SpriteComponent::new(sprites::PLAYER)),
        );

        if self.session.difficulty_locked() {
            return;
        }
        let current = self.session.difficulty();
        for (difficulty, rect) in self.buttons.iter() {
            let sprite = match difficulty {
                Difficulty::Easy => sprites::BUTTON_EASY,
                Difficulty::Medium => sprites::BUTTON_MEDIUM,
                Difficulty::Hard => sprites::BUTTON_HARD,
            };
            let mut look = SpriteComponent::new(sprite);
            if *difficulty == current {
                look = look.with_tint(SELECTED_TINT);
            }
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("button")
                    .with_pos(rect.center())
                    .with_size(rect.size())
                    .with_layer(RenderLayer::Ui)
                    .with_sprite(look),
            );
        }
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for FlappyGame {
    fn config(&self) -> GameConfig {
        let cfg = self.session.config();
        GameConfig {
            world_width: cfg.world_width,
            world_height: cfg.world_height,
            ..GameConfig::default()
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.session.reseed(seed);
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.announced = false;
        self.session.drain_events();
        self.sync_scene(ctx);
        log::info!(
            "skyflap ready: difficulty={} lives={}",
            self.session.difficulty().name(),
            self.session.lives().max()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if !self.announced {
            self.announce(ctx);
        }

        for event in input.iter() {
            self.handle_input(event);
        }

        self.session.step(ctx.dt());
        self.forward_events(ctx);
        self.sync_scene(ctx);
    }
}
