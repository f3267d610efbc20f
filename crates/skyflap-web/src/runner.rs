use skyflap_engine::{
    build_render_buffer, FrameClock, FrameHeader, Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer, ProtocolLayout, HEADER_FLOATS,
};

use crate::viewport::Viewport;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game keeps one `GameRunner` in a `thread_local!` and
/// exports free functions via `#[wasm_bindgen]` (see `export_game!`),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    header: [f32; HEADER_FLOATS],
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let clock = FrameClock::new(config.fixed_dt, config.max_steps_per_frame);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            game,
            ctx: EngineContext::with_dt(config.fixed_dt),
            input: InputQueue::new(),
            render_buffer,
            clock,
            layout,
            config,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
            sound_buffer,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.refresh_config();
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Re-read `Game::config()` after the game changed its own configuration.
    pub fn refresh_config(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.clock
            .reconfigure(self.config.fixed_dt, self.config.max_steps_per_frame);
        self.ctx.set_dt(self.config.fixed_dt);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
    }

    pub fn reseed(&mut self, seed: u64) {
        self.game.reseed(seed);
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Forward a page-level tap as a pointer press if it lands on the canvas.
    /// Returns whether the tap was forwarded.
    pub fn push_touch(&mut self, client_x: f32, client_y: f32, left: f32, top: f32, width: f32, height: f32) -> bool {
        let viewport = Viewport::new(
            left,
            top,
            width,
            height,
            self.config.world_width,
            self.config.world_height,
        );
        match viewport.to_world(client_x, client_y) {
            Some((x, y)) => {
                self.input.push(InputEvent::PointerDown { x, y });
                true
            }
            None => false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Run one host frame: fixed-step updates, then render and sound packing.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            // Input is consumed by the first step only.
            self.input.drain();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.ctx.sounds.truncate(self.config.max_sounds);
        self.ctx.events.truncate(self.config.max_events);

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }

        self.frame = self.frame.wrapping_add(1);
        FrameHeader {
            frame: self.frame,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            instances: self.render_buffer.instances.len(),
            sounds: self.sound_buffer.len(),
            events: self.ctx.events.len(),
        }
        .write(&mut self.header);
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use skyflap_engine::{Entity, GameEvent, SoundEvent, SpriteComponent};

    /// Counts presses and steps; draws one sprite.
    struct Probe {
        presses: u32,
        steps: u32,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_pos(Vec2::new(10.0, 10.0))
                    .with_sprite(SpriteComponent::default()),
            );
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.steps += 1;
            for event in input.iter() {
                if event.is_press(32) {
                    self.presses += 1;
                    ctx.emit_sound(SoundEvent(3));
                    ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
                }
            }
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut r = GameRunner::new(Probe { presses: 0, steps: 0 });
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(Probe { presses: 0, steps: 0 });
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().steps, 0);
    }

    #[test]
    fn input_is_seen_by_one_step_only() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 32 });
        r.tick(3.0 / 60.0 + 0.001);
        assert_eq!(r.game().steps, 3);
        assert_eq!(r.game().presses, 1);
        assert_eq!(r.sound_events_len(), 1);
        assert_eq!(r.game_events_len(), 1);
        assert_eq!(r.instance_count(), 1);
    }

    #[test]
    fn frame_data_is_cleared_next_tick() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 32 });
        r.tick(1.0 / 60.0 + 0.001);
        r.tick(1.0 / 60.0);
        assert_eq!(r.sound_events_len(), 0);
        assert_eq!(r.game_events_len(), 0);
    }

    #[test]
    fn refresh_config_drops_partial_step() {
        let mut r = runner();
        r.tick(0.01);
        assert_eq!(r.game().steps, 0);
        r.refresh_config();
        r.tick(0.01);
        assert_eq!(r.game().steps, 0);
        r.tick(0.01);
        assert_eq!(r.game().steps, 1);
    }

    #[test]
    fn touch_inside_canvas_becomes_pointer_press() {
        let mut r = runner();
        assert!(r.push_touch(50.0, 50.0, 0.0, 0.0, 240.0, 320.0));
        assert!(!r.push_touch(500.0, 50.0, 0.0, 0.0, 240.0, 320.0));
        r.tick(1.0 / 60.0 + 0.001);
        assert_eq!(r.game().presses, 1);
    }
}
