use skyflap_engine::{AabbOverlap, CollisionBackend, Rng, TimerSet};

use crate::config::FlappyConfig;
use crate::difficulty::{Difficulty, DifficultySettings};
use crate::lives::{LifeOutcome, Lives};
use crate::monitor::{self, Hit};
use crate::player::Player;
use crate::spawner::ObstacleField;
use crate::state::{GameState, Trigger};

const DEFAULT_SEED: u64 = 0x5EED_F1A9;

/// Countdowns owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTimer {
    /// Repeating; one obstacle pair per fire.
    Spawn,
    /// Repeating; toggles player visibility while resuming.
    Blink,
    /// One-shot; ends the invulnerable pause.
    Resume,
}

/// Notable things that happened during a call, drained by the game and
/// turned into host events and sounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    StateChanged(GameState),
    Flapped,
    Scored { score: u32, best: u32 },
    LivesChanged(u32),
    Hit,
    DifficultyChanged(Difficulty),
}

/// All gameplay state for one player. No globals; the game owns one of these.
pub struct Session {
    config: FlappyConfig,
    state: GameState,
    difficulty: Difficulty,
    settings: DifficultySettings,
    player: Player,
    field: ObstacleField,
    lives: Lives,
    score: u32,
    best: u32,
    timers: TimerSet<SessionTimer>,
    rng: Rng,
    collider: Box<dyn CollisionBackend>,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(config: FlappyConfig) -> Self {
        let difficulty = config.start_difficulty;
        Self {
            state: GameState::Ready,
            difficulty,
            settings: config.difficulties.get(difficulty),
            player: Player::new(&config.player),
            field: ObstacleField::new(&config.obstacle, config.world_width, config.world_height),
            lives: Lives::new(config.max_lives),
            score: 0,
            best: 0,
            timers: TimerSet::new(),
            rng: Rng::new(DEFAULT_SEED),
            collider: Box::new(AabbOverlap),
            events: Vec::new(),
            config,
        }
    }

    /// Swap the overlap test used for player-vs-obstacle checks.
    pub fn with_collider(mut self, collider: Box<dyn CollisionBackend>) -> Self {
        self.collider = collider;
        self
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    // -- Queries --

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn settings(&self) -> DifficultySettings {
        self.settings
    }

    pub fn config(&self) -> &FlappyConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn lives(&self) -> &Lives {
        &self.lives
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn timers(&self) -> &TimerSet<SessionTimer> {
        &self.timers
    }

    /// Difficulty selection is closed while a run is live.
    pub fn difficulty_locked(&self) -> bool {
        self.state.is_live()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Commands --

    /// Player input. Starts a run from ready or gameover, flaps while
    /// playing, and is ignored while resuming. Returns whether it had an effect.
    pub fn flap(&mut self) -> bool {
        match self.state {
            GameState::Ready => {
                self.start_run();
                true
            }
            GameState::GameOver => {
                self.reset();
                self.start_run();
                true
            }
            GameState::Playing => {
                self.player.flap();
                self.events.push(SessionEvent::Flapped);
                true
            }
            GameState::Resuming => {
                log::debug!("flap ignored while resuming");
                false
            }
        }
    }

    /// Change difficulty. A change resets the session, abandoning any run.
    /// Returns false when `difficulty` is already active.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.difficulty {
            return false;
        }
        self.difficulty = difficulty;
        self.settings = self.config.difficulties.get(difficulty);
        log::info!(
            "difficulty -> {} (gap={}, delay={}s, speed={})",
            difficulty.name(),
            self.settings.gap,
            self.settings.spawn_delay,
            self.settings.scroll_speed
        );
        self.events.push(SessionEvent::DifficultyChanged(difficulty));
        self.reset();
        true
    }

    /// Replace the configuration. Rebuilds the player, field and lives and
    /// switches to the configured starting difficulty. Best score survives.
    pub fn apply_config(&mut self, config: FlappyConfig) {
        self.player = Player::new(&config.player);
        self.field = ObstacleField::new(&config.obstacle, config.world_width, config.world_height);
        self.lives = Lives::new(config.max_lives);
        self.difficulty = config.start_difficulty;
        self.settings = config.difficulties.get(self.difficulty);
        self.config = config;
        self.events.push(SessionEvent::DifficultyChanged(self.difficulty));
        self.reset();
    }

    /// Back to ready: clears obstacles and timers, refills lives, zeroes the score.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.field.clear();
        self.player.reset();
        self.lives.reset();
        self.score = 0;
        self.apply(Trigger::Reset);
        self.events.push(SessionEvent::Scored {
            score: 0,
            best: self.best,
        });
        self.events.push(SessionEvent::LivesChanged(self.lives.remaining()));
    }

    /// Advance one fixed step.
    pub fn step(&mut self, dt: f32) {
        for key in self.timers.tick(dt) {
            match key {
                SessionTimer::Spawn => {
                    if self.state == GameState::Playing {
                        self.field.spawn_pair(&mut self.rng, &self.settings);
                    }
                }
                SessionTimer::Blink => {
                    if self.state == GameState::Resuming {
                        self.player.toggle_visible();
                    }
                }
                SessionTimer::Resume => self.end_resume(),
            }
        }

        if self.state != GameState::Playing {
            return;
        }

        self.player.step(self.config.player.gravity, dt);
        self.field.advance(dt);

        let passed = monitor::award_passed(&mut self.field, self.player.x());
        if passed > 0 {
            self.score += passed;
            self.best = self.best.max(self.score);
            self.events.push(SessionEvent::Scored {
                score: self.score,
                best: self.best,
            });
        }

        if self.lives.invulnerable {
            return;
        }
        let bounds = self.player.bounds();
        if let Some(hit) = monitor::detect_hit(
            &bounds,
            &self.field,
            self.config.world_height,
            self.collider.as_ref(),
        ) {
            self.on_hit(hit);
        }
    }

    // -- Internals --

    fn apply(&mut self, trigger: Trigger) -> bool {
        match self.state.transition(trigger) {
            Some(next) => {
                log::info!("state {} -> {}", self.state.name(), next.name());
                self.state = next;
                self.events.push(SessionEvent::StateChanged(next));
                true
            }
            None => false,
        }
    }

    fn start_run(&mut self) {
        if !self.apply(Trigger::Flap) {
            return;
        }
        self.player.flap();
        self.events.push(SessionEvent::Flapped);
        self.field.spawn_pair(&mut self.rng, &self.settings);
        self.timers
            .start_repeating(SessionTimer::Spawn, self.settings.spawn_delay);
    }

    fn on_hit(&mut self, hit: Hit) {
        let safe_y = hit.safe_height(&self.player.bounds(), &self.field, self.config.world_height);
        self.events.push(SessionEvent::Hit);
        self.field.freeze();
        self.player.freeze();

        match self.lives.lose_one() {
            LifeOutcome::Resume { remaining } => {
                log::debug!("hit {:?}, {} lives left", hit, remaining);
                self.player.snap_to(safe_y);
                self.lives.invulnerable = true;
                self.timers
                    .start_repeating(SessionTimer::Blink, self.config.blink_interval);
                self.timers
                    .start_once(SessionTimer::Resume, self.config.resume_delay);
                self.timers.pause(SessionTimer::Spawn);
                self.apply(Trigger::Hit {
                    lives_left: remaining,
                });
            }
            LifeOutcome::GameOver => {
                self.timers.cancel(SessionTimer::Spawn);
                self.apply(Trigger::Hit { lives_left: 0 });
            }
        }
        self.events.push(SessionEvent::LivesChanged(self.lives.remaining()));
    }

    fn end_resume(&mut self) {
        if self.state != GameState::Resuming {
            return;
        }
        self.timers.cancel(SessionTimer::Blink);
        self.player.visible = true;
        self.player.release();
        self.field.thaw();
        self.lives.invulnerable = false;
        self.timers.resume(SessionTimer::Spawn);
        self.apply(Trigger::ResumeElapsed);
    }
}
