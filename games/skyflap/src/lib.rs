use wasm_bindgen::prelude::*;

pub mod config;
pub mod difficulty;
pub mod game;
pub mod lives;
pub mod monitor;
pub mod player;
pub mod session;
pub mod spawner;
pub mod state;
pub mod ui;

pub use config::{ConfigError, FlappyConfig};
pub use difficulty::{Difficulty, DifficultySettings};
pub use game::FlappyGame;
pub use session::Session;
pub use state::GameState;

skyflap_web::export_game!(FlappyGame, "skyflap");

/// Select a difficulty by name ("easy", "medium", "hard"). Unknown names are
/// ignored. A change resets the session and abandons any live run, so callers
/// must check `game_difficulty_locked()` first.
#[wasm_bindgen]
pub fn game_set_difficulty(name: &str) {
    with_runner(|r| {
        r.game_mut().set_difficulty_by_name(name);
    });
}

/// Whether the page should grey out its difficulty controls.
#[wasm_bindgen]
pub fn game_difficulty_locked() -> bool {
    with_runner(|r| r.game().difficulty_locked())
}

/// Load a JSON config. Returns false and keeps the current one on error.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> bool {
    with_runner(|r| match r.game_mut().load_config(json) {
        Ok(()) => {
            r.refresh_config();
            true
        }
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    })
}
