/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the first flap. Difficulty may change.
    #[default]
    Ready,
    Playing,
    /// Invulnerable pause after a non-fatal hit.
    Resuming,
    GameOver,
}

/// Something that may move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Flap,
    /// A qualifying collision; `lives_left` is the count after the decrement.
    Hit { lives_left: u32 },
    ResumeElapsed,
    Reset,
}

impl GameState {
    /// Next state for `trigger`, or None when the trigger has no effect here.
    pub fn transition(self, trigger: Trigger) -> Option<GameState> {
        use GameState::*;
        match (self, trigger) {
            (_, Trigger::Reset) => Some(Ready),
            (Ready, Trigger::Flap) | (GameOver, Trigger::Flap) => Some(Playing),
            (Playing, Trigger::Hit { lives_left: 0 }) => Some(GameOver),
            (Playing, Trigger::Hit { .. }) => Some(Resuming),
            (Resuming, Trigger::ResumeElapsed) => Some(Playing),
            _ => None,
        }
    }

    /// A run is live while playing or resuming.
    pub fn is_live(self) -> bool {
        matches!(self, GameState::Playing | GameState::Resuming)
    }

    /// Numeric code sent to the host.
    pub fn code(self) -> u32 {
        match self {
            GameState::Ready => 0,
            GameState::Playing => 1,
            GameState::Resuming => 2,
            GameState::GameOver => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameState::Ready => "ready",
            GameState::Playing => "playing",
            GameState::Resuming => "resuming",
            GameState::GameOver => "gameover",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let s = GameState::Ready;
        let s = s.transition(Trigger::Flap).unwrap();
        assert_eq!(s, GameState::Playing);
        let s = s.transition(Trigger::Hit { lives_left: 2 }).unwrap();
        assert_eq!(s, GameState::Resuming);
        let s = s.transition(Trigger::ResumeElapsed).unwrap();
        assert_eq!(s, GameState::Playing);
        let s = s.transition(Trigger::Hit { lives_left: 0 }).unwrap();
        assert_eq!(s, GameState::GameOver);
        assert_eq!(s.transition(Trigger::Flap), Some(GameState::Playing));
    }

    #[test]
    fn ignored_triggers() {
        assert_eq!(GameState::Resuming.transition(Trigger::Flap), None);
        assert_eq!(GameState::Playing.transition(Trigger::Flap), None);
        assert_eq!(GameState::Ready.transition(Trigger::Hit { lives_left: 1 }), None);
        assert_eq!(GameState::Resuming.transition(Trigger::Hit { lives_left: 0 }), None);
        assert_eq!(GameState::Playing.transition(Trigger::ResumeElapsed), None);
    }

    #[test]
    fn reset_always_returns_to_ready() {
        for s in [GameState::Ready, GameState::Playing, GameState::Resuming, GameState::GameOver] {
            assert_eq!(s.transition(Trigger::Reset), Some(GameState::Ready));
        }
    }

    #[test]
    fn only_playing_and_resuming_are_live() {
        assert!(!GameState::Ready.is_live());
        assert!(GameState::Playing.is_live());
        assert!(GameState::Resuming.is_live());
        assert!(!GameState::GameOver.is_live());
        assert_eq!(GameState::GameOver.code(), 3);
    }
}
