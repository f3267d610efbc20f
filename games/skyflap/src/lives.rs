/// What a life loss leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    Resume { remaining: u32 },
    GameOver,
}

/// Life counter plus the invulnerability flag that guards it.
#[derive(Debug, Clone)]
pub struct Lives {
    remaining: u32,
    max: u32,
    pub invulnerable: bool,
}

impl Lives {
    pub fn new(max: u32) -> Self {
        Self {
            remaining: max,
            max,
            invulnerable: false,
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.max;
        self.invulnerable = false;
    }

    /// Take one life. Saturates at zero.
    pub fn lose_one(&mut self) -> LifeOutcome {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            LifeOutcome::GameOver
        } else {
            LifeOutcome::Resume {
                remaining: self.remaining,
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_game_over() {
        let mut lives = Lives::new(3);
        assert_eq!(lives.lose_one(), LifeOutcome::Resume { remaining: 2 });
        assert_eq!(lives.lose_one(), LifeOutcome::Resume { remaining: 1 });
        assert_eq!(lives.lose_one(), LifeOutcome::GameOver);
        assert_eq!(lives.remaining(), 0);
        assert_eq!(lives.lose_one(), LifeOutcome::GameOver);
        assert_eq!(lives.remaining(), 0);
    }

    #[test]
    fn reset_refills_and_clears_invulnerability() {
        let mut lives = Lives::new(2);
        lives.lose_one();
        lives.invulnerable = true;
        lives.reset();
        assert_eq!(lives.remaining(), 2);
        assert!(!lives.invulnerable);
    }
}
