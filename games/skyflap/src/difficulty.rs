use serde::{Deserialize, Serialize};

/// Named tuning preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Case-insensitive lookup. Unknown names are None.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Lookup from a host-supplied float payload. Only exact 0, 1, 2 match.
    pub fn from_index(index: f32) -> Option<Self> {
        if !index.is_finite() || index.fract() != 0.0 || index < 0.0 {
            return None;
        }
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// The three tunables a difficulty controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Vertical opening between the top and bottom obstacle.
    pub gap: f32,
    /// Seconds between obstacle pairs.
    pub spawn_delay: f32,
    /// Leftward obstacle speed in units per second.
    pub scroll_speed: f32,
}

/// Preset table, one entry per difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, DifficultySettings)> + '_ {
        Difficulty::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultySettings { gap: 200.0, spawn_delay: 1.8, scroll_speed: 160.0 },
            medium: DifficultySettings { gap: 160.0, spawn_delay: 1.5, scroll_speed: 200.0 },
            hard: DifficultySettings { gap: 130.0, spawn_delay: 1.2, scroll_speed: 250.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Difficulty::from_name("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name(" easy "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name("nightmare"), None);
        assert_eq!(Difficulty::from_name(""), None);
    }

    #[test]
    fn index_lookup_rejects_junk() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_index(d.index() as f32), Some(d));
        }
        assert_eq!(Difficulty::from_index(3.0), None);
        assert_eq!(Difficulty::from_index(-1.0), None);
        assert_eq!(Difficulty::from_index(0.5), None);
        assert_eq!(Difficulty::from_index(f32::NAN), None);
    }

    #[test]
    fn harder_presets_are_tighter_and_faster() {
        let table = DifficultyTable::default();
        let easy = table.get(Difficulty::Easy);
        let hard = table.get(Difficulty::Hard);
        assert!(hard.gap < easy.gap);
        assert!(hard.spawn_delay < easy.spawn_delay);
        assert!(hard.scroll_speed > easy.scroll_speed);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
    }
}
