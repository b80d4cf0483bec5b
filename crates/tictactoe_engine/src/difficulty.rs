use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,   // Uniformly random moves
    Medium, // Coin flip between random and optimal
    #[default]
    Hard,   // Full minimax
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("normal".parse(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse(), Ok(Difficulty::Hard));
    }

    #[test]
    fn rejects_unknown_tiers() {
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownDifficulty("expert".to_string()));
        assert!(err.to_string().contains("expert"));
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn default_and_display() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse(), Ok(tier));
        }
    }
}
