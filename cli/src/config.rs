use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tictactoe_engine::Difficulty;

/// Difficulty as configured; `Choose` defers to an interactive prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultySetting {
    Easy,
    Hard,
    Impossible,
    Choose,
}

impl DifficultySetting {
    pub fn from_name(name: &str) -> Option<DifficultySetting> {
        match name {
            "choose" => Some(DifficultySetting::Choose),
            _ => Difficulty::from_name(name).map(DifficultySetting::from),
        }
    }

    pub fn as_difficulty(&self) -> Option<Difficulty> {
        match self {
            DifficultySetting::Easy => Some(Difficulty::Easy),
            DifficultySetting::Hard => Some(Difficulty::Hard),
            DifficultySetting::Impossible => Some(Difficulty::Impossible),
            DifficultySetting::Choose => None,
        }
    }
}

impl From<Difficulty> for DifficultySetting {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => DifficultySetting::Easy,
            Difficulty::Hard => DifficultySetting::Hard,
            Difficulty::Impossible => DifficultySetting::Impossible,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerSetting {
    Human,
    Computer,
    Random,
    Choose,
}

impl FirstPlayerSetting {
    pub fn from_name(name: &str) -> Option<FirstPlayerSetting> {
        match name {
            "human" => Some(FirstPlayerSetting::Human),
            "computer" => Some(FirstPlayerSetting::Computer),
            "random" => Some(FirstPlayerSetting::Random),
            "choose" => Some(FirstPlayerSetting::Choose),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub side_length: usize,
    pub winning_score: u32,
    pub difficulty: DifficultySetting,
    pub first_player: FirstPlayerSetting,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side_length: 3,
            winning_score: 5,
            difficulty: DifficultySetting::Choose,
            first_player: FirstPlayerSetting::Choose,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.side_length < 3 || self.side_length > 20 {
            return Err("Side length must be between 3 and 20".to_string());
        }
        if self.winning_score < 1 {
            return Err("Winning score must be at least 1".to_string());
        }
        Ok(())
    }

    /// Loads the config from a YAML file. A missing file yields the
    /// defaults; anything else that fails is an error.
    pub fn load(file_path: &str) -> Result<GameConfig, String> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(GameConfig::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: GameConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = GameConfig {
            side_length: 5,
            winning_score: 3,
            difficulty: DifficultySetting::Hard,
            first_player: FirstPlayerSetting::Random,
        };
        let serialized = serde_yaml_ng::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_invalid_side_length_rejected() {
        let config = GameConfig {
            side_length: 2,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            side_length: 21,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = GameConfig::load("this_file_does_not_exist.yaml").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_setting_names() {
        assert_eq!(
            DifficultySetting::from_name("impossible"),
            Some(DifficultySetting::Impossible)
        );
        assert_eq!(
            DifficultySetting::from_name("choose"),
            Some(DifficultySetting::Choose)
        );
        assert_eq!(DifficultySetting::from_name("medium"), None);
        assert_eq!(
            FirstPlayerSetting::from_name("random"),
            Some(FirstPlayerSetting::Random)
        );
        assert_eq!(FirstPlayerSetting::from_name("bot"), None);
    }
}
