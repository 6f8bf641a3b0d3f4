//! Конфигурация игры: сколько карт сдавать, seed для RNG, уровень логов.
//!
//! Формат – JSON, все поля необязательные:
//!
//! ```json
//! { "hole_cards": 2, "board_cards": 5, "seed": 42, "log_level": "debug" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::RoundConfig;

/// Переменная окружения с путём к файлу конфига.
pub const CONFIG_ENV_VAR: &str = "POKER_CONFIG";

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректные значения конфига: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub hole_cards: usize,
    pub board_cards: usize,
    /// Seed для детерминированной раздачи. `None` – системный RNG.
    pub seed: Option<u64>,
    /// Уровень логов по умолчанию, если не задан `RUST_LOG`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        let round = RoundConfig::default();
        Self {
            hole_cards: round.hole_cards,
            board_cards: round.board_cards,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Путь из аргумента, иначе из `POKER_CONFIG`, иначе значения по умолчанию.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)) {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            hole_cards: self.hole_cards,
            board_cards: self.board_cards,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.round_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "неизвестный log_level: {}",
                self.log_level
            )));
        }
        Ok(())
    }
}
