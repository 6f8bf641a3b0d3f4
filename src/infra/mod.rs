//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - конфигурация игры;
//! - инициализация логирования.

pub mod config;
pub mod logging;
pub mod rng;

pub use config::{ConfigError, GameConfig};
pub use rng::*;
