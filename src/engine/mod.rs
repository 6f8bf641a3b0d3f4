//! Движок heads-up раунда: раздача, фолд, шоудаун.
//!
//! Основные операции:
//!   - `start_round` – перемешать колоду и раздать карманные карты
//!   - `HeadsUpRound::fold` – игрок сбрасывает карты
//!   - `HeadsUpRound::showdown` – борд, оценка рук, вердикт

pub mod errors;
pub mod game_loop;
pub mod hand_history;

pub use errors::EngineError;
pub use game_loop::{
    start_round, HeadsUpRound, PlayerShowdown, RoundConfig, RoundOutcome, RoundStatus,
    ShowdownSummary,
};
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
