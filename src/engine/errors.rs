use thiserror::Error;

use crate::domain::deck::DeckError;
use crate::domain::hand::HandError;
use crate::eval::EvalError;

/// Ошибки движка раунда.
///
/// Ошибки колоды, руки и оценщика пробрасываются как есть.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Hand(#[from] HandError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Раунд уже завершён")]
    RoundFinished,

    #[error("Некорректная конфигурация раунда: {0}")]
    InvalidConfig(String),
}
