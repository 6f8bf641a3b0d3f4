use thiserror::Error;

/// Ошибки оценки руки.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Для оценки нужно от 5 до 7 карт, получено {0}")]
    InvalidHandSize(usize),
}
