//! Heads-up Texas Hold'em: колода, раздача и определение победителя.
//!
//! Ядро – оценщик рук (`eval`): по 5–7 картам находит лучшую
//! 5-карточную комбинацию и ключ для разрешения ничьих.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
