//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> Result<Evaluation, EvalError>`
//!   `compare(a, b) -> Verdict`

pub mod compare;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod rank_groups;

pub use compare::{compare, Verdict};
pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_best_hand, MAX_CARDS, MIN_CARDS};
pub use hand_rank::{describe_hand, Evaluation, HandCategory};
