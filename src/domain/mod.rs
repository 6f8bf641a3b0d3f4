//! Доменная модель: карты, колода, рука игрока, места за столом.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
