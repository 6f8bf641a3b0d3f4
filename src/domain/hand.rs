use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки контейнера карт игрока.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("В руке нет карт")]
    Empty,

    #[error("Индекс {index} вне диапазона (карт в руке: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Карты игрока в виде стопки: индекс 0 — верх.
///
/// Внутри обычный `Vec`, верх хранится в конце вектора,
/// чтобы `push`/`pop` были O(1).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Положить карту наверх.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Снять верхнюю карту.
    pub fn pop(&mut self) -> Result<Card, HandError> {
        self.cards.pop().ok_or(HandError::Empty)
    }

    /// Посмотреть верхнюю карту, не снимая её.
    pub fn peek(&self) -> Result<&Card, HandError> {
        self.cards.last().ok_or(HandError::Empty)
    }

    /// Вставить карту так, чтобы она оказалась на позиции `index` (0 — верх).
    /// Допустим `index == len()` — вставка в самый низ.
    pub fn insert_at(&mut self, index: usize, card: Card) -> Result<(), HandError> {
        let len = self.cards.len();
        if index > len {
            return Err(HandError::IndexOutOfRange { index, len });
        }
        self.cards.insert(len - index, card);
        Ok(())
    }

    /// Удалить карту с позиции `index` (0 — верх).
    pub fn remove_at(&mut self, index: usize) -> Result<Card, HandError> {
        let len = self.cards.len();
        if len == 0 {
            return Err(HandError::Empty);
        }
        if index >= len {
            return Err(HandError::IndexOutOfRange { index, len });
        }
        Ok(self.cards.remove(len - 1 - index))
    }

    /// Карты сверху вниз.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    /// Снимок карт сверху вниз. Дальнейшие изменения стопки на него не влияют.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().copied().collect()
    }
}

impl FromIterator<Card> for CardStack {
    /// Карты кладутся по очереди, последняя окажется сверху.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
