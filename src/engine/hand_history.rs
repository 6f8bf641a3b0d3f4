use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::Seat;
use crate::eval::{Evaluation, Verdict};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался, колода перемешана.
    RoundStarted { round_id: u64 },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: Seat, cards: Vec<Card> },

    /// Игрок сбросил карты.
    Folded { seat: Seat },

    /// Открыты общие карты.
    BoardDealt { cards: Vec<Card> },

    /// Шоудаун – открытие карт и оценка руки.
    ShowdownReveal {
        seat: Seat,
        hole_cards: Vec<Card>,
        evaluation: Evaluation,
    },

    /// Раунд завершён.
    RoundFinished { round_id: u64, verdict: Verdict },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RoundEvent> {
        self.events.last()
    }
}
