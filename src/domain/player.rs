use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::CardStack;

/// Место за столом heads-up: ровно два игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Статус игрока в текущем раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок в раздаче.
    Active,
    /// Игрок сбросил карты.
    Folded,
}

/// Игрок в раунде: место, статус и карманные карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInRound {
    pub seat: Seat,
    pub status: PlayerStatus,
    pub hand: CardStack,
}

impl PlayerInRound {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            status: PlayerStatus::Active,
            hand: CardStack::new(),
        }
    }

    pub fn is_in_hand(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Карманные карты + борд одной последовательностью для оценки.
    pub fn combined_with(&self, board: &[Card]) -> Vec<Card> {
        let mut all = self.hand.to_vec();
        all.extend_from_slice(board);
        all
    }
}
