use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе, от слабой к сильной.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Результат оценки руки: категория + ключ для разрешения ничьих.
///
/// Смысл `tiebreak` зависит от категории:
///   - Royal flush: пусто;
///   - Straight / Straight flush: `[старшая карта стрита]`;
///   - Four of a kind: `[каре, кикер]`;
///   - Full house: `[тройка, пара]`;
///   - Three of a kind: `[тройка, кикер, кикер]`;
///   - Two pair: `[старшая пара, младшая пара, кикер]`;
///   - One pair: `[пара, кикер, кикер, кикер]`;
///   - Flush / High card: 5 старших рангов по убыванию.
///
/// Ранги хранятся числами 2..=14.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub category: HandCategory,
    pub tiebreak: Vec<u8>,
}

impl Evaluation {
    pub fn new(category: HandCategory, tiebreak: Vec<u8>) -> Self {
        Self { category, tiebreak }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.tiebreak.is_empty() {
            let ranks: Vec<String> = self.tiebreak.iter().map(u8::to_string).collect();
            write!(f, " [{}]", ranks.join(", "))?;
        }
        Ok(())
    }
}

fn rank_name(v: u8) -> String {
    Rank::from_value(v).map_or_else(|| v.to_string(), |r| r.to_string())
}

/// Человеческое описание руки: категория и определяющие её ранги.
pub fn describe_hand(eval: &Evaluation) -> String {
    let name = eval.category.name();
    match (eval.category, eval.tiebreak.as_slice()) {
        (HandCategory::FullHouse, [triple, pair, ..]) => {
            format!("{name} ({} over {})", rank_name(*triple), rank_name(*pair))
        }
        (HandCategory::TwoPair, [hi, lo, ..]) => {
            format!("{name} ({} and {})", rank_name(*hi), rank_name(*lo))
        }
        (
            HandCategory::Straight
            | HandCategory::StraightFlush
            | HandCategory::Flush
            | HandCategory::HighCard,
            [high, ..],
        ) => format!("{name}, {} high", rank_name(*high)),
        (
            HandCategory::FourOfAKind | HandCategory::ThreeOfAKind | HandCategory::OnePair,
            [rank, ..],
        ) => format!("{name} ({})", rank_name(*rank)),
        _ => name.to_string(),
    }
}
