use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::hand_rank::Evaluation;

/// Итог сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl Evaluation {
    /// Сравнить силу двух рук.
    ///
    /// Сначала категория, затем `tiebreak` поэлементно по общей длине.
    /// Если общая часть совпала — ничья, даже если длины разные.
    pub fn cmp_strength(&self, other: &Evaluation) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreak
                .iter()
                .zip(&other.tiebreak)
                .map(|(a, b)| a.cmp(b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Сравнить результаты двух игроков.
pub fn compare(a: &Evaluation, b: &Evaluation) -> Verdict {
    a.cmp_strength(b).into()
}
