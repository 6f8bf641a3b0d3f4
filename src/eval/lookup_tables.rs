use crate::domain::card::Rank;

/// Множество рангов в 13 битах: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Ранги колеса (A2345). Туз здесь младший, старшая карта – пятёрка.
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank.value() - Rank::Two.value())
}

/// Маска из произвольного набора рангов (повторы схлопываются).
pub fn mask_of<I: IntoIterator<Item = Rank>>(ranks: I) -> RankMask {
    ranks.into_iter().fold(0, |mask, r| mask | rank_to_bit(r))
}

/// Старшая карта самого сильного стрита в маске, если он есть.
///
/// Окна по 5 подряд идущих рангов перебираются от TJQKA вниз до 23456,
/// колесо проверяется последним и даёт `Rank::Five`.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    let contains = |run: &[Rank]| {
        let run_mask = mask_of(run.iter().copied());
        rank_mask & run_mask == run_mask
    };

    Rank::ALL
        .windows(5)
        .rev()
        .find(|run| contains(*run))
        .map(|run| run[4])
        .or_else(|| contains(&WHEEL[..]).then_some(Rank::Five))
}
