use crate::domain::card::{Card, Rank};

/// Группа карт одного ранга внутри оцениваемой руки.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub count: u8,
}

/// Группировка рангов, считается один раз на оценку.
///
/// Группы идут по убыванию ранга, поэтому первая подходящая группа
/// всегда самая старшая.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Ожидает карты, отсортированные по убыванию ранга.
    pub fn from_sorted(cards: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::with_capacity(cards.len());
        for card in cards {
            match groups.last_mut() {
                Some(g) if g.rank == card.rank => g.count += 1,
                _ => groups.push(RankGroup {
                    rank: card.rank,
                    count: 1,
                }),
            }
        }
        Self { groups }
    }

    /// Старшая группа размером не меньше `min`, кроме рангов из `exclude`.
    pub fn highest_at_least(&self, min: u8, exclude: &[Rank]) -> Option<Rank> {
        self.groups
            .iter()
            .find(|g| g.count >= min && !exclude.contains(&g.rank))
            .map(|g| g.rank)
    }

    /// Все ранги групп ровно размера `size`, по убыванию.
    pub fn ranks_with_count(&self, size: u8) -> Vec<Rank> {
        self.groups
            .iter()
            .filter(|g| g.count == size)
            .map(|g| g.rank)
            .collect()
    }

    /// Кикеры: по одному на каждую карту, кроме рангов из `exclude`,
    /// по убыванию, не больше `take` штук.
    pub fn kickers(&self, exclude: &[Rank], take: usize) -> Vec<u8> {
        self.groups
            .iter()
            .filter(|g| !exclude.contains(&g.rank))
            .flat_map(|g| std::iter::repeat(g.rank.value()).take(g.count as usize))
            .take(take)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;

    fn groups(s: &str) -> RankGroups {
        let mut cards = parse_cards(s).unwrap();
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));
        RankGroups::from_sorted(&cards)
    }

    #[test]
    fn groups_follow_descending_rank() {
        let g = groups("2s 9d 2d 9c 9h 5c 7d");
        let sizes: Vec<(Rank, u8)> = g.groups.iter().map(|g| (g.rank, g.count)).collect();
        assert_eq!(
            sizes,
            vec![
                (Rank::Nine, 3),
                (Rank::Seven, 1),
                (Rank::Five, 1),
                (Rank::Two, 2),
            ]
        );
    }

    #[test]
    fn kickers_skip_excluded_and_respect_limit() {
        let g = groups("Kd Ks 7h 7c 7d 3s 2h");
        assert_eq!(g.kickers(&[Rank::Seven], 2), vec![13, 13]);
        assert_eq!(g.kickers(&[Rank::Seven, Rank::King], 5), vec![3, 2]);
    }

    #[test]
    fn highest_at_least_prefers_higher_triple() {
        let g = groups("4s 4d 4c Jh Jd Js 2c");
        assert_eq!(g.highest_at_least(3, &[]), Some(Rank::Jack));
        assert_eq!(g.highest_at_least(2, &[Rank::Jack]), Some(Rank::Four));
    }
}
