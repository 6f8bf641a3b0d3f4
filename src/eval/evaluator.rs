use crate::domain::card::{Card, Rank, Suit};

use super::errors::EvalError;
use super::hand_rank::{Evaluation, HandCategory};
use super::lookup_tables::{detect_straight, mask_of};
use super::rank_groups::RankGroups;

/// Минимальное и максимальное число карт для оценки.
pub const MIN_CARDS: usize = 5;
pub const MAX_CARDS: usize = 7;

/// Сколько карт составляет итоговую комбинацию.
const HAND_SIZE: usize = 5;

/// Оценить карманные карты вместе с бордом.
///
/// Ожидается:
///   - `hole.len() == 2`
///   - `board.len()` от 3 до 5 (обычно 5)
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<Evaluation, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Главная функция: лучшая 5-карточная комбинация из 5–7 карт.
///
/// Категории проверяются строго от сильной к слабой, первая подходящая
/// побеждает. Порядок входных карт на результат не влияет.
/// Повторяющихся карт во входе быть не должно.
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    // Стабильная сортировка по убыванию ранга, масть не учитывается.
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let groups = RankGroups::from_sorted(&sorted);
    let flush = flush_ranks(&sorted);

    let result = classify(&sorted, &groups, flush.as_deref());
    log::trace!("evaluated {} cards: {}", cards.len(), result);
    Ok(result)
}

fn classify(sorted: &[Card], groups: &RankGroups, flush: Option<&[Rank]>) -> Evaluation {
    // Royal flush / straight flush: стрит внутри масти флеша.
    if let Some(flush_ranks) = flush {
        if let Some(high) = detect_straight(mask_of(flush_ranks.iter().copied())) {
            if high == Rank::Ace {
                return Evaluation::new(HandCategory::RoyalFlush, Vec::new());
            }
            return Evaluation::new(HandCategory::StraightFlush, vec![high.value()]);
        }
    }

    // Four of a kind.
    if let Some(quad) = groups.highest_at_least(4, &[]) {
        let mut tiebreak = vec![quad.value()];
        tiebreak.extend(groups.kickers(&[quad], HAND_SIZE - 4));
        return Evaluation::new(HandCategory::FourOfAKind, tiebreak);
    }

    // Full house: старшая тройка + старшая из оставшихся групп от пары.
    if let Some(triple) = groups.highest_at_least(3, &[]) {
        if let Some(pair) = groups.highest_at_least(2, &[triple]) {
            return Evaluation::new(HandCategory::FullHouse, vec![triple.value(), pair.value()]);
        }
    }

    // Flush: 5 старших карт масти.
    if let Some(flush_ranks) = flush {
        let tiebreak = flush_ranks.iter().take(HAND_SIZE).map(|r| r.value()).collect();
        return Evaluation::new(HandCategory::Flush, tiebreak);
    }

    // Straight (включая wheel, где туз считается единицей).
    if let Some(high) = detect_straight(mask_of(sorted.iter().map(|c| c.rank))) {
        return Evaluation::new(HandCategory::Straight, vec![high.value()]);
    }

    // Three of a kind.
    if let Some(triple) = groups.highest_at_least(3, &[]) {
        let mut tiebreak = vec![triple.value()];
        tiebreak.extend(groups.kickers(&[triple], HAND_SIZE - 3));
        return Evaluation::new(HandCategory::ThreeOfAKind, tiebreak);
    }

    let pairs = groups.ranks_with_count(2);

    // Two pair: две старшие пары, третья пара (если есть) идёт в кикеры.
    if let [high, low, ..] = *pairs.as_slice() {
        let mut tiebreak = vec![high.value(), low.value()];
        tiebreak.extend(groups.kickers(&[high, low], HAND_SIZE - 4));
        return Evaluation::new(HandCategory::TwoPair, tiebreak);
    }

    // One pair.
    if let Some(&pair) = pairs.first() {
        let mut tiebreak = vec![pair.value()];
        tiebreak.extend(groups.kickers(&[pair], HAND_SIZE - 2));
        return Evaluation::new(HandCategory::OnePair, tiebreak);
    }

    // High card: просто 5 старших рангов.
    Evaluation::new(HandCategory::HighCard, groups.kickers(&[], HAND_SIZE))
}

/// Ранги карт масти, в которой 5 и больше карт, по убыванию.
/// В 7 картах такая масть может быть только одна.
fn flush_ranks(sorted: &[Card]) -> Option<Vec<Rank>> {
    let suit = Suit::ALL
        .into_iter()
        .find(|s| sorted.iter().filter(|c| c.suit == *s).count() >= HAND_SIZE)?;
    Some(
        sorted
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn straight_flush_found_among_extra_suited_cards() {
        // Шесть пик, стрит 5..9 из них, плюс лишний туз пик.
        let e = eval("5s 6s 7s 8s 9s As Kd");
        assert_eq!(e.category, HandCategory::StraightFlush);
        assert_eq!(e.tiebreak, vec![9]);
    }

    #[test]
    fn straight_and_flush_in_different_cards_is_only_flush() {
        let e = eval("2h 5h 9h Jh Kh Tc Qd");
        assert_eq!(e.category, HandCategory::Flush);
        assert_eq!(e.tiebreak, vec![13, 11, 9, 5, 2]);
    }

    #[test]
    fn flush_with_six_suited_cards_keeps_top_five() {
        let e = eval("2d 4d 6d 8d Td Qd As");
        assert_eq!(e.category, HandCategory::Flush);
        assert_eq!(e.tiebreak, vec![12, 10, 8, 6, 4]);
    }

    #[test]
    fn quads_take_single_kicker() {
        let e = eval("8s 8d 8c 8h Ks Qd 2c");
        assert_eq!(e.category, HandCategory::FourOfAKind);
        assert_eq!(e.tiebreak, vec![8, 13]);
    }

    #[test]
    fn too_few_cards_is_an_error() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(evaluate(&cards), Err(EvalError::InvalidHandSize(4)));
    }

    #[test]
    fn too_many_cards_is_an_error() {
        let cards = parse_cards("As Ks Qs Js Ts 9s 8s 7s").unwrap();
        assert_eq!(evaluate(&cards), Err(EvalError::InvalidHandSize(8)));
    }
}
