//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use holdem_showdown::domain::*;

/// Card: Display с названиями картинок.
#[test]
fn card_display_uses_face_names() {
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Queen of Hearts");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10 of Clubs");
    assert_eq!(Card::new(Rank::Two, Suit::Diamonds).to_string(), "2 of Diamonds");
}

/// Card: очки – номинал, но не больше 10, туз тоже 10.
#[test]
fn card_points_are_capped_at_ten() {
    assert_eq!(Card::new(Rank::Two, Suit::Clubs).points(), 2);
    assert_eq!(Card::new(Rank::Nine, Suit::Clubs).points(), 9);
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).points(), 10);
    assert_eq!(Card::new(Rank::King, Suit::Clubs).points(), 10);
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).points(), 10);
}

/// Card: равенство только по (rank, suit).
#[test]
fn card_equality_is_structural() {
    let a = Card::new(Rank::Jack, Suit::Diamonds);
    let b = Card::new(Rank::Jack, Suit::Diamonds);
    let c = Card::new(Rank::Jack, Suit::Hearts);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Card: code() + FromStr roundtrip.
#[test]
fn card_code_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let parsed: Card = card.code().parse().expect("parse Card from code");
        assert_eq!(parsed, card);
    }

    assert_eq!(Card::new(Rank::Ten, Suit::Spades).code(), "Ts");

    // Неверные строки
    assert!(matches!("".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
    assert!(matches!("Ahh".parse::<Card>(), Err(CardParseError::InvalidLength(_))));
    assert_eq!("1h".parse::<Card>(), Err(CardParseError::InvalidRank('1')));
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::InvalidSuit('x')));
}

#[test]
fn parse_cards_splits_on_whitespace() {
    let cards = parse_cards("Ah  Kd\t7c").unwrap();
    assert_eq!(
        cards,
        vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Clubs),
        ]
    );
    assert!(parse_cards("Ah Zz").is_err());
}

#[test]
fn rank_values_roundtrip() {
    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
    assert_eq!(Rank::Ace.value(), 14);
}

/// Deck: стандартная колода 52 карты, уникальные.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    for suit in Suit::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.suit == suit).count(), 13);
    }
}

/// Deck: draw до конца, потом ошибка.
#[test]
fn deck_draw_until_empty() {
    let mut deck = Deck::standard_52();
    let mut seen = HashSet::new();

    for _ in 0..52 {
        let card = deck.draw().expect("card available");
        assert!(seen.insert(card), "card drawn twice: {card}");
        assert!(!deck.contains(&card));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn deck_draw_n_is_all_or_nothing() {
    let mut deck = Deck::standard_52();
    let five = deck.draw_n(5).unwrap();
    assert_eq!(five.len(), 5);
    assert_eq!(deck.len(), 47);

    assert_eq!(deck.draw_n(48), Err(DeckError::Empty));
    assert_eq!(deck.len(), 47, "failed draw_n must not consume cards");
}

#[test]
fn deck_return_card_goes_to_bottom() {
    let mut deck = Deck::standard_52();
    let top = deck.draw().unwrap();
    deck.return_card(top);

    assert_eq!(deck.len(), 52);
    assert!(deck.contains(&top));
    assert_eq!(deck.cards[0], top);
    assert_ne!(deck.draw().unwrap(), top);
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// CardStack: push/pop/peek работают как стопка.
#[test]
fn card_stack_push_pop_peek() {
    let mut stack = CardStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(HandError::Empty));
    assert_eq!(stack.peek(), Err(HandError::Empty));

    stack.push(card("2c"));
    stack.push(card("Kh"));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Ok(&card("Kh")));
    assert_eq!(stack.pop(), Ok(card("Kh")));
    assert_eq!(stack.pop(), Ok(card("2c")));
    assert!(stack.is_empty());
}

/// CardStack: индексы считаются от верха.
#[test]
fn card_stack_insert_and_remove_at() {
    let mut stack: CardStack = parse_cards("2c 3c 4c").unwrap().into_iter().collect();
    assert_eq!(stack.to_vec(), parse_cards("4c 3c 2c").unwrap());

    stack.insert_at(0, card("Ah")).unwrap();
    stack.insert_at(2, card("Kh")).unwrap();
    stack.insert_at(5, card("Qh")).unwrap();
    assert_eq!(stack.to_vec(), parse_cards("Ah 4c Kh 3c 2c Qh").unwrap());

    assert_eq!(
        stack.insert_at(7, card("Jh")),
        Err(HandError::IndexOutOfRange { index: 7, len: 6 })
    );

    assert_eq!(stack.remove_at(2), Ok(card("Kh")));
    assert_eq!(stack.remove_at(4), Ok(card("Qh")));
    assert_eq!(stack.remove_at(0), Ok(card("Ah")));
    assert_eq!(
        stack.remove_at(3),
        Err(HandError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(stack.to_vec(), parse_cards("4c 3c 2c").unwrap());
}

#[test]
fn card_stack_remove_at_on_empty_is_empty_error() {
    let mut stack = CardStack::new();
    assert_eq!(stack.remove_at(0), Err(HandError::Empty));
}

/// Снимок не связан со стопкой.
#[test]
fn card_stack_to_vec_is_a_snapshot() {
    let mut stack = CardStack::new();
    stack.push(card("9d"));
    let snapshot = stack.to_vec();

    stack.push(card("8d"));
    stack.pop().unwrap();
    stack.pop().unwrap();

    assert_eq!(snapshot, vec![card("9d")]);
    assert!(stack.is_empty());
}

#[test]
fn seat_opponent_and_display() {
    assert_eq!(Seat::First.opponent(), Seat::Second);
    assert_eq!(Seat::Second.opponent(), Seat::First);
    assert_eq!(Seat::First.to_string(), "Player 1");
    assert_eq!(Seat::Second.to_string(), "Player 2");
}

#[test]
fn player_combined_with_board() {
    let mut player = PlayerInRound::new(Seat::First);
    player.hand.push(card("Ah"));
    player.hand.push(card("Kh"));
    let board = parse_cards("2c 3d 4s 5h 9c").unwrap();

    let all = player.combined_with(&board);
    assert_eq!(all.len(), 7);
    assert_eq!(&all[..2], &[card("Kh"), card("Ah")]);
    assert_eq!(&all[2..], board.as_slice());
    assert!(player.is_in_hand());
}
