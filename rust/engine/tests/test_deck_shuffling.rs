use std::collections::HashSet;

use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;

#[test]
fn deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = d1.draw_n(10).unwrap();
    let b: Vec<Card> = d2.draw_n(10).unwrap();
    assert_eq!(a, b, "same seed must produce identical order");
}

#[test]
fn different_seeds_produce_different_orders() {
    let a = Deck::new_with_seed(1).draw_n(52).unwrap();
    let b = Deck::new_with_seed(2).draw_n(52).unwrap();
    assert_ne!(a, b);
}

#[test]
fn drawing_past_the_end_fails() {
    let mut deck = Deck::new_with_seed(7);
    deck.draw_n(50).unwrap();
    assert_eq!(deck.draw_n(3), Err(GameError::EmptyDeck));
    // a failed draw_n takes nothing
    assert_eq!(deck.remaining(), 2);
    deck.draw().unwrap();
    deck.draw().unwrap();
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn stacked_deck_deals_in_order() {
    let cards = parse_cards("As Kd 7c").unwrap();
    let mut deck = Deck::from_cards(cards.clone());
    assert_eq!(deck.draw_n(3).unwrap(), cards);
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}
