//! `eval` command: best five-card hand among the cards given.

use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::hand::{evaluate_best, Category};
use std::collections::HashSet;
use std::io::Write;

use crate::error::CliError;
use crate::ui;

/// Cards may be passed one per argument or several per argument
/// (`eval "Ah Kh" Qh Jh Th`).
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|&&c| !seen.insert(c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let best = evaluate_best(&cards);
    writeln!(out, "Hand: {}", category_name(best.strength.category))?;
    writeln!(out, "Cards: {}", ui::format_cards(&ordered(&best.cards)))?;
    Ok(())
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::HighCard => "high card",
        Category::OnePair => "one pair",
        Category::TwoPair => "two pair",
        Category::ThreeOfAKind => "three of a kind",
        Category::Straight => "straight",
        Category::Flush => "flush",
        Category::FullHouse => "full house",
        Category::FourOfAKind => "four of a kind",
        Category::StraightFlush => "straight flush",
    }
}

// high to low so the output does not depend on input order
fn ordered(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by(|a, b| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit)));
    cards
}
