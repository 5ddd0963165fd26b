//! `deal` command: deals a single hand, checks it down and prints hole cards,
//! board and the pot awards.

use holdem_engine::cards::Card;
use std::io::Write;
use tracing::debug;

use super::{passive_response, play_out_hand, resolve_config, seated_table};
use crate::error::CliError;
use crate::ui;

pub fn handle_deal_command(
    seed: Option<u64>,
    seats: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = resolve_config(seed, seats)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    cfg.seed = Some(seed);
    debug!(seed, seats = cfg.seats, "dealing one hand");

    let mut table = seated_table(&cfg)?;
    table.start_hand()?;
    let hole_cards: Vec<Option<[Card; 2]>> = table.hole_cards().to_vec();
    play_out_hand(&mut table, passive_response)?;

    let Some(record) = table.last_hand() else {
        return Err(CliError::InvalidInput("hand did not finish".into()));
    };
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Button: {}", record.button)?;
    for (seat, cards) in hole_cards.iter().enumerate() {
        if let Some(cards) = cards {
            writeln!(out, "Seat {}: {}", seat, ui::format_cards(cards))?;
        }
    }
    writeln!(out, "Board: {}", ui::format_cards(&record.board))?;
    for (index, result) in record.results.iter().enumerate() {
        for winner in &result.winners {
            writeln!(
                out,
                "Pot {}: seat {} wins {} with {}",
                index + 1,
                winner.seat,
                winner.share,
                ui::format_cards(&winner.best_cards)
            )?;
        }
    }
    Ok(())
}
