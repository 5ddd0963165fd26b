//! `sim` command: plays many hands at one table with a seeded random policy.
//!
//! Every seat acts at random among the legal actions, each response going
//! through the same normalization an outside client would get. After every
//! hand the total chip count is checked against the buy-ins, and hands can be
//! appended to a JSONL hand history.
//!
//! ```no_run
//! use std::io;
//! let args = ["holdem", "sim", "--hands", "1000", "--seed", "42", "--output", "data/sim.jsonl"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use holdem_engine::logger::HandLogger;
use holdem_engine::player::Chips;
use holdem_engine::rules::{ActionRequest, ActionResponse, ResponseKind};
use holdem_engine::table::Table;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use super::{play_out_hand, resolve_config, seated_table};
use crate::error::CliError;
use crate::ui;

pub fn handle_sim_command(
    hands: u64,
    seed: Option<u64>,
    seats: Option<usize>,
    output: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut cfg = resolve_config(seed, seats)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    cfg.seed = Some(base_seed);

    let mut table = seated_table(&cfg)?;
    let expected = table.chips_in_play();
    let mut policy = ChaCha8Rng::seed_from_u64(base_seed);
    let mut logger = output.as_ref().map(HandLogger::create).transpose()?;
    info!(hands, seed = base_seed, seats = cfg.seats, "simulation started");

    let mut played = 0u64;
    while played < hands {
        let live = live_seats(&table);
        if live < 2 {
            ui::display_warning(
                err,
                &format!("only {} seat has chips left, stopping early", live),
            )?;
            break;
        }

        table.start_hand()?;
        play_out_hand(&mut table, |req| random_response(&mut policy, req))?;
        played += 1;

        let total = table.chips_in_play();
        if total != expected {
            return Err(CliError::InvalidInput(format!(
                "chip count drifted to {} after hand {} (expected {})",
                total, played, expected
            )));
        }
        if let (Some(logger), Some(record)) = (logger.as_mut(), table.last_hand()) {
            logger.write(record)?;
        }
        debug!(hand = played, "hand complete");
    }

    writeln!(out, "Simulated: {} hands (seed {})", played, base_seed)?;
    for (seat, player) in table.seats().iter().enumerate() {
        if let Some(player) = player {
            let net = i64::from(player.total_chips()) - i64::from(cfg.buy_in);
            writeln!(
                out,
                "Seat {}: {} chips ({:+})",
                seat,
                player.total_chips(),
                net
            )?;
        }
    }
    if let Some(path) = &output {
        writeln!(out, "Hand history: {}", path.display())?;
    }
    Ok(())
}

fn live_seats(table: &Table) -> usize {
    table
        .seats()
        .iter()
        .filter(|p| p.is_some_and(|p| p.total_chips() > 0))
        .count()
}

/// Mostly passive, sometimes aggressive, rarely all-in. Folds only when
/// there is something to call.
fn random_response<R: Rng>(rng: &mut R, req: &ActionRequest) -> ActionResponse {
    let facing_bet = req.current_bet > req.player_bet;
    let roll = rng.random_range(0..100);
    match roll {
        0..15 if facing_bet => ActionResponse::new(ResponseKind::Fold, None),
        0..70 => ActionResponse::new(ResponseKind::Call, None),
        70..96 => {
            let max: Chips = req.player_bet + req.player_stack;
            let amount = if req.minimum_raise > 0 && req.minimum_raise <= max {
                rng.random_range(req.minimum_raise..=max)
            } else {
                max
            };
            let kind = if req.current_bet == 0 {
                ResponseKind::Bet
            } else {
                ResponseKind::Raise
            };
            ActionResponse::new(kind, Some(amount))
        }
        _ => ActionResponse::new(ResponseKind::AllIn, None),
    }
}
