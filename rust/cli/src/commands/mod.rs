//! Command handlers, one module per subcommand.
//!
//! Every handler follows the same shape:
//!
//! - `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - output streams (`&mut dyn Write`) are passed in, so tests write into `Vec<u8>`
//! - failures propagate as [`CliError`] and [`crate::run`] turns them into exit codes

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;

use holdem_engine::rules::{normalize_response, ActionRequest, ActionResponse, ResponseKind};
use holdem_engine::table::Table;

use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved configuration with command-line flags applied on top.
pub(crate) fn resolve_config(
    seed: Option<u64>,
    seats: Option<usize>,
) -> Result<Config, CliError> {
    let mut cfg = config::load()?;
    if seed.is_some() {
        cfg.seed = seed;
    }
    if let Some(seats) = seats {
        cfg.seats = seats;
    }
    Ok(cfg)
}

/// A table with every seat bought in for `cfg.buy_in`.
pub(crate) fn seated_table(cfg: &Config) -> Result<Table, CliError> {
    let mut table = Table::from_config(&cfg.table_config())?;
    for seat in 0..cfg.seats {
        table.sit_down(seat, cfg.buy_in)?;
    }
    Ok(table)
}

/// Runs the current hand to showdown, asking `decide` for every action.
pub(crate) fn play_out_hand<F>(table: &mut Table, mut decide: F) -> Result<(), CliError>
where
    F: FnMut(&ActionRequest) -> ActionResponse,
{
    while !table.betting_rounds_completed() {
        while table.betting_round_in_progress() {
            let request = table.action_request()?;
            let legal = table.legal_actions()?;
            let action = normalize_response(&decide(&request), &legal);
            table.action_taken(action)?;
        }
        table.end_betting_round()?;
    }
    table.showdown()?;
    Ok(())
}

/// Checks when possible, otherwise calls.
pub(crate) fn passive_response(_: &ActionRequest) -> ActionResponse {
    ActionResponse::new(ResponseKind::Call, None)
}
