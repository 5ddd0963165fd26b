//! # Hold'em CLI Library
//!
//! Command-line front end for the `holdem_engine` crate. It owns everything
//! the engine leaves to its caller: configuration, logging setup and the
//! decisions made for each seat.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a command handler and returns
//! the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: play many hands with a seeded random policy
//! - `eval`: rank the best hand among 5 to 7 cards
//! - `deal`: deal one hand and show it
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. `--help` and
/// `--version` go to `out` and succeed; argument errors go to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["sim", "eval", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HoldemCli::try_parse_from(&argv);
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Usage: holdem <command> [options]\n");
                    let _ = writeln!(err, "Commands:");
                    for c in COMMANDS {
                        let _ = writeln!(err, "  {}", c);
                    }
                    let _ = writeln!(err, "\nFor full help, run: holdem --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Sim {
            hands,
            seed,
            seats,
            output,
        } => handle_sim_command(hands, seed, seats, output, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed, seats } => handle_deal_command(seed, seats, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
