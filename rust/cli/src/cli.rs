//! Command-line surface of the `holdem` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em engine toolbox")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Flags given here win over `HOLDEM_*` variables and the config file.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands with a seeded random policy and report chip results
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        seats: Option<usize>,
        /// Append every hand to this JSONL hand history file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rank the best five-card hand among 5 to 7 cards, e.g. `eval Ah Kh Qh Jh Th`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal one hand and print hole cards and the full board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        seats: Option<usize>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
