use thiserror::Error;

use crate::player::{Chips, PlayerAction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Seat {seat} is out of range (table has {num_seats} seats)")]
    SeatOutOfRange { seat: usize, num_seats: usize },
    #[error("Seat {0} is already occupied")]
    SeatOccupied(usize),
    #[error("Seat {0} is empty")]
    SeatEmpty(usize),
    #[error("Seat {0} is part of the hand in progress")]
    SeatInHand(usize),
    #[error("Table must have between 2 and {max} seats, got {actual}")]
    InvalidSeatCount { actual: usize, max: usize },
    #[error("At least 2 seated players are required, found {0}")]
    NotEnoughPlayers(usize),
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Betting round is still in progress")]
    BettingRoundInProgress,
    #[error("No betting round in progress")]
    NoBettingRound,
    #[error("All betting rounds are already completed")]
    BettingRoundsCompleted,
    #[error("Betting rounds are not completed yet")]
    BettingRoundsNotCompleted,
    #[error("Action {0:?} is not legal for the player to act")]
    IllegalAction(PlayerAction),
    #[error("Invalid bet amount: {amount}, allowed range: {minimum}..={maximum}")]
    InvalidBetAmount {
        amount: Chips,
        minimum: Chips,
        maximum: Chips,
    },
    #[error("Buy-in must be positive")]
    InvalidBuyIn,
    #[error("Buy-in of {buy_in} would push the table past {max} chips")]
    TableChipLimit { buy_in: Chips, max: Chips },
    #[error("Invalid forced bets: {0}")]
    InvalidForcedBets(String),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}
