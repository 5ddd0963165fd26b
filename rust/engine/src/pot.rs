//! Main and side pots.
//!
//! Street bets are swept into pots at the end of each betting round. When
//! players are all-in for different amounts the sweep is repeated, peeling off
//! the smallest outstanding bet each time, which builds the side-pot ladder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::{Chips, Seat};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    size: Chips,
    eligible_players: Vec<usize>,
    /// Set once an eligible player is all-in; later streets start a new pot.
    #[serde(skip)]
    closed: bool,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Chips {
        self.size
    }

    pub fn eligible_players(&self) -> &[usize] {
        &self.eligible_players
    }

    pub fn add(&mut self, amount: Chips) {
        self.size += amount;
    }

    /// Takes the smallest outstanding bet from every seat that still has one.
    /// Those seats become the pot's eligible players. Returns the amount taken
    /// per seat, or 0 when nobody has a bet, in which case a pot without
    /// eligibility yet defaults to every seat still in the hand.
    pub fn collect_bets_from(&mut self, seats: &mut [Seat]) -> Chips {
        let min_bet = seats
            .iter()
            .filter_map(Seat::active)
            .map(|p| p.bet_size())
            .filter(|&b| b != 0)
            .min();

        let Some(min_bet) = min_bet else {
            if self.eligible_players.is_empty() {
                self.eligible_players = active_seats(seats).collect();
            }
            return 0;
        };

        self.eligible_players.clear();
        for (index, seat) in seats.iter_mut().enumerate() {
            if let Some(player) = seat.active_mut() {
                if player.bet_size() != 0 {
                    player.take_from_bet(min_bet);
                    self.size += min_bet;
                    self.eligible_players.push(index);
                }
            }
        }
        min_bet
    }
}

/// The ordered pot list of a hand plus bets forfeited by folding players that
/// have not been swept into a pot yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotManager {
    pots: Vec<Pot>,
    aggregate_folded_bets: Chips,
}

impl Default for PotManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PotManager {
    pub fn new() -> Self {
        Self {
            pots: vec![Pot::new()],
            aggregate_folded_bets: 0,
        }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn aggregate_folded_bets(&self) -> Chips {
        self.aggregate_folded_bets
    }

    /// Chips held by pots and not yet swept folded bets.
    pub fn total(&self) -> Chips {
        self.pots.iter().map(Pot::size).sum::<Chips>() + self.aggregate_folded_bets
    }

    /// Adds chips straight into the current pot (antes).
    pub fn add_to_current(&mut self, amount: Chips) {
        self.current_mut().add(amount);
    }

    pub fn bet_folded(&mut self, amount: Chips) {
        self.aggregate_folded_bets += amount;
    }

    pub fn collect_bets_from(&mut self, seats: &mut [Seat]) {
        for pot in &mut self.pots {
            pot.eligible_players.retain(|&i| seats[i].is_active());
        }

        loop {
            if self.current().closed && has_bets(seats) {
                self.pots.push(Pot::new());
            }

            let pot = self.current_mut();
            let min_bet = pot.collect_bets_from(seats);

            let num_eligible = pot.eligible_players.len() as Chips;
            let folded = self
                .aggregate_folded_bets
                .min(min_bet.saturating_mul(num_eligible));
            let pot = self.current_mut();
            pot.add(folded);
            if pot
                .eligible_players
                .iter()
                .any(|&i| seats[i].active().is_some_and(|p| p.stack() == 0))
            {
                pot.closed = true;
            }
            self.aggregate_folded_bets -= folded;

            debug!(
                pot = self.pots.len() - 1,
                min_bet,
                folded,
                size = self.current().size,
                "collected bets"
            );

            if !has_bets(seats) {
                break;
            }
            self.pots.push(Pot::new());
        }

        let leftover = std::mem::take(&mut self.aggregate_folded_bets);
        self.current_mut().add(leftover);
    }

    // The pot list always holds at least one pot.
    fn current(&self) -> &Pot {
        &self.pots[self.pots.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Pot {
        let last = self.pots.len() - 1;
        &mut self.pots[last]
    }
}

fn active_seats(seats: &[Seat]) -> impl Iterator<Item = usize> + '_ {
    seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active())
        .map(|(i, _)| i)
}

fn has_bets(seats: &[Seat]) -> bool {
    seats
        .iter()
        .filter_map(Seat::active)
        .any(|p| p.bet_size() != 0)
}
