//! Multi-hand session: persistent seats, button rotation and per-hand dealers.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::dealer::{Dealer, ForcedBets, LegalActions, PotResolution, Street};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{format_hand_id, HandRecord};
use crate::player::{Chips, Player, PlayerAction, Seat};
use crate::pot::Pot;
use crate::rules::ActionRequest;

/// Most seats one 52-card deck can serve: 23 * 2 hole cards + 5 board cards.
pub const MAX_SEATS: usize = 23;

/// Table settings as read from configuration files.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub num_seats: usize,
    pub forced_bets: ForcedBets,
    /// Base seed; hand `n` is shuffled with `seed + n`.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_seats: 9,
            forced_bets: ForcedBets::blinds(1, 2),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct Table {
    num_seats: usize,
    forced_bets: ForcedBets,
    players: Vec<Option<Player>>,
    dealer: Option<Dealer>,
    button: usize,
    first_hand: bool,
    hand_count: u64,
    seed: Option<u64>,
    hand_seed: Option<u64>,
    last_hand: Option<HandRecord>,
}

impl Table {
    pub fn new(num_seats: usize, forced_bets: ForcedBets) -> Result<Self, GameError> {
        Self::from_config(&TableConfig {
            num_seats,
            forced_bets,
            seed: None,
        })
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, GameError> {
        if !(2..=MAX_SEATS).contains(&config.num_seats) {
            return Err(GameError::InvalidSeatCount {
                actual: config.num_seats,
                max: MAX_SEATS,
            });
        }
        config.forced_bets.validate()?;
        Ok(Self {
            num_seats: config.num_seats,
            forced_bets: config.forced_bets,
            players: vec![None; config.num_seats],
            dealer: None,
            button: 0,
            first_hand: true,
            hand_count: 0,
            seed: config.seed,
            hand_seed: None,
            last_hand: None,
        })
    }

    pub fn num_seats(&self) -> usize {
        self.num_seats
    }

    pub fn forced_bets(&self) -> ForcedBets {
        self.forced_bets
    }

    pub fn set_forced_bets(&mut self, forced_bets: ForcedBets) -> Result<(), GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        forced_bets.validate()?;
        self.forced_bets = forced_bets;
        Ok(())
    }

    /// Persistent seats. During a hand these hold the chips players owned
    /// when it started.
    pub fn seats(&self) -> &[Option<Player>] {
        &self.players
    }

    /// Hand-scoped seats of the running hand.
    pub fn hand_seats(&self) -> Option<&[Seat]> {
        self.dealer.as_ref().map(Dealer::seats)
    }

    pub fn sit_down(&mut self, seat: usize, buy_in: Chips) -> Result<(), GameError> {
        self.check_seat(seat)?;
        if buy_in == 0 {
            return Err(GameError::InvalidBuyIn);
        }
        if self.players[seat].is_some() {
            return Err(GameError::SeatOccupied(seat));
        }
        // Every pot and ledger sum is bounded by the table total.
        if self.chips_in_play().checked_add(buy_in).is_none() {
            return Err(GameError::TableChipLimit {
                buy_in,
                max: Chips::MAX,
            });
        }
        self.players[seat] = Some(Player::new(buy_in));
        info!(seat, buy_in, "player sat down");
        Ok(())
    }

    /// Removes the player and returns their chips. Players in the running
    /// hand have to wait for showdown.
    pub fn stand_up(&mut self, seat: usize) -> Result<Chips, GameError> {
        self.check_seat(seat)?;
        if self.in_current_hand(seat) {
            return Err(GameError::SeatInHand(seat));
        }
        let player = self.players[seat].take().ok_or(GameError::SeatEmpty(seat))?;
        info!(seat, chips = player.total_chips(), "player stood up");
        Ok(player.total_chips())
    }

    pub fn button(&self) -> usize {
        self.button
    }

    pub fn hand_count(&self) -> u64 {
        self.hand_count
    }

    pub fn hand_in_progress(&self) -> bool {
        self.dealer.as_ref().is_some_and(Dealer::hand_in_progress)
    }

    pub fn betting_round_in_progress(&self) -> bool {
        self.dealer
            .as_ref()
            .is_some_and(Dealer::betting_round_in_progress)
    }

    pub fn betting_rounds_completed(&self) -> bool {
        self.dealer
            .as_ref()
            .is_some_and(Dealer::betting_rounds_completed)
    }

    pub fn street(&self) -> Option<Street> {
        self.dealer.as_ref().map(Dealer::street)
    }

    /// Starts a hand with a deck shuffled from the table seed (or a fresh
    /// random seed for unseeded tables).
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        let seed = match self.seed {
            Some(base) => base.wrapping_add(self.hand_count),
            None => rand::random(),
        };
        self.start(Deck::new_with_seed(seed), Some(seed))
    }

    /// Starts a hand dealt from `deck` as is.
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        self.start(deck, None)
    }

    fn start(&mut self, deck: Deck, seed: Option<u64>) -> Result<(), GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let eligible: Vec<bool> = self
            .players
            .iter()
            .map(|p| p.is_some_and(|p| p.total_chips() > 0))
            .collect();
        let num_players = eligible.iter().filter(|&&e| e).count();
        if num_players < 2 {
            return Err(GameError::NotEnoughPlayers(num_players));
        }

        let button = self.next_button(&eligible);
        let seats: Vec<Seat> = self
            .players
            .iter()
            .zip(&eligible)
            .map(|(player, &eligible)| match player {
                Some(p) if eligible => Seat::Seated(Player::new(p.total_chips())),
                _ => Seat::Empty,
            })
            .collect();

        let mut dealer = Dealer::new(seats, button, self.forced_bets, deck);
        dealer.start_hand()?;

        self.button = button;
        self.first_hand = false;
        self.hand_count += 1;
        self.hand_seed = seed;
        self.dealer = Some(dealer);
        debug!(hand = self.hand_count, ?seed, "dealer ready");
        Ok(())
    }

    // The first hand puts the button on the first seat that can play; after
    // that it moves to the next such seat clockwise.
    fn next_button(&self, eligible: &[bool]) -> usize {
        let start = if self.first_hand {
            self.button
        } else {
            self.button + 1
        };
        (0..self.num_seats)
            .map(|k| (start + k) % self.num_seats)
            .find(|&s| eligible[s])
            .unwrap_or(self.button)
    }

    pub fn player_to_act(&self) -> Result<usize, GameError> {
        self.dealer()?.player_to_act()
    }

    pub fn legal_actions(&self) -> Result<LegalActions, GameError> {
        self.dealer()?.legal_actions()
    }

    pub fn action_request(&self) -> Result<ActionRequest, GameError> {
        self.dealer()?.action_request()
    }

    pub fn action_taken(&mut self, action: PlayerAction) -> Result<(), GameError> {
        self.dealer_mut()?.action_taken(action)
    }

    pub fn end_betting_round(&mut self) -> Result<(), GameError> {
        self.dealer_mut()?.end_betting_round()
    }

    /// Settles the hand, writes chip totals back to the persistent seats and
    /// drops the dealer. The outcome stays available via [`Table::last_hand`].
    pub fn showdown(&mut self) -> Result<&[PotResolution], GameError> {
        self.dealer_mut()?.showdown()?;
        let dealer = self.dealer.take().ok_or(GameError::NoHandInProgress)?;

        for (index, seat) in dealer.seats().iter().enumerate() {
            if let Some(player) = seat.occupant() {
                self.players[index] = Some(Player::new(player.total_chips()));
            }
        }

        let date = Utc::now().format("%Y%m%d").to_string();
        let record = HandRecord {
            hand_id: format_hand_id(&date, self.hand_count),
            seed: self.hand_seed,
            button: dealer.button(),
            actions: dealer.actions().to_vec(),
            board: dealer.community_cards().to_vec(),
            results: dealer.winners().to_vec(),
            ts: None,
        };
        info!(hand = %record.hand_id, pots = record.results.len(), "hand finished");
        let record = self.last_hand.insert(record);
        Ok(&record.results)
    }

    pub fn last_hand(&self) -> Option<&HandRecord> {
        self.last_hand.as_ref()
    }

    pub fn biggest_bet(&self) -> Chips {
        self.dealer.as_ref().map_or(0, Dealer::biggest_bet)
    }

    pub fn community_cards(&self) -> &[Card] {
        match &self.dealer {
            Some(dealer) => dealer.community_cards(),
            None => &[],
        }
    }

    pub fn hole_cards(&self) -> &[Option<[Card; 2]>] {
        match &self.dealer {
            Some(dealer) => dealer.hole_cards(),
            None => &[],
        }
    }

    pub fn pots(&self) -> &[Pot] {
        match &self.dealer {
            Some(dealer) => dealer.pots(),
            None => &[],
        }
    }

    /// All chips at the table: the running hand plus players sitting it out.
    pub fn chips_in_play(&self) -> Chips {
        let waiting: Chips = self
            .players
            .iter()
            .enumerate()
            .filter(|&(seat, _)| !self.in_current_hand(seat))
            .filter_map(|(_, p)| p.map(|p| p.total_chips()))
            .sum();
        waiting + self.dealer.as_ref().map_or(0, Dealer::chips_in_play)
    }

    fn in_current_hand(&self, seat: usize) -> bool {
        self.dealer
            .as_ref()
            .is_some_and(|d| d.seats()[seat].occupant().is_some())
    }

    fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat >= self.num_seats {
            return Err(GameError::SeatOutOfRange {
                seat,
                num_seats: self.num_seats,
            });
        }
        Ok(())
    }

    fn dealer(&self) -> Result<&Dealer, GameError> {
        self.dealer.as_ref().ok_or(GameError::NoHandInProgress)
    }

    fn dealer_mut(&mut self) -> Result<&mut Dealer, GameError> {
        self.dealer.as_mut().ok_or(GameError::NoHandInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[(usize, Chips)]) -> Table {
        let mut t = Table::new(6, ForcedBets::blinds(5, 10)).unwrap();
        for &(seat, chips) in stacks {
            t.sit_down(seat, chips).unwrap();
        }
        t
    }

    #[test]
    fn seat_count_is_bounded() {
        assert!(matches!(
            Table::new(1, ForcedBets::blinds(1, 2)),
            Err(GameError::InvalidSeatCount { actual: 1, .. })
        ));
        assert!(Table::new(MAX_SEATS + 1, ForcedBets::blinds(1, 2)).is_err());
        assert!(Table::new(MAX_SEATS, ForcedBets::blinds(1, 2)).is_ok());
    }

    #[test]
    fn sit_down_rejects_bad_requests() {
        let mut t = table(&[(0, 100)]);
        assert_eq!(t.sit_down(0, 50), Err(GameError::SeatOccupied(0)));
        assert_eq!(
            t.sit_down(6, 50),
            Err(GameError::SeatOutOfRange {
                seat: 6,
                num_seats: 6
            })
        );
        assert_eq!(t.sit_down(1, 0), Err(GameError::InvalidBuyIn));
        assert_eq!(t.stand_up(2), Err(GameError::SeatEmpty(2)));
        assert_eq!(t.stand_up(0), Ok(100));
    }

    #[test]
    fn start_hand_needs_two_players() {
        let mut t = table(&[(3, 100)]);
        assert_eq!(t.start_hand(), Err(GameError::NotEnoughPlayers(1)));
        assert_eq!(t.hand_count(), 0);
    }

    #[test]
    fn no_blind_change_mid_hand() {
        let mut t = table(&[(0, 100), (1, 100)]);
        t.start_hand().unwrap();
        assert_eq!(
            t.set_forced_bets(ForcedBets::blinds(10, 20)),
            Err(GameError::HandInProgress)
        );
        assert_eq!(t.start_hand(), Err(GameError::HandInProgress));
        assert_eq!(t.stand_up(0), Err(GameError::SeatInHand(0)));
    }

    #[test]
    fn button_moves_to_next_occupied_seat() {
        let mut t = table(&[(1, 100), (3, 100), (4, 100)]);
        let mut buttons = Vec::new();
        for _ in 0..4 {
            t.start_hand().unwrap();
            buttons.push(t.button());
            while !t.betting_rounds_completed() {
                while t.betting_round_in_progress() {
                    t.action_taken(PlayerAction::Fold).unwrap();
                }
                t.end_betting_round().unwrap();
            }
            t.showdown().unwrap();
        }
        assert_eq!(buttons, vec![1, 3, 4, 1]);
        assert_eq!(t.chips_in_play(), 300);
    }
}
