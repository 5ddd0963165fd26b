//! One hand of hold'em from blinds to showdown.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::betting::{BettingAction, BettingRound, RaiseRange};
use crate::cards::Card;
use crate::community::CommunityCards;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_best, HandStrength};
use crate::logger::ActionRecord;
use crate::player::{ActionKind, Chips, PlayerAction, Seat};
use crate::pot::{Pot, PotManager};
use crate::rules::ActionRequest;

/// Betting street. The discriminant is the number of community cards dealt
/// once the street is reached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop = 0,
    Flop = 3,
    Turn = 4,
    River = 5,
}

impl Street {
    pub fn card_count(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

/// Ante and blinds. Each is capped at the paying player's chips.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct ForcedBets {
    #[serde(default)]
    pub ante: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl ForcedBets {
    pub fn blinds(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            ante: 0,
            small_blind,
            big_blind,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 {
            return Err(GameError::InvalidForcedBets(
                "big blind must be positive".into(),
            ));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidForcedBets(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        Ok(())
    }
}

/// What the player to act may do. `chip_range` bounds bets and raises (as the
/// street total) and is present whenever `Bet` or `Raise` is offered.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegalActions {
    pub actions: Vec<ActionKind>,
    pub chip_range: Option<RaiseRange>,
}

impl LegalActions {
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    /// Checks an action against the offer, amounts included.
    pub fn validate(&self, action: PlayerAction) -> Result<(), GameError> {
        if !self.contains(action.kind()) {
            return Err(GameError::IllegalAction(action));
        }
        match (action, self.chip_range) {
            (PlayerAction::Bet(amount) | PlayerAction::Raise(amount), Some(range))
                if !range.contains(amount) =>
            {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: range.min,
                    maximum: range.max,
                })
            }
            _ => Ok(()),
        }
    }
}

/// A seat that won (part of) a pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub seat: usize,
    pub hole_cards: [Card; 2],
    pub score: HandStrength,
    pub best_cards: Vec<Card>,
    pub share: Chips,
}

/// How one pot was awarded.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotResolution {
    pub pot: Pot,
    pub winners: Vec<Winner>,
}

/// Drives a single hand. Owns the hand-scoped copies of the players; the
/// [`crate::table::Table`] reads them back after showdown.
#[derive(Debug)]
pub struct Dealer {
    seats: Vec<Seat>,
    button: usize,
    forced_bets: ForcedBets,
    deck: Deck,
    community_cards: CommunityCards,
    hole_cards: Vec<Option<[Card; 2]>>,
    betting_round: Option<BettingRound>,
    street: Street,
    pot_manager: PotManager,
    hand_in_progress: bool,
    betting_rounds_completed: bool,
    winners: Vec<PotResolution>,
    actions: Vec<ActionRecord>,
}

impl Dealer {
    pub fn new(seats: Vec<Seat>, button: usize, forced_bets: ForcedBets, deck: Deck) -> Self {
        assert!(
            button < seats.len(),
            "button {} is out of range for {} seats",
            button,
            seats.len()
        );
        let num_seats = seats.len();
        Self {
            seats,
            button,
            forced_bets,
            deck,
            community_cards: CommunityCards::new(),
            hole_cards: vec![None; num_seats],
            betting_round: None,
            street: Street::Preflop,
            pot_manager: PotManager::new(),
            hand_in_progress: false,
            betting_rounds_completed: false,
            winners: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn button(&self) -> usize {
        self.button
    }

    pub fn forced_bets(&self) -> ForcedBets {
        self.forced_bets
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn hand_in_progress(&self) -> bool {
        self.hand_in_progress
    }

    pub fn betting_round_in_progress(&self) -> bool {
        self.betting_round
            .as_ref()
            .is_some_and(BettingRound::in_progress)
    }

    pub fn betting_rounds_completed(&self) -> bool {
        self.betting_rounds_completed
    }

    pub fn community_cards(&self) -> &[Card] {
        self.community_cards.cards()
    }

    pub fn hole_cards(&self) -> &[Option<[Card; 2]>] {
        &self.hole_cards
    }

    pub fn pots(&self) -> &[Pot] {
        self.pot_manager.pots()
    }

    pub fn winners(&self) -> &[PotResolution] {
        &self.winners
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Largest street bet, 0 between streets.
    pub fn biggest_bet(&self) -> Chips {
        self.betting_round
            .as_ref()
            .map_or(0, BettingRound::biggest_bet)
    }

    pub fn min_raise(&self) -> Chips {
        self.betting_round
            .as_ref()
            .map_or(self.forced_bets.big_blind, BettingRound::min_raise)
    }

    /// Every chip belonging to the hand: pots, unswept folded bets and all
    /// player ledgers (bets included). Constant from `start_hand` on; after
    /// showdown the pots have been paid out to the ledgers.
    pub fn chips_in_play(&self) -> Chips {
        let players: Chips = self
            .seats
            .iter()
            .filter_map(Seat::occupant)
            .map(|p| p.total_chips())
            .sum();
        let pots = if self.hand_in_progress {
            self.pot_manager.total()
        } else {
            0
        };
        players + pots
    }

    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.hand_in_progress {
            return Err(GameError::HandInProgress);
        }
        let num_players = self.seats.iter().filter(|s| s.is_active()).count();
        if num_players < 2 {
            return Err(GameError::NotEnoughPlayers(num_players));
        }
        if !self.seats[self.button].is_active() {
            return Err(GameError::SeatEmpty(self.button));
        }

        self.betting_rounds_completed = false;
        self.street = Street::Preflop;
        self.winners.clear();
        self.actions.clear();

        self.collect_ante();
        let big_blind_seat = self.post_blinds(num_players);
        let first_action = self.next_or_wrap(big_blind_seat);
        self.deal_hole_cards()?;

        let with_chips = self
            .seats
            .iter()
            .filter_map(Seat::active)
            .filter(|p| p.stack() != 0)
            .count();
        self.betting_round = if with_chips > 1 {
            let big_blind = self.forced_bets.big_blind;
            Some(BettingRound::new(
                &self.seats,
                first_action,
                big_blind,
                big_blind,
            ))
        } else {
            None
        };
        self.hand_in_progress = true;

        info!(
            button = self.button,
            players = num_players,
            big_blind_seat,
            first_action,
            "hand started"
        );
        Ok(())
    }

    pub fn player_to_act(&self) -> Result<usize, GameError> {
        match &self.betting_round {
            Some(round) if round.in_progress() => Ok(round.player_to_act()),
            _ => Err(GameError::NoBettingRound),
        }
    }

    /// Splits the betting round's match/raise into check/call and bet/raise
    /// for the player to act. Folding is always offered.
    pub fn legal_actions(&self) -> Result<LegalActions, GameError> {
        let seat = self.player_to_act()?;
        let round = self.betting_round.as_ref().ok_or(GameError::NoBettingRound)?;
        let bet_size = self.seats[seat].active().map_or(0, |p| p.bet_size());
        let chip_range = round.legal_actions(&self.seats);

        let mut actions = vec![ActionKind::Fold];
        if round.biggest_bet().saturating_sub(bet_size) == 0 {
            actions.push(ActionKind::Check);
            if chip_range.is_some() {
                // Only the big blind can check while already having a bet.
                actions.push(if bet_size > 0 {
                    ActionKind::Raise
                } else {
                    ActionKind::Bet
                });
            }
        } else {
            actions.push(ActionKind::Call);
            if chip_range.is_some() {
                actions.push(ActionKind::Raise);
            }
        }
        Ok(LegalActions {
            actions,
            chip_range,
        })
    }

    pub fn action_taken(&mut self, action: PlayerAction) -> Result<(), GameError> {
        if !self.hand_in_progress {
            return Err(GameError::NoHandInProgress);
        }
        let seat = self.player_to_act()?;
        if let Err(e) = self.legal_actions()?.validate(action) {
            warn!(seat, ?action, error = %e, "rejected action");
            return Err(e);
        }

        let round = self.betting_round.as_mut().ok_or(GameError::NoBettingRound)?;
        match action {
            PlayerAction::Check | PlayerAction::Call => {
                round.action_taken(&mut self.seats, BettingAction::Match)
            }
            PlayerAction::Bet(amount) | PlayerAction::Raise(amount) => {
                round.action_taken(&mut self.seats, BettingAction::Raise(amount))
            }
            PlayerAction::Fold => {
                if let Some(player) = self.seats[seat].active_mut() {
                    let bet = player.bet_size();
                    self.pot_manager.bet_folded(bet);
                    player.take_from_bet(bet);
                }
                self.seats[seat].fold();
                round.action_taken(&mut self.seats, BettingAction::Leave);
            }
        }

        debug!(seat, ?action, street = ?self.street, "action taken");
        self.actions.push(ActionRecord {
            seat,
            street: self.street,
            action,
        });
        Ok(())
    }

    pub fn end_betting_round(&mut self) -> Result<(), GameError> {
        if !self.hand_in_progress {
            return Err(GameError::NoHandInProgress);
        }
        if self.betting_rounds_completed {
            return Err(GameError::BettingRoundsCompleted);
        }
        if self.betting_round_in_progress() {
            return Err(GameError::BettingRoundInProgress);
        }

        self.pot_manager.collect_bets_from(&mut self.seats);

        let num_active = self
            .betting_round
            .as_ref()
            .map_or(0, BettingRound::num_active_players);
        if num_active <= 1 {
            self.street = Street::River;
            let pots = self.pot_manager.pots();
            let uncontested = pots.len() == 1 && pots[0].eligible_players().len() == 1;
            if !uncontested {
                self.deal_community_cards()?;
            }
            self.betting_round = None;
            self.betting_rounds_completed = true;
            debug!(uncontested, "no further betting possible");
        } else if let Some(next) = self.street.next() {
            self.street = next;
            self.deal_community_cards()?;
            let first_action = self.next_or_wrap(self.button);
            self.betting_round = Some(BettingRound::new(
                &self.seats,
                first_action,
                self.forced_bets.big_blind,
                0,
            ));
            info!(street = ?self.street, board = ?self.community_cards.cards(), "street dealt");
        } else {
            self.betting_round = None;
            self.betting_rounds_completed = true;
        }
        Ok(())
    }

    pub fn showdown(&mut self) -> Result<(), GameError> {
        if !self.hand_in_progress {
            return Err(GameError::NoHandInProgress);
        }
        if !self.betting_rounds_completed {
            return Err(GameError::BettingRoundsNotCompleted);
        }
        debug_assert_eq!(self.street, Street::River);
        self.hand_in_progress = false;
        self.winners.clear();

        let pots = self.pot_manager.pots().to_vec();
        if pots.len() == 1 && pots[0].eligible_players().len() == 1 {
            let seat = pots[0].eligible_players()[0];
            let size = pots[0].size();
            self.award(seat, size);
            let winner = self.winner(seat, size);
            info!(seat, amount = size, "pot awarded uncontested");
            self.winners.push(PotResolution {
                pot: pots[0].clone(),
                winners: winner.into_iter().collect(),
            });
            return Ok(());
        }

        for pot in pots {
            let resolution = self.resolve_pot(pot);
            self.winners.push(resolution);
        }
        Ok(())
    }

    /// Builds the request sent to the player to act.
    pub fn action_request(&self) -> Result<ActionRequest, GameError> {
        let seat = self.player_to_act()?;
        let legal = self.legal_actions()?;
        let player = self.seats[seat].active().ok_or(GameError::SeatEmpty(seat))?;
        let hole_cards = self.hole_cards[seat].ok_or(GameError::SeatEmpty(seat))?;
        let bets: Chips = self
            .seats
            .iter()
            .filter_map(Seat::occupant)
            .map(|p| p.bet_size())
            .sum();
        Ok(ActionRequest {
            seat,
            betting_round: self.street,
            community_cards: self.community_cards.cards().to_vec(),
            hole_cards,
            pot: self.pot_manager.total() + bets,
            minimum_raise: legal.chip_range.map_or(0, |r| r.min),
            current_bet: self.biggest_bet(),
            player_bet: player.bet_size(),
            player_stack: player.stack(),
            legal_actions: legal.actions,
        })
    }

    fn resolve_pot(&mut self, pot: Pot) -> PotResolution {
        let contenders: Vec<(usize, HandStrength)> = pot
            .eligible_players()
            .iter()
            .copied()
            .filter(|&s| self.seats[s].is_active())
            .map(|s| (s, self.evaluate(s).0))
            .collect();
        assert!(!contenders.is_empty(), "pot of {} has no contenders", pot.size());

        let best = contenders
            .iter()
            .map(|(_, strength)| strength)
            .max()
            .cloned()
            .unwrap_or_else(|| contenders[0].1.clone());
        let winning_seats: Vec<usize> = contenders
            .iter()
            .filter(|(_, strength)| *strength == best)
            .map(|&(s, _)| s)
            .collect();

        let shares = split_pot(pot.size(), &winning_seats, self.button, self.seats.len());
        let mut winners = Vec::with_capacity(shares.len());
        for (seat, share) in shares {
            self.award(seat, share);
            winners.extend(self.winner(seat, share));
        }
        info!(
            size = pot.size(),
            winners = ?winning_seats,
            category = ?best.category,
            "pot resolved"
        );
        PotResolution { pot, winners }
    }

    fn award(&mut self, seat: usize, amount: Chips) {
        match self.seats[seat].active_mut() {
            Some(player) => player.add_to_stack(amount),
            None => panic!("cannot award {} to seat {} not in the hand", amount, seat),
        }
    }

    fn evaluate(&self, seat: usize) -> (HandStrength, Vec<Card>) {
        let mut cards: Vec<Card> = self.hole_cards[seat].map(Vec::from).unwrap_or_default();
        cards.extend_from_slice(self.community_cards.cards());
        let best = evaluate_best(&cards);
        (best.strength, best.cards)
    }

    fn winner(&self, seat: usize, share: Chips) -> Option<Winner> {
        let hole_cards = self.hole_cards[seat]?;
        let (score, best_cards) = self.evaluate(seat);
        Some(Winner {
            seat,
            hole_cards,
            score,
            best_cards,
            share,
        })
    }

    fn collect_ante(&mut self) {
        let ante = self.forced_bets.ante;
        if ante == 0 {
            return;
        }
        let mut total = 0;
        for player in self.seats.iter_mut().filter_map(Seat::active_mut) {
            let paid = ante.min(player.total_chips());
            player.take_from_stack(paid);
            total += paid;
        }
        self.pot_manager.add_to_current(total);
    }

    /// Posts both blinds and returns the big blind's seat. Heads-up the button
    /// posts the small blind.
    fn post_blinds(&mut self, num_players: usize) -> usize {
        let mut seat = self.button;
        if num_players != 2 {
            seat = self.next_or_wrap(seat);
        }
        self.post_blind(seat, self.forced_bets.small_blind);
        seat = self.next_or_wrap(seat);
        self.post_blind(seat, self.forced_bets.big_blind);
        seat
    }

    fn post_blind(&mut self, seat: usize, blind: Chips) {
        if let Some(player) = self.seats[seat].active_mut() {
            player.bet(blind.min(player.total_chips()));
        }
    }

    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let seated: Vec<usize> = (0..self.seats.len())
            .filter(|&s| self.seats[s].is_active())
            .collect();
        let mut first = Vec::with_capacity(seated.len());
        for _ in &seated {
            first.push(self.deck.draw()?);
        }
        for (&seat, card) in seated.iter().zip(first) {
            self.hole_cards[seat] = Some([card, self.deck.draw()?]);
        }
        Ok(())
    }

    fn deal_community_cards(&mut self) -> Result<(), GameError> {
        let missing = self
            .street
            .card_count()
            .saturating_sub(self.community_cards.len());
        let cards = self.deck.draw_n(missing)?;
        self.community_cards.deal(&cards);
        Ok(())
    }

    /// Next seat clockwise that is still in the hand.
    fn next_or_wrap(&self, seat: usize) -> usize {
        let n = self.seats.len();
        let mut next = seat;
        for _ in 0..n {
            next = (next + 1) % n;
            if self.seats[next].is_active() {
                return next;
            }
        }
        seat
    }
}

/// Splits `size` evenly between `winners`. Odd chips go one at a time to the
/// winners in seat order starting left of the button.
pub fn split_pot(
    size: Chips,
    winners: &[usize],
    button: usize,
    num_seats: usize,
) -> Vec<(usize, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let count = winners.len() as Chips;
    let payout = size / count;
    let mut remainder = size % count;
    let mut shares: Vec<(usize, Chips)> = winners.iter().map(|&s| (s, payout)).collect();

    let mut seat = button;
    while remainder > 0 {
        seat = (seat + 1) % num_seats;
        if let Some(share) = shares.iter_mut().find(|(s, _)| *s == seat) {
            share.1 += 1;
            remainder -= 1;
        }
    }
    shares
}
