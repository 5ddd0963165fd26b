use serde::{Deserialize, Serialize};

use crate::player::{Chips, Player, Seat};
use crate::round::{Round, RoundAction};

/// Chip-level action. Check and call are both `Match`; bet and raise are both
/// `Raise` to the given street total.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BettingAction {
    Match,
    Raise(Chips),
    Leave,
}

/// Inclusive bounds for a bet or raise, expressed as the street total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RaiseRange {
    pub min: Chips,
    pub max: Chips,
}

impl RaiseRange {
    pub fn contains(&self, amount: Chips) -> bool {
        (self.min..=self.max).contains(&amount)
    }

    pub fn clamp(&self, amount: Chips) -> Chips {
        amount.clamp(self.min, self.max)
    }
}

/// One street of betting: a [`Round`] plus the chip rules on top of it.
#[derive(Debug, Clone)]
pub struct BettingRound {
    round: Round,
    biggest_bet: Chips,
    min_raise: Chips,
}

impl BettingRound {
    /// Seats that are seated with chips behind take part in the rotation.
    pub fn new(seats: &[Seat], first_to_act: usize, min_raise: Chips, biggest_bet: Chips) -> Self {
        let active = seats
            .iter()
            .map(|s| s.active().is_some_and(|p| p.stack() != 0))
            .collect();
        Self {
            round: Round::new(active, first_to_act),
            biggest_bet,
            min_raise,
        }
    }

    pub fn in_progress(&self) -> bool {
        self.round.in_progress()
    }

    pub fn player_to_act(&self) -> usize {
        self.round.player_to_act()
    }

    pub fn num_active_players(&self) -> usize {
        self.round.num_active_players()
    }

    pub fn active_players(&self) -> &[bool] {
        self.round.active_players()
    }

    pub fn biggest_bet(&self) -> Chips {
        self.biggest_bet
    }

    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    /// Raise bounds for the player to act, or `None` when they can only
    /// call or fold. A short all-in below the full minimum is allowed, so
    /// the lower bound is capped at the player's chips.
    pub fn legal_actions(&self, seats: &[Seat]) -> Option<RaiseRange> {
        let player = acting_player(seats, self.player_to_act());
        let player_chips = player.total_chips();
        if player_chips > self.biggest_bet {
            let min_bet = self.biggest_bet.saturating_add(self.min_raise);
            Some(RaiseRange {
                min: min_bet.min(player_chips),
                max: player_chips,
            })
        } else {
            None
        }
    }

    pub fn is_raise_valid(&self, seats: &[Seat], bet: Chips) -> bool {
        let player = acting_player(seats, self.player_to_act());
        let player_chips = player.stack() + player.bet_size();
        let min_bet = self.biggest_bet.saturating_add(self.min_raise);
        if player_chips > self.biggest_bet && player_chips < min_bet {
            return bet == player_chips;
        }
        bet >= min_bet && bet <= player_chips
    }

    pub fn action_taken(&mut self, seats: &mut [Seat], action: BettingAction) {
        let seat = self.player_to_act();
        let round_action = match action {
            BettingAction::Raise(bet) => {
                assert!(
                    self.is_raise_valid(seats, bet),
                    "invalid raise to {} from seat {}",
                    bet,
                    seat
                );
                let player = acting_player_mut(seats, seat);
                player.bet(bet);
                self.min_raise = bet - self.biggest_bet;
                self.biggest_bet = bet;
                RoundAction::Aggressive {
                    leave: player.stack() == 0,
                }
            }
            BettingAction::Match => {
                let biggest_bet = self.biggest_bet;
                let player = acting_player_mut(seats, seat);
                player.bet(biggest_bet.min(player.total_chips()));
                RoundAction::Passive {
                    leave: player.stack() == 0,
                }
            }
            BettingAction::Leave => RoundAction::Leave,
        };
        self.round.action_taken(round_action);
    }
}

fn acting_player(seats: &[Seat], seat: usize) -> &Player {
    match seats[seat].active() {
        Some(p) => p,
        None => panic!("seat {} is not in the hand", seat),
    }
}

fn acting_player_mut(seats: &mut [Seat], seat: usize) -> &mut Player {
    match seats[seat].active_mut() {
        Some(p) => p,
        None => panic!("seat {} is not in the hand", seat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(stacks: &[Chips]) -> Vec<Seat> {
        stacks.iter().map(|&s| Seat::Seated(Player::new(s))).collect()
    }

    #[test]
    fn raise_range_is_biggest_bet_plus_min_raise() {
        let s = seats(&[1000, 1000]);
        let round = BettingRound::new(&s, 0, 10, 10);
        assert_eq!(
            round.legal_actions(&s),
            Some(RaiseRange { min: 20, max: 1000 })
        );
    }

    #[test]
    fn short_stack_may_only_move_all_in() {
        let s = seats(&[15, 1000]);
        let round = BettingRound::new(&s, 0, 10, 10);
        assert_eq!(round.legal_actions(&s), Some(RaiseRange { min: 15, max: 15 }));
        assert!(round.is_raise_valid(&s, 15));
        assert!(!round.is_raise_valid(&s, 14));
    }

    #[test]
    fn stack_at_or_below_bet_cannot_raise() {
        let s = seats(&[10, 1000]);
        let round = BettingRound::new(&s, 0, 10, 10);
        assert_eq!(round.legal_actions(&s), None);
    }

    #[test]
    fn oversized_min_raise_leaves_only_all_in() {
        let s = seats(&[1000, 1000]);
        let round = BettingRound::new(&s, 0, Chips::MAX, 10);
        assert_eq!(
            round.legal_actions(&s),
            Some(RaiseRange { min: 1000, max: 1000 })
        );
        assert!(round.is_raise_valid(&s, 1000));
    }

    #[test]
    fn raise_updates_biggest_bet_and_min_raise() {
        let mut s = seats(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(&s, 0, 10, 0);
        round.action_taken(&mut s, BettingAction::Raise(30));
        assert_eq!(round.biggest_bet(), 30);
        assert_eq!(round.min_raise(), 30);
        round.action_taken(&mut s, BettingAction::Raise(100));
        assert_eq!(round.biggest_bet(), 100);
        assert_eq!(round.min_raise(), 70);
        assert_eq!(s[1].active().map(Player::bet_size), Some(100));
    }

    #[test]
    fn match_caps_at_total_chips_and_leaves_when_all_in() {
        let mut s = seats(&[1000, 40, 1000]);
        let mut round = BettingRound::new(&s, 0, 10, 0);
        round.action_taken(&mut s, BettingAction::Raise(100));
        round.action_taken(&mut s, BettingAction::Match);
        assert_eq!(s[1].active().map(Player::bet_size), Some(40));
        assert_eq!(round.num_active_players(), 2);
        assert_eq!(round.player_to_act(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid raise")]
    fn raise_below_minimum_panics() {
        let mut s = seats(&[1000, 1000]);
        let mut round = BettingRound::new(&s, 0, 10, 10);
        round.action_taken(&mut s, BettingAction::Raise(15));
    }
}
