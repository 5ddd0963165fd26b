use serde::{Deserialize, Serialize};

/// Chip amounts. Non-negative by construction.
pub type Chips = u32;

/// An action the player to act submits to the dealer.
/// `Bet` and `Raise` carry the total the player's street bet becomes ("raise to").
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if there is no bet to call)
    Check,
    /// Call the current bet, or as much of it as the stack allows
    Call,
    /// Open the betting on a street
    Bet(Chips),
    /// Raise the current bet
    Raise(Chips),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// Action kinds without amounts, as offered to the player to act.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// Per-hand chip ledger of a seated player.
///
/// `total_chips` counts everything the player still owns in this hand including
/// the chips pushed forward on the current street (`bet_size`). The behind
/// stack is derived: `stack = total_chips - bet_size`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    total_chips: Chips,
    bet_size: Chips,
}

impl Player {
    pub fn new(total_chips: Chips) -> Self {
        Self {
            total_chips,
            bet_size: 0,
        }
    }

    pub fn total_chips(&self) -> Chips {
        self.total_chips
    }

    pub fn bet_size(&self) -> Chips {
        self.bet_size
    }

    pub fn stack(&self) -> Chips {
        self.total_chips - self.bet_size
    }

    /// Sets the street bet to `amount`. Bets only grow within a street.
    pub fn bet(&mut self, amount: Chips) {
        assert!(
            amount <= self.total_chips,
            "bet {} exceeds total chips {}",
            amount,
            self.total_chips
        );
        assert!(
            amount >= self.bet_size,
            "bet {} is below the current bet {}",
            amount,
            self.bet_size
        );
        self.bet_size = amount;
    }

    /// Moves `amount` out of the street bet and out of the player's ownership.
    pub fn take_from_bet(&mut self, amount: Chips) {
        assert!(
            amount <= self.bet_size,
            "cannot take {} from a bet of {}",
            amount,
            self.bet_size
        );
        self.total_chips -= amount;
        self.bet_size -= amount;
    }

    pub fn take_from_stack(&mut self, amount: Chips) {
        assert!(
            amount <= self.stack(),
            "cannot take {} from a stack of {}",
            amount,
            self.stack()
        );
        self.total_chips -= amount;
    }

    pub fn add_to_stack(&mut self, amount: Chips) {
        self.total_chips += amount;
    }
}

/// One position at the table for the duration of a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Seat {
    #[default]
    Empty,
    /// Out of the hand. The ledger is kept so remaining chips survive the hand.
    Folded(Player),
    Seated(Player),
}

impl Seat {
    /// The player still contesting the hand, if any.
    pub fn active(&self) -> Option<&Player> {
        match self {
            Seat::Seated(p) => Some(p),
            _ => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut Player> {
        match self {
            Seat::Seated(p) => Some(p),
            _ => None,
        }
    }

    /// The ledger of whoever occupies the seat, folded or not.
    pub fn occupant(&self) -> Option<&Player> {
        match self {
            Seat::Seated(p) | Seat::Folded(p) => Some(p),
            Seat::Empty => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Seat::Seated(_))
    }

    pub fn fold(&mut self) {
        if let Seat::Seated(p) = *self {
            *self = Seat::Folded(p);
        }
    }
}
