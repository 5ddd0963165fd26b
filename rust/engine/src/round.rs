//! Turn order for one street, independent of chips.

/// What the acting seat did, as far as turn order is concerned.
///
/// Passive and aggressive actions are mutually exclusive; either can also
/// take the seat out of the rotation (`leave`), which happens when a player
/// goes all-in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundAction {
    /// Fold: the seat leaves without contesting.
    Leave,
    /// Check or call.
    Passive { leave: bool },
    /// Bet or raise.
    Aggressive { leave: bool },
}

impl RoundAction {
    pub fn leaves(self) -> bool {
        match self {
            RoundAction::Leave => true,
            RoundAction::Passive { leave } | RoundAction::Aggressive { leave } => leave,
        }
    }
}

/// Rotates action around the active seats until it comes back to the last
/// aggressor with no further raise.
#[derive(Debug, Clone)]
pub struct Round {
    active_players: Vec<bool>,
    player_to_act: usize,
    last_aggressive_actor: usize,
    contested: bool,
    first_action: bool,
    num_active_players: usize,
}

impl Round {
    /// `first_to_act` opens the street. When that seat is not active the
    /// action starts at the next active seat, but the street still closes
    /// when the rotation gets back to `first_to_act`.
    pub fn new(active_players: Vec<bool>, first_to_act: usize) -> Self {
        assert!(
            first_to_act < active_players.len(),
            "first to act {} is out of range for {} seats",
            first_to_act,
            active_players.len()
        );
        let num_active_players = active_players.iter().filter(|&&a| a).count();
        let mut round = Self {
            active_players,
            player_to_act: first_to_act,
            last_aggressive_actor: first_to_act,
            contested: false,
            first_action: true,
            num_active_players,
        };
        if !round.active_players[first_to_act] && num_active_players > 0 {
            round.increment_player();
        }
        round
    }

    pub fn active_players(&self) -> &[bool] {
        &self.active_players
    }

    pub fn player_to_act(&self) -> usize {
        assert!(self.in_progress(), "round is not in progress");
        self.player_to_act
    }

    pub fn last_aggressive_actor(&self) -> usize {
        self.last_aggressive_actor
    }

    pub fn num_active_players(&self) -> usize {
        self.num_active_players
    }

    pub fn in_progress(&self) -> bool {
        (self.contested || self.num_active_players > 1)
            && (self.first_action || self.player_to_act != self.last_aggressive_actor)
    }

    pub fn action_taken(&mut self, action: RoundAction) {
        assert!(self.in_progress(), "action taken on a closed round");
        self.first_action = false;

        match action {
            RoundAction::Aggressive { .. } => {
                self.last_aggressive_actor = self.player_to_act;
                self.contested = true;
            }
            RoundAction::Passive { .. } => self.contested = true,
            RoundAction::Leave => {}
        }

        if action.leaves() {
            self.active_players[self.player_to_act] = false;
            self.num_active_players -= 1;
        }

        self.increment_player();
    }

    // Stops early on the last aggressor even if that seat has left: the street
    // is over once the rotation returns there.
    fn increment_player(&mut self) {
        loop {
            self.player_to_act = (self.player_to_act + 1) % self.active_players.len();
            if self.player_to_act == self.last_aggressive_actor
                || self.active_players[self.player_to_act]
            {
                break;
            }
        }
    }
}
