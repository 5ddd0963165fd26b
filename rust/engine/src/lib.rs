//! # holdem-engine: Texas Hold'em Table Engine
//!
//! A deterministic, single-threaded hold'em engine for 2 to 23 seats. It deals,
//! enforces turn order and bet legality, builds side pots for unequal all-ins
//! and ranks hands at showdown. Decisions come from outside: the caller asks
//! who is to act, feeds back one action at a time and advances the streets.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text form
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`community`] - The shared board
//! - [`player`] - Chip ledger, seats and player actions
//! - [`hand`] - Best five out of seven hand evaluation
//! - [`round`] - Turn order for a single street
//! - [`betting`] - Bet and raise rules on top of a round
//! - [`pot`] - Main pot and side pot accounting
//! - [`dealer`] - One hand from blinds to showdown
//! - [`table`] - Seats, button rotation and consecutive hands
//! - [`rules`] - Action request/response contract and normalization
//! - [`logger`] - Hand history records written as JSONL
//! - [`errors`] - Error types for table and dealer operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::dealer::ForcedBets;
//! use holdem_engine::player::PlayerAction;
//! use holdem_engine::table::Table;
//!
//! let mut table = Table::new(6, ForcedBets::blinds(5, 10)).unwrap();
//! table.sit_down(0, 1_000).unwrap();
//! table.sit_down(3, 1_000).unwrap();
//!
//! table.start_hand().unwrap();
//! while !table.betting_rounds_completed() {
//!     while table.betting_round_in_progress() {
//!         let legal = table.legal_actions().unwrap();
//!         let action = if legal.actions.contains(&holdem_engine::player::ActionKind::Check) {
//!             PlayerAction::Check
//!         } else {
//!             PlayerAction::Call
//!         };
//!         table.action_taken(action).unwrap();
//!     }
//!     table.end_betting_round().unwrap();
//! }
//! let results = table.showdown().unwrap();
//! assert!(!results.is_empty());
//! assert_eq!(table.chips_in_play(), 2_000);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.draw_n(5).unwrap(), deck2.draw_n(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod community;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod round;
pub mod rules;
pub mod table;
