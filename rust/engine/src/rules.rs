//! Request/response contract between the engine and whoever decides for a seat.

use serde::{Deserialize, Serialize};

use crate::betting::RaiseRange;
use crate::cards::Card;
use crate::dealer::{LegalActions, Street};
use crate::player::{ActionKind, Chips, PlayerAction};

/// Everything a decision maker sees before acting.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub seat: usize,
    pub betting_round: Street,
    pub community_cards: Vec<Card>,
    pub hole_cards: [Card; 2],
    /// Pots plus every bet currently on the table.
    pub pot: Chips,
    /// Smallest street total a bet or raise may be, 0 when raising is closed.
    pub minimum_raise: Chips,
    pub current_bet: Chips,
    pub player_bet: Chips,
    pub player_stack: Chips,
    pub legal_actions: Vec<ActionKind>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    #[serde(rename = "all-in")]
    AllIn,
}

/// A decision as sent back by an outside player. Not trusted: run it through
/// [`normalize_response`] before handing it to the dealer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: ResponseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Chips>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn new(action: ResponseKind, amount: Option<Chips>) -> Self {
        Self {
            action,
            amount,
            message: None,
        }
    }
}

/// Maps a response onto an action that is legal for the offer.
///
/// The result always passes [`LegalActions::validate`]:
/// - `all-in` becomes a bet or raise to the top of the range, or a call when
///   raising is closed
/// - bet and raise amounts are clamped into the range (a missing amount is
///   the minimum)
/// - `check` facing a bet becomes `fold`
/// - `call` with nothing to call becomes `check`
/// - a bet or raise that is not offered degrades to call, then check
///
/// # Examples
///
/// ```
/// use holdem_engine::betting::RaiseRange;
/// use holdem_engine::dealer::LegalActions;
/// use holdem_engine::player::{ActionKind, PlayerAction};
/// use holdem_engine::rules::{normalize_response, ActionResponse, ResponseKind};
///
/// let legal = LegalActions {
///     actions: vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
///     chip_range: Some(RaiseRange { min: 40, max: 500 }),
/// };
///
/// let shove = ActionResponse::new(ResponseKind::AllIn, None);
/// assert_eq!(normalize_response(&shove, &legal), PlayerAction::Raise(500));
///
/// let tiny = ActionResponse::new(ResponseKind::Raise, Some(25));
/// assert_eq!(normalize_response(&tiny, &legal), PlayerAction::Raise(40));
///
/// let check = ActionResponse::new(ResponseKind::Check, None);
/// assert_eq!(normalize_response(&check, &legal), PlayerAction::Fold);
/// ```
pub fn normalize_response(response: &ActionResponse, legal: &LegalActions) -> PlayerAction {
    match response.action {
        ResponseKind::Fold => PlayerAction::Fold,
        ResponseKind::Check => {
            if legal.contains(ActionKind::Check) {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            }
        }
        ResponseKind::Call => passive(legal),
        ResponseKind::Bet | ResponseKind::Raise => {
            aggressive(legal, |range| range.clamp(response.amount.unwrap_or(range.min)))
                .unwrap_or_else(|| passive(legal))
        }
        ResponseKind::AllIn => aggressive(legal, |range| range.max).unwrap_or_else(|| passive(legal)),
    }
}

fn passive(legal: &LegalActions) -> PlayerAction {
    if legal.contains(ActionKind::Call) {
        PlayerAction::Call
    } else if legal.contains(ActionKind::Check) {
        PlayerAction::Check
    } else {
        PlayerAction::Fold
    }
}

// Bet and raise are never offered together, so the kind follows the offer
// rather than the response.
fn aggressive(
    legal: &LegalActions,
    amount: impl FnOnce(&RaiseRange) -> Chips,
) -> Option<PlayerAction> {
    let range = legal.chip_range?;
    if legal.contains(ActionKind::Bet) {
        Some(PlayerAction::Bet(amount(&range)))
    } else if legal.contains(ActionKind::Raise) {
        Some(PlayerAction::Raise(amount(&range)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unopened() -> LegalActions {
        LegalActions {
            actions: vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet],
            chip_range: Some(RaiseRange { min: 10, max: 200 }),
        }
    }

    fn facing_all_in() -> LegalActions {
        LegalActions {
            actions: vec![ActionKind::Fold, ActionKind::Call],
            chip_range: None,
        }
    }

    #[test]
    fn call_with_nothing_to_call_checks() {
        let r = ActionResponse::new(ResponseKind::Call, None);
        assert_eq!(normalize_response(&r, &unopened()), PlayerAction::Check);
    }

    #[test]
    fn raise_when_unopened_becomes_bet() {
        let r = ActionResponse::new(ResponseKind::Raise, Some(1_000));
        assert_eq!(normalize_response(&r, &unopened()), PlayerAction::Bet(200));
    }

    #[test]
    fn all_in_without_raise_capacity_calls() {
        let r = ActionResponse::new(ResponseKind::AllIn, None);
        assert_eq!(normalize_response(&r, &facing_all_in()), PlayerAction::Call);
        let r = ActionResponse::new(ResponseKind::Bet, Some(50));
        assert_eq!(normalize_response(&r, &facing_all_in()), PlayerAction::Call);
    }

    #[test]
    fn normalized_actions_are_legal() {
        let kinds = [
            ResponseKind::Fold,
            ResponseKind::Check,
            ResponseKind::Call,
            ResponseKind::Bet,
            ResponseKind::Raise,
            ResponseKind::AllIn,
        ];
        for legal in [unopened(), facing_all_in()] {
            for kind in kinds {
                for amount in [None, Some(0), Some(15), Some(10_000)] {
                    let action = normalize_response(&ActionResponse::new(kind, amount), &legal);
                    assert!(legal.validate(action).is_ok(), "{:?} -> {:?}", kind, action);
                }
            }
        }
    }

    #[test]
    fn response_wire_format() {
        let r: ActionResponse =
            serde_json::from_str(r#"{"action":"all-in","message":"gl"}"#).unwrap();
        assert_eq!(r.action, ResponseKind::AllIn);
        assert_eq!(r.amount, None);
        assert_eq!(r.message.as_deref(), Some("gl"));
    }
}
