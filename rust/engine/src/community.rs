use crate::cards::Card;

/// Shared board cards. Grows by 3 (flop), then 1 (turn), then 1 (river).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityCards {
    cards: Vec<Card>,
}

impl CommunityCards {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Reveals more cards. Panics if the board would exceed five cards.
    pub fn deal(&mut self, cards: &[Card]) {
        assert!(
            self.cards.len() + cards.len() <= 5,
            "cannot deal {} cards onto a board of {}",
            cards.len(),
            self.cards.len()
        );
        self.cards.extend_from_slice(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn board_grows_flop_turn_river() {
        let mut board = CommunityCards::new();
        board.deal(&parse_cards("2c 3d 4h").unwrap());
        assert_eq!(board.len(), 3);
        board.deal(&parse_cards("5s").unwrap());
        board.deal(&parse_cards("6c").unwrap());
        assert_eq!(board.cards().len(), 5);
    }

    #[test]
    #[should_panic(expected = "cannot deal")]
    fn sixth_card_is_rejected() {
        let mut board = CommunityCards::new();
        board.deal(&parse_cards("2c 3d 4h 5s 6c").unwrap());
        board.deal(&parse_cards("7c").unwrap());
    }
}
