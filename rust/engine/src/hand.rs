use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Score of a five card hand. Field order makes the derived `Ord` compare the
/// category first and then the tie-break vector element by element.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Best five card hand found among a player's cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestHand {
    pub strength: HandStrength,
    pub cards: Vec<Card>,
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Ranks the best hand out of up to seven cards by scoring every five card
/// combination. With five or fewer cards the cards are scored as they are.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_best, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// assert_eq!(evaluate_best(&cards).strength.category, Category::StraightFlush);
/// ```
pub fn evaluate_best(cards: &[Card]) -> BestHand {
    assert!(cards.len() <= 7, "cannot evaluate {} cards", cards.len());
    if cards.len() <= 5 {
        return BestHand {
            strength: score_five(cards),
            cards: cards.to_vec(),
        };
    }

    let mut best: Option<BestHand> = None;
    for combo in combinations(cards.len(), 5) {
        let hand: Vec<Card> = combo.iter().map(|&i| cards[i]).collect();
        let strength = score_five(&hand);
        let better = match &best {
            Some(b) => compare_hands(&strength, &b.strength).is_gt(),
            None => true,
        };
        if better {
            best = Some(BestHand {
                strength,
                cards: hand,
            });
        }
    }
    // n > 5 always yields at least one combination
    best.unwrap_or_else(|| BestHand {
        strength: score_five(&cards[..5]),
        cards: cards[..5].to_vec(),
    })
}

/// Scores exactly the given cards (at most five). Straights and flushes need
/// all five cards.
pub fn score_five(cards: &[Card]) -> HandStrength {
    debug_assert!(cards.len() <= 5);
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[rank_val(c) as usize] += 1;
    }

    // (count, rank) ordered by count then rank, both descending
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if cards.len() == 5 && groups.len() == 5 {
        let mut uniq: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
        uniq.sort_unstable();
        detect_straight_high(&uniq)
    } else {
        None
    };

    if let Some(high) = straight_high {
        let category = if is_flush {
            Category::StraightFlush
        } else {
            Category::Straight
        };
        return HandStrength {
            category,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let category = match (groups.first().map(|g| g.0), groups.get(1).map(|g| g.0)) {
        (Some(4), _) => Category::FourOfAKind,
        (Some(3), Some(2)) => Category::FullHouse,
        _ if is_flush => Category::Flush,
        (Some(3), _) => Category::ThreeOfAKind,
        (Some(2), Some(2)) => Category::TwoPair,
        (Some(2), _) => Category::OnePair,
        _ => Category::HighCard,
    };

    let mut kickers = [0u8; 5];
    for (slot, &(_, r)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = r;
    }
    HandStrength { category, kickers }
}

fn rank_val(c: &Card) -> u8 {
    c.rank.value()
}

fn detect_straight_high(sorted_unique_ranks: &[u8]) -> Option<u8> {
    if sorted_unique_ranks.is_empty() {
        return None;
    }
    // Ace-low straight support: treat Ace as 1 additionally
    let mut w = sorted_unique_ranks.to_vec();
    if w.binary_search(&14).is_ok() {
        w.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..w.len() {
        if w[i] == w[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = w[i];
            }
        } else if w[i] != w[i - 1] {
            // break in sequence
            run = 1;
        }
    }
    if best_high == 0 {
        None
    } else {
        Some(best_high)
    }
}

/// Index combinations of `k` out of `n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_choose_five_is_twenty_one() {
        let combos = combinations(7, 5);
        assert_eq!(combos.len(), 21);
        assert_eq!(combos[0], vec![0, 1, 2, 3, 4]);
        assert_eq!(combos[20], vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn wheel_detection_uses_low_ace() {
        assert_eq!(detect_straight_high(&[2, 3, 4, 5, 14]), Some(5));
        assert_eq!(detect_straight_high(&[10, 11, 12, 13, 14]), Some(14));
        assert_eq!(detect_straight_high(&[2, 3, 4, 13, 14]), None);
    }
}
