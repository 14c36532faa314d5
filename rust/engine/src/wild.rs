//! Wildcard extraction for wild-card variants.
//!
//! Wild cards are pulled out of the hand once, before any evaluator runs. The
//! evaluators only ever see the natural cards plus a count, so none of them has
//! to know which rank is wild.

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HAND_SIZE};

/// A hand partitioned into natural cards and a number of fungible jokers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WildSplit {
    /// Non-wild cards in their original order
    pub naturals: Vec<Card>,
    /// How many cards were removed as wild (0..=5)
    pub wild_count: u8,
}

/// Removes every card of `wild_rank` from the hand and counts them.
///
/// With no wild rank the whole hand is natural. The suits of wild cards are
/// dropped; `naturals.len() + wild_count` is always five.
///
/// # Examples
///
/// ```
/// use videopoker_engine::cards::Rank;
/// use videopoker_engine::hand::Hand;
/// use videopoker_engine::wild::split_wild;
///
/// let hand = Hand::from_symbols(&["S", "H", "C", "D", "S"], &["2", "9", "9", "9", "9"]).unwrap();
/// let split = split_wild(&hand, Some(Rank::Two));
/// assert_eq!(split.wild_count, 1);
/// assert_eq!(split.naturals.len(), 4);
/// ```
pub fn split_wild(hand: &Hand, wild_rank: Option<Rank>) -> WildSplit {
    let mut naturals = Vec::with_capacity(HAND_SIZE);
    let mut wild_count = 0u8;
    for &card in hand.cards() {
        if Some(card.rank) == wild_rank {
            wild_count += 1;
        } else {
            naturals.push(card);
        }
    }
    WildSplit {
        naturals,
        wild_count,
    }
}
