//! Category predicates.
//!
//! Each winning category has one independent predicate taking the natural
//! cards and the number of wild cards removed from the hand. Predicates do not
//! know about priority: a royal flush also satisfies the straight predicate, and
//! it is the resolver in [`crate::variant`] that reports only the first match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{royal_mask, straight_windows, Card, Rank};

/// A named winning combination.
///
/// The set is the union over all variants; each [`crate::variant::Variant`]
/// lists the subset it pays and the order they are tested in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
    #[serde(rename = "Natural Royal Flush")]
    NaturalRoyalFlush,
    #[serde(rename = "Four Deuces")]
    FourDeuces,
    /// Royal flush completed with at least one wild card.
    #[serde(rename = "Deuces Royal Flush")]
    WildRoyalFlush,
    #[serde(rename = "Five of a Kind")]
    FiveOfAKind,
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    #[serde(rename = "Full House")]
    FullHouse,
    #[serde(rename = "Flush")]
    Flush,
    #[serde(rename = "Straight")]
    Straight,
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    #[serde(rename = "Two Pairs")]
    TwoPairs,
    #[serde(rename = "Jacks or Better")]
    JacksOrBetter,
    #[serde(rename = "Tens or Better")]
    TensOrBetter,
}

/// Predicate signature shared by every category.
pub type Evaluator = fn(&[Card], u8) -> bool;

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::NaturalRoyalFlush => "Natural Royal Flush",
            Category::FourDeuces => "Four Deuces",
            Category::WildRoyalFlush => "Deuces Royal Flush",
            Category::FiveOfAKind => "Five of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPairs => "Two Pairs",
            Category::JacksOrBetter => "Jacks or Better",
            Category::TensOrBetter => "Tens or Better",
        }
    }

    /// Looks a category up by its display name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().into_iter().find(|c| c.name() == name)
    }

    pub fn all() -> [Category; 14] {
        [
            Category::RoyalFlush,
            Category::NaturalRoyalFlush,
            Category::FourDeuces,
            Category::WildRoyalFlush,
            Category::FiveOfAKind,
            Category::StraightFlush,
            Category::FourOfAKind,
            Category::FullHouse,
            Category::Flush,
            Category::Straight,
            Category::ThreeOfAKind,
            Category::TwoPairs,
            Category::JacksOrBetter,
            Category::TensOrBetter,
        ]
    }

    /// The predicate deciding whether a hand qualifies for this category.
    pub fn evaluator(self) -> Evaluator {
        match self {
            Category::RoyalFlush => royal_flush,
            Category::NaturalRoyalFlush => natural_royal_flush,
            Category::FourDeuces => four_deuces,
            Category::WildRoyalFlush => wild_royal_flush,
            Category::FiveOfAKind => five_of_a_kind,
            Category::StraightFlush => straight_flush,
            Category::FourOfAKind => four_of_a_kind,
            Category::FullHouse => full_house,
            Category::Flush => flush,
            Category::Straight => straight,
            Category::ThreeOfAKind => three_of_a_kind,
            Category::TwoPairs => two_pairs,
            Category::JacksOrBetter => jacks_or_better,
            Category::TensOrBetter => tens_or_better,
        }
    }

    pub fn matches(self, naturals: &[Card], wild_count: u8) -> bool {
        (self.evaluator())(naturals, wild_count)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered result of a classification: the category name or the empty string.
pub fn category_name(result: Option<Category>) -> &'static str {
    result.map(Category::name).unwrap_or("")
}

pub fn royal_flush(naturals: &[Card], wild_count: u8) -> bool {
    wild_count == 0 && flush(naturals, 0) && rank_mask(naturals) == royal_mask()
}

pub fn natural_royal_flush(naturals: &[Card], wild_count: u8) -> bool {
    royal_flush(naturals, wild_count)
}

pub fn four_deuces(_naturals: &[Card], wild_count: u8) -> bool {
    wild_count == 4
}

pub fn wild_royal_flush(naturals: &[Card], wild_count: u8) -> bool {
    wild_count > 0 && flush(naturals, wild_count) && rank_mask(naturals) & !royal_mask() == 0
}

pub fn five_of_a_kind(naturals: &[Card], wild_count: u8) -> bool {
    of_a_kind(naturals, wild_count, 5)
}

pub fn straight_flush(naturals: &[Card], wild_count: u8) -> bool {
    flush(naturals, wild_count) && straight(naturals, wild_count)
}

pub fn four_of_a_kind(naturals: &[Card], wild_count: u8) -> bool {
    of_a_kind(naturals, wild_count, 4)
}

/// Exactly two natural ranks, each small enough for the wild cards to round
/// them up to a triple and a pair.
pub fn full_house(naturals: &[Card], _wild_count: u8) -> bool {
    let counts = sorted_counts(naturals);
    match counts.as_slice() {
        [high, low] => *high <= 3 && *low <= 2,
        _ => false,
    }
}

/// All natural cards share one suit; wild cards take whatever suit is needed.
/// A hand with no natural card at all never counts as a flush.
pub fn flush(naturals: &[Card], _wild_count: u8) -> bool {
    match naturals.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

/// Natural ranks are distinct and fit inside one five-rank window; wild cards
/// fill the gaps. Without wild cards this means the ranks are exactly a window.
pub fn straight(naturals: &[Card], _wild_count: u8) -> bool {
    if !distinct_ranks(naturals) {
        return false;
    }
    let mask = rank_mask(naturals);
    straight_windows().iter().any(|w| mask & !w == 0)
}

pub fn three_of_a_kind(naturals: &[Card], wild_count: u8) -> bool {
    of_a_kind(naturals, wild_count, 3)
}

/// Two natural pairs. Wild cards never complete a two-pair hand.
pub fn two_pairs(naturals: &[Card], _wild_count: u8) -> bool {
    let counts = sorted_counts(naturals);
    counts.len() >= 2 && counts[0] == 2 && counts[1] == 2
}

pub fn jacks_or_better(naturals: &[Card], _wild_count: u8) -> bool {
    pair_of_at_least(naturals, Rank::Jack)
}

pub fn tens_or_better(naturals: &[Card], _wild_count: u8) -> bool {
    pair_of_at_least(naturals, Rank::Ten)
}

/// Some rank at or above `threshold` occurs exactly twice among natural cards.
pub fn pair_of_at_least(naturals: &[Card], threshold: Rank) -> bool {
    let counts = rank_counts(naturals);
    (threshold as usize..=Rank::Ace as usize).any(|r| counts[r] == 2)
}

fn of_a_kind(naturals: &[Card], wild_count: u8, n: u8) -> bool {
    let best = rank_counts(naturals).iter().copied().max().unwrap_or(0);
    best + wild_count == n
}

fn rank_counts(naturals: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15]; // 2..14 used
    for c in naturals {
        counts[c.rank as usize] += 1;
    }
    counts
}

/// Non-zero rank multiplicities, largest first.
fn sorted_counts(naturals: &[Card]) -> Vec<u8> {
    let mut counts: Vec<u8> = rank_counts(naturals).into_iter().filter(|&n| n > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

fn rank_mask(naturals: &[Card]) -> u16 {
    naturals.iter().fold(0, |mask, c| mask | c.rank.bit())
}

fn distinct_ranks(naturals: &[Card]) -> bool {
    rank_mask(naturals).count_ones() as usize == naturals.len()
}
