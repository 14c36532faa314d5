//! Game variants and the priority resolver.
//!
//! A variant is plain configuration: the categories it pays, the order they are
//! tested in, an optional wild rank and its payout table. Classification runs
//! the category predicates in that order and reports the first one that matches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::{Card, Rank};
use crate::errors::HandError;
use crate::evaluators::Category;
use crate::hand::Hand;
use crate::wild::split_wild;

/// Highest number of coins a single round accepts.
pub const MAX_STAKE: u8 = 5;

/// The playable variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    JacksOrBetter,
    TensOrBetter,
    DeucesWild,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::JacksOrBetter => "jacks-or-better",
            VariantKind::TensOrBetter => "tens-or-better",
            VariantKind::DeucesWild => "deuces-wild",
        }
    }

    pub fn all() -> [VariantKind; 3] {
        [
            VariantKind::JacksOrBetter,
            VariantKind::TensOrBetter,
            VariantKind::DeucesWild,
        ]
    }
}

impl FromStr for VariantKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jacks-or-better" | "jacks" => Ok(VariantKind::JacksOrBetter),
            "tens-or-better" | "tens" => Ok(VariantKind::TensOrBetter),
            "deuces-wild" | "deuces" => Ok(VariantKind::DeucesWild),
            other => Err(format!("Unknown variant: {}", other)),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coins paid per category, indexed by stake 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTable {
    rows: &'static [(Category, [u32; MAX_STAKE as usize])],
}

impl PayoutTable {
    pub const fn new(rows: &'static [(Category, [u32; MAX_STAKE as usize])]) -> Self {
        Self { rows }
    }

    /// Coins won for `category` at `stake`; zero for unpaid categories or stakes
    /// outside 1..=5.
    pub fn payout(&self, category: Category, stake: u8) -> u32 {
        if stake == 0 || stake > MAX_STAKE {
            return 0;
        }
        self.row(category)
            .map(|amounts| amounts[stake as usize - 1])
            .unwrap_or(0)
    }

    pub fn row(&self, category: Category) -> Option<&[u32; MAX_STAKE as usize]> {
        self.rows
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amounts)| amounts)
    }

    pub fn rows(&self) -> &'static [(Category, [u32; MAX_STAKE as usize])] {
        self.rows
    }
}

const JACKS_OR_BETTER_PRIORITY: &[Category] = &[
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPairs,
    Category::JacksOrBetter,
];

const TENS_OR_BETTER_PRIORITY: &[Category] = &[
    Category::RoyalFlush,
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPairs,
    Category::TensOrBetter,
];

const DEUCES_WILD_PRIORITY: &[Category] = &[
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
];

const JACKS_OR_BETTER_PAYOUTS: PayoutTable = PayoutTable::new(&[
    (Category::RoyalFlush, [250, 500, 750, 1000, 4000]),
    (Category::StraightFlush, [50, 100, 150, 200, 250]),
    (Category::FourOfAKind, [25, 50, 75, 100, 125]),
    (Category::FullHouse, [9, 18, 27, 36, 45]),
    (Category::Flush, [6, 12, 18, 24, 30]),
    (Category::Straight, [4, 8, 12, 16, 20]),
    (Category::ThreeOfAKind, [3, 6, 9, 12, 15]),
    (Category::TwoPairs, [2, 4, 6, 8, 10]),
    (Category::JacksOrBetter, [1, 2, 3, 4, 5]),
]);

const TENS_OR_BETTER_PAYOUTS: PayoutTable = PayoutTable::new(&[
    (Category::RoyalFlush, [500, 1000, 2000, 3000, 4000]),
    (Category::StraightFlush, [50, 100, 150, 200, 250]),
    (Category::FourOfAKind, [25, 50, 75, 100, 125]),
    (Category::FullHouse, [6, 12, 18, 24, 30]),
    (Category::Flush, [5, 10, 15, 20, 25]),
    (Category::Straight, [4, 8, 12, 16, 20]),
    (Category::ThreeOfAKind, [3, 6, 9, 12, 15]),
    (Category::TwoPairs, [2, 4, 6, 8, 10]),
    (Category::TensOrBetter, [1, 2, 3, 4, 5]),
]);

const DEUCES_WILD_PAYOUTS: PayoutTable = PayoutTable::new(&[
    (Category::NaturalRoyalFlush, [250, 500, 750, 1000, 4000]),
    (Category::FourDeuces, [200, 400, 600, 800, 1000]),
    (Category::WildRoyalFlush, [25, 50, 75, 100, 125]),
    (Category::FiveOfAKind, [16, 32, 48, 64, 80]),
    (Category::StraightFlush, [13, 26, 39, 52, 65]),
    (Category::FourOfAKind, [4, 8, 12, 16, 20]),
    (Category::FullHouse, [3, 6, 9, 12, 15]),
    (Category::Flush, [2, 4, 6, 8, 10]),
    (Category::Straight, [2, 4, 6, 8, 10]),
    (Category::ThreeOfAKind, [1, 2, 3, 4, 5]),
]);

/// Configuration of one video poker variant.
///
/// # Examples
///
/// ```
/// use videopoker_engine::evaluators::Category;
/// use videopoker_engine::variant::Variant;
///
/// let jacks = Variant::jacks_or_better();
/// let result = jacks.classify(&["S", "S", "S", "S", "S"], &["10", "J", "Q", "K", "A"]).unwrap();
/// assert_eq!(result, Some(Category::RoyalFlush));
///
/// let deuces = Variant::deuces_wild();
/// let result = deuces.classify(&["S", "H", "C", "D", "S"], &["2", "2", "2", "2", "K"]).unwrap();
/// assert_eq!(result, Some(Category::FourDeuces));
///
/// // A losing hand is a valid outcome, not an error
/// let result = jacks.classify(&["S", "H", "C", "D", "S"], &["2", "4", "6", "8", "10"]).unwrap();
/// assert_eq!(result, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Which preset this is
    pub kind: VariantKind,
    /// Display name of the game
    pub name: &'static str,
    /// Categories in the order they are tested; the first match wins
    pub priority: &'static [Category],
    /// Rank substituting for any card, if the game has one
    pub wild_rank: Option<Rank>,
    /// Coins paid per category and stake
    pub payouts: PayoutTable,
}

impl Variant {
    pub fn jacks_or_better() -> Self {
        Self {
            kind: VariantKind::JacksOrBetter,
            name: "Jacks or Better",
            priority: JACKS_OR_BETTER_PRIORITY,
            wild_rank: None,
            payouts: JACKS_OR_BETTER_PAYOUTS,
        }
    }

    pub fn tens_or_better() -> Self {
        Self {
            kind: VariantKind::TensOrBetter,
            name: "Tens or Better",
            priority: TENS_OR_BETTER_PRIORITY,
            wild_rank: None,
            payouts: TENS_OR_BETTER_PAYOUTS,
        }
    }

    pub fn deuces_wild() -> Self {
        Self {
            kind: VariantKind::DeucesWild,
            name: "Deuces Wild",
            priority: DEUCES_WILD_PRIORITY,
            wild_rank: Some(Rank::Two),
            payouts: DEUCES_WILD_PAYOUTS,
        }
    }

    pub fn from_kind(kind: VariantKind) -> Self {
        match kind {
            VariantKind::JacksOrBetter => Self::jacks_or_better(),
            VariantKind::TensOrBetter => Self::tens_or_better(),
            VariantKind::DeucesWild => Self::deuces_wild(),
        }
    }

    /// Classifies a hand given as suit and rank symbols.
    ///
    /// The hand is validated once, wild cards are extracted, and the categories
    /// are tried in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`HandError`] if either list has the wrong length or holds a value
    /// outside the suit/rank vocabulary. No category is evaluated in that case.
    pub fn classify<S, R>(&self, suits: &[S], ranks: &[R]) -> Result<Option<Category>, HandError>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let hand = Hand::from_symbols(suits, ranks)?;
        Ok(self.classify_hand(&hand))
    }

    /// Classifies loosely typed input, adding the "is it a list" check.
    pub fn classify_json(&self, suits: &Value, ranks: &Value) -> Result<Option<Category>, HandError> {
        let hand = Hand::from_json(suits, ranks)?;
        Ok(self.classify_hand(&hand))
    }

    pub fn classify_hand(&self, hand: &Hand) -> Option<Category> {
        let split = split_wild(hand, self.wild_rank);
        let result = resolve(self.priority, &split.naturals, split.wild_count);
        tracing::debug!(
            variant = self.kind.as_str(),
            hand = %hand,
            wild_count = split.wild_count,
            category = result.map(Category::name).unwrap_or(""),
            "classified hand"
        );
        result
    }

    pub fn payout(&self, category: Option<Category>, stake: u8) -> u32 {
        category
            .map(|c| self.payouts.payout(c, stake))
            .unwrap_or(0)
    }

    /// True if `category` is one this variant can report.
    pub fn pays(&self, category: Category) -> bool {
        self.priority.contains(&category)
    }
}

/// Returns the first category in `priority` whose predicate accepts the hand.
pub fn resolve(priority: &[Category], naturals: &[Card], wild_count: u8) -> Option<Category> {
    priority.iter().copied().find(|category| {
        let hit = category.matches(naturals, wild_count);
        tracing::trace!(category = category.name(), hit, "evaluated category");
        hit
    })
}
