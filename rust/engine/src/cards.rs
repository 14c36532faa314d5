use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits only group cards for flush detection; they carry no ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    #[serde(rename = "S")]
    Spades,
    /// Clubs suit (♣)
    #[serde(rename = "C")]
    Clubs,
    /// Hearts suit (♥)
    #[serde(rename = "H")]
    Hearts,
    /// Diamonds suit (♦)
    #[serde(rename = "D")]
    Diamonds,
}

impl Suit {
    /// Parses the canonical one-letter symbol (`S`, `C`, `H`, `D`).
    pub fn from_symbol(symbol: &str) -> Option<Suit> {
        match symbol {
            "S" => Some(Suit::Spades),
            "C" => Some(Suit::Clubs),
            "H" => Some(Suit::Hearts),
            "D" => Some(Suit::Diamonds),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Clubs => "C",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl FromStr for Suit {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::from_symbol(s).ok_or_else(|| HandError::UnknownSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The numeric value orders ranks for straight detection only; Ace is always high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    #[serde(rename = "2")]
    Two = 2,
    /// Rank 3
    #[serde(rename = "3")]
    Three,
    /// Rank 4
    #[serde(rename = "4")]
    Four,
    /// Rank 5
    #[serde(rename = "5")]
    Five,
    /// Rank 6
    #[serde(rename = "6")]
    Six,
    /// Rank 7
    #[serde(rename = "7")]
    Seven,
    /// Rank 8
    #[serde(rename = "8")]
    Eight,
    /// Rank 9
    #[serde(rename = "9")]
    Nine,
    /// Rank 10
    #[serde(rename = "10")]
    Ten,
    /// Jack (11)
    #[serde(rename = "J")]
    Jack,
    /// Queen (12)
    #[serde(rename = "Q")]
    Queen,
    /// King (13)
    #[serde(rename = "K")]
    King,
    /// Ace (14)
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// Parses the canonical symbol (`2`..`10`, `J`, `Q`, `K`, `A`).
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        match symbol {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Bit for this rank in a rank mask (bit 2 = Two, ..., bit 14 = Ace).
    pub fn bit(self) -> u16 {
        1u16 << (self as u8)
    }
}

impl FromStr for Rank {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_symbol(s).ok_or_else(|| HandError::UnknownRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a single playing card with a suit and rank.
/// A dealt hand is five of these; position in the hand never affects classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Spades, Clubs, Hearts or Diamonds)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Number of five-rank straight windows (Ace high only, no wrap-around).
pub const STRAIGHT_WINDOWS: usize = 13 - 4;

/// Rank masks of every straight window, lowest (2-6) first.
pub fn straight_windows() -> [u16; STRAIGHT_WINDOWS] {
    let mut windows = [0u16; STRAIGHT_WINDOWS];
    for (i, window) in all_ranks().windows(5).enumerate() {
        windows[i] = window.iter().fold(0, |mask, r| mask | r.bit());
    }
    windows
}

/// Rank mask of the royal window {10, J, Q, K, A}.
pub fn royal_mask() -> u16 {
    Rank::Ten.bit() | Rank::Jack.bit() | Rank::Queen.bit() | Rank::King.bit() | Rank::Ace.bit()
}
