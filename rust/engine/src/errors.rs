use std::fmt;

use thiserror::Error;

/// Which of the two parallel input sequences an error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandField {
    Suits,
    Ranks,
}

impl fmt::Display for HandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandField::Suits => f.write_str("suits"),
            HandField::Ranks => f.write_str("ranks"),
        }
    }
}

/// Rejections raised while validating a caller-supplied hand.
///
/// Every variant signals malformed upstream data; a losing hand is never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Card {field} must be a list")]
    NotASequence { field: HandField },
    #[error("Number of card {field} must be equal to 5, got {len}")]
    WrongLength { field: HandField, len: usize },
    #[error("Unknown card suit: {0}")]
    UnknownSuit(String),
    #[error("Unknown card rank: {0}")]
    UnknownRank(String),
}

impl HandError {
    /// True for shape errors (wrong type or wrong length).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            HandError::NotASequence { .. } | HandError::WrongLength { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid stake: {stake}, allowed: 1..={max}")]
    InvalidStake { stake: u8, max: u8 },
    #[error("Insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u32, available: u32 },
    #[error("No round dealt")]
    RoundNotDealt,
    #[error("Round already drawn")]
    RoundAlreadyDrawn,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Credit balance overflow: {credits} + {payout}")]
    CreditOverflow { credits: u32, payout: u32 },
}
