use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::{Card, Rank, Suit};
use crate::errors::{HandError, HandField};

/// Number of cards in a five-card draw hand.
pub const HAND_SIZE: usize = 5;

/// Exactly five cards, positionally paired from a suit list and a rank list.
///
/// A `Hand` is only ever built from validated data, so the evaluators never
/// re-check it. Duplicate cards are accepted: the validator checks shape and
/// vocabulary, not deck provenance.
///
/// # Examples
///
/// ```
/// use videopoker_engine::hand::Hand;
///
/// let hand = Hand::from_symbols(&["S", "S", "S", "S", "S"], &["10", "J", "Q", "K", "A"]).unwrap();
/// assert_eq!(hand.cards().len(), 5);
///
/// let err = Hand::from_symbols(&["S", "S", "S", "S", "S", "S"], &["10", "J", "Q", "K", "A"]);
/// assert!(err.is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Builds a hand from suit and rank symbols.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// suit length, rank length, then every suit, then every rank.
    ///
    /// # Errors
    ///
    /// - [`HandError::WrongLength`] if either list does not hold exactly five symbols
    /// - [`HandError::UnknownSuit`] / [`HandError::UnknownRank`] naming the first offending value
    pub fn from_symbols<S, R>(suits: &[S], ranks: &[R]) -> Result<Self, HandError>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        check_length(HandField::Suits, suits.len())?;
        check_length(HandField::Ranks, ranks.len())?;

        let mut parsed_suits = [Suit::Spades; HAND_SIZE];
        for (slot, s) in parsed_suits.iter_mut().zip(suits) {
            *slot = s.as_ref().parse()?;
        }
        let mut parsed_ranks = [Rank::Two; HAND_SIZE];
        for (slot, r) in parsed_ranks.iter_mut().zip(ranks) {
            *slot = r.as_ref().parse()?;
        }
        Ok(Self::from_parts(parsed_suits, parsed_ranks))
    }

    /// Builds a hand from loosely typed JSON input.
    ///
    /// Adds the type check in front of [`Hand::from_symbols`]: both values must be
    /// arrays. Elements that are not strings are domain errors carrying the JSON
    /// rendering of the element.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use videopoker_engine::errors::{HandError, HandField};
    /// use videopoker_engine::hand::Hand;
    ///
    /// let err = Hand::from_json(&json!(3), &json!(["2", "3", "4", "5", "6"])).unwrap_err();
    /// assert_eq!(err, HandError::NotASequence { field: HandField::Suits });
    ///
    /// let err = Hand::from_json(&json!([1, 2, 3, 4, 5]), &json!(["2", "3", "4", "5", "6"])).unwrap_err();
    /// assert_eq!(err, HandError::UnknownSuit("1".into()));
    /// ```
    pub fn from_json(suits: &Value, ranks: &Value) -> Result<Self, HandError> {
        let suits = suits.as_array().ok_or(HandError::NotASequence {
            field: HandField::Suits,
        })?;
        let ranks = ranks.as_array().ok_or(HandError::NotASequence {
            field: HandField::Ranks,
        })?;
        check_length(HandField::Suits, suits.len())?;
        check_length(HandField::Ranks, ranks.len())?;

        let mut parsed_suits = [Suit::Spades; HAND_SIZE];
        for (slot, v) in parsed_suits.iter_mut().zip(suits) {
            *slot = v
                .as_str()
                .and_then(Suit::from_symbol)
                .ok_or_else(|| HandError::UnknownSuit(json_symbol(v)))?;
        }
        let mut parsed_ranks = [Rank::Two; HAND_SIZE];
        for (slot, v) in parsed_ranks.iter_mut().zip(ranks) {
            *slot = v
                .as_str()
                .and_then(Rank::from_symbol)
                .ok_or_else(|| HandError::UnknownRank(json_symbol(v)))?;
        }
        Ok(Self::from_parts(parsed_suits, parsed_ranks))
    }

    fn from_parts(suits: [Suit; HAND_SIZE], ranks: [Rank; HAND_SIZE]) -> Self {
        let mut cards = [Card::new(Suit::Spades, Rank::Two); HAND_SIZE];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::new(suits[i], ranks[i]);
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        self.cards.map(|c| c.suit)
    }

    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(|c| c.rank)
    }

    /// Replaces the card at `position`, used by the draw stage.
    pub(crate) fn replace(&mut self, position: usize, card: Card) {
        self.cards[position] = card;
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

fn check_length(field: HandField, len: usize) -> Result<(), HandError> {
    if len != HAND_SIZE {
        return Err(HandError::WrongLength { field, len });
    }
    Ok(())
}

fn json_symbol(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suit_length_is_reported_before_rank_length() {
        let err = Hand::from_symbols(&["S"; 4], &["2"; 6]).unwrap_err();
        assert_eq!(
            err,
            HandError::WrongLength {
                field: HandField::Suits,
                len: 4
            }
        );
    }

    #[test]
    fn suits_are_reported_before_ranks() {
        let err = Hand::from_symbols(&["S", "S", "X", "S", "S"], &["2", "3", "4", "5", "Z"]).unwrap_err();
        assert_eq!(err, HandError::UnknownSuit("X".into()));
    }

    #[test]
    fn first_offending_rank_is_named() {
        let err = Hand::from_symbols(&["S"; 5], &["1", "11", "C", "B", "X"]).unwrap_err();
        assert_eq!(err, HandError::UnknownRank("1".into()));
    }

    #[test]
    fn type_check_precedes_length_check() {
        let err = Hand::from_json(&json!(vec!["S"; 6]), &json!("K")).unwrap_err();
        assert_eq!(
            err,
            HandError::NotASequence {
                field: HandField::Ranks
            }
        );
    }

    #[test]
    fn json_and_symbol_paths_agree() {
        let a = Hand::from_symbols(&["H", "C", "D", "S", "H"], &["9", "9", "9", "9", "K"]).unwrap();
        let b = Hand::from_json(
            &json!(["H", "C", "D", "S", "H"]),
            &json!(["9", "9", "9", "9", "K"]),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "9H 9C 9D 9S KH");
    }
}
