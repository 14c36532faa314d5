//! One five-card draw round and the machine that plays rounds back to back.
//!
//! A round moves bet → deal → hold → draw → settle. The stake is taken when
//! the hand is dealt; the payout is credited when it is drawn.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::evaluators::Category;
use crate::hand::{Hand, HAND_SIZE};
use crate::variant::{Variant, MAX_STAKE};

/// Largest starting balance the front ends accept.
pub const MAX_CREDITS: u32 = 1_000_000_000;

/// Mask with every position held.
pub const HOLD_ALL: u8 = 0b1_1111;

/// True if position `i` (0-based) is held in `mask`.
pub fn is_held(mask: u8, i: usize) -> bool {
    i < HAND_SIZE && mask & (1 << i) != 0
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub stake: u8,
    /// Hand as originally dealt
    pub dealt: Hand,
    /// Positions kept at the draw, bit i = position i
    pub held: u8,
    /// Hand after replacements
    pub hand: Hand,
    pub category: Option<Category>,
    pub payout: u32,
}

#[derive(Debug, Clone)]
pub struct Round {
    variant: Variant,
    stake: u8,
    dealt: Hand,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Takes the stake and deals five cards from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidStake`] unless `1 <= stake <= 5`
    /// - [`GameError::InsufficientCredits`] if `credits` cannot cover the stake
    /// - [`GameError::DeckExhausted`] if the deck cannot supply five cards
    pub fn deal(
        variant: Variant,
        deck: &mut Deck,
        stake: u8,
        credits: &mut u32,
    ) -> Result<Self, GameError> {
        if stake == 0 || stake > MAX_STAKE {
            return Err(GameError::InvalidStake {
                stake,
                max: MAX_STAKE,
            });
        }
        if *credits < u32::from(stake) {
            return Err(GameError::InsufficientCredits {
                needed: u32::from(stake),
                available: *credits,
            });
        }

        deck.shuffle();
        let cards: [Card; HAND_SIZE] = deck
            .deal_n(HAND_SIZE)
            .and_then(|cards| cards.try_into().ok())
            .ok_or(GameError::DeckExhausted)?;
        *credits -= u32::from(stake);

        let dealt = Hand::new(cards);
        tracing::debug!(variant = variant.kind.as_str(), stake, hand = %dealt, "dealt");
        Ok(Self {
            variant,
            stake,
            dealt,
            outcome: None,
        })
    }

    pub fn dealt(&self) -> &Hand {
        &self.dealt
    }

    pub fn stake(&self) -> u8 {
        self.stake
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Category of the dealt hand before any draw.
    pub fn dealt_category(&self) -> Option<Category> {
        self.variant.classify_hand(&self.dealt)
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Replaces every position not in `hold_mask` from `deck`, then classifies
    /// and prices the final hand. Bits above position 4 are ignored.
    pub fn draw(&mut self, deck: &mut Deck, hold_mask: u8) -> Result<RoundOutcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundAlreadyDrawn);
        }
        let held = hold_mask & HOLD_ALL;
        let discards = HAND_SIZE - held.count_ones() as usize;
        let replacements: Vec<Card> = deck.deal_n(discards).ok_or(GameError::DeckExhausted)?;

        let mut hand = self.dealt;
        let mut fresh = replacements.into_iter();
        for i in 0..HAND_SIZE {
            if !is_held(held, i) {
                if let Some(card) = fresh.next() {
                    hand.replace(i, card);
                }
            }
        }

        let category = self.variant.classify_hand(&hand);
        let payout = self.variant.payout(category, self.stake);
        tracing::info!(
            variant = self.variant.kind.as_str(),
            stake = self.stake,
            held,
            hand = %hand,
            category = category.map(Category::name).unwrap_or(""),
            payout,
            "round settled"
        );
        let outcome = RoundOutcome {
            stake: self.stake,
            dealt: self.dealt,
            held,
            hand,
            category,
            payout,
        };
        self.outcome = Some(outcome);
        Ok(outcome)
    }
}

/// A single-hand machine: one deck, one credit balance, at most one open round.
///
/// # Examples
///
/// ```
/// use videopoker_engine::round::{Machine, HOLD_ALL};
/// use videopoker_engine::variant::Variant;
///
/// let mut machine = Machine::new(Variant::jacks_or_better(), 7, 100);
/// machine.deal(5).unwrap();
/// assert_eq!(machine.credits(), 95);
///
/// let outcome = machine.draw(HOLD_ALL).unwrap();
/// assert_eq!(outcome.hand, outcome.dealt);
/// assert_eq!(machine.credits(), 95 + outcome.payout);
/// ```
#[derive(Debug)]
pub struct Machine {
    variant: Variant,
    deck: Deck,
    seed: u64,
    credits: u32,
    round: Option<Round>,
}

impl Machine {
    pub fn new(variant: Variant, seed: u64, credits: u32) -> Self {
        Self {
            variant,
            deck: Deck::new_with_seed(seed),
            seed,
            credits,
            round: None,
        }
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn current(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a new round. An open round that was never drawn is abandoned along
    /// with its stake.
    pub fn deal(&mut self, stake: u8) -> Result<&Hand, GameError> {
        let round = Round::deal(self.variant, &mut self.deck, stake, &mut self.credits)?;
        Ok(self.round.insert(round).dealt())
    }

    /// Draws the open round and credits its payout. A payout that would
    /// overflow the balance is an error and leaves the balance unchanged.
    pub fn draw(&mut self, hold_mask: u8) -> Result<RoundOutcome, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotDealt)?;
        let outcome = round.draw(&mut self.deck, hold_mask)?;
        self.credits = self
            .credits
            .checked_add(outcome.payout)
            .ok_or(GameError::CreditOverflow {
                credits: self.credits,
                payout: outcome.payout,
            })?;
        Ok(outcome)
    }

    /// Stake of the open round if it has not been drawn yet.
    pub fn pending_stake(&self) -> Option<u8> {
        self.round
            .as_ref()
            .filter(|r| r.outcome().is_none())
            .map(Round::stake)
    }
}
