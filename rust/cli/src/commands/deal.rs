//! Deal command handler for single hand dealing and display.
//!
//! Deals five cards from a seeded deck and shows the hand with its category.
//! The same seed always deals the same hand.

use crate::cli::VariantArg;
use crate::commands::{resolve_seed, resolve_variant};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_result};
use std::io::Write;
use videopoker_engine::cards::Card;
use videopoker_engine::deck::Deck;
use videopoker_engine::errors::GameError;
use videopoker_engine::hand::{HAND_SIZE, Hand};

/// Handle the deal command.
pub fn handle_deal_command(
    variant: Option<VariantArg>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let variant = resolve_variant(variant, &cfg);
    let seed = resolve_seed(seed, &cfg);

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let cards: [Card; HAND_SIZE] = deck
        .deal_n(HAND_SIZE)
        .and_then(|cards| cards.try_into().ok())
        .ok_or(GameError::DeckExhausted)?;
    let hand = Hand::new(cards);
    let category = variant.classify_hand(&hand);

    writeln!(out, "deal: variant={} seed={}", variant.kind, seed)?;
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Result: {}", format_result(category))?;
    Ok(())
}
