//! Simulation command handler.
//!
//! Deals N independent hands from one seeded deck, classifies each without a
//! draw, and prints how often every category of the variant came up together
//! with the return of a one-coin stake.

use crate::cli::VariantArg;
use crate::commands::{resolve_seed, resolve_variant};
use crate::config;
use crate::error::CliError;
use crate::ui;
use crate::validation::validate_count;
use std::io::Write;
use videopoker_engine::cards::Card;
use videopoker_engine::deck::Deck;
use videopoker_engine::errors::GameError;
use videopoker_engine::hand::{HAND_SIZE, Hand};
use videopoker_engine::variant::Variant;

const LARGE_RUN: u64 = 10_000_000;

/// Category counts of a simulation run, in the variant's priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimTally {
    pub hands: u64,
    /// One entry per priority slot
    pub counts: Vec<u64>,
    pub losses: u64,
    /// Coins returned at stake 1
    pub returned: u64,
}

/// Handle the sim command.
pub fn handle_sim_command(
    variant: Option<VariantArg>,
    hands: u64,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    validate_count("hands", hands).map_err(CliError::InvalidInput)?;
    if hands > LARGE_RUN {
        ui::display_warning(err, &format!("{} hands may take a while", hands))?;
    }
    let cfg = config::load()?;
    let variant = resolve_variant(variant, &cfg);
    let seed = resolve_seed(seed, &cfg);

    writeln!(
        out,
        "sim: variant={} hands={} seed={}",
        variant.kind, hands, seed
    )?;
    let tally = simulate(&variant, hands, seed)?;

    for (category, count) in variant.priority.iter().zip(&tally.counts) {
        writeln!(
            out,
            "{:<20} {:>10} {:>8.4}%",
            category.name(),
            count,
            percent(*count, tally.hands)
        )?;
    }
    writeln!(
        out,
        "{:<20} {:>10} {:>8.4}%",
        "no win",
        tally.losses,
        percent(tally.losses, tally.hands)
    )?;
    writeln!(
        out,
        "Return (stake 1): {:.4}%",
        percent(tally.returned, tally.hands)
    )?;
    Ok(())
}

/// Deals and classifies `hands` hands. Deterministic per seed.
pub fn simulate(variant: &Variant, hands: u64, seed: u64) -> Result<SimTally, CliError> {
    let mut deck = Deck::new_with_seed(seed);
    let mut tally = SimTally {
        hands,
        counts: vec![0; variant.priority.len()],
        losses: 0,
        returned: 0,
    };

    for _ in 0..hands {
        deck.shuffle();
        let cards: [Card; HAND_SIZE] = deck
            .deal_n(HAND_SIZE)
            .and_then(|cards| cards.try_into().ok())
            .ok_or(GameError::DeckExhausted)?;
        let hand = Hand::new(cards);
        match variant.classify_hand(&hand) {
            Some(category) => {
                if let Some(slot) = variant.priority.iter().position(|c| *c == category) {
                    tally.counts[slot] += 1;
                }
                tally.returned += u64::from(variant.payout(Some(category), 1));
            }
            None => tally.losses += 1,
        }
    }
    tracing::info!(
        variant = variant.kind.as_str(),
        hands,
        seed,
        losses = tally.losses,
        "simulation finished"
    );
    Ok(tally)
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
