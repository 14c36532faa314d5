//! # Play Command
//!
//! Interactive five-card draw rounds on stdin.
//!
//! Every round takes the stake, deals five cards, asks which positions to hold,
//! draws replacements and pays out according to the variant's table.
//!
//! ## Features
//!
//! - Hold selection by position (`1 3 5`), `all` or `none`
//! - Invalid input re-prompts instead of ending the session
//! - Graceful quit with `q`; closed input ends the session as interrupted
//! - Optional JSONL round history via `--log`

use crate::cli::VariantArg;
use crate::commands::{resolve_seed, resolve_variant};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_positions, format_result};
use crate::io_utils::read_line;
use crate::ui;
use crate::validation::{HoldInput, parse_hold_input, validate_count};
use std::io::{BufRead, Write};
use videopoker_engine::logger::{RoundLogger, RoundRecord};
use videopoker_engine::round::{MAX_CREDITS, Machine, Round};
use videopoker_engine::variant::MAX_STAKE;

/// Command-line options of `play`; unset values fall back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub variant: Option<VariantArg>,
    pub seed: Option<u64>,
    pub rounds: Option<u32>,
    pub stake: Option<u8>,
    pub credits: Option<u32>,
    pub log: Option<String>,
}

/// Handle the play command: interactive draw rounds
///
/// # Returns
///
/// * `Ok(())` when all rounds were played, credits ran out or the player quit
/// * `Err(CliError::Interrupted)` if input closes while waiting for a hold
/// * `Err(CliError)` for invalid arguments, configuration or I/O errors
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let variant = resolve_variant(args.variant, &cfg);
    let seed = resolve_seed(args.seed, &cfg);
    let rounds = args.rounds.unwrap_or(1);
    let stake = args.stake.unwrap_or(cfg.stake);
    let credits = args.credits.unwrap_or(cfg.credits);

    validate_count("rounds", u64::from(rounds)).map_err(CliError::InvalidInput)?;
    if stake == 0 || stake > MAX_STAKE {
        return Err(CliError::InvalidInput(format!(
            "stake must be within 1..={}",
            MAX_STAKE
        )));
    }

    if credits == 0 || credits > MAX_CREDITS {
        return Err(CliError::InvalidInput(format!(
            "credits must be within 1..={}",
            MAX_CREDITS
        )));
    }

    let mut logger = args.log.as_deref().map(RoundLogger::create).transpose()?;

    writeln!(
        out,
        "play: variant={} rounds={} stake={} credits={} seed={}",
        variant.kind, rounds, stake, credits, seed
    )?;

    let mut machine = Machine::new(variant, seed, credits);
    let mut played = 0u32;

    for i in 1..=rounds {
        if machine.credits() < u32::from(stake) {
            ui::display_warning(err, "Not enough credits for another round")?;
            break;
        }
        writeln!(out, "Round {}", i)?;
        let dealt = *machine.deal(stake)?;
        writeln!(out, "Credits: {}", machine.credits())?;
        writeln!(out, "Dealt: {}", format_positions(&dealt, 0))?;
        if let Some(category) = machine.current().and_then(Round::dealt_category) {
            writeln!(out, "Dealt hand: {}", category)?;
        }

        let Some(mask) = prompt_hold(out, err, stdin)? else {
            if let Some(forfeit) = machine.pending_stake() {
                writeln!(out, "Round abandoned, stake of {} forfeited", forfeit)?;
            }
            writeln!(out, "Quit.")?;
            break;
        };

        let outcome = machine.draw(mask)?;
        writeln!(out, "Final: {}", format_positions(&outcome.hand, outcome.held))?;
        writeln!(
            out,
            "Result: {} (+{})",
            format_result(outcome.category),
            outcome.payout
        )?;
        writeln!(out, "Credits: {}", machine.credits())?;

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&RoundRecord::from_outcome(
                id,
                Some(seed),
                variant.kind,
                &outcome,
            ))?;
        }
        played += 1;
    }

    writeln!(
        out,
        "Rounds played: {} Credits: {}",
        played,
        machine.credits()
    )?;
    Ok(())
}

/// Asks for held positions until the input parses. `None` means quit.
fn prompt_hold(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<u8>, CliError> {
    loop {
        ui::prompt(out, "Hold (e.g. 1 3 5, all, none, q)")?;
        match read_line(stdin)? {
            Some(input) => match parse_hold_input(&input) {
                HoldInput::Hold(mask) => return Ok(Some(mask)),
                HoldInput::Quit => return Ok(None),
                HoldInput::Invalid(msg) => ui::write_error(err, &msg)?,
            },
            None => {
                return Err(CliError::Interrupted(
                    "input closed before the draw".into(),
                ));
            }
        }
    }
}
