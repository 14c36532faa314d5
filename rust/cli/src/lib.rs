//! # videopoker CLI Library
//!
//! Command-line interface for the videopoker engine: classify hands, deal,
//! play interactive draw rounds and run frequency simulations.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let args = ["videopoker", "classify", "--variant", "jacks", "--suits", "S,S,S,S,S", "--ranks", "10,J,Q,K,A"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = videopoker_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "Royal Flush\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `classify`: Classify one hand for a variant
//! - `deal`: Deal a single hand for inspection
//! - `play`: Play draw rounds interactively on stdin
//! - `sim`: Tally categories over many dealt hands
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{COMMANDS, Commands, VideoPokerCli};
use commands::{
    PlayArgs, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. Interactive input for `play` is read from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input closes in the
/// middle of `play`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match VideoPokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Classify {
            variant,
            suits,
            ranks,
            json,
        } => handle_classify_command(variant, &suits, &ranks, json, out),
        Commands::Deal { variant, seed } => handle_deal_command(variant, seed, out),
        Commands::Play {
            variant,
            seed,
            rounds,
            stake,
            credits,
            log,
        } => {
            let args = PlayArgs {
                variant,
                seed,
                rounds,
                stake,
                credits,
                log,
            };
            handle_play_command(args, out, err, input)
        }
        Commands::Sim {
            variant,
            hands,
            seed,
        } => handle_sim_command(variant, hands, seed, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            e.exit_code()
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err, "Usage: videopoker <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: videopoker --help");
            exit_code::ERROR
        }
    }
}
