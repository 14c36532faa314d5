//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "variant": {
//!     "value": "jacks-or-better",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "variant": {
            "value": config.variant,
            "source": sources.variant,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "stake": {
            "value": config.stake,
            "source": sources.stake,
        },
        "credits": {
            "value": config.credits,
            "source": sources.credits,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
