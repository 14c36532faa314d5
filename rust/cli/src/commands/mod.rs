//! Command handler modules for the videopoker CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod cfg;
pub mod classify;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::handle_sim_command;

use crate::cli::VariantArg;
use crate::config::Config;
use videopoker_engine::variant::Variant;

/// Flag first, then configuration.
pub(crate) fn resolve_variant(flag: Option<VariantArg>, cfg: &Config) -> Variant {
    Variant::from_kind(flag.map(Into::into).unwrap_or(cfg.variant))
}

/// Flag first, then configuration, then a fresh random seed.
pub(crate) fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.seed).unwrap_or_else(rand::random)
}
