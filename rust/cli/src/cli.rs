//! Command-line surface of the `videopoker` binary.

use clap::{Parser, Subcommand, ValueEnum};
use videopoker_engine::variant::VariantKind;

#[derive(Parser, Debug)]
#[command(
    name = "videopoker",
    version,
    about = "Five-card draw video poker: classify hands and play draw rounds"
)]
pub struct VideoPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one hand given as comma-separated suits and ranks
    Classify {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        /// Five suits from S, C, H, D (e.g. S,S,H,D,C)
        #[arg(long, allow_hyphen_values = true)]
        suits: String,
        /// Five ranks from 2-10, J, Q, K, A (e.g. 10,J,Q,K,A)
        #[arg(long, allow_hyphen_values = true)]
        ranks: String,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Deal a single hand and show its category
    Deal {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play draw rounds, choosing held cards on stdin
    Play {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        rounds: Option<u32>,
        /// Coins per round (1-5)
        #[arg(long)]
        stake: Option<u8>,
        #[arg(long)]
        credits: Option<u32>,
        /// Write settled rounds to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal many hands without drawing and tally the categories
    Sim {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Game variant as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    #[value(alias = "jacks")]
    JacksOrBetter,
    #[value(alias = "tens")]
    TensOrBetter,
    #[value(alias = "deuces")]
    DeucesWild,
}

impl From<VariantArg> for VariantKind {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::JacksOrBetter => VariantKind::JacksOrBetter,
            VariantArg::TensOrBetter => VariantKind::TensOrBetter,
            VariantArg::DeucesWild => VariantKind::DeucesWild,
        }
    }
}

/// Command names shown in the usage hint after a parse error.
pub const COMMANDS: &[&str] = &["classify", "deal", "play", "sim", "cfg"];
