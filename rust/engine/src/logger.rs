use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::evaluators::Category;
use crate::hand::Hand;
use crate::round::RoundOutcome;
use crate::variant::VariantKind;

/// One settled round, serialized as a single JSONL line for round history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the machine's deck (enables deterministic replay)
    pub seed: Option<u64>,
    pub variant: VariantKind,
    pub stake: u8,
    pub dealt: Hand,
    /// Hold mask applied at the draw
    pub held: u8,
    pub final_hand: Hand,
    /// `None` for a losing hand
    pub category: Option<Category>,
    pub payout: u32,
    /// Timestamp when the round was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_outcome(
        round_id: String,
        seed: Option<u64>,
        variant: VariantKind,
        outcome: &RoundOutcome,
    ) -> Self {
        Self {
            round_id,
            seed,
            variant,
            stake: outcome.stake,
            dealt: outcome.dealt,
            held: outcome.held,
            final_hand: outcome.hand,
            category: outcome.category,
            payout: outcome.payout,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
