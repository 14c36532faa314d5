//! Layered configuration: defaults, then a TOML file named by
//! `VIDEOPOKER_CONFIG`, then `VIDEOPOKER_*` environment variables.
//! Command-line flags are applied on top by each command.

use serde::{Deserialize, Serialize};
use std::fs;

use videopoker_engine::round::MAX_CREDITS;
use videopoker_engine::variant::{VariantKind, MAX_STAKE};

pub const CONFIG_ENV: &str = "VIDEOPOKER_CONFIG";
pub const VARIANT_ENV: &str = "VIDEOPOKER_VARIANT";
pub const SEED_ENV: &str = "VIDEOPOKER_SEED";
pub const STAKE_ENV: &str = "VIDEOPOKER_STAKE";
pub const CREDITS_ENV: &str = "VIDEOPOKER_CREDITS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub variant: VariantKind,
    pub seed: Option<u64>,
    pub stake: u8,
    pub credits: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub variant: ValueSource,
    pub seed: ValueSource,
    pub stake: ValueSource,
    pub credits: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            variant: ValueSource::Default,
            seed: ValueSource::Default,
            stake: ValueSource::Default,
            credits: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: VariantKind::JacksOrBetter,
            seed: None,
            stake: 1,
            credits: 100,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.variant {
            cfg.variant = parse_variant(&v)?;
            sources.variant = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.stake {
            cfg.stake = v;
            sources.stake = ValueSource::File;
        }
        if let Some(v) = f.credits {
            cfg.credits = v;
            sources.credits = ValueSource::File;
        }
    }

    if let Ok(variant) = std::env::var(VARIANT_ENV)
        && !variant.is_empty()
    {
        cfg.variant = parse_variant(&variant)?;
        sources.variant = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stake) = std::env::var(STAKE_ENV)
        && !stake.is_empty()
    {
        cfg.stake = stake
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid stake".into()))?;
        sources.stake = ValueSource::Env;
    }
    if let Ok(credits) = std::env::var(CREDITS_ENV)
        && !credits.is_empty()
    {
        cfg.credits = credits
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid credits".into()))?;
        sources.credits = ValueSource::Env;
    }

    validate(&cfg)?;
    tracing::debug!(?cfg, "configuration resolved");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    stake: Option<u8>,
    #[serde(default)]
    credits: Option<u32>,
}

fn parse_variant(s: &str) -> Result<VariantKind, ConfigError> {
    s.parse().map_err(ConfigError::Invalid)
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.stake == 0 || cfg.stake > MAX_STAKE {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: stake must be within 1..={}",
            MAX_STAKE
        )));
    }
    if cfg.credits == 0 || cfg.credits > MAX_CREDITS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: credits must be within 1..={}",
            MAX_CREDITS
        )));
    }
    Ok(())
}
