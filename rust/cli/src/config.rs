//! Layered configuration: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_engine::dealer::ForcedBets;
use holdem_engine::player::Chips;
use holdem_engine::table::{TableConfig, MAX_SEATS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub seats: usize,
    pub buy_in: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub ante: Chips,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            seats: 6,
            buy_in: 200,
            small_blind: 1,
            big_blind: 2,
            ante: 0,
        }
    }
}

impl Config {
    pub fn forced_bets(&self) -> ForcedBets {
        ForcedBets {
            ante: self.ante,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
        }
    }

    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            num_seats: self.seats,
            forced_bets: self.forced_bets(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub seats: ValueSource,
    pub buy_in: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub ante: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            seats: ValueSource::Default,
            buy_in: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            ante: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
            sources.buy_in = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.ante {
            cfg.ante = v;
            sources.ante = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("HOLDEM_SEED")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(seats) = env_value("HOLDEM_SEATS")? {
        cfg.seats = seats;
        sources.seats = ValueSource::Env;
    }
    if let Some(buy_in) = env_value("HOLDEM_BUY_IN")? {
        cfg.buy_in = buy_in;
        sources.buy_in = ValueSource::Env;
    }
    if let Some(sb) = env_value("HOLDEM_SMALL_BLIND")? {
        cfg.small_blind = sb;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(bb) = env_value("HOLDEM_BIG_BLIND")? {
        cfg.big_blind = bb;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(ante) = env_value("HOLDEM_ANTE")? {
        cfg.ante = ante;
        sources.ante = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

// Unset and empty variables both mean "not overridden".
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    buy_in: Option<Chips>,
    #[serde(default)]
    small_blind: Option<Chips>,
    #[serde(default)]
    big_blind: Option<Chips>,
    #[serde(default)]
    ante: Option<Chips>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=MAX_SEATS).contains(&cfg.seats) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: seats must be between 2 and {}",
            MAX_SEATS
        )));
    }
    if cfg.buy_in == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: buy_in must be >0".into(),
        ));
    }
    cfg.forced_bets()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
