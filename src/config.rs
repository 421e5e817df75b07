// src/config.rs
//! Runtime configuration: resource locations, the remote lexicon endpoint and
//! resegmentation tuning. Values resolve in three layers, each overriding the
//! previous one: built-in defaults, an optional TOML file, `SENTIMENT_*` env
//! variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

pub const ENV_CONFIG_PATH: &str = "SENTIMENT_CONFIG_PATH";
pub const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";
pub const ENV_LEXICON_URL: &str = "SENTIMENT_LEXICON_URL";
pub const ENV_ALIAS_PATH: &str = "SENTIMENT_ALIAS_PATH";
pub const ENV_DEV_LOG: &str = "SENTIMENT_DEV_LOG";

pub const DEFAULT_LEXICON_PATH: &str = "assets/AFINN-en-165.txt";
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/fnielsen/afinn/master/afinn/data/AFINN-en-165.txt";
pub const DEFAULT_ALIAS_PATH: &str = "resources/multiword_aliases.tsv";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UNKNOWN_CHAR_COST: f64 = 12.0;

/* ---------- TOML schema ---------- */

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    lexicon: LexiconSection,
    #[serde(default)]
    aliases: AliasSection,
    #[serde(default)]
    respace: RespaceSection,
}

#[derive(Debug, Default, Deserialize)]
struct LexiconSection {
    path: Option<PathBuf>,
    url: Option<String>,
    fetch_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct AliasSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct RespaceSection {
    unknown_char_cost: Option<f64>,
}

/* ---------- resolved config ---------- */

/// Resolved configuration handed to `AnalysisContext`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Local lexicon cache; created on first fetch when missing.
    pub lexicon_path: PathBuf,
    pub lexicon_url: String,
    pub fetch_timeout_secs: u64,
    /// Alias TSV; a missing file means an empty alias map.
    pub alias_path: PathBuf,
    /// DP penalty for one character with no dictionary support.
    pub unknown_char_cost: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            lexicon_path: PathBuf::from(DEFAULT_LEXICON_PATH),
            lexicon_url: DEFAULT_LEXICON_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            alias_path: PathBuf::from(DEFAULT_ALIAS_PATH),
            unknown_char_cost: DEFAULT_UNKNOWN_CHAR_COST,
        }
    }
}

impl CoreConfig {
    /// Defaults overlaid with one TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(raw).context("parsing core config TOML")?;
        Ok(Self::default().merged(file).hygiene())
    }

    /// Layered load: defaults -> optional TOML file -> env overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match env::var(ENV_CONFIG_PATH) {
            Ok(p) if Path::new(&p).exists() => {
                let raw =
                    fs::read_to_string(&p).with_context(|| format!("reading config file {p}"))?;
                let file: FileConfig =
                    toml::from_str(&raw).with_context(|| format!("parsing config file {p}"))?;
                Self::default().merged(file)
            }
            _ => Self::default(),
        };
        cfg.apply_env();
        Ok(cfg.hygiene())
    }

    fn merged(mut self, file: FileConfig) -> Self {
        if let Some(p) = file.lexicon.path {
            self.lexicon_path = p;
        }
        if let Some(u) = file.lexicon.url {
            self.lexicon_url = u;
        }
        if let Some(t) = file.lexicon.fetch_timeout_secs {
            self.fetch_timeout_secs = t;
        }
        if let Some(p) = file.aliases.path {
            self.alias_path = p;
        }
        if let Some(c) = file.respace.unknown_char_cost {
            self.unknown_char_cost = c;
        }
        self
    }

    fn apply_env(&mut self) {
        if let Ok(p) = env::var(ENV_LEXICON_PATH) {
            if !p.trim().is_empty() {
                self.lexicon_path = PathBuf::from(p);
            }
        }
        if let Ok(u) = env::var(ENV_LEXICON_URL) {
            if !u.trim().is_empty() {
                self.lexicon_url = u;
            }
        }
        if let Ok(p) = env::var(ENV_ALIAS_PATH) {
            if !p.trim().is_empty() {
                self.alias_path = PathBuf::from(p);
            }
        }
    }

    // Clamp nonsense numbers back to defaults instead of failing startup.
    fn hygiene(mut self) -> Self {
        if !self.unknown_char_cost.is_finite() || self.unknown_char_cost <= 0.0 {
            warn!(
                value = self.unknown_char_cost,
                "unknown_char_cost out of range, using default"
            );
            self.unknown_char_cost = DEFAULT_UNKNOWN_CHAR_COST;
        }
        if self.fetch_timeout_secs == 0 {
            warn!("fetch_timeout_secs is zero, using default");
            self.fetch_timeout_secs = DEFAULT_FETCH_TIMEOUT_SECS;
        }
        self
    }
}
