// src/lexicon.rs
//! AFINN-style sentiment lexicon: `word<TAB>integer_score` lines, multi-word
//! entries keep their internal spaces. Loaded from a local cache; when the
//! cache is missing the canonical file is fetched once and persisted so later
//! runs stay offline.

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::config::CoreConfig;
use crate::error::{LoadError, Result};

/// Immutable word/phrase -> score map.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, i32>,
}

impl Lexicon {
    /// Parse a TSV body. Every line must be `word<TAB>score` with an integer
    /// score; anything else is a `LoadError` naming the line.
    pub fn parse(body: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (idx, line) in body.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let Some((word, score)) = line.split_once('\t') else {
                return Err(LoadError::MalformedLexiconLine {
                    line: idx + 1,
                    raw: line.to_string(),
                });
            };
            let score: i32 = score.trim().parse().map_err(|_| LoadError::NonIntegerScore {
                line: idx + 1,
                raw: line.to_string(),
            })?;
            entries.insert(word.to_string(), score);
        }
        Ok(Self { entries })
    }

    /// Direct constructor for tests and embedders with their own lexicon.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(w, s)| (w.into(), s)).collect(),
        }
    }

    pub fn score(&self, token: &str) -> Option<i32> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// All keys with their scores, single words and phrases alike.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.entries.iter().map(|(w, s)| (w.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Local-cache-else-remote load. The fetched body is persisted next to the
/// configured path before parsing; a fetch or persist failure surfaces as a
/// `LoadError` and is never retried here.
pub fn load_or_fetch(cfg: &CoreConfig) -> Result<Lexicon> {
    let path = &cfg.lexicon_path;
    if path.exists() {
        debug!(path = %path.display(), "lexicon cache hit");
        let body = fs::read_to_string(path).map_err(|e| LoadError::io(path.clone(), e))?;
        return Lexicon::parse(&body);
    }

    info!(url = %cfg.lexicon_url, "lexicon cache miss, fetching");
    counter!("lexicon_fetch_total").increment(1);
    let body = fetch_remote(&cfg.lexicon_url, cfg.fetch_timeout_secs)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| LoadError::io(dir.to_path_buf(), e))?;
        }
    }
    fs::write(path, &body).map_err(|e| LoadError::io(path.clone(), e))?;
    debug!(path = %path.display(), bytes = body.len(), "lexicon persisted");

    Lexicon::parse(&body)
}

fn fetch_remote(url: &str, timeout_secs: u64) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| LoadError::fetch(url, e))?;
    let resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            warn!(error = ?e, "lexicon fetch failed");
            LoadError::fetch(url, e)
        })?;
    resp.text().map_err(|e| LoadError::fetch(url, e))
}
