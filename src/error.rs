// src/error.rs
// Typed failure surface for the core. Loading problems are errors; "nothing
// qualified" is a value (`Outcome`), so a thin result can never mask a defect.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while loading shared resources (lexicon, alias file).
///
/// These are fatal and surfaced to the caller; nothing in the core retries
/// them automatically.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Lexicon line without a `word<TAB>score` shape.
    #[error("lexicon line {line}: expected `word<TAB>score`, got {raw:?}")]
    MalformedLexiconLine { line: usize, raw: String },

    /// Lexicon line whose score field is not an integer.
    #[error("lexicon line {line}: score is not an integer: {raw:?}")]
    NonIntegerScore { line: usize, raw: String },

    /// Alias line that is neither blank, a comment, nor `alias<TAB>canonical`.
    #[error("alias line {line}: expected `alias<TAB>canonical`, got {raw:?}")]
    MalformedAliasLine { line: usize, raw: String },

    /// The one-time remote lexicon fetch failed.
    #[error("fetching lexicon from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading or persisting a resource file failed.
    #[error("file access on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }
}

/// Alias used across the loading paths.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Result of an extremal query: either a value or an explicit marker that no
/// sentence/window qualified. Callers must branch; there is no default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Found(T),
    InsufficientData,
}

impl<T> Outcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::InsufficientData => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::InsufficientData => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Outcome::InsufficientData)
    }
}
