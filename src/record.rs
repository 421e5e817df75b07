// src/record.rs
// Zakladni datove typy analyzy: vety a segmenty. Vytvari je normalizator,
// skore doplni scorer, dal se s nimi zachazi jako s nemennymi.

use serde::{Deserialize, Serialize};

/// One sentence of an analyzed document.
///
/// `paragraph` and `sentence` are 1-based and strictly increasing in document
/// order, so the pair identifies the record within one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub paragraph: usize,
    pub sentence: usize,
    /// Raw sentence text as split from the document, before any cleaning.
    pub original: String,
    /// Normalized tokens; a folded phrase stays one element ("not good").
    pub tokens: Vec<String>,
    /// Attached by the scorer; always in [-1, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SentenceRecord {
    pub fn new(
        paragraph: usize,
        sentence: usize,
        original: impl Into<String>,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            paragraph,
            sentence,
            original: original.into(),
            tokens,
            score: None,
        }
    }

    /// Empty-token sentences are pinned at neutral.
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Contiguous sentence span produced by the window extractors. Ephemeral,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Original sentence texts over the span, joined with single spaces.
    pub text: String,
    pub score: f64,
    /// Inclusive record indices into the analyzed sequence.
    pub start: usize,
    pub end: usize,
}
