//! Orchestration: one call turns a raw document into the full report.
//!
//! Steps, in order: space reconstruction when the input arrived with none,
//! paragraph and sentence normalization, lexicon scoring, then the three
//! extremal queries over the same scored records. Raw text never reaches the
//! logs; correlation happens through a short content hash.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::ENV_DEV_LOG;
use crate::context::AnalysisContext;
use crate::error::{Outcome, Result};
use crate::extremes::{self, SentenceExtremes};
use crate::multiword::PhraseMatch;
use crate::record::SentenceRecord;
use crate::respace;
use crate::scoring;
use crate::window::{fixed, variable, SegmentExtremes};

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("analysis_documents_total", "Documents analyzed.");
        describe_counter!(
            "analysis_sentences_total",
            "Sentences scored across all documents."
        );
        describe_counter!(
            "respace_applied_total",
            "Documents that needed space reconstruction."
        );
        describe_counter!("lexicon_fetch_total", "Remote lexicon fetch attempts.");
        describe_histogram!("analysis_duration_ms", "End-to-end analysis time.");
    });
}

/// Folded phrases of one record, by its index in `sentences`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPhrases {
    pub record: usize,
    pub phrases: Vec<PhraseMatch>,
}

/// Everything one analysis produced, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    /// Whether the input had to be resegmented before analysis.
    pub respaced: bool,
    pub sentences: Vec<SentenceRecord>,
    /// Phrase folds per record index; records without folds are omitted.
    pub phrase_matches: Vec<RecordPhrases>,
    pub extreme_sentences: Outcome<SentenceExtremes>,
    pub fixed_window: Outcome<SegmentExtremes>,
    pub variable_window: Outcome<SegmentExtremes>,
}

pub fn analyze_document(ctx: &AnalysisContext, raw: &str) -> Result<SentimentReport> {
    ensure_metrics_described();
    let started = Instant::now();

    let respaced = respace::needs_respacing(raw);
    let text = if respaced {
        counter!("respace_applied_total").increment(1);
        respace::respace(raw, ctx.trie(), ctx.config().unknown_char_cost)
    } else {
        raw.to_string()
    };

    let document = ctx.normalizer()?.tokenize_document(&text);
    let mut records = document.records;
    scoring::score_records(ctx.lexicon()?, &mut records);

    let extreme_sentences = extremes::find_extremes(&records);
    let fixed_window = fixed::extract(&records);
    let variable_window = variable::extract(&records);

    counter!("analysis_documents_total").increment(1);
    counter!("analysis_sentences_total").increment(records.len() as u64);
    histogram!("analysis_duration_ms").record(started.elapsed().as_secs_f64() * 1000.0);

    dev_log_analysis(raw, &records, respaced);

    Ok(SentimentReport {
        respaced,
        sentences: records,
        phrase_matches: document
            .matches
            .into_iter()
            .map(|(record, phrases)| RecordPhrases { record, phrases })
            .collect(),
        extreme_sentences,
        fixed_window,
        variable_window,
    })
}

/// Short stable id for correlating log lines about one input.
pub(crate) fn anon_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for byte in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{byte:02x}");
    }
    out
}

// Dev diagnostics: opt in via env, debug builds only, never the raw text.
fn dev_log_analysis(raw: &str, records: &[SentenceRecord], respaced: bool) {
    let enabled =
        cfg!(debug_assertions) && std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !enabled {
        return;
    }
    let text_hash = anon_hash(raw);
    let token_count: usize = records.iter().map(|r| r.tokens.len()).sum();
    let scores: Vec<f64> = records
        .iter()
        .map(|r| r.score_or_zero())
        .take(8)
        .collect();
    debug!(
        target: "analysis",
        %text_hash,
        respaced,
        sentences = records.len(),
        tokens = token_count,
        leading_scores = ?scores,
        "document analyzed"
    );
}
