// src/lib.rs
// Lexicon-based sentiment core for long-form reviews.
//
// Pipeline: raw text -> optional space reconstruction -> paragraph/sentence
// split with per-sentence normalization -> lexicon scoring -> extremal
// queries (single sentences, fixed three-sentence windows, variable-length
// runs). `AnalysisContext` owns the shared caches, `analyze_document` is the
// one-call entry point.

pub mod analyze;
pub mod config;
pub mod context;
pub mod error;
pub mod extremes;
pub mod lexicon;
pub mod multiword;
pub mod normalize;
pub mod record;
pub mod respace;
pub mod scoring;
pub mod window;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze_document, RecordPhrases, SentimentReport};
pub use crate::config::CoreConfig;
pub use crate::context::AnalysisContext;
pub use crate::error::{LoadError, Outcome};
pub use crate::lexicon::Lexicon;
pub use crate::record::{Segment, SentenceRecord};
