//! Sentence-span extractors and their shared report shape.
//!
//! Both extractors answer the same question at different granularity: which
//! stretch of consecutive sentences reads most positive, and which most
//! negative. Every span tied at an extreme is collected, never just the
//! first one found.

pub mod fixed;
pub mod variable;

use serde::Serialize;

use crate::error::Outcome;
use crate::record::{Segment, SentenceRecord};

/// All spans sharing one extreme sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TiedSegments {
    pub score: f64,
    pub segments: Vec<Segment>,
}

/// Extremal spans of one extractor run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentExtremes {
    pub most_positive: TiedSegments,
    pub most_negative: TiedSegments,
}

impl SegmentExtremes {
    /// Tie-collect over an already materialized window list.
    pub(crate) fn from_windows(windows: Vec<Segment>) -> Outcome<Self> {
        if windows.is_empty() {
            return Outcome::InsufficientData;
        }
        let max = windows
            .iter()
            .map(|w| w.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let min = windows.iter().map(|w| w.score).fold(f64::INFINITY, f64::min);
        let tied = |target: f64| TiedSegments {
            score: target,
            segments: windows.iter().filter(|w| w.score == target).cloned().collect(),
        };
        Outcome::Found(SegmentExtremes {
            most_positive: tied(max),
            most_negative: tied(min),
        })
    }
}

/// Original sentence texts over an inclusive record range, joined with
/// spaces. Filtered records inside the range keep their text in the output.
pub(crate) fn join_originals(records: &[SentenceRecord], start: usize, end: usize) -> String {
    records[start..=end]
        .iter()
        .map(|r| r.original.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
