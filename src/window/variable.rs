//! Variable-length extremal runs.
//!
//! One left-to-right scan per paragraph keeps two running sums. The max run
//! restarts once its sum has gone strictly negative, the min run once its
//! sum has gone strictly positive; a paragraph boundary restarts both.
//! Filtered sentences are skipped by the sums but stay inside the reported
//! span text. Best runs are tracked document-wide, with exact score ties
//! accumulating instead of replacing.

use crate::error::Outcome;
use crate::record::{Segment, SentenceRecord};

use super::{join_originals, SegmentExtremes, TiedSegments};

pub fn extract(records: &[SentenceRecord]) -> Outcome<SegmentExtremes> {
    let mut best_max = f64::NEG_INFINITY;
    let mut best_min = f64::INFINITY;
    let mut max_segments: Vec<Segment> = Vec::new();
    let mut min_segments: Vec<Segment> = Vec::new();

    let mut para_start = 0;
    while para_start < records.len() {
        let paragraph = records[para_start].paragraph;
        let mut pos = para_start;

        let mut max_run = f64::NEG_INFINITY;
        let mut min_run = f64::INFINITY;
        let mut max_from = para_start;
        let mut min_from = para_start;

        while pos < records.len() && records[pos].paragraph == paragraph {
            if !records[pos].has_tokens() {
                pos += 1;
                continue;
            }
            let score = records[pos].score_or_zero();

            // max track: restart once the running sum went negative
            if max_run < 0.0 {
                max_run = score;
                max_from = pos;
            } else {
                max_run += score;
            }
            if max_run > best_max {
                best_max = max_run;
                max_segments = vec![segment(records, max_from, pos, max_run)];
            } else if max_run == best_max {
                max_segments.push(segment(records, max_from, pos, max_run));
            }

            // min track, sign mirrored
            if min_run > 0.0 {
                min_run = score;
                min_from = pos;
            } else {
                min_run += score;
            }
            if min_run < best_min {
                best_min = min_run;
                min_segments = vec![segment(records, min_from, pos, min_run)];
            } else if min_run == best_min {
                min_segments.push(segment(records, min_from, pos, min_run));
            }

            pos += 1;
        }
        para_start = pos;
    }

    if max_segments.is_empty() && min_segments.is_empty() {
        return Outcome::InsufficientData;
    }
    Outcome::Found(SegmentExtremes {
        most_positive: TiedSegments {
            score: best_max,
            segments: max_segments,
        },
        most_negative: TiedSegments {
            score: best_min,
            segments: min_segments,
        },
    })
}

fn segment(records: &[SentenceRecord], start: usize, end: usize, score: f64) -> Segment {
    Segment {
        text: join_originals(records, start, end),
        score,
        start,
        end,
    }
}
