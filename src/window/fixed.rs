//! Fixed three-sentence sliding window.
//!
//! The window advances one sentence at a time over the whole record list and
//! counts only when all three sentences kept tokens and sit in the same
//! paragraph. Documents shorter than the window, or with no valid placement,
//! report insufficient data.

use crate::error::Outcome;
use crate::record::{Segment, SentenceRecord};

use super::{join_originals, SegmentExtremes};

pub const WINDOW_SIZE: usize = 3;

pub fn extract(records: &[SentenceRecord]) -> Outcome<SegmentExtremes> {
    SegmentExtremes::from_windows(valid_windows(records))
}

fn valid_windows(records: &[SentenceRecord]) -> Vec<Segment> {
    let mut windows = Vec::new();
    let mut start = 0;
    while start + WINDOW_SIZE <= records.len() {
        let end = start + WINDOW_SIZE - 1;
        let window = &records[start..=end];
        let usable = window.iter().all(|r| r.has_tokens())
            && window.iter().all(|r| r.paragraph == window[0].paragraph);
        if usable {
            windows.push(Segment {
                text: join_originals(records, start, end),
                score: window.iter().map(|r| r.score_or_zero()).sum(),
                start,
                end,
            });
        }
        start += 1;
    }
    windows
}
