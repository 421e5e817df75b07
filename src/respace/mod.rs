//! Space reconstruction for documents typed without any spaces.
//!
//! Alphabetic runs go through a trie-guided dynamic program that picks the
//! cheapest word segmentation; everything else passes through verbatim,
//! except that sentence punctuation regains a trailing space. Apostrophes
//! survive as single-character gaps inside a run and are stitched back into
//! contractions afterwards.

pub mod trie;

use once_cell::sync::Lazy;
use regex::Regex;

use self::trie::CostTrie;

/// Letters plus any apostrophes glued to them form one run.
static RE_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z']+").expect("valid word run regex"));

/// Only well-formed runs are resegmented; stray apostrophes pass verbatim.
static RE_WORD_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+(?:'[a-zA-Z]+)*$").expect("valid word shape regex"));

// Contraction repairs over segmented output, applied in order.
static RE_SPLIT_NT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bn\s*'\s*t\b").expect("valid n't regex"));
static RE_APOSTROPHE_GAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*'\s*").expect("valid apostrophe gap regex"));
static RE_GLUED_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"('(?:t|s|re|ve|ll|d|m))([a-z])").expect("valid glued suffix regex"));
static RE_STEM_NT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-z]+)\s+n'\s*t\b").expect("valid stem n't regex"));

/// The engine runs only on documents with no space at all.
pub fn needs_respacing(raw: &str) -> bool {
    !raw.is_empty() && !raw.contains(' ')
}

/// Reinsert spaces into a space-free document.
///
/// Word runs are resegmented through the trie, non-alphabetic gaps are kept
/// as they are, and a gap ending in `.`, `!`, `?` or `,` gets one trailing
/// space so sentence splitting can find its boundaries again. Curly
/// apostrophes are normalized to the straight form up front.
pub fn respace(raw: &str, trie: &CostTrie, unknown_char_cost: f64) -> String {
    let text = raw.replace('\u{2019}', "'");
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last = 0;
    for m in RE_WORD_RUN.find_iter(&text) {
        push_gap(&mut out, &text[last..m.start()]);
        push_word_run(&mut out, m.as_str(), trie, unknown_char_cost);
        last = m.end();
    }
    push_gap(&mut out, &text[last..]);
    out
}

fn push_gap(out: &mut String, gap: &str) {
    if gap.is_empty() {
        return;
    }
    out.push_str(gap);
    if gap.ends_with(['.', '!', '?', ',']) {
        out.push(' ');
    }
}

fn push_word_run(out: &mut String, run: &str, trie: &CostTrie, unknown_char_cost: f64) {
    if !RE_WORD_SHAPE.is_match(run) {
        out.push_str(run);
        return;
    }
    let (segmented, _) = infer_spaces(run, trie, unknown_char_cost);
    out.push_str(&fix_contractions(&segmented));
}

/// Cheapest segmentation of one lowercased run, with its total cost.
///
/// `best[i]` is the cheapest way to segment the first `i` bytes; every
/// position can also advance one byte at `unknown_char_cost`, so the
/// program always reaches the end.
pub fn infer_spaces(text: &str, trie: &CostTrie, unknown_char_cost: f64) -> (String, f64) {
    if text.is_empty() {
        return (String::new(), 0.0);
    }
    let bytes = text.to_lowercase().into_bytes();
    let n = bytes.len();

    let mut best = vec![f64::INFINITY; n + 1];
    let mut back: Vec<Option<usize>> = vec![None; n + 1];
    best[0] = 0.0;

    for start in 0..n {
        let here = best[start];
        if !here.is_finite() {
            continue;
        }
        let mut node = CostTrie::ROOT;
        let mut end = start;
        while end < n {
            let Some(next) = trie.child(node, bytes[end]) else {
                break;
            };
            node = next;
            end += 1;
            if let Some(word_cost) = trie.terminal_cost(node) {
                let cut = here + word_cost;
                if cut < best[end] {
                    best[end] = cut;
                    back[end] = Some(start);
                }
            }
        }
        let skip = here + unknown_char_cost;
        if skip < best[start + 1] {
            best[start + 1] = skip;
            back[start + 1] = Some(start);
        }
    }

    let mut pieces: Vec<String> = Vec::new();
    let mut cur = n;
    while cur > 0 {
        let Some(prev) = back[cur] else {
            // unreachable given the one-byte fallback, kept as a safety net
            return (String::from_utf8_lossy(&bytes).into_owned(), best[n]);
        };
        pieces.push(String::from_utf8_lossy(&bytes[prev..cur]).into_owned());
        cur = prev;
    }
    pieces.reverse();
    (pieces.join(" "), best[n])
}

/// Stitch contraction pieces the segmenter pulled apart.
fn fix_contractions(segmented: &str) -> String {
    let step = RE_SPLIT_NT.replace_all(segmented, "n't");
    let step = RE_APOSTROPHE_GAP.replace_all(&step, "'");
    let step = RE_GLUED_SUFFIX.replace_all(&step, "${1} ${2}");
    let step = RE_STEM_NT.replace_all(&step, "${1}n't");
    step.into_owned()
}
