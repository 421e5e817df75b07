// src/multiword.rs
//! Phrase layer over the lexicon. Multi-token lexicon entries are pulled into
//! a tuple-keyed index so that, after tokenization, token runs like
//! ["not", "good"] fold back into the single scoreable unit "not good".
//! An alias map lets alternate phrasings reach a canonical lexicon phrase.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{LoadError, Result};
use crate::lexicon::Lexicon;

/// Tuple-keyed index of multi-token lexicon entries.
#[derive(Debug, Clone, Default)]
pub struct MultiwordIndex {
    phrases: HashMap<Vec<String>, i32>,
    max_len: usize,
}

impl MultiwordIndex {
    /// Extract every lexicon key containing a space. `max_len` is the token
    /// count of the longest phrase, floored at 1 so window arithmetic stays
    /// valid for a phrase-free lexicon.
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut phrases = HashMap::new();
        let mut max_len = 1;
        for (word, score) in lexicon.entries() {
            if !word.contains(' ') {
                continue;
            }
            let parts: Vec<String> = word.split_whitespace().map(str::to_string).collect();
            if parts.len() < 2 {
                continue;
            }
            max_len = max_len.max(parts.len());
            phrases.insert(parts, score);
        }
        Self { phrases, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Window lookup; `Vec<String>: Borrow<[String]>` keeps probes
    /// allocation-free.
    pub fn score_of(&self, window: &[String]) -> Option<i32> {
        self.phrases.get(window).copied()
    }
}

/// Alternate phrasing -> canonical phrase, loaded from a TSV resource.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    aliases: HashMap<Vec<String>, Vec<String>>,
}

impl AliasMap {
    /// Parse `alias<TAB>canonical` lines. Blank lines and `#` comments are
    /// skipped; any other line without a tab is a load error naming the line
    /// and its raw content. Both sides are lowercased and split on spaces.
    pub fn parse(body: &str) -> Result<Self> {
        let mut aliases = HashMap::new();
        for (idx, line) in body.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((alias, canonical)) = line.split_once('\t') else {
                return Err(LoadError::MalformedAliasLine {
                    line: idx + 1,
                    raw: line.to_string(),
                });
            };
            aliases.insert(tuple(alias), tuple(canonical));
        }
        Ok(Self { aliases })
    }

    pub fn canonical_of(&self, window: &[String]) -> Option<&[String]> {
        self.aliases.get(window).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn tuple(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// One folded phrase occurrence, kept for traceability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseMatch {
    /// Canonical phrase as it appears in the lexicon.
    pub term: String,
    pub score: i32,
    /// Token position in the pre-fold sequence.
    pub start: usize,
    /// Surface length in tokens; an alias may differ from its canonical form.
    pub length: usize,
}

/// Greedy longest-first fold. At each position windows are tried from
/// `min(max_len, remaining)` down to 2, first directly against the index,
/// then through the alias map. The first hit wins and the cursor jumps past
/// it; there is no backtracking, so a shorter phrase that would have enabled
/// a longer later match is never considered.
pub fn fold_phrases(
    tokens: &[String],
    index: &MultiwordIndex,
    aliases: Option<&AliasMap>,
) -> (Vec<String>, Vec<PhraseMatch>) {
    let mut folded = Vec::with_capacity(tokens.len());
    let mut matches = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let longest = index.max_len().min(tokens.len() - i);
        let hit = (2..=longest).rev().find_map(|size| {
            let window = &tokens[i..i + size];
            if let Some(score) = index.score_of(window) {
                return Some((window.join(" "), score, size));
            }
            aliases
                .and_then(|a| a.canonical_of(window))
                .and_then(|canonical| {
                    index
                        .score_of(canonical)
                        .map(|score| (canonical.join(" "), score, size))
                })
        });
        match hit {
            Some((term, score, length)) => {
                matches.push(PhraseMatch {
                    term: term.clone(),
                    score,
                    start: i,
                    length,
                });
                folded.push(term);
                i += length;
            }
            None => {
                folded.push(tokens[i].clone());
                i += 1;
            }
        }
    }
    (folded, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn mk_index() -> MultiwordIndex {
        MultiwordIndex::build(&Lexicon::from_entries([
            ("good", 3),
            ("not good", -2),
            ("does not work", -3),
            ("cant stand", -3),
        ]))
    }

    #[test]
    fn build_extracts_phrases_and_max_len() {
        let index = mk_index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.max_len(), 3);
        assert_eq!(index.score_of(&toks(&["not", "good"])), Some(-2));
        assert_eq!(index.score_of(&toks(&["good"])), None);
    }

    #[test]
    fn phrase_free_lexicon_floors_max_len_at_one() {
        let index = MultiwordIndex::build(&Lexicon::from_entries([("good", 3), ("bad", -3)]));
        assert!(index.is_empty());
        assert_eq!(index.max_len(), 1);

        // max_len 1 means no window is ever tried
        let (folded, matches) = fold_phrases(&toks(&["not", "good"]), &index, None);
        assert_eq!(folded, toks(&["not", "good"]));
        assert!(matches.is_empty());
    }

    #[test]
    fn folds_direct_phrase_and_records_match() {
        let index = mk_index();
        let (folded, matches) = fold_phrases(&toks(&["movie", "not", "good", "at"]), &index, None);
        assert_eq!(folded, toks(&["movie", "not good", "at"]));
        assert_eq!(
            matches,
            vec![PhraseMatch {
                term: "not good".into(),
                score: -2,
                start: 1,
                length: 2
            }]
        );
    }

    #[test]
    fn longest_window_wins_over_inner_phrase() {
        let index = MultiwordIndex::build(&Lexicon::from_entries([
            ("not good", -2),
            ("not good enough", -3),
        ]));
        let (folded, matches) = fold_phrases(&toks(&["not", "good", "enough"]), &index, None);
        assert_eq!(folded, toks(&["not good enough"]));
        assert_eq!(matches[0].length, 3);
    }

    #[test]
    fn alias_window_resolves_to_canonical_term() {
        let index = mk_index();
        let aliases = AliasMap::parse("cannot stand\tcant stand\n").expect("parse");
        let (folded, matches) = fold_phrases(&toks(&["i", "cannot", "stand", "him"]), &index, Some(&aliases));
        assert_eq!(folded, toks(&["i", "cant stand", "him"]));
        // surface length, not canonical length
        assert_eq!(matches[0].length, 2);
        assert_eq!(matches[0].term, "cant stand");
        assert_eq!(matches[0].score, -3);
        assert_eq!(matches[0].start, 1);
    }

    #[test]
    fn alias_to_unknown_canonical_never_matches() {
        let index = mk_index();
        let aliases = AliasMap::parse("so bad\tutterly awful\n").expect("parse");
        let (folded, matches) = fold_phrases(&toks(&["so", "bad"]), &index, Some(&aliases));
        assert_eq!(folded, toks(&["so", "bad"]));
        assert!(matches.is_empty());
    }

    #[test]
    fn greedy_fold_never_backtracks() {
        // Matching ["a","b"] first consumes "b", so ["b","c"] can not match
        // afterwards even though that split would also be valid.
        let index = MultiwordIndex::build(&Lexicon::from_entries([("a b", 1), ("b c", 2)]));
        let (folded, _) = fold_phrases(&toks(&["a", "b", "c"]), &index, None);
        assert_eq!(folded, toks(&["a b", "c"]));
    }

    #[test]
    fn folding_is_idempotent() {
        let index = mk_index();
        let (once, _) = fold_phrases(&toks(&["does", "not", "work", "not", "good"]), &index, None);
        assert_eq!(once, toks(&["does not work", "not good"]));
        let (twice, matches) = fold_phrases(&once, &index, None);
        assert_eq!(twice, once);
        assert!(matches.is_empty());
    }

    #[test]
    fn alias_parse_skips_blanks_and_comments() {
        let aliases = AliasMap::parse("# header\n\ncannot stand\tcant stand\n").expect("parse");
        assert_eq!(aliases.len(), 1);
        assert!(aliases
            .canonical_of(&toks(&["cannot", "stand"]))
            .is_some());
    }

    #[test]
    fn alias_parse_reports_malformed_line() {
        let err = AliasMap::parse("# ok\nno tab here\n").unwrap_err();
        match err {
            LoadError::MalformedAliasLine { line, raw } => {
                assert_eq!(line, 2);
                assert_eq!(raw, "no tab here");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn alias_sides_are_lowercased() {
        let aliases = AliasMap::parse("Cannot Stand\tCant Stand\n").expect("parse");
        let canonical = aliases
            .canonical_of(&toks(&["cannot", "stand"]))
            .expect("alias hit");
        assert_eq!(canonical, toks(&["cant", "stand"]).as_slice());
    }
}
