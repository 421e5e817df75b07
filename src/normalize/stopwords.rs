// src/normalize/stopwords.rs
//! English stopword list and its lexicon-aware trim. Any word the lexicon
//! scores, alone or inside a phrase, must survive filtering, so those words
//! are subtracted from the embedded list when the set is derived.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

static STOPWORD_LIST: &str = include_str!("../../resources/english_stopwords.txt");

/// Embedded list minus every lexicon word, including each word of multi-word
/// phrases. Derived in memory once per context.
pub fn derive_stopwords(lexicon: &Lexicon) -> HashSet<String> {
    let mut set: HashSet<String> = STOPWORD_LIST
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    for (word, _) in lexicon.entries() {
        for part in word.split_whitespace() {
            set.remove(part);
        }
    }
    set
}
