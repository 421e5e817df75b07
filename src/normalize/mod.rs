// src/normalize/mod.rs
//! Raw document -> sentence records. Splitting is structural (paragraph
//! marker, then sentence punctuation); per-sentence cleaning runs a fixed
//! pipeline whose step order is load-bearing: contractions must still see
//! their apostrophes, so they expand after HTML removal and before symbol
//! stripping.

pub mod contractions;
pub mod lemma;
pub mod stopwords;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::lexicon::Lexicon;
use crate::multiword::{fold_phrases, AliasMap, MultiwordIndex, PhraseMatch};
use crate::record::SentenceRecord;

// The literal paragraph marker is the HTML double break; the space-free
// spelling shows up in resegmented input, so both are accepted.
static RE_PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br ?/><br ?/>").expect("paragraph break regex"));

// Sentence boundary: whitespace right after ., ! or ?. The punctuation stays
// with the preceding sentence, the whitespace is swallowed.
static RE_SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary regex"));

static RE_HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));

/// Split on the paragraph marker, dropping paragraphs that trim to nothing.
pub fn split_paragraphs(raw: &str) -> Vec<&str> {
    RE_PARAGRAPH_BREAK
        .split(raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split one (already trimmed) paragraph into sentences.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in RE_SENTENCE_BOUNDARY.find_iter(paragraph) {
        let cut = m.start() + 1;
        out.push(&paragraph[last..cut]);
        last = m.end();
    }
    if last < paragraph.len() {
        out.push(&paragraph[last..]);
    }
    out
}

fn strip_accents(s: &str) -> String {
    // Curly apostrophes do not decompose, straighten them so contractions
    // still match downstream. NFKD, then drop everything that did not
    // decompose into ASCII.
    s.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            c => c,
        })
        .nfkd()
        .filter(char::is_ascii)
        .collect()
}

fn strip_html(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s);
    RE_HTML_TAG.replace_all(&decoded, " ").into_owned()
}

// Keep letters and whitespace; keep a hyphen only directly between letters.
fn strip_symbols(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_alphabetic() || c.is_whitespace() {
            out.push(c);
        } else if c == '-'
            && i > 0
            && chars[i - 1].is_ascii_alphabetic()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_alphabetic())
        {
            out.push(c);
        }
    }
    out
}

/// Document after normalization: the records plus, for traceability, the
/// phrase folds per record index (only indices that had any).
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    pub records: Vec<SentenceRecord>,
    pub matches: Vec<(usize, Vec<PhraseMatch>)>,
}

/// Per-sentence pipeline bound to the shared caches it reads.
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
    index: &'a MultiwordIndex,
    aliases: Option<&'a AliasMap>,
    stopwords: &'a HashSet<String>,
    known: &'a HashSet<String>,
}

impl<'a> Normalizer<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        index: &'a MultiwordIndex,
        aliases: Option<&'a AliasMap>,
        stopwords: &'a HashSet<String>,
        known: &'a HashSet<String>,
    ) -> Self {
        Self {
            lexicon,
            index,
            aliases,
            stopwords,
            known,
        }
    }

    /// Whole document in, one record per sentence out. Scores stay unset.
    pub fn tokenize_document(&self, raw: &str) -> NormalizedDocument {
        let mut records = Vec::new();
        let mut matches = Vec::new();
        for (p_idx, paragraph) in split_paragraphs(raw).into_iter().enumerate() {
            for (s_idx, sentence) in split_sentences(paragraph).into_iter().enumerate() {
                let (tokens, folds) = self.normalize_sentence(sentence);
                if !folds.is_empty() {
                    matches.push((records.len(), folds));
                }
                records.push(SentenceRecord::new(p_idx + 1, s_idx + 1, sentence, tokens));
            }
        }
        NormalizedDocument { records, matches }
    }

    /// The nine cleaning steps for one sentence, in their fixed order.
    pub fn normalize_sentence(&self, sentence: &str) -> (Vec<String>, Vec<PhraseMatch>) {
        // 1) case fold
        let s = sentence.to_lowercase();
        // 2) accents to closest ASCII
        let s = strip_accents(&s);
        // 3) HTML out (entities first, then tags)
        let s = strip_html(&s);
        // 4) contractions, while the apostrophes still exist
        let s = contractions::expand(&s);
        // 5) symbols out
        let s = strip_symbols(&s);
        // 6) tokenize
        let raw_tokens: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        // 7) fold multiword phrases
        let (folded, folds) = fold_phrases(&raw_tokens, self.index, self.aliases);
        // 8) + 9) stopword filter on single tokens, lemmatize the survivors
        let tokens = self.filter_and_lemmatize(folded);
        (tokens, folds)
    }

    // Folded phrases are exempt from both filtering and lemmatization; they
    // already carry lexicon-defined sentiment. Surviving single tokens are
    // tagged as one sequence and each occurrence is replaced in positional
    // order, so repeated words keep their per-position lemma.
    fn filter_and_lemmatize(&self, folded: Vec<String>) -> Vec<String> {
        let kept: Vec<String> = folded
            .into_iter()
            .filter(|t| t.contains(' ') || !self.stopwords.contains(t))
            .collect();

        let singles: Vec<String> = kept.iter().filter(|t| !t.contains(' ')).cloned().collect();
        let tags = lemma::tag_tokens(&singles);
        let mut lemmas = singles.iter().zip(tags.iter()).map(|(word, &tag)| {
            if self.lexicon.contains(word) {
                // lexicon-form preference beats grammatical normalization
                word.clone()
            } else {
                lemma::reduce(word, tag, self.known)
            }
        });

        kept.into_iter()
            .map(|t| {
                if t.contains(' ') {
                    t
                } else {
                    lemmas.next().unwrap_or(t)
                }
            })
            .collect()
    }
}
