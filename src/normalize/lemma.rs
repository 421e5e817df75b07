// src/normalize/lemma.rs
//! Part-of-speech tagging and lemma reduction for the single tokens that
//! survive stopword filtering. The tagger is a compact rule tagger over four
//! classes (adjective, verb, noun, adverb) with noun as the fallback class;
//! reduction uses suffix-detachment rules plus an irregular table, and a
//! candidate is accepted only if the known vocabulary contains it. When
//! nothing validates the surface form is kept.

use std::collections::HashSet;

/// The four lemma classes the reducer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

// Auxiliaries and modals; also used as a one-step context hint.
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "having", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("ate", "eat"),
    ("became", "become"),
    ("been", "be"),
    ("began", "begin"),
    ("bought", "buy"),
    ("broke", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("did", "do"),
    ("drew", "draw"),
    ("drove", "drive"),
    ("fell", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("forgot", "forget"),
    ("found", "find"),
    ("gave", "give"),
    ("gone", "go"),
    ("got", "get"),
    ("grew", "grow"),
    ("had", "have"),
    ("heard", "hear"),
    ("held", "hold"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("rose", "rise"),
    ("said", "say"),
    ("sang", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("sent", "send"),
    ("shot", "shoot"),
    ("showed", "show"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("stood", "stand"),
    ("swam", "swim"),
    ("taught", "teach"),
    ("thought", "think"),
    ("threw", "throw"),
    ("took", "take"),
    ("understood", "understand"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("won", "win"),
    ("wore", "wear"),
    ("wrote", "write"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("best", "good"),
    ("better", "good"),
    ("further", "far"),
    ("furthest", "far"),
    ("worse", "bad"),
    ("worst", "bad"),
];

// Detachment rules per class, tried in order; the first candidate found in
// the vocabulary wins.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "less", "ish", "able", "ible"];

fn table_lookup(table: &[(&'static str, &'static str)], word: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(surface, _)| surface.cmp(&word))
        .ok()
        .map(|ix| table[ix].1)
}

fn irregular(word: &str, tag: PosTag) -> Option<&'static str> {
    match tag {
        PosTag::Adjective => table_lookup(IRREGULAR_ADJECTIVES, word),
        PosTag::Verb => table_lookup(IRREGULAR_VERBS, word),
        PosTag::Noun => table_lookup(IRREGULAR_NOUNS, word),
        PosTag::Adverb => None,
    }
}

fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(&word)
}

fn tag_word(word: &str, after_auxiliary: bool) -> PosTag {
    if table_lookup(IRREGULAR_ADJECTIVES, word).is_some() {
        return PosTag::Adjective;
    }
    if is_auxiliary(word) || table_lookup(IRREGULAR_VERBS, word).is_some() {
        return PosTag::Verb;
    }
    if word.len() > 4 && word.ends_with("ly") {
        return PosTag::Adverb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PosTag::Adjective;
    }
    if word.len() > 4 && word.ends_with("ing") {
        return PosTag::Verb;
    }
    if word.len() > 3 && word.ends_with("ed") {
        return PosTag::Verb;
    }
    if after_auxiliary {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// Tag a token sequence. The only cross-token signal is an auxiliary directly
/// before the word; everything else is per-token, with noun as the default.
pub fn tag_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<PosTag> {
    let mut tags = Vec::with_capacity(tokens.len());
    let mut after_auxiliary = false;
    for token in tokens {
        let word = token.as_ref();
        tags.push(tag_word(word, after_auxiliary));
        after_auxiliary = is_auxiliary(word);
    }
    tags
}

/// Reduce one word to its lemma for the given class. Candidates produced by
/// the detachment rules count only if `known` contains them; otherwise the
/// surface form is returned unchanged.
pub fn reduce(word: &str, tag: PosTag, known: &HashSet<String>) -> String {
    if let Some(lemma) = irregular(word, tag) {
        return lemma.to_string();
    }
    let rules = match tag {
        PosTag::Adjective => ADJECTIVE_RULES,
        PosTag::Verb => VERB_RULES,
        PosTag::Noun => NOUN_RULES,
        PosTag::Adverb => &[],
    };
    for (suffix, replacement) in rules {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        let candidate = format!("{stem}{replacement}");
        if candidate.len() >= 2 && known.contains(&candidate) {
            return candidate;
        }
    }
    word.to_string()
}
