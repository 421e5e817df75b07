//! Token-sum scoring.
//!
//! A sentence score is the mean lexicon score of its tokens, rescaled from
//! the nominal lexicon range of [-5, 5] into [-1, 1]. Tokens the lexicon
//! does not know contribute zero but still count toward the mean; an empty
//! token sequence scores zero outright.

use crate::lexicon::Lexicon;
use crate::record::SentenceRecord;

/// Score one token sequence.
pub fn score_tokens(lexicon: &Lexicon, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let sum: i32 = tokens.iter().filter_map(|t| lexicon.score(t)).sum();
    sum as f64 / tokens.len() as f64 / 5.0
}

/// Attach a score to every record, the empty ones included.
pub fn score_records(lexicon: &Lexicon, records: &mut [SentenceRecord]) {
    for record in records.iter_mut() {
        record.score = Some(score_tokens(lexicon, &record.tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([("good", 3), ("bad", -3), ("not good", -2), ("awful", -5)])
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_tokens_score_zero() {
        assert_eq!(score_tokens(&lexicon(), &[]), 0.0);
    }

    #[test]
    fn folded_negation_outweighs_its_parts() {
        let score = score_tokens(&lexicon(), &toks(&["not good"]));
        assert!((score - (-0.4)).abs() < 1e-9);
    }

    #[test]
    fn unknown_tokens_dilute_the_mean() {
        let alone = score_tokens(&lexicon(), &toks(&["good"]));
        let diluted = score_tokens(&lexicon(), &toks(&["good", "mystery"]));
        assert!((alone - 0.6).abs() < 1e-9);
        assert!((diluted - 0.3).abs() < 1e-9);
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let extremes = score_tokens(&lexicon(), &toks(&["awful", "awful", "awful"]));
        assert!((-1.0..=1.0).contains(&extremes));
        assert!((extremes - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn score_records_populates_every_record() {
        let lexicon = lexicon();
        let mut records = vec![
            SentenceRecord::new(1, 1, "Good.", toks(&["good"])),
            SentenceRecord::new(1, 2, "1987.", Vec::new()),
        ];
        score_records(&lexicon, &mut records);
        assert!((records[0].score.unwrap() - 0.6).abs() < 1e-9);
        assert_eq!(records[1].score, Some(0.0));
    }
}
