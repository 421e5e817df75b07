//! Document-wide extremal sentences.
//!
//! Only records that kept tokens qualify; a record whose tokens all fell to
//! filtering never wins on its placeholder zero. Every qualifying record
//! tied at an extreme is collected in document order, so ties are visible
//! instead of silently resolved.

use serde::Serialize;

use crate::error::Outcome;
use crate::record::SentenceRecord;

/// One extreme: the score plus every qualifying sentence text at that score,
/// joined with newlines in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeSentences {
    pub score: f64,
    pub text: String,
}

/// Max and min tracks computed independently over the same records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceExtremes {
    pub most_positive: ExtremeSentences,
    pub most_negative: ExtremeSentences,
}

pub fn find_extremes(records: &[SentenceRecord]) -> Outcome<SentenceExtremes> {
    let qualifying: Vec<&SentenceRecord> = records.iter().filter(|r| r.has_tokens()).collect();
    if qualifying.is_empty() {
        return Outcome::InsufficientData;
    }
    let max = qualifying
        .iter()
        .map(|r| r.score_or_zero())
        .fold(f64::NEG_INFINITY, f64::max);
    let min = qualifying
        .iter()
        .map(|r| r.score_or_zero())
        .fold(f64::INFINITY, f64::min);
    Outcome::Found(SentenceExtremes {
        most_positive: collect_at(&qualifying, max),
        most_negative: collect_at(&qualifying, min),
    })
}

fn collect_at(qualifying: &[&SentenceRecord], score: f64) -> ExtremeSentences {
    let text = qualifying
        .iter()
        .filter(|r| r.score_or_zero() == score)
        .map(|r| r.original.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    ExtremeSentences { score, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(paragraph: usize, sentence: usize, text: &str, score: Option<f64>) -> SentenceRecord {
        let tokens = match score {
            Some(_) => vec!["token".to_string()],
            None => Vec::new(),
        };
        let mut record = SentenceRecord::new(paragraph, sentence, text, tokens);
        record.score = Some(score.unwrap_or(0.0));
        record
    }

    #[test]
    fn empty_document_is_insufficient() {
        assert!(find_extremes(&[]).is_insufficient());
    }

    #[test]
    fn all_filtered_records_are_insufficient() {
        let records = vec![rec(1, 1, "1987.", None), rec(1, 2, "!!", None)];
        assert!(find_extremes(&records).is_insufficient());
    }

    #[test]
    fn single_sentence_wins_both_tracks() {
        let records = vec![rec(1, 1, "Fine.", Some(0.2))];
        let extremes = find_extremes(&records).found().unwrap();
        assert_eq!(extremes.most_positive.text, "Fine.");
        assert_eq!(extremes.most_negative.text, "Fine.");
        assert_eq!(extremes.most_positive.score, 0.2);
    }

    #[test]
    fn ties_join_in_document_order() {
        let records = vec![
            rec(1, 1, "Great start.", Some(0.6)),
            rec(1, 2, "Dull middle.", Some(-0.4)),
            rec(2, 1, "Great end.", Some(0.6)),
        ];
        let extremes = find_extremes(&records).found().unwrap();
        assert_eq!(extremes.most_positive.text, "Great start.\nGreat end.");
        assert_eq!(extremes.most_positive.score, 0.6);
        assert_eq!(extremes.most_negative.text, "Dull middle.");
    }

    #[test]
    fn filtered_zero_never_beats_qualifying_zero() {
        let records = vec![
            rec(1, 1, "1987.", None),
            rec(1, 2, "Meh stuff.", Some(0.0)),
            rec(1, 3, "Bad stuff.", Some(-0.4)),
        ];
        let extremes = find_extremes(&records).found().unwrap();
        // the empty record scores 0.0 too but must not appear
        assert_eq!(extremes.most_positive.text, "Meh stuff.");
        assert_eq!(extremes.most_negative.text, "Bad stuff.");
    }
}
