// tests/pipeline_report.rs
// End-to-end runs over the public API with small injected lexicons.

use review_sentiment_analyzer::{
    analyze_document, AnalysisContext, CoreConfig, Lexicon, LoadError,
};

fn small_lexicon() -> Lexicon {
    Lexicon::from_entries([
        ("good", 3),
        ("bad", -3),
        ("not good", -2),
        ("nice", 1),
        ("awful", -5),
        ("terrible", -4),
        ("fun", 1),
        ("great", 2),
    ])
}

fn ctx() -> AnalysisContext {
    let config = CoreConfig {
        alias_path: "no-such-alias-file.tsv".into(),
        ..CoreConfig::default()
    };
    AnalysisContext::with_lexicon(config, small_lexicon())
}

#[test]
fn negated_phrase_folds_and_scores() {
    let report = analyze_document(&ctx(), "Not good.").unwrap();
    assert_eq!(report.sentences.len(), 1);
    assert_eq!(report.sentences[0].tokens, vec!["not good".to_string()]);
    let score = report.sentences[0].score.unwrap();
    assert!((score - (-0.4)).abs() < 1e-9);

    assert_eq!(report.phrase_matches.len(), 1);
    let fold = &report.phrase_matches[0].phrases[0];
    assert_eq!(fold.term, "not good");
    assert_eq!(fold.score, -2);
    assert_eq!((fold.start, fold.length), (0, 2));
}

#[test]
fn fixed_window_example_single_window_wins_both_tracks() {
    let report = analyze_document(&ctx(), "Nice. Awful terrible. Great fun.").unwrap();
    let scores: Vec<f64> = report
        .sentences
        .iter()
        .map(|r| r.score.unwrap())
        .collect();
    assert!((scores[0] - 0.2).abs() < 1e-9);
    assert!((scores[1] - (-0.9)).abs() < 1e-9);
    assert!((scores[2] - 0.3).abs() < 1e-9);

    let fixed = report.fixed_window.as_found().unwrap();
    assert_eq!(fixed.most_positive, fixed.most_negative);
    assert_eq!(fixed.most_positive.segments.len(), 1);
    let window = &fixed.most_positive.segments[0];
    assert!((window.score - (-0.4)).abs() < 1e-9);
    assert_eq!(window.text, "Nice. Awful terrible. Great fun.");
    assert_eq!((window.start, window.end), (0, 2));
}

#[test]
fn multi_paragraph_review_full_report() {
    let raw = "A good film. Fun story. Not good.<br /><br />Awful movie. Bad and terrible. Not fun.";
    let report = analyze_document(&ctx(), raw).unwrap();
    assert!(!report.respaced);
    assert_eq!(report.sentences.len(), 6);

    let coords: Vec<(usize, usize)> = report
        .sentences
        .iter()
        .map(|r| (r.paragraph, r.sentence))
        .collect();
    assert_eq!(
        coords,
        vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
    );

    let extremes = report.extreme_sentences.as_found().unwrap();
    assert_eq!(extremes.most_positive.text, "A good film.");
    assert!((extremes.most_positive.score - 0.3).abs() < 1e-9);
    assert_eq!(extremes.most_negative.text, "Bad and terrible.");
    assert!((extremes.most_negative.score - (-0.7)).abs() < 1e-9);

    // only full in-paragraph placements qualify
    let fixed = report.fixed_window.as_found().unwrap();
    assert!((fixed.most_positive.score - 0.0).abs() < 1e-9);
    assert_eq!(
        (
            fixed.most_positive.segments[0].start,
            fixed.most_positive.segments[0].end
        ),
        (0, 2)
    );
    assert!((fixed.most_negative.score - (-1.1)).abs() < 1e-9);
    assert_eq!(
        (
            fixed.most_negative.segments[0].start,
            fixed.most_negative.segments[0].end
        ),
        (3, 5)
    );

    let variable = report.variable_window.as_found().unwrap();
    assert!((variable.most_positive.score - 0.4).abs() < 1e-9);
    assert_eq!(
        variable.most_positive.segments[0].text,
        "A good film. Fun story."
    );
    assert!((variable.most_negative.score - (-1.2)).abs() < 1e-9);
    assert_eq!(
        variable.most_negative.segments[0].text,
        "Awful movie. Bad and terrible."
    );
}

#[test]
fn empty_document_serializes_insufficient_outcomes() {
    let report = analyze_document(&ctx(), "").unwrap();
    assert!(report.sentences.is_empty());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["respaced"], serde_json::json!(false));
    for field in ["extreme_sentences", "fixed_window", "variable_window"] {
        assert_eq!(json[field]["status"], "insufficient_data");
    }
}

#[test]
fn alias_file_maps_surface_phrases() {
    let dir = tempfile::tempdir().unwrap();
    let alias_path = dir.path().join("aliases.tsv");
    std::fs::write(&alias_path, "# test aliases\nkool kat\tcool cat\n").unwrap();
    let config = CoreConfig {
        alias_path,
        ..CoreConfig::default()
    };
    let ctx = AnalysisContext::with_lexicon(config, Lexicon::from_entries([("cool cat", 4)]));

    let report = analyze_document(&ctx, "A kool kat.").unwrap();
    assert_eq!(report.sentences[0].tokens, vec!["cool cat".to_string()]);
    let fold = &report.phrase_matches[0].phrases[0];
    assert_eq!(fold.term, "cool cat");
    assert_eq!(fold.score, 4);
    // surface length, not canonical length
    assert_eq!((fold.start, fold.length), (1, 2));
    assert!((report.sentences[0].score.unwrap() - 0.8).abs() < 1e-9);
}

#[test]
fn malformed_alias_line_fails_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let alias_path = dir.path().join("aliases.tsv");
    std::fs::write(&alias_path, "this line has no tab\n").unwrap();
    let config = CoreConfig {
        alias_path,
        ..CoreConfig::default()
    };
    let ctx = AnalysisContext::with_lexicon(config, Lexicon::from_entries([("good", 3)]));

    let err = analyze_document(&ctx, "Good.").unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedAliasLine { line: 1, .. }
    ));
}

#[test]
fn both_paragraph_marker_spellings_split() {
    for marker in ["<br /><br />", "<br/><br/>"] {
        let raw = format!("Good film.{marker}Bad film.");
        let report = analyze_document(&ctx(), &raw).unwrap();
        assert_eq!(report.sentences.len(), 2, "marker {marker:?}");
        assert_eq!(report.sentences[0].paragraph, 1);
        assert_eq!(report.sentences[1].paragraph, 2);
    }
}

#[test]
fn space_free_document_runs_the_full_pipeline() {
    let lexicon = Lexicon::from_entries([("great", 3), ("love", 3), ("terrible", -3)]);
    let config = CoreConfig {
        alias_path: "no-such-alias-file.tsv".into(),
        ..CoreConfig::default()
    };
    let ctx = AnalysisContext::with_lexicon(config, lexicon);

    let report = analyze_document(&ctx, "greatmovie.iloveit.<br/><br/>terribleending.").unwrap();
    assert!(report.respaced);
    assert_eq!(report.sentences.len(), 3);
    assert_eq!(report.sentences[0].original, "great movie.");
    assert_eq!(report.sentences[1].original, "i love it.");
    assert_eq!(report.sentences[2].original, "terrible ending.");
    assert_eq!(report.sentences[2].paragraph, 2);

    let extremes = report.extreme_sentences.as_found().unwrap();
    assert_eq!(extremes.most_positive.text, "i love it.");
    assert_eq!(extremes.most_negative.text, "terrible ending.");

    let variable = report.variable_window.as_found().unwrap();
    assert_eq!(
        variable.most_positive.segments[0].text,
        "great movie. i love it."
    );
    assert!((variable.most_positive.score - 0.9).abs() < 1e-9);
}
