//! End-to-end behaviour of the TF-IDF summarizer.

use tfidf_summarizer::{
    summarize, Error, Language, LexicalNormalizer, SentenceKey, StopwordFilter, SummarizerConfig,
    TfIdfSummarizer,
};

const ANIMALS: &str = "Cats are great pets. Cats are independent animals. \
                       Dogs are loyal companions. Dogs need daily exercise.";

const ZEBRA: &str = "Zebra zebra zebra zebra. It is what it is. Giraffes eat acacia leaves.";

fn summarizer() -> TfIdfSummarizer<f64> {
    TfIdfSummarizer::default()
}

#[test]
fn empty_document_gives_empty_summary() {
    assert_eq!(summarize(""), "");
    assert_eq!(summarize("  \n\t  "), "");
    let summary = summarizer().analyze("");
    assert!(summary.sentences.is_empty());
    assert!(summary.threshold.is_none());
}

#[test]
fn stopword_only_document_gives_empty_summary() {
    let summary = summarizer().analyze("It is what it is.");
    assert_eq!(summary.sentences.len(), 1);
    assert!(summary.scores.is_empty());
    assert!(summary.threshold.is_none());
    assert_eq!(summary.text(), "");
}

#[test]
fn single_sentence_scores_zero_and_is_kept() {
    let text = "Volcanic basalt forms when lava cools.";
    let summary = summarizer().analyze(text);
    assert_eq!(summary.score(&SentenceKey(0)), Some(0.0));
    assert_eq!(summary.threshold, Some(0.0));
    assert_eq!(summary.text(), text);
}

#[test]
fn repeated_rare_term_beats_stopword_sentence() {
    let summary = summarizer().analyze(ZEBRA);
    assert_eq!(summary.sentences.len(), 3);
    assert!(summary.frequency_matrix[&SentenceKey(1)].is_empty());
    assert!(summary.score(&SentenceKey(1)).is_none());

    let zebra = summary.score(&SentenceKey(0)).unwrap();
    let giraffe = summary.score(&SentenceKey(2)).unwrap();
    assert!(zebra > giraffe);
    // TF = 4 occurrences / 1 distinct term, IDF = log10(3 / 1)
    assert!((zebra - 4.0 * 3f64.log10()).abs() < 1e-12);
    assert_eq!(summary.text(), "Zebra zebra zebra zebra.");
}

#[test]
fn stopwords_never_become_terms() {
    let summary = summarizer().analyze(ANIMALS);
    assert_eq!(summary.frequency_matrix.len(), 4);
    let stopwords = StopwordFilter::new(Language::English);
    for table in summary.frequency_matrix.values() {
        assert!(!table.contains_term("are"));
        assert!(!table.contains_term("is"));
        for term in table.term_set_iter() {
            assert!(!stopwords.is_stopword(term), "stopword {term} was counted");
        }
    }
    assert!(summary.frequency_matrix[&SentenceKey(0)].contains_term("cat"));
    assert!(summary.frequency_matrix[&SentenceKey(2)].contains_term("dog"));
}

#[test]
fn animals_scores_and_summary() {
    let summary = summarizer().analyze(ANIMALS);
    let term_nums: Vec<usize> = summary.frequency_matrix.values().map(|t| t.term_num()).collect();
    assert_eq!(term_nums, vec![3, 3, 3, 4]);
    assert!(summary.frequency_matrix[&SentenceKey(0)].contains_term("great"));
    assert!(summary.frequency_matrix[&SentenceKey(3)].contains_term("need"));

    // cat/dog: IDF log10(2), every other term: IDF log10(4) = 2 * log10(2)
    let log2 = 2f64.log10();
    let three_terms = 5.0 * log2 / 9.0;
    let four_terms = 7.0 * log2 / 16.0;
    for key in 0..3 {
        assert!((summary.score(&SentenceKey(key)).unwrap() - three_terms).abs() < 1e-12);
    }
    assert!((summary.score(&SentenceKey(3)).unwrap() - four_terms).abs() < 1e-12);

    let mean = (3.0 * three_terms + four_terms) / 4.0;
    assert!((summary.threshold.unwrap() - 1.3 * mean).abs() < 1e-12);
    // best score sits below mean * 1.3
    assert_eq!(summary.text(), "");

    let config = SummarizerConfig::default().with_threshold_multiplier(1.0);
    let at_mean: TfIdfSummarizer<f64> = TfIdfSummarizer::new(config).unwrap();
    assert_eq!(
        at_mean.summarize(ANIMALS),
        "Cats are great pets. Cats are independent animals. Dogs are loyal companions."
    );
}

#[test]
fn shared_term_idf_matches_its_document_frequency() {
    let summary = summarizer().analyze(ANIMALS);
    assert_eq!(summary.document_frequency.get_term_count("cat"), 2);
    assert_eq!(summary.document_frequency.get_term_count("dog"), 2);
    let expected = 2f64.log10();
    for key in [SentenceKey(0), SentenceKey(1)] {
        assert!((summary.idf_matrix[&key]["cat"] - expected).abs() < 1e-12);
    }
}

#[test]
fn term_in_every_sentence_has_zero_idf() {
    let summary = summarizer().analyze("Lava flows. Lava cools. Lava hardens.");
    assert_eq!(summary.idf_matrix.len(), 3);
    for row in summary.idf_matrix.values() {
        assert_eq!(row["lava"], 0.0);
    }
}

#[test]
fn single_term_document_keeps_every_sentence() {
    let text = "Rust rust. Rust!";
    let summary = summarizer().analyze(text);
    assert_eq!(summary.document_frequency.vocab_size(), 1);
    assert!(summary.scores.values().all(|&score| score == 0.0));
    assert_eq!(summary.threshold, Some(0.0));
    assert_eq!(summary.text(), text);
}

#[test]
fn sentences_sharing_a_long_prefix_stay_distinct() {
    let text = "The quick brown fox watches lava. The quick brown fox sleeps soundly.";
    let summary = summarizer().analyze(text);
    assert_eq!(summary.frequency_matrix.len(), 2);
    assert_eq!(summary.scores.len(), 2);
    assert_ne!(summary.tf_matrix[&SentenceKey(0)], summary.tf_matrix[&SentenceKey(1)]);
}

#[test]
fn repeated_calls_are_deterministic() {
    let s = summarizer();
    let first = s.summarize(ZEBRA);
    for _ in 0..5 {
        assert_eq!(s.summarize(ZEBRA), first);
    }
    assert_eq!(s.summarize(ANIMALS), s.summarize(ANIMALS));
}

#[test]
fn higher_multiplier_never_selects_more() {
    let text = format!("{ANIMALS} {ZEBRA} Penguins huddle on drifting ice.");
    let mut previous = usize::MAX;
    for multiplier in [0.0, 0.5, 1.0, 1.3, 2.0, 5.0] {
        let config = SummarizerConfig::default().with_threshold_multiplier(multiplier);
        let summarizer: TfIdfSummarizer<f64> = TfIdfSummarizer::new(config).unwrap();
        let selected = summarizer.analyze(&text).selected.len();
        assert!(selected <= previous, "multiplier {multiplier} selected {selected} > {previous}");
        previous = selected;
    }
}

#[test]
fn zero_multiplier_keeps_every_scored_sentence() {
    let config = SummarizerConfig::default().with_threshold_multiplier(0.0);
    let summarizer: TfIdfSummarizer<f64> = TfIdfSummarizer::new(config).unwrap();
    let summary = summarizer.analyze(ZEBRA);
    assert_eq!(summary.selected, vec![SentenceKey(0), SentenceKey(2)]);
    assert_eq!(
        summary.text(),
        "Zebra zebra zebra zebra. Giraffes eat acacia leaves."
    );
}

#[test]
fn f32_and_f64_agree() {
    let s32: TfIdfSummarizer<f32> = TfIdfSummarizer::new(SummarizerConfig::default()).unwrap();
    assert_eq!(s32.summarize(ZEBRA), summarizer().summarize(ZEBRA));
}

#[test]
fn custom_normalizer_is_used() {
    let normalizer = LexicalNormalizer::with_parts(StopwordFilter::from_list(&["zebra"]), None);
    let summarizer: TfIdfSummarizer<f64> =
        TfIdfSummarizer::with_normalizer(SummarizerConfig::default(), normalizer).unwrap();
    let summary = summarizer.analyze(ZEBRA);
    assert!(summary.frequency_matrix[&SentenceKey(0)].is_empty());
    assert!(summary.frequency_matrix[&SentenceKey(2)].contains_term("giraffes"));
}

#[test]
fn invalid_config_is_rejected() {
    let config = SummarizerConfig::default().with_log_base(1.0);
    assert!(matches!(
        TfIdfSummarizer::<f64>::new(config),
        Err(Error::InvalidConfig { field: "log_base", .. })
    ));
}

#[test]
fn non_utf8_input_is_rejected() {
    let err = summarizer().summarize_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(
        summarizer().summarize_bytes(ZEBRA.as_bytes()).unwrap(),
        summarizer().summarize(ZEBRA)
    );
}

#[test]
fn batch_matches_sequential() {
    let docs = vec![ANIMALS, ZEBRA, "", "Rust rust. Rust!"];
    let s = summarizer();
    let batch = s.summarize_batch(&docs);
    let sequential: Vec<String> = docs.iter().map(|d| s.summarize(d)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn top_sentences_are_ranked() {
    let summary = summarizer().analyze(ZEBRA);
    let top = summary.top_sentences(5);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0.key, SentenceKey(0));
    assert!(top[0].1 >= top[1].1);
}
