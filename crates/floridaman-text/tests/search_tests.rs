use floridaman_core::config::SearchSettings;
use floridaman_core::traits::{HeadlineSearcher, SearchOutcome};
use floridaman_core::types::{HeadlineRecord, SourceKind, Trope};
use floridaman_text::{ngrams, stem, tokenize, AnalyzedQuery, HeadlineIndex, HeadlineSearchEngine};

fn scenario() -> Vec<HeadlineRecord> {
    vec![
        HeadlineRecord::new("Florida man wrestles alligator")
            .with_flag(Trope::Animals, "true")
            .with_url("https://example.org/gator"),
        HeadlineRecord::new("Florida woman arrested for DUI").with_flag(Trope::Substances, true),
    ]
}

fn engine(records: &[HeadlineRecord]) -> HeadlineSearchEngine {
    HeadlineSearchEngine::build(records, SearchSettings::default())
}

#[test]
fn exact_term_ranks_matching_headline_first() {
    let engine = engine(&scenario());
    let outcome = engine.search("alligator");
    let SearchOutcome::Ranked(hits) = outcome else { panic!("expected bm25 hits, got {outcome:?}") };
    assert_eq!(hits[0].headline, "Florida man wrestles alligator");
    assert_eq!(hits[0].url, "https://example.org/gator");
    assert!(hits[0].score > 0.0);
    assert_eq!(hits[0].source, SourceKind::Bm25);
    assert_eq!(hits[0].matched_terms, vec!["alligator".to_string()]);
    assert!(hits.iter().all(|h| h.headline != "Florida woman arrested for DUI"));
}

#[test]
fn gibberish_is_an_explicit_no_match() {
    let engine = engine(&scenario());
    assert_eq!(engine.search("zzzqqq"), SearchOutcome::NoMatches);
}

#[test]
fn blank_query_is_not_a_search() {
    let engine = engine(&scenario());
    let outcome = engine.search("   ");
    assert_eq!(outcome, SearchOutcome::EmptyQuery);
    assert!(outcome.is_empty());
    assert!(!outcome.used_fallback());
}

#[test]
fn typo_falls_back_to_fuzzy_matching() {
    let engine = engine(&scenario());
    let outcome = engine.search("aligator");
    assert!(outcome.used_fallback());
    let hits = outcome.hits();
    assert_eq!(hits[0].headline, "Florida man wrestles alligator");
    assert_eq!(hits[0].score, 0.5);
    assert_eq!(hits[0].source, SourceKind::Fuzzy);
    assert!(hits[0].matched_terms.is_empty());
}

#[test]
fn fallback_is_skipped_when_stems_match() {
    let records = vec![HeadlineRecord::new("Man feeds gator hot dogs"), HeadlineRecord::new("Woman sells gatorade")];
    let outcome = engine(&records).search("Gators");
    let SearchOutcome::Ranked(hits) = outcome else { panic!("expected bm25 hits, got {outcome:?}") };
    assert_eq!(hits[0].headline, "Man feeds gator hot dogs");
    // "gatorade" only earns the substring bonus.
    assert_eq!(hits.len(), 2);
    assert!((hits[1].score - 0.2).abs() < 1e-9);
    assert!(hits[1].matched_terms.is_empty());
}

#[test]
fn more_query_terms_present_ranks_higher() {
    let records = vec![
        HeadlineRecord::new("Burmese lizard found in garage"),
        HeadlineRecord::new("Burmese python found in garage"),
        HeadlineRecord::new("Neighbors report loud music"),
    ];
    let hits = engine(&records).search("python garage").hits().to_vec();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].headline, "Burmese python found in garage");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn result_counts_are_capped() {
    let records: Vec<HeadlineRecord> = (0..10).map(|i| HeadlineRecord::new(format!("Man {i} feeds gator"))).collect();
    let engine = engine(&records);
    assert_eq!(engine.len(), 10);

    let ranked = engine.search("gator");
    assert!(!ranked.used_fallback());
    assert_eq!(ranked.hits().len(), 7);

    let fuzzy = engine.search("gatr");
    assert!(fuzzy.used_fallback());
    assert_eq!(fuzzy.hits().len(), 5);
    // Equal scores keep input order.
    assert_eq!(fuzzy.hits()[0].headline, "Man 0 feeds gator");
    assert_eq!(fuzzy.hits()[4].headline, "Man 4 feeds gator");

    let tight = HeadlineSearchEngine::build(&records, SearchSettings { max_results: 2, ..SearchSettings::default() });
    assert_eq!(tight.search("gator").hits().len(), 2);
}

#[test]
fn matched_terms_skip_short_terms() {
    let engine = engine(&scenario());
    let hits = engine.search("man wrestles alligator").hits().to_vec();
    assert_eq!(hits[0].matched_terms, vec!["wrestle", "alligator", "wrestle alligator"]);

    let dui = engine.search("DUI");
    assert_eq!(dui.hits().len(), 1);
    assert!(dui.hits()[0].matched_terms.is_empty());
}

#[test]
fn index_skips_blank_headlines() {
    let mut records = scenario();
    records.push(HeadlineRecord::default());
    records.push(HeadlineRecord::new(""));
    let index = HeadlineIndex::build(&records);
    assert_eq!(index.docs().len(), 2);
    assert_eq!(index.doc_freq("alligator"), 1);
    assert_eq!(index.doc_freq("wrestle alligator"), 1);
    assert_eq!(index.doc_freq("florida"), 0);
    assert_eq!(index.avg_len(), 2.0);
    assert!(index.idf("alligator") > 0.0);

    let empty = HeadlineIndex::build(&[]);
    assert_eq!(empty.avg_len(), 1.0);
    assert_eq!(HeadlineSearchEngine::new(empty, SearchSettings::default()).search("gator"), SearchOutcome::NoMatches);
}

#[test]
fn analyzer_stems_and_grams() {
    assert_eq!(stem("things"), "th");
    assert_eq!(stem("parties"), "part");
    assert_eq!(stem("jumped"), "jump");
    assert_eq!(stem("faster"), "fast");
    assert_eq!(stem("biggest"), "bigg");
    assert_eq!(stem("dogs"), "dog");
    assert_eq!(stem("cat"), "cat");
    assert_eq!(tokenize("The Florida man stole 3 boats"), vec!["stole", "3", "boat"]);
    let grams = ngrams(&["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(grams, vec!["a b", "b c", "a b c"]);
}

#[test]
fn two_word_query_earns_substring_bonus_on_stemmed_phrase() {
    let records = vec![HeadlineRecord::new("Gator bites tourist"), HeadlineRecord::new("Tourist bites gator")];
    assert_eq!(AnalyzedQuery::new("Gator bites").phrase, "gator bite");

    let score_of = |settings: SearchSettings, headline: &str| {
        let outcome = HeadlineSearchEngine::build(&records, settings).search("Gator bites");
        outcome.hits().iter().find(|h| h.headline == headline).map(|h| h.score).expect("hit")
    };
    let plain = SearchSettings { substring_bonus: 0.0, ..SearchSettings::default() };
    let bonus = score_of(SearchSettings::default(), "Gator bites tourist") - score_of(plain.clone(), "Gator bites tourist");
    assert!((bonus - 0.2).abs() < 1e-9, "bonus was {bonus}");
    let none = score_of(SearchSettings::default(), "Tourist bites gator") - score_of(plain, "Tourist bites gator");
    assert!(none.abs() < 1e-9);
}
