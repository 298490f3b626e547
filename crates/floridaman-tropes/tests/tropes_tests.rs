use serde_json::json;

use floridaman_core::types::{HeadlineRecord, Trope};
use floridaman_tropes::{classify, classify_all, combined_cue_test, extract_cue, first_cue_span, highlight, normalize_flag, CueTable};

#[test]
fn flags_accept_bool_and_case_insensitive_true_only() {
    assert!(normalize_flag(Some(&json!(true))));
    assert!(normalize_flag(Some(&json!("TRUE"))));
    assert!(normalize_flag(Some(&json!("True"))));
    assert!(!normalize_flag(Some(&json!(false))));
    assert!(!normalize_flag(Some(&json!("yes"))));
    assert!(!normalize_flag(Some(&json!(" true"))));
    assert!(!normalize_flag(Some(&json!(1))));
    assert!(!normalize_flag(Some(&json!(null))));
    assert!(!normalize_flag(None));
}

#[test]
fn classification_ignores_headline_text() {
    let record = HeadlineRecord::new("Naked man on meth fights alligator with a machete")
        .with_flag(Trope::Animals, "true")
        .with_flag(Trope::Weapons, json!("False"));
    let v = classify(&record);
    assert!(v.animals);
    assert!(!v.nudity && !v.substances && !v.weapons);
    assert_eq!(v.count(), 1);
    assert_eq!(classify(&record), v, "repeat calls agree");
}

#[test]
fn classify_all_is_index_aligned() {
    let records = vec![
        HeadlineRecord::new("a").with_flag(Trope::Nudity, true),
        HeadlineRecord::new("b"),
    ];
    let vectors = classify_all(&records);
    assert_eq!(vectors.len(), 2);
    assert!(vectors[0].nudity);
    assert!(vectors[1].is_empty());
}

#[test]
fn cues_respect_word_boundaries() {
    assert_eq!(extract_cue("concatenate", Trope::Animals), None);
    assert_eq!(extract_cue("Man tries to catch a bus", Trope::Animals), None);
    assert!(!combined_cue_test("Rumor mill spins", Trope::Substances));
    assert_eq!(extract_cue("Man fights CATS at shelter", Trope::Animals).as_deref(), Some("cats"));
}

#[test]
fn extract_prefers_table_order_over_position() {
    // "dog" appears first in the text but "gator" comes first in the table.
    let headline = "Dog chases gator off porch";
    assert_eq!(extract_cue(headline, Trope::Animals).as_deref(), Some("gator"));
    // The combined regex is leftmost in the text.
    let span = first_cue_span(headline, Trope::Animals).expect("span");
    assert_eq!(&headline[span.start..span.end], "Dog");
}

#[test]
fn multi_word_and_hyphenated_cues() {
    assert_eq!(
        extract_cue("Man charged with indecent  exposure at Publix", Trope::Nudity).as_deref(),
        Some("indecent  exposure")
    );
    assert_eq!(extract_cue("Teen waves AR15 at drive-thru", Trope::Weapons).as_deref(), Some("ar15"));
    assert_eq!(extract_cue("Woman high on bath salts", Trope::Substances).as_deref(), Some("bath salts"));
    assert_eq!(extract_cue("Three ponies loose on I-95", Trope::Animals).as_deref(), Some("ponies"));
}

#[test]
fn highlight_splits_around_leftmost_cue() {
    let (before, cue, after) = highlight("Florida man drunk on boat", Trope::Substances).expect("cue");
    assert_eq!(before, "Florida man ");
    assert_eq!(cue, "drunk");
    assert_eq!(after, " on boat");
    assert!(highlight("Florida man buys lottery ticket", Trope::Weapons).is_none());
}

#[test]
fn custom_tables_are_data() {
    let table = CueTable::new(&[(Trope::Animals, &["emu(?:s)?"][..]), (Trope::Nudity, &[][..])]).expect("compile");
    assert_eq!(table.extract("Escaped EMUS block traffic", Trope::Animals).as_deref(), Some("emus"));
    assert!(!table.matches("Escaped emus", Trope::Nudity));
    assert!(!table.matches("Gator", Trope::Weapons), "missing trope never matches");
    assert!(CueTable::new(&[(Trope::Animals, &["(unclosed"][..])]).is_err());
}
