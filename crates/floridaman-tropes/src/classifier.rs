use serde_json::Value;

use floridaman_core::types::{HeadlineRecord, Trope, TropeVector};

/// Boolean passes through; a string counts iff it equals `"true"` ignoring case.
/// Anything else (absent, number, null) is false.
pub fn normalize_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Trope presence from the upstream labels only. Headline text is never consulted.
pub fn classify(record: &HeadlineRecord) -> TropeVector {
    let mut vector = TropeVector::default();
    for trope in Trope::ALL {
        vector.set(trope, normalize_flag(record.flag(trope)));
    }
    vector
}

/// Classify a record set once; index `i` holds the vector for `records[i]`.
pub fn classify_all(records: &[HeadlineRecord]) -> Vec<TropeVector> {
    records.iter().map(classify).collect()
}
