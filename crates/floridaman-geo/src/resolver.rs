use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::counties::{CITY_TO_COUNTY, COUNTY_NAMES};

static STATE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",?\s*\b(?:florida|fl)\b\.?").expect("state token pattern"));
static FT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bft\b").expect("ft pattern"));
static ST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bst\b").expect("st pattern"));
static COUNTY_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+county$").expect("county suffix pattern"));

static ALIASES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    CITY_TO_COUNTY
        .iter()
        .map(|(alias, county)| (normalize_location(alias), *county))
        .collect()
});

static PLAIN_COUNTIES: LazyLock<Vec<(String, &'static str)>> = LazyLock::new(|| {
    COUNTY_NAMES
        .iter()
        .map(|name| (plain(&normalize_location(name)), *name))
        .collect()
});

/// Lowercase, drop standalone "florida"/"fl" tokens and periods, expand
/// `ft` → `fort` and `st` → `saint`, collapse whitespace.
pub fn normalize_location(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let no_state = STATE_TOKEN_RE.replace_all(&lower, "");
    let no_periods = no_state.replace('.', "");
    let fort = FT_RE.replace_all(&no_periods, "fort");
    let saint = ST_RE.replace_all(&fort, "saint");
    saint.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Punctuation other than hyphens becomes whitespace.
fn plain(normalized: &str) -> String {
    normalized
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_trailing_word<'a>(s: &'a str, word: &str) -> &'a str {
    match s.strip_suffix(word) {
        Some(head) if head.ends_with(char::is_whitespace) => head.trim_end(),
        _ => s,
    }
}

/// Resolve a free-text location to a canonical county name.
///
/// Alias lookup on the normalised string (also with a trailing "city" or
/// "county" removed), then substring containment of a canonical county name,
/// first in enumeration order. `None` when neither stage hits.
pub fn resolve_county(location: &str) -> Option<&'static str> {
    let norm = normalize_location(location);
    if norm.is_empty() {
        return None;
    }
    let candidates = [norm.as_str(), strip_trailing_word(&norm, "city"), strip_trailing_word(&norm, "county")];
    if let Some(county) = candidates.iter().find_map(|key| ALIASES.get(*key).copied()) {
        return Some(county);
    }
    let haystack = plain(&norm);
    PLAIN_COUNTIES
        .iter()
        .find(|(needle, _)| haystack.contains(needle.as_str()))
        .map(|(_, county)| *county)
}

/// `"Duval County"` → `"Duval"`; other names are only trimmed.
pub fn strip_county_suffix(name: &str) -> String {
    COUNTY_SUFFIX_RE.replace(name.trim(), "").trim().to_string()
}
