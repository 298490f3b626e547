//! Domain types shared by the trope, geography, stats and text engines.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One scraped headline as delivered by the data-loading collaborator.
///
/// Every field is optional in practice; the engines treat a missing or
/// malformed field as "does not contribute" and never fail on it.
///
/// - `has_*` flags arrive as booleans or as strings (`"True"`, `"false"`);
///   they are kept as raw JSON values and normalised by the classifier.
/// - `date` is free-form; see [`HeadlineRecord::month_key`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location_hint: Option<String>,
    #[serde(default)]
    pub has_animals: Option<Value>,
    #[serde(default)]
    pub has_nudity: Option<Value>,
    #[serde(default)]
    pub has_substances: Option<Value>,
    #[serde(default)]
    pub has_weapons: Option<Value>,
}

impl HeadlineRecord {
    pub fn new(headline: impl Into<String>) -> Self {
        Self { headline: Some(headline.into()), ..Self::default() }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_hint = Some(location.into());
        self
    }

    pub fn with_flag(mut self, trope: Trope, value: impl Into<Value>) -> Self {
        let slot = match trope {
            Trope::Animals => &mut self.has_animals,
            Trope::Nudity => &mut self.has_nudity,
            Trope::Substances => &mut self.has_substances,
            Trope::Weapons => &mut self.has_weapons,
        };
        *slot = Some(value.into());
        self
    }

    /// Raw flag field backing `trope`.
    pub fn flag(&self, trope: Trope) -> Option<&Value> {
        match trope {
            Trope::Animals => self.has_animals.as_ref(),
            Trope::Nudity => self.has_nudity.as_ref(),
            Trope::Substances => self.has_substances.as_ref(),
            Trope::Weapons => self.has_weapons.as_ref(),
        }
    }

    pub fn headline_text(&self) -> &str {
        self.headline.as_deref().unwrap_or("")
    }

    pub fn url_text(&self) -> &str {
        self.source_url.as_deref().unwrap_or("")
    }

    /// Calendar date of the record, if `date` parses.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_calendar_date)
    }

    /// `YYYY-MM` bucket key (1-based, zero-padded month).
    pub fn month_key(&self) -> Option<String> {
        self.parsed_date().map(|d| format!("{:04}-{:02}", d.year(), d.month()))
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse the date shapes seen in scraped feeds. Returns `None` for anything else.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// The four editorial categories a headline may exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trope {
    Animals,
    Nudity,
    Substances,
    Weapons,
}

impl Trope {
    pub const ALL: [Trope; 4] = [Trope::Animals, Trope::Nudity, Trope::Substances, Trope::Weapons];

    pub fn key(self) -> &'static str {
        match self {
            Trope::Animals => "animals",
            Trope::Nudity => "nudity",
            Trope::Substances => "substances",
            Trope::Weapons => "weapons",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trope::Animals => "Animals",
            Trope::Nudity => "Nudity",
            Trope::Substances => "Substances",
            Trope::Weapons => "Weapons",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Trope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Presence of each trope for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TropeVector {
    pub animals: bool,
    pub nudity: bool,
    pub substances: bool,
    pub weapons: bool,
}

impl TropeVector {
    pub fn has(&self, trope: Trope) -> bool {
        match trope {
            Trope::Animals => self.animals,
            Trope::Nudity => self.nudity,
            Trope::Substances => self.substances,
            Trope::Weapons => self.weapons,
        }
    }

    pub fn set(&mut self, trope: Trope, present: bool) {
        match trope {
            Trope::Animals => self.animals = present,
            Trope::Nudity => self.nudity = present,
            Trope::Substances => self.substances = present,
            Trope::Weapons => self.weapons = present,
        }
    }

    /// Present tropes in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Trope> + '_ {
        Trope::ALL.into_iter().filter(|t| self.has(*t))
    }

    pub fn count(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// A retained example headline, as shown in the trope sample panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleHeadline {
    pub headline: String,
    pub source_url: String,
    pub cue_hit: bool,
}

/// Indicates which ranking stage produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Bm25,
    Fuzzy,
}

/// The minimal surface returned by the headline search.
///
/// `score` is stage-specific but higher is always better. `matched_terms` is
/// cosmetic: stemmed query terms literally present in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub headline: String,
    pub url: String,
    pub score: f64,
    pub matched_terms: Vec<String>,
    pub source: SourceKind,
}
