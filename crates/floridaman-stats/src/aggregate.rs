use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use floridaman_core::config::StatsSettings;
use floridaman_core::traits::RandomSource;
use floridaman_core::types::{HeadlineRecord, SampleHeadline, Trope, TropeVector};
use floridaman_geo::resolve_county;
use floridaman_tropes::{classify, classify_all, CueTable};

use crate::reservoir::Reservoir;
use crate::words::extract_words;

/// Co-occurrence of two or more tropes in one headline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboStats {
    pub count: u64,
    /// `"gator + naked"` style cue pairs, only for headlines where every
    /// active trope yielded a cue.
    pub cue_pairs: BTreeMap<String, u64>,
}

impl ComboStats {
    /// Most frequent cue pair; ties go to the alphabetically first.
    pub fn top_cue_pair(&self) -> Option<(&str, u64)> {
        self.cue_pairs
            .iter()
            .fold(None, |best: Option<(&str, u64)>, (name, count)| match best {
                Some((_, c)) if c >= *count => best,
                _ => Some((name.as_str(), *count)),
            })
    }
}

/// Chart-ready statistics for the whole record set.
///
/// Field names are the rendering contract (`tropeDistribution`,
/// `totalWithLocation`, `byMonth`, `samplesCue`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total: u64,
    pub tropes: BTreeMap<Trope, u64>,
    /// Keys 0..=3; 3 means "three or more".
    pub trope_distribution: BTreeMap<u8, u64>,
    pub combos: BTreeMap<String, ComboStats>,
    pub locations: BTreeMap<String, u64>,
    pub total_with_location: u64,
    pub counties: BTreeMap<String, u64>,
    pub words: BTreeMap<String, u64>,
    pub by_month: BTreeMap<String, u64>,
    pub samples_cue: BTreeMap<Trope, Reservoir<SampleHeadline>>,
    pub samples_other: BTreeMap<Trope, Reservoir<SampleHeadline>>,
}

impl AggregateStats {
    fn empty(sample_capacity: usize) -> Self {
        let per_trope = |v: u64| Trope::ALL.into_iter().map(|t| (t, v)).collect::<BTreeMap<_, _>>();
        let reservoirs = || {
            Trope::ALL
                .into_iter()
                .map(|t| (t, Reservoir::new(sample_capacity)))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            total: 0,
            tropes: per_trope(0),
            trope_distribution: (0..=3u8).map(|k| (k, 0)).collect(),
            combos: BTreeMap::new(),
            locations: BTreeMap::new(),
            total_with_location: 0,
            counties: BTreeMap::new(),
            words: BTreeMap::new(),
            by_month: BTreeMap::new(),
            samples_cue: reservoirs(),
            samples_other: reservoirs(),
        }
    }

    pub fn trope_count(&self, trope: Trope) -> u64 {
        self.tropes.get(&trope).copied().unwrap_or(0)
    }
}

/// Label for a combo key; all four tropes read as one phrase.
pub fn display_combo_name(name: &str) -> String {
    if name.split(" + ").count() == Trope::ALL.len() {
        "All four tropes".to_string()
    } else {
        name.to_string()
    }
}

/// Single-pass aggregation over a record set.
pub struct Aggregator<'a> {
    settings: StatsSettings,
    cues: &'a CueTable,
}

impl Default for Aggregator<'static> {
    fn default() -> Self {
        Self { settings: StatsSettings::default(), cues: CueTable::builtin() }
    }
}

impl<'a> Aggregator<'a> {
    pub fn new(settings: StatsSettings, cues: &'a CueTable) -> Self {
        Self { settings, cues }
    }

    /// Aggregate `records`. `tropes[i]` is the classification of
    /// `records[i]`; records past the end of `tropes` are classified here.
    pub fn run<R>(&self, records: &[HeadlineRecord], tropes: &[TropeVector], rng: &mut R) -> AggregateStats
    where
        R: RandomSource + ?Sized,
    {
        let mut stats = AggregateStats::empty(self.settings.sample_capacity);
        for (i, record) in records.iter().enumerate() {
            let vector = tropes.get(i).copied().unwrap_or_else(|| classify(record));
            self.add(&mut stats, record, &vector, rng);
        }
        debug!(
            total = stats.total,
            with_location = stats.total_with_location,
            months = stats.by_month.len(),
            words = stats.words.len(),
            "aggregated headline records"
        );
        stats
    }

    fn add<R>(&self, stats: &mut AggregateStats, record: &HeadlineRecord, vector: &TropeVector, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        stats.total += 1;
        let headline = record.headline.as_deref().filter(|h| !h.is_empty());

        for trope in vector.active() {
            *stats.tropes.entry(trope).or_insert(0) += 1;
            self.sample(stats, trope, headline, record.url_text(), rng);
        }
        let bucket = vector.count().min(3) as u8;
        *stats.trope_distribution.entry(bucket).or_insert(0) += 1;

        if vector.count() >= 2 {
            self.add_combo(stats, vector, record.headline_text());
        }

        if let Some(location) = record.location_hint.as_deref() {
            if !location.is_empty() && location != self.settings.excluded_location {
                *stats.locations.entry(location.to_string()).or_insert(0) += 1;
                stats.total_with_location += 1;
                if let Some(county) = resolve_county(location) {
                    *stats.counties.entry(county.to_string()).or_insert(0) += 1;
                }
            }
        }

        if let Some(key) = record.month_key() {
            *stats.by_month.entry(key).or_insert(0) += 1;
        }

        for word in extract_words(record.headline_text()) {
            *stats.words.entry(word).or_insert(0) += 1;
        }
    }

    fn sample<R>(&self, stats: &mut AggregateStats, trope: Trope, headline: Option<&str>, url: &str, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let Some(headline) = headline else {
            // Counted so that seen totals still add up to the trope count.
            if let Some(bucket) = stats.samples_other.get_mut(&trope) {
                bucket.skip();
            }
            return;
        };
        let cue_hit = self.cues.matches(headline, trope);
        let buckets = if cue_hit { &mut stats.samples_cue } else { &mut stats.samples_other };
        if let Some(bucket) = buckets.get_mut(&trope) {
            let sample = SampleHeadline { headline: headline.to_string(), source_url: url.to_string(), cue_hit };
            bucket.offer(sample, rng);
        }
    }

    fn add_combo(&self, stats: &mut AggregateStats, vector: &TropeVector, headline: &str) {
        let mut active: Vec<Trope> = vector.active().collect();
        active.sort_by_key(|t| t.label());
        let key = active.iter().map(|t| t.label()).collect::<Vec<_>>().join(" + ");
        let combo = stats.combos.entry(key).or_default();
        combo.count += 1;

        let cues: Option<Vec<String>> = active.iter().map(|t| self.cues.extract(headline, *t)).collect();
        if let Some(cues) = cues {
            *combo.cue_pairs.entry(cues.join(" + ")).or_insert(0) += 1;
        }
    }
}

/// Aggregate with default settings, the built-in cue table and the thread RNG.
pub fn aggregate(records: &[HeadlineRecord]) -> AggregateStats {
    let tropes = classify_all(records);
    Aggregator::default().run(records, &tropes, &mut rand::thread_rng())
}
