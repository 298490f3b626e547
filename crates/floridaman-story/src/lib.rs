//! floridaman-story
//!
//! Builds every chart-ready structure for one record set in a single shot:
//! trope table, aggregate statistics, county choropleth and the search index.
//! A rebuild means constructing a new [`Story`]; nothing is updated in place.
use serde::Serialize;
use tracing::info;

use floridaman_core::config::EngineSettings;
use floridaman_core::traits::{HeadlineSearcher, RandomSource, SearchOutcome};
use floridaman_core::types::{HeadlineRecord, Trope, TropeVector};
use floridaman_geo::Choropleth;
use floridaman_stats::aggregate::display_combo_name;
use floridaman_stats::report::{display_location, DEFAULT_FAVORITES};
use floridaman_stats::{pure_picks, share_pct, AggregateStats, Aggregator, PurePick};
use floridaman_text::HeadlineSearchEngine;
use floridaman_tropes::{classify_all, CueTable};

pub struct Story<S = HeadlineSearchEngine>
where
    S: HeadlineSearcher,
{
    records: Vec<HeadlineRecord>,
    tropes: Vec<TropeVector>,
    stats: AggregateStats,
    choropleth: Choropleth,
    searcher: S,
    settings: EngineSettings,
}

impl Story<HeadlineSearchEngine> {
    /// Classify, aggregate and index `records` with the built-in BM25 engine.
    pub fn build<R>(records: Vec<HeadlineRecord>, settings: &EngineSettings, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let searcher = HeadlineSearchEngine::build(&records, settings.search.clone());
        Self::with_searcher(records, settings, searcher, rng)
    }
}

impl<S> Story<S>
where
    S: HeadlineSearcher,
{
    pub fn with_searcher<R>(records: Vec<HeadlineRecord>, settings: &EngineSettings, searcher: S, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        // Classified once; every consumer reads this table by record index.
        let tropes = classify_all(&records);
        let stats = Aggregator::new(settings.stats.clone(), CueTable::builtin()).run(&records, &tropes, rng);
        let choropleth = stats.choropleth();
        info!(
            records = records.len(),
            searchable = searcher.len(),
            counties = choropleth.counts.len(),
            "story built"
        );
        Self { records, tropes, stats, choropleth, searcher, settings: settings.clone() }
    }

    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    pub fn tropes(&self) -> &[TropeVector] {
        &self.tropes
    }

    /// Trope vector of the record at `index`.
    pub fn tropes_of(&self, index: usize) -> Option<TropeVector> {
        self.tropes.get(index).copied()
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    pub fn choropleth(&self) -> &Choropleth {
        &self.choropleth
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        self.searcher.search(query)
    }

    /// Pure picks using the built-in favorites list.
    pub fn pure_picks<R>(&self, rng: &mut R) -> Vec<PurePick>
    where
        R: RandomSource + ?Sized,
    {
        self.pure_picks_from(DEFAULT_FAVORITES, rng)
    }

    pub fn pure_picks_from<R>(&self, favorites: &[&str], rng: &mut R) -> Vec<PurePick>
    where
        R: RandomSource + ?Sized,
    {
        pure_picks(&self.records, &self.tropes, favorites, &self.settings.report, rng)
    }

    /// Headline numbers for the narrative sections.
    pub fn digest(&self) -> Digest {
        let stats = &self.stats;
        let report = &self.settings.report;
        let (busiest_month, busiest_count) = stats.busiest_month();
        let (quietest_month, quietest_count) = stats.quietest_month();
        Digest {
            total: stats.total,
            with_tropes_pct: share_pct(stats.with_tropes(), stats.total),
            without_tropes_pct: share_pct(stats.without_tropes(), stats.total),
            tropes: stats
                .ranked_tropes()
                .into_iter()
                .map(|(trope, count)| TropeShare { trope, count, pct: share_pct(count, stats.total) })
                .collect(),
            combos: stats
                .ranked_combos()
                .into_iter()
                .map(|(name, count)| ComboLine {
                    name: display_combo_name(name),
                    count,
                    top_cue_pair: stats.combos.get(name).and_then(|c| c.top_cue_pair()).map(|(p, _)| p.to_string()),
                })
                .collect(),
            located_pct: share_pct(stats.total_with_location, stats.total),
            top_locations: stats
                .top_locations(report.top_locations)
                .into_iter()
                .map(|(name, count)| (display_location(&name), count))
                .collect(),
            top_words: stats.top_words(report.top_words),
            busiest_month: MonthLine { month: busiest_month, count: busiest_count },
            quietest_month: MonthLine { month: quietest_month, count: quietest_count },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TropeShare {
    pub trope: Trope,
    pub count: u64,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboLine {
    pub name: String,
    pub count: u64,
    pub top_cue_pair: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLine {
    pub month: &'static str,
    pub count: u64,
}

/// Summary figures quoted in the narrative text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    pub total: u64,
    pub with_tropes_pct: f64,
    pub without_tropes_pct: f64,
    pub tropes: Vec<TropeShare>,
    pub combos: Vec<ComboLine>,
    pub located_pct: f64,
    pub top_locations: Vec<(String, u64)>,
    pub top_words: Vec<(String, u64)>,
    pub busiest_month: MonthLine,
    pub quietest_month: MonthLine,
}
