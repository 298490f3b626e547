//! Derived views over [`AggregateStats`] used by the narrative text and the
//! charts: percentages, rankings, the seasonal profile and headline picks.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use floridaman_core::config::ReportSettings;
use floridaman_core::traits::RandomSource;
use floridaman_core::types::{HeadlineRecord, Trope, TropeVector};
use floridaman_geo::{county_choropleth, Choropleth};
use floridaman_tropes::classify;

use crate::aggregate::AggregateStats;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December",
];

/// Hand-picked trope-free headlines shown first when present in the data.
pub const DEFAULT_FAVORITES: &[&str] = &[
    "Florida woman assaults TSA agent after fellow passenger accidentally takes her laptop",
    "Florida Man gets trapped under a lawnmower in pond, dies",
    "Police: Florida man claims he's Jesus, kisses a minor in gym locker room",
    "Florida Woman thought to have stuffed 93 year-old dead Mom in freezer",
    "Florida man charged with hate crimes for \"racially-motivated\" attack against Black driver",
    "Florida Man tries to steal chainsaw by sticking it down his pants",
    "Florida woman backing pickup out of driveway hits gas instead of brake, plows into house across the street -- all the way into the house",
];

/// `count / total` as a percentage rounded to one decimal. A zero total is treated as 1.
pub fn share_pct(count: u64, total: u64) -> f64 {
    let total = total.max(1) as f64;
    (count as f64 / total * 1000.0).round() / 10.0
}

/// Counts per calendar month summed across years; index 0 is January.
pub fn seasonal_profile(by_month: &BTreeMap<String, u64>) -> [u64; 12] {
    let mut totals = [0u64; 12];
    for (key, value) in by_month {
        let month = key.split('-').nth(1).and_then(|m| m.parse::<usize>().ok());
        if let Some(m @ 1..=12) = month {
            totals[m - 1] += value;
        }
    }
    totals
}

fn sorted_desc(map: &BTreeMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

/// Location label without the trailing state abbreviation.
pub fn display_location(name: &str) -> String {
    name.replace(", FL", "")
}

impl AggregateStats {
    pub fn with_tropes(&self) -> u64 {
        self.total - self.without_tropes()
    }

    pub fn without_tropes(&self) -> u64 {
        self.trope_distribution.get(&0).copied().unwrap_or(0)
    }

    /// Tropes by count, descending; ties keep canonical order.
    pub fn ranked_tropes(&self) -> Vec<(Trope, u64)> {
        let mut ranked: Vec<(Trope, u64)> = Trope::ALL.into_iter().map(|t| (t, self.trope_count(t))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top_locations(&self, n: usize) -> Vec<(String, u64)> {
        sorted_desc(&self.locations, n)
    }

    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        sorted_desc(&self.words, n)
    }

    /// Combos by count, descending; ties alphabetical.
    pub fn ranked_combos(&self) -> Vec<(&str, u64)> {
        let mut combos: Vec<(&str, u64)> = self.combos.iter().map(|(k, v)| (k.as_str(), v.count)).collect();
        combos.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        combos
    }

    pub fn seasonal_profile(&self) -> [u64; 12] {
        seasonal_profile(&self.by_month)
    }

    /// Busiest calendar month and its count; the earliest month wins ties.
    pub fn busiest_month(&self) -> (&'static str, u64) {
        let profile = self.seasonal_profile();
        let (idx, count) = profile
            .iter()
            .enumerate()
            .fold((0, profile[0]), |best, (i, c)| if *c > best.1 { (i, *c) } else { best });
        (MONTH_NAMES[idx], count)
    }

    /// Quietest calendar month and its count; the earliest month wins ties.
    pub fn quietest_month(&self) -> (&'static str, u64) {
        let profile = self.seasonal_profile();
        let (idx, count) = profile
            .iter()
            .enumerate()
            .fold((0, profile[0]), |best, (i, c)| if *c < best.1 { (i, *c) } else { best });
        (MONTH_NAMES[idx], count)
    }

    /// `(YYYY-MM, count)` in chronological order.
    pub fn monthly_series(&self) -> Vec<(&str, u64)> {
        self.by_month.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }

    pub fn choropleth(&self) -> Choropleth {
        county_choropleth(&self.counties)
    }
}

/// A trope-free headline chosen for the "pure" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurePick {
    pub headline: String,
    pub url: String,
}

fn pick_random<T: Clone, R: RandomSource + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut keyed: Vec<(f64, &T)> = items.iter().map(|item| (rng.uniform(), item)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    keyed.into_iter().take(n).map(|(_, item)| item.clone()).collect()
}

/// Up to `pure_favorites` curated headlines plus `pure_randoms` random ones,
/// all drawn from records with no tropes. Favorites come first.
pub fn pure_picks<R>(
    records: &[HeadlineRecord],
    tropes: &[TropeVector],
    favorites: &[&str],
    settings: &ReportSettings,
    rng: &mut R,
) -> Vec<PurePick>
where
    R: RandomSource + ?Sized,
{
    let pool: Vec<PurePick> = records
        .iter()
        .enumerate()
        .filter(|(i, r)| tropes.get(*i).copied().unwrap_or_else(|| classify(r)).is_empty())
        .map(|(_, r)| PurePick { headline: r.headline_text().trim().to_string(), url: r.url_text().to_string() })
        .filter(|p| !p.headline.is_empty())
        .collect();

    let present: Vec<PurePick> = favorites
        .iter()
        .filter_map(|fav| pool.iter().find(|p| p.headline == fav.trim()).cloned())
        .collect();
    let chosen = pick_random(&present, settings.pure_favorites.min(present.len()), rng);

    let used: HashSet<&str> = chosen.iter().map(|p| p.headline.as_str()).collect();
    let rest: Vec<PurePick> = pool.iter().filter(|p| !used.contains(p.headline.as_str())).cloned().collect();
    let randoms = pick_random(&rest, settings.pure_randoms.min(rest.len()), rng);

    chosen.into_iter().chain(randoms).take(settings.pure_favorites + settings.pure_randoms).collect()
}
