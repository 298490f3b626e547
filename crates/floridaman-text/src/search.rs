//! Query side of the headline index: Okapi BM25 over stemmed unigrams and
//! n-grams, with an edit-distance/trigram fallback when nothing scores.
use tracing::debug;

use floridaman_core::config::SearchSettings;
use floridaman_core::traits::{HeadlineSearcher, SearchOutcome};
use floridaman_core::types::{HeadlineRecord, SearchHit, SourceKind};

use crate::analyzer::{is_stopword, AnalyzedQuery};
use crate::fuzzy::{near_token_score, trigram_similarity};
use crate::index::{HeadlineIndex, IndexedHeadline};

pub struct HeadlineSearchEngine {
	index: HeadlineIndex,
	settings: SearchSettings,
}

impl HeadlineSearchEngine {
	pub fn new(index: HeadlineIndex, settings: SearchSettings) -> Self {
		Self { index, settings }
	}

	pub fn build(records: &[HeadlineRecord], settings: SearchSettings) -> Self {
		Self::new(HeadlineIndex::build(records), settings)
	}

	/// BM25 score of one document. Query terms are not deduplicated, so a
	/// repeated query word counts twice.
	pub fn bm25(&self, query: &AnalyzedQuery, doc: &IndexedHeadline) -> f64 {
		if query.terms.is_empty() {
			return 0.0;
		}
		let SearchSettings { k1, b, .. } = self.settings;
		let norm = 1.0 - b + b * (doc.length as f64 / self.index.avg_len());
		let mut score = 0.0;
		for term in &query.terms {
			let tf = f64::from(doc.term_counts.get(term).copied().unwrap_or(0));
			if tf == 0.0 {
				continue;
			}
			score += self.index.idf(term) * (tf * (k1 + 1.0)) / (tf + k1 * norm);
		}
		if doc.headline_lower.contains(&query.phrase) {
			score += self.settings.substring_bonus;
		}
		score
	}

	fn fuzzy_score(&self, query: &AnalyzedQuery, raw_query: &str, doc: &IndexedHeadline) -> f64 {
		let near = near_token_score(&query.raw, &doc.raw_tokens, self.settings.fuzzy_edit_score);
		near.max(trigram_similarity(raw_query, &doc.headline))
	}

	fn matched_terms(&self, query: &AnalyzedQuery, doc: &IndexedHeadline) -> Vec<String> {
		let mut matched: Vec<String> = Vec::new();
		for term in &query.terms {
			if doc.has_term(term)
				&& term.chars().count() >= self.settings.min_match_len
				&& !is_stopword(term)
				&& !matched.contains(term)
			{
				matched.push(term.clone());
			}
		}
		matched
	}

	fn top_hits<F>(&self, query: &AnalyzedQuery, limit: usize, source: SourceKind, score: F) -> Vec<SearchHit>
	where
		F: Fn(&IndexedHeadline) -> f64,
	{
		let mut scored: Vec<(f64, &IndexedHeadline)> = self
			.index
			.docs()
			.iter()
			.map(|doc| (score(doc), doc))
			.filter(|(s, _)| *s > 0.0)
			.collect();
		// Stable: equal scores keep index order.
		scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
		scored.truncate(limit);
		scored
			.into_iter()
			.map(|(s, doc)| SearchHit {
				headline: doc.headline.clone(),
				url: doc.url.clone(),
				score: s,
				matched_terms: self.matched_terms(query, doc),
				source,
			})
			.collect()
	}
}

impl HeadlineSearcher for HeadlineSearchEngine {
	fn len(&self) -> usize {
		self.index.docs().len()
	}

	fn search(&self, query: &str) -> SearchOutcome {
		let raw_query = query.trim();
		if raw_query.is_empty() {
			return SearchOutcome::EmptyQuery;
		}
		let analyzed = AnalyzedQuery::new(raw_query);

		let ranked = self.top_hits(&analyzed, self.settings.max_results, SourceKind::Bm25, |doc| self.bm25(&analyzed, doc));
		if !ranked.is_empty() {
			debug!(query = raw_query, hits = ranked.len(), "bm25 hits");
			return SearchOutcome::Ranked(ranked);
		}

		let fuzzy = self.top_hits(&analyzed, self.settings.fuzzy_max_results, SourceKind::Fuzzy, |doc| {
			self.fuzzy_score(&analyzed, raw_query, doc)
		});
		debug!(query = raw_query, hits = fuzzy.len(), "no bm25 hits, used fuzzy fallback");
		if fuzzy.is_empty() {
			SearchOutcome::NoMatches
		} else {
			SearchOutcome::Fuzzy(fuzzy)
		}
	}
}
