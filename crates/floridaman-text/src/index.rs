use std::collections::HashMap;

use tracing::debug;

use floridaman_core::types::HeadlineRecord;

use crate::analyzer::{terms, tokenize_raw};

/// One searchable headline with its precomputed term statistics.
#[derive(Debug, Clone)]
pub struct IndexedHeadline {
	pub headline: String,
	pub url: String,
	/// Raw lowercase tokens, for the edit-distance fallback.
	pub raw_tokens: Vec<String>,
	/// Number of terms (unigrams plus n-grams, repeats included).
	pub length: usize,
	pub term_counts: HashMap<String, u32>,
	pub headline_lower: String,
}

impl IndexedHeadline {
	fn new(headline: &str, url: &str) -> Self {
		let all = terms(headline);
		let mut term_counts: HashMap<String, u32> = HashMap::new();
		for term in &all {
			*term_counts.entry(term.clone()).or_insert(0) += 1;
		}
		Self {
			headline: headline.to_string(),
			url: url.to_string(),
			raw_tokens: tokenize_raw(headline),
			length: all.len(),
			term_counts,
			headline_lower: headline.to_lowercase(),
		}
	}

	pub fn has_term(&self, term: &str) -> bool {
		self.term_counts.contains_key(term)
	}
}

/// In-memory inverted statistics over every headline, built once.
#[derive(Debug, Clone, Default)]
pub struct HeadlineIndex {
	pub(crate) docs: Vec<IndexedHeadline>,
	pub(crate) doc_freq: HashMap<String, usize>,
	pub(crate) avg_len: f64,
}

impl HeadlineIndex {
	/// Index every record with a non-empty headline. Record order is kept,
	/// which makes equal scores rank in input order.
	pub fn build(records: &[HeadlineRecord]) -> Self {
		let docs: Vec<IndexedHeadline> = records
			.iter()
			.filter(|r| !r.headline_text().is_empty())
			.map(|r| IndexedHeadline::new(r.headline_text(), r.url_text()))
			.collect();

		let mut doc_freq: HashMap<String, usize> = HashMap::new();
		let mut total_len = 0usize;
		for doc in &docs {
			total_len += doc.length;
			for term in doc.term_counts.keys() {
				*doc_freq.entry(term.clone()).or_insert(0) += 1;
			}
		}
		let avg_len = if docs.is_empty() { 1.0 } else { total_len as f64 / docs.len() as f64 };
		debug!(docs = docs.len(), skipped = records.len() - docs.len(), terms = doc_freq.len(), avg_len, "built headline index");
		Self { docs, doc_freq, avg_len }
	}

	pub fn docs(&self) -> &[IndexedHeadline] {
		&self.docs
	}

	pub fn doc_freq(&self, term: &str) -> usize {
		self.doc_freq.get(term).copied().unwrap_or(0)
	}

	pub fn avg_len(&self) -> f64 {
		self.avg_len
	}

	/// Corpus size used by the idf formula; never zero.
	pub fn corpus_size(&self) -> usize {
		self.docs.len().max(1)
	}

	/// `ln((N - df + 0.5) / (df + 0.5) + 1)`
	pub fn idf(&self, term: &str) -> f64 {
		let n = self.corpus_size() as f64;
		let df = self.doc_freq(term) as f64;
		((n - df + 0.5) / (df + 0.5) + 1.0).ln()
	}
}
