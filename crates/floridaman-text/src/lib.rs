//! floridaman-text
//!
//! Headline search. `analyzer` turns text into stemmed terms, `index` holds
//! the per-document and corpus statistics built once per record set, and
//! `search` ranks documents for a query with a fuzzy fallback.
pub mod analyzer;
pub mod fuzzy;
pub mod index;
pub mod search;

pub use analyzer::{ngrams, stem, terms, tokenize, tokenize_raw, AnalyzedQuery, SEARCH_STOPWORDS};
pub use index::{HeadlineIndex, IndexedHeadline};
pub use search::HeadlineSearchEngine;
