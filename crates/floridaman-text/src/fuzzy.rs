//! Typo-tolerant similarity used when exact term scoring finds nothing.
use std::collections::HashSet;

/// Edit distance over chars with a single rolling row.
pub fn levenshtein(a: &str, b: &str) -> usize {
	if a == b {
		return 0;
	}
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	let mut row: Vec<usize> = (0..=b.len()).collect();
	for (i, ca) in a.iter().enumerate() {
		let mut diag = row[0];
		row[0] = i + 1;
		for (j, cb) in b.iter().enumerate() {
			let above = row[j + 1];
			let cost = usize::from(ca != cb);
			row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
			diag = above;
		}
	}
	row[b.len()]
}

fn char_trigrams(text: &str) -> Vec<String> {
	let chars: Vec<char> = text.chars().collect();
	chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// Character-trigram overlap of two lowercased strings.
///
/// The numerator counts query trigrams (repeats included) that occur in the
/// headline; the denominator is the number of distinct trigrams across both.
pub fn trigram_similarity(query: &str, headline: &str) -> f64 {
	let q = query.to_lowercase();
	let h = headline.to_lowercase();
	if q.is_empty() || h.is_empty() {
		return 0.0;
	}
	let q_grams = char_trigrams(&q);
	let h_grams: HashSet<String> = char_trigrams(&h).into_iter().collect();
	let shared = q_grams.iter().filter(|g| h_grams.contains(*g)).count();
	let union: HashSet<&String> = q_grams.iter().chain(h_grams.iter()).collect();
	shared as f64 / union.len().max(1) as f64
}

/// `edit_score` when any query token is within one edit of any headline
/// token, otherwise zero.
pub fn near_token_score(query_tokens: &[String], doc_tokens: &[String], edit_score: f64) -> f64 {
	let near = query_tokens.iter().any(|q| doc_tokens.iter().any(|d| levenshtein(q, d) <= 1));
	if near {
		edit_score
	} else {
		0.0
	}
}
