use std::sync::LazyLock;

use regex::Regex;

/// Words dropped before stemming: function words, the state and its
/// protagonists, and police-blotter vocabulary common to every headline.
pub const SEARCH_STOPWORDS: &[&str] = &[
	"the", "a", "an", "and", "or", "of", "for", "to", "in", "on", "at", "with", "from", "by", "about", "after",
	"before", "during", "without", "into", "onto", "as", "is", "are", "was", "were", "be", "being", "been", "this",
	"that", "these", "those", "it", "its", "his", "her", "their", "then", "than", "while",
	"florida", "man", "woman", "men", "women", "floridaman", "floridawoman",
	"police", "officer", "officers", "sheriff", "deputy", "deputies", "arrest", "arrested", "arrests", "charge",
	"charged", "charges", "accused", "alleged", "allegedly",
	"kill", "kills", "killed", "killing", "shoot", "shoots", "shot", "shooting",
];

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9']+").expect("token pattern compiles"));
static INFLECTION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?:ings|ing|ed|ies|s)$").expect("inflection pattern compiles"));
static DEGREE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:er|est)$").expect("degree pattern compiles"));

pub fn is_stopword(token: &str) -> bool {
	SEARCH_STOPWORDS.contains(&token)
}

/// Lowercase runs of `[a-z0-9']`. Everything else separates tokens.
pub fn tokenize_raw(text: &str) -> Vec<String> {
	let lower = text.to_lowercase();
	TOKEN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Light suffix stripper. Tokens of three characters or fewer are kept as is;
/// longer ones lose one inflection suffix and then one comparative suffix.
pub fn stem(token: &str) -> String {
	if token.chars().count() <= 3 {
		return token.to_string();
	}
	let stripped = INFLECTION.replace(token, "");
	DEGREE.replace(&stripped, "").into_owned()
}

/// Stemmed, stopword-free tokens.
pub fn tokenize(text: &str) -> Vec<String> {
	tokenize_raw(text).into_iter().filter(|t| !is_stopword(t)).map(|t| stem(&t)).collect()
}

/// Contiguous bigrams followed by contiguous trigrams, space-joined.
pub fn ngrams(tokens: &[String]) -> Vec<String> {
	(2..=3).flat_map(move |n| tokens.windows(n).map(|w| w.join(" "))).collect()
}

/// Stemmed unigrams plus their n-grams, in that order, repeats kept.
pub fn terms(text: &str) -> Vec<String> {
	let mut tokens = tokenize(text);
	let grams = ngrams(&tokens);
	tokens.extend(grams);
	tokens
}

/// Terms of a query together with the unigram phrase used for the
/// substring bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedQuery {
	pub raw: Vec<String>,
	pub terms: Vec<String>,
	pub phrase: String,
}

impl AnalyzedQuery {
	pub fn new(query: &str) -> Self {
		let unigrams = tokenize(query);
		let phrase = unigrams.join(" ");
		let mut terms = unigrams;
		let grams = ngrams(&terms);
		terms.extend(grams);
		Self { raw: tokenize_raw(query), terms, phrase }
	}
}
