/// Words never charted: the state, the protagonist, police-blotter filler,
/// function words, numbers and time expressions.
pub const WORD_STOPWORDS: &[&str] = &[
    "florida", "floridaman", "floridawoman", "man", "woman", "male", "female",
    "arrested", "police", "deputies", "deputy", "sheriff", "officer", "officers",
    "charged", "accused", "allegedly", "charges", "facing", "faces", "criminal",
    "jail", "prison", "court", "judge", "sentenced", "convicted", "guilty",
    "suspect", "victim", "report", "reports", "reported", "officials", "authorities",
    "says", "said", "told", "tells", "claims", "found", "caught", "gets", "tries",
    "tried", "went", "goes", "going", "came", "comes", "coming", "took", "takes",
    "made", "makes", "making", "called", "calls", "seen", "video", "shows",
    "after", "before", "during", "while", "when", "where", "about", "into",
    "from", "with", "without", "over", "under", "through", "between", "against",
    "this", "that", "these", "those", "their", "them", "they", "what", "which",
    "been", "being", "have", "having", "does", "doing", "done", "were", "because",
    "himself", "herself", "themselves", "someone", "something", "another", "other",
    "year", "years", "month", "months", "week", "weeks", "days", "time", "times",
    "first", "second", "third", "last", "next", "then", "just", "still", "already",
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "more", "most", "some", "many", "much", "very", "also", "only", "even", "back",
    "home", "away", "here", "there", "down", "inside", "outside", "near", "later",
    "according", "incident", "case", "local", "county", "state", "area",
];

const MIN_WORD_LEN: usize = 4;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Chartable words of a headline, in order.
///
/// A word is a maximal run of ASCII word characters made only of `a-z`
/// (after lowercasing), at least four long, and not a stopword. Runs that
/// mix in digits or underscores ("abc123") yield nothing.
pub fn extract_words(headline: &str) -> Vec<String> {
    let lower = headline.to_lowercase();
    lower
        .split(|c: char| !is_word_char(c))
        .filter(|w| w.len() >= MIN_WORD_LEN && w.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|w| !WORD_STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}
