use crate::types::SearchHit;

/// Uniform `[0, 1)` generator used by reservoir sampling and random picks.
///
/// Any `rand` generator qualifies; tests pass a seeded `StdRng`.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;
}

impl<R: rand::RngCore + ?Sized> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}

/// Outcome of one headline query.
///
/// An empty query and a query that matches nothing are distinct, non-error
/// outcomes; callers render them differently.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    EmptyQuery,
    Ranked(Vec<SearchHit>),
    Fuzzy(Vec<SearchHit>),
    NoMatches,
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Ranked(hits) | SearchOutcome::Fuzzy(hits) => hits,
            SearchOutcome::EmptyQuery | SearchOutcome::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, SearchOutcome::Fuzzy(_))
    }
}

pub trait HeadlineSearcher {
    /// Number of searchable documents.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn search(&self, query: &str) -> SearchOutcome;
}
