//! floridaman-stats
//!
//! One pass over the headline records producing every chart-ready count:
//! trope totals and combos, the trope-count distribution, location and
//! county rollups, the month series, word frequencies, and per-trope
//! example reservoirs. `report` holds the derived views the narrative uses.
pub mod aggregate;
pub mod report;
pub mod reservoir;
pub mod words;

pub use aggregate::{aggregate, AggregateStats, Aggregator, ComboStats};
pub use report::{pure_picks, seasonal_profile, share_pct, PurePick};
pub use reservoir::Reservoir;
pub use words::{extract_words, WORD_STOPWORDS};
