//! floridaman-tropes
//!
//! Trope classification from upstream labels, plus cue extraction: finding
//! the keyword in a headline that explains a trope. Cues never decide
//! membership; see `classifier` and `cues`.
pub mod classifier;
pub mod cues;

pub use classifier::{classify, classify_all, normalize_flag};
pub use cues::{combined_cue_test, extract_cue, first_cue_span, highlight, CueSpan, CueTable};
