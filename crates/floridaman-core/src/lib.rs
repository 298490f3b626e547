//! floridaman-core
//!
//! Shared record and result types, the error enum, configuration loading and
//! dataset ingestion used by every other `floridaman-*` crate.

pub mod config;
pub mod data_processor;
pub mod error;
pub mod traits;
pub mod types;

pub use traits::{HeadlineSearcher, RandomSource, SearchOutcome};
pub use types::{HeadlineRecord, SampleHeadline, SearchHit, SourceKind, Trope, TropeVector};
