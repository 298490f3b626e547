//! floridaman-geo
//!
//! Resolves free-text location hints ("Ft. Myers Beach, FL", "St. Pete") to
//! one of Florida's 67 counties for county rollups and map shading.
pub mod choropleth;
pub mod counties;
pub mod resolver;

pub use choropleth::{county_choropleth, Choropleth};
pub use counties::COUNTY_NAMES;
pub use resolver::{normalize_location, resolve_county, strip_county_suffix};
