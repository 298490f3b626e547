use std::collections::BTreeMap;

use serde::Serialize;

use crate::resolver::strip_county_suffix;

/// County counts keyed for map shading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choropleth {
    pub counts: BTreeMap<String, u64>,
    /// Upper bound of the colour scale; never below 1.
    pub max_count: u64,
}

impl Choropleth {
    /// Count for a boundary feature name such as `"Duval County"`.
    pub fn value_for(&self, feature_name: &str) -> u64 {
        self.counts.get(&strip_county_suffix(feature_name)).copied().unwrap_or(0)
    }
}

/// Re-key county counts through [`strip_county_suffix`] so that
/// `"Duval County"` and `"Duval"` land in one bucket.
pub fn county_choropleth<'a, I>(counties: I) -> Choropleth
where
    I: IntoIterator<Item = (&'a String, &'a u64)>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for (name, value) in counties {
        *counts.entry(strip_county_suffix(name)).or_insert(0) += value;
    }
    let max_count = counts.values().copied().max().unwrap_or(0).max(1);
    Choropleth { counts, max_count }
}
