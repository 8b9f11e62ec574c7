//! Dataset — region maps of named series, as published by the data feed.
//!
//! Every lookup returns an empty container instead of failing: a missing
//! region is an empty [`RegionData`], a missing series is an empty slice.
//! The feed publishes `null` for some gaps; on input it means the same as
//! an absent key.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::record::Record;

/// Region code of the United Kingdom aggregate under `overview`.
pub const UNITED_KINGDOM: &str = "K02000001";

/// Region code of England under `countries`.
pub const ENGLAND: &str = "E92000001";

static EMPTY_REGION: RegionData = RegionData::empty();

/// Named series for one region (e.g. `dailyConfirmedCases` → records).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RegionData {
    series: BTreeMap<String, Vec<Record>>,
}

impl RegionData {
    /// A region with no series.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Add (or replace) a series, builder style.
    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, records: Vec<Record>) -> Self {
        self.series.insert(key.into(), records);
        self
    }

    /// Records of the series named `key`, empty when absent.
    #[must_use]
    pub fn series(&self, key: &str) -> &[Record] {
        self.series.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// A `null` region is empty and a `null` series is dropped.
impl<'de> Deserialize<'de> for RegionData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Option<Vec<Record>>>>::deserialize(deserializer)?;
        let series = raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, records)| records.map(|records| (key, records)))
            .collect();
        Ok(Self { series })
    }
}

/// The full dashboard payload.
///
/// Only the `overview` and `countries` maps are read; any other top-level
/// key in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: BTreeMap<String, RegionData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: BTreeMap<String, RegionData>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dataset {
    /// Region `code` from the `overview` map, empty when absent.
    #[must_use]
    pub fn overview(&self, code: &str) -> &RegionData {
        self.overview.get(code).unwrap_or(&EMPTY_REGION)
    }

    /// Region `code` from the `countries` map, empty when absent.
    #[must_use]
    pub fn country(&self, code: &str) -> &RegionData {
        self.countries.get(code).unwrap_or(&EMPTY_REGION)
    }

    /// Shortcut for the United Kingdom aggregate.
    #[must_use]
    pub fn united_kingdom(&self) -> &RegionData {
        self.overview(UNITED_KINGDOM)
    }

    /// Shortcut for England.
    #[must_use]
    pub fn england(&self) -> &RegionData {
        self.country(ENGLAND)
    }
}
