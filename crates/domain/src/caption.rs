//! Captions — externally supplied intro titles and descriptions.

use serde::{Deserialize, Serialize};

/// One caption text per dashboard panel, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionSet {
    pub total_cases: Option<String>,
    pub daily_cases: Option<String>,
    pub age_sex: Option<String>,
    pub total_deaths: Option<String>,
    pub daily_deaths: Option<String>,
}

/// Titles shown above each panel and descriptions shown below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub titles: CaptionSet,
    pub descriptions: CaptionSet,
}
