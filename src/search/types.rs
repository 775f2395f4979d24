//! Search types

use serde::{Deserialize, Serialize};

/// Which side of a search to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Keep records that match the needle
    #[default]
    Matches,
    /// Keep records that do not match the needle
    Excludes,
}

impl SearchMode {
    /// Mode from an "include matches" flag
    pub fn from_include(include_matches: bool) -> Self {
        if include_matches {
            SearchMode::Matches
        } else {
            SearchMode::Excludes
        }
    }

    /// Check if matching records are kept
    pub fn includes_matches(self) -> bool {
        matches!(self, SearchMode::Matches)
    }
}

impl From<bool> for SearchMode {
    fn from(include_matches: bool) -> Self {
        Self::from_include(include_matches)
    }
}
