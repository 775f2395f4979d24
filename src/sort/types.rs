//! Sort types
//!
//! Direction, sort metadata and the per-value classification used by the
//! comparator.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Returns the display name of this direction
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Active sort metadata: which field, which direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Record field to sort by
    pub field: String,
    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Classification of a single field value for comparison
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// A number, or text that reads as one
    Numeric(f64),
    /// Lowercased text with leading whitespace removed
    Textual(String),
    /// Text that also parses as a point in time
    DateLike {
        /// Lowercased text, used when the other side is not a date
        text: String,
        /// Parsed instant (UTC)
        at: NaiveDateTime,
    },
}

impl SortKey {
    /// Classify text that has no numeric reading
    pub fn from_text(raw: &str) -> Self {
        let text = raw.to_lowercase().trim_start().to_string();
        match parse_date(raw) {
            Some(at) => SortKey::DateLike { text, at },
            None => SortKey::Textual(text),
        }
    }

    /// Check if this key took the numeric reading
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }

    /// Text of a non-numeric key
    pub fn text(&self) -> Option<&str> {
        match self {
            SortKey::Numeric(_) => None,
            SortKey::Textual(text) | SortKey::DateLike { text, .. } => Some(text),
        }
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Parse text as a date or date-time.
///
/// Offsets are normalized to UTC; values without an offset are taken as-is.
/// Returns `None` when no supported layout matches.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
