//! Pagination types
//!
//! The page window handed to navigation renderers and the views passed to
//! render collaborators.

use crate::coerce::TypeCoercer;
use crate::sort::SortSpec;
use crate::types::{Record, SharedRecord};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// One button of the page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEntry {
    /// A concrete page
    Page {
        /// 1-based page number
        number: i64,
        /// Whether this is the current page
        active: bool,
    },
    /// A gap of hidden pages
    Ellipsis,
}

impl PageEntry {
    /// Page number of a concrete entry
    pub fn number(&self) -> Option<i64> {
        match self {
            PageEntry::Page { number, .. } => Some(*number),
            PageEntry::Ellipsis => None,
        }
    }

    /// Check if this is the current page
    pub fn is_active(&self) -> bool {
        matches!(self, PageEntry::Page { active: true, .. })
    }

    /// Check if this is an ellipsis
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis)
    }
}

/// Ordered navigation entries plus back/forward visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Page and ellipsis entries, left to right
    pub entries: Vec<PageEntry>,
    /// Page the window was computed for
    pub current_page: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Show the "previous page" control
    pub show_back: bool,
    /// Show the "next page" control
    pub show_forward: bool,
}

impl PageWindow {
    /// First page shortcut
    pub fn first_page(&self) -> i64 {
        1
    }

    /// Last page shortcut
    pub fn last_page(&self) -> i64 {
        self.total_pages
    }

    /// Concrete page numbers, in order
    pub fn pages(&self) -> Vec<i64> {
        self.entries.iter().filter_map(PageEntry::number).collect()
    }

    /// The entry flagged active, if the current page is shown
    pub fn active_page(&self) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.is_active())
            .and_then(PageEntry::number)
    }

    /// Number of ellipsis entries
    pub fn ellipsis_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_ellipsis()).count()
    }
}

/// What a renderer receives: the records of the current page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Visible records of the current page
    pub records: &'a [SharedRecord],
    /// Current page (1-based)
    pub page: i64,
    /// Records per page
    pub limit: usize,
    /// Last page of the active data
    pub last_page: i64,
    /// Size of the active data
    pub total: usize,
    /// Column types for presenting field values
    pub coercer: &'a TypeCoercer,
}

impl<'a> PageView<'a> {
    /// Field value of a record, coerced to its column type
    pub fn value(&self, record: &'a Record, field: &str) -> Option<Cow<'a, Value>> {
        self.coercer.field(record, field)
    }

    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 1-based position of the first visible record within the active data
    pub fn first_index(&self) -> usize {
        if self.records.is_empty() || self.page < 1 {
            return 0;
        }
        (self.page as usize - 1) * self.limit + 1
    }
}

/// What a navigation renderer receives
#[derive(Debug, Clone)]
pub struct Navigation<'a> {
    /// The full active data (all pages)
    pub data: &'a [SharedRecord],
    /// Size of the active data
    pub total: usize,
    /// Page buttons, `None` when there is at most one page
    pub window: Option<PageWindow>,
    /// Records per page
    pub limit: usize,
    /// Page sizes the user may switch between
    pub limit_options: &'a [usize],
    /// Label shown next to each page size
    pub limit_label: &'a str,
    /// Active sort, for highlighting the sorted column
    pub sort: Option<&'a SortSpec>,
    /// Text of the last search
    pub search_text: &'a str,
}

impl Navigation<'_> {
    /// Label for a page size option, e.g. "25 rows"
    pub fn limit_option_label(&self, option: usize) -> String {
        format!("{option} {}", self.limit_label)
    }
}
