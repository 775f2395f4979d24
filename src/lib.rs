// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::format_push_string)]

//! # Pagewise
//!
//! Client-side paging, sorting and searching over an in-memory pool of JSON
//! records.
//!
//! ## Features
//!
//! - **Paging**: fixed-size pages over the full pool or the last search result
//! - **Sorting**: per-field ordering that understands numbers, text and dates
//! - **Searching**: case-insensitive substring search across record fields
//! - **Navigation**: a bounded page window with ellipses for large page counts
//! - **Column Types**: optional number/string coercion for presentation
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{PagerConfig, PaginationState, PageView, SearchMode, SortDirection};
//! use serde_json::json;
//!
//! # fn main() -> pagewise::Result<()> {
//! let renderer = |view: &PageView<'_>| -> anyhow::Result<()> {
//!     for record in view.records {
//!         println!("{record}");
//!     }
//!     Ok(())
//! };
//!
//! let mut pager = PaginationState::new(PagerConfig::default(), renderer)?;
//! pager.set_results((1..=42).map(|i| json!({ "id": i, "name": format!("row {i}") })))?;
//!
//! pager.sort("id", SortDirection::Desc)?;
//! pager.search("row 1", SearchMode::Matches)?;
//! pager.next_page()?;
//! assert_eq!(pager.page(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      PaginationState                         │
//! │  set_results  go_to_page  set_limit  sort  search  render    │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────┬───────────────┼───────────────┬────────────────┐
//! │    Sort     │    Search     │    Window     │    Coerce      │
//! ├─────────────┼───────────────┼───────────────┼────────────────┤
//! │ Sort keys   │ Substring     │ Page buttons  │ Number/String  │
//! │ Dates       │ Nested fields │ Ellipses      │ columns        │
//! │ Stable sort │ Exclusion     │ Back/Forward  │                │
//! └─────────────┴───────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pager configuration
pub mod config;

/// Column type coercion
pub mod coerce;

/// Record ordering
pub mod sort;

/// Record search
pub mod search;

/// Pagination state and page window
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use coerce::{TypeCoercer, ValueType};
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pagination::{
    compute_window, Navigation, NavigationRenderer, NullRenderer, PageEntry, PageView,
    PageWindow, PaginationState, Renderer,
};
pub use search::{SearchEngine, SearchMode};
pub use sort::{SortDirection, SortSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
