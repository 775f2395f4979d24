//! Pagination module
//!
//! Page/limit bookkeeping over an in-memory record pool, and the page
//! window used by navigation bars.
//!
//! # Overview
//!
//! - `PaginationState` - Owns the pool, search result, page, limit and sort
//! - `compute_window` - Which page buttons to show, with ellipses
//! - `Renderer` / `NavigationRenderer` - Collaborators invoked on every change

mod render;
mod state;
mod types;
mod window;

pub use render::{NavigationRenderer, NullRenderer, Renderer};
pub use state::{last_page_for, page_slice, PaginationState};
pub use types::{Navigation, PageEntry, PageView, PageWindow};
pub use window::compute_window;
