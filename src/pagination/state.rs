//! Pagination state
//!
//! Owns the data pool, the active search result, the page/limit pair and
//! the sort metadata. Every mutating call re-renders the visible page.

use super::render::{NavigationRenderer, Renderer};
use super::types::{Navigation, PageView};
use super::window::compute_window;
use crate::coerce::TypeCoercer;
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::search::{SearchEngine, SearchMode};
use crate::sort::{sort_records, SortDirection, SortSpec};
use crate::types::{share_records, Record, SharedRecord};
use std::fmt;

/// Number of pages needed for `len` records at `limit` per page.
///
/// Never less than 1, so an empty pool still has a (blank) first page.
pub fn last_page_for(len: usize, limit: usize) -> i64 {
    if limit == 0 {
        return 1;
    }
    len.div_ceil(limit).max(1) as i64
}

/// Records of `page` in `data`; empty when the page is out of range
pub fn page_slice(data: &[SharedRecord], page: i64, limit: usize) -> &[SharedRecord] {
    if page < 1 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(limit);
    if start >= data.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(data.len());
    &data[start..end]
}

/// Paging engine over an in-memory record pool
pub struct PaginationState {
    /// Current page (1-based)
    page: i64,
    /// Records per page
    limit: usize,
    /// Page sizes the limit may switch between
    limit_options: Vec<usize>,
    /// Label for page sizes in the navigation
    limit_label: String,
    /// Whether navigation is computed and rendered
    use_navigation: bool,
    /// The full data pool
    results: Vec<SharedRecord>,
    /// Result of the last search, `None` when no search ran since the pool was replaced
    searches: Option<Vec<SharedRecord>>,
    /// Text of the last search
    search_text: String,
    /// Active sort
    sort: Option<SortSpec>,
    /// Sort waiting for the first pool
    initial_sort: Option<SortSpec>,
    /// Column types for renderers
    coercer: TypeCoercer,
    renderer: Box<dyn Renderer>,
    navigator: Option<Box<dyn NavigationRenderer>>,
}

impl fmt::Debug for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationState")
            .field("page", &self.page)
            .field("limit", &self.limit)
            .field("results", &self.results.len())
            .field("searches", &self.searches.as_ref().map(Vec::len))
            .field("search_text", &self.search_text)
            .field("sort", &self.sort)
            .field("use_navigation", &self.use_navigation)
            .finish_non_exhaustive()
    }
}

impl PaginationState {
    /// Create a pagination state from a validated configuration
    pub fn new(config: PagerConfig, renderer: impl Renderer + 'static) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            page: 1,
            limit: config.limit,
            limit_options: config.limit_options,
            limit_label: config.limit_label,
            use_navigation: config.use_navigation,
            results: Vec::new(),
            searches: None,
            search_text: String::new(),
            sort: None,
            initial_sort: config.initial_sort,
            coercer: TypeCoercer::from_types(config.column_types),
            renderer: Box::new(renderer),
            navigator: None,
        })
    }

    /// Attach a navigation renderer
    #[must_use]
    pub fn with_navigation(mut self, navigator: impl NavigationRenderer + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current page (1-based)
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Records per page
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Page sizes the limit may switch between
    pub fn limit_options(&self) -> &[usize] {
        &self.limit_options
    }

    /// The full data pool
    pub fn results(&self) -> &[SharedRecord] {
        &self.results
    }

    /// Result of the last search
    pub fn search_results(&self) -> Option<&[SharedRecord]> {
        self.searches.as_deref()
    }

    /// Data being paged: the last search result, or the full pool
    pub fn active_results(&self) -> &[SharedRecord] {
        self.searches.as_deref().unwrap_or(&self.results)
    }

    /// Text of the last search
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Check if the last search narrowed the data with a non-empty needle
    pub fn is_filtered(&self) -> bool {
        self.searches.is_some() && !self.search_text.is_empty()
    }

    /// Active sort
    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Column types used by renderers
    pub fn coercer(&self) -> &TypeCoercer {
        &self.coercer
    }

    /// Last page of the active data (at least 1)
    pub fn last_page(&self) -> i64 {
        last_page_for(self.active_results().len(), self.limit)
    }

    /// Records of the current page
    pub fn visible_slice(&self) -> &[SharedRecord] {
        page_slice(self.active_results(), self.page, self.limit)
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Replace the data pool.
    ///
    /// Resets to page 1 and drops any search result. The configured initial
    /// sort is applied to the first pool loaded.
    pub fn set_results(&mut self, data: impl IntoIterator<Item = Record>) -> Result<()> {
        let mut data = share_records(data);

        if let Some(spec) = &self.initial_sort {
            data = sort_records(&data, spec)?;
            self.sort = self.initial_sort.take();
        }

        self.replace_results(data)
    }

    fn replace_results(&mut self, data: Vec<SharedRecord>) -> Result<()> {
        tracing::debug!("Loaded {} records", data.len());
        self.page = 1;
        self.results = data;
        self.searches = None;
        self.search_text.clear();
        self.render()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Go to page `page`.
    ///
    /// Does nothing when `page` is past the last page. Pages below 1 are
    /// accepted and show an empty page.
    pub fn go_to_page(&mut self, page: i64) -> Result<()> {
        let last_page = self.last_page();
        if page > last_page {
            tracing::debug!("Ignoring page {} past last page {}", page, last_page);
            return Ok(());
        }

        self.page = page;
        tracing::debug!("Moved to page {}", page);
        self.render()
    }

    /// Advance one page unless on the last page
    pub fn next_page(&mut self) -> Result<()> {
        if self.page < self.last_page() {
            self.page += 1;
            tracing::debug!("Moved forward to page {}", self.page);
            return self.render();
        }
        Ok(())
    }

    /// Go back one page unless on the first page
    pub fn previous_page(&mut self) -> Result<()> {
        if self.page > 1 {
            self.page -= 1;
            tracing::debug!("Moved back to page {}", self.page);
            return self.render();
        }
        Ok(())
    }

    /// Change the page size and return to page 1
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if !self.limit_options.contains(&limit) {
            return Err(Error::invalid_limit(limit, &self.limit_options));
        }

        self.limit = limit;
        self.page = 1;
        tracing::debug!("Limit set to {}", limit);
        self.render()
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sort the full data pool by `field`.
    ///
    /// The pool is replaced by the sorted order, which resets to page 1 and
    /// drops any search result. On failure nothing changes.
    pub fn sort(&mut self, field: &str, direction: SortDirection) -> Result<()> {
        let spec = SortSpec::new(field, direction);
        let sorted = sort_records(&self.results, &spec)?;

        tracing::debug!("Sorted {} records by '{}' {}", sorted.len(), field, direction);
        self.sort = Some(spec);
        self.initial_sort = None;
        self.replace_results(sorted)
    }

    /// Sort by `field`, flipping direction if it is already the sort field.
    ///
    /// A field that is not the active sort starts in `default_direction`.
    pub fn toggle_sort(&mut self, field: &str, default_direction: SortDirection) -> Result<()> {
        let direction = match &self.sort {
            Some(active) if active.field == field => active.direction.flipped(),
            _ => default_direction,
        };
        self.sort(field, direction)
    }

    // ========================================================================
    // Searching
    // ========================================================================

    /// Search the full data pool and page through the result.
    ///
    /// `mode` keeps the matching records or their complement. On failure the
    /// page and previous search result are left as they were.
    pub fn search(&mut self, text: &str, mode: SearchMode) -> Result<()> {
        let engine = SearchEngine::new(text);
        let found = engine.filter(&self.results, mode)?;

        tracing::debug!(
            "Search '{}' ({:?}) found {} of {} records",
            text,
            mode,
            found.len(),
            self.results.len()
        );
        self.page = 1;
        self.searches = Some(found);
        self.search_text = text.to_string();
        self.render()
    }

    /// Clear the search.
    ///
    /// Runs an empty search, so the search result becomes the full pool
    /// rather than being dropped.
    pub fn clear_search(&mut self) -> Result<()> {
        self.search("", SearchMode::Matches)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the current page and, if enabled, the navigation.
    ///
    /// Callback failures are wrapped; state changed before the call stays.
    pub fn render(&mut self) -> Result<()> {
        let active: &[SharedRecord] = self.searches.as_deref().unwrap_or(&self.results);
        let last_page = last_page_for(active.len(), self.limit);

        let view = PageView {
            records: page_slice(active, self.page, self.limit),
            page: self.page,
            limit: self.limit,
            last_page,
            total: active.len(),
            coercer: &self.coercer,
        };
        self.renderer
            .render(&view)
            .map_err(|e| Error::render(format!("{e:#}")))?;

        if !self.use_navigation {
            return Ok(());
        }

        if let Some(navigator) = self.navigator.as_mut() {
            let navigation = Navigation {
                data: active,
                total: active.len(),
                window: compute_window(self.page, last_page),
                limit: self.limit,
                limit_options: &self.limit_options,
                limit_label: &self.limit_label,
                sort: self.sort.as_ref(),
                search_text: &self.search_text,
            };
            navigator
                .render_navigation(&navigation)
                .map_err(|e| Error::navigation(format!("{e:#}")))?;
        }

        Ok(())
    }
}
