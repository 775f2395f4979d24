//! Page window computation
//!
//! Decides which page buttons a navigation bar shows. Small page counts
//! show every page; large ones show a fixed-width run of pages around the
//! current page, with ellipses standing in for the gaps and shortcuts to the
//! first and last page.

use super::types::{PageEntry, PageWindow};

/// Largest page count shown in full
const FULL_WINDOW_MAX: i64 = 10;

/// Pages shown before the ellipsis while near the start
const HEAD_SPAN: i64 = 8;

/// Last current page that still shows the head run
const HEAD_LAST_CURRENT: i64 = 5;

/// Pages shown on each side of the current page while sliding
const SLIDE_RADIUS: i64 = 3;

/// Distance from the end of a run anchored at the tail to its start
const TAIL_SPAN: i64 = 7;

/// Current page beyond `total - TAIL_ZONE` anchors the run at the tail
const TAIL_ZONE: i64 = 4;

/// Compute the navigation window for `current_page` of `total_pages`.
///
/// Returns `None` when there is at most one page, since no navigation is
/// shown then.
pub fn compute_window(current_page: i64, total_pages: i64) -> Option<PageWindow> {
    if total_pages <= 1 {
        return None;
    }

    let page = |number: i64| PageEntry::Page {
        number,
        active: number == current_page,
    };

    let mut entries = Vec::new();

    if total_pages <= FULL_WINDOW_MAX {
        entries.extend((1..=total_pages).map(page));
    } else {
        // Disjoint predicates: exactly one run fills the window
        if current_page > HEAD_LAST_CURRENT {
            entries.push(page(1));
            entries.push(PageEntry::Ellipsis);

            let end = (current_page + SLIDE_RADIUS).min(total_pages);
            let start = if total_pages - TAIL_SPAN < current_page
                && current_page > total_pages - TAIL_ZONE
            {
                end - TAIL_SPAN
            } else {
                current_page - SLIDE_RADIUS
            };
            entries.extend((start..=end).map(page));

            if end < total_pages {
                if end < total_pages - 1 {
                    entries.push(PageEntry::Ellipsis);
                }
                entries.push(page(total_pages));
            }
        }

        if current_page <= HEAD_LAST_CURRENT {
            entries.extend((1..=HEAD_SPAN).map(page));
            entries.push(PageEntry::Ellipsis);
            entries.push(page(total_pages));
        }
    }

    Some(PageWindow {
        entries,
        current_page,
        total_pages,
        show_back: current_page != 1,
        show_forward: current_page != total_pages,
    })
}
