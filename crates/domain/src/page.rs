//! Pagination arithmetic for list screens and dashboard grids.
//!
//! Paging is plain slicing over an already-fetched list: the page count is
//! never below one and the requested page is clamped into range instead of
//! erroring, so an out-of-range request shows the nearest valid page.

use serde::{Deserialize, Serialize};

/// Page size used by the flat entity list screens.
pub const PER_PAGE_LISTE: usize = 25;

/// Page size used by the dashboard card grids.
pub const PER_PAGE_DASHBOARD: usize = 6;

/// One page of results plus the paging envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages for `count` items, never less than one.
#[must_use]
pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages)
}

/// Slice one page out of `items`, clamping the requested page into range.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Paged<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, per_page);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * per_page;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    Paged {
        items,
        page,
        total_pages,
        total_items,
    }
}
