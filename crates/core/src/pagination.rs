//! Client-side pagination over already-fetched lists.

use serde::Serialize;

/// Rows per page on admin tables.
pub const ADMIN_PAGE_SIZE: usize = 10;

/// Items requested per "load more" step on public listings.
pub const PUBLIC_PAGE_SIZE: u32 = 5;

/// Number of page buttons shown by the pager.
pub const PAGE_WINDOW: usize = 5;

/// One page of a slice, with enough metadata to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }

    /// Page numbers for the pager buttons.
    pub fn window(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages, PAGE_WINDOW)
    }
}

/// Slice `items` down to the requested page.
///
/// `total_pages` is `ceil(total / per_page)`; `page` is clamped into
/// `1..=max(total_pages, 1)`, so an out-of-range request shows the last page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * per_page).min(total_items);
    let end = (start + per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Page numbers to display around `current`.
///
/// All pages when they fit; the first `width` while near the start; the last
/// `width` while near the end; otherwise centered on `current`.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    if total_pages <= width {
        return (1..=total_pages).collect();
    }
    let half = width / 2;
    let start = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages + 1 - width
    } else {
        current - half
    };
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_many() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.has_next());
        assert_eq!(page.prev_page(), 2);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 9, 10).page, 2);
        assert_eq!(paginate(&items, 0, 10).page, 1);
    }

    #[test]
    fn empty_list_yields_single_empty_page() {
        let page = paginate::<u32>(&[], 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn window_shifts_with_current_page() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
    }
}
