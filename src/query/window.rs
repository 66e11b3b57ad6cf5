//! Pagination window computation.

/// Cap on contiguous page numbers shown at once.
pub const MAX_VISIBLE_PAGES: u64 = 5;

/// The bounded set of page numbers to display, plus edge affordances for
/// jumping to the first/last page when they fall outside the window.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PageWindow {
    /// Contiguous page numbers, at most [`MAX_VISIBLE_PAGES`] of them.
    pub pages: Vec<u64>,
    /// Page 1 sits before the window and should get its own anchor.
    pub first_anchor: bool,
    /// There is a gap between the first anchor and the window.
    pub leading_gap: bool,
    /// The last page sits after the window and should get its own anchor.
    pub last_anchor: bool,
    /// There is a gap between the window and the last anchor.
    pub trailing_gap: bool,
}

/// Compute the visible page-number window for `current` out of
/// `total_pages`. Pure; `current` is assumed to be within range.
pub fn page_window(current: u64, total_pages: u64) -> PageWindow {
    if total_pages == 0 {
        return PageWindow::default();
    }

    let (start, end) = if total_pages <= MAX_VISIBLE_PAGES {
        (1, total_pages)
    } else if current <= 3 {
        (1, MAX_VISIBLE_PAGES)
    } else if current >= total_pages - 2 {
        (total_pages - MAX_VISIBLE_PAGES + 1, total_pages)
    } else {
        (current - 2, current + 2)
    };

    let pages: Vec<u64> = (start..=end).collect();
    PageWindow {
        first_anchor: start > 1,
        leading_gap: start > 2,
        last_anchor: end < total_pages,
        trailing_gap: end < total_pages - 1,
        pages,
    }
}
