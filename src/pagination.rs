use serde::Serialize;

pub const DEFAULT_RESULTS_PER_PAGE: usize = 3;
pub const DEFAULT_MAX_PAGE_RANGE: usize = 5;
pub const DEFAULT_PAGE_RANGE_DELTA: usize = 2;

/// Tunables of the sliding page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagingSettings {
    pub results_per_page: usize,
    /// Maximum number of page buttons shown at once.
    pub max_page_range: usize,
    /// Step used when the window has to move.
    pub page_range_delta: usize,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            max_page_range: DEFAULT_MAX_PAGE_RANGE,
            page_range_delta: DEFAULT_PAGE_RANGE_DELTA,
        }
    }
}

/// Number of pages needed to show `total_results` items.
pub fn page_count(total_results: usize, results_per_page: usize) -> usize {
    if results_per_page == 0 {
        return 0;
    }
    total_results.div_ceil(results_per_page)
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    pub left_most_page: usize,
    pub page_range: usize,
    pub page_count: usize,
    pub current_page: usize,
}

impl PageWindow {
    /// Page indices rendered as buttons, left to right.
    pub fn pages(&self) -> Vec<usize> {
        (self.left_most_page..self.left_most_page.saturating_add(self.page_range)).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.page_count
    }

    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }
}

/// Computes the page window shown after navigating to `current_page`.
///
/// The window only moves when the current page leaves it: paging back onto or
/// past the left edge shifts it down by `page_range_delta`, paging forward to
/// the right edge shifts it up, never past the last full window.
pub fn plan(
    current_page: usize,
    previous_left_most: usize,
    total_results: usize,
    settings: &PagingSettings,
) -> PageWindow {
    let page_count = page_count(total_results, settings.results_per_page);
    let delta = settings.page_range_delta;

    let left_most_page = if current_page == 0 {
        0
    } else if current_page <= previous_left_most {
        current_page.saturating_sub(delta)
    } else if current_page.saturating_add(1) >= previous_left_most.saturating_add(delta) {
        current_page
            .saturating_sub(delta)
            .min(page_count.saturating_sub(settings.max_page_range))
    } else {
        previous_left_most
    };

    let page_range = page_count
        .saturating_sub(left_most_page)
        .min(settings.max_page_range);

    PageWindow {
        left_most_page,
        page_range,
        page_count,
        current_page,
    }
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub window: PageWindow,
    pub pages: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub last_page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: usize, window: PageWindow) -> Self {
        Self {
            items,
            total,
            pages: window.pages(),
            has_previous: window.has_previous(),
            has_next: window.has_next(),
            last_page: window.last_page(),
            window,
        }
    }
}
