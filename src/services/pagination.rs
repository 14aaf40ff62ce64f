//! Fixed-size windows over the filtered view.

/// Records per window unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Slice `[page_index * page_size, (page_index + 1) * page_size)` of
/// `filtered`, clipped to its bounds. Out-of-range pages are empty.
pub fn window_at<T>(filtered: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// Index of the next window.
pub const fn advance(page_index: usize) -> usize {
    page_index.saturating_add(1)
}

/// Position of the "load more" cursor over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_index: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Index of the last exposed window.
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// Records per window.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to window 0. Called whenever the filtered view is recomputed.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// The window at the current position.
    pub fn window<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        window_at(filtered, self.page_index, self.page_size)
    }

    /// Advance one window and return it.
    ///
    /// Refused when the current window is already empty: the cursor stays
    /// put and an empty window is returned.
    pub fn load_more<'a, T>(&mut self, filtered: &'a [T]) -> &'a [T] {
        if self.window(filtered).is_empty() {
            return &[];
        }
        self.page_index = advance(self.page_index);
        self.window(filtered)
    }

    /// Everything exposed so far: windows `0..=page_index` joined.
    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let end = advance(self.page_index)
            .saturating_mul(self.page_size)
            .min(filtered.len());
        &filtered[..end]
    }

    /// True once the current window reaches the end of `filtered`.
    pub fn is_exhausted<T>(&self, filtered: &[T]) -> bool {
        self.visible(filtered).len() == filtered.len()
    }
}
