//! Fixed-size pager for derived lists

use shared::pagination::{PaginatedResponse, total_pages};

/// Rows per page on the Payments tab
pub const PAYMENTS_PER_PAGE: usize = 10;

/// Current page (1-based) over a list whose length may change between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAYMENTS_PER_PAGE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(count / page_size)`, at least 1
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count as u64, self.page_size as u32) as usize
    }

    /// Step back, never below page 1
    pub fn prev(&mut self) -> usize {
        self.page = self.page.saturating_sub(1).max(1);
        self.page
    }

    /// Step forward, never past the last page of `count` items
    pub fn next(&mut self, count: usize) -> usize {
        self.page = (self.page + 1).min(self.total_pages(count));
        self.page
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Rows of the current page; empty when the page lies past the end
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn paginate<T: Clone>(&self, items: &[T]) -> PaginatedResponse<T> {
        PaginatedResponse::new(
            self.slice(items).to_vec(),
            items.len() as u64,
            self.page as u32,
            self.page_size as u32,
        )
    }
}
