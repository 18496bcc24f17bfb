//! Payments tab state: filter inputs plus the pager over the filtered rows
//!
//! Every filter input mutation resets the pager to page 1, so a page index
//! never outlives the filter it was computed for.

use shared::models::PaymentRecord;
use shared::pagination::PaginatedResponse;

use super::filter::{PaymentFilter, StatusFilter};
use super::pagination::Pager;

#[derive(Debug, Clone)]
pub struct PaymentsView {
    payments: Vec<PaymentRecord>,
    filter: PaymentFilter,
    pager: Pager,
}

impl PaymentsView {
    pub fn new(payments: Vec<PaymentRecord>) -> Self {
        Self {
            payments,
            filter: PaymentFilter::default(),
            pager: Pager::default(),
        }
    }

    pub fn filter(&self) -> &PaymentFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.pager.reset();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.pager.reset();
    }

    /// `None` clears the bound
    pub fn set_from(&mut self, from: Option<String>) {
        self.filter.from = from;
        self.pager.reset();
    }

    /// `None` clears the bound
    pub fn set_to(&mut self, to: Option<String>) {
        self.filter.to = to;
        self.pager.reset();
    }

    /// Rows passing the current filter, in table order
    pub fn filtered(&self) -> Vec<&PaymentRecord> {
        self.filter.apply(&self.payments)
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered().len())
    }

    pub fn next_page(&mut self) -> usize {
        let count = self.filtered().len();
        self.pager.next(count)
    }

    pub fn prev_page(&mut self) -> usize {
        self.pager.prev()
    }

    /// The current page of filtered rows
    pub fn current_page(&self) -> PaginatedResponse<PaymentRecord> {
        let rows: Vec<PaymentRecord> = self.filtered().into_iter().cloned().collect();
        let page = self.pager.paginate(&rows);
        tracing::debug!(
            page = page.page,
            total_pages = page.total_pages,
            rows = page.data.len(),
            "Payments page recomputed"
        );
        page
    }
}
