//! Derived, read-only views over the desk state

pub mod filter;
pub mod pagination;
pub mod payments;

pub use filter::{PaymentFilter, StatusFilter, filter_slots};
pub use pagination::{PAYMENTS_PER_PAGE, Pager};
pub use payments::PaymentsView;
