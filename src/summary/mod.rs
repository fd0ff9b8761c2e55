//! Monthly reporting for the bookkeeping service.
//!
//! Derives the totals, running balance and distribution breakdowns for a
//! month of trading from a snapshot of transactions, and serves them as the
//! summary report.

mod aggregation;
mod breakdown;
mod report_endpoint;

pub use aggregation::{MonthlySummary, monthly_summary, transactions_in_month};
pub use breakdown::{
    CategoryShare, MethodShare, expense_distribution, expenses_by_category, income_by_method,
    income_distribution, percentage,
};
pub use report_endpoint::summary_report_endpoint;
