//! The income and expense trend across months.

mod series;
mod series_endpoint;

pub use series::{MonthlyPoint, monthly_series};
pub use series_endpoint::trend_series_endpoint;
