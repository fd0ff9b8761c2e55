//! Builds the month by month trend series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    period::YearMonth,
    transaction::{Transaction, TransactionKind},
};

/// One month of the trend: what came in, what went out and what was left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// The month the point covers.
    pub month: YearMonth,
    /// Money that came in during the month.
    pub income: f64,
    /// Money that went out during the month.
    pub expense: f64,
    /// Income minus expenses for the month alone, not cumulative.
    pub balance: f64,
}

/// Aggregate a transaction history into one point per month.
///
/// The trend always covers the whole history regardless of which month a
/// summary view has selected. Months appear in chronological order and only
/// months with at least one transaction appear: an empty history produces an
/// empty series rather than placeholder points.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyPoint> {
    let mut totals: BTreeMap<YearMonth, (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let entry = totals
            .entry(YearMonth::of(transaction.date))
            .or_insert((0.0, 0.0));

        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    totals
        .into_iter()
        .map(|(month, (income, expense))| MonthlyPoint {
            month,
            income,
            expense,
            balance: income - expense,
        })
        .collect()
}
