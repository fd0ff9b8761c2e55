//! Transaction data aggregation for the monthly summary.
//!
//! Provides pure functions that consume a snapshot of transactions and derive
//! the totals for a month of trading. Callers fetch the snapshot from a
//! store, nothing here touches storage or the clock.

use serde::Serialize;

use crate::{
    period::YearMonth,
    transaction::{Transaction, TransactionKind},
};

/// The totals for a single month of trading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month the summary covers.
    pub month: YearMonth,
    /// Money that came in during the month.
    pub income_total: f64,
    /// Money that went out during the month.
    pub expense_total: f64,
    /// Income minus expenses for the month. Negative when the month ran at a
    /// loss.
    pub month_balance: f64,
    /// The balance across every month up to and including this one.
    pub running_balance: f64,
}

/// Summarise a month of trading.
///
/// `transactions` is the full snapshot: the running balance counts every
/// transaction dated in or before `month`, including earlier years, while
/// transactions after it are ignored. Input order does not matter and an
/// empty snapshot produces all zeros.
pub fn monthly_summary(transactions: &[Transaction], month: YearMonth) -> MonthlySummary {
    let mut income_total = 0.0;
    let mut expense_total = 0.0;
    let mut running_balance = 0.0;

    for transaction in transactions {
        if YearMonth::of(transaction.date) <= month {
            running_balance += transaction.signed_amount();
        }

        if !month.contains(transaction.date) {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => income_total += transaction.amount,
            TransactionKind::Expense => expense_total += transaction.amount,
        }
    }

    MonthlySummary {
        month,
        income_total,
        expense_total,
        month_balance: income_total - expense_total,
        running_balance,
    }
}

/// The subset of `transactions` dated within `month`, in the order given.
pub fn transactions_in_month(transactions: &[Transaction], month: YearMonth) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| month.contains(transaction.date))
        .cloned()
        .collect()
}
