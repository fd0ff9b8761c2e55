//! Income and expense distribution breakdowns.
//!
//! These functions expect a slice already filtered to the month of interest,
//! see [transactions_in_month](crate::summary::transactions_in_month).

use std::collections::HashMap;

use serde::Serialize;

use crate::transaction::{ExpenseCategory, PaymentMethod, Transaction, TransactionKind};

/// One payment method's slice of a month's income.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodShare {
    /// The payment method.
    pub method: PaymentMethod,
    /// Income received through the method.
    pub total: f64,
    /// The method's percentage of the month's income.
    pub share: f64,
}

/// One category's slice of a month's expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The expense category.
    pub category: ExpenseCategory,
    /// Money spent on the category.
    pub total: f64,
    /// The category's percentage of the month's expenses.
    pub share: f64,
}

/// Total income per payment method.
///
/// Every method appears in display order, including those with no income in
/// the slice. Income recorded without a method counts towards
/// [PaymentMethod::Other]. Expense transactions are ignored.
pub fn income_by_method(transactions: &[Transaction]) -> Vec<(PaymentMethod, f64)> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Income {
            continue;
        }

        let method = transaction.payment_method.unwrap_or(PaymentMethod::Other);
        *totals.entry(method).or_insert(0.0) += transaction.amount;
    }

    PaymentMethod::ALL
        .iter()
        .map(|&method| (method, totals.get(&method).copied().unwrap_or(0.0)))
        .collect()
}

/// Total expenses per category.
///
/// Every category appears in display order, including those with nothing
/// spent in the slice. Expenses recorded without a category count towards
/// [ExpenseCategory::Other]. Income transactions are ignored.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<(ExpenseCategory, f64)> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        let category = transaction.category.unwrap_or(ExpenseCategory::Other);
        *totals.entry(category).or_insert(0.0) += transaction.amount;
    }

    ExpenseCategory::ALL
        .iter()
        .map(|&category| (category, totals.get(&category).copied().unwrap_or(0.0)))
        .collect()
}

/// The percentage share of `part` in `total`.
///
/// A total of zero yields 0.0 rather than dividing by zero, so a month with
/// no income shows every method at 0%.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

/// The income distribution with zero methods dropped and shares attached.
///
/// Methods keep their display order. A month with no income produces an
/// empty distribution.
pub fn income_distribution(transactions: &[Transaction]) -> Vec<MethodShare> {
    let totals = income_by_method(transactions);
    let income_total: f64 = totals.iter().map(|(_, total)| total).sum();

    totals
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(method, total)| MethodShare {
            method,
            total,
            share: percentage(total, income_total),
        })
        .collect()
}

/// The expense distribution with zero categories dropped, shares attached
/// and the biggest categories first.
pub fn expense_distribution(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let totals = expenses_by_category(transactions);
    let expense_total: f64 = totals.iter().map(|(_, total)| total).sum();

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(category, total)| CategoryShare {
            category,
            total,
            share: percentage(total, expense_total),
        })
        .collect();

    shares.sort_by(|a, b| b.total.total_cmp(&a.total));

    shares
}
