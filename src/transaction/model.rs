//! Defines the core data models for transactions.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::TransactionId};

/// Identifies the profile that recorded a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create an owner ID from its text form.
    pub fn new(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction brought money in or sent money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a day of takings.
    Income,
    /// Money spent, e.g. a supplier order.
    Expense,
}

impl TransactionKind {
    /// The storage encoding of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(Error::InvalidKind(s.to_owned())),
        }
    }
}

/// How the money for an income transaction was received.
///
/// Keeping this a closed set means a match over methods breaks loudly when a
/// new method is added, rather than silently dropping it from breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in notes and coins at the till.
    Cash,
    /// Paid by debit or credit card.
    Card,
    /// Paid directly into the restaurant's bank account.
    BankTransfer,
    /// Paid with a printed bank slip.
    BankSlip,
    /// Paid through the delivery platform.
    DeliveryApp,
    /// Anything that does not fit the methods above. Income recorded without
    /// a method lands here in breakdowns.
    Other,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::BankSlip,
        PaymentMethod::DeliveryApp,
        PaymentMethod::Other,
    ];

    /// The storage encoding of the payment method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::BankSlip => "bank_slip",
            PaymentMethod::DeliveryApp => "delivery_app",
            PaymentMethod::Other => "other",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "bank_slip" => Ok(PaymentMethod::BankSlip),
            "delivery_app" => Ok(PaymentMethod::DeliveryApp),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(Error::InvalidPaymentMethod(s.to_owned())),
        }
    }
}

/// What an expense transaction was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Dry goods and general supplies.
    Groceries,
    /// Fish and shellfish orders.
    Seafood,
    /// Fruit and vegetables.
    Produce,
    /// Electricity bills.
    Electricity,
    /// Water bills.
    Water,
    /// Internet and phone bills.
    Internet,
    /// Social security contributions.
    SocialSecurity,
    /// Staff wages.
    Wages,
    /// One-off contracted work.
    Freelance,
    /// Furnishing and decoration.
    Decor,
    /// Anything that does not fit the categories above. Expenses recorded
    /// without a category land here in breakdowns.
    Other,
}

impl ExpenseCategory {
    /// Every expense category, in display order.
    pub const ALL: [ExpenseCategory; 11] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Seafood,
        ExpenseCategory::Produce,
        ExpenseCategory::Electricity,
        ExpenseCategory::Water,
        ExpenseCategory::Internet,
        ExpenseCategory::SocialSecurity,
        ExpenseCategory::Wages,
        ExpenseCategory::Freelance,
        ExpenseCategory::Decor,
        ExpenseCategory::Other,
    ];

    /// The storage encoding of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Groceries => "groceries",
            ExpenseCategory::Seafood => "seafood",
            ExpenseCategory::Produce => "produce",
            ExpenseCategory::Electricity => "electricity",
            ExpenseCategory::Water => "water",
            ExpenseCategory::Internet => "internet",
            ExpenseCategory::SocialSecurity => "social_security",
            ExpenseCategory::Wages => "wages",
            ExpenseCategory::Freelance => "freelance",
            ExpenseCategory::Decor => "decor",
            ExpenseCategory::Other => "other",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groceries" => Ok(ExpenseCategory::Groceries),
            "seafood" => Ok(ExpenseCategory::Seafood),
            "produce" => Ok(ExpenseCategory::Produce),
            "electricity" => Ok(ExpenseCategory::Electricity),
            "water" => Ok(ExpenseCategory::Water),
            "internet" => Ok(ExpenseCategory::Internet),
            "social_security" => Ok(ExpenseCategory::SocialSecurity),
            "wages" => Ok(ExpenseCategory::Wages),
            "freelance" => Ok(ExpenseCategory::Freelance),
            "decor" => Ok(ExpenseCategory::Decor),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(Error::InvalidCategory(s.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether money came in or went out.
    pub kind: TransactionKind,
    /// The amount of money that moved. Always zero or greater, the direction
    /// lives in `kind`.
    pub amount: f64,
    /// How the money was received. Recorded for income.
    pub payment_method: Option<PaymentMethod>,
    /// What the money was spent on. Recorded for expenses.
    pub category: Option<ExpenseCategory>,
    /// The profile that recorded the transaction.
    pub owner: Option<OwnerId>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: f64,
        date: Date,
        description: &str,
        kind: TransactionKind,
    ) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
            kind,
            payment_method: None,
            category: None,
            owner: None,
        }
    }

    /// The amount with the direction applied: positive for income, negative
    /// for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// This is the "transaction without an ID" handed to a store, which assigns
/// the ID on creation.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The amount of money that moved. Must be zero or greater.
    pub amount: f64,
    /// The date when the money moved, not when it was recorded.
    pub date: Date,
    /// A human-readable description of the transaction.
    pub description: String,
    /// Whether money came in or went out.
    pub kind: TransactionKind,
    /// How the money was received.
    pub payment_method: Option<PaymentMethod>,
    /// What the money was spent on.
    pub category: Option<ExpenseCategory>,
    /// The profile recording the transaction.
    pub owner: Option<OwnerId>,
}

impl TransactionBuilder {
    /// Set the payment method for the transaction.
    pub fn payment_method(mut self, payment_method: Option<PaymentMethod>) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Set the expense category for the transaction.
    pub fn category(mut self, category: Option<ExpenseCategory>) -> Self {
        self.category = category;
        self
    }

    /// Set the owner for the transaction.
    pub fn owner(mut self, owner: Option<OwnerId>) -> Self {
        self.owner = owner;
        self
    }

    /// Check that the builder describes a storable transaction.
    ///
    /// Stores call this before persisting anything, so bad records are
    /// rejected at the point data enters the system.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidAmount] if the amount is negative or not a number,
    /// - or [Error::EmptyDescription] if the description is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(())
    }
}
