//! Transaction recording for the bookkeeping service.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The closed vocabularies for kinds, payment methods and expense categories
//! - Route handlers for creating, listing and deleting transactions

mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;
mod model;

pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use model::{
    ExpenseCategory, OwnerId, PaymentMethod, Transaction, TransactionBuilder, TransactionKind,
};
