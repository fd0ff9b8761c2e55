//! Contains the trait and implementation for objects that store
//! [transactions](crate::transaction::Transaction).
//!
//! A store handles the underlying logic for creating, retrieving and deleting
//! data, and decouples that logic from the HTTP handlers.

mod sqlite;
mod transaction;

pub use sqlite::{SQLiteTransactionStore, create_transaction_table};
pub use transaction::{SortOrder, TransactionQuery, TransactionStore};
