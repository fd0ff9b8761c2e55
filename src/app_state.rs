//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::stores::TransactionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for reading and writing [transactions](crate::transaction::Transaction).
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}
