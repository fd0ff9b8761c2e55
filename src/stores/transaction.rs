//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{OwnerId, Transaction, TransactionBuilder},
};

/// Handles the creation, retrieval and deletion of transactions.
///
/// The aggregation code never talks to a store directly, handlers fetch a
/// snapshot through this trait and pass it on.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// Implementers must validate the builder and assign the ID, the caller
    /// never supplies one.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve transactions from the store in the way defined by `query`.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Remove a transaction from the store.
    ///
    /// Implementers should report an unknown ID with
    /// [Error::DeleteMissingTransaction] rather than ignoring it.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;
}

/// Defines how transactions should be fetched from [TransactionStore::get_query].
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Include only transactions recorded by this owner. None includes the
    /// whole store.
    pub owner: Option<OwnerId>,
    /// Orders transactions by date in the order `sort_date`, ties broken by
    /// ID in increasing order. None returns transactions in the order they
    /// are stored.
    pub sort_date: Option<SortOrder>,
}

/// The order to sort transactions in a [TransactionQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}
