//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, database_id::TransactionId, stores::TransactionStore};

/// A route handler for deleting a transaction by its ID.
///
/// Responds with 204 on success. Deleting an ID that is not in the store is
/// reported with a 404, nothing else changes.
pub async fn delete_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<StatusCode, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_store.delete(transaction_id)?;

    Ok(StatusCode::NO_CONTENT)
}
