//! Defines the endpoint for the month by month trend series.

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    AppState, Error,
    stores::{TransactionQuery, TransactionStore},
    trend::monthly_series,
};

/// A route handler for the month by month income and expense series.
///
/// Covers every month with at least one transaction in the store, oldest
/// first. An empty store produces an empty series.
pub async fn trend_series_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<impl IntoResponse, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state
        .transaction_store
        .get_query(TransactionQuery::default())?;

    Ok(Json(monthly_series(&transactions)))
}
