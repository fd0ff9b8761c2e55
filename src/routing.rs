//! Application router configuration.

use axum::{
    Json, Router,
    routing::{delete, get},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    stores::TransactionStore,
    summary::summary_report_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
    trend::trend_series_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<T>),
        )
        .route(endpoints::SUMMARY, get(summary_report_endpoint::<T>))
        .route(endpoints::TREND, get(trend_series_endpoint::<T>))
        .with_state(state)
}

/// Report that the server is up and serving requests.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
