//! Defines the endpoint for listing recorded transactions.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    period::YearMonth,
    stores::{SortOrder, TransactionQuery, TransactionStore},
    summary::transactions_in_month,
};

/// The query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListParams {
    /// A month selector such as "2024-01". When set, only transactions in
    /// that month are returned.
    #[serde(default)]
    pub month: Option<String>,
}

/// A route handler for listing transactions, newest first.
///
/// An optional `month` query parameter narrows the listing to a single
/// month. A malformed selector gets a 422 with an error body.
pub async fn list_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<TransactionListParams>,
) -> Result<impl IntoResponse, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let month = params
        .month
        .map(|text| text.parse::<YearMonth>())
        .transpose()?;

    let transactions = state.transaction_store.get_query(TransactionQuery {
        sort_date: Some(SortOrder::Descending),
        ..Default::default()
    })?;

    let transactions = match month {
        Some(month) => transactions_in_month(&transactions, month),
        None => transactions,
    };

    Ok(Json(transactions))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        AppState, build_router, db::initialize, endpoints, stores::SQLiteTransactionStore,
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    async fn post_transaction(server: &TestServer, date: &str, kind: &str, amount: f64) {
        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": date,
                "description": "test transaction",
                "kind": kind,
                "amount": amount,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn list_returns_transactions_newest_first() {
        let server = get_test_server();
        post_transaction(&server, "2024-01-05", "income", 2500.0).await;
        post_transaction(&server, "2024-02-01", "income", 1000.0).await;
        post_transaction(&server, "2024-01-08", "expense", 450.0).await;

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();

        let transactions = response.json::<Vec<Transaction>>();
        let dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 02 - 01),
                date!(2024 - 01 - 08),
                date!(2024 - 01 - 05)
            ]
        );
    }

    #[tokio::test]
    async fn list_filters_by_month() {
        let server = get_test_server();
        post_transaction(&server, "2024-01-05", "income", 2500.0).await;
        post_transaction(&server, "2024-01-08", "expense", 450.0).await;
        post_transaction(&server, "2024-02-01", "income", 1000.0).await;

        let response = server
            .get(&format!("{}?month=2024-01", endpoints::TRANSACTIONS))
            .await;

        response.assert_status_ok();

        let transactions = response.json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 2);
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction.date.month() == time::Month::January)
        );
    }

    #[tokio::test]
    async fn list_rejects_malformed_month() {
        let server = get_test_server();

        let response = server
            .get(&format!("{}?month=2024-1", endpoints::TRANSACTIONS))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_returns_empty_array_for_empty_store() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), vec![]);
    }
}
