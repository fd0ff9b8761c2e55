//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    stores::TransactionStore,
    transaction::{ExpenseCategory, PaymentMethod, Transaction, TransactionKind},
};

/// The request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The date when the transaction occurred.
    pub date: Date,
    /// Text detailing the transaction.
    pub description: String,
    /// Whether the transaction brought money in or sent it out.
    pub kind: TransactionKind,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// How the money was received. Usually set for income.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// What the money was spent on. Usually set for expenses.
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 and the stored transaction, which includes the ID the
/// store assigned. The amount and description are validated by the store, a
/// bad value gets a 422 with an error body.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Json(form): Json<TransactionForm>,
) -> Result<impl IntoResponse, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let builder = Transaction::build(form.amount, form.date, &form.description, form.kind)
        .payment_method(form.payment_method)
        .category(form.category);

    let transaction = state.transaction_store.create(builder)?;

    Ok((StatusCode::CREATED, Json(transaction)))
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
        AppState, build_router,
        db::initialize,
        endpoints,
        stores::SQLiteTransactionStore,
        transaction::{PaymentMethod, Transaction, TransactionKind},
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn create_transaction_returns_stored_transaction() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": "2024-01-05",
                "description": "saturday card takings",
                "kind": "income",
                "amount": 2500.0,
                "payment_method": "card",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.date, date!(2024 - 01 - 05));
        assert_eq!(transaction.description, "saturday card takings");
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.amount, 2500.0);
        assert_eq!(transaction.payment_method, Some(PaymentMethod::Card));
        assert_eq!(transaction.category, None);
    }

    #[tokio::test]
    async fn create_transaction_accepts_missing_optional_fields() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": "2024-01-08",
                "description": "fish market run",
                "kind": "expense",
                "amount": 450.0,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.payment_method, None);
        assert_eq!(transaction.category, None);
    }

    #[tokio::test]
    async fn create_transaction_rejects_negative_amount() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": "2024-01-05",
                "description": "refund gone wrong",
                "kind": "income",
                "amount": -10.0,
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_transaction_rejects_blank_description() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": "2024-01-05",
                "description": "   ",
                "kind": "expense",
                "amount": 5.0,
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_transaction_rejects_unknown_kind() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "date": "2024-01-05",
                "description": "mystery money",
                "kind": "transfer",
                "amount": 10.0,
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
