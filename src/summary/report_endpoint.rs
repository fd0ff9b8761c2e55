//! Defines the endpoint for the monthly summary report.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    period::YearMonth,
    stores::{TransactionQuery, TransactionStore},
    summary::{
        CategoryShare, MethodShare, MonthlySummary, expense_distribution, income_distribution,
        monthly_summary, transactions_in_month,
    },
};

/// The query parameters for the summary report.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// The month to report on as "YYYY-MM".
    pub month: String,
}

/// Everything a client needs to render the report for one month.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// The totals for the selected month.
    pub summary: MonthlySummary,
    /// The month before the selected one, for paging backwards.
    pub previous: YearMonth,
    /// The month after the selected one, for paging forwards.
    pub next: YearMonth,
    /// Where the month's income came from.
    pub income_by_method: Vec<MethodShare>,
    /// Where the month's money went.
    pub expenses_by_category: Vec<CategoryShare>,
}

/// A route handler for the monthly summary report.
///
/// Takes a required `month` query parameter, a malformed selector gets a 422
/// with an error body. The report is computed from the full snapshot so the
/// running balance includes every earlier month in the store.
pub async fn summary_report_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<SummaryParams>,
) -> Result<impl IntoResponse, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let month = params.month.parse::<YearMonth>()?;

    let transactions = state
        .transaction_store
        .get_query(TransactionQuery::default())?;

    let summary = monthly_summary(&transactions, month);
    let in_month = transactions_in_month(&transactions, month);

    Ok(Json(SummaryReport {
        summary,
        previous: month.advance(-1),
        next: month.advance(1),
        income_by_method: income_distribution(&in_month),
        expenses_by_category: expense_distribution(&in_month),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router, db::initialize, endpoints, stores::SQLiteTransactionStore,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    async fn post_transaction(server: &TestServer, body: Value) {
        let response = server.post(endpoints::TRANSACTIONS).json(&body).await;
        response.assert_status(StatusCode::CREATED);
    }

    async fn seed_two_months(server: &TestServer) {
        post_transaction(
            server,
            json!({
                "date": "2024-01-05",
                "description": "saturday card takings",
                "kind": "income",
                "amount": 2500.0,
                "payment_method": "card",
            }),
        )
        .await;
        post_transaction(
            server,
            json!({
                "date": "2024-01-08",
                "description": "fish market run",
                "kind": "expense",
                "amount": 450.0,
                "category": "seafood",
            }),
        )
        .await;
        post_transaction(
            server,
            json!({
                "date": "2024-02-01",
                "description": "first of the month cash",
                "kind": "income",
                "amount": 1000.0,
                "payment_method": "cash",
            }),
        )
        .await;
    }

    #[tokio::test]
    async fn report_totals_ignore_later_months() {
        let server = get_test_server();
        seed_two_months(&server).await;

        let response = server
            .get(&format!("{}?month=2024-01", endpoints::SUMMARY))
            .await;

        response.assert_status_ok();

        let report = response.json::<Value>();
        assert_eq!(report["summary"]["month"], "2024-01");
        assert_eq!(report["summary"]["income_total"], 2500.0);
        assert_eq!(report["summary"]["expense_total"], 450.0);
        assert_eq!(report["summary"]["month_balance"], 2050.0);
        assert_eq!(report["summary"]["running_balance"], 2050.0);
    }

    #[tokio::test]
    async fn report_carries_balance_into_next_month() {
        let server = get_test_server();
        seed_two_months(&server).await;

        let response = server
            .get(&format!("{}?month=2024-02", endpoints::SUMMARY))
            .await;

        response.assert_status_ok();

        let report = response.json::<Value>();
        assert_eq!(report["summary"]["income_total"], 1000.0);
        assert_eq!(report["summary"]["expense_total"], 0.0);
        assert_eq!(report["summary"]["month_balance"], 1000.0);
        assert_eq!(report["summary"]["running_balance"], 3050.0);
    }

    #[tokio::test]
    async fn report_includes_neighbouring_months() {
        let server = get_test_server();

        let response = server
            .get(&format!("{}?month=2024-01", endpoints::SUMMARY))
            .await;

        response.assert_status_ok();

        let report = response.json::<Value>();
        assert_eq!(report["previous"], "2023-12");
        assert_eq!(report["next"], "2024-02");
    }

    #[tokio::test]
    async fn report_includes_distributions_for_selected_month() {
        let server = get_test_server();
        seed_two_months(&server).await;

        let response = server
            .get(&format!("{}?month=2024-01", endpoints::SUMMARY))
            .await;

        response.assert_status_ok();

        let report = response.json::<Value>();

        let income = report["income_by_method"]
            .as_array()
            .expect("income_by_method should be an array");
        assert_eq!(income.len(), 1);
        assert_eq!(income[0]["method"], "card");
        assert_eq!(income[0]["total"], 2500.0);
        assert_eq!(income[0]["share"], 100.0);

        let expenses = report["expenses_by_category"]
            .as_array()
            .expect("expenses_by_category should be an array");
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0]["category"], "seafood");
        assert_eq!(expenses[0]["total"], 450.0);
        assert_eq!(expenses[0]["share"], 100.0);
    }

    #[tokio::test]
    async fn report_rejects_malformed_month() {
        let server = get_test_server();

        let response = server
            .get(&format!("{}?month=2024-1", endpoints::SUMMARY))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn report_requires_month() {
        let server = get_test_server();

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
