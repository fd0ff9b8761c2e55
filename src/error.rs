//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative or non-finite amount was used to create a transaction.
    ///
    /// Amounts are unsigned, whether money came in or went out is recorded
    /// by the transaction kind.
    #[error("{0} is not a valid amount, amounts must be zero or greater")]
    InvalidAmount(f64),

    /// An empty string was used to create a transaction description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// A month selector could not be parsed.
    ///
    /// Month selectors are zero-padded strings such as "2024-01".
    #[error("\"{0}\" is not a valid month, expected the format YYYY-MM")]
    InvalidPeriod(String),

    /// A stored transaction kind did not match any known variant.
    #[error("\"{0}\" is not a valid transaction kind, expected \"income\" or \"expense\"")]
    InvalidKind(String),

    /// A stored payment method did not match any known variant.
    #[error("\"{0}\" is not a valid payment method")]
    InvalidPaymentMethod(String),

    /// A stored expense category did not match any known variant.
    #[error("\"{0}\" is not a valid expense category")]
    InvalidCategory(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Error::InvalidAmount(_) | Error::EmptyDescription | Error::InvalidPeriod(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::NotFound | Error::DeleteMissingTransaction => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred, check the server logs for more details".to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn validation_errors_map_to_unprocessable_entity() {
        let response = Error::InvalidAmount(-1.0).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let response = Error::DeleteMissingTransaction.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn sql_errors_map_to_internal_server_error() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn no_rows_converts_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }
}
