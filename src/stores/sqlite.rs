//! Implements a SQLite backed transaction store.
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params_from_iter, types::Value};

use crate::{
    Error,
    database_id::TransactionId,
    stores::transaction::{SortOrder, TransactionQuery, TransactionStore},
    transaction::{OwnerId, Transaction, TransactionBuilder},
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidAmount] if the amount is negative or not a number,
    /// - [Error::EmptyDescription] if the description is blank,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        builder.validate()?;

        let transaction = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare(
                "INSERT INTO \"transaction\" (date, description, kind, amount, payment_method, category, owner)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING id, date, description, kind, amount, payment_method, category, owner",
            )?
            .query_row(
                (
                    builder.date,
                    builder.description,
                    builder.kind.as_str(),
                    builder.amount,
                    builder.payment_method.map(|method| method.as_str()),
                    builder.category.map(|category| category.as_str()),
                    builder.owner.as_ref().map(|owner| owner.as_ref()),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Query for transactions in the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get_query(&self, filter: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let mut query_string_parts = vec![
            "SELECT id, date, description, kind, amount, payment_method, category, owner FROM \"transaction\""
                .to_string(),
        ];
        let mut query_parameters = vec![];

        if let Some(owner) = filter.owner {
            query_parameters.push(Value::Text(owner.to_string()));
            query_string_parts.push(format!("WHERE owner = ?{}", query_parameters.len()));
        }

        match filter.sort_date {
            Some(SortOrder::Ascending) => {
                query_string_parts.push("ORDER BY date ASC, id ASC".to_string())
            }
            Some(SortOrder::Descending) => {
                query_string_parts.push("ORDER BY date DESC, id ASC".to_string())
            }
            None => {}
        }

        let query_string = query_string_parts.join(" ");
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare(&query_string)?
            .query_map(params, map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Remove a transaction from the database.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::DeleteMissingTransaction] if `id` does not refer to a transaction in the database,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", (id,))?;

        match rows_affected {
            0 => Err(Error::DeleteMissingTransaction),
            _ => Ok(()),
        }
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                kind TEXT NOT NULL,
                amount REAL NOT NULL,
                payment_method TEXT,
                category TEXT,
                owner TEXT
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Indices for the summary queries and owner scoping.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_owner ON \"transaction\"(owner);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Unknown kind, payment method or category text fails the row, a bad label
/// in storage should surface as an error rather than a skewed summary.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let kind: String = row.get(3)?;
    let amount = row.get(4)?;
    let payment_method: Option<String> = row.get(5)?;
    let category: Option<String> = row.get(6)?;
    let owner: Option<String> = row.get(7)?;

    Ok(Transaction {
        id,
        date,
        description,
        kind: decode_label(&kind, 3)?,
        amount,
        payment_method: payment_method
            .as_deref()
            .map(|text| decode_label(text, 5))
            .transpose()?,
        category: category
            .as_deref()
            .map(|text| decode_label(text, 6))
            .transpose()?,
        owner: owner.as_deref().map(OwnerId::new),
    })
}

fn decode_label<T>(text: &str, column_index: usize) -> Result<T, rusqlite::Error>
where
    T: FromStr<Err = Error>,
{
    text.parse().map_err(|error: Error| {
        rusqlite::Error::FromSqlConversionFailure(
            column_index,
            rusqlite::types::Type::Text,
            Box::new(error),
        )
    })
}
