use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::macros::date;

use tillbook_rs::{
    initialize_db,
    stores::{SQLiteTransactionStore, TransactionStore},
    transaction::{ExpenseCategory, PaymentMethod, Transaction, TransactionKind},
};

/// A utility for creating a demo database for the REST API server of tillbook_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database with a week of demo trading.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Recording demo transactions...");

    let mut store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));

    let takings = [
        (
            date!(2024 - 01 - 05),
            2500.00,
            PaymentMethod::Card,
            "Friday dinner service card takings",
        ),
        (
            date!(2024 - 01 - 06),
            800.00,
            PaymentMethod::Cash,
            "Saturday lunch cash takings",
        ),
        (
            date!(2024 - 01 - 07),
            1200.00,
            PaymentMethod::DeliveryApp,
            "Weekend delivery app payout",
        ),
        (
            date!(2024 - 01 - 12),
            3200.00,
            PaymentMethod::Card,
            "Friday night card takings",
        ),
        (
            date!(2024 - 01 - 13),
            950.00,
            PaymentMethod::Cash,
            "Saturday cash takings",
        ),
    ];

    for (date, amount, method, description) in takings {
        store.create(
            Transaction::build(amount, date, description, TransactionKind::Income)
                .payment_method(Some(method)),
        )?;
    }

    let costs = [
        (
            date!(2024 - 01 - 08),
            1500.00,
            ExpenseCategory::Seafood,
            "Fish market order",
        ),
        (
            date!(2024 - 01 - 09),
            450.00,
            ExpenseCategory::Electricity,
            "Electricity bill",
        ),
        (
            date!(2024 - 01 - 15),
            4500.00,
            ExpenseCategory::Wages,
            "Kitchen staff wages",
        ),
    ];

    for (date, amount, category, description) in costs {
        store.create(
            Transaction::build(amount, date, description, TransactionKind::Expense)
                .category(Some(category)),
        )?;
    }

    println!("Success!");

    Ok(())
}
