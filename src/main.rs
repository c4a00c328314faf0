//! customer-ledger - Entry Point
//!
//! Starts the interactive customer database on the terminal.

use log::{info, warn};
use std::io;
use std::process;

use customer_ledger::config::{LedgerConfig, install_dir};
use customer_ledger::error::LedgerError;
use customer_ledger::error::handlers::handle_error;
use customer_ledger::storage::filesystem::file_exists;
use customer_ledger::{Authenticator, Console, CsvCustomerStore, Session};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run() {
        handle_error(&e);
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), LedgerError> {
    let install_dir = install_dir();
    let config = LedgerConfig::load(&install_dir)?;

    let customers_path = config.customers_path(&install_dir);
    let users_path = config.users_path(&install_dir);
    info!(
        "Using customers {} and users {}",
        customers_path.display(),
        users_path.display()
    );
    if !file_exists(&customers_path) {
        warn!(
            "Customer table {} does not exist, changes cannot be stored",
            customers_path.display()
        );
    }

    let session = Session::new(
        CsvCustomerStore::new(customers_path),
        Authenticator::new(users_path),
        config.expiry_warning_days,
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), session);
    console.run()?;
    Ok(())
}
