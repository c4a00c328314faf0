//! Configuration management for customer-ledger
//!
//! Settings come from an optional `config.toml`, overridden by environment
//! variables prefixed with `CUSTOMER_LEDGER_`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    /// Directory holding both tables. Relative paths resolve against the
    /// install directory.
    /// Environment: CUSTOMER_LEDGER_DATA_DIR
    pub data_dir: String,

    /// Customer table file name inside `data_dir`
    pub customers_file: String,

    /// Credential table file name inside `data_dir`
    pub users_file: String,

    /// Contracts ending within this many days are flagged as expiring
    pub expiry_warning_days: i64,
}

impl LedgerConfig {
    /// Load configuration, looking for `config.toml` next to the executable
    /// first and then in the working directory.
    pub fn load(install_dir: &Path) -> Result<Self, ConfigError> {
        let config_paths = [install_dir.join("config"), PathBuf::from("config")];

        let mut builder = Config::builder()
            .set_default("data_dir", "data")?
            .set_default("customers_file", "dataset.csv")?
            .set_default("users_file", "users.csv")?
            .set_default("expiry_warning_days", 365_i64)?;

        for config_path in &config_paths {
            builder = builder
                .add_source(File::with_name(&config_path.to_string_lossy()).required(false));
        }

        let config: LedgerConfig = builder
            .add_source(Environment::with_prefix("CUSTOMER_LEDGER"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.is_empty() {
            return Err(ConfigError::Message("data_dir cannot be empty".into()));
        }

        if self.customers_file.is_empty() || self.users_file.is_empty() {
            return Err(ConfigError::Message(
                "customers_file and users_file cannot be empty".into(),
            ));
        }

        if self.customers_file == self.users_file {
            return Err(ConfigError::Message(
                "customers_file and users_file must differ".into(),
            ));
        }

        if self.expiry_warning_days <= 0 {
            return Err(ConfigError::Message(
                "expiry_warning_days must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Data directory resolved against the install directory
    pub fn data_path(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(&self.data_dir)
    }

    /// Full path of the customer table
    pub fn customers_path(&self, install_dir: &Path) -> PathBuf {
        self.data_path(install_dir).join(&self.customers_file)
    }

    /// Full path of the credential table
    pub fn users_path(&self, install_dir: &Path) -> PathBuf {
        self.data_path(install_dir).join(&self.users_file)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            customers_file: "dataset.csv".to_string(),
            users_file: "users.csv".to_string(),
            expiry_warning_days: 365,
        }
    }
}

/// Directory containing the running executable, or the working directory
/// if it cannot be determined.
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
