//! Authentication validator
//!
//! Checks a username/password pair against the credential table file.

use log::{info, warn};
use std::path::PathBuf;

use super::credentials::{UserCredential, sha256_hex};
use super::results::AuthOutcome;
use crate::storage::filesystem::load_valid_rows;

/// Validates logins against a credential table file.
///
/// The table is re-read on every attempt. Rows that fail to decode are
/// skipped so one bad entry does not lock out the other users.
#[derive(Debug, Clone)]
pub struct Authenticator {
    path: PathBuf,
}

impl Authenticator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the caller's privilege if the username exists and the
    /// password digest matches the stored hash exactly.
    pub fn validate(&self, username: &str, password: &str) -> AuthOutcome {
        let users: Vec<UserCredential> = load_valid_rows(&self.path);
        let outcome = check(&users, username, password);

        match outcome {
            AuthOutcome::Authorized { privilege } => {
                info!("User {} logged in with {} access", username, privilege)
            }
            AuthOutcome::Rejected => warn!("Rejected login for user {}", username),
        }
        outcome
    }
}

fn check(users: &[UserCredential], username: &str, password: &str) -> AuthOutcome {
    // First row wins if a username appears twice.
    match users.iter().find(|user| user.username == username) {
        Some(user) if user.password_hash == sha256_hex(password) => AuthOutcome::Authorized {
            privilege: user.privilege,
        },
        _ => AuthOutcome::Rejected,
    }
}
