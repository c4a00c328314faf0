//! Credential storage
//!
//! Rows of the credential table and the password digest they store.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Access level of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Privilege {
    #[serde(rename = "r")]
    Read,
    /// Unlocks adding, updating and deleting customers.
    #[serde(rename = "w")]
    ReadWrite,
}

impl Privilege {
    pub fn can_write(&self) -> bool {
        matches!(self, Privilege::ReadWrite)
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privilege::Read => f.write_str("read-only"),
            Privilege::ReadWrite => f.write_str("read-write"),
        }
    }
}

/// One row of the credential table.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub username: String,
    /// Lowercase hex SHA-256 of the UTF-8 password.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub privilege: Privilege,
}

impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("password_hash", &"**redacted**")
            .field("privilege", &self.privilege)
            .finish()
    }
}

/// Lowercase hex SHA-256 digest of `password`.
pub fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
