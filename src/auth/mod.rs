//! Authentication system
//!
//! Loads the credential table and checks login attempts against it.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{Privilege, UserCredential, sha256_hex};
pub use results::AuthOutcome;
pub use validator::Authenticator;
