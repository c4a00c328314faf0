//! Authentication result types

use super::credentials::Privilege;

/// Result of a login attempt
///
/// Unknown users and wrong passwords both produce `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authorized { privilege: Privilege },
    Rejected,
}

impl AuthOutcome {
    pub fn privilege(&self) -> Option<Privilege> {
        match self {
            AuthOutcome::Authorized { privilege } => Some(*privilege),
            AuthOutcome::Rejected => None,
        }
    }
}
