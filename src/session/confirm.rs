//! Confirmation callbacks
//!
//! Destructive actions ask the caller before they run.

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// Asks the user to confirm or cancel an action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Decision;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Decision,
{
    fn confirm(&mut self, prompt: &str) -> Decision {
        (*self)(prompt)
    }
}
