//! Module `state`
//!
//! The screens of the application. Each variant owns the data shown on it,
//! so leaving a screen drops its state.

use std::fmt;

use crate::auth::Privilege;
use crate::records::{CustomerDraft, CustomerRecord};

/// The screen currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
    ShowCustomers,
    AddCustomer(AddForm),
    UpdateCustomer(StagedTable),
    DeleteCustomer(StagedTable),
}

impl Screen {
    /// Short title used in the console prompt.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Main => "main",
            Screen::ShowCustomers => "customers",
            Screen::AddCustomer(_) => "add customer",
            Screen::UpdateCustomer(_) => "update customers",
            Screen::DeleteCustomer(_) => "delete customers",
        }
    }

    /// Usage text for the commands available on this screen.
    pub fn help(&self, privilege: Option<Privilege>) -> String {
        let lines: &[&str] = match self {
            Screen::Login => &["login <username> <password>", "quit"],
            Screen::Main if privilege.is_some_and(|p| p.can_write()) => &[
                "show      list all customers",
                "add       add a customer",
                "update    edit customers",
                "delete    delete customers",
                "logout",
                "quit",
            ],
            Screen::Main => &["show      list all customers", "logout", "quit"],
            Screen::ShowCustomers => &["list", "back", "logout", "quit"],
            Screen::AddCustomer(_) => &[
                "set <name|number|cucm|imp|cuc|exp|contract> <value>",
                "list      show the form",
                "submit    create the customer",
                "back",
                "logout",
                "quit",
            ],
            Screen::UpdateCustomer(_) => &[
                "edit <number> <name|number|cucm|imp|cuc|exp|contract> <value>",
                "list      show the edited table",
                "save      store all changes",
                "back      discard unsaved changes",
                "logout",
                "quit",
            ],
            Screen::DeleteCustomer(_) => &[
                "remove <number>",
                "list",
                "back",
                "logout",
                "quit",
            ],
        };
        lines.join("\n")
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Input form of the add screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub draft: CustomerDraft,
}

impl AddForm {
    /// Returns the entered values and clears the form.
    pub fn take(&mut self) -> CustomerDraft {
        std::mem::take(&mut self.draft)
    }
}

/// Copy of the customer table a screen works on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedTable {
    pub rows: Vec<CustomerRecord>,
    /// Set once an edit has not been saved yet
    pub dirty: bool,
}

impl StagedTable {
    pub fn new(rows: Vec<CustomerRecord>) -> Self {
        Self { rows, dirty: false }
    }
}
