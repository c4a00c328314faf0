//! Command handlers
//!
//! `Session` owns the navigation state and runs each command against the
//! record store and the authenticator. Duplicate checks and field
//! validation happen here, before the store is called.

use log::{debug, info, warn};

use super::commands::Command;
use super::confirm::{Confirm, Decision};
use super::render::{render_customers, render_form};
use super::state::{AddForm, Screen, StagedTable};
use crate::auth::{AuthOutcome, Authenticator, Privilege};
use crate::error::handlers::{StoreOperation, store_error_message, store_success_message};
use crate::records::expiry::today;
use crate::records::{CustomerDraft, CustomerRecord, Field, validate_field};
use crate::storage::{CustomerStore, find_duplicate, position_by_number};

/// Represents the outcome status of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    /// The user asked to leave the application.
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: CommandStatus::Failure(message.clone()),
            message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    username: String,
    privilege: Privilege,
}

/// One interactive session: who is logged in and which screen is shown.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    authenticator: Authenticator,
    warning_days: i64,
    screen: Screen,
    user: Option<User>,
}

impl<S: CustomerStore> Session<S> {
    pub fn new(store: S, authenticator: Authenticator, warning_days: i64) -> Self {
        Self {
            store,
            authenticator,
            warning_days,
            screen: Screen::Login,
            user: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn privilege(&self) -> Option<Privilege> {
        self.user.as_ref().map(|user| user.privilege)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dispatches a command to its handler for the current screen.
    pub fn handle(&mut self, command: Command, confirm: &mut dyn Confirm) -> CommandResult {
        debug!("Handling {:?} on screen {}", command, self.screen);

        match command {
            Command::Help => CommandResult::success(self.screen.help(self.privilege())),
            Command::Quit => CommandResult {
                status: CommandStatus::Exit,
                message: Some("Goodbye".into()),
            },
            Command::Unknown(hint) => CommandResult::failure(hint),
            Command::Login { username, password } => self.handle_login(&username, &password),
            _ if self.user.is_none() => {
                CommandResult::failure("Please log in with: login <username> <password>")
            }
            Command::Logout => self.handle_logout(confirm),
            Command::Back => self.handle_back(),
            Command::Show => self.open(Screen::ShowCustomers),
            Command::Add => self.open(Screen::AddCustomer(AddForm::default())),
            Command::Update => {
                let rows = self.store.read_all();
                self.open(Screen::UpdateCustomer(StagedTable::new(rows)))
            }
            Command::Delete => {
                let rows = self.store.read_all();
                self.open(Screen::DeleteCustomer(StagedTable::new(rows)))
            }
            Command::List => self.handle_list(),
            Command::Set { field, value } => self.handle_set(field, &value),
            Command::Submit => self.handle_submit(),
            Command::Edit {
                number,
                field,
                value,
            } => self.handle_edit(&number, field, &value),
            Command::Save => self.handle_save(confirm),
            Command::Remove(number) => self.handle_remove(&number, confirm),
        }
    }

    fn handle_login(&mut self, username: &str, password: &str) -> CommandResult {
        if self.user.is_some() {
            return CommandResult::failure("Already logged in, logout first");
        }

        match self.authenticator.validate(username, password) {
            AuthOutcome::Authorized { privilege } => {
                self.user = Some(User {
                    username: username.to_string(),
                    privilege,
                });
                self.screen = Screen::Main;
                CommandResult::success(format!(
                    "Logged in as {username} ({privilege})\n{}",
                    self.screen.help(Some(privilege))
                ))
            }
            AuthOutcome::Rejected => CommandResult::failure("Wrong username or password!"),
        }
    }

    fn handle_logout(&mut self, confirm: &mut dyn Confirm) -> CommandResult {
        match confirm.confirm("Please confirm the logout.") {
            Decision::Confirm => {
                if let Some(user) = self.user.take() {
                    info!("User {} logged out", user.username);
                }
                self.screen = Screen::Login;
                CommandResult::success("Logged out")
            }
            Decision::Cancel => CommandResult::success("Logout cancelled"),
        }
    }

    fn handle_back(&mut self) -> CommandResult {
        if let Screen::UpdateCustomer(table) = &self.screen {
            if table.dirty {
                warn!("Leaving the update screen with unsaved changes");
            }
        }
        self.screen = Screen::Main;
        CommandResult::success(self.screen.help(self.privilege()))
    }

    /// Switches from the main menu to another screen.
    fn open(&mut self, target: Screen) -> CommandResult {
        if self.screen != Screen::Main {
            return CommandResult::failure("Go back to the main menu first");
        }

        let needs_write = !matches!(target, Screen::ShowCustomers);
        if needs_write && !self.privilege().is_some_and(|p| p.can_write()) {
            return CommandResult::failure("This action requires read-write access");
        }

        self.screen = target;
        self.handle_list()
    }

    fn handle_list(&self) -> CommandResult {
        match &self.screen {
            Screen::ShowCustomers => CommandResult::success(self.render(&self.store.read_all())),
            Screen::AddCustomer(form) => CommandResult::success(render_form(&form.draft)),
            Screen::UpdateCustomer(table) | Screen::DeleteCustomer(table) => {
                CommandResult::success(self.render(&table.rows))
            }
            Screen::Login | Screen::Main => {
                CommandResult::failure("Nothing to list here, try show")
            }
        }
    }

    fn handle_set(&mut self, field: Field, value: &str) -> CommandResult {
        let Screen::AddCustomer(form) = &mut self.screen else {
            return CommandResult::failure("set is only available when adding a customer");
        };

        if let Err(e) = validate_field(field, value) {
            return CommandResult::failure(e.to_string());
        }

        form.draft.set(field, value);
        CommandResult::success(format!("{field} set"))
    }

    fn handle_submit(&mut self) -> CommandResult {
        let Screen::AddCustomer(form) = &mut self.screen else {
            return CommandResult::failure("submit is only available when adding a customer");
        };

        // The form is cleared whatever the outcome.
        let draft = form.take();

        if draft.name.is_empty() || draft.number.is_empty() {
            return CommandResult::failure(
                "No customer name and / or no customer number was given!",
            );
        }
        if let Err(e) = check_draft(&draft) {
            return CommandResult::failure(e);
        }

        let current = self.store.read_all();
        if let Some(duplicate) = find_duplicate(&current, &draft.name, &draft.number) {
            return CommandResult::failure(duplicate.message());
        }

        match self.store.add(draft) {
            Ok(record) => CommandResult::success(format!(
                "{} (id {})",
                store_success_message(StoreOperation::Add),
                record.id
            )),
            Err(e) => CommandResult::failure(store_error_message(StoreOperation::Add, &e)),
        }
    }

    fn handle_edit(&mut self, number: &str, field: Field, value: &str) -> CommandResult {
        let Screen::UpdateCustomer(table) = &mut self.screen else {
            return CommandResult::failure("edit is only available when updating customers");
        };

        let Some(index) = position_by_number(&table.rows, number) else {
            return CommandResult::failure(format!("No customer with number {number}"));
        };

        if let Err(e) = validate_field(field, value) {
            return CommandResult::failure(e.to_string());
        }

        let collides = table.rows.iter().enumerate().any(|(i, row)| {
            i != index
                && match field {
                    Field::Name => row.name == value,
                    Field::Number => row.number == value,
                    _ => false,
                }
        });
        if collides {
            return CommandResult::failure(format!("Another customer already uses this {field}"));
        }

        if let Some(row) = table.rows.get_mut(index) {
            row.set(field, value);
            table.dirty = true;
        }
        CommandResult::success(format!("{field} of customer {number} changed, save to store"))
    }

    fn handle_save(&mut self, confirm: &mut dyn Confirm) -> CommandResult {
        let Screen::UpdateCustomer(table) = &mut self.screen else {
            return CommandResult::failure("save is only available when updating customers");
        };

        if confirm.confirm("Save the changed data?") == Decision::Cancel {
            return CommandResult::success("Changes not saved");
        }

        match self.store.update(&table.rows) {
            Ok(()) => {
                table.dirty = false;
                CommandResult::success(store_success_message(StoreOperation::Update))
            }
            Err(e) => CommandResult::failure(store_error_message(StoreOperation::Update, &e)),
        }
    }

    fn handle_remove(&mut self, number: &str, confirm: &mut dyn Confirm) -> CommandResult {
        let Screen::DeleteCustomer(table) = &mut self.screen else {
            return CommandResult::failure("remove is only available when deleting customers");
        };

        let Some(shown) = position_by_number(&table.rows, number) else {
            return CommandResult::failure(format!("No customer with number {number}"));
        };

        if confirm.confirm("Really delete the customer?") == Decision::Cancel {
            return CommandResult::success("Deletion cancelled");
        }

        // Delete against the stored table, not the possibly stale screen copy.
        let mut current = self.store.read_all();
        let Some(stored) = position_by_number(&current, number) else {
            return CommandResult::failure(format!("No customer with number {number}"));
        };
        current.remove(stored);

        match self.store.delete(&current) {
            Ok(()) => {
                table.rows.remove(shown);
                CommandResult::success(store_success_message(StoreOperation::Delete))
            }
            Err(e) => CommandResult::failure(store_error_message(StoreOperation::Delete, &e)),
        }
    }

    fn render(&self, rows: &[CustomerRecord]) -> String {
        render_customers(rows, today(), self.warning_days)
    }
}

/// Validates every field of a submitted draft.
fn check_draft(draft: &CustomerDraft) -> Result<(), String> {
    let fields = [
        (Field::Name, draft.name.as_str()),
        (Field::Number, draft.number.as_str()),
        (Field::Cucm, draft.cucm_version.as_deref().unwrap_or_default()),
        (Field::Imp, draft.imp_version.as_deref().unwrap_or_default()),
        (Field::Cuc, draft.cuc_version.as_deref().unwrap_or_default()),
        (Field::Exp, draft.exp_version.as_deref().unwrap_or_default()),
        (Field::Contract, draft.contract_expiry.as_str()),
    ];

    for (field, value) in fields {
        validate_field(field, value).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sha256_hex;
    use crate::session::parse_command;
    use crate::storage::CsvCustomerStore;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const HEADER: &str = "id,name,number,cucm,imp,cuc,exp,contract-expire\n";

    fn session(customers: &str) -> (TempDir, Session<CsvCustomerStore>) {
        let dir = tempdir().unwrap();
        let customers_path = dir.path().join("dataset.csv");
        let users_path = dir.path().join("users.csv");
        fs::write(&customers_path, customers).unwrap();
        fs::write(
            &users_path,
            format!(
                "username,password,privilege\nalice,{},w\nbob,{},r\n",
                sha256_hex("secret"),
                sha256_hex("hunter2")
            ),
        )
        .unwrap();

        let session = Session::new(
            CsvCustomerStore::new(customers_path),
            Authenticator::new(users_path),
            365,
        );
        (dir, session)
    }

    fn run(session: &mut Session<CsvCustomerStore>, line: &str) -> CommandResult {
        session.handle(parse_command(line), &mut |_: &str| Decision::Confirm)
    }

    fn message(result: &CommandResult) -> &str {
        result.message.as_deref().unwrap_or_default()
    }

    #[test]
    fn commands_require_login() {
        let (_dir, mut session) = session(HEADER);

        let result = run(&mut session, "show");
        assert!(!result.is_success());
        assert_eq!(session.screen(), &Screen::Login);

        let result = run(&mut session, "login alice wrong");
        assert_eq!(message(&result), "Wrong username or password!");
        let result = run(&mut session, "login nobody secret");
        assert_eq!(message(&result), "Wrong username or password!");

        assert!(run(&mut session, "login alice secret").is_success());
        assert_eq!(session.screen(), &Screen::Main);
        assert_eq!(session.privilege(), Some(Privilege::ReadWrite));
    }

    #[test]
    fn read_only_users_can_only_show() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login bob hunter2");

        for command in ["add", "update", "delete"] {
            let result = run(&mut session, command);
            assert_eq!(
                result.status,
                CommandStatus::Failure("This action requires read-write access".into())
            );
            assert_eq!(session.screen(), &Screen::Main);
        }

        assert!(run(&mut session, "show").is_success());
        assert_eq!(session.screen(), &Screen::ShowCustomers);
    }

    #[test]
    fn submit_adds_customer_and_clears_form() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login alice secret");
        run(&mut session, "add");

        assert!(run(&mut session, "set name Max Mustermann GmbH").is_success());
        assert!(run(&mut session, "set number 12345").is_success());
        assert!(run(&mut session, "set cucm 12.5.1.17900-22").is_success());
        assert!(run(&mut session, "set contract 1/10/2030").is_success());

        let result = run(&mut session, "submit");
        assert!(result.is_success(), "{result:?}");
        assert!(message(&result).contains("id 1"));
        assert_eq!(
            session.screen(),
            &Screen::AddCustomer(AddForm::default())
        );

        let stored = session.store().read_all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Max Mustermann GmbH");
        assert_eq!(stored[0].cucm_version.as_deref(), Some("12.5.1.17900-22"));
    }

    #[test]
    fn set_rejects_malformed_values() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login alice secret");
        run(&mut session, "add");

        assert!(!run(&mut session, "set number 123456").is_success());
        assert!(!run(&mut session, "set exp 14.0.2").is_success());
        assert!(!run(&mut session, "set contract 31/2/2025").is_success());
        assert_eq!(
            session.screen(),
            &Screen::AddCustomer(AddForm::default())
        );
    }

    #[test]
    fn submit_reports_duplicates() {
        let (_dir, mut session) =
            session(&format!("{HEADER}1,Test AG,100,,,,,1/1/2030\n"));
        run(&mut session, "login alice secret");
        run(&mut session, "add");

        for (name, number, expected) in [
            ("Test AG", "200", "Customer name already exists!"),
            ("New AG", "100", "Customer number already exists!"),
            (
                "Test AG",
                "100",
                "Customer name and customer number already exist!",
            ),
        ] {
            run(&mut session, &format!("set name {name}"));
            run(&mut session, &format!("set number {number}"));
            run(&mut session, "set contract 1/1/2030");
            let result = run(&mut session, "submit");
            assert_eq!(message(&result), expected);
        }

        assert_eq!(session.store().read_all().len(), 1);
    }

    #[test]
    fn submit_requires_name_and_number() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login alice secret");
        run(&mut session, "add");
        run(&mut session, "set name Test AG");

        let result = run(&mut session, "submit");
        assert_eq!(
            message(&result),
            "No customer name and / or no customer number was given!"
        );
    }

    #[test]
    fn submit_without_data_file_reports_file_missing() {
        let (dir, mut session) = session(HEADER);
        fs::remove_file(dir.path().join("dataset.csv")).unwrap();
        run(&mut session, "login alice secret");
        run(&mut session, "add");
        run(&mut session, "set name Test AG");
        run(&mut session, "set number 1");
        run(&mut session, "set contract 1/1/2030");

        let result = run(&mut session, "submit");
        assert_eq!(
            message(&result),
            "The customer could not be created: the data file does not exist!"
        );
        assert!(!dir.path().join("dataset.csv").exists());
    }

    #[test]
    fn edits_are_staged_until_saved() {
        let (_dir, mut session) = session(&format!(
            "{HEADER}1,Test AG,100,,,,,1/1/2030\n2,Other AG,200,,,,,1/1/2030\n"
        ));
        run(&mut session, "login alice secret");
        run(&mut session, "update");

        assert!(run(&mut session, "edit 100 exp X14.3.1").is_success());
        assert!(!run(&mut session, "edit 100 number 200").is_success());
        assert!(!run(&mut session, "edit 999 exp X14.3.1").is_success());
        assert_eq!(session.store().read_all()[0].exp_version, None);

        let result = session.handle(parse_command("save"), &mut |_: &str| Decision::Cancel);
        assert_eq!(message(&result), "Changes not saved");
        assert_eq!(session.store().read_all()[0].exp_version, None);

        assert!(run(&mut session, "save").is_success());
        let stored = session.store().read_all();
        assert_eq!(stored[0].exp_version.as_deref(), Some("X14.3.1"));
        assert_eq!(stored[0].id, 1);
        assert_eq!(stored[1].name, "Other AG");
    }

    #[test]
    fn remove_deletes_only_the_matching_number() {
        let (_dir, mut session) = session(&format!(
            "{HEADER}1,Test AG,12345,,,,,1/1/2030\n2,Other AG,54321,,,,,1/1/2030\n"
        ));
        run(&mut session, "login alice secret");
        run(&mut session, "delete");

        let result = session.handle(parse_command("remove 12345"), &mut |_: &str| {
            Decision::Cancel
        });
        assert_eq!(message(&result), "Deletion cancelled");
        assert_eq!(session.store().read_all().len(), 2);

        assert!(run(&mut session, "remove 12345").is_success());
        let stored = session.store().read_all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].number, "54321");

        match session.screen() {
            Screen::DeleteCustomer(table) => assert_eq!(table.rows, stored),
            other => panic!("unexpected screen {other}"),
        }
    }

    #[test]
    fn navigation_goes_through_the_main_menu() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login alice secret");
        run(&mut session, "show");

        assert!(!run(&mut session, "add").is_success());
        assert_eq!(session.screen(), &Screen::ShowCustomers);

        run(&mut session, "back");
        assert!(run(&mut session, "add").is_success());
    }

    #[test]
    fn logout_asks_for_confirmation() {
        let (_dir, mut session) = session(HEADER);
        run(&mut session, "login alice secret");

        session.handle(parse_command("logout"), &mut |_: &str| Decision::Cancel);
        assert_eq!(session.screen(), &Screen::Main);

        run(&mut session, "logout");
        assert_eq!(session.screen(), &Screen::Login);
        assert_eq!(session.privilege(), None);
    }
}
