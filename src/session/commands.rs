//! Module `commands`
//!
//! Parses console input lines into commands.

use crate::records::Field;

/// A command typed at the console.
///
/// Which commands are accepted depends on the current screen.
#[derive(PartialEq)]
pub enum Command {
    Help,
    Quit,
    Back,
    Logout,
    Login { username: String, password: String },
    Show,
    Add,
    Update,
    Delete,
    List,
    Set { field: Field, value: String },
    Submit,
    Edit { number: String, field: Field, value: String },
    Save,
    Remove(String),
    /// Unrecognised input or missing arguments, with a usage hint
    Unknown(String),
}

impl Command {
    /// Command keyword, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Back => "back",
            Command::Logout => "logout",
            Command::Login { .. } => "login",
            Command::Show => "show",
            Command::Add => "add",
            Command::Update => "update",
            Command::Delete => "delete",
            Command::List => "list",
            Command::Set { .. } => "set",
            Command::Submit => "submit",
            Command::Edit { .. } => "edit",
            Command::Save => "save",
            Command::Remove(_) => "remove",
            Command::Unknown(_) => "unknown",
        }
    }
}

// Passwords must not end up in logs.
impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .finish_non_exhaustive(),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses a raw input line into a `Command`.
///
/// Keywords are case-insensitive. Values keep their inner whitespace, so
/// `set name Max Mustermann GmbH` sets the full name.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let (cmd, rest) = split_word(trimmed);

    match cmd.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "back" => Command::Back,
        "logout" => Command::Logout,
        "login" => parse_login(rest),
        "show" => Command::Show,
        "add" => Command::Add,
        "update" => Command::Update,
        "delete" => Command::Delete,
        "list" => Command::List,
        "set" => parse_set(rest),
        "submit" => Command::Submit,
        "edit" => parse_edit(rest),
        "save" => Command::Save,
        "remove" if !rest.is_empty() => Command::Remove(rest.to_string()),
        "remove" => Command::Unknown("Usage: remove <number>".into()),
        "" => Command::Unknown("Type help for a list of commands".into()),
        other => Command::Unknown(format!("Unknown command: {other}")),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_login(rest: &str) -> Command {
    let (username, password) = split_word(rest);
    if username.is_empty() || password.is_empty() {
        return Command::Unknown("Usage: login <username> <password>".into());
    }
    Command::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn parse_set(rest: &str) -> Command {
    let (field, value) = split_word(rest);
    match field.parse() {
        Ok(field) => Command::Set {
            field,
            value: value.to_string(),
        },
        Err(_) => Command::Unknown(
            "Usage: set <name|number|cucm|imp|cuc|exp|contract> <value>".into(),
        ),
    }
}

fn parse_edit(rest: &str) -> Command {
    let (number, rest) = split_word(rest);
    let (field, value) = split_word(rest);
    match field.parse() {
        Ok(field) if !number.is_empty() => Command::Edit {
            number: number.to_string(),
            field,
            value: value.to_string(),
        },
        _ => Command::Unknown(
            "Usage: edit <number> <name|number|cucm|imp|cuc|exp|contract> <value>".into(),
        ),
    }
}
