//! Operator command parsing.
//!
//! Each input line is split on whitespace and handed to a `clap` parser
//! configured without a binary name, so the first word selects the command.

use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;

use crate::domain::{UserId, UserValidationError};

/// Errors raised while turning an input line into a [`ConsoleCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// The words did not match any command shape.
    #[error("{0}")]
    Usage(String),
    /// A target was neither a roster position nor a usable id.
    #[error("invalid target {raw:?}: {source}")]
    InvalidTarget {
        raw: String,
        #[source]
        source: UserValidationError,
    },
}

/// A roster entry named by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based position in the rendered roster.
    Position(usize),
    /// Service-assigned id.
    Id(UserId),
}

impl Target {
    /// Interpret `raw` as a position when it is a positive integer,
    /// otherwise as a user id.
    pub fn parse(raw: &str) -> Result<Self, CommandParseError> {
        match raw.parse::<usize>() {
            Ok(position) if position > 0 => return Ok(Self::Position(position)),
            _ => {}
        }
        UserId::new(raw)
            .map(Self::Id)
            .map_err(|source| CommandParseError::InvalidTarget {
                raw: raw.to_owned(),
                source,
            })
    }
}

/// One operator instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Refresh,
    DraftName(String),
    DraftEmail(String),
    Create,
    Edit(Target),
    EditName(String),
    EditEmail(String),
    Save,
    Cancel,
    Delete(Target),
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: RawCommand,
}

#[derive(Debug, Subcommand)]
enum RawCommand {
    /// Re-fetch the roster from the service.
    #[command(alias = "refresh")]
    List,
    /// Set the name of the new-user form.
    Name {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        words: Vec<String>,
    },
    /// Set the email of the new-user form.
    Email {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Submit the new-user form.
    Add,
    /// Start editing a user (position or id).
    Edit { target: String },
    /// Set the name of the user under edit.
    SetName {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        words: Vec<String>,
    },
    /// Set the email of the user under edit.
    SetEmail {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Save the user under edit.
    Save,
    /// Leave edit mode without saving.
    Cancel,
    /// Delete a user (position or id).
    Delete { target: String },
    /// Clear the general error line.
    Dismiss,
    /// Show this list of commands.
    Help,
    /// Leave the console.
    #[command(alias = "exit")]
    Quit,
}

impl TryFrom<RawCommand> for ConsoleCommand {
    type Error = CommandParseError;

    fn try_from(value: RawCommand) -> Result<Self, Self::Error> {
        Ok(match value {
            RawCommand::List => Self::Refresh,
            RawCommand::Name { words } => Self::DraftName(words.join(" ")),
            RawCommand::Email { text } => Self::DraftEmail(text),
            RawCommand::Add => Self::Create,
            RawCommand::Edit { target } => Self::Edit(Target::parse(&target)?),
            RawCommand::SetName { words } => Self::EditName(words.join(" ")),
            RawCommand::SetEmail { text } => Self::EditEmail(text),
            RawCommand::Save => Self::Save,
            RawCommand::Cancel => Self::Cancel,
            RawCommand::Delete { target } => Self::Delete(Target::parse(&target)?),
            RawCommand::Dismiss => Self::Dismiss,
            RawCommand::Help => Self::Help,
            RawCommand::Quit => Self::Quit,
        })
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Examples
/// ```
/// use frontend::inbound::console::{ConsoleCommand, parse_line};
///
/// let command = parse_line("name Ana María").expect("parses");
/// assert_eq!(command, Some(ConsoleCommand::DraftName("Ana María".to_owned())));
/// assert_eq!(parse_line("   ").expect("parses"), None);
/// ```
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, CommandParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = CommandLine::try_parse_from(words)
        .map_err(|error| CommandParseError::Usage(error.render().to_string()))?;
    ConsoleCommand::try_from(parsed.command).map(Some)
}

/// Command reference shown by `help`.
#[must_use]
pub fn help_text() -> String {
    CommandLine::command().render_help().to_string()
}
