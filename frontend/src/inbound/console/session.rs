//! Read-eval-render loop driving a [`UserManager`] from text input.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::command::{ConsoleCommand, Target, help_text, parse_line};
use super::render::RosterView;
use crate::domain::ports::UserDirectory;
use crate::domain::{User, UserManager, ViewState};

/// Failures that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

enum Outcome {
    Render,
    Notice(String),
    Quit,
}

/// Mount the manager, print the screen, then execute one command per line
/// until `quit` or end of input.
///
/// Parse errors and unknown targets are printed as notices and never reach
/// the view state.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] when reading or writing fails.
pub async fn run_console<D, R, W>(
    manager: &mut UserManager<D>,
    input: R,
    mut output: W,
) -> Result<(), ConsoleError>
where
    D: UserDirectory + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    manager.mount().await;
    write_screen(&mut output, manager.state()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                debug!(error = %error, "unparsed console line");
                write_notice(&mut output, &error.to_string()).await?;
                continue;
            }
        };
        match execute(manager, command).await {
            Outcome::Render => write_screen(&mut output, manager.state()).await?,
            Outcome::Notice(text) => write_notice(&mut output, &text).await?,
            Outcome::Quit => break,
        }
    }

    info!("console session ended");
    Ok(())
}

async fn execute<D>(manager: &mut UserManager<D>, command: ConsoleCommand) -> Outcome
where
    D: UserDirectory + ?Sized,
{
    match command {
        ConsoleCommand::Refresh => manager.fetch_all().await,
        ConsoleCommand::DraftName(name) => manager.set_draft_name(name),
        ConsoleCommand::DraftEmail(email) => manager.set_draft_email(email),
        ConsoleCommand::Create => manager.create().await,
        ConsoleCommand::Edit(target) => match resolve(manager.state(), &target) {
            Ok(user) => manager.begin_edit(user),
            Err(notice) => return Outcome::Notice(notice),
        },
        ConsoleCommand::EditName(name) => manager.set_edit_name(name),
        ConsoleCommand::EditEmail(email) => manager.set_edit_email(email),
        ConsoleCommand::Save => {
            if !manager.state().edit().is_active() {
                return Outcome::Notice("no edit in progress".to_owned());
            }
            manager.commit_edit().await;
        }
        ConsoleCommand::Cancel => manager.cancel_edit(),
        ConsoleCommand::Delete(target) => match resolve(manager.state(), &target) {
            Ok(user) => manager.remove(user.id()).await,
            Err(notice) => return Outcome::Notice(notice),
        },
        ConsoleCommand::Dismiss => manager.dismiss_error(),
        ConsoleCommand::Help => return Outcome::Notice(help_text()),
        ConsoleCommand::Quit => return Outcome::Quit,
    }
    Outcome::Render
}

fn resolve(state: &ViewState, target: &Target) -> Result<User, String> {
    let found = match target {
        Target::Position(position) => state.user_at(*position),
        Target::Id(id) => state.find_user(id),
    };
    found.cloned().ok_or_else(|| match target {
        Target::Position(position) => format!("no user at position {position}"),
        Target::Id(id) => format!("no user with id {id}"),
    })
}

async fn write_screen<W>(output: &mut W, state: &ViewState) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(RosterView(state).to_string().as_bytes())
        .await?;
    output.flush().await
}

async fn write_notice<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.trim_end().as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
