//! Pure state transitions for the user-management view.

use super::action::Action;
use super::ports::UserDirectoryError;
use super::user::{User, UserDraft};
use super::view_state::{EditSession, ViewState};

/// Message shown when a failure carries no service-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Hubo un problema al realizar la solicitud.";

/// Map a failure onto the general error line.
///
/// Only a structured service message is surfaced verbatim; transport
/// failures, timeouts, validation bodies, and unrecognised bodies all fall
/// back to [`GENERIC_FAILURE_MESSAGE`].
///
/// # Examples
/// ```
/// use frontend::domain::ports::UserDirectoryError;
/// use frontend::domain::{GENERIC_FAILURE_MESSAGE, general_error_message};
///
/// let failed = UserDirectoryError::failed(404_u16, "user not found");
/// assert_eq!(general_error_message(&failed), "user not found");
///
/// let offline = UserDirectoryError::transport("connection refused");
/// assert_eq!(general_error_message(&offline), GENERIC_FAILURE_MESSAGE);
/// ```
#[must_use]
pub fn general_error_message(error: &UserDirectoryError) -> String {
    match error {
        UserDirectoryError::Failed { message, .. } => message.clone(),
        _ => GENERIC_FAILURE_MESSAGE.to_owned(),
    }
}

/// Produce the next snapshot for `action`.
///
/// The function never performs I/O; [`super::UserManager`] calls the user
/// service and feeds the outcome back in as an [`Action`].
#[must_use]
pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::RosterFetched(roster) => ViewState { roster, ..state },
        Action::RosterFetchFailed(error)
        | Action::RemoveFailed(error)
        | Action::EditCommitFailed(error) => with_general_error(state, &error),
        Action::DraftNameChanged(name) => ViewState {
            draft: state.draft.with_name(name),
            ..state
        },
        Action::DraftEmailChanged(email) => ViewState {
            draft: state.draft.with_email(email),
            ..state
        },
        Action::CreateSucceeded => ViewState {
            draft: UserDraft::default(),
            errors: state.errors.with_field(Vec::new()),
            ..state
        },
        Action::CreateFailed(UserDirectoryError::Rejected { issues }) => ViewState {
            errors: state.errors.with_field(issues),
            ..state
        },
        Action::CreateFailed(error) => with_general_error(state, &error),
        Action::EditBegan(user) => ViewState {
            edit: EditSession::Active(user),
            ..state
        },
        Action::EditNameChanged(name) => map_edit(state, |user| user.with_name(name)),
        Action::EditEmailChanged(email) => map_edit(state, |user| user.with_email(email)),
        Action::EditCommitted | Action::EditCancelled => ViewState {
            edit: EditSession::Inactive,
            ..state
        },
        Action::GeneralErrorDismissed => ViewState {
            errors: state.errors.with_general(None),
            ..state
        },
    }
}

fn with_general_error(state: ViewState, error: &UserDirectoryError) -> ViewState {
    ViewState {
        errors: state
            .errors
            .with_general(Some(general_error_message(error))),
        ..state
    }
}

fn map_edit(state: ViewState, edit: impl FnOnce(User) -> User) -> ViewState {
    match state.edit {
        EditSession::Active(user) => ViewState {
            edit: EditSession::Active(edit(user)),
            ..state
        },
        EditSession::Inactive => state,
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
