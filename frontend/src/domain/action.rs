//! Closed set of transitions accepted by the reducer.

use super::ports::UserDirectoryError;
use super::user::User;

/// Something that happened to the view: an operator edit or the outcome of
/// a call to the user service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The service returned the full roster.
    RosterFetched(Vec<User>),
    /// Listing the roster failed.
    RosterFetchFailed(UserDirectoryError),
    /// The operator typed into the draft name field.
    DraftNameChanged(String),
    /// The operator typed into the draft email field.
    DraftEmailChanged(String),
    /// The service accepted the draft.
    CreateSucceeded,
    /// The service refused or failed the draft.
    CreateFailed(UserDirectoryError),
    /// Deleting a record failed.
    RemoveFailed(UserDirectoryError),
    /// The operator picked a record to edit.
    EditBegan(User),
    /// The operator typed into the edit name field.
    EditNameChanged(String),
    /// The operator typed into the edit email field.
    EditEmailChanged(String),
    /// The service accepted the edited record.
    EditCommitted,
    /// Saving the edited record failed.
    EditCommitFailed(UserDirectoryError),
    /// The operator abandoned the edit.
    EditCancelled,
    /// The operator acknowledged the general error.
    GeneralErrorDismissed,
}
