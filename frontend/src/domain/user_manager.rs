//! The user-management view controller.
//!
//! `UserManager` owns the current [`ViewState`] and a handle to the
//! [`UserDirectory`] port. Every operation calls the service (when needed)
//! and feeds the outcome through [`reduce`]; nothing else writes the state.
//!
//! Operations take `&mut self`, so a second request cannot be issued while
//! one is in flight and responses are applied in request order.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::action::Action;
use super::ports::UserDirectory;
use super::reducer::reduce;
use super::user::{User, UserId};
use super::view_state::{EditSession, ViewState};

/// View controller keeping the roster in sync with the user service.
pub struct UserManager<D: ?Sized> {
    directory: Arc<D>,
    state: ViewState,
    mounted: bool,
}

impl<D> UserManager<D>
where
    D: UserDirectory + ?Sized,
{
    /// Create a controller with an empty snapshot. Nothing is fetched until
    /// [`UserManager::mount`] runs.
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            state: ViewState::default(),
            mounted: false,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether the initial fetch has been issued.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Fetch the roster the first time the view is shown.
    ///
    /// Returns `true` when this call issued the fetch. Later calls are
    /// no-ops, so re-rendering never causes network traffic.
    pub async fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.fetch_all().await;
        true
    }

    /// Replace the roster with the service's current list.
    pub async fn fetch_all(&mut self) {
        match self.directory.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "roster refreshed");
                self.dispatch(Action::RosterFetched(users));
            }
            Err(error) => {
                warn!(error = %error, "roster refresh failed");
                self.dispatch(Action::RosterFetchFailed(error));
            }
        }
    }

    /// Update the draft name field.
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.dispatch(Action::DraftNameChanged(name.into()));
    }

    /// Update the draft email field.
    pub fn set_draft_email(&mut self, email: impl Into<String>) {
        self.dispatch(Action::DraftEmailChanged(email.into()));
    }

    /// Submit the draft to the service.
    ///
    /// On success the draft and field errors are cleared and the roster is
    /// refreshed. Validation failures replace the field errors; any other
    /// failure goes to the general error line.
    pub async fn create(&mut self) {
        let draft = self.state.draft().clone();
        match self.directory.create_user(&draft).await {
            Ok(()) => {
                info!(name = draft.name(), "user created");
                self.dispatch(Action::CreateSucceeded);
                self.fetch_all().await;
            }
            Err(error) => {
                warn!(error = %error, "user creation failed");
                self.dispatch(Action::CreateFailed(error));
            }
        }
    }

    /// Delete the record `id` and refresh on success. No confirmation.
    pub async fn remove(&mut self, id: &UserId) {
        match self.directory.delete_user(id).await {
            Ok(()) => {
                info!(user_id = %id, "user deleted");
                self.fetch_all().await;
            }
            Err(error) => {
                warn!(user_id = %id, error = %error, "user deletion failed");
                self.dispatch(Action::RemoveFailed(error));
            }
        }
    }

    /// Start editing a copy of `user`, discarding any unsaved edit.
    pub fn begin_edit(&mut self, user: User) {
        if let EditSession::Active(previous) = self.state.edit() {
            debug!(user_id = %previous.id(), "discarding unsaved edit");
        }
        self.dispatch(Action::EditBegan(user));
    }

    /// Update the name of the record under edit. Ignored when inactive.
    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        self.dispatch(Action::EditNameChanged(name.into()));
    }

    /// Update the email of the record under edit. Ignored when inactive.
    pub fn set_edit_email(&mut self, email: impl Into<String>) {
        self.dispatch(Action::EditEmailChanged(email.into()));
    }

    /// Save the record under edit.
    ///
    /// On success edit mode ends and the roster is refreshed; on failure
    /// edit mode stays on with the edited values so the operator can retry.
    /// Without an active edit nothing is sent.
    pub async fn commit_edit(&mut self) {
        let Some(user) = self.state.edit().user().cloned() else {
            debug!("commit requested without an active edit");
            return;
        };
        match self.directory.update_user(&user).await {
            Ok(()) => {
                info!(user_id = %user.id(), "user updated");
                self.dispatch(Action::EditCommitted);
                self.fetch_all().await;
            }
            Err(error) => {
                warn!(user_id = %user.id(), error = %error, "user update failed");
                self.dispatch(Action::EditCommitFailed(error));
            }
        }
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::EditCancelled);
    }

    /// Clear the general error line.
    pub fn dismiss_error(&mut self) {
        self.dispatch(Action::GeneralErrorDismissed);
    }
}

#[cfg(test)]
#[path = "user_manager_tests.rs"]
mod tests;
