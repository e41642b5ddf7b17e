//! Driven port for the remote user directory.
//!
//! The domain owns the request shapes and the failure taxonomy so the view
//! controller stays adapter-agnostic. Adapters decide how a wire response
//! maps onto [`UserDirectoryError`]; the reducer decides which error
//! channel each variant lands in.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{User, UserDraft, UserId};

define_port_error! {
    /// Failures surfaced by user directory adapters.
    pub enum UserDirectoryError {
        /// The service refused the payload and listed validation issues.
        Rejected { issues: Vec<String> } =>
            "user service rejected the record: {issues:?}",
        /// The service answered with an error carrying a message.
        Failed { status: u16, message: String } =>
            "user service failed with status {status}: {message}",
        /// The service answered with an error body of unknown shape.
        UnexpectedResponse { status: u16, preview: String } =>
            "user service returned an unrecognised error body (status {status}): {preview}",
        /// No response was received.
        Transport { message: String } =>
            "user service transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "user service timed out: {message}",
        /// A successful response could not be decoded.
        Decode { message: String } =>
            "user service response decode failed: {message}",
    }
}

impl UserDirectoryError {
    /// Validation issues, when the service rejected the payload.
    pub fn issues(&self) -> Option<&[String]> {
        match self {
            Self::Rejected { issues } => Some(issues.as_slice()),
            _ => None,
        }
    }
}

/// Port for listing and mutating user records held by the remote service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return every record, in service order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use frontend::domain::ports::UserDirectory;
    /// use frontend::outbound::memory::InMemoryUserDirectory;
    ///
    /// let directory = InMemoryUserDirectory::default();
    /// let users = directory.list_users().await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), frontend::domain::ports::UserDirectoryError>(())
    /// ```
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Ask the service to create a record from `draft`.
    ///
    /// The created record is not returned; callers re-list to observe it.
    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError>;

    /// Replace the stored record identified by `user.id()`.
    async fn update_user(&self, user: &User) -> Result<(), UserDirectoryError>;

    /// Delete the record identified by `id`.
    async fn delete_user(&self, id: &UserId) -> Result<(), UserDirectoryError>;
}
