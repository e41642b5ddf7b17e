//! In-process user directory.
//!
//! Backs offline sessions and integration tests. It applies a small subset
//! of the remote service's validation so rejected submissions can be
//! exercised without a network.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{User, UserDraft, UserId};

const NAME_REQUIRED: &str = "name is required";
const EMAIL_INVALID: &str = "email is invalid";

/// User directory keeping records in insertion order behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Seed the directory with existing records.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Copy of the stored records, for assertions and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.lock_users()?.clone())
    }

    fn lock_users(&self) -> Result<MutexGuard<'_, Vec<User>>, UserDirectoryError> {
        self.users
            .lock()
            .map_err(|_| UserDirectoryError::transport("in-memory user store poisoned"))
    }
}

fn validation_issues(name: &str, email: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if name.trim().is_empty() {
        issues.push(NAME_REQUIRED.to_owned());
    }
    if !email.contains('@') {
        issues.push(EMAIL_INVALID.to_owned());
    }
    issues
}

fn not_found(id: &UserId) -> UserDirectoryError {
    UserDirectoryError::failed(404_u16, format!("user {id} not found"))
}

fn fresh_id() -> Result<UserId, UserDirectoryError> {
    UserId::new(Uuid::new_v4().simple().to_string())
        .map_err(|error| UserDirectoryError::transport(error.to_string()))
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        self.snapshot()
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError> {
        let issues = validation_issues(draft.name(), draft.email());
        if !issues.is_empty() {
            return Err(UserDirectoryError::rejected(issues));
        }
        let user = User::new(fresh_id()?, draft.name(), draft.email());
        self.lock_users()?.push(user);
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<(), UserDirectoryError> {
        let issues = validation_issues(user.name(), user.email());
        if !issues.is_empty() {
            return Err(UserDirectoryError::rejected(issues));
        }
        let mut users = self.lock_users()?;
        let stored = users
            .iter_mut()
            .find(|stored| stored.id() == user.id())
            .ok_or_else(|| not_found(user.id()))?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        let mut users = self.lock_users()?;
        let position = users
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or_else(|| not_found(id))?;
        users.remove(position);
        Ok(())
    }
}
