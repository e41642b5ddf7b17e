//! Immutable snapshot of the user-management view.

use super::user::{User, UserDraft, UserId};

/// The record under edit, if any.
///
/// Holding the record inside the active variant makes "inactive with a
/// record" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No edit in progress.
    #[default]
    Inactive,
    /// A copy of one existing record is being edited.
    Active(User),
}

impl EditSession {
    /// Whether edit mode is on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The record under edit, when active.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Active(user) => Some(user),
            Self::Inactive => None,
        }
    }
}

/// Two disjoint error channels.
///
/// `general` carries failures from fetch, delete, update, and creation
/// failures without validation issues. `field` carries only the validation
/// messages of the latest creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorChannel {
    general: Option<String>,
    field: Vec<String>,
}

impl ErrorChannel {
    /// Last general error message, if any.
    #[must_use]
    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    /// Validation messages from the latest creation attempt.
    #[must_use]
    pub fn field(&self) -> &[String] {
        self.field.as_slice()
    }

    pub(crate) fn with_general(self, message: Option<String>) -> Self {
        Self {
            general: message,
            ..self
        }
    }

    pub(crate) fn with_field(self, field: Vec<String>) -> Self {
        Self { field, ..self }
    }
}

/// Everything the view renders.
///
/// Instances are never mutated in place; [`super::reduce`] produces the
/// next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub(crate) roster: Vec<User>,
    pub(crate) draft: UserDraft,
    pub(crate) edit: EditSession,
    pub(crate) errors: ErrorChannel,
}

impl ViewState {
    /// Users in the order the service returned them.
    #[must_use]
    pub fn roster(&self) -> &[User] {
        self.roster.as_slice()
    }

    /// New-user form contents.
    #[must_use]
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Current edit session.
    #[must_use]
    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    /// Error channels.
    #[must_use]
    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    /// Look a user up in the roster by identifier.
    #[must_use]
    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        self.roster.iter().find(|user| user.id() == id)
    }

    /// Look a user up by 1-based roster position.
    #[must_use]
    pub fn user_at(&self, position: usize) -> Option<&User> {
        position
            .checked_sub(1)
            .and_then(|index| self.roster.get(index))
    }
}
