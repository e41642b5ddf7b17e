//! Domain primitives, view state, and the user manager service.
//!
//! Purpose: keep every transition of the user-management view explicit and
//! testable without a terminal or a network. State is an immutable snapshot
//! ([`ViewState`]) advanced by the pure [`reduce`] function; the
//! [`UserManager`] performs I/O through the [`ports::UserDirectory`] port and
//! dispatches the resulting [`Action`]s.
//!
//! Public surface:
//! - User, UserId, UserDraft: the record model.
//! - ViewState, EditSession, ErrorChannel: the state snapshot.
//! - Action, reduce: the closed action set and its reducer.
//! - UserManager: the view controller that owns the snapshot.

pub mod action;
pub mod ports;
pub mod reducer;
pub mod user;
pub mod user_manager;
pub mod view_state;

pub use self::action::Action;
pub use self::reducer::{GENERIC_FAILURE_MESSAGE, general_error_message, reduce};
pub use self::user::{User, UserDraft, UserId, UserValidationError};
pub use self::user_manager::UserManager;
pub use self::view_state::{EditSession, ErrorChannel, ViewState};
