//! Inbound adapters (driving side).
//!
//! The console is the only driving adapter: it turns operator input into
//! [`crate::domain::UserManager`] calls and renders the resulting snapshot.

pub mod console;
