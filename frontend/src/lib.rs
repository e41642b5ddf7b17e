//! Roster console library modules.
//!
//! The crate follows the hexagonal layout: `domain` owns the view state,
//! the reducer, and the ports; `outbound` implements the user directory
//! port; `inbound` drives the domain from a line-oriented console.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::{RosterSettings, SettingsError};
