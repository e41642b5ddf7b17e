//! Outbound adapters implementing the domain ports.
//!
//! - `usuarios`: reqwest client for the remote `/usuarios` REST collection.
//! - `memory`: process-local directory for offline runs and tests.

pub mod memory;
pub mod usuarios;
