//! Usuarios REST outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `UserDirectory`
//! port against a collection exposing `GET`/`POST /usuarios` and
//! `PUT`/`DELETE /usuarios/:id`.

mod dto;
mod http_directory;

pub use http_directory::UsuariosHttpDirectory;
