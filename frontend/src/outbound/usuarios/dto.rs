//! DTOs for the usuarios wire format.
//!
//! The service speaks `_id`/`nombre`/`correo`; these DTOs keep those names
//! at the edge and map into domain records in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserDraft, UserId};

#[derive(Debug, Deserialize, Serialize)]
pub(super) struct UsuarioDto {
    #[serde(rename = "_id")]
    pub(super) id: String,
    #[serde(rename = "nombre", default)]
    pub(super) name: String,
    #[serde(rename = "correo", default)]
    pub(super) email: String,
}

impl UsuarioDto {
    pub(super) fn into_domain_user(self) -> Result<User, String> {
        let id = UserId::new(self.id.clone())
            .map_err(|error| format!("record id {:?} rejected: {error}", self.id))?;
        Ok(User::new(id, self.name, self.email))
    }
}

impl From<&User> for UsuarioDto {
    fn from(value: &User) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            email: value.email().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NuevoUsuarioDto<'a> {
    #[serde(rename = "nombre")]
    pub(super) name: &'a str,
    #[serde(rename = "correo")]
    pub(super) email: &'a str,
}

impl<'a> From<&'a UserDraft> for NuevoUsuarioDto<'a> {
    fn from(value: &'a UserDraft) -> Self {
        Self {
            name: value.name(),
            email: value.email(),
        }
    }
}

/// Error body as the service may send it; every field is optional because
/// the shape differs per endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) errores: Option<Vec<ValidationIssueDto>>,
    #[serde(default)]
    pub(super) message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ValidationIssueDto {
    #[serde(default)]
    pub(super) msg: Option<String>,
}

/// Classified error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ErrorBody {
    Validation(Vec<String>),
    Message(String),
    Unrecognised,
}

impl ErrorBody {
    pub(super) fn classify(body: &[u8]) -> Self {
        let Ok(decoded) = serde_json::from_slice::<ErrorBodyDto>(body) else {
            return Self::Unrecognised;
        };
        if let Some(issues) = decoded.errores {
            return Self::Validation(issues.into_iter().filter_map(|issue| issue.msg).collect());
        }
        match decoded.message {
            Some(message) if !message.trim().is_empty() => Self::Message(message),
            _ => Self::Unrecognised,
        }
    }
}

pub(super) fn decode_roster(body: &[u8]) -> Result<Vec<User>, String> {
    let records: Vec<UsuarioDto> = serde_json::from_slice(body)
        .map_err(|error| format!("invalid usuarios JSON payload: {error}"))?;
    records
        .into_iter()
        .map(UsuarioDto::into_domain_user)
        .collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for wire decoding and error classification.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_records_and_ignores_extra_fields() {
        let body = br#"[
            { "_id": "65f1", "nombre": "Ana", "correo": "ana@x.com", "__v": 0 },
            { "_id": "65f2", "nombre": "Luis", "correo": "luis@x.com", "createdAt": "2024-03-01" }
        ]"#;

        let users = decode_roster(body).expect("roster should decode");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id().as_ref(), "65f1");
        assert_eq!(users[1].name(), "Luis");
        assert_eq!(users[1].email(), "luis@x.com");
    }

    #[rstest]
    fn missing_name_and_email_decode_as_empty() {
        let users = decode_roster(br#"[{ "_id": "65f1" }]"#).expect("roster should decode");
        assert_eq!(users[0].name(), "");
        assert_eq!(users[0].email(), "");
    }

    #[rstest]
    #[case::missing_id(r#"[{ "nombre": "Ana" }]"#)]
    #[case::blank_id(r#"[{ "_id": "", "nombre": "Ana" }]"#)]
    #[case::not_a_list(r#"{ "usuarios": [] }"#)]
    fn rejects_malformed_rosters(#[case] body: &str) {
        assert!(decode_roster(body.as_bytes()).is_err());
    }

    #[rstest]
    fn serialises_records_with_wire_names() {
        let user = User::new(UserId::new("65f1").expect("valid id"), "Ana", "ana@x.com");

        let json = serde_json::to_value(UsuarioDto::from(&user)).expect("serialise");

        assert_eq!(
            json,
            serde_json::json!({ "_id": "65f1", "nombre": "Ana", "correo": "ana@x.com" })
        );
    }

    #[rstest]
    fn serialises_drafts_without_an_id() {
        let draft = UserDraft::new("Ana", "ana@x.com");

        let json = serde_json::to_value(NuevoUsuarioDto::from(&draft)).expect("serialise");

        assert_eq!(
            json,
            serde_json::json!({ "nombre": "Ana", "correo": "ana@x.com" })
        );
    }

    #[rstest]
    #[case::validation(
        r#"{ "errores": [{ "msg": "correo inválido", "param": "correo" }] }"#,
        ErrorBody::Validation(vec!["correo inválido".to_owned()])
    )]
    #[case::validation_skips_issues_without_msg(
        r#"{ "errores": [{ "param": "nombre" }, { "msg": "nombre requerido" }] }"#,
        ErrorBody::Validation(vec!["nombre requerido".to_owned()])
    )]
    #[case::validation_wins_over_message(
        r#"{ "errores": [], "message": "bad request" }"#,
        ErrorBody::Validation(Vec::new())
    )]
    #[case::message(r#"{ "message": "Usuario no encontrado" }"#, ErrorBody::Message("Usuario no encontrado".to_owned()))]
    #[case::blank_message(r#"{ "message": "  " }"#, ErrorBody::Unrecognised)]
    #[case::other_json(r#"{ "error": "boom" }"#, ErrorBody::Unrecognised)]
    #[case::html("<html><body>502</body></html>", ErrorBody::Unrecognised)]
    #[case::empty("", ErrorBody::Unrecognised)]
    fn classifies_error_bodies(#[case] body: &str, #[case] expected: ErrorBody) {
        assert_eq!(ErrorBody::classify(body.as_bytes()), expected);
    }
}
