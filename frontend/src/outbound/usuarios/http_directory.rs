//! Reqwest-backed usuarios directory adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use super::dto::{ErrorBody, NuevoUsuarioDto, UsuarioDto, decode_roster};
use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{User, UserDraft, UserId};

const DEFAULT_USER_AGENT: &str = "roster-console/0.1";

/// User directory adapter talking to one `/usuarios` collection URL.
pub struct UsuariosHttpDirectory {
    client: Client,
    collection: Url,
}

impl UsuariosHttpDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let directory = UsuariosHttpDirectory::new(collection, Duration::from_secs(30));
    /// assert!(directory.is_ok() || directory.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(collection: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, collection })
    }

    /// Collection URL requests are sent to.
    #[must_use]
    pub fn collection(&self) -> &Url {
        &self.collection
    }

    fn member_url(&self, id: &UserId) -> Result<Url, UserDirectoryError> {
        member_url(&self.collection, id)
    }
}

#[async_trait]
impl UserDirectory for UsuariosHttpDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        debug!(url = %self.collection, "listing users");
        let response = self
            .client
            .get(self.collection.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = successful_body(response).await?;
        decode_roster(body.as_ref()).map_err(UserDirectoryError::decode)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError> {
        debug!(url = %self.collection, "creating user");
        let response = self
            .client
            .post(self.collection.clone())
            .json(&NuevoUsuarioDto::from(draft))
            .send()
            .await
            .map_err(map_transport_error)?;
        successful_body(response).await.map(drop)
    }

    async fn update_user(&self, user: &User) -> Result<(), UserDirectoryError> {
        let url = self.member_url(user.id())?;
        debug!(url = %url, "updating user");
        let response = self
            .client
            .put(url)
            .json(&UsuarioDto::from(user))
            .send()
            .await
            .map_err(map_transport_error)?;
        successful_body(response).await.map(drop)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        let url = self.member_url(id)?;
        debug!(url = %url, "deleting user");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        successful_body(response).await.map(drop)
    }
}

/// Read the body, turning non-2xx statuses into classified errors.
async fn successful_body(response: Response) -> Result<Vec<u8>, UserDirectoryError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn member_url(collection: &Url, id: &UserId) -> Result<Url, UserDirectoryError> {
    let mut url = collection.clone();
    url.path_segments_mut()
        .map_err(|()| {
            UserDirectoryError::transport(format!(
                "collection URL {collection} cannot carry a record id"
            ))
        })?
        .pop_if_empty()
        .push(id.as_ref());
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectoryError {
    match ErrorBody::classify(body) {
        ErrorBody::Validation(issues) => UserDirectoryError::rejected(issues),
        ErrorBody::Message(message) => UserDirectoryError::failed(status.as_u16(), message),
        ErrorBody::Unrecognised => match status {
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                UserDirectoryError::timeout(format!("status {}", status.as_u16()))
            }
            _ => UserDirectoryError::unexpected_response(status.as_u16(), body_preview(body)),
        },
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
