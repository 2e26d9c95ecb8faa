//! HTTP client for the Story Spoiler API
//!
//! Authentication produces a [`Session`]; every later request goes through a
//! [`StoryClient`] that attaches the session token as a bearer credential.
//! Client calls return the raw status and body so callers can assert on the
//! status before deciding how to decode.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::common::config::Settings;
use crate::common::{join_url, Error, Result};

use super::types::{ApiResponse, AuthResponse, Credentials, StoryInput};

const AUTH_PATH: &str = "/api/User/Authentication";
const CREATE_PATH: &str = "/api/Story/Create";
const ALL_PATH: &str = "/api/Story/All";

/// Authenticated context reused across requests
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: String,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::from)
    }

    /// Decode the body as the create/edit/delete message envelope
    pub fn message(&self) -> Result<ApiResponse> {
        self.json()
    }

    /// Decode the body as a JSON array without interpreting its elements
    pub fn items(&self) -> Result<Vec<serde_json::Value>> {
        self.json()
    }
}

fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("story-spoiler-suite/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::from)
}

/// Log in and return a session carrying the access token
///
/// Any non-200 status or a missing/blank token is an error; the caller
/// treats both as fatal for the run.
pub async fn authenticate(settings: &Settings) -> Result<Session> {
    let http = http_client(settings.request_timeout)?;
    let url = join_url(&settings.base_url, AUTH_PATH);
    tracing::debug!(url = %url, username = %settings.username, "authenticating");

    let response = http
        .post(&url)
        .json(&Credentials {
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if status != StatusCode::OK {
        return Err(Error::authentication(status.as_u16(), &body));
    }

    let auth: AuthResponse = serde_json::from_str(&body)?;
    let token = auth
        .access_token
        .filter(|t| !t.trim().is_empty())
        .ok_or(Error::MissingToken)?;

    tracing::info!(base_url = %settings.base_url, "authenticated");
    Ok(Session {
        base_url: settings.base_url.trim_end_matches('/').to_string(),
        token,
    })
}

/// Bearer-authenticated client for the story endpoints
pub struct StoryClient {
    http: reqwest::Client,
    session: Session,
}

impl StoryClient {
    pub fn new(session: Session, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.session.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiReply> {
        let response = request.bearer_auth(&self.session.token).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), body = %body, "response");
        Ok(ApiReply { status, body })
    }

    /// `POST /api/Story/Create`
    pub async fn create(&self, story: &StoryInput) -> Result<ApiReply> {
        let url = self.url(CREATE_PATH);
        tracing::debug!(url = %url, "POST");
        self.execute(self.http.post(url).json(story)).await
    }

    /// `PUT /api/Story/Edit/{id}`
    pub async fn edit(&self, id: &str, story: &StoryInput) -> Result<ApiReply> {
        let url = self.url(&format!("/api/Story/Edit/{}", id));
        tracing::debug!(url = %url, "PUT");
        self.execute(self.http.put(url).json(story)).await
    }

    /// `GET /api/Story/All`
    pub async fn list(&self) -> Result<ApiReply> {
        let url = self.url(ALL_PATH);
        tracing::debug!(url = %url, "GET");
        self.execute(self.http.get(url)).await
    }

    /// `DELETE /api/Story/Delete/{id}`
    pub async fn delete(&self, id: &str) -> Result<ApiReply> {
        let url = self.url(&format!("/api/Story/Delete/{}", id));
        tracing::debug!(url = %url, "DELETE");
        self.execute(self.http.delete(url)).await
    }
}
