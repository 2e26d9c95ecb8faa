//! Story Spoiler wire types
//!
//! Field names follow the API's JSON exactly, which mixes PascalCase request
//! bodies with camelCase responses.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/User/Authentication`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of a successful authentication
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

/// Body of create and edit requests
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoryInput {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Url")]
    pub url: String,
}

impl StoryInput {
    pub fn new(title: &str, description: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }

    /// A story with every required field left blank
    pub fn blank() -> Self {
        Self::new("", "", "")
    }
}

/// Message envelope returned by create, edit and delete
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ApiResponse {
    /// Human-readable result; the live API calls this `msg`
    #[serde(default, alias = "msg")]
    pub message: String,

    #[serde(rename = "storyId", default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<String>,
}
