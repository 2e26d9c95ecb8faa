//! Story Spoiler API client
//!
//! Thin typed wrapper over the remote REST API under test.

pub mod client;
pub mod types;

pub use client::{authenticate, ApiReply, Session, StoryClient};
pub use types::{ApiResponse, Credentials, StoryInput};
