//! State passed between scenarios of one run

use crate::common::{Error, Result};

/// The story id captured by the create scenario
#[derive(Debug, Default)]
pub struct SharedState {
    story_id: Option<String>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the created story id; blank ids are rejected
    pub fn set_story_id(&mut self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::TestAssertion(
                "Expected a non-empty storyId".to_string(),
            ));
        }
        self.story_id = Some(id.to_string());
        Ok(())
    }

    /// The captured id, or [`Error::MissingStoryId`] if creation has not succeeded
    pub fn story_id(&self) -> Result<&str> {
        self.story_id.as_deref().ok_or(Error::MissingStoryId)
    }
}
