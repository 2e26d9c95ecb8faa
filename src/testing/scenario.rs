//! Scenario descriptors
//!
//! The suite is an explicit ordered list. Scenarios that consume the story
//! id must appear after [`ScenarioKind::CreateStory`].

use crate::api::StoryInput;

pub const CREATED_MESSAGE: &str = "Successfully created!";
pub const EDITED_MESSAGE: &str = "Successfully edited";
pub const DELETED_MESSAGE: &str = "Deleted successfully!";
pub const EDIT_NOT_FOUND_MESSAGE: &str = "No spoilers...";
pub const DELETE_FAILED_MESSAGE: &str = "Unable to delete this story spoiler!";

/// Ids the API is known not to hold
pub const MISSING_EDIT_ID: &str = "666";
pub const MISSING_DELETE_ID: &str = "777";

/// What a scenario does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Create a story and capture its id
    CreateStory,
    /// Edit the captured story
    EditCreatedStory,
    /// List all stories
    ListStories,
    /// Delete the captured story
    DeleteCreatedStory,
    /// Create with blank required fields; must be rejected
    CreateBlankStory,
    /// Edit an id that does not exist
    EditMissingStory,
    /// Delete an id that does not exist
    DeleteMissingStory,
}

impl ScenarioKind {
    /// Whether the scenario reads the captured story id
    pub fn needs_story_id(self) -> bool {
        matches!(self, Self::EditCreatedStory | Self::DeleteCreatedStory)
    }

    /// Whether the scenario writes the captured story id
    pub fn captures_story_id(self) -> bool {
        matches!(self, Self::CreateStory)
    }
}

/// One ordered test case
#[derive(Debug, Clone)]
pub struct Scenario {
    pub order: u32,
    pub name: &'static str,
    pub kind: ScenarioKind,
}

/// The full suite in execution order
pub fn scenarios() -> Vec<Scenario> {
    use ScenarioKind::*;

    [
        ("create_story_with_required_fields", CreateStory),
        ("edit_created_story", EditCreatedStory),
        ("list_all_stories", ListStories),
        ("delete_created_story", DeleteCreatedStory),
        ("create_story_without_required_fields", CreateBlankStory),
        ("edit_non_existing_story", EditMissingStory),
        ("delete_non_existing_story", DeleteMissingStory),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, kind), order)| Scenario { order, name, kind })
    .collect()
}

/// Keep only the named scenarios, preserving declared order
///
/// An empty filter selects everything. Unknown names are returned as the
/// error value so the caller can report them.
pub fn select(all: Vec<Scenario>, only: &[String]) -> std::result::Result<Vec<Scenario>, Vec<String>> {
    if only.is_empty() {
        return Ok(all);
    }

    let unknown: Vec<String> = only
        .iter()
        .filter(|name| !all.iter().any(|s| s.name == name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(unknown);
    }

    Ok(all
        .into_iter()
        .filter(|s| only.iter().any(|name| name == s.name))
        .collect())
}

pub fn new_story() -> StoryInput {
    StoryInput::new("Story Name", "Description", "")
}

pub fn edited_story() -> StoryInput {
    StoryInput::new("Edited Story Name", "Edited Description", "")
}
