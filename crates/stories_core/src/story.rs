use std::fmt;

/// Identifier of a story, stable for the lifetime of the record.
///
/// The seed list uses small integers and the search endpoint uses strings;
/// both end up here in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub object_id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    pub points: u64,
}
