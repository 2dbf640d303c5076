use crate::{StoriesStatus, StoryId, StoryRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub status: StoriesStatus,
    pub is_loading: bool,
    pub is_error: bool,
    /// Stories to display, already narrowed in local filter mode.
    pub stories: Vec<StoryRowView>,
    /// Size of the held collection before any local filtering.
    pub total_stories: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub object_id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    pub points: u64,
}

impl From<&StoryRecord> for StoryRowView {
    fn from(story: &StoryRecord) -> Self {
        Self {
            object_id: story.object_id.clone(),
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            num_comments: story.num_comments,
            points: story.points,
        }
    }
}
