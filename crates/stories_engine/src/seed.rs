use std::time::Duration;

use stories_logging::stories_debug;

use crate::{FetchError, Story, StoryFetcher};

/// The built-in story list used when no remote source is configured.
pub fn seed_stories() -> Vec<Story> {
    vec![
        seed(0, "React", "https://reactjs.org/", "Jordan Walke", 3, 4),
        seed(1, "Redux", "https://redux.js.org/", "Dan Abramov, Andrew Clark", 2, 5),
        seed(2, "Vue", "https://vuejs.org/", "Evan You", 2, 5),
        seed(3, "Angular", "https://angular.io/", "Google", 2, 5),
    ]
}

fn seed(id: u64, title: &str, url: &str, author: &str, num_comments: u64, points: u64) -> Story {
    Story {
        object_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        author: author.to_string(),
        num_comments,
        points,
    }
}

/// Serves [`seed_stories`] after a simulated network delay.
///
/// The query is ignored; callers filter the full list themselves.
#[derive(Debug, Clone, Default)]
pub struct SeedFetcher {
    delay: Duration,
}

impl SeedFetcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl StoryFetcher for SeedFetcher {
    async fn fetch_stories(&self, query: Option<&str>) -> Result<Vec<Story>, FetchError> {
        stories_debug!("Serving seed stories (query {:?} ignored)", query);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(seed_stories())
    }
}
