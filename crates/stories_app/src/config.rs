use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use stories_core::SearchMode;
use stories_engine::FetchSettings;

use crate::platform::logging::LogDestination;

pub const DEFAULT_SEARCH: &str = "react";

/// Where stories come from.
#[derive(Debug, Clone)]
pub enum StorySource {
    /// The built-in list, served after `delay`.
    Seed { delay: Duration },
    /// A Hacker News style search endpoint.
    Remote(FetchSettings),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: StorySource,
    pub mode: SearchMode,
    /// Used when the durable store has no search term yet.
    pub default_search: String,
    /// Preference file; `None` keeps preferences in memory.
    pub store_path: Option<PathBuf>,
    /// Print the first result and exit instead of reading commands.
    pub once: bool,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}
