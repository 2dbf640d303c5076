use std::sync::{mpsc, Arc};

use stories_core::{Effect, Msg, PreferenceStore, StoryId, StoryRecord, SEARCH_KEY};
use stories_engine::{EngineEvent, EngineHandle, EventSink, Story};
use stories_logging::{stories_debug, stories_info};

use super::app::LoopEvent;
use super::persistence::PreferenceBackend;

/// Executes effects returned by `update`.
pub struct EffectRunner {
    engine: EngineHandle,
    preferences: PreferenceStore<PreferenceBackend>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, preferences: PreferenceStore<PreferenceBackend>) -> Self {
        Self {
            engine,
            preferences,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistSearchTerm(term) => {
                    stories_debug!("Persisting search term {:?}", term);
                    self.preferences.set(SEARCH_KEY, &term);
                }
                Effect::FetchStories { request_id, query } => {
                    stories_info!("FetchStories request_id={} query={:?}", request_id, query);
                    self.engine.fetch(request_id, query);
                }
            }
        }
    }
}

/// Feeds engine completions back into the main loop as messages.
pub struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<LoopEvent>) -> Arc<Self> {
        Arc::new(Self { tx })
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            result: Ok(stories),
        } => Msg::StoriesFetched {
            request_id,
            stories: stories.into_iter().map(map_story).collect(),
        },
        EngineEvent::FetchCompleted {
            request_id,
            result: Err(err),
        } => Msg::StoriesFetchFailed {
            request_id,
            reason: err.to_string(),
        },
    }
}

fn map_story(story: Story) -> StoryRecord {
    StoryRecord {
        object_id: StoryId::new(story.object_id),
        title: story.title,
        url: story.url,
        author: story.author,
        num_comments: story.num_comments,
        points: story.points,
    }
}
