use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use stories_logging::{stories_debug, stories_error};

use crate::{EngineEvent, RequestId, StoryFetcher};

/// Receives engine events on whatever thread the engine completes work on.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        query: Option<String>,
    },
}

/// Runs fetches on a background tokio runtime.
///
/// Every fetch is its own task, so completions reach the sink in the order
/// they finish, not the order they were issued. Nothing is ever cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn StoryFetcher>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("stories-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                    });
                }
                stories_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, query: Option<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, query })
            .is_err()
        {
            stories_error!("Engine thread is gone; request {} dropped", request_id);
        }
    }
}

async fn handle_command(fetcher: &dyn StoryFetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            let result = fetcher.fetch_stories(query.as_deref()).await;
            sink.emit(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
