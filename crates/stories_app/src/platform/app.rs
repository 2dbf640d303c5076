use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use stories_core::{update, AppState, AppViewModel, Effect, Msg, SEARCH_KEY};
use stories_engine::{EngineHandle, HnSearchFetcher, SeedFetcher, StoryFetcher};
use stories_logging::{stories_debug, stories_info};

use super::effects::{EffectRunner, MsgSink};
use super::persistence::open_preferences;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;
use crate::config::{AppConfig, StorySource};

/// Everything the main loop reacts to, in delivery order.
#[derive(Debug)]
pub enum LoopEvent {
    Msg(Msg),
    Command(Command),
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    super::logging::initialize(config.log_destination, config.log_level);

    let preferences = open_preferences(config.store_path.clone());
    let search_term = preferences.get(SEARCH_KEY, &config.default_search);
    stories_info!("Starting with search term {:?} in {:?}", search_term, config.mode);

    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();
    let fetcher: Arc<dyn StoryFetcher> = match &config.source {
        StorySource::Seed { delay } => Arc::new(SeedFetcher::new(*delay)),
        StorySource::Remote(settings) => Arc::new(HnSearchFetcher::new(settings.clone())),
    };
    let engine = EngineHandle::new(fetcher, MsgSink::new(event_tx.clone()))
        .context("failed to start the fetch engine")?;

    let mut session = Session {
        state: AppState::with_search_term(config.mode, search_term),
        runner: EffectRunner::new(engine, preferences),
        out: io::stdout(),
        render_updates: !config.once,
    };

    let issued_fetch = session.dispatch(Msg::Started)?;

    if config.once {
        if issued_fetch {
            wait_for_first_result(&mut session, &event_rx)?;
        }
        session.print(&session.state.view())?;
        return Ok(());
    }

    session.print(&session.state.view())?;
    writeln!(session.out, "{HELP}")?;
    spawn_input_reader(event_tx);

    for event in event_rx {
        match event {
            LoopEvent::Msg(msg) => {
                session.dispatch(msg)?;
            }
            LoopEvent::Command(Command::Dispatch(msg)) => {
                session.dispatch(msg)?;
            }
            LoopEvent::Command(Command::Show) => session.print(&session.state.view())?,
            LoopEvent::Command(Command::Help) => writeln!(session.out, "{HELP}")?,
            LoopEvent::Command(Command::Invalid(reason)) => writeln!(session.out, "{reason}")?,
            LoopEvent::Command(Command::Quit) | LoopEvent::InputClosed => break,
        }
    }

    stories_info!("Shutting down");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    out: io::Stdout,
    render_updates: bool,
}

impl Session {
    /// Applies one message, runs its effects and re-renders if anything
    /// changed. Returns whether a fetch was issued.
    fn dispatch(&mut self, msg: Msg) -> io::Result<bool> {
        stories_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let issued_fetch = effects
            .iter()
            .any(|effect| matches!(effect, Effect::FetchStories { .. }));
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.runner.run(effects);

        if was_dirty && self.render_updates {
            self.print(&view)?;
        }
        Ok(issued_fetch)
    }

    fn print(&mut self, view: &AppViewModel) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out)?;
        for line in render(view) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

/// Applies engine messages until no fetch is outstanding. Only used in
/// `--once` mode, where nothing else can issue a new fetch.
fn wait_for_first_result(
    session: &mut Session,
    event_rx: &mpsc::Receiver<LoopEvent>,
) -> anyhow::Result<()> {
    while session.state.stories().is_loading() {
        match event_rx.recv() {
            Ok(LoopEvent::Msg(msg)) => {
                session.dispatch(msg)?;
            }
            Ok(_) => {}
            Err(_) => anyhow::bail!("fetch engine stopped before delivering a result"),
        }
    }
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => LoopEvent::Command(parse_command(&line)),
                Err(_) => break,
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(LoopEvent::InputClosed);
    });
}
