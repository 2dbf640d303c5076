use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use stories_core::{FetchTrigger, FilterMode, SearchMode, StaleResults};
use stories_engine::{FetchSettings, DEFAULT_SEARCH_ENDPOINT};

use crate::config::{AppConfig, StorySource, DEFAULT_SEARCH};
use crate::platform::logging::LogDestination;
use crate::platform::DEFAULT_STORE_FILENAME;

#[derive(Debug, Parser)]
#[command(name = "hacker-stories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search Hacker News stories from the terminal", long_about = None)]
pub struct Args {
    /// Where stories come from
    #[arg(long, value_enum, default_value_t = SourceArg::Remote)]
    source: SourceArg,

    /// When a changed search term is sent to the remote source
    #[arg(long, value_enum, default_value_t = TriggerArg::Change)]
    trigger: TriggerArg,

    /// Search term used until one has been persisted
    #[arg(long, default_value = DEFAULT_SEARCH)]
    default_search: String,

    /// Preference file holding the last search term
    #[arg(long, default_value = DEFAULT_STORE_FILENAME)]
    store: PathBuf,

    /// Keep preferences in memory only
    #[arg(long, conflicts_with = "store")]
    no_store: bool,

    /// Simulated latency of the seed source, in milliseconds
    #[arg(long, default_value_t = 0)]
    seed_delay_ms: u64,

    /// Search endpoint of the remote source
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    endpoint: String,

    /// Give up on a remote request after this many milliseconds
    #[arg(long)]
    request_timeout_ms: Option<u64>,

    /// Ignore results of requests that were superseded by a newer one
    #[arg(long)]
    discard_stale: bool,

    /// Print the first result and exit
    #[arg(long)]
    once: bool,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    log: LogArg,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Seed,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TriggerArg {
    Change,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogArg {
    File,
    Terminal,
    Both,
}

impl Args {
    pub fn into_config(self) -> AppConfig {
        let (source, filter) = match self.source {
            SourceArg::Seed => (
                StorySource::Seed {
                    delay: Duration::from_millis(self.seed_delay_ms),
                },
                FilterMode::Local,
            ),
            SourceArg::Remote => (
                StorySource::Remote(FetchSettings {
                    endpoint: self.endpoint,
                    request_timeout: self.request_timeout_ms.map(Duration::from_millis),
                    ..FetchSettings::default()
                }),
                FilterMode::Remote,
            ),
        };

        let mode = SearchMode {
            filter,
            trigger: match self.trigger {
                TriggerArg::Change => FetchTrigger::OnChange,
                TriggerArg::Submit => FetchTrigger::OnSubmit,
            },
            stale_results: if self.discard_stale {
                StaleResults::Discard
            } else {
                StaleResults::Apply
            },
        };

        AppConfig {
            source,
            mode,
            default_search: self.default_search,
            store_path: (!self.no_store).then_some(self.store),
            once: self.once,
            log_destination: match self.log {
                LogArg::File => LogDestination::File,
                LogArg::Terminal => LogDestination::Terminal,
                LogArg::Both => LogDestination::Both,
            },
            log_level: if self.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let argv = std::iter::once("hacker-stories").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn defaults_search_remotely_and_live() {
        let config = parse(&[]);
        assert!(matches!(config.source, StorySource::Remote(ref s) if s.endpoint == DEFAULT_SEARCH_ENDPOINT));
        assert_eq!(config.mode, SearchMode::default());
        assert_eq!(config.default_search, "react");
        assert_eq!(config.store_path, Some(PathBuf::from(DEFAULT_STORE_FILENAME)));
        assert!(!config.once);
    }

    #[test]
    fn seed_source_filters_locally() {
        let config = parse(&["--source", "seed", "--seed-delay-ms", "2000"]);
        assert!(matches!(
            config.source,
            StorySource::Seed { delay } if delay == Duration::from_secs(2)
        ));
        assert_eq!(config.mode.filter, FilterMode::Local);
    }

    #[test]
    fn remote_flags_reach_fetch_settings() {
        let config = parse(&[
            "--trigger",
            "submit",
            "--discard-stale",
            "--request-timeout-ms",
            "1500",
            "--endpoint",
            "http://localhost:8080/search",
        ]);
        assert_eq!(config.mode.trigger, FetchTrigger::OnSubmit);
        assert_eq!(config.mode.stale_results, StaleResults::Discard);
        match config.source {
            StorySource::Remote(settings) => {
                assert_eq!(settings.endpoint, "http://localhost:8080/search");
                assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn no_store_keeps_preferences_in_memory() {
        let config = parse(&["--no-store"]);
        assert_eq!(config.store_path, None);
    }
}
