//! search-screen: state management for a browser's search screen.
//!
//! The crate coordinates three pieces around a single immutable state value:
//! - a **store** holding the current [`SearchState`] and notifying subscribers
//! - a **controller** turning gestures into actions and side effects
//! - an **interactor** the toolbar and suggestion views call into
//!
//! Rendering, suggestion fetching and the engine registry stay with the host.
//! The crate only reaches them through the collaborator traits in
//! [`navigation`], [`metrics`] and [`settings`].

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Views (host)                                       │  ← toolbar, awesome bar
//! └─────────────────────────────────────────────────────┘
//!                        │  on_* gestures
//! ┌─────────────────────────────────────────────────────┐
//! │  Search Layer (search/)                             │
//! │  - SearchInteractor (forwarding only)               │
//! │  - DefaultSearchController (business logic)         │
//! │  - SearchStore + reduce (state)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Navigation    │   │ Metrics       │   │ Settings      │
//! │ (navigation/) │   │ (metrics/)    │   │ (settings/)   │
//! │ - Browser     │   │ - Events      │   │ - JSON file   │
//! │ - Nav stack   │   │ - JSONL sink  │   │ - In memory   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, rotating writer (infrastructure/)         │
//! │  - Engines, sessions, errors (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a JSON-lines file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Hosts either hand over a string map (see [`Config::from_map`]) or a TOML
//! file:
//!
//! ```toml
//! data_dir = "~/.local/share/search-screen"
//! trace_level = "debug"
//! metrics_enabled = true
//! ```
//!
//! # Wiring
//!
//! 1. [`initialize`] opens the settings file, picks the metrics sink and
//!    starts tracing when a level is configured.
//! 2. Each time the search screen opens, [`SearchComponents::open_screen`]
//!    seeds a fresh store and returns it with an interactor bound to the
//!    host's browser and navigation stack.
//! 3. Views subscribe to the store and call the interactor.

pub mod domain;
pub mod infrastructure;
pub mod metrics;
pub mod navigation;
pub mod observability;
pub mod search;
pub mod settings;

pub use domain::{is_url, Result, SearchEngine, SearchEngineSource, SearchScreenError, Session, SessionId};
pub use metrics::{JsonLinesMetrics, MetricEvent, MetricsRecorder, NoopMetrics};
pub use navigation::{BrowserDirection, BrowserNavigation, LoadRequest, NavController, NavDestination};
pub use search::{
    reduce, AwesomeBarInteractor, BrowsingMode, DefaultSearchController, SearchAccessPoint, SearchAction,
    SearchController, SearchInteractor, SearchSeed, SearchState, SearchStore, SubscriptionId, ToolbarInteractor,
};
pub use settings::{JsonSettings, MemorySettings, SearchSettings};

use infrastructure::paths::{METRICS_FILE_NAME, SETTINGS_FILE_NAME, TRACE_FILE_NAME};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Host configuration.
///
/// Every path is optional; unset paths resolve under the data directory,
/// which itself defaults to [`infrastructure::get_data_dir`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding settings, metrics and traces.
    pub data_dir: Option<PathBuf>,

    /// Settings file. Default: `<data_dir>/settings.json`
    pub settings_file: Option<PathBuf>,

    /// Metrics file. Default: `<data_dir>/metrics.jsonl`
    pub metrics_file: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `search_screen=trace`.
    ///
    /// Tracing stays off when unset. `RUST_LOG` overrides it when present.
    pub trace_level: Option<String>,

    /// Write metric events to `metrics_file`. Default: `true`
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            settings_file: None,
            metrics_file: None,
            trace_level: None,
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Builds a configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`, `settings_file`, `metrics_file`: paths, `~` expanded,
    ///   blank values ignored
    /// - `trace_level`: kept verbatim when non-blank
    /// - `metrics_enabled`: `true`/`false`/`1`/`0`/`yes`/`no`, anything else
    ///   keeps the default
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use search_screen::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/search".to_string());
    /// map.insert("metrics_enabled".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.settings_path(), std::path::Path::new("/tmp/search/settings.json"));
    /// assert!(!config.metrics_enabled);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        let path = |key: &str| text(key).map(|s| PathBuf::from(infrastructure::expand_tilde(&s)));

        let metrics_enabled = text("metrics_enabled")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(true);

        Self {
            data_dir: path("data_dir"),
            settings_file: path("settings_file"),
            metrics_file: path("metrics_file"),
            trace_level: text("trace_level"),
            metrics_enabled,
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchScreenError::Config`] on malformed TOML, wrong value
    /// types or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| SearchScreenError::Config(e.to_string()))?;
        config.expand_paths();
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchScreenError::Io`] if the file cannot be read and
    /// [`SearchScreenError::Config`] if it does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            SearchScreenError::Config(msg) => {
                SearchScreenError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    fn expand_paths(&mut self) {
        for path in [&mut self.data_dir, &mut self.settings_file, &mut self.metrics_file]
            .into_iter()
            .flatten()
        {
            if let Some(raw) = path.to_str() {
                *path = PathBuf::from(infrastructure::expand_tilde(raw));
            }
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(infrastructure::get_data_dir)
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(SETTINGS_FILE_NAME))
    }

    #[must_use]
    pub fn metrics_path(&self) -> PathBuf {
        self.metrics_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(METRICS_FILE_NAME))
    }

    #[must_use]
    pub fn trace_path(&self) -> PathBuf {
        self.data_dir().join(TRACE_FILE_NAME)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Long-lived collaborators shared by every search screen the host opens.
pub struct SearchComponents {
    pub settings: Rc<JsonSettings>,
    pub metrics: Rc<dyn MetricsRecorder>,
}

impl SearchComponents {
    /// Seeds a new store for one search screen and binds an interactor to it.
    ///
    /// The returned store is the one views subscribe to.
    pub fn open_screen(
        &self,
        seed: SearchSeed,
        browser: Rc<dyn BrowserNavigation>,
        nav: Rc<dyn NavController>,
    ) -> (Rc<SearchStore>, SearchInteractor) {
        let settings: Rc<dyn SearchSettings> = self.settings.clone();
        let store = Rc::new(SearchStore::new(SearchState::seed(seed, settings.as_ref())));

        let controller = DefaultSearchController::new(
            Rc::clone(&store),
            browser,
            nav,
            Rc::clone(&self.metrics),
            settings,
        );

        (store, SearchInteractor::new(Box::new(controller)))
    }
}

impl std::fmt::Debug for SearchComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchComponents")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Builds the shared collaborators from configuration.
///
/// # Side Effects
///
/// - Initializes the tracing subscriber when `trace_level` is set
/// - Creates the settings file's parent directory
///
/// # Errors
///
/// Returns an error if the settings file cannot be opened or parsed.
pub fn initialize(config: &Config) -> Result<SearchComponents> {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }
    tracing::debug!(data_dir = ?config.data_dir(), "initializing search screen");

    let settings = Rc::new(JsonSettings::new(config.settings_path())?);

    let metrics: Rc<dyn MetricsRecorder> = if config.metrics_enabled {
        Rc::new(JsonLinesMetrics::new(config.metrics_path()))
    } else {
        Rc::new(NoopMetrics)
    };

    Ok(SearchComponents { settings, metrics })
}
