//! tickoff: a personal task tracker core.
//!
//! tickoff keeps a list of short todo items and everything derived from it:
//! - An observable in-memory store with add, toggle, edit, delete and clear
//! - `All` / `Active` / `Completed` filtered views
//! - Productivity statistics with a weekly activity series
//! - A swipe-to-delete gesture state machine with haptic feedback
//! - Render-ready view models for the home, list and analytics screens

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (main.rs, or any UI shell)                    │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store         │   │ Views &       │   │ Gesture       │
//! │ (store/)      │   │ Analytics     │   │ (gesture/)    │
//! │ - Collection  │   │ - Filters     │   │ - Swipe FSM   │
//! │ - Clock       │   │ - Statistics  │   │ - Haptics     │
//! │ - Listeners   │   │ - Activity    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Error types (domain/error)                       │
//! │  - Todo model (domain/todo)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, stderr or rotating file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`store`]: The todo collection and its clock
//! - [`views`]: Filtered projections of the collection
//! - [`analytics`]: Statistics and the weekly activity series
//! - [`gesture`]: Swipe-to-delete state machine and haptics
//! - [`ui`]: View models for the three screens
//! - [`domain`]: Core domain types (Todo, errors)
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "tickoff.log"
//! seed_welcome_todos = false
//! haptic_duration_ms = 50
//! activity_source = "recorded"
//!
//! [swipe]
//! arm_threshold = 60.0
//! max_offset = 100.0
//! ```
//!
//! Every key is optional. A host that only has string key/value pairs can use
//! [`Config::from_map`] instead.
//!
//! # Examples
//!
//! ```rust
//! use tickoff::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     seed_welcome_todos: false,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::AddTodo { text: "Water plants".into() });
//! let id = state.store.todos()[0].id;
//!
//! handle_event(&mut state, &Event::TouchStart { id, x: 200.0 });
//! let (_, actions) = handle_event(&mut state, &Event::TouchMove { id, x: 120.0 });
//! assert_eq!(actions, vec![Action::Haptic { duration_ms: 50 }]);
//!
//! handle_event(&mut state, &Event::TouchEnd { id });
//! assert!(state.store.is_empty());
//! ```

pub mod analytics;
pub mod app;
pub mod domain;
pub mod gesture;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;
pub mod views;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, TickoffError, Todo, TodoId};
pub use views::FilterMode;

use analytics::{ActivityLog, FixedActivityLog, RecordingActivityLog};
use gesture::{SwipeConfig, DEFAULT_PULSE_MS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use store::{Clock, SystemClock, TodoStore};

/// Where the weekly activity series comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySource {
    /// A constant demo series.
    #[default]
    Fixed,
    /// Adds and completions recorded while the app runs.
    Recorded,
}

impl std::str::FromStr for ActivitySource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "recorded" => Ok(Self::Recorded),
            other => Err(format!("unknown activity source: {other}")),
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```rust
/// use tickoff::Config;
///
/// let config = Config::from_toml_str("haptic_duration_ms = 30")?;
/// assert_eq!(config.haptic_duration_ms, 30);
/// assert!(config.seed_welcome_todos);
/// # Ok::<(), tickoff::TickoffError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `RUST_LOG`
    /// style directive. `RUST_LOG` wins when set. Default: `"info"`
    pub log_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    ///
    /// `~` is expanded; relative paths are placed under the data directory.
    pub log_file: Option<PathBuf>,

    /// Whether a new store starts with the onboarding todos. Default: `true`
    pub seed_welcome_todos: bool,

    /// Length of the pulse when a swipe arms. Default: 50
    pub haptic_duration_ms: u32,

    /// Source of the weekly activity series. Default: `fixed`
    pub activity_source: ActivitySource,

    /// Swipe-to-delete distances.
    pub swipe: SwipeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: None,
            seed_welcome_todos: true,
            haptic_duration_ms: DEFAULT_PULSE_MS,
            activity_source: ActivitySource::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Each key is parsed on its own and falls back to its default when missing
    /// or malformed; this never fails. Swipe distances that parse but do not
    /// validate together are replaced by the defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `log_level`, `log_file`: taken as-is when non-empty
    /// - `seed_welcome_todos`: `1`/`y`/`yes`/`on`/`true` or `0`/`n`/`no`/`off`/`false`
    /// - `haptic_duration_ms`: `u32`
    /// - `activity_source`: `fixed` or `recorded`
    /// - `swipe_arm_threshold`, `swipe_max_offset`: `f64`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tickoff::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("haptic_duration_ms".to_string(), "80".to_string());
    /// map.insert("swipe_max_offset".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.haptic_duration_ms, 80);
    /// assert!((config.swipe.max_offset - 100.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        let swipe = SwipeConfig {
            arm_threshold: text("swipe_arm_threshold")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.swipe.arm_threshold),
            max_offset: text("swipe_max_offset")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.swipe.max_offset),
        };
        let swipe = match swipe.validate() {
            Ok(()) => swipe,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring swipe settings");
                defaults.swipe
            }
        };

        Self {
            log_level: text("log_level").map(String::from),
            log_file: text("log_file").map(PathBuf::from),
            seed_welcome_todos: text("seed_welcome_todos")
                .and_then(parse_bool)
                .unwrap_or(defaults.seed_welcome_todos),
            haptic_duration_ms: text("haptic_duration_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.haptic_duration_ms),
            activity_source: text("activity_source")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.activity_source),
            swipe,
        }
    }

    /// Parses and validates TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TickoffError::Config`] for malformed TOML, unknown keys, or
    /// values that fail [`Config::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`TickoffError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let path = infrastructure::expand_tilde(path);
        let text = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense together.
    ///
    /// # Errors
    ///
    /// Returns [`TickoffError::Config`] for an unparsable `log_level` or
    /// invalid swipe distances.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            tracing_subscriber::EnvFilter::try_new(level)
                .map_err(|e| TickoffError::Config(format!("invalid log_level {level:?}: {e}")))?;
        }
        self.swipe.validate()
    }

    /// Resolved log file location, if logging to a file.
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .map(infrastructure::resolve_in_data_dir)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "on" | "true" => Some(true),
        "0" | "n" | "no" | "off" | "false" => Some(false),
        _ => None,
    }
}

/// Creates application state from configuration, using the system clock.
///
/// # Example
///
/// ```rust
/// use tickoff::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.store.len(), 3);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    initialize_with_clock(config, Arc::new(SystemClock))
}

/// Creates application state from configuration with an injected clock.
///
/// Seeds the onboarding todos when enabled, selects the activity source and
/// applies the swipe and haptic settings.
#[must_use]
pub fn initialize_with_clock(config: &Config, clock: Arc<dyn Clock>) -> AppState {
    tracing::debug!(
        seed_welcome_todos = config.seed_welcome_todos,
        activity_source = ?config.activity_source,
        "initializing tickoff"
    );

    let seeds = if config.seed_welcome_todos {
        domain::welcome_todos(clock.now())
    } else {
        vec![]
    };
    let activity: Box<dyn ActivityLog> = match config.activity_source {
        ActivitySource::Fixed => Box::new(FixedActivityLog),
        ActivitySource::Recorded => Box::new(RecordingActivityLog::new()),
    };

    AppState::new(TodoStore::with_todos(clock, seeds), activity)
        .with_swipe_config(config.swipe)
        .with_haptic_duration(config.haptic_duration_ms)
}
