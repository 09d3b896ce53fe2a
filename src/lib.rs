//! Jobdeck: a Zellij plugin for browsing remote job listings.
//!
//! Jobdeck shows a catalog of job postings in a terminal pane and provides:
//! - Free-text search over titles, companies, categories and skills, with
//!   suggestions and a 300 ms debounce
//! - Facet filters for location, category, skills, benefits, salary band and
//!   work mode, plus verified-only and featured-only toggles
//! - Facet pickers whose options are derived from the catalog
//! - A registration form that gates the apply link for a job

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, input modes                      │
//! │  - Picker and registration modal                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │   │ Registration  │
//! │ (ui/)         │   │ (search/)     │   │ (registration)│
//! │ - Rendering   │   │ - Filtering   │   │ - Validation  │
//! │ - Theming     │   │ - Facets      │   │ - Apply link  │
//! │ - Components  │   │ - Debounce    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Domain & Infrastructure                   │
//! │  - Job model, salary parsing, criteria (domain/)    │
//! │  - Built-in and file catalogs (catalog/)            │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/jobdeck.wasm" {
//!         theme "catppuccin-mocha"
//!         catalog_file "~/jobs.json"
//!         apply_base_url "https://apply.remoteok.io"
//!         debounce_ms "300"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use jobdeck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.jobs().len(), 20);
//!
//! for event in [Event::ToggleVerified, Event::KeyDown] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.jobs().iter().all(|job| job.verified()));
//! # Ok::<(), jobdeck::JobdeckError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod registration;
pub mod search;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use catalog::Catalog;
pub use domain::{CriteriaUpdate, Job, JobdeckError, Result, SearchCriteria, WorkMode};
pub use search::{SearchController, SearchResult};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Debounce used when `debounce_ms` is absent or invalid.
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_DEBOUNCE_MS: u64 = search::DEFAULT_DEBOUNCE.as_millis() as u64;

/// Plugin configuration from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/jobdeck.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     catalog_file "~/jobs.json"
///     apply_base_url "https://jobs.example.com"
///     debounce_ms "250"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `jobdeck=trace`.
    pub trace_level: Option<String>,

    /// JSON catalog replacing the built-in one. `~` maps to `/host`.
    pub catalog_file: Option<String>,

    pub apply_base_url: String,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            catalog_file: None,
            apply_base_url: registration::DEFAULT_APPLY_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Unknown keys are ignored. Invalid `debounce_ms` or `apply_base_url`
    /// values are logged and replaced by their defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jobdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let debounce_ms = non_empty("debounce_ms").map_or(DEFAULT_DEBOUNCE_MS, |raw| {
            parse_debounce_ms(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default debounce");
                DEFAULT_DEBOUNCE_MS
            })
        });

        let apply_base_url = non_empty("apply_base_url").map_or_else(
            || registration::DEFAULT_APPLY_BASE_URL.to_string(),
            |raw| {
                parse_base_url(&raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "using default apply base url");
                    registration::DEFAULT_APPLY_BASE_URL.to_string()
                })
            },
        );

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            catalog_file: non_empty("catalog_file"),
            apply_base_url,
            debounce_ms,
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_debounce_ms(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|e| JobdeckError::Config(format!("debounce_ms {raw:?}: {e}")))
}

fn parse_base_url(raw: &str) -> Result<String> {
    if raw.starts_with("https://") || raw.starts_with("http://") {
        Ok(raw.to_string())
    } else {
        Err(JobdeckError::Config(format!(
            "apply_base_url {raw:?} must start with http:// or https://"
        )))
    }
}

/// Builds the initial state from `config`.
///
/// A theme or catalog that fails to load is logged and replaced by the
/// built-in default, so the plugin always starts.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = load_theme(config);
    let catalog = load_catalog(config);
    tracing::debug!(theme = %theme.name, jobs = catalog.len(), "initializing jobdeck");

    AppState::new(catalog, theme)
        .with_apply_base_url(config.apply_base_url.clone())
        .with_debounce(config.debounce())
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_catalog(config: &Config) -> Catalog {
    let Some(catalog_file) = &config.catalog_file else {
        return Catalog::builtin();
    };

    let path = infrastructure::expand_tilde(catalog_file);
    match catalog::json::load(&path) {
        Ok(catalog) => {
            tracing::info!(
                path = %infrastructure::strip_host_prefix(&path),
                jobs = catalog.len(),
                "loaded catalog"
            );
            catalog
        }
        Err(e) => {
            tracing::warn!(path = %catalog_file, error = %e, "failed to load catalog, using built-in");
            Catalog::builtin()
        }
    }
}
