//! Search and filtering over the job catalog.
//!
//! # Modules
//!
//! - [`engine`]: Multi-facet filter producing a [`SearchResult`]
//! - [`options`]: Distinct facet values, salary bands and option counts
//! - [`controller`]: Criteria holder that recomputes results on change
//! - [`suggest`]: Search-as-you-type suggestions
//! - [`debounce`]: Trailing-edge debounce for typed queries
//!
//! # Data Flow
//!
//! ```text
//! keystroke → Debouncer → SearchController::set_query → search(catalog, criteria)
//!                      └→ suggestions(query, catalog)
//! ```

pub mod controller;
pub mod debounce;
pub mod engine;
pub mod options;
pub mod suggest;

pub use controller::SearchController;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use engine::{search, SearchResult};
pub use options::{derive_options, option_count, Facet, FilterOptions, SalaryBand, SALARY_BANDS};
pub use suggest::suggestions;
