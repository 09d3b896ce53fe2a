//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! View models carry display-ready strings; components only position and
//! color them.
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Layout selection
//! - [`components`]: Header, table, picker, modal and other widgets
//! - [`helpers`]: Cursor, truncation and highlight utilities
//! - [`theme`]: Color schemes and ANSI escapes
//!
//! ```no_run
//! use jobdeck::catalog::Catalog;
//! use jobdeck::{AppState, Theme};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default());
//! jobdeck::ui::render(&state, 24, 120);
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FieldView, FilterBarInfo, FooterInfo, HeaderInfo, JobDetail,
    ModalView, PickerItem, PickerView, SearchBarInfo, SuggestionItem, UIViewModel,
};
