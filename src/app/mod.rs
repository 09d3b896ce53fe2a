//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the catalog/search/registration
//! layers. Data flows one way:
//!
//! ```text
//! Key/Timer → Event → handle_event → AppState mutations → Actions → Zellij calls
//!                                        │
//!                                        └→ compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and mode transitions
//! - [`modes`]: Input mode state machine types
//! - [`picker`]: Facet picker with fuzzy narrowing
//! - [`modal`]: Registration modal lifecycle
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modal;
pub mod modes;
pub mod picker;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modal::RegistrationModal;
pub use modes::{InputMode, SearchFocus};
pub use picker::{PickerMatch, PickerState};
pub use state::AppState;
