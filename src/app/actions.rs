//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij directly. It returns a `Vec<Action>`
//! which the plugin shim executes in order after each event.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Requests a `Timer` event after the given delay.
    ///
    /// Used by the search debounce; each scheduled timer comes back as one
    /// [`Event::TimerElapsed`](super::Event::TimerElapsed).
    ScheduleTimer(Duration),

    /// Opens a URL in the host's browser.
    OpenUrl(String),
}
