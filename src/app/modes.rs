//! Input mode state machine types.
//!
//! The plugin is always in exactly one [`InputMode`], which decides how keys
//! are interpreted and which screen the renderer draws:
//!
//! - **Normal**: browse the job table and toggle filters
//! - **Search**: edit the query (typing) or browse its results (navigating)
//! - **Picker**: choose values for one facet
//! - **Register**: fill in the registration modal for the selected job

use crate::search::Facet;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query; Tab cycles suggestions.
    Typing,

    /// The query is committed; j/k move through results.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search(SearchFocus),

    /// Facet picker is open for the given facet.
    Picker(Facet),

    /// Registration modal is open.
    Register,
}

impl InputMode {
    /// Whether plain characters are text input rather than commands.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(
            self,
            Self::Search(SearchFocus::Typing) | Self::Picker(_) | Self::Register
        )
    }
}
