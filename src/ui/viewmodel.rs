//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready strings,
//! flags and highlight ranges. Strings are already truncated to the column
//! widths in [`columns`].

/// Fixed table column widths, in characters.
pub mod columns {
    pub const BADGE: usize = 2;
    pub const TITLE: usize = 30;
    pub const COMPANY: usize = 16;
    pub const LOCATION: usize = 14;
    pub const SALARY: usize = 14;
    pub const WORK_MODE: usize = 7;
    pub const AGE: usize = 4;
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible window of job rows.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,
    pub footer: FooterInfo,

    /// Shown in place of the table when no job matches.
    pub empty_state: Option<EmptyState>,

    /// Present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Summary of the selected job, shown under the table.
    pub detail: Option<JobDetail>,

    /// Present while a facet picker is open.
    pub picker: Option<PickerView>,

    /// Present while the registration modal is open.
    pub modal: Option<ModalView>,
}

/// One row of the job table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub badge: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub work_mode: String,
    pub time_ago: String,
    pub is_verified: bool,
    pub is_featured: bool,
    pub is_selected: bool,

    /// Character ranges of `title` matching the active query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// "Showing N of M jobs".
    pub counts: String,
}

/// Active filters rendered as a single line of chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,

    pub suggestions: Vec<SuggestionItem>,

    /// Popular search terms, shown while the query is empty.
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub text: String,
    pub is_selected: bool,
}

/// Two-line summary of the selected job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub headline: String,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub title: String,
    pub filter: String,
    pub items: Vec<PickerItem>,

    /// Number of options hidden by the type-to-narrow filter.
    pub hidden_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub label: String,
    pub count: usize,
    pub is_checked: bool,
    pub is_cursor: bool,
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FieldView>,
    pub apply_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: String,

    /// Field value, masked for secret fields.
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
}
