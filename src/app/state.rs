//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It wraps the
//! [`SearchController`] (criteria and filtered result) and adds the transient
//! UI state around it: selection, the typed query and its debouncer, search
//! suggestions, the open facet picker and the registration modal.
//!
//! View models are computed on demand from a state snapshot by
//! [`AppState::compute_viewmodel`].

use super::modal::RegistrationModal;
use super::modes::{InputMode, SearchFocus};
use super::picker::PickerState;
use crate::catalog::{Catalog, POPULAR_SKILLS_LIMIT};
use crate::domain::{CriteriaUpdate, Job, SearchCriteria, WorkMode};
use crate::registration::{Field, DEFAULT_APPLY_BASE_URL};
use crate::search::{option_count, suggestions, Debouncer, Facet, SearchController, SALARY_BANDS};
use crate::ui::helpers::{clip_ranges, coalesce_indices, substring_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    columns, DisplayItem, EmptyState, FieldView, FilterBarInfo, FooterInfo, HeaderInfo, JobDetail,
    ModalView, PickerItem, PickerView, SearchBarInfo, SuggestionItem, UIViewModel,
};
use std::time::Duration;

/// Rows taken by chrome in normal mode: blank, header, filter bar, border,
/// column headers, two detail lines, border, footer.
const NORMAL_CHROME_ROWS: usize = 9;

/// Search mode adds the three-line search box and the suggestion line.
const SEARCH_CHROME_ROWS: usize = NORMAL_CHROME_ROWS + 4;

/// Picker chrome: blank, header, border, filter line, border, footer.
const PICKER_CHROME_ROWS: usize = 6;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Criteria, filtered result and derived facet options.
    pub search: SearchController,

    pub theme: Theme,
    pub input_mode: InputMode,

    /// Mode to return to when the picker or modal closes.
    pub resume_mode: InputMode,

    /// Zero-based index into the filtered jobs.
    pub selected_index: usize,

    /// Query as typed, ahead of the debounced criteria.
    pub search_query: String,

    pub suggestions: Vec<String>,

    /// Suggestion highlighted with Tab, if any.
    pub suggestion_index: Option<usize>,

    pub debouncer: Debouncer,
    pub picker: Option<PickerState>,
    pub registration: Option<RegistrationModal>,
    pub apply_base_url: String,
}

impl AppState {
    /// Creates a state browsing `catalog` with default criteria.
    ///
    /// ```
    /// use jobdeck::catalog::Catalog;
    /// use jobdeck::{AppState, Theme};
    ///
    /// let state = AppState::new(Catalog::builtin(), Theme::default());
    /// assert_eq!(state.jobs().len(), 20);
    /// assert_eq!(state.selected_index, 0);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            search: SearchController::new(catalog),
            theme,
            input_mode: InputMode::Normal,
            resume_mode: InputMode::Normal,
            selected_index: 0,
            search_query: String::new(),
            suggestions: Vec::new(),
            suggestion_index: None,
            debouncer: Debouncer::default(),
            picker: None,
            registration: None,
            apply_base_url: DEFAULT_APPLY_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_apply_base_url(mut self, url: impl Into<String>) -> Self {
        self.apply_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Jobs matching the current criteria, in catalog order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.search.result().jobs
    }

    pub fn move_selection_down(&mut self) {
        let len = self.jobs().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    pub fn move_selection_up(&mut self) {
        let len = self.jobs().len();
        if len == 0 {
            return;
        }
        self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
    }

    #[must_use]
    pub fn selected_job(&self) -> Option<&Job> {
        self.jobs().get(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        let len = self.jobs().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Applies a partial criteria change. Returns `true` if the result changed.
    pub fn apply_update(&mut self, update: CriteriaUpdate) -> bool {
        let changed = self.search.update(update);
        if changed {
            self.clamp_selection();
        }
        changed
    }

    /// Commits a debounced query: refreshes suggestions and the criteria.
    pub fn commit_query(&mut self, query: &str) {
        let _span = tracing::debug_span!("commit_query", query_len = query.len()).entered();

        self.suggestions = suggestions(query, self.search.catalog().jobs());
        self.suggestion_index = None;

        let update = CriteriaUpdate {
            query: Some(Some(query.to_string()).filter(|q| !q.is_empty())),
            ..CriteriaUpdate::default()
        };
        self.apply_update(update);
    }

    /// Moves the Tab highlight to the next suggestion, past the last one back
    /// to none. Returns `false` when there is nothing to cycle.
    pub fn cycle_suggestion(&mut self) -> bool {
        if self.suggestions.is_empty() {
            return false;
        }
        self.suggestion_index = match self.suggestion_index {
            None => Some(0),
            Some(i) if i + 1 < self.suggestions.len() => Some(i + 1),
            Some(_) => None,
        };
        true
    }

    /// Resets every filter and the typed query.
    pub fn clear_filters(&mut self) -> bool {
        self.debouncer.cancel();
        let had_query = !self.search_query.is_empty();
        self.search_query.clear();
        self.suggestions.clear();
        self.suggestion_index = None;
        let changed = self.search.clear();
        self.selected_index = 0;
        changed || had_query
    }

    pub fn open_picker(&mut self, facet: Facet) {
        let labels = self.search.options().labels(facet);
        tracing::debug!(?facet, option_count = labels.len(), "opening picker");
        self.picker = Some(PickerState::new(facet, labels));
        self.resume_mode = self.input_mode;
        self.input_mode = InputMode::Picker(facet);
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
        self.input_mode = self.resume_mode;
    }

    /// Toggles the value under the picker cursor.
    ///
    /// Single-select facets close the picker afterwards. Returns `true` if
    /// anything visible changed.
    pub fn toggle_picker_value(&mut self) -> bool {
        let Some(picker) = &self.picker else {
            return false;
        };
        let facet = picker.facet;
        let Some(label) = picker.current().map(String::from) else {
            return false;
        };

        let changed = self
            .facet_update(facet, &label)
            .is_some_and(|update| self.apply_update(update));

        if facet.is_multi_select() {
            changed
        } else {
            self.close_picker();
            true
        }
    }

    fn facet_update(&self, facet: Facet, label: &str) -> Option<CriteriaUpdate> {
        let criteria = self.search.criteria();
        let update = match facet {
            Facet::Location => {
                CriteriaUpdate::location(toggle_choice(criteria.location.as_deref(), label))
            }
            Facet::Category => {
                CriteriaUpdate::category(toggle_choice(criteria.category.as_deref(), label))
            }
            Facet::Skills => CriteriaUpdate {
                skills: Some(toggle_member(criteria.skills.as_deref(), label)),
                ..CriteriaUpdate::default()
            },
            Facet::Benefits => CriteriaUpdate {
                benefits: Some(toggle_member(criteria.benefits.as_deref(), label)),
                ..CriteriaUpdate::default()
            },
            Facet::Salary => {
                let band = SALARY_BANDS.iter().find(|band| band.label == label)?;
                let selected = is_checked(criteria, facet, label);
                CriteriaUpdate::salary((!selected).then_some((band.min, band.max)))
            }
            Facet::WorkMode => {
                let mode = WorkMode::parse(label)?;
                CriteriaUpdate::work_mode((criteria.work_mode != Some(mode)).then_some(mode))
            }
        };
        Some(update)
    }

    pub fn toggle_verified(&mut self) -> bool {
        let on = !self.search.criteria().verified_required();
        self.apply_update(CriteriaUpdate::verified_only(on))
    }

    pub fn toggle_featured(&mut self) -> bool {
        let on = !self.search.criteria().featured_required();
        self.apply_update(CriteriaUpdate::featured_only(on))
    }

    /// Opens the registration modal on the selected job.
    pub fn open_registration(&mut self) -> bool {
        let Some(job) = self.selected_job().cloned() else {
            return false;
        };
        tracing::debug!(job_id = %job.id, "opening registration");
        self.registration = Some(RegistrationModal::new(job));
        self.resume_mode = self.input_mode;
        self.input_mode = InputMode::Register;
        true
    }

    pub fn close_registration(&mut self) {
        self.registration = None;
        self.input_mode = self.resume_mode;
    }

    /// Computes a renderable view model for a `rows` × `cols` pane.
    ///
    /// The visible window of jobs is centered on the selection and shifted
    /// when near either end, the same way for every mode that shows the table.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = self.calculate_available_rows(rows);
        let jobs = self.jobs();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(jobs.len());
        if visible_end - visible_start < available_rows && jobs.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.search.criteria().active_query();
        let display_items = jobs[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, job)| {
                self.compute_display_item(job, visible_start + offset, query.as_deref())
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            detail: self.selected_job().map(|job| Self::compute_detail(job, cols)),
            picker: self.compute_picker(rows),
            modal: self.compute_modal(),
        }
    }

    fn compute_display_item(&self, job: &Job, absolute_idx: usize, query: Option<&str>) -> DisplayItem {
        let title = truncate(&job.title, columns::TITLE);
        let visible = if title == job.title {
            columns::TITLE
        } else {
            columns::TITLE - 3
        };
        let highlight_ranges = query.map_or_else(Vec::new, |q| {
            clip_ranges(substring_ranges(&job.title, q), visible)
        });

        DisplayItem {
            badge: truncate(&job.company_badge(), columns::BADGE),
            title,
            company: truncate(&job.company, columns::COMPANY),
            location: truncate(&job.location, columns::LOCATION),
            salary: truncate(&job.salary, columns::SALARY),
            work_mode: job.work_mode.to_string(),
            time_ago: truncate(&job.time_ago, columns::AGE),
            is_verified: job.verified(),
            is_featured: job.featured(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let result = self.search.result();
        HeaderInfo {
            title: " Remote Jobs ".to_string(),
            counts: format!(
                "Showing {} of {} jobs",
                result.filtered_count, result.total_count
            ),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let criteria = self.search.criteria();
        let mut chips = Vec::new();

        if let Some(query) = criteria.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            chips.push(format!("\"{query}\""));
        }
        if criteria.active_location().is_some() {
            if let Some(location) = &criteria.location {
                chips.push(format!("location: {location}"));
            }
        }
        if criteria.active_category().is_some() {
            if let Some(category) = &criteria.category {
                chips.push(format!("category: {category}"));
            }
        }
        if let Some(skills) = criteria.skills.as_ref().filter(|s| !s.is_empty()) {
            chips.push(format!("skills: {}", skills.join(", ")));
        }
        if let Some(benefits) = criteria.benefits.as_ref().filter(|b| !b.is_empty()) {
            chips.push(format!("benefits: {}", benefits.join(", ")));
        }
        if let Some((min, max)) = criteria.active_salary() {
            chips.push(format!("salary: {}", salary_label(criteria, min, max)));
        }
        if let Some(mode) = criteria.work_mode {
            chips.push(format!("type: {mode}"));
        }
        if criteria.verified_required() {
            chips.push("verified".to_string());
        }
        if criteria.featured_required() {
            chips.push("featured".to_string());
        }

        FilterBarInfo { chips }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: navigate  /: search  l/c/s/b/$/w: filters  v: verified  f: featured  x: clear  Enter: apply  q: quit"
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Tab: suggestions  Enter: search  Ctrl+n/p: navigate"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  x: clear  Enter: apply"
            }
            InputMode::Picker(facet) if facet.is_multi_select() => {
                "Type to narrow  Ctrl+n/p: navigate  Enter: toggle  ESC: done"
            }
            InputMode::Picker(_) => "Type to narrow  Ctrl+n/p: navigate  Enter: select  ESC: cancel",
            InputMode::Register => {
                if self.registration.as_ref().is_some_and(RegistrationModal::is_submitted) {
                    "Enter: open link  r: apply to another job  ESC: close"
                } else {
                    "Tab: next field  Enter: submit  ESC: close"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.search.is_empty() {
            return None;
        }

        if self.search.catalog().is_empty() {
            return Some(EmptyState {
                message: "No jobs in catalog".to_string(),
                subtitle: "Check catalog_file in the plugin configuration".to_string(),
                hint: None,
            });
        }

        let popular = self.search.catalog().popular_skills(POPULAR_SKILLS_LIMIT);
        Some(EmptyState {
            message: "No jobs match your filters".to_string(),
            subtitle: "Press x to clear all filters".to_string(),
            hint: (!popular.is_empty()).then(|| format!("Popular skills: {}", popular.join(", "))),
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let InputMode::Search(focus) = self.input_mode else {
            return None;
        };

        let suggestions = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, text)| SuggestionItem {
                text: text.clone(),
                is_selected: self.suggestion_index == Some(i),
            })
            .collect();

        let hint = self.search_query.is_empty().then(|| {
            format!("Popular: {}", Catalog::popular_search_terms().join(", "))
        });

        Some(SearchBarInfo {
            query: self.search_query.clone(),
            is_typing: focus == SearchFocus::Typing,
            suggestions,
            hint,
        })
    }

    fn compute_detail(job: &Job, cols: usize) -> JobDetail {
        let mut headline = format!(
            "{} · {} · {} · {} · {}",
            job.company, job.location, job.salary, job.work_mode, job.time_ago
        );
        if job.verified() {
            headline.push_str(" · verified");
        }

        let mut tags = format!("Skills: {}", job.skills.join(", "));
        if !job.benefit_tags().is_empty() {
            tags.push_str(&format!("  Benefits: {}", job.benefit_tags().join(", ")));
        }

        JobDetail {
            headline: truncate(&headline, cols.saturating_sub(2)),
            tags: truncate(&tags, cols.saturating_sub(2)),
        }
    }

    fn compute_picker(&self, rows: usize) -> Option<PickerView> {
        let picker = self.picker.as_ref()?;
        let criteria = self.search.criteria();
        let jobs = self.search.catalog().jobs();

        let matches = picker.matches();
        let available = rows.saturating_sub(PICKER_CHROME_ROWS).max(1);
        let start = picker.cursor.saturating_sub(available / 2);
        let start = start.min(matches.len().saturating_sub(available));
        let end = (start + available).min(matches.len());

        let items = matches[start..end]
            .iter()
            .enumerate()
            .map(|(offset, m)| PickerItem {
                label: m.label.clone(),
                count: option_count(jobs, picker.facet, &m.label),
                is_checked: is_checked(criteria, picker.facet, &m.label),
                is_cursor: start + offset == picker.cursor,
                highlight_ranges: coalesce_indices(&m.indices),
            })
            .collect();

        let mode = if picker.facet.is_multi_select() {
            "multi-select"
        } else {
            "single-select"
        };

        Some(PickerView {
            title: format!(" {} ({mode}) ", picker.facet.title()),
            filter: picker.filter.clone(),
            items,
            hidden_count: self
                .search
                .options()
                .labels(picker.facet)
                .len()
                .saturating_sub(matches.len()),
        })
    }

    fn compute_modal(&self) -> Option<ModalView> {
        let modal = self.registration.as_ref()?;

        let fields = [Field::Email, Field::Password, Field::ConfirmPassword]
            .into_iter()
            .map(|field| {
                let raw = modal.form.value(field);
                let value = if field.is_secret() {
                    "*".repeat(raw.chars().count())
                } else {
                    raw.to_string()
                };
                FieldView {
                    label: field.label().to_string(),
                    value,
                    error: modal.errors.get(field).map(String::from),
                    is_focused: !modal.is_submitted() && modal.focus == field,
                }
            })
            .collect();

        Some(ModalView {
            title: format!(" Apply: {} ", modal.job.title),
            subtitle: modal.job.description.clone().unwrap_or_else(|| {
                format!("{} · {} · {}", modal.job.company, modal.job.location, modal.job.salary)
            }),
            fields,
            apply_link: modal.apply_link.clone(),
        })
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.resolve_table_mode() {
            InputMode::Search(_) => total_rows.saturating_sub(SEARCH_CHROME_ROWS),
            _ => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
        }
    }

    /// Mode whose table layout is shown, looking through picker and modal.
    const fn resolve_table_mode(&self) -> InputMode {
        match self.input_mode {
            InputMode::Picker(_) | InputMode::Register => self.resume_mode,
            mode => mode,
        }
    }
}

/// Whether `label` is currently selected for `facet`.
fn is_checked(criteria: &SearchCriteria, facet: Facet, label: &str) -> bool {
    match facet {
        Facet::Location => criteria.location.as_deref() == Some(label),
        Facet::Category => criteria.category.as_deref() == Some(label),
        Facet::Skills => criteria.skills.iter().flatten().any(|s| s == label),
        Facet::Benefits => criteria.benefits.iter().flatten().any(|b| b == label),
        Facet::Salary => SALARY_BANDS.iter().any(|band| {
            band.label == label
                && criteria.min_salary == Some(band.min)
                && criteria.max_salary == Some(band.max)
        }),
        Facet::WorkMode => criteria.work_mode.map(WorkMode::as_str) == Some(label),
    }
}

fn toggle_choice(current: Option<&str>, label: &str) -> Option<String> {
    (current != Some(label)).then(|| label.to_string())
}

/// Adds or removes `label`; an emptied list clears the constraint.
fn toggle_member(current: Option<&[String]>, label: &str) -> Option<Vec<String>> {
    let mut values: Vec<String> = current.map(<[String]>::to_vec).unwrap_or_default();
    if let Some(pos) = values.iter().position(|v| v == label) {
        values.remove(pos);
    } else {
        values.push(label.to_string());
    }
    (!values.is_empty()).then_some(values)
}

fn salary_label(criteria: &SearchCriteria, min: Option<u64>, max: Option<u64>) -> String {
    if let Some(band) = SALARY_BANDS.iter().find(|band| {
        criteria.min_salary == Some(band.min) && criteria.max_salary == Some(band.max)
    }) {
        return band.label.to_string();
    }
    let k = |v: u64| format!("${}k", v / 1000);
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", k(min), k(max)),
        (Some(min), None) => format!("{}+", k(min)),
        (None, Some(max)) => format!("up to {}", k(max)),
        (None, None) => "any".to_string(),
    }
}
