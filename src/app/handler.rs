//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where state changes. Each event is
//! interpreted according to the current [`InputMode`]; the function returns
//! whether the UI should re-render plus the side effects to execute.
//!
//! # Example
//!
//! ```
//! use jobdeck::catalog::Catalog;
//! use jobdeck::{handle_event, Action, AppState, Event, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//!
//! let (_, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), jobdeck::JobdeckError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::Facet;

/// Events produced by the plugin shim from keys and timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (table or picker).
    KeyDown,
    /// Moves the cursor up (table or picker).
    KeyUp,
    CloseFocus,

    /// Enter: open registration, commit the query, toggle a picker value or
    /// submit the form, depending on mode.
    Select,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Returns from browsing search results to editing the query.
    FocusSearchBar,

    /// Text input for whichever mode captures it.
    Char(char),
    Backspace,

    /// Cycles suggestions in search mode, or form fields in the modal.
    Tab,

    OpenPicker(Facet),
    ToggleVerified,
    ToggleFeatured,
    ClearFilters,

    /// Resets the registration form after a successful submit.
    ResetRegistration,

    /// Leaves the current mode: exits search, closes the picker or modal.
    Escape,

    /// A previously scheduled debounce timer fired.
    TimerElapsed,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Currently never fails; the `Result` keeps the signature stable for
/// handlers that may need I/O.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode)
        .entered();

    let browsing = matches!(
        state.input_mode,
        InputMode::Normal | InputMode::Search(SearchFocus::Navigating)
    );

    match event {
        Event::KeyDown => match state.input_mode {
            InputMode::Picker(_) => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.move_down();
                }
                Ok((true, vec![]))
            }
            InputMode::Register => Ok((false, vec![])),
            _ => {
                state.move_selection_down();
                Ok((true, vec![]))
            }
        },
        Event::KeyUp => match state.input_mode {
            InputMode::Picker(_) => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.move_up();
                }
                Ok((true, vec![]))
            }
            InputMode::Register => Ok((false, vec![])),
            _ => {
                state.move_selection_up();
                Ok((true, vec![]))
            }
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => handle_select(state),
        Event::SearchMode => {
            if !browsing {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if state.input_mode != InputMode::Search(SearchFocus::Navigating) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.push(*c);
                state.suggestion_index = None;
                tracing::trace!(query = %state.search_query, char = %c, "search query updated");
                let delay = state.debouncer.input(state.search_query.clone());
                Ok((true, vec![Action::ScheduleTimer(delay)]))
            }
            InputMode::Picker(_) => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.push_char(*c);
                }
                Ok((true, vec![]))
            }
            InputMode::Register => {
                if let Some(modal) = state.registration.as_mut() {
                    modal.push_char(*c);
                }
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                if state.search_query.pop().is_none() {
                    return Ok((false, vec![]));
                }
                state.suggestion_index = None;
                let delay = state.debouncer.input(state.search_query.clone());
                Ok((true, vec![Action::ScheduleTimer(delay)]))
            }
            InputMode::Picker(_) => {
                if let Some(picker) = state.picker.as_mut() {
                    picker.pop_char();
                }
                Ok((true, vec![]))
            }
            InputMode::Register => {
                if let Some(modal) = state.registration.as_mut() {
                    modal.pop_char();
                }
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Tab => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => Ok((state.cycle_suggestion(), vec![])),
            InputMode::Register => {
                if let Some(modal) = state.registration.as_mut() {
                    modal.next_field();
                }
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::OpenPicker(facet) => {
            if !browsing {
                return Ok((false, vec![]));
            }
            state.open_picker(*facet);
            Ok((true, vec![]))
        }
        Event::ToggleVerified => Ok((browsing && state.toggle_verified(), vec![])),
        Event::ToggleFeatured => Ok((browsing && state.toggle_featured(), vec![])),
        Event::ClearFilters => {
            if !browsing {
                return Ok((false, vec![]));
            }
            tracing::debug!("clearing all filters");
            let changed = state.clear_filters();
            if state.input_mode != InputMode::Normal {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            Ok((changed, vec![]))
        }
        Event::ResetRegistration => {
            let Some(modal) = state.registration.as_mut() else {
                return Ok((false, vec![]));
            };
            if !modal.is_submitted() {
                return Ok((false, vec![]));
            }
            modal.reset();
            Ok((true, vec![]))
        }
        Event::Escape => match state.input_mode {
            InputMode::Search(_) => {
                tracing::debug!(query = %state.search_query, "exiting search mode");
                state.debouncer.cancel();
                state.search_query.clear();
                state.commit_query("");
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Picker(_) => {
                state.close_picker();
                Ok((true, vec![]))
            }
            InputMode::Register => {
                state.close_registration();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::TimerElapsed => match state.debouncer.on_timer() {
            Some(query) => {
                tracing::debug!(query = %query, "debounced query committed");
                state.commit_query(&query);
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
    }
}

fn handle_select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.input_mode {
        InputMode::Normal | InputMode::Search(SearchFocus::Navigating) => {
            Ok((state.open_registration(), vec![]))
        }
        InputMode::Search(SearchFocus::Typing) => {
            if let Some(suggestion) = state
                .suggestion_index
                .and_then(|i| state.suggestions.get(i))
                .cloned()
            {
                state.search_query = suggestion;
            }
            state.debouncer.cancel();
            let query = state.search_query.clone();
            state.commit_query(&query);

            if query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        InputMode::Picker(_) => Ok((state.toggle_picker_value(), vec![])),
        InputMode::Register => {
            let base_url = state.apply_base_url.clone();
            let Some(modal) = state.registration.as_mut() else {
                return Ok((false, vec![]));
            };
            if let Some(link) = &modal.apply_link {
                tracing::debug!(link = %link, "opening apply link");
                return Ok((false, vec![Action::OpenUrl(link.clone())]));
            }
            modal.submit(&base_url);
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::DEFAULT_DEBOUNCE;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| send(state, Event::Char(c)).1)
            .collect()
    }

    #[test]
    fn typing_is_debounced_until_last_timer() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        let actions = type_text(&mut state, "kube");
        assert_eq!(actions, vec![Action::ScheduleTimer(DEFAULT_DEBOUNCE); 4]);
        assert_eq!(state.jobs().len(), 20);

        for _ in 0..3 {
            assert!(!send(&mut state, Event::TimerElapsed).0);
        }
        assert!(send(&mut state, Event::TimerElapsed).0);
        assert_eq!(state.jobs().len(), 1);
        assert_eq!(state.suggestions, vec!["Kubernetes"]);
    }

    #[test]
    fn enter_commits_highlighted_suggestion() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "kube");
        send(&mut state, Event::TimerElapsed);
        send(&mut state, Event::TimerElapsed);
        send(&mut state, Event::TimerElapsed);
        send(&mut state, Event::TimerElapsed);

        assert!(send(&mut state, Event::Tab).0);
        send(&mut state, Event::Select);
        assert_eq!(state.search_query, "Kubernetes");
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.search.criteria().query.as_deref(), Some("Kubernetes"));
    }

    #[test]
    fn escape_from_search_clears_query() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "python");
        send(&mut state, Event::Select);
        assert!(state.jobs().len() < 20);

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.jobs().len(), 20);
        assert!(!state.search.has_active_filters());

        // Late timer from the abandoned keystrokes commits nothing.
        assert!(!send(&mut state, Event::TimerElapsed).0);
    }

    #[test]
    fn filter_keys_are_ignored_while_typing() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        assert!(!send(&mut state, Event::ToggleVerified).0);
        assert!(!send(&mut state, Event::OpenPicker(Facet::Skills)).0);
        assert!(state.picker.is_none());
    }

    #[test]
    fn toggles_and_clear() {
        let mut state = state();
        assert!(send(&mut state, Event::ToggleFeatured).0);
        let featured = state.jobs().len();
        assert!(featured < 20);
        assert!(send(&mut state, Event::ToggleVerified).0);
        assert!(state.search.has_active_filters());

        assert!(send(&mut state, Event::ClearFilters).0);
        assert_eq!(state.jobs().len(), 20);
        assert!(!send(&mut state, Event::ClearFilters).0);
    }

    #[test]
    fn picker_escape_returns_to_previous_mode() {
        let mut state = state();
        send(&mut state, Event::OpenPicker(Facet::Location));
        assert_eq!(state.input_mode, InputMode::Picker(Facet::Location));
        send(&mut state, Event::KeyDown);
        assert_eq!(state.picker.as_ref().unwrap().cursor, 1);

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.picker.is_none());
        assert!(!state.search.has_active_filters());
    }

    #[test]
    fn location_picker_selects_and_closes() {
        let mut state = state();
        send(&mut state, Event::OpenPicker(Facet::Location));
        type_text(&mut state, "europe");
        send(&mut state, Event::Select);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search.criteria().location.as_deref(), Some("Europe"));
        assert_eq!(state.jobs().len(), 5);
    }

    #[test]
    fn registration_flow_produces_open_url() {
        let mut state = state().with_apply_base_url("https://jobs.example.com/");
        let job_id = state.selected_job().unwrap().id.clone();

        assert!(send(&mut state, Event::Select).0);
        assert_eq!(state.input_mode, InputMode::Register);

        send(&mut state, Event::Select);
        let modal = state.registration.as_ref().unwrap();
        assert_eq!(modal.errors.email.as_deref(), Some("Email is required"));

        type_text(&mut state, "a+b@c.io");
        send(&mut state, Event::Tab);
        type_text(&mut state, "secret");
        send(&mut state, Event::Tab);
        type_text(&mut state, "secret");
        send(&mut state, Event::Select);

        let expected = format!("https://jobs.example.com/job/{job_id}?email=a%2Bb%40c.io");
        let (render, actions) = send(&mut state, Event::Select);
        assert!(!render);
        assert_eq!(actions, vec![Action::OpenUrl(expected)]);

        assert!(send(&mut state, Event::ResetRegistration).0);
        assert!(!state.registration.as_ref().unwrap().is_submitted());

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.registration.is_none());
    }

    #[test]
    fn searched_job_can_be_applied_to() {
        let mut state = state().with_apply_base_url("https://jobs.example.com");
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "devops");
        send(&mut state, Event::Select);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.selected_job().map(|j| j.id.as_str()), Some("3"));

        send(&mut state, Event::Select);
        assert_eq!(state.input_mode, InputMode::Register);
        type_text(&mut state, "ops@example.com");
        send(&mut state, Event::Tab);
        type_text(&mut state, "secret1");
        send(&mut state, Event::Tab);
        type_text(&mut state, "secret1");
        send(&mut state, Event::Select);

        let link = "https://jobs.example.com/job/3?email=ops%40example.com";
        let modal = state.registration.as_ref().unwrap();
        assert_eq!(modal.apply_link.as_deref(), Some(link));

        send(&mut state, Event::Escape);
        assert!(state.registration.is_none());
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn work_mode_picker_filters_and_shows_chip() {
        let mut state = state();
        send(&mut state, Event::OpenPicker(Facet::WorkMode));
        type_text(&mut state, "hyb");
        send(&mut state, Event::Select);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.jobs().len(), 1);
        assert_eq!(state.jobs()[0].title, "iOS Developer");

        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(vm.header.counts, "Showing 1 of 20 jobs");
        assert_eq!(vm.filter_bar.chips, vec!["type: hybrid".to_string()]);

        send(&mut state, Event::ClearFilters);
        assert_eq!(state.jobs().len(), 20);
    }

    #[test]
    fn impossible_filters_show_empty_state() {
        let mut state = state();
        send(&mut state, Event::ToggleFeatured);
        send(&mut state, Event::OpenPicker(Facet::Category));
        type_text(&mut state, "Sales");
        send(&mut state, Event::Select);

        let vm = state.compute_viewmodel(30, 120);
        let empty = vm.empty_state.expect("no featured sales jobs");
        assert_eq!(empty.message, "No jobs match your filters");
        assert_eq!(empty.subtitle, "Press x to clear all filters");
        assert!(vm.display_items.is_empty());
    }
}
