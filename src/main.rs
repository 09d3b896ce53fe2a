//! Zellij plugin entry point.
//!
//! Translates Zellij key and timer events into [`jobdeck::Event`]s, runs them
//! through [`handle_event`] and executes the returned [`Action`]s with the
//! plugin API.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use jobdeck::search::Facet;
use jobdeck::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

struct State {
    app: jobdeck::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: jobdeck::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        jobdeck::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = jobdeck::initialize(&config);

        // Only needed to open the apply link.
        request_permission(&[PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(jobs = self.app.jobs().len(), "plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name)
            .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8_lossy(&stderr);
                    tracing::warn!(exit_code = ?exit_code, error = %error, "failed to open apply link");
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - apply links cannot be opened");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        jobdeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Keys shared by every mode come first; plain characters are text while
    /// a mode captures text and commands otherwise.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let mode = self.app.input_mode;

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Down => return Some(Event::KeyDown),
            BareKey::Up => return Some(Event::KeyUp),
            BareKey::Enter => return Some(Event::Select),
            BareKey::Tab => return Some(Event::Tab),
            BareKey::Esc => return Some(Event::Escape),
            BareKey::Backspace => return Some(Event::Backspace),
            _ => {}
        }

        let BareKey::Char(c) = key.bare_key else {
            return None;
        };

        if mode == InputMode::Register && c == 'r' && self.registration_submitted() {
            return Some(Event::ResetRegistration);
        }
        if mode.captures_text() {
            return Some(Event::Char(c));
        }

        Some(match c {
            'j' => Event::KeyDown,
            'k' => Event::KeyUp,
            '/' if mode == InputMode::Search(SearchFocus::Navigating) => Event::FocusSearchBar,
            '/' => Event::SearchMode,
            'l' => Event::OpenPicker(Facet::Location),
            'c' => Event::OpenPicker(Facet::Category),
            's' => Event::OpenPicker(Facet::Skills),
            'b' => Event::OpenPicker(Facet::Benefits),
            '$' => Event::OpenPicker(Facet::Salary),
            'w' => Event::OpenPicker(Facet::WorkMode),
            'v' => Event::ToggleVerified,
            'f' => Event::ToggleFeatured,
            'x' => Event::ClearFilters,
            'q' => Event::CloseFocus,
            _ => return None,
        })
    }

    fn registration_submitted(&self) -> bool {
        self.app
            .registration
            .as_ref()
            .is_some_and(jobdeck::app::RegistrationModal::is_submitted)
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::ScheduleTimer(delay) => set_timeout(delay.as_secs_f64()),
            Action::OpenUrl(url) => {
                tracing::info!(url = %url, "opening apply link");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
            }
        }
    }
}
