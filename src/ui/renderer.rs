//! Top-level rendering entry point.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI for a `rows` × `cols` pane to stdout.
///
/// Does not clear the screen; every layout pads its lines to the full width.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// The modal covers the picker, and the picker covers the job list.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(modal) = &vm.modal {
        components::render_modal_mode(vm, modal, theme, cols, rows);
    } else if let Some(picker) = &vm.picker {
        components::render_picker_mode(vm, picker, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalog::Catalog;
    use crate::search::Facet;

    fn render_sizes(state: &AppState) {
        for (rows, cols) in [(0, 0), (4, 8), (24, 80), (60, 200)] {
            render(state, rows, cols);
        }
    }

    #[test]
    fn every_layout_renders_at_any_size() {
        let mut state = AppState::new(Catalog::builtin(), Theme::default());
        render_sizes(&state);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "dev".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Select).unwrap();
        render_sizes(&state);

        handle_event(&mut state, &Event::OpenPicker(Facet::Skills)).unwrap();
        render_sizes(&state);
        handle_event(&mut state, &Event::Escape).unwrap();

        handle_event(&mut state, &Event::Select).unwrap();
        handle_event(&mut state, &Event::Select).unwrap();
        render_sizes(&state);
    }

    #[test]
    fn empty_catalog_renders() {
        let catalog = crate::catalog::json::from_jobs(Vec::new()).unwrap();
        let state = AppState::new(catalog, Theme::default());
        render_sizes(&state);
    }
}
