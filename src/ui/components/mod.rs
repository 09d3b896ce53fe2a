//! Screen layouts assembled from the individual components.
//!
//! Three layouts exist:
//!
//! - [`render_browse_mode`]: header, filter bar, optional search box, job
//!   table (or empty state), detail and footer
//! - [`render_picker_mode`]: header, facet option list and footer
//! - [`render_modal_mode`]: header, registration form and footer
//!
//! Every layout draws top-down from row 2 and pins the border and footer to
//! the bottom of the pane.

mod detail;
mod empty;
mod filter_bar;
mod footer;
mod header;
mod modal;
mod picker;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ModalView, PickerView, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use picker::render_picker;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_border(rows.saturating_sub(1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Job list layout, with the search box when `vm.search_bar` is set.
///
/// ```text
/// [blank]
/// [header]            Showing 4 of 20 jobs
/// [filter chips]
/// [border]
/// [search box + suggestions]   (search mode only)
/// [column headers]
/// [rows | empty state]
/// [detail headline]
/// [detail tags]
/// [border]
/// [footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    render_detail(rows.saturating_sub(3), vm.detail.as_ref(), theme, cols);
    render_bottom(vm, theme, cols, rows);
}

pub fn render_picker_mode(vm: &UIViewModel, picker: &PickerView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    let header = crate::ui::viewmodel::HeaderInfo {
        title: picker.title.clone(),
        counts: vm.header.counts.clone(),
    };
    current_row = render_header(current_row, &header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_picker(current_row, picker, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

pub fn render_modal_mode(vm: &UIViewModel, modal: &ModalView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    let header = crate::ui::viewmodel::HeaderInfo {
        title: modal.title.clone(),
        counts: String::new(),
    };
    current_row = render_header(current_row, &header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_modal(current_row + 1, modal, theme, cols);

    render_bottom(vm, theme, cols, rows);
}
