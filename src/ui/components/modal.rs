//! Registration form and the unlocked apply link.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

/// Width of the input boxes, clamped to the pane.
const FIELD_WIDTH: usize = 40;

/// Renders the modal body from `row`. Returns the next free row.
///
/// Each field takes three rows: label, value and validation error. Once the
/// form is accepted the fields stay visible and the apply link is shown
/// beneath them.
pub fn render_modal(row: usize, modal: &ModalView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4);

    position_cursor(row, 1);
    print!("{}  ", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&modal.subtitle, width));
    print!("{}", Theme::reset());

    let field_width = FIELD_WIDTH.min(width.saturating_sub(2));
    let mut current_row = row + 2;
    for field in &modal.fields {
        position_cursor(current_row, 1);
        let label_fg = if field.is_focused {
            &theme.colors.search_bar_border
        } else {
            &theme.colors.text_normal
        };
        print!("{}{}  {}{}", Theme::fg(label_fg), Theme::bold(), field.label, Theme::reset());

        position_cursor(current_row + 1, 1);
        let cursor = if field.is_focused { "_" } else { "" };
        let value = truncate(&format!("{}{cursor}", field.value), field_width);
        let border = if field.is_focused {
            Theme::fg(&theme.colors.search_bar_border)
        } else {
            Theme::fg(&theme.colors.border)
        };
        print!("  {border}[{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        print!("{}", " ".repeat(field_width.saturating_sub(char_len(&value))));
        print!("{border}]{}", Theme::reset());

        position_cursor(current_row + 2, 1);
        if let Some(error) = &field.error {
            print!("{}  {}", Theme::fg(&theme.colors.error_fg), truncate(error, width));
            print!("{}", Theme::reset());
        }

        current_row += 3;
    }

    if let Some(link) = &modal.apply_link {
        position_cursor(current_row, 1);
        print!("{}  Registered. Apply at:{}", Theme::fg(&theme.colors.verified_fg), Theme::reset());
        position_cursor(current_row + 1, 1);
        // Links are never truncated so they stay copyable.
        print!("{}  {link}{}", Theme::fg(&theme.colors.link_fg), Theme::reset());
        current_row += 2;
    }

    current_row
}
