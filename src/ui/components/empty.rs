//! Message shown in place of the table when no job matches.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered message, subtitle and optional hint starting two
/// rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    centered(row + 2, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered(row + 3, &empty.subtitle, &dim, cols);

    if let Some(hint) = &empty.hint {
        centered(row + 5, hint, &Theme::fg(&theme.colors.text_dim), cols);
    }
}

fn centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_len(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
