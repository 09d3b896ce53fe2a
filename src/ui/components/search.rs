//! Search input box and the suggestion line below it.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the search box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the three-line box and the suggestion line. Returns the next free
/// row (`row + 4`).
///
/// ```text
///      ┌──────────────────────────┐
///      │ Search: rea_             │
///      └──────────────────────────┘
///  ▸ React Developer  React  ...
/// ```
///
/// While navigating results the cursor marker is hidden and the border is
/// dimmed.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_typing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_typing { "_" } else { "" };
    let search_text = truncate(&format!(" Search: {}{cursor}", search.query), inner_width);
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    render_suggestions(row + 3, search, theme, cols)
}

fn render_suggestions(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");

    if search.suggestions.is_empty() {
        if let Some(hint) = &search.hint {
            let hint = truncate(hint, cols.saturating_sub(used));
            used += char_len(&hint);
            print!("{}{}{hint}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        }
    } else {
        for item in &search.suggestions {
            let text = format!("{} ", item.text);
            let len = char_len(&text) + 2;
            if used + len > cols {
                break;
            }
            used += len;

            if item.is_selected {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
                print!("▸ {text}");
            } else {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("  {text}");
            }
            print!("{}", Theme::reset());
        }
    }

    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
