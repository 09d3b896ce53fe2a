//! Facet picker list.

use crate::ui::helpers::{self, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerView;

/// Renders the filter line followed by one row per option. Returns the next
/// free row.
///
/// ```text
///  Filter: py  (12 hidden)
///  [x] Python                  4
///  [ ] PyTorch                 1
/// ```
pub fn render_picker(row: usize, picker: &PickerView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut filter_line = format!(" Filter: {}_", picker.filter);
    if picker.hidden_count > 0 {
        filter_line.push_str(&format!("  ({} hidden)", picker.hidden_count));
    }
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("{filter_line}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(&filter_line))));
    print!("{}", Theme::reset());

    let label_width = picker
        .items
        .iter()
        .map(|item| char_len(&item.label))
        .max()
        .unwrap_or(0)
        .max(20);

    let mut current_row = row + 1;
    for item in &picker.items {
        position_cursor(current_row, 1);

        let base_fg = if item.is_cursor {
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            &theme.colors.selection_fg
        } else {
            &theme.colors.text_normal
        };

        if item.is_checked {
            let check_fg = if item.is_cursor { base_fg } else { &theme.colors.verified_fg };
            print!("{} [x] ", Theme::fg(check_fg));
        } else {
            print!("{} [ ] ", Theme::fg(base_fg));
        }
        print!("{}", Theme::fg(base_fg));

        helpers::render_highlighted_text(
            &item.label,
            &item.highlight_ranges,
            theme,
            item.is_cursor,
            base_fg,
        );
        print!("{}", " ".repeat(label_width.saturating_sub(char_len(&item.label))));

        let count = format!(" {:>4}", item.count);
        print!("{count}");
        let used = 5 + label_width + char_len(&count);
        print!("{}", " ".repeat(cols.saturating_sub(used)));
        print!("{}", Theme::reset());

        current_row += 1;
    }

    if picker.items.is_empty() {
        position_cursor(current_row, 1);
        print!("{} No matching options", Theme::fg(&theme.colors.text_dim));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
