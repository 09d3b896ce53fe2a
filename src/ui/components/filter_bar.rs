//! One-line summary of the active filters.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

pub fn render_filter_bar(row: usize, info: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let line = if info.chips.is_empty() {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        " No filters active".to_string()
    } else {
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        let chips: Vec<String> = info.chips.iter().map(|chip| format!("[{chip}]")).collect();
        format!(" {}", chips.join(" "))
    };

    let line = truncate(&line, cols);
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(char_len(&line))));
    print!("{}", Theme::reset());
    row + 1
}
