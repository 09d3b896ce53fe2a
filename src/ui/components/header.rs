//! Title bar with result counts.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the bold title on the left and the counts on the right.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_len(&header.title);
    let counts = format!("{} ", header.counts);
    let counts_len = char_len(&counts);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}", Theme::bold(), header.title);

    if title_len + counts_len <= cols {
        print!("{}", Theme::reset());
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", " ".repeat(cols - title_len - counts_len));
        print!("{counts}");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}
