//! Two-line summary of the selected job under the table.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JobDetail;

/// Renders the detail block, or two blank lines when nothing is selected.
pub fn render_detail(row: usize, detail: Option<&JobDetail>, theme: &Theme, cols: usize) -> usize {
    let (headline, tags) = detail.map_or(("", ""), |d| (d.headline.as_str(), d.tags.as_str()));

    position_cursor(row, 1);
    print!("{} {headline}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(cols.saturating_sub(char_len(headline) + 1)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{} {tags}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(char_len(tags) + 1)));
    print!("{}", Theme::reset());

    row + 2
}
