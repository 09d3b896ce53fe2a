//! Job table: column headers and one row per visible job.

use crate::ui::helpers::{self, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{columns, DisplayItem};

/// Width of a full row including separators and the two marker cells.
const ROW_WIDTH: usize = columns::BADGE
    + columns::TITLE
    + columns::COMPANY
    + columns::LOCATION
    + columns::SALARY
    + columns::WORK_MODE
    + columns::AGE
    + 7
    + 2;

pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded("", columns::BADGE);
    print!(" ");
    for (label, width) in [
        ("TITLE", columns::TITLE),
        ("COMPANY", columns::COMPANY),
        ("LOCATION", columns::LOCATION),
        ("SALARY", columns::SALARY),
        ("TYPE", columns::WORK_MODE),
        ("AGE", columns::AGE),
    ] {
        print_padded(label, width);
        print!(" ");
    }
    print!("{}", " ".repeat(cols.saturating_sub(ROW_WIDTH - 2)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `items` from `row` on. Returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Selection colors fill the whole row and suppress match highlights.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));

    print!("{}", Theme::bold());
    print_padded(&item.badge, columns::BADGE);
    print!("{} ", Theme::reset());
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{}", Theme::fg(base_fg));

    helpers::render_highlighted_text(
        &item.title,
        &item.highlight_ranges,
        theme,
        item.is_selected,
        base_fg,
    );
    print!("{} ", " ".repeat(columns::TITLE.saturating_sub(helpers::char_len(&item.title))));

    for (text, width) in [
        (&item.company, columns::COMPANY),
        (&item.location, columns::LOCATION),
        (&item.salary, columns::SALARY),
        (&item.work_mode, columns::WORK_MODE),
        (&item.time_ago, columns::AGE),
    ] {
        print_padded(text, width);
        print!(" ");
    }

    let marker_color = |color: &str| {
        if item.is_selected {
            Theme::fg(base_fg)
        } else {
            Theme::fg(color)
        }
    };
    if item.is_verified {
        print!("{}✓", marker_color(theme.colors.verified_fg.as_str()));
    } else {
        print!(" ");
    }
    if item.is_featured {
        print!("{}★", marker_color(theme.colors.featured_fg.as_str()));
    } else {
        print!(" ");
    }

    print!("{}", " ".repeat(cols.saturating_sub(ROW_WIDTH)));
    print!("{}", Theme::reset());
    row + 1
}
