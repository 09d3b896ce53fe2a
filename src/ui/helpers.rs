//! Shared rendering utilities.
//!
//! Cursor positioning, highlighted text output and the character-index
//! helpers used when building view models. All ranges are character indices,
//! never byte offsets, so multi-byte titles and company names are safe.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given character ranges in match colors.
///
/// When `is_selected` is set the selection colors win and no ranges are
/// highlighted. `base_fg` is restored after each highlighted section.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    base_fg: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Prints `text` followed by spaces up to `width` characters.
pub fn print_padded(text: &str, width: usize) {
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(char_len(text))));
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// ```
/// use jobdeck::ui::helpers::truncate;
///
/// assert_eq!(truncate("Senior Full-Stack Developer", 12), "Senior Fu...");
/// assert_eq!(truncate("QA", 12), "QA");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Character ranges of every non-overlapping, case-insensitive occurrence of
/// `needle` in `text`.
#[must_use]
pub fn substring_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.chars().map(fold).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Collapses sorted match indices into contiguous `(start, end)` ranges.
#[must_use]
pub fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Keeps the part of each range that lies inside the first `len` characters.
#[must_use]
pub fn clip_ranges(ranges: Vec<(usize, usize)>, len: usize) -> Vec<(usize, usize)> {
    ranges
        .into_iter()
        .filter(|(start, _)| *start < len)
        .map(|(start, end)| (start, end.min(len)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_ranges_are_case_insensitive_and_disjoint() {
        assert_eq!(substring_ranges("DevOps Engineer", "e"), vec![(1, 2), (7, 8), (12, 13), (13, 14)]);
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(substring_ranges("Café Owner", "É O"), vec![(3, 6)]);
        assert!(substring_ranges("abc", "").is_empty());
        assert!(substring_ranges("ab", "abc").is_empty());
    }

    #[test]
    fn coalesces_runs() {
        assert_eq!(coalesce_indices(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_indices(&[]).is_empty());
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Zürich Büro", 8), "Züric...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn clipping_drops_hidden_ranges() {
        assert_eq!(clip_ranges(vec![(0, 2), (4, 9), (12, 14)], 8), vec![(0, 2), (4, 8)]);
    }
}
