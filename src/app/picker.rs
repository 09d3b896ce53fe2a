//! Facet picker state.
//!
//! The picker lists every value a facet can take and narrows the list with
//! skim-style fuzzy matching as the user types. Selection state is not kept
//! here; checked values are read back from the current search criteria so the
//! picker can never disagree with the filter that is actually applied.

use crate::search::Facet;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Reverse;

/// One visible picker entry with the character indices that matched the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerMatch {
    pub label: String,
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub facet: Facet,
    pub filter: String,
    pub cursor: usize,
    options: Vec<String>,
    matches: Vec<PickerMatch>,
}

impl PickerState {
    #[must_use]
    pub fn new(facet: Facet, options: Vec<String>) -> Self {
        let mut picker = Self {
            facet,
            filter: String::new(),
            cursor: 0,
            options,
            matches: Vec::new(),
        };
        picker.refilter();
        picker
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.filter.pop().is_some() {
            self.refilter();
        }
    }

    pub fn move_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
    }

    pub fn move_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.matches.len() - 1);
    }

    /// Label under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.matches.get(self.cursor).map(|m| m.label.as_str())
    }

    #[must_use]
    pub fn matches(&self) -> &[PickerMatch] {
        &self.matches
    }

    /// Recomputes visible entries; best fuzzy score first, ties in option order.
    fn refilter(&mut self) {
        let _span = tracing::trace_span!(
            "picker_refilter",
            facet = ?self.facet,
            filter_len = self.filter.len()
        )
        .entered();

        if self.filter.is_empty() {
            self.matches = self
                .options
                .iter()
                .map(|label| PickerMatch {
                    label: label.clone(),
                    indices: Vec::new(),
                })
                .collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, PickerMatch)> = self
                .options
                .iter()
                .filter_map(|label| {
                    matcher
                        .fuzzy_indices(label, &self.filter)
                        .map(|(score, indices)| {
                            (
                                score,
                                PickerMatch {
                                    label: label.clone(),
                                    indices,
                                },
                            )
                        })
                })
                .collect();
            scored.sort_by_key(|(score, _)| Reverse(*score));
            self.matches = scored.into_iter().map(|(_, m)| m).collect();
        }

        if self.cursor >= self.matches.len() {
            self.cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> Vec<String> {
        ["Python", "TypeScript", "React", "PostgreSQL"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_filter_lists_everything_in_order() {
        let picker = PickerState::new(Facet::Skills, skills());
        let labels: Vec<&str> = picker.matches().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Python", "TypeScript", "React", "PostgreSQL"]);
        assert_eq!(picker.current(), Some("Python"));
    }

    #[test]
    fn typing_narrows_and_backspace_restores() {
        let mut picker = PickerState::new(Facet::Skills, skills());
        for c in "pyt".chars() {
            picker.push_char(c);
        }
        assert_eq!(picker.matches().len(), 1);
        assert_eq!(picker.current(), Some("Python"));
        assert_eq!(picker.matches()[0].indices, vec![0, 1, 2]);

        picker.pop_char();
        picker.pop_char();
        picker.pop_char();
        assert_eq!(picker.matches().len(), 4);
    }

    #[test]
    fn cursor_wraps() {
        let mut picker = PickerState::new(Facet::Skills, skills());
        picker.move_up();
        assert_eq!(picker.current(), Some("PostgreSQL"));
        picker.move_down();
        assert_eq!(picker.current(), Some("Python"));
    }

    #[test]
    fn no_match_leaves_nothing_selected() {
        let mut picker = PickerState::new(Facet::Skills, skills());
        picker.push_char('z');
        picker.push_char('z');
        assert!(picker.matches().is_empty());
        assert_eq!(picker.current(), None);
        picker.move_down();
        assert_eq!(picker.cursor, 0);
    }
}
