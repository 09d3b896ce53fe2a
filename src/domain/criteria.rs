//! Filter criteria and partial updates.
//!
//! Every facet is an explicit `Option`; `None` means "no constraint". A few
//! present values are also treated as no-ops by the engine: empty strings and
//! lists, the `"all"` sentinel for location and category, `Some(false)` for the
//! boolean flags, and a salary bound of zero. [`SearchCriteria::is_active`]
//! applies the same rules so the UI and the engine agree on what "filtered"
//! means.

use super::job::WorkMode;

/// Sentinel accepted by the location and category facets meaning "any".
pub const ALL_SENTINEL: &str = "all";

/// Current set of facet constraints applied to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub skills: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub work_mode: Option<WorkMode>,
    pub verified_only: Option<bool>,
    pub featured_only: Option<bool>,
}

/// A partial change to [`SearchCriteria`].
///
/// Only fields set to `Some(..)` are merged; the inner value replaces the
/// current one, so `location: Some(None)` removes the location constraint
/// while `location: None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::option_option)]
pub struct CriteriaUpdate {
    pub query: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub skills: Option<Option<Vec<String>>>,
    pub benefits: Option<Option<Vec<String>>>,
    pub min_salary: Option<Option<u64>>,
    pub max_salary: Option<Option<u64>>,
    pub work_mode: Option<Option<WorkMode>>,
    pub verified_only: Option<Option<bool>>,
    pub featured_only: Option<Option<bool>>,
}

impl CriteriaUpdate {
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(Some(query.into())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn location(location: Option<String>) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(category: Option<String>) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn skills(skills: Vec<String>) -> Self {
        Self {
            skills: Some(Some(skills)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn benefits(benefits: Vec<String>) -> Self {
        Self {
            benefits: Some(Some(benefits)),
            ..Self::default()
        }
    }

    /// Sets both salary bounds at once; `None` clears the salary constraint.
    #[must_use]
    pub fn salary(range: Option<(u64, u64)>) -> Self {
        Self {
            min_salary: Some(range.map(|(min, _)| min)),
            max_salary: Some(range.map(|(_, max)| max)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn work_mode(mode: Option<WorkMode>) -> Self {
        Self {
            work_mode: Some(mode),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn verified_only(on: bool) -> Self {
        Self {
            verified_only: Some(Some(on)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn featured_only(on: bool) -> Self {
        Self {
            featured_only: Some(Some(on)),
            ..Self::default()
        }
    }
}

impl SearchCriteria {
    /// Merges a partial update; only provided keys change.
    pub fn merge(&mut self, update: CriteriaUpdate) {
        let CriteriaUpdate {
            query,
            location,
            category,
            skills,
            benefits,
            min_salary,
            max_salary,
            work_mode,
            verified_only,
            featured_only,
        } = update;

        if let Some(v) = query {
            self.query = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = skills {
            self.skills = v;
        }
        if let Some(v) = benefits {
            self.benefits = v;
        }
        if let Some(v) = min_salary {
            self.min_salary = v;
        }
        if let Some(v) = max_salary {
            self.max_salary = v;
        }
        if let Some(v) = work_mode {
            self.work_mode = v;
        }
        if let Some(v) = verified_only {
            self.verified_only = v;
        }
        if let Some(v) = featured_only {
            self.featured_only = v;
        }
    }

    /// Trimmed, lowercased query if it constrains anything.
    #[must_use]
    pub fn active_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Lowercased location if it constrains anything.
    #[must_use]
    pub fn active_location(&self) -> Option<String> {
        active_choice(self.location.as_deref())
    }

    /// Lowercased category if it constrains anything.
    #[must_use]
    pub fn active_category(&self) -> Option<String> {
        active_choice(self.category.as_deref())
    }

    /// Lowercased requested skills if the list is non-empty.
    #[must_use]
    pub fn active_skills(&self) -> Option<Vec<String>> {
        active_list(self.skills.as_deref())
    }

    /// Lowercased requested benefits if the list is non-empty.
    #[must_use]
    pub fn active_benefits(&self) -> Option<Vec<String>> {
        active_list(self.benefits.as_deref())
    }

    /// Non-zero salary bounds, if either is set.
    #[must_use]
    pub fn active_salary(&self) -> Option<(Option<u64>, Option<u64>)> {
        let min = self.min_salary.filter(|v| *v > 0);
        let max = self.max_salary.filter(|v| *v > 0);
        if min.is_none() && max.is_none() {
            None
        } else {
            Some((min, max))
        }
    }

    #[must_use]
    pub fn verified_required(&self) -> bool {
        self.verified_only == Some(true)
    }

    #[must_use]
    pub fn featured_required(&self) -> bool {
        self.featured_only == Some(true)
    }

    /// Returns `true` if any facet actively constrains the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_query().is_some()
            || self.active_location().is_some()
            || self.active_category().is_some()
            || self.active_skills().is_some()
            || self.active_benefits().is_some()
            || self.active_salary().is_some()
            || self.work_mode.is_some()
            || self.verified_required()
            || self.featured_required()
    }
}

fn active_choice(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_SENTINEL))
        .map(str::to_lowercase)
}

fn active_list(values: Option<&[String]>) -> Option<Vec<String>> {
    values
        .filter(|v| !v.is_empty())
        .map(|v| v.iter().map(|s| s.to_lowercase()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_provided_keys() {
        let mut criteria = SearchCriteria {
            query: Some("rust".to_string()),
            category: Some("Engineering".to_string()),
            ..SearchCriteria::default()
        };

        criteria.merge(CriteriaUpdate::location(Some("Europe".to_string())));

        assert_eq!(criteria.query.as_deref(), Some("rust"));
        assert_eq!(criteria.category.as_deref(), Some("Engineering"));
        assert_eq!(criteria.location.as_deref(), Some("Europe"));

        criteria.merge(CriteriaUpdate::category(None));
        assert!(criteria.category.is_none());
        assert_eq!(criteria.location.as_deref(), Some("Europe"));
    }

    #[test]
    fn sentinels_and_empty_values_are_inactive() {
        let criteria = SearchCriteria {
            query: Some("   ".to_string()),
            location: Some("ALL".to_string()),
            category: Some(String::new()),
            skills: Some(vec![]),
            benefits: Some(vec![]),
            min_salary: Some(0),
            verified_only: Some(false),
            featured_only: Some(false),
            ..SearchCriteria::default()
        };
        assert!(!criteria.is_active());
    }

    #[test]
    fn benefits_alone_make_criteria_active() {
        let criteria = SearchCriteria {
            benefits: Some(vec!["Equity".to_string()]),
            ..SearchCriteria::default()
        };
        assert!(criteria.is_active());
    }

    #[test]
    fn salary_update_sets_and_clears_both_bounds() {
        let mut criteria = SearchCriteria::default();
        criteria.merge(CriteriaUpdate::salary(Some((50_000, 80_000))));
        assert_eq!(criteria.active_salary(), Some((Some(50_000), Some(80_000))));

        criteria.merge(CriteriaUpdate::salary(None));
        assert_eq!(criteria.active_salary(), None);
    }
}
