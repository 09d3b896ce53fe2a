//! Search state controller.
//!
//! [`SearchController`] owns the current criteria and the result derived
//! from them. Every mutation merges into the criteria and, when the merged
//! value actually changed, re-runs the engine over the immutable catalog.
//! Callers use the returned flag the same way the event handler uses its
//! `should_render` bool.

use super::engine::{search, SearchResult};
use super::options::{derive_options, FilterOptions};
use crate::catalog::Catalog;
use crate::domain::{CriteriaUpdate, SearchCriteria};

#[derive(Debug, Clone)]
pub struct SearchController {
    catalog: Catalog,
    options: FilterOptions,
    criteria: SearchCriteria,
    result: SearchResult,
}

impl SearchController {
    /// Creates a controller with default criteria over `catalog`.
    ///
    /// ```
    /// use jobdeck::catalog::Catalog;
    /// use jobdeck::domain::CriteriaUpdate;
    /// use jobdeck::search::SearchController;
    ///
    /// let mut controller = SearchController::new(Catalog::builtin());
    /// assert!(!controller.has_active_filters());
    ///
    /// controller.update(CriteriaUpdate::query("designer"));
    /// assert_eq!(controller.result().filtered_count, 1);
    ///
    /// controller.clear();
    /// assert_eq!(controller.result().filtered_count, 20);
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_criteria(catalog, SearchCriteria::default())
    }

    /// Creates a controller starting from `criteria`.
    #[must_use]
    pub fn with_criteria(catalog: Catalog, criteria: SearchCriteria) -> Self {
        let options = derive_options(catalog.jobs());
        let result = search(catalog.jobs(), &criteria);
        Self {
            catalog,
            options,
            criteria,
            result,
        }
    }

    /// Merges `update` into the criteria.
    ///
    /// Returns `true` if the criteria changed and the result was recomputed.
    pub fn update(&mut self, update: CriteriaUpdate) -> bool {
        let mut next = self.criteria.clone();
        next.merge(update);
        self.replace(next)
    }

    /// Resets every criterion to its default.
    pub fn clear(&mut self) -> bool {
        tracing::debug!("clearing search criteria");
        self.replace(SearchCriteria::default())
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.update(CriteriaUpdate::query(query))
    }

    fn replace(&mut self, next: SearchCriteria) -> bool {
        if next == self.criteria {
            tracing::trace!("criteria unchanged, skipping recompute");
            return false;
        }
        self.criteria = next;
        self.result = search(self.catalog.jobs(), &self.criteria);
        true
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.filtered_count == 0
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn result(&self) -> &SearchResult {
        &self.result
    }

    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SalaryRange, WorkMode};

    #[test]
    fn starts_with_full_catalog() {
        let controller = SearchController::new(Catalog::builtin());
        assert_eq!(controller.result().filtered_count, 20);
        assert!(!controller.is_empty());
        assert!(!controller.has_active_filters());
    }

    #[test]
    fn unchanged_update_does_not_recompute() {
        let mut controller = SearchController::new(Catalog::builtin());
        assert!(controller.set_query("python"));
        assert!(!controller.set_query("python"));
        assert!(!controller.update(CriteriaUpdate::default()));
    }

    #[test]
    fn clear_is_idempotent_and_restores_catalog() {
        let mut controller = SearchController::new(Catalog::builtin());
        controller.update(CriteriaUpdate::work_mode(Some(WorkMode::Onsite)));
        controller.update(CriteriaUpdate::skills(vec!["rust".to_string()]));
        assert!(controller.is_empty());
        assert!(controller.has_active_filters());

        assert!(controller.clear());
        assert_eq!(controller.result().filtered_count, 20);
        assert!(!controller.clear());
        assert_eq!(controller.result().jobs, controller.catalog().jobs());
    }

    #[test]
    fn facets_narrow_step_by_step() {
        let mut controller = SearchController::new(Catalog::builtin());
        controller.update(CriteriaUpdate::category(Some("Engineering".to_string())));
        assert_eq!(controller.result().filtered_count, 4);

        controller.update(CriteriaUpdate::verified_only(true));
        let titles: Vec<&str> = controller.result().jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Senior Full-Stack Developer"]);

        controller.update(CriteriaUpdate::work_mode(Some(WorkMode::Hybrid)));
        assert!(controller.is_empty());
    }

    #[test]
    fn benefits_combine_with_location() {
        let mut controller = SearchController::new(Catalog::builtin());
        controller.update(CriteriaUpdate::location(Some("Europe".to_string())));
        controller.update(CriteriaUpdate::benefits(vec!["learning".to_string()]));

        let titles: Vec<&str> = controller.result().jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Project Manager", "Machine Learning Engineer"]);
    }

    #[test]
    fn min_salary_keeps_high_and_unparseable_ranges() {
        let mut controller = SearchController::new(Catalog::builtin());
        controller.update(CriteriaUpdate {
            min_salary: Some(Some(150_000)),
            ..CriteriaUpdate::default()
        });

        assert!(!controller.is_empty());
        for job in &controller.result().jobs {
            if let SalaryRange::Parsed { max, .. } = job.salary_range() {
                assert!(max >= 150_000, "{}", job.title);
            }
        }
    }

    #[test]
    fn options_come_from_catalog() {
        let controller = SearchController::new(Catalog::builtin());
        assert!(controller.options().categories.contains(&"QA".to_string()));
    }
}
