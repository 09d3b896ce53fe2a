//! Facet option derivation.
//!
//! Pickers offer only values that actually occur in the catalog. Each list is
//! de-duplicated and sorted; salary bands are a fixed table rather than
//! derived from data.

use super::engine::count_matches;
use crate::domain::{Job, SearchCriteria, WorkMode};
use std::collections::BTreeSet;

/// Coarse salary range offered by the salary picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub label: &'static str,
    pub min: u64,
    pub max: u64,
}

/// The five fixed salary bands.
pub const SALARY_BANDS: [SalaryBand; 5] = [
    SalaryBand { label: "$0 - $50k", min: 0, max: 50_000 },
    SalaryBand { label: "$50k - $80k", min: 50_000, max: 80_000 },
    SalaryBand { label: "$80k - $120k", min: 80_000, max: 120_000 },
    SalaryBand { label: "$120k - $150k", min: 120_000, max: 150_000 },
    SalaryBand { label: "$150k+", min: 150_000, max: 999_999 },
];

/// A filterable dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Location,
    Category,
    Skills,
    Benefits,
    Salary,
    WorkMode,
}

impl Facet {
    /// Heading used by the picker.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Category => "Category",
            Self::Skills => "Skills",
            Self::Benefits => "Benefits",
            Self::Salary => "Salary",
            Self::WorkMode => "Work Mode",
        }
    }

    /// Whether several values can be selected at once.
    #[must_use]
    pub const fn is_multi_select(self) -> bool {
        matches!(self, Self::Skills | Self::Benefits)
    }
}

/// Distinct facet values present in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    pub skills: Vec<String>,
    pub types: Vec<WorkMode>,
    pub benefits: Vec<String>,
    pub salary_ranges: Vec<SalaryBand>,
}

impl FilterOptions {
    /// Labels offered for `facet`, in picker order.
    #[must_use]
    pub fn labels(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Location => self.locations.clone(),
            Facet::Category => self.categories.clone(),
            Facet::Skills => self.skills.clone(),
            Facet::Benefits => self.benefits.clone(),
            Facet::Salary => self.salary_ranges.iter().map(|b| b.label.to_string()).collect(),
            Facet::WorkMode => self.types.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Derives the facet values observed across `jobs`.
///
/// ```
/// use jobdeck::catalog::Catalog;
/// use jobdeck::search::derive_options;
///
/// let options = derive_options(Catalog::builtin().jobs());
/// assert_eq!(options.locations.first().map(String::as_str), Some("Americas"));
/// assert_eq!(options.salary_ranges.len(), 5);
/// ```
#[must_use]
pub fn derive_options(jobs: &[Job]) -> FilterOptions {
    let _span = tracing::debug_span!("derive_options", total_jobs = jobs.len()).entered();

    FilterOptions {
        locations: sorted_distinct(jobs.iter().map(|job| job.location.as_str())),
        categories: sorted_distinct(jobs.iter().map(|job| job.category.as_str())),
        skills: sorted_distinct(jobs.iter().flat_map(|job| job.skills.iter().map(String::as_str))),
        types: sorted_work_modes(jobs),
        benefits: sorted_distinct(
            jobs.iter()
                .flat_map(|job| job.benefit_tags().iter().map(String::as_str)),
        ),
        salary_ranges: SALARY_BANDS.to_vec(),
    }
}

/// Number of jobs [`search`](super::search) keeps when `value` is the only
/// constraint on `facet`.
///
/// Used for the counts shown beside picker entries, so a count is always the
/// size of the result the entry selects. A label that is not a salary band or
/// work mode counts zero.
///
/// ```
/// use jobdeck::catalog::Catalog;
/// use jobdeck::search::{option_count, Facet};
///
/// // "SQL" also matches "PostgreSQL".
/// assert_eq!(option_count(Catalog::builtin().jobs(), Facet::Skills, "SQL"), 2);
/// ```
#[must_use]
pub fn option_count(jobs: &[Job], facet: Facet, value: &str) -> usize {
    single_option_criteria(facet, value).map_or(0, |criteria| count_matches(jobs, &criteria))
}

/// Criteria holding `value` as the sole constraint on `facet`, the way the
/// picker sets it.
fn single_option_criteria(facet: Facet, value: &str) -> Option<SearchCriteria> {
    let mut criteria = SearchCriteria::default();
    match facet {
        Facet::Location => criteria.location = Some(value.to_string()),
        Facet::Category => criteria.category = Some(value.to_string()),
        Facet::Skills => criteria.skills = Some(vec![value.to_string()]),
        Facet::Benefits => criteria.benefits = Some(vec![value.to_string()]),
        Facet::WorkMode => criteria.work_mode = Some(WorkMode::parse(value)?),
        Facet::Salary => {
            let band = SALARY_BANDS.iter().find(|band| band.label == value)?;
            criteria.min_salary = Some(band.min);
            criteria.max_salary = Some(band.max);
        }
    }
    Some(criteria)
}

/// Distinct work modes sorted by their label, like every other facet list.
fn sorted_work_modes(jobs: &[Job]) -> Vec<WorkMode> {
    let mut modes: Vec<WorkMode> = jobs
        .iter()
        .map(|job| job.work_mode)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    modes.sort_by_key(|mode| mode.as_str());
    modes
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn assert_sorted_unique(values: &[String]) {
        let mut expected = values.to_vec();
        expected.sort();
        expected.dedup();
        assert_eq!(values, expected.as_slice());
    }

    #[test]
    fn lists_are_sorted_and_unique() {
        let options = derive_options(Catalog::builtin().jobs());
        assert_sorted_unique(&options.locations);
        assert_sorted_unique(&options.categories);
        assert_sorted_unique(&options.skills);
        assert_sorted_unique(&options.benefits);

        assert_eq!(
            options.locations,
            vec!["Americas", "Asia Pacific", "Europe", "United States", "Worldwide"]
        );
        assert_eq!(options.types, vec![WorkMode::Hybrid, WorkMode::Onsite, WorkMode::Remote]);
    }

    #[test]
    fn skills_and_benefits_are_flattened() {
        let options = derive_options(Catalog::builtin().jobs());
        assert_eq!(options.skills.iter().filter(|s| *s == "Analytics").count(), 1);
        assert!(options.benefits.contains(&"Health Insurance".to_string()));
    }

    #[test]
    fn empty_catalog_still_has_salary_bands() {
        let options = derive_options(&[]);
        assert!(options.locations.is_empty());
        assert_eq!(options.salary_ranges, SALARY_BANDS.to_vec());
    }

    #[test]
    fn option_counts() {
        let catalog = Catalog::builtin();
        let jobs = catalog.jobs();
        assert_eq!(option_count(jobs, Facet::Location, "Europe"), 5);
        assert_eq!(option_count(jobs, Facet::Skills, "Analytics"), 3);
        assert_eq!(option_count(jobs, Facet::Benefits, "Health Insurance"), 4);
        assert_eq!(option_count(jobs, Facet::WorkMode, "onsite"), 1);
        assert_eq!(option_count(jobs, Facet::Salary, "$0 - $50k"), 2);
        assert_eq!(option_count(jobs, Facet::Skills, "SEO"), 2);
        assert_eq!(option_count(jobs, Facet::Salary, "$1M+"), 0);
    }

    #[test]
    fn every_option_count_matches_its_filtered_result() {
        let catalog = Catalog::builtin();
        let jobs = catalog.jobs();
        let options = derive_options(jobs);
        let facets = [
            Facet::Location,
            Facet::Category,
            Facet::Skills,
            Facet::Benefits,
            Facet::Salary,
            Facet::WorkMode,
        ];

        for facet in facets {
            for label in options.labels(facet) {
                let criteria = single_option_criteria(facet, &label)
                    .unwrap_or_else(|| panic!("{label:?} should select {facet:?}"));
                assert_eq!(
                    option_count(jobs, facet, &label),
                    crate::search::search(jobs, &criteria).filtered_count,
                    "{facet:?} {label:?}"
                );
            }
        }
    }
}
