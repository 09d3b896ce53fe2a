//! Multi-facet filtering over the catalog.
//!
//! [`search`] narrows the job list facet by facet. Facets combine with AND;
//! values inside a multi-value facet (skills, benefits) combine with OR.
//! Filtering never reorders, so results keep catalog order.

use crate::domain::{Job, SearchCriteria};

/// Filtered jobs plus the counts needed for an "N of M" display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub jobs: Vec<Job>,
    pub total_count: usize,
    pub filtered_count: usize,
}

/// Applies `criteria` to `jobs`.
///
/// # Example
///
/// ```
/// use jobdeck::catalog::Catalog;
/// use jobdeck::domain::SearchCriteria;
/// use jobdeck::search::search;
///
/// let catalog = Catalog::builtin();
/// let criteria = SearchCriteria {
///     skills: Some(vec!["react".to_string()]),
///     ..SearchCriteria::default()
/// };
/// let result = search(catalog.jobs(), &criteria);
/// assert_eq!(result.filtered_count, 1);
/// assert_eq!(result.total_count, 20);
/// ```
#[must_use]
pub fn search(jobs: &[Job], criteria: &SearchCriteria) -> SearchResult {
    let filter = CompiledFilter::new(criteria);

    let _span = tracing::debug_span!(
        "search",
        total_jobs = jobs.len(),
        active = criteria.is_active()
    )
    .entered();

    let matched: Vec<Job> = jobs
        .iter()
        .filter(|job| filter.matches(job))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = matched.len(), "search filter applied");

    SearchResult {
        filtered_count: matched.len(),
        total_count: jobs.len(),
        jobs: matched,
    }
}

/// Number of `jobs` that `criteria` keeps, without cloning them.
pub(crate) fn count_matches(jobs: &[Job], criteria: &SearchCriteria) -> usize {
    let filter = CompiledFilter::new(criteria);
    jobs.iter().filter(|job| filter.matches(job)).count()
}

/// Criteria normalized once per search so each job check is a plain comparison.
struct CompiledFilter {
    query: Option<String>,
    location: Option<String>,
    category: Option<String>,
    skills: Option<Vec<String>>,
    benefits: Option<Vec<String>>,
    work_mode: Option<crate::domain::WorkMode>,
    verified: bool,
    featured: bool,
    salary: Option<(Option<u64>, Option<u64>)>,
}

impl CompiledFilter {
    fn new(criteria: &SearchCriteria) -> Self {
        Self {
            query: criteria.active_query(),
            location: criteria.active_location(),
            category: criteria.active_category(),
            skills: criteria.active_skills(),
            benefits: criteria.active_benefits(),
            work_mode: criteria.work_mode,
            verified: criteria.verified_required(),
            featured: criteria.featured_required(),
            salary: criteria.active_salary(),
        }
    }

    fn matches(&self, job: &Job) -> bool {
        self.matches_query(job)
            && self.matches_location(job)
            && self.matches_category(job)
            && self.skills.as_deref().map_or(true, |wanted| any_tag_matches(wanted, &job.skills))
            && self
                .benefits
                .as_deref()
                .map_or(true, |wanted| any_tag_matches(wanted, job.benefit_tags()))
            && self.work_mode.map_or(true, |mode| job.work_mode == mode)
            && (!self.verified || job.verified())
            && (!self.featured || job.featured())
            && self.matches_salary(job)
    }

    fn matches_query(&self, job: &Job) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };

        contains_lower(&job.title, query)
            || contains_lower(&job.company, query)
            || job.skills.iter().any(|skill| contains_lower(skill, query))
            || contains_lower(&job.category, query)
    }

    fn matches_location(&self, job: &Job) -> bool {
        self.location
            .as_deref()
            .map_or(true, |location| contains_lower(&job.location, location))
    }

    fn matches_category(&self, job: &Job) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| job.category.to_lowercase() == category)
    }

    fn matches_salary(&self, job: &Job) -> bool {
        self.salary
            .map_or(true, |(min, max)| job.salary_range().overlaps(min, max))
    }
}

/// `needle` must already be lowercase.
fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True if any wanted tag (lowercase) is a substring of any of the job's tags.
fn any_tag_matches(wanted: &[String], tags: &[String]) -> bool {
    wanted
        .iter()
        .any(|want| tags.iter().any(|tag| contains_lower(tag, want)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::WorkMode;

    fn titles(result: &SearchResult) -> Vec<&str> {
        result.jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_full_catalog() {
        let catalog = Catalog::builtin();
        let result = search(catalog.jobs(), &SearchCriteria::default());
        assert_eq!(result.filtered_count, result.total_count);
        assert_eq!(result.jobs, catalog.jobs());
    }

    #[test]
    fn query_matches_title_company_category_and_skills() {
        let catalog = Catalog::builtin();

        let by_company = SearchCriteria {
            query: Some("  cloudnine ".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(titles(&search(catalog.jobs(), &by_company)), vec!["DevOps Engineer"]);

        let by_skill = SearchCriteria {
            query: Some("KUBERNETES".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(titles(&search(catalog.jobs(), &by_skill)), vec!["DevOps Engineer"]);

        let by_category = SearchCriteria {
            query: Some("blockchain".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(titles(&search(catalog.jobs(), &by_category)), vec!["Blockchain Developer"]);
    }

    #[test]
    fn every_title_substring_finds_its_job() {
        let catalog = Catalog::builtin();
        for job in catalog.jobs() {
            let chars: Vec<char> = job.title.chars().collect();
            let middle: String = chars[1..chars.len().min(6)].iter().collect();
            let criteria = SearchCriteria {
                query: Some(middle.to_uppercase()),
                ..SearchCriteria::default()
            };
            let result = search(catalog.jobs(), &criteria);
            assert!(
                result.jobs.iter().any(|j| j.id == job.id),
                "query {middle:?} lost job {}",
                job.id
            );
        }
    }

    #[test]
    fn location_is_substring_and_all_is_ignored() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            location: Some("united".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &criteria).filtered_count, 3);

        let all = SearchCriteria {
            location: Some("All".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &all).filtered_count, 20);
    }

    #[test]
    fn category_is_case_insensitive_exact() {
        let catalog = Catalog::builtin();
        let exact = SearchCriteria {
            category: Some("engineering".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &exact).filtered_count, 4);

        let partial = SearchCriteria {
            category: Some("engineer".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &partial).filtered_count, 0);
    }

    #[test]
    fn react_skill_matches_one_job() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            skills: Some(vec!["React".to_string()]),
            ..SearchCriteria::default()
        };
        assert_eq!(
            titles(&search(catalog.jobs(), &criteria)),
            vec!["Senior Full-Stack Developer"]
        );
    }

    #[test]
    fn skills_are_or_within_facet() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            skills: Some(vec!["swift".to_string(), "solidity".to_string()]),
            ..SearchCriteria::default()
        };
        assert_eq!(
            titles(&search(catalog.jobs(), &criteria)),
            vec!["iOS Developer", "Blockchain Developer"]
        );
    }

    #[test]
    fn benefits_treat_missing_list_as_empty() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            benefits: Some(vec!["pto".to_string()]),
            ..SearchCriteria::default()
        };
        assert_eq!(
            titles(&search(catalog.jobs(), &criteria)),
            vec!["Data Scientist", "Machine Learning Engineer"]
        );
    }

    #[test]
    fn facets_combine_with_and() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            location: Some("Worldwide".to_string()),
            category: Some("Engineering".to_string()),
            verified_only: Some(true),
            ..SearchCriteria::default()
        };
        assert_eq!(
            titles(&search(catalog.jobs(), &criteria)),
            vec!["Senior Full-Stack Developer"]
        );
    }

    #[test]
    fn work_mode_and_flags() {
        let catalog = Catalog::builtin();
        let hybrid = SearchCriteria {
            work_mode: Some(WorkMode::Hybrid),
            ..SearchCriteria::default()
        };
        assert_eq!(titles(&search(catalog.jobs(), &hybrid)), vec!["iOS Developer"]);

        let featured = SearchCriteria {
            featured_only: Some(true),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &featured).filtered_count, 3);

        let not_required = SearchCriteria {
            verified_only: Some(false),
            ..SearchCriteria::default()
        };
        assert_eq!(search(catalog.jobs(), &not_required).filtered_count, 20);
    }

    #[test]
    fn min_salary_excludes_lower_ranges_but_keeps_unparseable() {
        let mut jobs = Catalog::builtin().jobs().to_vec();
        let mut odd = jobs[0].clone();
        odd.id = "odd".to_string();
        odd.salary = "Competitive".to_string();
        jobs.push(odd);

        let criteria = SearchCriteria {
            min_salary: Some(150_000),
            ..SearchCriteria::default()
        };
        let result = search(&jobs, &criteria);
        let ids: Vec<&str> = result.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["15", "odd"]);
    }

    #[test]
    fn salary_band_keeps_overlapping_ranges() {
        let catalog = Catalog::builtin();
        let criteria = SearchCriteria {
            min_salary: Some(0),
            max_salary: Some(50_000),
            ..SearchCriteria::default()
        };
        assert_eq!(
            titles(&search(catalog.jobs(), &criteria)),
            vec!["Content Writer", "Sales Development Representative"]
        );
    }
}
