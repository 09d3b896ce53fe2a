//! Job catalog: the immutable collection of postings the plugin browses.
//!
//! The catalog is loaded once at startup, either from the built-in data set
//! (`data/jobs.json`, embedded at compile time) or from a user-supplied JSON
//! file, and never changes afterwards. All search and facet computations read
//! from it.
//!
//! # Modules
//!
//! - [`json`]: Loading and validating catalog JSON

pub mod json;

use crate::domain::Job;

/// Built-in catalog data.
const BUILTIN_CATALOG: &str = include_str!("../../data/jobs.json");

/// Search terms offered as hints while the search bar is empty.
const POPULAR_SEARCH_TERMS: [&str; 8] = [
    "React",
    "Node.js",
    "Python",
    "Senior",
    "Manager",
    "Designer",
    "Developer",
    "Engineer",
];

/// Default number of entries returned by [`Catalog::popular_skills`].
pub const POPULAR_SKILLS_LIMIT: usize = 10;

/// Immutable, id-unique collection of job postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    /// Returns the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        json::parse(BUILTIN_CATALOG).expect("Built-in job catalog should always parse")
    }

    /// All jobs in catalog order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs explicitly marked as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<&Job> {
        self.jobs.iter().filter(|job| job.featured()).collect()
    }

    /// Jobs whose category equals `category` exactly.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Job> {
        self.jobs.iter().filter(|job| job.category == category).collect()
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Most frequent skills across the catalog, most common first.
    ///
    /// Skills with equal counts keep the order in which they first appear.
    #[must_use]
    pub fn popular_skills(&self, limit: usize) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for skill in self.jobs.iter().flat_map(|job| job.skills.iter()) {
            match counts.iter_mut().find(|(name, _)| *name == skill.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((skill.as_str(), 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(limit)
            .map(|(skill, _)| skill.to_string())
            .collect()
    }

    #[must_use]
    pub fn popular_search_terms() -> &'static [&'static str] {
        &POPULAR_SEARCH_TERMS
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_twenty_unique_jobs() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 20);

        let mut ids: Vec<&str> = catalog.jobs().iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn featured_jobs() {
        let catalog = Catalog::builtin();
        let titles: Vec<&str> = catalog.featured().iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Senior Full-Stack Developer", "Project Manager", "Growth Hacker"]
        );
    }

    #[test]
    fn category_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_category("Engineering").len(), 4);
        assert!(catalog.by_category("engineering").is_empty());
    }

    #[test]
    fn id_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_id("9").map(|j| j.title.as_str()), Some("iOS Developer"));
        assert!(catalog.by_id("404").is_none());
    }

    #[test]
    fn popular_skills_rank_by_count_then_first_seen() {
        let catalog = Catalog::builtin();
        let popular = catalog.popular_skills(3);
        assert_eq!(popular, vec!["Analytics", "Python", "CRM"]);
    }
}
