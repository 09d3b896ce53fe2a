//! Search-as-you-type suggestions.

use crate::domain::Job;

/// Queries shorter than this (in characters) produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

const MAX_TITLES: usize = 3;
const MAX_COMPANIES: usize = 3;
const MAX_SKILLS: usize = 4;

/// Builds suggestions for a raw query.
///
/// Takes up to three matching titles, three matching companies and four
/// matching skills (case-insensitive substring), in that order, drops
/// duplicates keeping the first occurrence and truncates to
/// [`MAX_SUGGESTIONS`].
///
/// ```
/// use jobdeck::catalog::Catalog;
/// use jobdeck::search::suggestions;
///
/// let catalog = Catalog::builtin();
/// assert!(suggestions("r", catalog.jobs()).is_empty());
/// assert_eq!(suggestions("kube", catalog.jobs()), vec!["Kubernetes"]);
/// ```
#[must_use]
pub fn suggestions(query: &str, jobs: &[Job]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches = |text: &&String| text.to_lowercase().contains(&needle);

    let titles = jobs.iter().map(|job| &job.title).filter(matches).take(MAX_TITLES);
    let companies = jobs.iter().map(|job| &job.company).filter(matches).take(MAX_COMPANIES);
    let skills = jobs
        .iter()
        .flat_map(|job| job.skills.iter())
        .filter(matches)
        .take(MAX_SKILLS);

    let mut out: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for candidate in titles.chain(companies).chain(skills) {
        if !out.iter().any(|existing| existing == candidate) {
            out.push(candidate.clone());
        }
    }
    out.truncate(MAX_SUGGESTIONS);

    tracing::trace!(query_len = query.len(), suggestion_count = out.len(), "suggestions computed");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn short_queries_yield_nothing() {
        let catalog = Catalog::builtin();
        assert!(suggestions("", catalog.jobs()).is_empty());
        assert!(suggestions("e", catalog.jobs()).is_empty());
    }

    #[test]
    fn groups_are_capped_and_ordered() {
        let catalog = Catalog::builtin();
        let got = suggestions("de", catalog.jobs());

        assert_eq!(
            got,
            vec![
                "Senior Full-Stack Developer",
                "Product Designer",
                "DevOps Engineer",
                "DesignLab",
                "Node.js",
                "Team Leadership",
                "Deep Learning",
            ]
        );
    }

    #[test]
    fn duplicates_across_groups_are_dropped() {
        let catalog = Catalog::builtin();
        let got = suggestions("analytics", catalog.jobs());
        assert_eq!(got, vec!["Analytics"]);
    }

    #[test]
    fn never_more_than_eight() {
        let catalog = Catalog::builtin();
        let got = suggestions("e ", catalog.jobs());
        assert!(got.len() <= MAX_SUGGESTIONS);
    }
}
