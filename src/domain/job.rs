//! Job domain model.
//!
//! A [`Job`] is one posting in the catalog. Records are deserialized from the
//! catalog JSON using camelCase keys, so a built-in or user-supplied catalog
//! looks like:
//!
//! ```json
//! {
//!   "id": "1",
//!   "title": "Senior Full-Stack Developer",
//!   "company": "TechFlow",
//!   "location": "Worldwide",
//!   "salary": "$80k - $120k",
//!   "skills": ["React", "Node.js"],
//!   "timeAgo": "2h",
//!   "isVerified": true,
//!   "type": "remote",
//!   "category": "Engineering"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::salary::SalaryRange;

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    /// All work modes in display order.
    pub const ALL: [Self; 3] = [Self::Remote, Self::Hybrid, Self::Onsite];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Onsite => "onsite",
        }
    }

    /// Parses a work mode label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job posting.
///
/// # Fields
///
/// - `id`: Unique identifier within a catalog
/// - `location`: Free-text region ("Worldwide", "Europe"), not geocoded
/// - `salary`: Free-text range such as `"$80k - $120k"`, see [`Job::salary_range`]
/// - `time_ago`: Pre-formatted relative age label ("2h", "1w")
/// - `work_mode`: Serialized under the `type` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub time_ago: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(rename = "type")]
    pub work_mode: WorkMode,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Job {
    /// Returns `true` only when the posting is explicitly marked verified.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.is_verified == Some(true)
    }

    /// Returns `true` only when the posting is explicitly marked featured.
    #[must_use]
    pub fn featured(&self) -> bool {
        self.is_featured == Some(true)
    }

    /// Benefit tags, treating an absent list as empty.
    #[must_use]
    pub fn benefit_tags(&self) -> &[String] {
        self.benefits.as_deref().unwrap_or(&[])
    }

    /// Parses the free-text salary into a numeric range.
    #[must_use]
    pub fn salary_range(&self) -> SalaryRange {
        SalaryRange::parse(&self.salary)
    }

    /// Short badge for the company: the logo if set, otherwise the uppercased
    /// first letter of the company name.
    ///
    /// ```
    /// # use jobdeck::domain::{Job, WorkMode};
    /// # let job = Job {
    /// #     id: "1".into(), title: "Dev".into(), company: "techflow".into(),
    /// #     location: "Worldwide".into(), salary: "$1k - $2k".into(), skills: vec![],
    /// #     time_ago: "2h".into(), is_verified: None, is_featured: None,
    /// #     work_mode: WorkMode::Remote, category: "Engineering".into(), benefits: None,
    /// #     company_logo: None, description: None, background_color: None,
    /// # };
    /// assert_eq!(job.company_badge(), "T");
    /// ```
    #[must_use]
    pub fn company_badge(&self) -> String {
        if let Some(logo) = self.company_logo.as_ref().filter(|l| !l.trim().is_empty()) {
            return logo.clone();
        }
        self.company
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
