//! JSON catalog loading.
//!
//! A catalog file is a JSON array of job records (see [`crate::domain::job`]
//! for the field layout). Loading validates that identifiers are unique; the
//! rest of the plugin relies on that to address jobs by id.

use super::Catalog;
use crate::domain::error::{JobdeckError, Result};
use crate::domain::Job;
use std::collections::HashSet;
use std::path::Path;

/// Parses catalog JSON.
///
/// # Errors
///
/// Returns [`JobdeckError::Json`] if the text is not a valid job array, or
/// [`JobdeckError::Catalog`] if two jobs share an identifier.
pub fn parse(contents: &str) -> Result<Catalog> {
    let jobs: Vec<Job> = serde_json::from_str(contents)?;
    from_jobs(jobs)
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns [`JobdeckError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("catalog_load", path = ?path).entered();

    let contents = std::fs::read_to_string(path)?;
    let catalog = parse(&contents)?;

    tracing::debug!(job_count = catalog.len(), "catalog loaded from file");
    Ok(catalog)
}

/// Builds a catalog from already-deserialized jobs.
///
/// # Errors
///
/// Returns [`JobdeckError::Catalog`] if two jobs share an identifier.
pub fn from_jobs(jobs: Vec<Job>) -> Result<Catalog> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in &jobs {
        if !seen.insert(job.id.as_str()) {
            return Err(JobdeckError::Catalog(format!("duplicate job id: {}", job.id)));
        }
    }

    Ok(Catalog { jobs })
}
