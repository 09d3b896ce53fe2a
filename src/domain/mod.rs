//! Domain layer for the Jobdeck plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job posting model and work mode enum
//! - [`salary`]: Free-text salary parser
//! - [`criteria`]: Filter criteria and partial updates
//!
//! # Examples
//!
//! ```
//! use jobdeck::domain::{CriteriaUpdate, SearchCriteria};
//!
//! let mut criteria = SearchCriteria::default();
//! criteria.merge(CriteriaUpdate::query("rust"));
//! assert!(criteria.is_active());
//! ```

pub mod criteria;
pub mod error;
pub mod job;
pub mod salary;

pub use criteria::{CriteriaUpdate, SearchCriteria, ALL_SENTINEL};
pub use error::{JobdeckError, Result};
pub use job::{Job, WorkMode};
pub use salary::SalaryRange;
