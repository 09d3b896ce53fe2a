//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; the helpers
//! here translate user-facing paths (catalog and theme files, the trace
//! output directory) to and from that mount.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
