//! Registration gate in front of the apply link.
//!
//! There is no account backend: a form that passes validation simply
//! unlocks a link to the job's external application page.

pub mod form;
pub mod link;

pub use form::{Field, FieldErrors, RegistrationForm, MIN_PASSWORD_CHARS};
pub use link::{apply_link, encode_uri_component, DEFAULT_APPLY_BASE_URL};
