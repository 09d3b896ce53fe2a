//! Registration form fields and validation.

use regex::Regex;
use std::sync::OnceLock;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Email pattern should always compile"))
}

/// Input field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::ConfirmPassword,
            Self::ConfirmPassword => Self::Email,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field's value is masked on screen.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        !matches!(self, Self::Email)
    }
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }

    /// Clears the message attached to `field`.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::ConfirmPassword => self.confirm_password = None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Checks every field, collecting all messages at once.
    ///
    /// ```
    /// use jobdeck::registration::RegistrationForm;
    ///
    /// let form = RegistrationForm {
    ///     email: "dev@example.com".into(),
    ///     password: "hunter22".into(),
    ///     confirm_password: "hunter2".into(),
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    /// assert!(errors.email.is_none());
    /// ```
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            email: self.email_error(),
            password: self.password_error(),
            confirm_password: self.confirmation_error(),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn email_error(&self) -> Option<String> {
        if self.email.is_empty() {
            Some("Email is required".to_string())
        } else if !email_regex().is_match(&self.email) {
            Some("Please enter a valid email address".to_string())
        } else {
            None
        }
    }

    fn password_error(&self) -> Option<String> {
        if self.password.is_empty() {
            Some("Password is required".to_string())
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            Some(format!("Password must be at least {MIN_PASSWORD_CHARS} characters"))
        } else {
            None
        }
    }

    fn confirmation_error(&self) -> Option<String> {
        if self.confirm_password.is_empty() {
            Some("Please confirm your password".to_string())
        } else if self.confirm_password != self.password {
            Some("Passwords do not match".to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["plain", "a@b", "a b@c.d", "@c.d", "a@@c.d"] {
            let errors = form(email, "secret1", "secret1").validate().unwrap_err();
            assert_eq!(
                errors.email.as_deref(),
                Some("Please enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn short_password() {
        let errors = form("a@b.co", "12345", "12345").validate().unwrap_err();
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn mismatched_confirmation() {
        let errors = form("a@b.co", "secret1", "secret2").validate().unwrap_err();
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(form("jane.doe+jobs@mail.example.org", "123456", "123456").validate(), Ok(()));
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(Field::Email.next(), Field::Password);
        assert_eq!(Field::ConfirmPassword.next(), Field::Email);
        assert!(Field::Password.is_secret());
    }
}
