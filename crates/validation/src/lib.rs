// Rust guideline compliant 2026-10-16

//! Structural validation of incoming users.
//!
//! [`UserValidator`] implements the `domain::Validator` port. It is a pure
//! function of its input: no I/O, no clock, no configuration.

use domain::{User, ValidationError};

/// Shortest email address considered plausible, in bytes.
pub const MIN_EMAIL_LEN: usize = 5;

/// Default `domain::Validator` adapter.
///
/// Rules, first failure wins:
/// 1. given and family name are non-blank after trimming;
/// 2. email contains `@` and is at least [`MIN_EMAIL_LEN`] bytes long;
/// 3. category is one of the closed set.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl UserValidator {
    /// Create a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl domain::Validator for UserValidator {
    fn validate(&self, user: &User) -> Result<(), ValidationError> {
        if user.given_name.trim().is_empty() || user.family_name.trim().is_empty() {
            tracing::debug!(user_id = %user.id, "validation.rejected: missing name");
            return Err(ValidationError::MissingName);
        }
        if !user.email.contains('@') || user.email.len() < MIN_EMAIL_LEN {
            tracing::debug!(user_id = %user.id, "validation.rejected: invalid email");
            return Err(ValidationError::InvalidEmail { email: user.email.clone() });
        }
        if user.parsed_category().is_err() {
            tracing::debug!(user_id = %user.id, category = %user.category, "validation.rejected: unsupported category");
            return Err(ValidationError::UnsupportedCategory {
                category: user.category.clone(),
            });
        }
        Ok(())
    }
}
