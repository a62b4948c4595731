//! Field-level validation for request parameters.
//!
//! A [`Validator`] walks a parameter structure, records every violation it
//! finds against a dotted field path (`customer.email`, `payouts[2].amount`)
//! and finally yields a [`ValidationError`] listing all of them, so callers
//! can fix their input in one pass.
//!
//! ```rust
//! use korapay_common::validation::{EmailValidator, Validator};
//!
//! let mut validator = Validator::new();
//! validator.not_empty("reference", "");
//! validator.nested("customer", |v| {
//!     v.check("email", "not-an-email", &EmailValidator::new());
//! });
//!
//! let err = validator.finish().unwrap_err();
//! assert_eq!(err.fields(), vec!["reference", "customer.email"]);
//! ```

use std::fmt;

use thiserror::Error;

mod validators;

pub use validators::{EmailValidator, FieldValidator, StringValidator, UrlValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Names of the failing fields, in the order they were recorded
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

fn describe(errors: &[FieldError]) -> String {
    match errors {
        [] => "Validation error with no specific field errors".to_string(),
        [only] => format!("Validation failed: {only}"),
        errors => format!(
            "Validation failed with {} errors: {}",
            errors.len(),
            errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
        ),
    }
}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulates field errors while walking a parameter structure
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    path: Vec<String>,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    fn qualify(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    /// Add an error for `field` relative to the current nesting path
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        let field = self.qualify(field);
        self.errors.add_field_error(field, message);
        self
    }

    /// Validate a field with a specific validator
    pub fn check<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
        self
    }

    /// Validate an optional field only when it is present
    pub fn check_optional<T, V>(&mut self, field: &str, value: Option<&T>, validator: &V) -> &mut Self
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Some(value) = value {
            self.check(field, value, validator);
        }
        self
    }

    /// Validate string is not empty (whitespace counts as empty)
    pub fn not_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
        self
    }

    /// Record `message` against `field` unless `condition` holds
    pub fn ensure(&mut self, field: &str, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.add_error(field, message);
        }
        self
    }

    /// Validate a collection size
    pub fn count(
        &mut self,
        field: &str,
        size: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> &mut Self {
        if let Some(min) = min {
            if size < min {
                self.add_error(field, format!("must contain at least {} items", min));
            }
        }

        if let Some(max) = max {
            if size > max {
                self.add_error(field, format!("must not contain more than {} items", max));
            }
        }
        self
    }

    /// Validate with nested context (`parent.child`)
    pub fn nested<F>(&mut self, field: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Validator),
    {
        self.path.push(field.to_string());
        f(self);
        self.path.pop();
        self
    }

    /// Finalize and return result
    pub fn finish(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_validator_finishes_ok() {
        assert!(Validator::new().finish().is_ok());
    }

    #[test]
    fn nested_paths_are_dotted() {
        let mut validator = Validator::new();
        validator.nested("destination", |v| {
            v.nested("customer", |v| {
                v.not_empty("email", " ");
            });
        });

        let err = validator.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["destination.customer.email"]);
    }

    #[test]
    fn count_reports_both_bounds() {
        let mut validator = Validator::new();
        validator.count("payouts", 0, Some(1), None).count("metadata", 6, None, Some(5));

        let err = validator.finish().unwrap_err();
        assert_eq!(err.error_count(), 2);
        assert_eq!(err.errors[1].field, "metadata");
        assert_eq!(err.errors[1].message, "must not contain more than 5 items");
    }

    #[test]
    fn display_lists_every_field() {
        let mut err = ValidationError::default();
        err.add_field_error("reference", "cannot be empty");
        err.add_field_error("amount", "must be a finite number");

        let rendered = err.to_string();
        assert!(rendered.contains("2 errors"));
        assert!(rendered.contains("reference: cannot be empty"));
        assert!(rendered.contains("amount: must be a finite number"));
    }

    #[test]
    fn single_violation_is_a_boxable_error() {
        let mut validator = Validator::new();
        validator.not_empty("reference", "");

        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(validator.finish().unwrap_err());
        assert_eq!(err.to_string(), "Validation failed: reference: cannot be empty");
        assert!(err.source().is_none());
    }

    #[test]
    fn check_optional_skips_absent_values() {
        let mut validator = Validator::new();
        validator.check_optional::<str, _>("redirect_url", None, &UrlValidator::new());
        assert!(validator.finish().is_ok());
    }
}
