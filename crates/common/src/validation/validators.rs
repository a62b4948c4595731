// Field Validators - Reusable validation components
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with a maximum length
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone)]
pub struct StringValidator {
    max_length: Option<usize>,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { max_length: None, trim: true }
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Trim surrounding whitespace before checking (default: true)
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };

        if let Some(max) = self.max_length {
            if val.chars().count() > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// URL validator accepting absolute `http` and `https` URLs with a host
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl UrlValidator {
    /// Create a new URL validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let parsed = url::Url::parse(value).map_err(|_| "Invalid URL format".to_string())?;
        let scheme = parsed.scheme();

        if !matches!(scheme, "http" | "https") {
            return Err(format!("URL scheme '{}' is not allowed", scheme));
        }

        if !parsed.has_host() {
            return Err("URL must include a host".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for UrlValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_length_counts_characters() {
        let validator = StringValidator::new().max_length(3);
        assert!(validator.validate("näï").is_ok());
        assert!(validator.validate("abcd").is_err());
    }

    #[test]
    fn string_length_trims_by_default() {
        assert!(StringValidator::new().max_length(3).validate("  abc  ").is_ok());
        assert!(StringValidator::new().max_length(3).trim(false).validate("  abc  ").is_err());
    }

    #[test]
    fn email_validator_accepts_common_addresses() {
        let validator = EmailValidator::new();
        assert!(validator.validate("johndoe@example.com").is_ok());
        assert!(validator.validate("jane.doe+pay@mail.example.ng").is_ok());
        assert!(validator.validate("johndoe@").is_err());
        assert!(validator.validate("johndoe.example.com").is_err());
    }

    #[test]
    fn url_validator_rejects_unknown_schemes() {
        let validator = UrlValidator::new();
        assert!(validator.validate("https://merchant.example.com/callback").is_ok());
        assert!(validator.validate("ftp://merchant.example.com").is_err());
        assert!(validator.validate("not a url").is_err());
    }
}
