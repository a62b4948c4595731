//! Constraints on the caller-facing value types

use korapay_common::validation::{EmailValidator, StringValidator, UrlValidator, Validator};
use korapay_domain::constants::{MAX_METADATA_FIELDS, MAX_METADATA_KEY_LENGTH};
use korapay_domain::{
    Amount, Authorization, Avs, BankAccount, Card, Customer, Metadata, PayoutOrder, Result,
};

use super::{into_parameter_error, Validate};

/// Amounts must be representable in JSON and not below zero.
pub fn validate_amount(validator: &mut Validator, field: &str, amount: &Amount) {
    if !amount.is_finite() {
        validator.add_error(field, "must be a finite number");
    } else if amount.is_negative() {
        validator.add_error(field, "must not be negative");
    }
}

/// At most five entries, each key at most twenty characters.
pub fn validate_metadata(validator: &mut Validator, metadata: Option<&Metadata>) {
    let Some(metadata) = metadata else { return };

    if metadata.len() > MAX_METADATA_FIELDS {
        validator.add_error(
            "metadata",
            format!("A maximum of {MAX_METADATA_FIELDS} key/values is allowed"),
        );
    }
    let key_rule = StringValidator::new().trim(false).max_length(MAX_METADATA_KEY_LENGTH);
    validator.nested("metadata", |v| {
        for key in metadata.keys() {
            v.check(key, key, &key_rule);
        }
    });
}

/// Single-identifier operations (references, account numbers, tokens).
pub fn require_identifier(field: &str, value: &str) -> Result<()> {
    let mut validator = Validator::new();
    validator.not_empty(field, value);
    validator.finish().map_err(into_parameter_error)
}

pub(crate) fn check_email(validator: &mut Validator, field: &str, email: &str) {
    if email.trim().is_empty() {
        validator.add_error(field, "cannot be empty");
    } else {
        validator.check(field, email, &EmailValidator::new());
    }
}

pub(crate) fn check_optional_url(validator: &mut Validator, field: &str, url: Option<&String>) {
    validator.check_optional(field, url, &UrlValidator::new());
}

pub(crate) fn check_optional_not_empty(
    validator: &mut Validator,
    field: &str,
    value: Option<&String>,
) {
    if let Some(value) = value {
        validator.not_empty(field, value);
    }
}

impl Validate for Card {
    fn validate_with(&self, validator: &mut Validator) {
        validator
            .not_empty("number", &self.number)
            .not_empty("cvv", &self.cvv)
            .not_empty("expiry_month", &self.expiry_month)
            .not_empty("expiry_year", &self.expiry_year);
        check_optional_not_empty(validator, "pin", self.pin.as_ref());
    }
}

impl Validate for Avs {
    fn validate_with(&self, validator: &mut Validator) {
        validator
            .not_empty("state", &self.state)
            .not_empty("city", &self.city)
            .not_empty("country", &self.country)
            .not_empty("address", &self.address)
            .not_empty("zip_code", &self.zip_code);
    }
}

impl Validate for Authorization {
    fn validate_with(&self, validator: &mut Validator) {
        validator.ensure("authorization", !self.is_empty(), "one of pin, otp or avs is required");
        validator.nested("authorization", |v| {
            check_optional_not_empty(v, "pin", self.pin.as_ref());
            check_optional_not_empty(v, "otp", self.otp.as_ref());
            if let Some(avs) = &self.avs {
                v.nested("avs", |v| avs.validate_with(v));
            }
        });
    }
}

impl Validate for Customer {
    fn validate_with(&self, validator: &mut Validator) {
        check_email(validator, "email", &self.email);
        check_optional_not_empty(validator, "name", self.name.as_ref());
    }
}

impl Validate for BankAccount {
    fn validate_with(&self, validator: &mut Validator) {
        validator
            .not_empty("bank_code", &self.bank_code)
            .not_empty("account_number", &self.account_number);
    }
}

impl Validate for PayoutOrder {
    fn validate_with(&self, validator: &mut Validator) {
        validator.not_empty("reference", &self.reference);
        validate_amount(validator, "amount", &self.amount);
        validator.nested("bank_account", |v| self.bank_account.validate_with(v));
        validator.nested("customer", |v| self.customer.validate_with(v));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn errors_of(f: impl FnOnce(&mut Validator)) -> Vec<String> {
        let mut validator = Validator::new();
        f(&mut validator);
        match validator.finish() {
            Ok(()) => Vec::new(),
            Err(err) => err.fields().into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn metadata_limits() {
        let five: Metadata = (0..5).map(|i| (format!("key{i}"), json!(i))).collect();
        assert!(errors_of(|v| validate_metadata(v, Some(&five))).is_empty());

        let six: Metadata = (0..6).map(|i| (format!("key{i}"), json!(i))).collect();
        assert_eq!(errors_of(|v| validate_metadata(v, Some(&six))), vec!["metadata"]);

        let long_key = Metadata::new().with("a".repeat(21), "x");
        assert_eq!(
            errors_of(|v| validate_metadata(v, Some(&long_key))),
            vec![format!("metadata.{}", "a".repeat(21))]
        );

        let padded_key = Metadata::new().with(format!(" {} ", "b".repeat(19)), "x");
        assert_eq!(errors_of(|v| validate_metadata(v, Some(&padded_key))).len(), 1);

        let edge_key = Metadata::new().with("a".repeat(20), "x");
        assert!(errors_of(|v| validate_metadata(v, Some(&edge_key))).is_empty());
    }

    #[test]
    fn amount_must_be_finite_and_non_negative() {
        assert!(errors_of(|v| validate_amount(v, "amount", &Amount::from(0))).is_empty());
        assert_eq!(
            errors_of(|v| validate_amount(v, "amount", &Amount::from(f64::NAN))),
            vec!["amount"]
        );
        assert_eq!(
            errors_of(|v| validate_amount(v, "amount", &Amount::from(-5))),
            vec!["amount"]
        );
    }

    #[test]
    fn authorization_needs_one_factor() {
        assert!(Authorization::default().validate().is_err());
        assert!(Authorization::pin("1234").validate().is_ok());

        let err = Authorization::avs(Avs {
            state: "lagos".into(),
            city: "".into(),
            country: "NG".into(),
            address: "404 anonymous street".into(),
            zip_code: "253359".into(),
        })
        .validate()
        .unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["authorization.avs.city"]);
    }

    #[test]
    fn payout_order_reports_nested_paths() {
        let order = PayoutOrder::new(
            "",
            100,
            BankAccount::new("033", ""),
            Customer::new("not-an-email"),
        );
        let err = order.validate().unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            vec!["reference", "bank_account.account_number", "customer.email"]
        );
    }

    #[test]
    fn blank_identifier_is_rejected() {
        assert!(require_identifier("reference", "ref-1").is_ok());
        let err = require_identifier("reference", "  ").unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["reference"]);
    }
}
