//! Parameter models
//!
//! One typed structure per operation family. Each model checks its own
//! constraints ([`Validate`]) and knows how to reshape its flat fields into
//! the nested JSON document the remote API expects ([`OperationParams`]).
//! Reshaping is pure and only runs on validated input.

use korapay_common::validation::{ValidationError, Validator};
use korapay_domain::{FieldViolation, KorapayError, Result};
use serde::Serialize;
use serde_json::Value;

mod charges;
mod payouts;
mod values;
mod virtual_accounts;
mod wire;

pub use charges::{
    ChargeViaBankTransferParams, ChargeViaCardParams, ChargeViaMobileMoneyParams,
    InitiateChargeParams,
};
pub use payouts::{BulkPayoutParams, PayoutToBankAccountParams, PayoutToMobileMoneyParams};
pub use values::{require_identifier, validate_amount, validate_metadata};
pub use virtual_accounts::CreateVirtualBankAccountParams;

/// Types that can check their own field constraints.
pub trait Validate {
    /// Record every violation into `validator`, relative to its current path.
    fn validate_with(&self, validator: &mut Validator);

    /// Validate standalone, converting violations into a client error.
    fn validate(&self) -> Result<()> {
        let mut validator = Validator::new();
        self.validate_with(&mut validator);
        validator.finish().map_err(into_parameter_error)
    }
}

/// A validated, reshapeable operation payload.
pub trait OperationParams: Validate {
    /// The nested wire document; borrowed from `self`.
    type Wire<'a>: Serialize
    where
        Self: 'a;

    /// Reshape into the wire document. Callers must validate first.
    fn reshape(&self) -> Self::Wire<'_>;

    /// Validate, then reshape into a JSON value ready to send.
    fn to_body(&self) -> Result<Value> {
        self.validate()?;
        to_json(&self.reshape())
    }
}

/// Convert accumulated field errors into [`KorapayError::ParameterValidation`].
pub fn into_parameter_error(err: ValidationError) -> KorapayError {
    KorapayError::ParameterValidation {
        violations: err
            .errors
            .into_iter()
            .map(|e| FieldViolation::new(e.field, e.message))
            .collect(),
    }
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| KorapayError::client_with_source("Failed to serialize request body", e))
}
