//! Caller-facing value types passed into client operations

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::PayoutType;
use super::money::Amount;

/// Debit/credit card details for a card charge.
///
/// `Debug` output masks the card number and hides the CVV and PIN.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub number: String,
    pub cvv: String,
    pub expiry_month: String,
    pub expiry_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl Card {
    pub fn new(
        number: impl Into<String>,
        cvv: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            cvv: cvv.into(),
            expiry_month: expiry_month.into(),
            expiry_year: expiry_year.into(),
            name: None,
            pin: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Last four digits of the card number, for logs and receipts.
    pub fn last4(&self) -> &str {
        let len = self.number.len();
        self.number.get(len.saturating_sub(4)..).unwrap_or_default()
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &format_args!("****{}", self.last4()))
            .field("cvv", &"[REDACTED]")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("name", &self.name)
            .field("pin", &self.pin.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Address details for the Address Verification Service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avs {
    pub state: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub zip_code: String,
}

/// Extra information needed to authorize a pending card charge.
///
/// Each authorization flow needs exactly one of these; at least one must be
/// supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs: Option<Avs>,
}

impl Authorization {
    pub fn pin(pin: impl Into<String>) -> Self {
        Self { pin: Some(pin.into()), ..Self::default() }
    }

    pub fn otp(otp: impl Into<String>) -> Self {
        Self { otp: Some(otp.into()), ..Self::default() }
    }

    pub fn avs(avs: Avs) -> Self {
        Self { avs: Some(avs), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.pin.is_none() && self.otp.is_none() && self.avs.is_none()
    }
}

/// A bank account identified by bank code and account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_code: String,
    pub account_number: String,
}

impl BankAccount {
    pub fn new(bank_code: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self { bank_code: bank_code.into(), account_number: account_number.into() }
    }
}

/// A payer or payout recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Customer {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One line item of a bulk payout batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutOrder {
    pub reference: String,
    pub amount: Amount,
    pub bank_account: BankAccount,
    pub customer: Customer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(rename = "type", default)]
    pub payout_type: PayoutType,
}

impl PayoutOrder {
    pub fn new(
        reference: impl Into<String>,
        amount: impl Into<Amount>,
        bank_account: BankAccount,
        customer: Customer,
    ) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            bank_account,
            customer,
            narration: None,
            payout_type: PayoutType::BankAccount,
        }
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }
}

/// Free-form key/value data attached to a transaction.
///
/// The remote API accepts at most five entries with keys of at most twenty
/// characters; those limits are checked when an operation is validated, not
/// on insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
