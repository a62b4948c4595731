use korapay_common::validation::Validator;
use serde::Serialize;

use super::values::{check_email, check_optional_not_empty};
use super::wire::WireCustomer;
use super::{OperationParams, Validate};

/// A permanent virtual bank account issued to one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVirtualBankAccountParams {
    pub account_name: String,
    pub account_reference: String,
    pub bank_code: String,
    pub customer_name: String,
    pub bvn: String,
    pub customer_email: Option<String>,
    pub nin: Option<String>,
}

impl CreateVirtualBankAccountParams {
    pub fn new(
        account_name: impl Into<String>,
        account_reference: impl Into<String>,
        bank_code: impl Into<String>,
        customer_name: impl Into<String>,
        bvn: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            account_reference: account_reference.into(),
            bank_code: bank_code.into(),
            customer_name: customer_name.into(),
            bvn: bvn.into(),
            customer_email: None,
            nin: None,
        }
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    pub fn with_nin(mut self, nin: impl Into<String>) -> Self {
        self.nin = Some(nin.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct WireKyc<'a> {
    bvn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nin: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct VirtualBankAccountWire<'a> {
    account_name: &'a str,
    account_reference: &'a str,
    permanent: bool,
    bank_code: &'a str,
    customer: WireCustomer<'a>,
    kyc: WireKyc<'a>,
}

impl Validate for CreateVirtualBankAccountParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("account_name", &self.account_name)
            .not_empty("account_reference", &self.account_reference)
            .not_empty("bank_code", &self.bank_code)
            .not_empty("customer_name", &self.customer_name)
            .not_empty("bvn", &self.bvn);
        if let Some(email) = &self.customer_email {
            check_email(v, "customer_email", email);
        }
        check_optional_not_empty(v, "nin", self.nin.as_ref());
    }
}

impl OperationParams for CreateVirtualBankAccountParams {
    type Wire<'a> = VirtualBankAccountWire<'a>;

    fn reshape(&self) -> VirtualBankAccountWire<'_> {
        VirtualBankAccountWire {
            account_name: &self.account_name,
            account_reference: &self.account_reference,
            permanent: true,
            bank_code: &self.bank_code,
            customer: WireCustomer {
                name: Some(&self.customer_name),
                email: self.customer_email.as_deref(),
            },
            kyc: WireKyc { bvn: &self.bvn, nin: self.nin.as_deref() },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nests_customer_and_kyc() {
        let body = CreateVirtualBankAccountParams::new(
            "Demo account",
            "va-ref-1",
            "035",
            "John Doe",
            "12345678901",
        )
        .with_nin("98765432101")
        .to_body()
        .unwrap();

        assert_eq!(
            body,
            json!({
                "account_name": "Demo account",
                "account_reference": "va-ref-1",
                "permanent": true,
                "bank_code": "035",
                "customer": {"name": "John Doe"},
                "kyc": {"bvn": "12345678901", "nin": "98765432101"}
            })
        );
    }

    #[test]
    fn bvn_is_required() {
        let err = CreateVirtualBankAccountParams::new("a", "r", "035", "n", "")
            .with_customer_email("bad")
            .to_body()
            .unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["bvn", "customer_email"]);
    }
}
