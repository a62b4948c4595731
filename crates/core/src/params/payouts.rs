//! Disbursements to bank accounts and mobile wallets

use korapay_common::validation::Validator;
use korapay_domain::{Amount, Currency, MobileMoneyOperator, PayoutOrder, PayoutType};
use serde::Serialize;

use super::values::{check_email, check_optional_not_empty, validate_amount};
use super::wire::WireCustomer;
use super::{OperationParams, Validate};

/// Single payout to a bank account.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutToBankAccountParams {
    pub reference: String,
    pub amount: Amount,
    pub currency: Currency,
    pub bank_code: String,
    pub account_number: String,
    pub customer_email: String,
    pub narration: Option<String>,
    pub customer_name: Option<String>,
}

impl PayoutToBankAccountParams {
    pub fn new(
        reference: impl Into<String>,
        amount: impl Into<Amount>,
        currency: Currency,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            currency,
            bank_code: bank_code.into(),
            account_number: account_number.into(),
            customer_email: customer_email.into(),
            narration: None,
            customer_name: None,
        }
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }
}

/// Single payout to a mobile money wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutToMobileMoneyParams {
    pub reference: String,
    pub amount: Amount,
    pub currency: Currency,
    pub mobile_money_operator: MobileMoneyOperator,
    pub mobile_number: String,
    pub customer_email: String,
    pub narration: Option<String>,
    pub customer_name: Option<String>,
}

impl PayoutToMobileMoneyParams {
    pub fn new(
        reference: impl Into<String>,
        amount: impl Into<Amount>,
        currency: Currency,
        mobile_money_operator: impl Into<MobileMoneyOperator>,
        mobile_number: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            currency,
            mobile_money_operator: mobile_money_operator.into(),
            mobile_number: mobile_number.into(),
            customer_email: customer_email.into(),
            narration: None,
            customer_name: None,
        }
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }
}

#[derive(Debug, Serialize)]
struct WireBankAccount<'a> {
    bank: &'a str,
    account: &'a str,
}

#[derive(Debug, Serialize)]
struct WireMobileMoney<'a> {
    operator: &'a str,
    mobile_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum WireTarget<'a> {
    BankAccount(WireBankAccount<'a>),
    MobileMoney(WireMobileMoney<'a>),
}

#[derive(Debug, Serialize)]
struct WireDestination<'a> {
    #[serde(rename = "type")]
    payout_type: PayoutType,
    amount: &'a Amount,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    narration: Option<&'a str>,
    #[serde(flatten)]
    target: WireTarget<'a>,
    customer: WireCustomer<'a>,
}

#[derive(Debug, Serialize)]
pub struct PayoutWire<'a> {
    reference: &'a str,
    destination: WireDestination<'a>,
}

impl Validate for PayoutToBankAccountParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference);
        validate_amount(v, "amount", &self.amount);
        v.not_empty("bank_code", &self.bank_code).not_empty("account_number", &self.account_number);
        check_email(v, "customer_email", &self.customer_email);
        check_optional_not_empty(v, "customer_name", self.customer_name.as_ref());
    }
}

impl OperationParams for PayoutToBankAccountParams {
    type Wire<'a> = PayoutWire<'a>;

    fn reshape(&self) -> PayoutWire<'_> {
        PayoutWire {
            reference: &self.reference,
            destination: WireDestination {
                payout_type: PayoutType::BankAccount,
                amount: &self.amount,
                currency: self.currency,
                narration: self.narration.as_deref(),
                target: WireTarget::BankAccount(WireBankAccount {
                    bank: &self.bank_code,
                    account: &self.account_number,
                }),
                customer: WireCustomer::new(&self.customer_email, self.customer_name.as_deref()),
            },
        }
    }
}

impl Validate for PayoutToMobileMoneyParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference);
        validate_amount(v, "amount", &self.amount);
        v.not_empty("mobile_money_operator", self.mobile_money_operator.as_str())
            .not_empty("mobile_number", &self.mobile_number);
        check_email(v, "customer_email", &self.customer_email);
        check_optional_not_empty(v, "customer_name", self.customer_name.as_ref());
    }
}

impl OperationParams for PayoutToMobileMoneyParams {
    type Wire<'a> = PayoutWire<'a>;

    fn reshape(&self) -> PayoutWire<'_> {
        PayoutWire {
            reference: &self.reference,
            destination: WireDestination {
                payout_type: PayoutType::MobileMoney,
                amount: &self.amount,
                currency: self.currency,
                narration: self.narration.as_deref(),
                target: WireTarget::MobileMoney(WireMobileMoney {
                    operator: self.mobile_money_operator.as_str(),
                    mobile_number: &self.mobile_number,
                }),
                customer: WireCustomer::new(&self.customer_email, self.customer_name.as_deref()),
            },
        }
    }
}

/// A batch of bank payouts tracked under one batch reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPayoutParams {
    pub batch_reference: String,
    pub description: String,
    pub merchant_bears_cost: bool,
    pub currency: Currency,
    pub payouts: Vec<PayoutOrder>,
}

impl BulkPayoutParams {
    pub fn new(
        batch_reference: impl Into<String>,
        description: impl Into<String>,
        currency: Currency,
        payouts: impl IntoIterator<Item = PayoutOrder>,
    ) -> Self {
        Self {
            batch_reference: batch_reference.into(),
            description: description.into(),
            merchant_bears_cost: false,
            currency,
            payouts: payouts.into_iter().collect(),
        }
    }

    pub fn with_merchant_bears_cost(mut self, merchant_bears_cost: bool) -> Self {
        self.merchant_bears_cost = merchant_bears_cost;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct BulkPayoutWire<'a> {
    batch_reference: &'a str,
    description: &'a str,
    merchant_bears_cost: bool,
    currency: Currency,
    payouts: &'a [PayoutOrder],
}

impl Validate for BulkPayoutParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("batch_reference", &self.batch_reference)
            .not_empty("description", &self.description)
            .count("payouts", self.payouts.len(), Some(1), None);
        for (index, order) in self.payouts.iter().enumerate() {
            v.nested(&format!("payouts[{index}]"), |v| order.validate_with(v));
        }
    }
}

impl OperationParams for BulkPayoutParams {
    type Wire<'a> = BulkPayoutWire<'a>;

    fn reshape(&self) -> BulkPayoutWire<'_> {
        BulkPayoutWire {
            batch_reference: &self.batch_reference,
            description: &self.description,
            merchant_bears_cost: self.merchant_bears_cost,
            currency: self.currency,
            payouts: &self.payouts,
        }
    }
}
