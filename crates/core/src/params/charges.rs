//! Charge operations: card, bank transfer, mobile money and checkout

use korapay_common::validation::Validator;
use korapay_domain::{Amount, Card, Currency, Metadata, PaymentChannel};
use serde::Serialize;

use super::values::{
    check_email, check_optional_not_empty, check_optional_url, validate_amount, validate_metadata,
};
use super::wire::{self, WireCustomer};
use super::{OperationParams, Validate};

/// Card charge. The reshaped document is encrypted before it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeViaCardParams {
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub card: Card,
    pub amount: Amount,
    pub currency: Currency,
    pub redirect_url: Option<String>,
    pub metadata: Option<Metadata>,
}

impl ChargeViaCardParams {
    pub fn new(
        reference: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        card: Card,
        amount: impl Into<Amount>,
        currency: Currency,
    ) -> Self {
        Self {
            reference: reference.into(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            card,
            amount: amount.into(),
            currency,
            redirect_url: None,
            metadata: None,
        }
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct CardChargeWire<'a> {
    reference: &'a str,
    card: &'a Card,
    amount: &'a Amount,
    currency: Currency,
    customer: WireCustomer<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl Validate for ChargeViaCardParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference).not_empty("customer_name", &self.customer_name);
        check_email(v, "customer_email", &self.customer_email);
        v.nested("card", |v| self.card.validate_with(v));
        validate_amount(v, "amount", &self.amount);
        check_optional_url(v, "redirect_url", self.redirect_url.as_ref());
        validate_metadata(v, self.metadata.as_ref());
    }
}

impl OperationParams for ChargeViaCardParams {
    type Wire<'a> = CardChargeWire<'a>;

    fn reshape(&self) -> CardChargeWire<'_> {
        CardChargeWire {
            reference: &self.reference,
            card: &self.card,
            amount: &self.amount,
            currency: self.currency,
            customer: WireCustomer::new(&self.customer_email, Some(self.customer_name.as_str())),
            redirect_url: self.redirect_url.as_deref(),
            metadata: wire::metadata(&self.metadata),
        }
    }
}

/// Pay-with-bank-transfer charge (dynamic account number).
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeViaBankTransferParams {
    pub reference: String,
    pub amount: Amount,
    pub currency: Currency,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub account_name: Option<String>,
    pub narration: Option<String>,
    pub notification_url: Option<String>,
    pub merchant_bears_cost: bool,
    pub metadata: Option<Metadata>,
}

impl ChargeViaBankTransferParams {
    pub fn new(reference: impl Into<String>, amount: impl Into<Amount>, currency: Currency) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            currency,
            customer_email: None,
            customer_name: None,
            account_name: None,
            narration: None,
            notification_url: None,
            merchant_bears_cost: false,
            metadata: None,
        }
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn with_notification_url(mut self, url: impl Into<String>) -> Self {
        self.notification_url = Some(url.into());
        self
    }

    pub fn with_merchant_bears_cost(mut self, merchant_bears_cost: bool) -> Self {
        self.merchant_bears_cost = merchant_bears_cost;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct BankTransferChargeWire<'a> {
    reference: &'a str,
    amount: &'a Amount,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<WireCustomer<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_name: Option<&'a str>,
    merchant_bears_cost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    narration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl Validate for ChargeViaBankTransferParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference);
        validate_amount(v, "amount", &self.amount);
        if let Some(email) = &self.customer_email {
            check_email(v, "customer_email", email);
        }
        check_optional_not_empty(v, "customer_name", self.customer_name.as_ref());
        check_optional_url(v, "notification_url", self.notification_url.as_ref());
        validate_metadata(v, self.metadata.as_ref());
    }
}

impl OperationParams for ChargeViaBankTransferParams {
    type Wire<'a> = BankTransferChargeWire<'a>;

    fn reshape(&self) -> BankTransferChargeWire<'_> {
        BankTransferChargeWire {
            reference: &self.reference,
            amount: &self.amount,
            currency: self.currency,
            notification_url: self.notification_url.as_deref(),
            customer: WireCustomer::partial(
                self.customer_email.as_deref(),
                self.customer_name.as_deref(),
            ),
            account_name: self.account_name.as_deref(),
            merchant_bears_cost: self.merchant_bears_cost,
            narration: self.narration.as_deref(),
            metadata: wire::metadata(&self.metadata),
        }
    }
}

/// Mobile money charge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeViaMobileMoneyParams {
    pub reference: String,
    pub customer_email: String,
    pub amount: Amount,
    pub mobile_money_number: String,
    pub currency: Currency,
    pub notification_url: Option<String>,
    pub customer_name: Option<String>,
    pub redirect_url: Option<String>,
    pub merchant_bears_cost: bool,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
}

impl ChargeViaMobileMoneyParams {
    pub fn new(
        reference: impl Into<String>,
        customer_email: impl Into<String>,
        amount: impl Into<Amount>,
        mobile_money_number: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            reference: reference.into(),
            customer_email: customer_email.into(),
            amount: amount.into(),
            mobile_money_number: mobile_money_number.into(),
            currency,
            notification_url: None,
            customer_name: None,
            redirect_url: None,
            merchant_bears_cost: false,
            description: None,
            metadata: None,
        }
    }

    pub fn with_notification_url(mut self, url: impl Into<String>) -> Self {
        self.notification_url = Some(url.into());
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn with_merchant_bears_cost(mut self, merchant_bears_cost: bool) -> Self {
        self.merchant_bears_cost = merchant_bears_cost;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Serialize)]
struct WireMobileMoney<'a> {
    number: &'a str,
}

#[derive(Debug, Serialize)]
pub struct MobileMoneyChargeWire<'a> {
    reference: &'a str,
    amount: &'a Amount,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    customer: WireCustomer<'a>,
    mobile_money: WireMobileMoney<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_url: Option<&'a str>,
    merchant_bears_cost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl Validate for ChargeViaMobileMoneyParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference);
        check_email(v, "customer_email", &self.customer_email);
        validate_amount(v, "amount", &self.amount);
        v.not_empty("mobile_money_number", &self.mobile_money_number);
        check_optional_not_empty(v, "customer_name", self.customer_name.as_ref());
        check_optional_url(v, "notification_url", self.notification_url.as_ref());
        check_optional_url(v, "redirect_url", self.redirect_url.as_ref());
        validate_metadata(v, self.metadata.as_ref());
    }
}

impl OperationParams for ChargeViaMobileMoneyParams {
    type Wire<'a> = MobileMoneyChargeWire<'a>;

    fn reshape(&self) -> MobileMoneyChargeWire<'_> {
        MobileMoneyChargeWire {
            reference: &self.reference,
            amount: &self.amount,
            currency: self.currency,
            redirect_url: self.redirect_url.as_deref(),
            customer: WireCustomer::new(&self.customer_email, self.customer_name.as_deref()),
            mobile_money: WireMobileMoney { number: &self.mobile_money_number },
            notification_url: self.notification_url.as_deref(),
            merchant_bears_cost: self.merchant_bears_cost,
            description: self.description.as_deref(),
            metadata: wire::metadata(&self.metadata),
        }
    }
}

/// Hosted checkout: the customer picks a channel on a payment page.
#[derive(Debug, Clone, PartialEq)]
pub struct InitiateChargeParams {
    pub reference: String,
    pub amount: Amount,
    pub currency: Currency,
    pub narration: String,
    pub notification_url: String,
    pub customer_email: String,
    pub default_channel: PaymentChannel,
    pub customer_name: Option<String>,
    pub channels: Option<Vec<PaymentChannel>>,
    pub redirect_url: Option<String>,
}

impl InitiateChargeParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: impl Into<String>,
        amount: impl Into<Amount>,
        currency: Currency,
        narration: impl Into<String>,
        notification_url: impl Into<String>,
        customer_email: impl Into<String>,
        default_channel: PaymentChannel,
    ) -> Self {
        Self {
            reference: reference.into(),
            amount: amount.into(),
            currency,
            narration: narration.into(),
            notification_url: notification_url.into(),
            customer_email: customer_email.into(),
            default_channel,
            customer_name: None,
            channels: None,
            redirect_url: None,
        }
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_channels(mut self, channels: impl IntoIterator<Item = PaymentChannel>) -> Self {
        self.channels = Some(channels.into_iter().collect());
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct InitiateChargeWire<'a> {
    reference: &'a str,
    amount: &'a Amount,
    currency: Currency,
    narration: &'a str,
    notification_url: &'a str,
    customer: WireCustomer<'a>,
    default_channel: PaymentChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<&'a [PaymentChannel]>,
}

impl Validate for InitiateChargeParams {
    fn validate_with(&self, v: &mut Validator) {
        v.not_empty("reference", &self.reference);
        validate_amount(v, "amount", &self.amount);
        v.not_empty("narration", &self.narration);
        if self.notification_url.trim().is_empty() {
            v.add_error("notification_url", "cannot be empty");
        } else {
            check_optional_url(v, "notification_url", Some(&self.notification_url));
        }
        check_email(v, "customer_email", &self.customer_email);
        check_optional_not_empty(v, "customer_name", self.customer_name.as_ref());
        check_optional_url(v, "redirect_url", self.redirect_url.as_ref());
    }
}

impl OperationParams for InitiateChargeParams {
    type Wire<'a> = InitiateChargeWire<'a>;

    fn reshape(&self) -> InitiateChargeWire<'_> {
        InitiateChargeWire {
            reference: &self.reference,
            amount: &self.amount,
            currency: self.currency,
            narration: &self.narration,
            notification_url: &self.notification_url,
            customer: WireCustomer::new(&self.customer_email, self.customer_name.as_deref()),
            default_channel: self.default_channel,
            redirect_url: self.redirect_url.as_deref(),
            channels: self.channels.as_deref().filter(|c| !c.is_empty()),
        }
    }
}
