//! The operation set shared by the blocking and async clients
//!
//! Every operation is a provided method: it builds the request with the pure
//! builders in [`crate::operations::builders`] and hands the result to
//! [`KorapayApi::execute`]. Implementors only decide how a built request is
//! executed and what the call returns (`Result<Response>` or a future of it).

use korapay_domain::{Amount, Authorization, Country, Credentials, Currency, Result};
use serde_json::Value;

use crate::operations::{builders, ApiRequest};
use crate::params::{
    BulkPayoutParams, ChargeViaBankTransferParams, ChargeViaCardParams,
    ChargeViaMobileMoneyParams, CreateVirtualBankAccountParams, InitiateChargeParams,
    PayoutToBankAccountParams, PayoutToMobileMoneyParams,
};

/// One method per remote operation.
///
/// Invalid input never reaches the transport: a builder error is passed to
/// `execute`, which must return it without sending anything.
pub trait KorapayApi {
    /// What each operation returns.
    type Output;

    /// Credentials used for authentication and card encryption.
    fn credentials(&self) -> &Credentials;

    /// Run a built request, or surface the error that prevented building it.
    fn execute(&self, request: Result<ApiRequest>) -> Self::Output;

    // Cards

    /// Charge a card. The charge document is encrypted with the merchant
    /// encryption key and sent as `{"charge_data": "<envelope>"}`.
    fn charge_via_card(&self, params: ChargeViaCardParams) -> Self::Output {
        self.execute(builders::charge_via_card(&params, self.credentials().encryption_key()))
    }

    /// Complete a card charge that requires a PIN, OTP or AVS step.
    fn authorize_card_charge(
        &self,
        transaction_reference: &str,
        authorization: Authorization,
    ) -> Self::Output {
        self.execute(builders::authorize_card_charge(transaction_reference, &authorization))
    }

    fn resend_card_otp(&self, transaction_reference: &str) -> Self::Output {
        self.execute(builders::resend_card_otp(transaction_reference))
    }

    // Bank transfers and virtual accounts

    fn charge_via_bank_transfer(&self, params: ChargeViaBankTransferParams) -> Self::Output {
        self.execute(builders::charge_via_bank_transfer(&params))
    }

    fn create_virtual_bank_account(&self, params: CreateVirtualBankAccountParams) -> Self::Output {
        self.execute(builders::create_virtual_bank_account(&params))
    }

    fn get_virtual_bank_account(&self, account_reference: &str) -> Self::Output {
        self.execute(builders::get_virtual_bank_account(account_reference))
    }

    fn get_virtual_bank_account_transactions(&self, account_number: &str) -> Self::Output {
        self.execute(builders::get_virtual_bank_account_transactions(account_number))
    }

    /// Sandbox only: simulate an inbound transfer to a virtual account.
    fn credit_sandbox_virtual_bank_account(
        &self,
        account_number: &str,
        amount: impl Into<Amount>,
        currency: Currency,
    ) -> Self::Output {
        let amount = amount.into();
        self.execute(builders::credit_sandbox_virtual_bank_account(
            account_number,
            &amount,
            currency,
        ))
    }

    // Mobile money

    fn charge_via_mobile_money(&self, params: ChargeViaMobileMoneyParams) -> Self::Output {
        self.execute(builders::charge_via_mobile_money(&params))
    }

    fn authorize_mobile_money_charge(&self, reference: &str, token: &str) -> Self::Output {
        self.execute(builders::authorize_mobile_money_charge(reference, token))
    }

    fn resend_mobile_money_otp(&self, transaction_reference: &str) -> Self::Output {
        self.execute(builders::resend_mobile_money_otp(transaction_reference))
    }

    fn resend_stk(&self, transaction_reference: &str) -> Self::Output {
        self.execute(builders::resend_stk(transaction_reference))
    }

    /// Sandbox only: approve an STK push with the wallet PIN.
    fn authorize_stk(&self, reference: &str, pin: &str) -> Self::Output {
        self.execute(builders::authorize_stk(reference, pin))
    }

    // Checkout and lookups

    /// Create a hosted checkout session.
    fn initiate_charge(&self, params: InitiateChargeParams) -> Self::Output {
        self.execute(builders::initiate_charge(&params))
    }

    fn get_charge(&self, reference: &str) -> Self::Output {
        self.execute(builders::get_charge(reference))
    }

    fn resolve_bank_account(&self, bank_code: &str, account_number: &str) -> Self::Output {
        self.execute(builders::resolve_bank_account(bank_code, account_number))
    }

    fn get_balances(&self) -> Self::Output {
        self.execute(builders::get_balances())
    }

    /// Banks available in `country`. Authenticated with the public key.
    fn get_banks(&self, country: Country) -> Self::Output {
        self.execute(builders::get_banks(country))
    }

    /// Mobile money operators available in `country`. Authenticated with the
    /// public key.
    fn get_mmo(&self, country: Country) -> Self::Output {
        self.execute(builders::get_mmo(country))
    }

    // Payouts

    fn payout_to_bank_account(&self, params: PayoutToBankAccountParams) -> Self::Output {
        self.execute(builders::payout_to_bank_account(&params))
    }

    fn payout_to_mobile_money(&self, params: PayoutToMobileMoneyParams) -> Self::Output {
        self.execute(builders::payout_to_mobile_money(&params))
    }

    /// Submit a batch of bank payouts. Orders are sent in the given order.
    fn bulk_payout_to_bank_account(&self, params: BulkPayoutParams) -> Self::Output {
        self.execute(builders::bulk_payout_to_bank_account(&params))
    }

    /// Individual payouts of a bulk batch.
    fn get_payouts(&self, bulk_reference: &str) -> Self::Output {
        self.execute(builders::get_payouts(bulk_reference))
    }

    fn get_bulk_transaction(&self, bulk_reference: &str) -> Self::Output {
        self.execute(builders::get_bulk_transaction(bulk_reference))
    }

    /// Status of a single payout.
    fn get_payout_transaction(&self, transaction_reference: &str) -> Self::Output {
        self.execute(builders::get_payout_transaction(transaction_reference))
    }

    /// Call an endpoint that has no dedicated method.
    ///
    /// `method` is parsed case-insensitively; an unknown verb yields
    /// [`KorapayError::UnsupportedMethod`](korapay_domain::KorapayError::UnsupportedMethod).
    fn raw_request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<Value>,
        use_public_auth: bool,
    ) -> Self::Output {
        self.execute(builders::raw_request(method, endpoint, body, use_public_auth))
    }
}
