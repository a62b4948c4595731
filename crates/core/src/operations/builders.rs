//! One pure builder per operation
//!
//! Each builder validates its input, reshapes it and returns the
//! [`ApiRequest`] to dispatch. Failures here happen before any I/O.

use korapay_common::crypto::PayloadCipher;
use korapay_common::validation::Validator;
use korapay_domain::{Amount, Authorization, Country, Currency, HttpMethod, KorapayError, Result};
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiRequest, ClientMethod};
use crate::params::{
    into_parameter_error, require_identifier, validate_amount, BulkPayoutParams,
    ChargeViaBankTransferParams, ChargeViaCardParams, ChargeViaMobileMoneyParams,
    CreateVirtualBankAccountParams, InitiateChargeParams, OperationParams,
    PayoutToBankAccountParams, PayoutToMobileMoneyParams, Validate,
};

fn with_params<P: OperationParams>(operation: ClientMethod, params: &P) -> Result<ApiRequest> {
    Ok(ApiRequest::for_method(operation).with_body(params.to_body()?))
}

fn lookup(operation: ClientMethod, field: &str, value: &str) -> Result<ApiRequest> {
    require_identifier(field, value)?;
    Ok(ApiRequest::with_segment(operation, value))
}

fn post_json(operation: ClientMethod, body: Value) -> Result<ApiRequest> {
    Ok(ApiRequest::for_method(operation).with_body(body))
}

/// Seal `payload` under the merchant encryption key.
pub fn encrypt_charge_data<T>(encryption_key: &str, payload: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    PayloadCipher::new(encryption_key)
        .and_then(|cipher| cipher.encrypt_json(payload))
        .map_err(|e| KorapayError::Encryption(e.to_string()))
}

pub fn charge_via_card(params: &ChargeViaCardParams, encryption_key: &str) -> Result<ApiRequest> {
    params.validate()?;
    let charge_data = encrypt_charge_data(encryption_key, &params.reshape())?;
    Ok(ApiRequest::for_method(ClientMethod::ChargeViaCard)
        .with_body(json!({ "charge_data": charge_data })))
}

pub fn authorize_card_charge(
    transaction_reference: &str,
    authorization: &Authorization,
) -> Result<ApiRequest> {
    require_identifier("transaction_reference", transaction_reference)?;
    authorization.validate()?;
    post_json(
        ClientMethod::AuthorizeCardCharge,
        json!({
            "transaction_reference": transaction_reference,
            "authorization": authorization,
        }),
    )
}

pub fn resend_card_otp(transaction_reference: &str) -> Result<ApiRequest> {
    transaction_reference_only(ClientMethod::ResendCardOtp, transaction_reference)
}

pub fn charge_via_bank_transfer(params: &ChargeViaBankTransferParams) -> Result<ApiRequest> {
    with_params(ClientMethod::ChargeViaBankTransfer, params)
}

pub fn create_virtual_bank_account(params: &CreateVirtualBankAccountParams) -> Result<ApiRequest> {
    with_params(ClientMethod::CreateVirtualBankAccount, params)
}

pub fn get_virtual_bank_account(account_reference: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetVirtualBankAccount, "account_reference", account_reference)
}

pub fn get_virtual_bank_account_transactions(account_number: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetVirtualBankAccountTransactions, "account_number", account_number)
}

pub fn credit_sandbox_virtual_bank_account(
    account_number: &str,
    amount: &Amount,
    currency: Currency,
) -> Result<ApiRequest> {
    let mut validator = Validator::new();
    validator.not_empty("account_number", account_number);
    validate_amount(&mut validator, "amount", amount);
    validator.finish().map_err(into_parameter_error)?;

    post_json(
        ClientMethod::CreditSandboxVirtualBankAccount,
        json!({ "account_number": account_number, "amount": amount, "currency": currency }),
    )
}

pub fn charge_via_mobile_money(params: &ChargeViaMobileMoneyParams) -> Result<ApiRequest> {
    with_params(ClientMethod::ChargeViaMobileMoney, params)
}

pub fn authorize_mobile_money_charge(reference: &str, token: &str) -> Result<ApiRequest> {
    require_identifier("reference", reference)?;
    require_identifier("token", token)?;
    post_json(
        ClientMethod::AuthorizeMobileMoneyCharge,
        json!({ "reference": reference, "token": token }),
    )
}

pub fn resend_mobile_money_otp(transaction_reference: &str) -> Result<ApiRequest> {
    transaction_reference_only(ClientMethod::ResendMobileMoneyOtp, transaction_reference)
}

pub fn resend_stk(transaction_reference: &str) -> Result<ApiRequest> {
    transaction_reference_only(ClientMethod::ResendStk, transaction_reference)
}

pub fn authorize_stk(reference: &str, pin: &str) -> Result<ApiRequest> {
    require_identifier("reference", reference)?;
    require_identifier("pin", pin)?;
    post_json(ClientMethod::AuthorizeStk, json!({ "reference": reference, "pin": pin }))
}

pub fn initiate_charge(params: &InitiateChargeParams) -> Result<ApiRequest> {
    with_params(ClientMethod::InitiateCharge, params)
}

pub fn get_charge(reference: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetCharge, "reference", reference)
}

pub fn resolve_bank_account(bank_code: &str, account_number: &str) -> Result<ApiRequest> {
    require_identifier("bank_code", bank_code)?;
    require_identifier("account_number", account_number)?;
    post_json(
        ClientMethod::ResolveBankAccount,
        json!({ "bank": bank_code, "account": account_number }),
    )
}

pub fn get_balances() -> Result<ApiRequest> {
    Ok(ApiRequest::for_method(ClientMethod::GetBalances))
}

pub fn get_banks(country: Country) -> Result<ApiRequest> {
    Ok(ApiRequest::with_segment(ClientMethod::GetBanks, country.as_str()))
}

pub fn get_mmo(country: Country) -> Result<ApiRequest> {
    Ok(ApiRequest::with_segment(ClientMethod::GetMmo, country.as_str()))
}

pub fn payout_to_bank_account(params: &PayoutToBankAccountParams) -> Result<ApiRequest> {
    with_params(ClientMethod::PayoutToBankAccount, params)
}

pub fn payout_to_mobile_money(params: &PayoutToMobileMoneyParams) -> Result<ApiRequest> {
    with_params(ClientMethod::PayoutToMobileMoney, params)
}

pub fn bulk_payout_to_bank_account(params: &BulkPayoutParams) -> Result<ApiRequest> {
    with_params(ClientMethod::BulkPayoutToBankAccount, params)
}

pub fn get_payouts(bulk_reference: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetPayouts, "bulk_reference", bulk_reference)
}

pub fn get_bulk_transaction(bulk_reference: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetBulkTransaction, "bulk_reference", bulk_reference)
}

pub fn get_payout_transaction(transaction_reference: &str) -> Result<ApiRequest> {
    lookup(ClientMethod::GetPayoutTransaction, "transaction_reference", transaction_reference)
}

/// Escape hatch for endpoints without a dedicated method.
pub fn raw_request(
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    use_public_auth: bool,
) -> Result<ApiRequest> {
    let method = HttpMethod::parse(method)?;
    if !endpoint.starts_with('/') {
        return Err(KorapayError::invalid_parameter("endpoint", "must start with '/'"));
    }
    Ok(ApiRequest::raw(method, endpoint, body, use_public_auth))
}

fn transaction_reference_only(
    operation: ClientMethod,
    transaction_reference: &str,
) -> Result<ApiRequest> {
    require_identifier("transaction_reference", transaction_reference)?;
    post_json(operation, json!({ "transaction_reference": transaction_reference }))
}
