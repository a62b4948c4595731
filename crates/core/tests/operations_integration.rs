//! Every operation, prepared end to end without a network.

mod support;

use korapay_core::{
    BulkPayoutParams, ChargeViaBankTransferParams, ChargeViaCardParams,
    ChargeViaMobileMoneyParams, CreateVirtualBankAccountParams, HttpRequest,
    InitiateChargeParams, KorapayApi, PayoutToBankAccountParams, PayoutToMobileMoneyParams,
};
use korapay_domain::{
    Authorization, BankAccount, Card, Country, Currency, Customer, Decimal, HttpMethod,
    KorapayError, MobileMoneyOperator, PaymentChannel, PayoutOrder,
};
use serde_json::json;
use support::{bearer, CapturingClient, BASE_URL, PUBLIC_KEY, SECRET_KEY};

fn assert_route(request: &HttpRequest, method: HttpMethod, path: &str) {
    assert_eq!(request.method, method);
    assert_eq!(request.url, format!("{BASE_URL}{path}"));
}

#[test]
fn card_operations() {
    let client = CapturingClient::new();

    let charge = client
        .charge_via_card(ChargeViaCardParams::new(
            "card-ref",
            "John Doe",
            "johndoe@example.com",
            Card::new("4084127883172787", "123", "09", "30"),
            1000,
            Currency::Ngn,
        ))
        .unwrap();
    assert_route(&charge, HttpMethod::Post, "/merchant/api/v1/charges/card");
    let envelope = charge.body.as_ref().unwrap()["charge_data"].as_str().unwrap().to_string();
    let segments: Vec<&str> = envelope.split(':').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].len(), 32);
    assert_eq!(segments[2].len(), 32);

    let authorize = client.authorize_card_charge("KPY-1", Authorization::otp("123456")).unwrap();
    assert_route(&authorize, HttpMethod::Post, "/merchant/api/v1/charges/card/authorize");
    assert_eq!(
        authorize.body,
        Some(json!({"transaction_reference": "KPY-1", "authorization": {"otp": "123456"}}))
    );

    let resend = client.resend_card_otp("KPY-1").unwrap();
    assert_route(&resend, HttpMethod::Post, "/merchant/api/v1/charges/card/resend-otp");
    assert_eq!(resend.body, Some(json!({"transaction_reference": "KPY-1"})));
}

#[test]
fn bank_transfer_and_virtual_account_operations() {
    let client = CapturingClient::new();

    let charge = client
        .charge_via_bank_transfer(
            ChargeViaBankTransferParams::new("bt-ref", 5000, Currency::Ngn)
                .with_customer_email("jane@example.com"),
        )
        .unwrap();
    assert_route(&charge, HttpMethod::Post, "/merchant/api/v1/charges/bank-transfer");
    assert_eq!(charge.body.unwrap()["customer"], json!({"email": "jane@example.com"}));

    let create = client
        .create_virtual_bank_account(CreateVirtualBankAccountParams::new(
            "Jane Store",
            "va-1",
            "035",
            "Jane Doe",
            "12345678901",
        ))
        .unwrap();
    assert_route(&create, HttpMethod::Post, "/merchant/api/v1/virtual-bank-account");

    let get = client.get_virtual_bank_account("va-1").unwrap();
    assert_route(&get, HttpMethod::Get, "/merchant/api/v1/virtual-bank-account/va-1");
    assert!(get.body.is_none());

    let transactions = client.get_virtual_bank_account_transactions("7000000001").unwrap();
    assert_route(
        &transactions,
        HttpMethod::Get,
        "/merchant/api/v1/virtual-bank-account/transactions?account_number=7000000001",
    );

    let credit = client
        .credit_sandbox_virtual_bank_account("7000000001", Decimal::new(10050, 2), Currency::Ngn)
        .unwrap();
    assert_route(&credit, HttpMethod::Post, "/merchant/api/v1/virtual-bank-account/sandbox/credit");
    assert_eq!(
        credit.body,
        Some(json!({"account_number": "7000000001", "amount": "100.50", "currency": "NGN"}))
    );
}

#[test]
fn mobile_money_operations() {
    let client = CapturingClient::new();

    let charge = client
        .charge_via_mobile_money(ChargeViaMobileMoneyParams::new(
            "mm-ref",
            "jane@example.com",
            100,
            "254700000000",
            Currency::Kes,
        ))
        .unwrap();
    assert_route(&charge, HttpMethod::Post, "/merchant/api/v1/charges/mobile-money");

    let authorize = client.authorize_mobile_money_charge("mm-ref", "123456").unwrap();
    assert_route(&authorize, HttpMethod::Post, "/merchant/api/v1/charges/mobile-money/authorize");
    assert_eq!(authorize.body, Some(json!({"reference": "mm-ref", "token": "123456"})));

    let otp = client.resend_mobile_money_otp("mm-ref").unwrap();
    assert_route(&otp, HttpMethod::Post, "/merchant/api/v1/charges/mobile-money/resend-otp");

    let stk = client.resend_stk("mm-ref").unwrap();
    assert_route(&stk, HttpMethod::Post, "/merchant/api/v1/charges/mobile-money/resend-stk");

    let authorize_stk = client.authorize_stk("mm-ref", "1234").unwrap();
    assert_route(
        &authorize_stk,
        HttpMethod::Post,
        "/merchant/api/v1/charges/mobile-money/sandbox/authorize-stk",
    );
    assert_eq!(authorize_stk.body, Some(json!({"reference": "mm-ref", "pin": "1234"})));
}

#[test]
fn checkout_and_lookup_operations() {
    let client = CapturingClient::new();

    let initiate = client
        .initiate_charge(InitiateChargeParams::new(
            "co-ref",
            2500,
            Currency::Ngn,
            "Order 1",
            "https://merchant.example/hook",
            "jane@example.com",
            PaymentChannel::BankTransfer,
        ))
        .unwrap();
    assert_route(&initiate, HttpMethod::Post, "/merchant/api/v1/charges/initialize");

    let charge = client.get_charge("co-ref").unwrap();
    assert_route(&charge, HttpMethod::Get, "/merchant/api/v1/charges/co-ref");

    let resolve = client.resolve_bank_account("033", "0000000000").unwrap();
    assert_route(&resolve, HttpMethod::Post, "/merchant/api/v1/misc/banks/resolve");

    let balances = client.get_balances().unwrap();
    assert_route(&balances, HttpMethod::Get, "/merchant/api/v1/balances");
    assert_eq!(balances.header("Authorization"), Some(bearer(SECRET_KEY).as_str()));

    let banks = client.get_banks(Country::Nigeria).unwrap();
    assert_route(&banks, HttpMethod::Get, "/merchant/api/v1/misc/banks?countryCode=NG");
    assert_eq!(banks.header("Authorization"), Some(bearer(PUBLIC_KEY).as_str()));

    let mmo = client.get_mmo(Country::Kenya).unwrap();
    assert_route(&mmo, HttpMethod::Get, "/merchant/api/v1/misc/mobile-money?countryCode=KE");
    assert_eq!(mmo.header("Authorization"), Some(bearer(PUBLIC_KEY).as_str()));
}

#[test]
fn payout_operations() {
    let client = CapturingClient::new();

    let bank = client
        .payout_to_bank_account(PayoutToBankAccountParams::new(
            "po-1",
            1000,
            Currency::Ngn,
            "033",
            "0000000000",
            "john@example.com",
        ))
        .unwrap();
    assert_route(&bank, HttpMethod::Post, "/merchant/api/v1/transactions/disburse");

    let wallet = client
        .payout_to_mobile_money(PayoutToMobileMoneyParams::new(
            "po-2",
            1000,
            Currency::Ghs,
            MobileMoneyOperator::MtnGhana,
            "233240000000",
            "kofi@example.com",
        ))
        .unwrap();
    assert_route(&wallet, HttpMethod::Post, "/merchant/api/v1/transactions/disburse");
    assert_eq!(wallet.body.unwrap()["destination"]["mobile_money"]["operator"], "mtn-gh");

    let order = PayoutOrder::new(
        "bulk-1-a",
        500,
        BankAccount::new("033", "0000000000"),
        Customer::new("john@example.com"),
    );
    let bulk = client
        .bulk_payout_to_bank_account(BulkPayoutParams::new("bulk-1", "Payroll", Currency::Ngn, [order]))
        .unwrap();
    assert_route(&bulk, HttpMethod::Post, "/api/v1/transactions/disburse/bulk");

    let payouts = client.get_payouts("bulk-1").unwrap();
    assert_route(&payouts, HttpMethod::Get, "/api/v1/transactions/bulk/bulk-1/payout");

    let batch = client.get_bulk_transaction("bulk-1").unwrap();
    assert_route(&batch, HttpMethod::Get, "/api/v1/transactions/bulk/bulk-1");

    let single = client.get_payout_transaction("po-1").unwrap();
    assert_route(&single, HttpMethod::Get, "/merchant/api/v1/transactions/po-1");
}

#[test]
fn raw_request_respects_body_policy() {
    let client = CapturingClient::default();

    let delete = client
        .raw_request("DELETE", "/merchant/api/v1/custom", Some(json!({"ignored": true})), false)
        .unwrap();
    assert_route(&delete, HttpMethod::Delete, "/merchant/api/v1/custom");
    assert!(delete.body.is_none());

    let patch =
        client.raw_request("patch", "/merchant/api/v1/custom", Some(json!({"a": 1})), true).unwrap();
    assert_eq!(patch.body, Some(json!({"a": 1})));
    assert_eq!(patch.header("Authorization"), Some(bearer(PUBLIC_KEY).as_str()));
}

#[test]
fn validation_errors_surface_before_preparation() {
    let client = CapturingClient::new();

    let err = client.get_charge("").unwrap_err();
    assert_eq!(err.invalid_fields(), vec!["reference"]);

    let err = client.authorize_card_charge("KPY-1", Authorization::default()).unwrap_err();
    assert!(matches!(err, KorapayError::ParameterValidation { .. }));

    let err = client.raw_request("CONNECT", "/x", None, false).unwrap_err();
    assert!(matches!(err, KorapayError::UnsupportedMethod(ref m) if m == "CONNECT"));
}
