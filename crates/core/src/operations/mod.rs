//! Operation table and request builders
//!
//! [`ClientMethod`] is the single place where each remote operation's HTTP
//! method, path and authentication mode are declared. The builders in
//! [`builders`] turn caller arguments into an [`ApiRequest`] using that
//! table; they are pure and never touch the network.

pub mod builders;

use korapay_domain::HttpMethod;
use serde_json::Value;

/// Every remote operation the client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientMethod {
    ChargeViaCard,
    AuthorizeCardCharge,
    ResendCardOtp,
    ChargeViaBankTransfer,
    CreateVirtualBankAccount,
    GetVirtualBankAccount,
    GetVirtualBankAccountTransactions,
    CreditSandboxVirtualBankAccount,
    ChargeViaMobileMoney,
    AuthorizeMobileMoneyCharge,
    ResendMobileMoneyOtp,
    ResendStk,
    AuthorizeStk,
    InitiateCharge,
    GetCharge,
    ResolveBankAccount,
    GetBalances,
    GetBanks,
    GetMmo,
    PayoutToBankAccount,
    PayoutToMobileMoney,
    BulkPayoutToBankAccount,
    GetPayouts,
    GetBulkTransaction,
    GetPayoutTransaction,
}

/// HTTP method, path template and auth mode of one operation.
///
/// A `{}` in `path` is replaced by a single percent-encoded caller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: &'static str,
    pub public_auth: bool,
}

const fn secret(method: HttpMethod, path: &'static str) -> Route {
    Route { method, path, public_auth: false }
}

const fn public(method: HttpMethod, path: &'static str) -> Route {
    Route { method, path, public_auth: true }
}

impl ClientMethod {
    pub const ALL: [Self; 25] = [
        Self::ChargeViaCard,
        Self::AuthorizeCardCharge,
        Self::ResendCardOtp,
        Self::ChargeViaBankTransfer,
        Self::CreateVirtualBankAccount,
        Self::GetVirtualBankAccount,
        Self::GetVirtualBankAccountTransactions,
        Self::CreditSandboxVirtualBankAccount,
        Self::ChargeViaMobileMoney,
        Self::AuthorizeMobileMoneyCharge,
        Self::ResendMobileMoneyOtp,
        Self::ResendStk,
        Self::AuthorizeStk,
        Self::InitiateCharge,
        Self::GetCharge,
        Self::ResolveBankAccount,
        Self::GetBalances,
        Self::GetBanks,
        Self::GetMmo,
        Self::PayoutToBankAccount,
        Self::PayoutToMobileMoney,
        Self::BulkPayoutToBankAccount,
        Self::GetPayouts,
        Self::GetBulkTransaction,
        Self::GetPayoutTransaction,
    ];

    pub const fn route(self) -> Route {
        use HttpMethod::{Get, Post};

        match self {
            Self::ChargeViaCard => secret(Post, "/merchant/api/v1/charges/card"),
            Self::AuthorizeCardCharge => secret(Post, "/merchant/api/v1/charges/card/authorize"),
            Self::ResendCardOtp => secret(Post, "/merchant/api/v1/charges/card/resend-otp"),
            Self::ChargeViaBankTransfer => secret(Post, "/merchant/api/v1/charges/bank-transfer"),
            Self::CreateVirtualBankAccount => secret(Post, "/merchant/api/v1/virtual-bank-account"),
            Self::GetVirtualBankAccount => secret(Get, "/merchant/api/v1/virtual-bank-account/{}"),
            Self::GetVirtualBankAccountTransactions => secret(
                Get,
                "/merchant/api/v1/virtual-bank-account/transactions?account_number={}",
            ),
            Self::CreditSandboxVirtualBankAccount => {
                secret(Post, "/merchant/api/v1/virtual-bank-account/sandbox/credit")
            }
            Self::ChargeViaMobileMoney => secret(Post, "/merchant/api/v1/charges/mobile-money"),
            Self::AuthorizeMobileMoneyCharge => {
                secret(Post, "/merchant/api/v1/charges/mobile-money/authorize")
            }
            Self::ResendMobileMoneyOtp => {
                secret(Post, "/merchant/api/v1/charges/mobile-money/resend-otp")
            }
            Self::ResendStk => secret(Post, "/merchant/api/v1/charges/mobile-money/resend-stk"),
            Self::AuthorizeStk => {
                secret(Post, "/merchant/api/v1/charges/mobile-money/sandbox/authorize-stk")
            }
            Self::InitiateCharge => secret(Post, "/merchant/api/v1/charges/initialize"),
            Self::GetCharge => secret(Get, "/merchant/api/v1/charges/{}"),
            Self::ResolveBankAccount => secret(Post, "/merchant/api/v1/misc/banks/resolve"),
            Self::GetBalances => secret(Get, "/merchant/api/v1/balances"),
            Self::GetBanks => public(Get, "/merchant/api/v1/misc/banks?countryCode={}"),
            Self::GetMmo => public(Get, "/merchant/api/v1/misc/mobile-money?countryCode={}"),
            Self::PayoutToBankAccount | Self::PayoutToMobileMoney => {
                secret(Post, "/merchant/api/v1/transactions/disburse")
            }
            Self::BulkPayoutToBankAccount => secret(Post, "/api/v1/transactions/disburse/bulk"),
            Self::GetPayouts => secret(Get, "/api/v1/transactions/bulk/{}/payout"),
            Self::GetBulkTransaction => secret(Get, "/api/v1/transactions/bulk/{}"),
            Self::GetPayoutTransaction => secret(Get, "/merchant/api/v1/transactions/{}"),
        }
    }

    /// Snake-case operation name, used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChargeViaCard => "charge_via_card",
            Self::AuthorizeCardCharge => "authorize_card_charge",
            Self::ResendCardOtp => "resend_card_otp",
            Self::ChargeViaBankTransfer => "charge_via_bank_transfer",
            Self::CreateVirtualBankAccount => "create_virtual_bank_account",
            Self::GetVirtualBankAccount => "get_virtual_bank_account",
            Self::GetVirtualBankAccountTransactions => "get_virtual_bank_account_transactions",
            Self::CreditSandboxVirtualBankAccount => "credit_sandbox_virtual_bank_account",
            Self::ChargeViaMobileMoney => "charge_via_mobile_money",
            Self::AuthorizeMobileMoneyCharge => "authorize_mobile_money_charge",
            Self::ResendMobileMoneyOtp => "resend_mobile_money_otp",
            Self::ResendStk => "resend_stk",
            Self::AuthorizeStk => "authorize_stk",
            Self::InitiateCharge => "initiate_charge",
            Self::GetCharge => "get_charge",
            Self::ResolveBankAccount => "resolve_bank_account",
            Self::GetBalances => "get_balances",
            Self::GetBanks => "get_banks",
            Self::GetMmo => "get_mmo",
            Self::PayoutToBankAccount => "payout_to_bank_account",
            Self::PayoutToMobileMoney => "payout_to_mobile_money",
            Self::BulkPayoutToBankAccount => "bulk_payout_to_bank_account",
            Self::GetPayouts => "get_payouts",
            Self::GetBulkTransaction => "get_bulk_transaction",
            Self::GetPayoutTransaction => "get_payout_transaction",
        }
    }
}

/// A fully built, not yet authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path (and query) relative to the base origin
    pub endpoint: String,
    pub body: Option<Value>,
    pub use_public_auth: bool,
    /// Operation that produced this request; `None` for raw requests
    pub operation: Option<ClientMethod>,
}

impl ApiRequest {
    /// Request for an operation whose path has no placeholder.
    pub fn for_method(operation: ClientMethod) -> Self {
        let route = operation.route();
        Self {
            method: route.method,
            endpoint: route.path.to_string(),
            body: None,
            use_public_auth: route.public_auth,
            operation: Some(operation),
        }
    }

    /// Request for an operation whose path embeds one caller value.
    pub fn with_segment(operation: ClientMethod, segment: &str) -> Self {
        let mut request = Self::for_method(operation);
        request.endpoint = request.endpoint.replacen("{}", &urlencoding::encode(segment), 1);
        request
    }

    /// Caller-assembled request outside the operation table.
    pub fn raw(
        method: HttpMethod,
        endpoint: impl Into<String>,
        body: Option<Value>,
        use_public_auth: bool,
    ) -> Self {
        Self { method, endpoint: endpoint.into(), body, use_public_auth, operation: None }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Name used in logs.
    pub fn label(&self) -> &'static str {
        self.operation.map_or("raw_request", ClientMethod::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn only_lookup_endpoints_use_public_key() {
        let public: Vec<_> =
            ClientMethod::ALL.iter().filter(|m| m.route().public_auth).copied().collect();
        assert_eq!(public, vec![ClientMethod::GetBanks, ClientMethod::GetMmo]);
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = ClientMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), ClientMethod::ALL.len());
    }

    #[test]
    fn placeholders_only_on_get_routes() {
        for method in ClientMethod::ALL {
            let route = method.route();
            if route.path.contains("{}") {
                assert_eq!(route.method, HttpMethod::Get, "{}", method.as_str());
            }
        }
    }

    #[test]
    fn segment_is_percent_encoded() {
        let request = ApiRequest::with_segment(ClientMethod::GetCharge, "ref/with space");
        assert_eq!(request.endpoint, "/merchant/api/v1/charges/ref%2Fwith%20space");
        assert_eq!(request.label(), "get_charge");
    }

    #[test]
    fn bulk_routes_skip_merchant_prefix() {
        assert_eq!(
            ApiRequest::with_segment(ClientMethod::GetPayouts, "batch-1").endpoint,
            "/api/v1/transactions/bulk/batch-1/payout"
        );
        assert_eq!(
            ClientMethod::BulkPayoutToBankAccount.route().path,
            "/api/v1/transactions/disburse/bulk"
        );
    }
}
