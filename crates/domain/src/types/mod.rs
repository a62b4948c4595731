//! Domain types and models

pub mod credentials;
pub mod enums;
pub mod http;
pub mod money;
pub mod payment;
pub mod response;

pub use credentials::{CredentialKind, Credentials};
pub use enums::{Country, Currency, MobileMoneyOperator, PaymentChannel, PayoutType};
pub use http::HttpMethod;
pub use money::Amount;
pub use rust_decimal::Decimal;
pub use payment::{Authorization, Avs, BankAccount, Card, Customer, Metadata, PayoutOrder};
pub use response::Response;
