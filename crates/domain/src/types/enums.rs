//! Closed enumerations accepted by the remote API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::impl_wire_value_conversions;

/// Currencies supported by Korapay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Ngn,
    Kes,
    Ghs,
    Usd,
}

impl_wire_value_conversions!(Currency {
    Ngn => "NGN",
    Kes => "KES",
    Ghs => "GHS",
    Usd => "USD",
});

/// Payment channels a checkout can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentChannel {
    Card,
    BankTransfer,
    MobileMoney,
}

impl_wire_value_conversions!(PaymentChannel {
    Card => "card",
    BankTransfer => "bank_transfer",
    MobileMoney => "mobile_money",
});

/// Countries used for bank and mobile-money operator listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Nigeria,
    Kenya,
    Ghana,
}

impl_wire_value_conversions!(Country {
    Nigeria => "NG",
    Kenya => "KE",
    Ghana => "GH",
});

/// Destination type of a payout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PayoutType {
    #[default]
    BankAccount,
    MobileMoney,
}

impl_wire_value_conversions!(PayoutType {
    BankAccount => "bank_account",
    MobileMoney => "mobile_money",
});

/// Mobile money operator.
///
/// The named variants are the operators known at the time of writing; the
/// list is advisory, so [`MobileMoneyOperator::Other`] carries any other
/// operator code verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MobileMoneyOperator {
    SafaricomKenya,
    AirtelKenya,
    AirtelGhana,
    MtnGhana,
    Other(String),
}

impl MobileMoneyOperator {
    /// The operator code sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SafaricomKenya => "safaricom-ke",
            Self::AirtelKenya => "airtel-ke",
            Self::AirtelGhana => "airtel-gh",
            Self::MtnGhana => "mtn-gh",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for MobileMoneyOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MobileMoneyOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known = [Self::SafaricomKenya, Self::AirtelKenya, Self::AirtelGhana, Self::MtnGhana];
        Ok(known
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_else(|| Self::Other(s.to_string())))
    }
}

impl From<&str> for MobileMoneyOperator {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<String> for MobileMoneyOperator {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Serialize for MobileMoneyOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MobileMoneyOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_round_trips_through_text() {
        for currency in Currency::ALL {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), *currency);
        }
        assert_eq!("ngn".parse::<Currency>().unwrap(), Currency::Ngn);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn channel_serializes_as_snake_case() {
        let json = serde_json::to_string(&[PaymentChannel::Card, PaymentChannel::BankTransfer])
            .unwrap();
        assert_eq!(json, r#"["card","bank_transfer"]"#);
    }

    #[test]
    fn country_uses_iso_codes() {
        assert_eq!(Country::Kenya.to_string(), "KE");
        assert_eq!(serde_json::from_str::<Country>(r#""gh""#).unwrap(), Country::Ghana);
    }

    #[test]
    fn operator_accepts_unknown_codes() {
        assert_eq!(MobileMoneyOperator::from("mtn-gh"), MobileMoneyOperator::MtnGhana);
        assert_eq!(
            MobileMoneyOperator::from("vodafone-gh"),
            MobileMoneyOperator::Other("vodafone-gh".into())
        );
        assert_eq!(
            serde_json::to_string(&MobileMoneyOperator::Other("tigo-gh".into())).unwrap(),
            r#""tigo-gh""#
        );
    }

    #[test]
    fn payout_type_defaults_to_bank_account() {
        assert_eq!(PayoutType::default().as_str(), "bank_account");
    }
}
