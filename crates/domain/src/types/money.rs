//! Monetary amounts

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount in the major unit of its currency.
///
/// Integers and floats are sent as JSON numbers. Decimals are sent as
/// strings so no precision is lost on the way to the remote API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Amount {
    /// `false` for NaN or infinite floats, which have no JSON representation.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite(),
            Self::Integer(_) | Self::Decimal(_) => true,
        }
    }

    /// Whether the amount is strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(value) => *value < 0,
            Self::Float(value) => *value < 0.0,
            Self::Decimal(value) => value.is_sign_negative() && !value.is_zero(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Decimal(value) => serializer.collect_str(value),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match AmountRepr::deserialize(deserializer)? {
            AmountRepr::Integer(value) => Ok(Self::Integer(value)),
            AmountRepr::Float(value) => Ok(Self::Float(value)),
            AmountRepr::Text(text) => Decimal::from_str(&text)
                .map(Self::Decimal)
                .map_err(<D::Error as serde::de::Error>::custom),
        }
    }
}

macro_rules! amount_from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Amount {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )+
    };
}

amount_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Amount {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}
