//! Macro for implementing wire-string conversions for closed enums
//!
//! Every enumeration the remote API accepts travels as a fixed string
//! (`"NGN"`, `"bank_transfer"`, `"KE"`). This macro generates, from a single
//! variant table, `as_str`, `Display`, case-insensitive `FromStr`, and the
//! serde impls so the table is the only place the strings appear.
//!
//! # Example
//!
//! ```rust
//! use korapay_domain::impl_wire_value_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SettlementSpeed {
//!     Instant,
//!     NextDay,
//! }
//!
//! impl_wire_value_conversions!(SettlementSpeed {
//!     Instant => "instant",
//!     NextDay => "next_day",
//! });
//!
//! assert_eq!(SettlementSpeed::NextDay.to_string(), "next_day");
//! assert_eq!("INSTANT".parse::<SettlementSpeed>().unwrap(), SettlementSpeed::Instant);
//! ```

/// Implements `as_str`, Display, FromStr, Serialize and Deserialize for a
/// fieldless enum from a variant → wire-string table.
///
/// Parsing is case-insensitive; output always uses the table's spelling.
#[macro_export]
macro_rules! impl_wire_value_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// The exact string sent on the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {} value: {}", stringify!($enum_name), s))
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
