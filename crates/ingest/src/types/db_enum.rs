// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Enums persisted by a stable integer code.

use crate::errors::DeserializationError;
use crate::utils::format::constant_to_display;

/// Closed set of named constants with a stable integer code.
///
/// In the database a member is stored as a single character, `'A'` for code
/// 1, `'B'` for code 2 and so on. Towards APIs it is the lowercase constant
/// name with underscores turned into spaces.
pub trait DbEnum: Sized + Copy + 'static {
    /// Human readable name of the enum, used in error messages.
    const NAME: &'static str;

    fn variants() -> &'static [Self];

    fn code(&self) -> u8;

    /// Upper snake case name, e.g. `SETTLEMENT_BUY`.
    fn constant_name(&self) -> &'static str;

    fn serialize(&self) -> String {
        constant_to_display(self.constant_name())
    }

    fn serialize_for_db(&self) -> char {
        char::from(b'A' + self.code() - 1)
    }

    fn deserialize_from_db(value: char) -> Result<Self, DeserializationError> {
        let code = (value as u32).checked_sub(u32::from(b'A') - 1);
        Self::variants()
            .iter()
            .copied()
            .find(|v| code == Some(u32::from(v.code())))
            .ok_or_else(|| {
                DeserializationError::new(format!(
                    "Failed to deserialize {} DB value from invalid character {:?}",
                    Self::NAME,
                    value
                ))
            })
    }

    /// Case-insensitive exact-name match, spaces standing in for underscores.
    fn deserialize_by_name(value: &str) -> Result<Self, DeserializationError> {
        let wanted = value.replace(' ', "_").to_uppercase();
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.constant_name() == wanted)
            .ok_or_else(|| {
                DeserializationError::new(format!(
                    "Failed to deserialize {} value {}",
                    Self::NAME,
                    value
                ))
            })
    }
}

/// Declare a [`DbEnum`] together with its `Display`, `FromStr` and serde impls.
///
/// The enum must provide an inherent `deserialize(&str)`; `FromStr` and serde
/// go through it so an enum can swap in its own matching rules.
macro_rules! define_db_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $display_name:literal {
            $($variant:ident = $code:literal, $constant:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant = $code,)+
        }

        impl $crate::types::db_enum::DbEnum for $name {
            const NAME: &'static str = $display_name;

            fn variants() -> &'static [Self] {
                &[$($name::$variant,)+]
            }

            fn code(&self) -> u8 {
                *self as u8
            }

            fn constant_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $constant,)+
                }
            }
        }

        impl $name {
            /// Fails fast on anything that is not a JSON string.
            pub fn deserialize_value(
                value: &serde_json::Value,
            ) -> Result<Self, $crate::errors::DeserializationError> {
                match value.as_str() {
                    Some(s) => $name::deserialize(s),
                    None => Err($crate::errors::DeserializationError::new(format!(
                        "Failed to deserialize {} symbol from {} entry",
                        $display_name,
                        $crate::types::value::json_kind(value)
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::types::db_enum::DbEnum::serialize(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::DeserializationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::deserialize(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&$crate::types::db_enum::DbEnum::serialize(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $name::deserialize(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_db_enum;
