//! Categorical attributes of catalog items
//!
//! Each attribute is a closed enumeration. Parsing from user input is
//! case-insensitive and reports the accepted values on failure, so the
//! same error can be shown directly to an end user.

use crate::query::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Field name used in messages
            pub const LABEL: &'static str = $label;

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Comma-separated list of accepted values
            pub fn expected() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl FromStr for $name {
            type Err = QueryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| QueryError::UnknownValue {
                        field: $label,
                        value: s.to_string(),
                        expected: Self::expected(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Equality with wildcard support.
///
/// A wildcard on either side is compatible with any value.
pub trait Attribute: Copy + PartialEq {
    fn is_wildcard(self) -> bool {
        false
    }

    fn compatible_with(self, wanted: Self) -> bool {
        self == wanted || self.is_wildcard() || wanted.is_wildcard()
    }
}

categorical! {
    /// How the unit is mounted
    Installation as "installation" {
        Surface => "surface",
        Submersible => "submersible",
        Inline => "inline",
    }
}

categorical! {
    /// Electrical supply
    Phase as "phase" {
        Single => "single",
        Three => "three",
        /// Runs on either supply
        Both => "both",
    }
}

categorical! {
    /// Wetted-parts material
    Material as "material" {
        CastIron => "cast_iron",
        StainlessSteel => "stainless_steel",
        Bronze => "bronze",
        Thermoplastic => "thermoplastic",
    }
}

categorical! {
    /// Application category an item is suitable for
    Application as "application" {
        WaterSupply => "water_supply",
        Irrigation => "irrigation",
        Drainage => "drainage",
        Sewage => "sewage",
        Heating => "heating",
        PressureBoosting => "pressure_boosting",
    }
}

impl Attribute for Installation {}

impl Attribute for Phase {
    fn is_wildcard(self) -> bool {
        self == Phase::Both
    }
}

impl Attribute for Material {}
