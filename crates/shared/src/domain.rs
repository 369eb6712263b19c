use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! closed_id {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

closed_id!(ItemId, "grid item", {
    Hero => "hero",
    DevSolutions => "dev-solutions",
    Conseil => "conseil",
    Optimisation => "optimisation",
    DataAnalysis => "data-analysis",
    Automatisation => "automatisation",
    Formation => "formation",
    Maintenance => "maintenance",
    Finance => "finance",
    WhyUs => "why-us",
    Contact => "contact",
    Team => "team",
});

closed_id!(Locale, "locale", {
    Fr => "fr",
    En => "en",
});

impl ItemId {
    pub fn is_hero(self) -> bool {
        self == ItemId::Hero
    }
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Fr;

    pub fn toggled(self) -> Locale {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Logo,
    Content,
    Stat,
}

/// Tone of the text drawn on top of a tile background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    /// Light text sits on a dark surface.
    pub fn is_dark_theme(self) -> bool {
        self == TextTone::Light
    }
}
