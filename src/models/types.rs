//! Common domain type definitions
//!
//! This module contains the coercion enums shared across the pipeline:
//! gender, marital status, and the duck-typed yes/no answers the input
//! boundary accepts. Each type knows its numeric survey encoding.

use serde_json::Value;

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male, survey code 1
    Male,
    /// Female, survey code 2
    Female,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl Gender {
    /// Survey code, or `None` for unknown gender
    #[must_use]
    pub const fn code(self) -> Option<f64> {
        match self {
            Self::Male => Some(1.0),
            Self::Female => Some(2.0),
            Self::Unknown => None,
        }
    }
}

/// Marital status, closed survey vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    /// Code 1
    Married,
    /// Code 2
    Widowed,
    /// Code 3
    Divorced,
    /// Code 4
    Separated,
    /// Code 5
    NeverMarried,
    /// Code 6
    LivingWithPartner,
    /// Code 7, an explicit answer distinct from "unrecognized"
    Unknown,
}

impl MaritalStatus {
    /// Parse a free-text status; spaces and hyphens are treated as
    /// underscores. Unrecognized input is `None`, not [`Self::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "married" => Some(Self::Married),
            "widowed" => Some(Self::Widowed),
            "divorced" => Some(Self::Divorced),
            "separated" => Some(Self::Separated),
            "never_married" => Some(Self::NeverMarried),
            "living_with_partner" => Some(Self::LivingWithPartner),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Survey code 1-7
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::Married => 1.0,
            Self::Widowed => 2.0,
            Self::Divorced => 3.0,
            Self::Separated => 4.0,
            Self::NeverMarried => 5.0,
            Self::LivingWithPartner => 6.0,
            Self::Unknown => 7.0,
        }
    }
}

/// Answer to a yes/no survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// Affirmative, survey code 1
    Yes,
    /// Negative, survey code 2
    No,
}

impl YesNo {
    /// Read a duck-typed answer: booleans, numbers (0 is no), and the
    /// strings yes/no/true/false/1/0 in any case. Anything else is `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(if *b { Self::Yes } else { Self::No }),
            Value::Number(n) => {
                let v = n.as_f64()?;
                Some(if v == 0.0 { Self::No } else { Self::Yes })
            }
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Parse a string answer; unrecognized input is `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "true" | "1" => Some(Self::Yes),
            "no" | "false" | "0" => Some(Self::No),
            _ => None,
        }
    }

    /// Survey code: 1 for yes, 2 for no (not a boolean 0/1)
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 2.0,
        }
    }
}

/// Duck-typed truthiness for free-form JSON values.
///
/// `None` means the value carries no usable answer (null, empty string,
/// arrays, objects, unrecognized text).
#[must_use]
pub fn truthiness(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => YesNo::parse(s).map(|answer| answer == YesNo::Yes),
        _ => None,
    }
}
