//! # Parser Options
//!
//! Knobs controlling how annotation values are coerced.

use serde::{Deserialize, Serialize};

/// How values of numeric annotations (`minimum`, `maxItems`, ...) are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericCoercion {
    /// Try a float parse unless the value starts with `.`, then an integer
    /// parse. Plain integers therefore come out as floats (`"3"` -> `3.0`).
    /// Matches specifications generated by earlier tooling.
    #[default]
    FloatFirst,
    /// Integer when the value has no decimal point, float otherwise.
    IntegerFirst,
}

/// What to do with a boolean annotation whose value is not `true`/`false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BooleanFallback {
    /// Abort the section with a type coercion error.
    #[default]
    Fail,
    /// Keep the raw value as text.
    Text,
}

/// Options shared by every section handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParserOptions {
    /// Numeric coercion policy.
    pub numeric_coercion: NumericCoercion,
    /// Boolean fallback policy.
    pub boolean_fallback: BooleanFallback,
}

impl ParserOptions {
    /// Loads options from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
