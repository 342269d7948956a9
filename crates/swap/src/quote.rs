//! Wire format of quotes produced by the routing service.
//!
//! Numeric fields arrive as decimal strings; a few (decimals, chain id) are
//! sometimes plain JSON numbers, so both are accepted.

use crate::error::{SwapError, SwapResult};
use crate::types::Address;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// A quote with one or more candidate routes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// The requested amount, in minor units of the fixed side.
    pub amount: String,
    /// The counter-value, in minor units of the other side.
    pub quote: String,
    /// Candidate routes; each is a list of hops in input-to-output order.
    pub route: Vec<Vec<QuotedHop>>,
}

impl QuoteResponse {
    /// Parse a quote, reporting malformed JSON as [`SwapError::InvalidQuote`].
    pub fn from_json(json: &str) -> SwapResult<Self> {
        serde_json::from_str(json).map_err(|e| SwapError::InvalidQuote(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedToken {
    pub address: Address,
    pub chain_id: NumberOrString,
    #[serde(default)]
    pub symbol: String,
    pub decimals: NumberOrString,
}

/// One pool traversal as reported by the routing service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedHop {
    pub token_in: QuotedToken,
    pub token_out: QuotedToken,
    pub fee: NumberOrString,
    #[serde(default, alias = "sqrtRatioX96")]
    pub sqrt_price_x96: Option<String>,
    #[serde(default)]
    pub liquidity: Option<String>,
    #[serde(default)]
    pub tick_current: Option<NumberOrString>,
}

/// A numeric field that may be encoded as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    /// Parse into the target integer type, naming `field` in the error.
    pub fn parse<T>(&self, field: &str) -> SwapResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let text = match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s.trim().to_string(),
        };
        text.parse::<T>()
            .map_err(|e| SwapError::InvalidQuote(format!("{field} {text:?}: {e}")))
    }
}
