//! Token and amount value objects.

use crate::error::{SwapError, SwapResult};
use crate::types::{Address, Amount, NATIVE_TOKEN, U256};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ERC-20 token (or the chain's native asset) on a specific chain.
///
/// Two tokens are equal when they share a chain id and address. Decimals and
/// symbol are descriptive and do not take part in equality.
#[derive(Debug, Clone)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
}

impl Token {
    /// Create a new token.
    pub fn new(chain_id: u64, address: Address, decimals: u8, symbol: impl Into<String>) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
        }
    }

    /// The chain's native asset (ETH on mainnet), addressed as the zero address.
    pub fn native(chain_id: u64) -> Self {
        Self::new(chain_id, NATIVE_TOKEN, 18, "ETH")
    }

    /// Whether this token is paid as transaction value instead of via `transferFrom`.
    pub fn is_native(&self) -> bool {
        self.address == NATIVE_TOKEN
    }

    /// Address to use in router calls. Native tokens route through their wrapped form.
    pub fn router_address(&self, wrapped_native: Address) -> Address {
        if self.is_native() {
            wrapped_native
        } else {
            self.address
        }
    }
}

// Address comparison is byte-wise, so hex casing never matters here.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}

/// An amount of a specific token, in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    pub token: Token,
    pub raw: Amount,
}

impl TokenAmount {
    /// Create an amount of `token` in minor units.
    pub fn new(token: Token, raw: Amount) -> Self {
        Self { token, raw }
    }

    /// Parse an amount from a decimal string of minor units, e.g. `"100000"`.
    pub fn from_raw_str(token: Token, raw: &str) -> SwapResult<Self> {
        let raw = parse_raw(raw)?;
        Ok(Self { token, raw })
    }

    /// Zero of `token`.
    pub fn zero(token: Token) -> Self {
        Self {
            token,
            raw: U256::ZERO,
        }
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Add two amounts of the same token.
    ///
    /// Fails with [`SwapError::TokenMismatch`] across tokens or [`SwapError::Overflow`].
    pub fn checked_add(&self, other: &TokenAmount) -> SwapResult<TokenAmount> {
        self.ensure_same_token(other)?;
        let raw = self
            .raw
            .checked_add(other.raw)
            .ok_or_else(|| SwapError::overflow("addition", self.raw))?;
        Ok(Self::new(self.token.clone(), raw))
    }

    /// Subtract `other`, failing on a token mismatch or underflow.
    pub fn checked_sub(&self, other: &TokenAmount) -> SwapResult<TokenAmount> {
        self.ensure_same_token(other)?;
        let raw = self.raw.checked_sub(other.raw).ok_or_else(|| {
            SwapError::Overflow(format!("subtraction underflow: {} - {}", self.raw, other.raw))
        })?;
        Ok(Self::new(self.token.clone(), raw))
    }

    /// Render the amount in whole units, trimming trailing zeros (`100000` at 6 decimals is `"0.1"`).
    pub fn to_exact(&self) -> String {
        let Some(scale) = U256::from(10u64).checked_pow(U256::from(self.token.decimals)) else {
            return self.raw.to_string();
        };
        let whole = self.raw / scale;
        let frac = self.raw % scale;
        if frac.is_zero() {
            return whole.to_string();
        }
        let frac = format!("{:0>width$}", frac.to_string(), width = self.token.decimals as usize);
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }

    fn ensure_same_token(&self, other: &TokenAmount) -> SwapResult<()> {
        if self.token != other.token {
            return Err(SwapError::TokenMismatch {
                left: self.token.address,
                right: other.token.address,
            });
        }
        Ok(())
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token.symbol)
    }
}

/// Parse a base-10 string of minor units into an amount.
pub(crate) fn parse_raw(raw: &str) -> SwapResult<Amount> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SwapError::InvalidAmount(format!(
            "expected decimal minor units, got {raw:?}"
        )));
    }
    U256::from_str_radix(trimmed, 10)
        .map_err(|e| SwapError::InvalidAmount(format!("{raw:?}: {e}")))
}
