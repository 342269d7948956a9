//! Liquidity pool definitions.

use crate::error::{SwapError, SwapResult};
use crate::token::Token;
use crate::types::{U160, U24};
use std::fmt;

/// Snapshot of a concentrated-liquidity pool's curve at quote time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Current sqrt(price) as a Q64.96 fixed-point value.
    pub sqrt_price_x96: U160,
    /// In-range liquidity.
    pub liquidity: u128,
    /// Current tick index.
    pub tick_current: i32,
}

/// A single liquidity venue between two tokens.
///
/// The token order carries no direction: which side is swapped in is decided
/// when the pool is placed in a [`Route`](crate::route::Route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub token0: Token,
    pub token1: Token,
    /// Fee tier in hundredths of a basis point (500 = 0.05%).
    pub fee: u32,
    pub state: Option<PoolState>,
}

impl Pool {
    /// Create a pool without curve state.
    pub fn new(token0: Token, token1: Token, fee: u32) -> Self {
        Self {
            token0,
            token1,
            fee,
            state: None,
        }
    }

    /// Attach the curve snapshot reported with the quote.
    pub fn with_state(mut self, state: PoolState) -> Self {
        self.state = Some(state);
        self
    }

    /// The fee as the router's `uint24`. Fails with [`SwapError::InvalidQuote`] if it does not fit.
    pub fn fee_tier(&self) -> SwapResult<U24> {
        U24::try_from(self.fee).map_err(|_| {
            SwapError::InvalidQuote(format!("fee {} does not fit in uint24", self.fee))
        })
    }

    /// Check if this pool contains the given token.
    pub fn contains(&self, token: &Token) -> bool {
        &self.token0 == token || &self.token1 == token
    }

    /// Get the other token in the pool.
    pub fn other_token(&self, token: &Token) -> Option<&Token> {
        if &self.token0 == token {
            Some(&self.token1)
        } else if &self.token1 == token {
            Some(&self.token0)
        } else {
            None
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.token0.symbol, self.token1.symbol, self.fee)
    }
}
