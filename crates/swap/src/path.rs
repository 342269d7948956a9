//! Packed path encoding for multi-hop router calls.
//!
//! A path is `token (20 bytes) || fee (3 bytes, big-endian) || token || ... || token`.
//! Exact-input swaps walk it input first; exact-output swaps walk it output first.

use crate::error::SwapResult;
use crate::pool::Pool;
use crate::route::Route;
use crate::types::{Address, Bytes, TradeType};

const ADDR_SIZE: usize = 20;
const FEE_SIZE: usize = 3;

/// Encodes routes into router paths, substituting native tokens with their wrapped form.
#[derive(Debug, Clone, Copy)]
pub struct PathEncoder {
    wrapped_native: Address,
}

impl PathEncoder {
    /// `wrapped_native` replaces the zero address wherever a native token appears.
    pub fn new(wrapped_native: Address) -> Self {
        Self { wrapped_native }
    }

    /// Encode the route in the order the router expects for `trade_type`.
    ///
    /// Fails with [`SwapError::InvalidQuote`](crate::error::SwapError::InvalidQuote)
    /// if a pool fee does not fit in three bytes.
    pub fn encode(&self, route: &Route, trade_type: TradeType) -> SwapResult<Bytes> {
        let mut out = Vec::with_capacity(route.len() * (ADDR_SIZE + FEE_SIZE) + ADDR_SIZE);

        match trade_type {
            TradeType::ExactInput => {
                for (i, hop) in route.hops().enumerate() {
                    if i == 0 {
                        out.extend_from_slice(hop.token_in.router_address(self.wrapped_native).as_slice());
                    }
                    out.extend_from_slice(&fee_bytes(hop.pool)?);
                    out.extend_from_slice(hop.token_out.router_address(self.wrapped_native).as_slice());
                }
            }
            TradeType::ExactOutput => {
                for (i, hop) in route.hops().rev().enumerate() {
                    if i == 0 {
                        out.extend_from_slice(hop.token_out.router_address(self.wrapped_native).as_slice());
                    }
                    out.extend_from_slice(&fee_bytes(hop.pool)?);
                    out.extend_from_slice(hop.token_in.router_address(self.wrapped_native).as_slice());
                }
            }
        }

        Ok(out.into())
    }
}

/// The pool fee as three big-endian bytes.
fn fee_bytes(pool: &Pool) -> SwapResult<[u8; FEE_SIZE]> {
    Ok(pool.fee_tier()?.to_be_bytes::<FEE_SIZE>())
}
