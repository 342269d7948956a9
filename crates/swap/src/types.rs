//! Core type definitions for the swap engine.
//!
//! Re-exports from alloy-primitives for Ethereum-compatible types.

pub use alloy::primitives::{aliases::U24, Address, Bytes, B256, U160, U256};

/// Native asset identifier (zero address).
/// Tokens at this address are paid as transaction value rather than via ERC-20 transfer.
pub const NATIVE_TOKEN: Address = Address::ZERO;

/// Amount of tokens in the smallest unit (wei for ETH, smallest decimal for ERC-20).
pub type Amount = U256;

/// Denominator for basis-point ratios (1 bp = 0.01%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Direction of a trade: which side of the swap is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeType {
    /// The input amount is fixed; the output is bounded from below.
    ExactInput,
    /// The output amount is fixed; the input is bounded from above.
    ExactOutput,
}

impl TradeType {
    pub fn is_exact_input(&self) -> bool {
        matches!(self, TradeType::ExactInput)
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::ExactInput => write!(f, "exact-input"),
            TradeType::ExactOutput => write!(f, "exact-output"),
        }
    }
}

impl std::str::FromStr for TradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact-input" | "exact_input" | "exactin" | "exact-in" => Ok(TradeType::ExactInput),
            "exact-output" | "exact_output" | "exactout" | "exact-out" => {
                Ok(TradeType::ExactOutput)
            }
            other => Err(format!("unknown trade type: {other}")),
        }
    }
}
