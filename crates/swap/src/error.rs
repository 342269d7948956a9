//! Error types for swap construction and execution.

use crate::signer::SignerError;
use crate::types::{Address, U256};

/// Errors that can occur while building or executing a swap.
///
/// None of these are retried by the engine; every failure is surfaced to the
/// caller, who owns any retry policy.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    /// The pool sequence does not connect the declared input to the declared output.
    #[error("route mismatch: {0}")]
    RouteMismatch(String),

    /// Arithmetic was attempted across amounts of different tokens.
    #[error("token mismatch: {left} vs {right}")]
    TokenMismatch { left: Address, right: Address },

    /// Slippage tolerance outside [0, 10000] basis points.
    #[error("invalid slippage tolerance: {0} bps")]
    InvalidSlippage(u32),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An amount computation exceeded the 256-bit range or went negative.
    #[error("amount overflow: {0}")]
    Overflow(String),

    /// The quote payload could not be turned into a trade.
    #[error("invalid quote: {0}")]
    InvalidQuote(String),

    /// Allowance read, approval submission or approval confirmation failed.
    #[error("approval failed for token {token}: {source}")]
    ApprovalFailure {
        token: Address,
        #[source]
        source: SignerError,
    },

    /// The dry-run call reverted; the swap was not sent.
    #[error("simulation reverted: {0}")]
    SimulationRevert(String),

    /// Gas estimation failed after a successful simulation.
    #[error("gas estimation failed: {0}")]
    EstimationFailure(String),

    /// Signing or broadcasting the swap failed.
    #[error("submission failed: {0}")]
    SubmissionFailure(String),
}

impl SwapError {
    pub(crate) fn overflow(what: &str, value: U256) -> Self {
        SwapError::Overflow(format!("{what} overflowed at {value}"))
    }
}

pub type SwapResult<T> = Result<T, SwapError>;
