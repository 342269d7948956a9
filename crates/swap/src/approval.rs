//! Spending allowance checks ahead of a swap.

use crate::error::{SwapError, SwapResult};
use crate::signer::{SignerError, SwapSigner};
use crate::token::TokenAmount;
use crate::trade::Trade;
use crate::types::{Address, B256, U256};
use tracing::{debug, info, warn};

/// What the coordinator did for a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The input is the native asset; it travels as transaction value.
    NativeInput,
    /// The existing allowance already covers the trade.
    Sufficient { allowance: U256 },
    /// An approval was sent and mined.
    Approved { tx_hash: B256, amount: U256 },
}

impl ApprovalOutcome {
    /// Hash of the approval transaction, if one was sent.
    pub fn tx_hash(&self) -> Option<B256> {
        match self {
            ApprovalOutcome::Approved { tx_hash, .. } => Some(*tx_hash),
            _ => None,
        }
    }
}

/// Ensures the router may pull the trade's worst-case input before the swap is attempted.
#[derive(Debug, Clone, Copy)]
pub struct ApprovalCoordinator {
    spender: Address,
    unlimited: bool,
}

impl ApprovalCoordinator {
    /// Coordinator approving `spender`, normally the router.
    pub fn new(spender: Address) -> Self {
        Self {
            spender,
            unlimited: false,
        }
    }

    /// Approve `U256::MAX` instead of the exact requirement.
    pub fn with_unlimited(mut self, unlimited: bool) -> Self {
        self.unlimited = unlimited;
        self
    }

    pub fn spender(&self) -> Address {
        self.spender
    }

    /// Amount the router may pull: the fixed input for exact-input trades,
    /// the slippage-bounded maximum for exact-output trades.
    pub fn required_amount(trade: &Trade, tolerance_bps: u32) -> SwapResult<TokenAmount> {
        trade.maximum_amount_in(tolerance_bps)
    }

    /// Read the allowance and, if it falls short, send one approval and wait for it to be mined.
    ///
    /// Any signer failure becomes [`SwapError::ApprovalFailure`]; the swap must not proceed.
    pub async fn ensure<S: SwapSigner>(
        &self,
        signer: &S,
        trade: &Trade,
        tolerance_bps: u32,
    ) -> SwapResult<ApprovalOutcome> {
        let token = trade.input_amount().token.clone();

        if token.is_native() {
            info!(token = %token.symbol, "approval skipped: native input");
            return Ok(ApprovalOutcome::NativeInput);
        }

        let required = Self::required_amount(trade, tolerance_bps)?.raw;
        let owner = signer.address();

        let allowance = signer
            .allowance(token.address, owner, self.spender)
            .await
            .map_err(|source| SwapError::ApprovalFailure {
                token: token.address,
                source,
            })?;

        debug!(
            token = %token.symbol,
            %owner,
            spender = %self.spender,
            %allowance,
            %required,
            "allowance read"
        );

        if allowance >= required {
            info!(token = %token.symbol, %allowance, %required, "approval skipped: allowance sufficient");
            return Ok(ApprovalOutcome::Sufficient { allowance });
        }

        let amount = if self.unlimited { U256::MAX } else { required };
        info!(token = %token.symbol, %allowance, %required, %amount, "approval required");

        let approval_failure = |source: SignerError| {
            warn!(token = %token.symbol, error = %source, "approval failed");
            SwapError::ApprovalFailure {
                token: token.address,
                source,
            }
        };

        let tx_hash = signer
            .send_approval(token.address, self.spender, amount)
            .await
            .map_err(approval_failure)?;
        signer
            .wait_for_confirmation(tx_hash)
            .await
            .map_err(approval_failure)?;

        info!(token = %token.symbol, %tx_hash, "approval confirmed");
        Ok(ApprovalOutcome::Approved { tx_hash, amount })
    }
}
