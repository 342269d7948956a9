//! Router call selection and the approve → simulate → estimate → submit sequence.

use crate::approval::{ApprovalCoordinator, ApprovalOutcome};
use crate::config::SwapConfig;
use crate::contracts::ISwapRouter;
use crate::error::{SwapError, SwapResult};
use crate::path::PathEncoder;
use crate::signer::SwapSigner;
use crate::token::TokenAmount;
use crate::trade::{SwapOptions, Trade};
use crate::types::{Address, Bytes, TradeType, B256, U160, U256};
use alloy::primitives::TxKind;
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use tracing::{debug, info, warn};

/// One of the four router entry points, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapCall {
    ExactInputSingle(ISwapRouter::ExactInputSingleParams),
    ExactInput(ISwapRouter::ExactInputParams),
    ExactOutputSingle(ISwapRouter::ExactOutputSingleParams),
    ExactOutput(ISwapRouter::ExactOutputParams),
}

impl SwapCall {
    /// Select the call shape for a trade and fill in its slippage-bounded parameters.
    pub fn build(trade: &Trade, options: &SwapOptions, wrapped_native: Address) -> SwapResult<Self> {
        let route = trade.route();
        let tolerance = options.slippage_tolerance_bps;
        let deadline = U256::from(options.deadline);
        let recipient = options.recipient;

        if route.is_single_hop() {
            let hop = route
                .hops()
                .next()
                .ok_or_else(|| SwapError::RouteMismatch("route has no pools".to_string()))?;
            let token_in = hop.token_in.router_address(wrapped_native);
            let token_out = hop.token_out.router_address(wrapped_native);
            let fee = hop.pool.fee_tier()?;

            return Ok(match trade.trade_type() {
                TradeType::ExactInput => SwapCall::ExactInputSingle(ISwapRouter::ExactInputSingleParams {
                    tokenIn: token_in,
                    tokenOut: token_out,
                    fee,
                    recipient,
                    deadline,
                    amountIn: trade.input_amount().raw,
                    amountOutMinimum: trade.minimum_amount_out(tolerance)?.raw,
                    sqrtPriceLimitX96: U160::ZERO,
                }),
                TradeType::ExactOutput => {
                    SwapCall::ExactOutputSingle(ISwapRouter::ExactOutputSingleParams {
                        tokenIn: token_in,
                        tokenOut: token_out,
                        fee,
                        recipient,
                        deadline,
                        amountOut: trade.output_amount().raw,
                        amountInMaximum: trade.maximum_amount_in(tolerance)?.raw,
                        sqrtPriceLimitX96: U160::ZERO,
                    })
                }
            });
        }

        let path = PathEncoder::new(wrapped_native).encode(route, trade.trade_type())?;
        Ok(match trade.trade_type() {
            TradeType::ExactInput => SwapCall::ExactInput(ISwapRouter::ExactInputParams {
                path,
                recipient,
                deadline,
                amountIn: trade.input_amount().raw,
                amountOutMinimum: trade.minimum_amount_out(tolerance)?.raw,
            }),
            TradeType::ExactOutput => SwapCall::ExactOutput(ISwapRouter::ExactOutputParams {
                path,
                recipient,
                deadline,
                amountOut: trade.output_amount().raw,
                amountInMaximum: trade.maximum_amount_in(tolerance)?.raw,
            }),
        })
    }

    /// Router function name.
    pub fn name(&self) -> &'static str {
        match self {
            SwapCall::ExactInputSingle(_) => "exactInputSingle",
            SwapCall::ExactInput(_) => "exactInput",
            SwapCall::ExactOutputSingle(_) => "exactOutputSingle",
            SwapCall::ExactOutput(_) => "exactOutput",
        }
    }

    pub fn is_single_hop(&self) -> bool {
        matches!(
            self,
            SwapCall::ExactInputSingle(_) | SwapCall::ExactOutputSingle(_)
        )
    }

    /// ABI-encoded calldata, selector included.
    pub fn calldata(&self) -> Bytes {
        match self {
            SwapCall::ExactInputSingle(params) => ISwapRouter::exactInputSingleCall {
                params: params.clone(),
            }
            .abi_encode(),
            SwapCall::ExactInput(params) => ISwapRouter::exactInputCall {
                params: params.clone(),
            }
            .abi_encode(),
            SwapCall::ExactOutputSingle(params) => ISwapRouter::exactOutputSingleCall {
                params: params.clone(),
            }
            .abi_encode(),
            SwapCall::ExactOutput(params) => ISwapRouter::exactOutputCall {
                params: params.clone(),
            }
            .abi_encode(),
        }
        .into()
    }
}

/// `multicall([swap, refundETH()])`.
fn refund_multicall(call: &SwapCall) -> Bytes {
    ISwapRouter::multicallCall {
        data: vec![call.calldata(), ISwapRouter::refundETHCall {}.abi_encode().into()],
    }
    .abi_encode()
    .into()
}

/// Everything needed to send a swap, computed without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pub call: SwapCall,
    pub calldata: Bytes,
    /// Native value attached to the call; zero unless the input is the native asset.
    pub value: U256,
    /// Allowance the router needs, or `None` when paying with the native asset.
    pub required_allowance: Option<TokenAmount>,
    /// The swap is wrapped in `multicall` with a trailing `refundETH`, returning
    /// native value the swap did not spend.
    pub refunds_native: bool,
}

/// Result of a submitted swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSwap {
    pub tx_hash: B256,
    pub approval: ApprovalOutcome,
    pub gas_limit: u64,
    pub call_name: &'static str,
}

/// Executes trades against the configured router.
#[derive(Debug, Clone)]
pub struct SwapDispatcher {
    config: SwapConfig,
}

impl SwapDispatcher {
    pub fn new(config: SwapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Build the call, calldata, value and approval requirement for a trade.
    pub fn plan(&self, trade: &Trade, options: &SwapOptions) -> SwapResult<SwapPlan> {
        let call = SwapCall::build(trade, options, self.config.wrapped_native)?;
        let max_in = trade.maximum_amount_in(options.slippage_tolerance_bps)?;
        let native_input = trade.input_amount().token.is_native();

        let (value, required_allowance) = if native_input {
            (max_in.raw, None)
        } else {
            (U256::ZERO, Some(max_in))
        };

        // Exact-output may spend less than the attached value; the router
        // keeps the rest unless it is refunded in the same transaction.
        let refunds_native = native_input && !trade.trade_type().is_exact_input();
        let calldata = if refunds_native {
            refund_multicall(&call)
        } else {
            call.calldata()
        };

        debug!(
            call = call.name(),
            trade_type = %trade.trade_type(),
            hops = trade.route().len(),
            recipient = %options.recipient,
            deadline = options.deadline,
            %value,
            refunds_native,
            "swap call built"
        );

        Ok(SwapPlan {
            call,
            calldata,
            value,
            required_allowance,
            refunds_native,
        })
    }

    /// The unsigned router transaction for a plan, without a gas limit.
    pub fn transaction_request(&self, from: Address, plan: &SwapPlan) -> TransactionRequest {
        TransactionRequest {
            from: Some(from),
            to: Some(TxKind::Call(self.config.router)),
            value: Some(plan.value),
            input: TransactionInput::new(plan.calldata.clone()),
            ..Default::default()
        }
    }

    /// Approve if needed, then simulate, estimate gas and submit the swap.
    ///
    /// Each step starts only after the previous one succeeded. A revert in
    /// simulation stops the sequence before any gas is spent on the swap.
    /// An approval already mined stays in effect if a later step fails.
    pub async fn execute<S: SwapSigner>(
        &self,
        signer: &S,
        trade: Trade,
        options: SwapOptions,
    ) -> SwapResult<PendingSwap> {
        let plan = self.plan(&trade, &options)?;

        let approval = ApprovalCoordinator::new(self.config.router)
            .with_unlimited(self.config.unlimited_approval)
            .ensure(signer, &trade, options.slippage_tolerance_bps)
            .await?;

        let mut tx = self.transaction_request(signer.address(), &plan);

        if let Err(e) = signer.simulate(&tx).await {
            warn!(call = plan.call.name(), error = %e, "simulation reverted");
            return Err(SwapError::SimulationRevert(e.to_string()));
        }
        info!(call = plan.call.name(), "simulation succeeded");

        let estimate = signer.estimate_gas(&tx).await.map_err(|e| {
            warn!(call = plan.call.name(), error = %e, "gas estimation failed");
            SwapError::EstimationFailure(e.to_string())
        })?;
        let gas_limit = self.config.gas_limit(estimate);
        info!(estimate, gas_limit, "gas estimated");

        tx.gas = Some(gas_limit);
        let tx_hash = signer.send_transaction(tx).await.map_err(|e| {
            warn!(call = plan.call.name(), error = %e, "swap submission failed");
            SwapError::SubmissionFailure(e.to_string())
        })?;

        info!(
            call = plan.call.name(),
            %tx_hash,
            input = %trade.input_amount(),
            output = %trade.output_amount(),
            "swap submitted"
        );

        Ok(PendingSwap {
            tx_hash,
            approval,
            gas_limit,
            call_name: plan.call.name(),
        })
    }
}
