//! Trades and caller-supplied swap options.

use crate::config::SwapConfig;
use crate::error::{SwapError, SwapResult};
use crate::route::Route;
use crate::slippage;
use crate::token::TokenAmount;
use crate::types::{Address, TradeType, BPS_DENOMINATOR};

/// A single swap intent: a route, a direction and the amounts on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: TokenAmount,
    output_amount: TokenAmount,
}

impl Trade {
    /// Create a trade, checking that the amounts are denominated in the route's endpoints.
    pub fn new(
        route: Route,
        trade_type: TradeType,
        input_amount: TokenAmount,
        output_amount: TokenAmount,
    ) -> SwapResult<Self> {
        if &input_amount.token != route.input() {
            return Err(SwapError::TokenMismatch {
                left: input_amount.token.address,
                right: route.input().address,
            });
        }
        if &output_amount.token != route.output() {
            return Err(SwapError::TokenMismatch {
                left: output_amount.token.address,
                right: route.output().address,
            });
        }

        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &TokenAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &TokenAmount {
        &self.output_amount
    }

    /// Least output accepted on-chain. For exact-output trades this is the fixed output.
    pub fn minimum_amount_out(&self, tolerance_bps: u32) -> SwapResult<TokenAmount> {
        match self.trade_type {
            TradeType::ExactInput => slippage::minimum_out(&self.output_amount, tolerance_bps),
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
        }
    }

    /// Most input the router may pull. For exact-input trades this is the fixed input.
    pub fn maximum_amount_in(&self, tolerance_bps: u32) -> SwapResult<TokenAmount> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => slippage::maximum_in(&self.input_amount, tolerance_bps),
        }
    }
}

/// Caller-supplied parameters for executing a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOptions {
    /// Receiver of the output tokens.
    pub recipient: Address,
    /// Slippage tolerance in basis points, `[0, 10000]`.
    pub slippage_tolerance_bps: u32,
    /// Unix timestamp after which the router rejects the swap.
    pub deadline: u64,
}

impl SwapOptions {
    /// Fails with [`SwapError::InvalidSlippage`] above 10000 bps.
    pub fn new(recipient: Address, slippage_tolerance_bps: u32, deadline: u64) -> SwapResult<Self> {
        if slippage_tolerance_bps > BPS_DENOMINATOR {
            return Err(SwapError::InvalidSlippage(slippage_tolerance_bps));
        }
        Ok(Self {
            recipient,
            slippage_tolerance_bps,
            deadline,
        })
    }

    /// Options using the configured default slippage and a deadline `deadline_secs` after `now`.
    pub fn from_config(config: &SwapConfig, recipient: Address, now: u64) -> SwapResult<Self> {
        Self::new(
            recipient,
            config.default_slippage_bps,
            now.saturating_add(config.deadline_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Pool;
    use crate::token::Token;
    use crate::types::U256;

    fn setup_route() -> (Token, Token, Route) {
        let usdc = Token::new(1, Address::repeat_byte(0x01), 6, "USDC");
        let weth = Token::new(1, Address::repeat_byte(0x02), 18, "WETH");
        let route = Route::new(
            vec![Pool::new(usdc.clone(), weth.clone(), 500)],
            usdc.clone(),
            weth.clone(),
        )
        .unwrap();
        (usdc, weth, route)
    }

    #[test]
    fn test_trade_bounds_by_direction() {
        let (usdc, weth, route) = setup_route();
        let input = TokenAmount::new(usdc.clone(), U256::from(1_000_000u64));
        let output = TokenAmount::new(weth.clone(), U256::from(500_000_000_000_000u64));

        let exact_in =
            Trade::new(route.clone(), TradeType::ExactInput, input.clone(), output.clone()).unwrap();
        assert_eq!(exact_in.maximum_amount_in(50).unwrap(), input);
        assert_eq!(
            exact_in.minimum_amount_out(50).unwrap().raw,
            U256::from(497_500_000_000_000u64)
        );

        let exact_out = Trade::new(route, TradeType::ExactOutput, input, output.clone()).unwrap();
        assert_eq!(exact_out.minimum_amount_out(50).unwrap(), output);
        assert_eq!(
            exact_out.maximum_amount_in(50).unwrap().raw,
            U256::from(1_005_000u64)
        );
    }

    #[test]
    fn test_trade_rejects_amounts_in_wrong_tokens() {
        let (usdc, weth, route) = setup_route();
        let swapped_in = TokenAmount::new(weth, U256::from(1u64));
        let swapped_out = TokenAmount::new(usdc, U256::from(1u64));

        assert!(matches!(
            Trade::new(route, TradeType::ExactInput, swapped_in, swapped_out),
            Err(SwapError::TokenMismatch { .. })
        ));
    }

    #[test]
    fn test_options_from_config() {
        let config = SwapConfig::default()
            .with_default_slippage_bps(100)
            .with_deadline_secs(600);
        let recipient = Address::repeat_byte(0xAA);

        let options = SwapOptions::from_config(&config, recipient, 1_700_000_000).unwrap();
        assert_eq!(options.recipient, recipient);
        assert_eq!(options.slippage_tolerance_bps, 100);
        assert_eq!(options.deadline, 1_700_000_600);

        assert!(matches!(
            SwapOptions::new(recipient, 10_001, 0),
            Err(SwapError::InvalidSlippage(10_001))
        ));
    }
}
