//! Turns routing-service quotes into trades.

use crate::error::{SwapError, SwapResult};
use crate::pool::{Pool, PoolState};
use crate::quote::{QuoteResponse, QuotedHop, QuotedToken};
use crate::route::Route;
use crate::token::{parse_raw, Token, TokenAmount};
use crate::trade::Trade;
use crate::types::{TradeType, U160};
use tracing::debug;

/// Builds a [`Trade`] from the first candidate route of a quote.
///
/// Alternative routes in the quote are ignored; no scoring happens here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TradeFactory;

impl TradeFactory {
    pub fn from_quote(quote: &QuoteResponse, trade_type: TradeType) -> SwapResult<Trade> {
        let hops = quote
            .route
            .first()
            .ok_or_else(|| SwapError::InvalidQuote("quote has no routes".to_string()))?;
        let (first, last) = match (hops.first(), hops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(SwapError::InvalidQuote("first route has no hops".to_string())),
        };

        let input = token_from_quote(&first.token_in)?;
        let output = token_from_quote(&last.token_out)?;

        let pools = hops
            .iter()
            .map(|hop| pool_from_quote(hop, input.chain_id))
            .collect::<SwapResult<Vec<_>>>()?;
        let route = Route::new(pools, input.clone(), output.clone())?;

        let amount = parse_raw(&quote.amount)?;
        let counter = parse_raw(&quote.quote)?;

        let (input_raw, output_raw) = match trade_type {
            TradeType::ExactInput => (amount, counter),
            TradeType::ExactOutput => (counter, amount),
        };

        debug!(
            %trade_type,
            hops = route.len(),
            candidates = quote.route.len(),
            input = %input.symbol,
            output = %output.symbol,
            %input_raw,
            %output_raw,
            "trade built from quote"
        );

        Trade::new(
            route,
            trade_type,
            TokenAmount::new(input, input_raw),
            TokenAmount::new(output, output_raw),
        )
    }
}

fn token_from_quote(token: &QuotedToken) -> SwapResult<Token> {
    Ok(Token::new(
        token.chain_id.parse("chainId")?,
        token.address,
        token.decimals.parse("decimals")?,
        token.symbol.clone(),
    ))
}

fn pool_from_quote(hop: &QuotedHop, chain_id: u64) -> SwapResult<Pool> {
    let token_in = token_from_quote(&hop.token_in)?;
    let token_out = token_from_quote(&hop.token_out)?;
    for token in [&token_in, &token_out] {
        if token.chain_id != chain_id {
            return Err(SwapError::InvalidQuote(format!(
                "{} is on chain {}, route starts on chain {}",
                token.symbol, token.chain_id, chain_id
            )));
        }
    }

    let pool = Pool::new(token_in, token_out, hop.fee.parse("fee")?);

    // Curve state is informational; only attach it when complete.
    let (Some(sqrt_price), Some(liquidity), Some(tick)) =
        (&hop.sqrt_price_x96, &hop.liquidity, &hop.tick_current)
    else {
        return Ok(pool);
    };

    let sqrt_price_x96 = U160::from_str_radix(sqrt_price.trim(), 10)
        .map_err(|e| SwapError::InvalidQuote(format!("sqrtPriceX96 {sqrt_price:?}: {e}")))?;
    let liquidity = liquidity
        .trim()
        .parse::<u128>()
        .map_err(|e| SwapError::InvalidQuote(format!("liquidity {liquidity:?}: {e}")))?;

    Ok(pool.with_state(PoolState {
        sqrt_price_x96,
        liquidity,
        tick_current: tick.parse("tickCurrent")?,
    }))
}
