//! Ordered multi-hop routes built from unordered pools.

use crate::error::{SwapError, SwapResult};
use crate::pool::Pool;
use crate::token::Token;

/// A single hop in a route, with direction resolved.
#[derive(Debug, Clone, Copy)]
pub struct RouteHop<'a> {
    /// The pool traversed by this hop.
    pub pool: &'a Pool,
    /// The token going into the pool.
    pub token_in: &'a Token,
    /// The token coming out of the pool.
    pub token_out: &'a Token,
}

/// A complete route from one token to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pools: Vec<Pool>,
    path: Vec<Token>,
    input: Token,
    output: Token,
}

impl Route {
    /// Build a route, inferring each hop's direction from the previous hop's output.
    ///
    /// Fails with [`SwapError::RouteMismatch`] when the pools do not form a
    /// continuous chain from `input` to `output`.
    pub fn new(pools: Vec<Pool>, input: Token, output: Token) -> SwapResult<Self> {
        if pools.is_empty() {
            return Err(SwapError::RouteMismatch("route has no pools".to_string()));
        }

        let mut path: Vec<Token> = Vec::with_capacity(pools.len() + 1);
        let mut current = input.clone();

        for (i, pool) in pools.iter().enumerate() {
            let token_out = pool.other_token(&current).ok_or_else(|| {
                SwapError::RouteMismatch(format!(
                    "pool {} ({}) does not contain {}",
                    i, pool, current
                ))
            })?;

            if i == 0 {
                path.push(current.clone());
            }
            path.push(token_out.clone());
            current = token_out.clone();
        }

        let starts = path.first() == Some(&input);
        let ends = path.last() == Some(&output);
        if !starts || !ends {
            return Err(SwapError::RouteMismatch(format!(
                "path {} does not run from {} to {}",
                path.iter()
                    .map(|t| t.symbol.as_str())
                    .collect::<Vec<_>>()
                    .join(" -> "),
                input.symbol,
                output.symbol
            )));
        }

        Ok(Self {
            pools,
            path,
            input,
            output,
        })
    }

    /// Pools in traversal order.
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// The ordered tokens visited, input first.
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    /// Token paid into the first pool.
    pub fn input(&self) -> &Token {
        &self.input
    }

    /// Token received from the last pool.
    pub fn output(&self) -> &Token {
        &self.output
    }

    /// Get the number of hops in this route.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Always false; a route holds at least one pool.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Whether the route goes through exactly one pool.
    pub fn is_single_hop(&self) -> bool {
        self.pools.len() == 1
    }

    /// Hops in input-to-output order.
    pub fn hops(&self) -> impl DoubleEndedIterator<Item = RouteHop<'_>> + ExactSizeIterator {
        self.pools
            .iter()
            .zip(self.path.windows(2))
            .map(|(pool, pair)| RouteHop {
                pool,
                token_in: &pair[0],
                token_out: &pair[1],
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;

    fn setup_tokens() -> (Token, Token, Token, Token) {
        let usdc = Token::new(1, Address::repeat_byte(0x01), 6, "USDC");
        let weth = Token::new(1, Address::repeat_byte(0x02), 18, "WETH");
        let wbtc = Token::new(1, Address::repeat_byte(0x03), 8, "WBTC");
        let dai = Token::new(1, Address::repeat_byte(0x04), 18, "DAI");
        (usdc, weth, wbtc, dai)
    }

    #[test]
    fn test_single_hop_route() {
        let (usdc, weth, _, _) = setup_tokens();

        let route = Route::new(
            vec![Pool::new(usdc.clone(), weth.clone(), 500)],
            usdc.clone(),
            weth.clone(),
        )
        .unwrap();

        assert!(route.is_single_hop());
        assert_eq!(route.path(), &[usdc, weth]);
    }

    #[test]
    fn test_route_infers_direction_from_unordered_pools() {
        let (usdc, weth, wbtc, dai) = setup_tokens();

        // Second and third pools list the outgoing token first
        let pools = vec![
            Pool::new(usdc.clone(), weth.clone(), 500),
            Pool::new(wbtc.clone(), weth.clone(), 3000),
            Pool::new(dai.clone(), wbtc.clone(), 10000),
        ];
        let route = Route::new(pools, usdc.clone(), dai.clone()).unwrap();

        assert_eq!(route.len(), 3);
        assert_eq!(route.path().len(), route.pools().len() + 1);
        assert_eq!(route.path(), &[usdc.clone(), weth.clone(), wbtc.clone(), dai.clone()]);
        assert_eq!(route.path().first(), Some(route.input()));
        assert_eq!(route.path().last(), Some(route.output()));

        let hops: Vec<_> = route.hops().collect();
        assert_eq!(hops[1].token_in, &weth);
        assert_eq!(hops[1].token_out, &wbtc);
        assert_eq!(hops[1].pool.fee, 3000);
    }

    #[test]
    fn test_disconnected_pools_rejected() {
        let (usdc, weth, wbtc, dai) = setup_tokens();

        // USDC/WETH then WBTC/DAI: nothing leads out of WETH
        let pools = vec![
            Pool::new(usdc.clone(), weth.clone(), 500),
            Pool::new(wbtc.clone(), dai.clone(), 3000),
        ];
        assert!(matches!(
            Route::new(pools, usdc, dai),
            Err(SwapError::RouteMismatch(_))
        ));
    }

    #[test]
    fn test_wrong_declared_endpoints_rejected() {
        let (usdc, weth, wbtc, dai) = setup_tokens();

        // Input not in the first pool
        assert!(matches!(
            Route::new(
                vec![Pool::new(usdc.clone(), weth.clone(), 500)],
                dai.clone(),
                weth.clone()
            ),
            Err(SwapError::RouteMismatch(_))
        ));

        // Path ends at WETH, declared output is WBTC
        assert!(matches!(
            Route::new(
                vec![Pool::new(usdc.clone(), weth.clone(), 500)],
                usdc.clone(),
                wbtc
            ),
            Err(SwapError::RouteMismatch(_))
        ));

        assert!(matches!(
            Route::new(Vec::new(), usdc, weth),
            Err(SwapError::RouteMismatch(_))
        ));
    }
}
