//! Slippage bounds for exact-input and exact-output trades.
//!
//! Tolerances are basis points in `[0, 10000]`. Both bounds round down.

use crate::error::{SwapError, SwapResult};
use crate::token::TokenAmount;
use crate::types::{Amount, BPS_DENOMINATOR, U256};

/// Least acceptable output for an exact-input trade:
/// `floor(amount * (10000 - t) / 10000)`.
pub fn minimum_out(amount: &TokenAmount, tolerance_bps: u32) -> SwapResult<TokenAmount> {
    validate_tolerance(tolerance_bps)?;
    let raw = scale_bps(amount.raw, BPS_DENOMINATOR - tolerance_bps)?;
    Ok(TokenAmount::new(amount.token.clone(), raw))
}

/// Most acceptable input for an exact-output trade:
/// `floor(amount * (10000 + t) / 10000)`.
pub fn maximum_in(amount: &TokenAmount, tolerance_bps: u32) -> SwapResult<TokenAmount> {
    validate_tolerance(tolerance_bps)?;
    let raw = scale_bps(amount.raw, BPS_DENOMINATOR + tolerance_bps)?;
    Ok(TokenAmount::new(amount.token.clone(), raw))
}

fn validate_tolerance(tolerance_bps: u32) -> SwapResult<()> {
    if tolerance_bps > BPS_DENOMINATOR {
        return Err(SwapError::InvalidSlippage(tolerance_bps));
    }
    Ok(())
}

/// Compute `floor(amount * factor / 10000)` without a 256-bit intermediate product.
///
/// With `amount = q * 10000 + r` the result is `q * factor + floor(r * factor / 10000)`,
/// where `r * factor` stays below `10000 * 20000`. Only a result that itself exceeds
/// `U256::MAX` can fail.
fn scale_bps(amount: Amount, factor: u32) -> SwapResult<Amount> {
    let denominator = U256::from(BPS_DENOMINATOR);
    let factor = U256::from(factor);

    let quotient = amount / denominator;
    let remainder = amount % denominator;

    quotient
        .checked_mul(factor)
        .and_then(|whole| whole.checked_add(remainder * factor / denominator))
        .ok_or_else(|| SwapError::overflow("slippage bound", amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use crate::types::Address;

    fn usdc(raw: u64) -> TokenAmount {
        TokenAmount::new(
            Token::new(1, Address::repeat_byte(0x01), 6, "USDC"),
            U256::from(raw),
        )
    }

    #[test]
    fn test_fifty_bps() {
        // 0.5% either way
        assert_eq!(minimum_out(&usdc(1_000_000), 50).unwrap().raw, U256::from(995_000u64));
        assert_eq!(maximum_in(&usdc(1_000_000), 50).unwrap().raw, U256::from(1_005_000u64));
    }

    #[test]
    fn test_rounds_down() {
        // 999 * 9950 / 10000 = 994.005
        assert_eq!(minimum_out(&usdc(999), 50).unwrap().raw, U256::from(994u64));
        // 999 * 10050 / 10000 = 1003.995
        assert_eq!(maximum_in(&usdc(999), 50).unwrap().raw, U256::from(1003u64));
    }

    #[test]
    fn test_bounds_at_limits() {
        assert_eq!(minimum_out(&usdc(1_000), 0).unwrap().raw, U256::from(1_000u64));
        assert_eq!(maximum_in(&usdc(1_000), 0).unwrap().raw, U256::from(1_000u64));

        assert_eq!(minimum_out(&usdc(1_000), 10_000).unwrap().raw, U256::ZERO);
        assert_eq!(maximum_in(&usdc(1_000), 10_000).unwrap().raw, U256::from(2_000u64));
    }

    #[test]
    fn test_out_of_range_tolerance_fails() {
        assert!(matches!(
            minimum_out(&usdc(1_000), 10_001),
            Err(SwapError::InvalidSlippage(10_001))
        ));
        assert!(matches!(
            maximum_in(&usdc(1_000), u32::MAX),
            Err(SwapError::InvalidSlippage(_))
        ));
    }

    #[test]
    fn test_monotonic_in_tolerance() {
        let amount = usdc(123_456_789);
        let mut last_min = U256::MAX;
        let mut last_max = U256::ZERO;

        for t in [0u32, 1, 5, 30, 50, 100, 500, 1_000, 5_000, 10_000] {
            let min = minimum_out(&amount, t).unwrap().raw;
            let max = maximum_in(&amount, t).unwrap().raw;
            assert!(min <= last_min);
            assert!(max >= last_max);
            last_min = min;
            last_max = max;
        }
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let huge = TokenAmount::new(usdc(0).token, U256::MAX);

        // Naive U256::MAX * 9950 would overflow before the division
        let min = minimum_out(&huge, 50).unwrap().raw;
        assert!(min < U256::MAX);
        assert!(min > U256::MAX / U256::from(2u64));

        // Exact where the product would fit: (2^200 + 7) * 9950 / 10000
        let big = (U256::from(1u64) << 200usize) + U256::from(7u64);
        let expected = big * U256::from(9_950u64) / U256::from(10_000u64);
        let amount = TokenAmount::new(usdc(0).token, big);
        assert_eq!(minimum_out(&amount, 50).unwrap().raw, expected);

        // The upper bound itself does not fit in 256 bits
        assert!(matches!(maximum_in(&huge, 50), Err(SwapError::Overflow(_))));
    }
}
