//! Swap engine configuration parameters.

use crate::types::{Address, BPS_DENOMINATOR};
use alloy::primitives::address;
use serde::Deserialize;

/// Uniswap V3 `SwapRouter` on Ethereum mainnet.
pub const MAINNET_SWAP_ROUTER: Address = address!("e592427a0aece92de3edee1f18e0157c05861564");

/// WETH on Ethereum mainnet.
pub const MAINNET_WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

/// Configuration for the swap engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapConfig {
    /// Router contract that receives swap calls and approvals.
    pub router: Address,

    /// Wrapped form of the native asset, used wherever a native token appears in a path.
    pub wrapped_native: Address,

    /// Safety margin added on top of the gas estimate, in basis points.
    /// For example, 2000 = estimate * 1.2.
    pub gas_buffer_bps: u32,

    /// Slippage tolerance used by `SwapOptions::from_config`, in basis points.
    pub default_slippage_bps: u32,

    /// Seconds from now until the swap deadline.
    pub deadline_secs: u64,

    /// Approve `U256::MAX` instead of the exact amount the swap needs.
    pub unlimited_approval: bool,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            router: MAINNET_SWAP_ROUTER,
            wrapped_native: MAINNET_WETH,
            gas_buffer_bps: 2_000,     // +20%
            default_slippage_bps: 50,  // 0.50%
            deadline_secs: 30 * 60,    // 30 minutes
            unlimited_approval: false,
        }
    }
}

impl SwapConfig {
    /// Set the router that receives swaps and approvals.
    pub fn with_router(mut self, router: Address) -> Self {
        self.router = router;
        self
    }

    /// Set the wrapped-native token that stands in for the native asset in router calls.
    pub fn with_wrapped_native(mut self, wrapped_native: Address) -> Self {
        self.wrapped_native = wrapped_native;
        self
    }

    /// Set the headroom added to gas estimates, in basis points.
    pub fn with_gas_buffer_bps(mut self, gas_buffer_bps: u32) -> Self {
        self.gas_buffer_bps = gas_buffer_bps;
        self
    }

    /// Set the slippage tolerance used by [`SwapOptions::from_config`](crate::trade::SwapOptions::from_config).
    pub fn with_default_slippage_bps(mut self, slippage_bps: u32) -> Self {
        self.default_slippage_bps = slippage_bps;
        self
    }

    /// Set how long after submission the router still accepts the swap.
    pub fn with_deadline_secs(mut self, deadline_secs: u64) -> Self {
        self.deadline_secs = deadline_secs;
        self
    }

    /// Approve `U256::MAX` instead of the exact amount when an approval is needed.
    pub fn with_unlimited_approval(mut self, unlimited: bool) -> Self {
        self.unlimited_approval = unlimited;
        self
    }

    /// Gas limit to submit with, given an estimate.
    pub fn gas_limit(&self, estimate: u64) -> u64 {
        // gas = estimate * (10000 + buffer) / 10000
        let scaled = estimate as u128 * (BPS_DENOMINATOR as u128 + self.gas_buffer_bps as u128)
            / BPS_DENOMINATOR as u128;
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_limit_buffer() {
        let config = SwapConfig::default(); // 2000 bps = +20%

        assert_eq!(config.gas_limit(100_000), 120_000);
        assert_eq!(config.gas_limit(0), 0);
        // Rounds down
        assert_eq!(config.gas_limit(151_237), 181_484);
    }

    #[test]
    fn test_custom_gas_buffer() {
        let config = SwapConfig::default().with_gas_buffer_bps(0);
        assert_eq!(config.gas_limit(100_000), 100_000);

        let config = SwapConfig::default().with_gas_buffer_bps(5_000);
        assert_eq!(config.gas_limit(100_000), 150_000);
        assert_eq!(config.gas_limit(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: SwapConfig = serde_json::from_str(
            r#"{"router": "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45", "unlimitedApproval": true}"#,
        )
        .unwrap();

        assert_eq!(
            config.router,
            address!("68b3465833fb72a70ecdf485e0e4c7bd8665fc45")
        );
        assert!(config.unlimited_approval);
        assert_eq!(config.wrapped_native, MAINNET_WETH);
        assert_eq!(config.gas_buffer_bps, 2_000);
    }
}
