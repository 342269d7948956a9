//! Router and token contract bindings.

use alloy::sol;

sol! {
    /// Uniswap V3 `SwapRouter` entry points.
    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    interface ISwapRouter {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 deadline;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        struct ExactInputParams {
            bytes path;
            address recipient;
            uint256 deadline;
            uint256 amountIn;
            uint256 amountOutMinimum;
        }

        struct ExactOutputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 deadline;
            uint256 amountOut;
            uint256 amountInMaximum;
            uint160 sqrtPriceLimitX96;
        }

        struct ExactOutputParams {
            bytes path;
            address recipient;
            uint256 deadline;
            uint256 amountOut;
            uint256 amountInMaximum;
        }

        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
        function exactInput(ExactInputParams calldata params) external payable returns (uint256 amountOut);
        function exactOutputSingle(ExactOutputSingleParams calldata params) external payable returns (uint256 amountIn);
        function exactOutput(ExactOutputParams calldata params) external payable returns (uint256 amountIn);

        function multicall(bytes[] calldata data) external payable returns (bytes[] memory results);
        function refundETH() external payable;
    }

    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    interface IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

pub mod selectors {
    use super::{ISwapRouter, IERC20};
    use alloy::sol_types::SolCall;

    pub const EXACT_INPUT_SINGLE: [u8; 4] = ISwapRouter::exactInputSingleCall::SELECTOR;
    pub const EXACT_INPUT: [u8; 4] = ISwapRouter::exactInputCall::SELECTOR;
    pub const EXACT_OUTPUT_SINGLE: [u8; 4] = ISwapRouter::exactOutputSingleCall::SELECTOR;
    pub const EXACT_OUTPUT: [u8; 4] = ISwapRouter::exactOutputCall::SELECTOR;
    pub const MULTICALL: [u8; 4] = ISwapRouter::multicallCall::SELECTOR;
    pub const REFUND_ETH: [u8; 4] = ISwapRouter::refundETHCall::SELECTOR;
    pub const APPROVE: [u8; 4] = IERC20::approveCall::SELECTOR;
}
