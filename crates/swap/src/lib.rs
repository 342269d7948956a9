//! Swap execution against a Uniswap V3 style router.
//!
//! Turns a quoted route into a checked [`Trade`] and submits it:
//! - Route validation and token path derivation
//! - Packed multi-hop path encoding, forward or reversed by trade direction
//! - Slippage bounds in basis points, integer only
//! - Allowance check and approval ahead of the swap
//! - Call shape selection, simulation, gas estimation and submission

pub mod approval;
pub mod config;
pub mod contracts;
pub mod dispatcher;
pub mod error;
pub mod factory;
pub mod path;
pub mod pool;
pub mod quote;
pub mod route;
pub mod signer;
pub mod slippage;
pub mod token;
pub mod trade;
pub mod types;

pub use approval::{ApprovalCoordinator, ApprovalOutcome};
pub use config::SwapConfig;
pub use dispatcher::{PendingSwap, SwapCall, SwapDispatcher, SwapPlan};
pub use error::{SwapError, SwapResult};
pub use factory::TradeFactory;
pub use path::PathEncoder;
pub use pool::{Pool, PoolState};
pub use quote::{QuoteResponse, QuotedHop, QuotedToken};
pub use route::{Route, RouteHop};
pub use signer::{ProviderSigner, SignerError, SwapSigner};
pub use token::{Token, TokenAmount};
pub use trade::{SwapOptions, Trade};
pub use types::{Address, Amount, Bytes, TradeType, B256, NATIVE_TOKEN, U256};
