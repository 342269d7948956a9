//! Offline swap planner.
//!
//! Reads a routing-service quote and prints the router call it would produce,
//! without touching the network.
//!
//! Run with: `cargo run -p swap-cli -- quote.json exact-input 0xRecipient --config config.json`

use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use swap::{Address, QuoteResponse, SwapConfig, SwapDispatcher, SwapOptions, TradeFactory, TradeType};
use tracing_subscriber::EnvFilter;

/// Plan a swap from a routing-service quote.
#[derive(Debug, Parser)]
#[command(name = "swap-cli", version)]
struct Cli {
    /// Quote JSON as returned by the routing service.
    quote: PathBuf,

    /// `exact-input` or `exact-output`.
    trade_type: TradeType,

    /// Receiver of the output tokens.
    recipient: Address,

    /// Optional JSON config; defaults to mainnet router and WETH.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Cli {
        quote,
        trade_type,
        recipient,
        config,
    } = Cli::parse();

    let quote_json = std::fs::read_to_string(&quote)
        .wrap_err_with(|| format!("reading quote {}", quote.display()))?;

    let config = match config {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SwapConfig>(&json).wrap_err("invalid config")?
        }
        None => SwapConfig::default(),
    };

    let quote = QuoteResponse::from_json(&quote_json)?;
    let trade = TradeFactory::from_quote(&quote, trade_type)?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let options = SwapOptions::from_config(&config, recipient, now)?;

    let dispatcher = SwapDispatcher::new(config);
    let plan = dispatcher.plan(&trade, &options)?;

    tracing::info!(
        input = %trade.input_amount(),
        output = %trade.output_amount(),
        min_out = %trade.minimum_amount_out(options.slippage_tolerance_bps)?,
        max_in = %trade.maximum_amount_in(options.slippage_tolerance_bps)?,
        "trade"
    );

    let route: Vec<String> = trade.route().pools().iter().map(ToString::to_string).collect();
    println!("route:     {}", route.join(" -> "));
    if plan.refunds_native {
        println!("call:      multicall({}, refundETH)", plan.call.name());
    } else {
        println!("call:      {}", plan.call.name());
    }
    println!("router:    {}", dispatcher.config().router);
    println!("value:     {}", plan.value);
    match &plan.required_allowance {
        Some(amount) => println!("allowance: {amount}"),
        None => println!("allowance: none (native input)"),
    }
    println!("deadline:  {}", options.deadline);
    println!("calldata:  0x{}", hex::encode(&plan.calldata));

    Ok(())
}
