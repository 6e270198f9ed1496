// src/bin/swap_latency.rs
use trade_latency::adapter::cli;
use trade_latency::domain::{AppResult, SwapRequest};

#[tokio::main]
async fn main() -> AppResult<()> {
    cli::run::<SwapRequest>().await
}
