// src/bin/pump_latency.rs
use trade_latency::adapter::cli;
use trade_latency::domain::{AppResult, TradeRequest};

#[tokio::main]
async fn main() -> AppResult<()> {
    cli::run::<TradeRequest>().await
}
