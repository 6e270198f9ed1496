// src/domain/model/payload.rs
// Request bodies for the supported trading endpoints

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trading endpoint whose latency can be probed.
///
/// The implementing type is the JSON body posted to the endpoint and its
/// `Default` value is the payload used when no payload file is configured.
pub trait TargetApi: Serialize + DeserializeOwned + Default + Send + Sync {
    /// Short name used in logs and prompts
    const NAME: &'static str;

    /// Endpoint used when no URL is configured
    const DEFAULT_URL: &'static str;

    /// Whether the interactive batch menu asks for an inter-call delay
    const PROMPTS_INTERVAL: bool;
}

/// Token swap request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Source token mint
    pub from: String,

    /// Destination token mint
    pub to: String,

    /// Amount to swap; may be a percentage such as "50%"
    pub from_amount: String,

    pub slippage: f64,

    /// Wallet paying for the swap
    pub payer: String,

    pub priority_fee: f64,

    pub force_legacy: bool,
}

impl Default for SwapRequest {
    fn default() -> Self {
        Self {
            from: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm".to_string(),
            to: "So11111111111111111111111111111111111111112".to_string(),
            from_amount: "50%".to_string(),
            slippage: 0.5,
            payer: "Ef3GGMdwmgimvo2xP6MXrx3y15R2sjJzNdDLc3Nz8kVq".to_string(),
            priority_fee: 0.0001,
            force_legacy: false,
        }
    }
}

impl TargetApi for SwapRequest {
    const NAME: &'static str = "swap";
    const DEFAULT_URL: &'static str = "https://swap-v2.solanatracker.io/swap";
    const PROMPTS_INTERVAL: bool = false;
}

/// Pump trade request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    /// "buy" or "sell"
    pub action: String,

    /// Amount to trade; may be a percentage such as "10%"
    pub amount: String,

    /// The endpoint expects "true"/"false" as text here
    pub denominated_in_sol: String,

    /// Token mint
    pub mint: String,

    pub pool: String,

    pub priority_fee: f64,

    /// Wallet public key
    pub public_key: String,

    /// Slippage in whole percent
    pub slippage: u32,
}

impl Default for TradeRequest {
    fn default() -> Self {
        Self {
            action: "sell".to_string(),
            amount: "10%".to_string(),
            denominated_in_sol: "false".to_string(),
            mint: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm".to_string(),
            pool: "auto".to_string(),
            priority_fee: 0.005,
            public_key: "Ef3GGMdwmgimvo2xP6MXrx3y15R2sjJzNdDLc3Nz8kVq".to_string(),
            slippage: 10,
        }
    }
}

impl TargetApi for TradeRequest {
    const NAME: &'static str = "pump";
    const DEFAULT_URL: &'static str = "https://pumpportal.fun/api/trade-local";
    const PROMPTS_INTERVAL: bool = true;
}
