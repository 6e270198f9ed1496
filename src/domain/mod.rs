// src/domain/mod.rs
pub mod errors;
pub mod model;
pub mod repository;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, RequestError, RequestResult};
pub use model::{
    BatchTally, CallRecord, CallResult, StatusLine, SwapRequest, TargetApi, TradeRequest, TransportResponse,
};
pub use repository::HttpTransport;
