pub mod latency_usecase;

// Re-export public API
pub use latency_usecase::{encode_payload, RequestDriver, DEFAULT_TIMEOUT};
