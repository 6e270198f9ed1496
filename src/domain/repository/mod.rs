// src/domain/repository/mod.rs
// Transport interface used by the request driver

use async_trait::async_trait;

use crate::domain::errors::RequestResult;
use crate::domain::model::TransportResponse;

/// Sends a JSON body to an endpoint and reports what came back.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// Implementations start their clock right before the request goes out,
    /// stop it once response headers are in, and only then read the body.
    /// Any HTTP status is returned as `Ok`.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> RequestResult<TransportResponse>;
}
