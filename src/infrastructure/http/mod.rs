// src/infrastructure/http/mod.rs
// hyper-backed JSON transport

use std::time::Instant;

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request, Uri};
use hyper_tls::HttpsConnector;

use crate::domain::errors::{RequestError, RequestResult};
use crate::domain::model::{StatusLine, TransportResponse};
use crate::domain::repository::HttpTransport;

/// Shared HTTP/HTTPS client; one per process, reused for every call.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Body>,
}

impl HyperTransport {
    pub fn new() -> Self {
        // Accepts plain http:// as well as https://
        let https = HttpsConnector::new();
        let client = Client::builder().build::<_, Body>(https);

        Self { client }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> RequestResult<TransportResponse> {
        let uri: Uri = url
            .parse()
            .map_err(|e| RequestError::Transport(format!("Invalid URL `{}`: {}", url, e)))?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| RequestError::Transport(format!("Failed to build request: {}", e)))?;

        let started = Instant::now();
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| RequestError::Transport(format!("Request failed: {}", e)))?;
        let headers_elapsed = started.elapsed();

        let status = response.status();
        let status = StatusLine::new(status.as_u16(), status.canonical_reason().unwrap_or(""));
        log::debug!("{} answered {} after {:?}", url, status, headers_elapsed);

        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| RequestError::Read(format!("Failed to read response body: {}", e)))?;

        Ok(TransportResponse {
            status,
            headers_elapsed,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unparseable_url_as_transport_error() {
        let transport = HyperTransport::new();

        let err = transport
            .post_json("http://exa mple.com/swap", b"{}".to_vec())
            .await
            .unwrap_err();

        assert!(matches!(err, RequestError::Transport(_)));
    }

    #[tokio::test]
    async fn empty_url_is_a_transport_error() {
        let transport = HyperTransport::new();

        let err = transport.post_json("", b"{}".to_vec()).await.unwrap_err();

        assert!(matches!(err, RequestError::Transport(_)));
    }
}
