// src/application/usecase/latency_usecase.rs
// Timed request use cases: one call, or a strictly sequential batch

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::domain::errors::{RequestError, RequestResult};
use crate::domain::model::{BatchTally, CallRecord, CallResult};
use crate::domain::repository::HttpTransport;

/// Per-call limit applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct RequestDriver {
    transport: Arc<dyn HttpTransport>,
    timeout: Option<Duration>,
}

impl RequestDriver {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Bound every call by `timeout`; `None` lets a call run as long as it takes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Serialize `payload`, POST it to `url` and time it.
    ///
    /// The elapsed time covers the request up to the response headers. The
    /// body is read in full before returning. Every HTTP status counts as a
    /// result; only encoding, connection, timeout and read failures are errors.
    pub async fn execute_timed_request<P>(&self, url: &str, payload: &P) -> RequestResult<CallResult>
    where
        P: Serialize + ?Sized,
    {
        let body = encode_payload(payload)?;
        log::debug!("POST {} ({} bytes)", url, body.len());

        let call = self.transport.post_json(url, body);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                RequestError::Transport(format!("Request timed out after {:?}", limit))
            })??,
            None => call.await?,
        };

        Ok(CallResult::from(response))
    }

    /// Run `count` calls one after another, pausing `interval` between them.
    pub async fn execute_repeated<P>(
        &self,
        url: &str,
        payload: &P,
        count: u32,
        interval: Duration,
    ) -> Vec<CallRecord>
    where
        P: Serialize + ?Sized,
    {
        let mut records = Vec::new();
        self.execute_repeated_with(url, payload, count, interval, |record| records.push(record))
            .await;
        records
    }

    /// Same as [`execute_repeated`](Self::execute_repeated), handing each
    /// record to `on_call` as soon as that call finishes instead of keeping it.
    ///
    /// A failed call is logged and counted; it never stops the batch and is
    /// never retried.
    pub async fn execute_repeated_with<P, F>(
        &self,
        url: &str,
        payload: &P,
        count: u32,
        interval: Duration,
        mut on_call: F,
    ) -> BatchTally
    where
        P: Serialize + ?Sized,
        F: FnMut(CallRecord),
    {
        let mut tally = BatchTally::default();

        for index in 1..=count {
            if index > 1 && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }

            let started_at = Utc::now();
            let outcome = self.execute_timed_request(url, payload).await;

            match &outcome {
                Ok(result) => {
                    log::info!("Request {} completed in {:?} ({})", index, result.elapsed, result.status)
                }
                Err(e) => log::warn!("Request {} failed: {}", index, e),
            }

            let record = CallRecord {
                index,
                started_at,
                outcome,
            };
            tally.add(&record);
            on_call(record);
        }

        tally
    }
}

/// Encode a payload as the JSON object sent on the wire.
pub fn encode_payload<P>(payload: &P) -> RequestResult<Vec<u8>>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload)?;

    // serde_json never emits leading whitespace
    if body.first() != Some(&b'{') {
        return Err(RequestError::Serialization(
            "Payload must encode to a JSON object".to_string(),
        ));
    }

    Ok(body)
}
