// src/domain/model/mod.rs
// Core domain models

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::errors::RequestError;

pub mod payload;

pub use payload::{SwapRequest, TargetApi, TradeRequest};

/// HTTP status as reported by the remote service, e.g. `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub reason: String,
}

impl StatusLine {
    pub fn new(code: u16, reason: &str) -> Self {
        Self {
            code,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.reason)
        }
    }
}

/// What the transport hands back for one POST.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusLine,
    /// Time from just before the request was issued until headers arrived
    pub headers_elapsed: Duration,
    pub body: String,
}

/// Successful outcome of one timed request, whatever the status code.
#[derive(Debug, Clone)]
pub struct CallResult {
    pub elapsed: Duration,
    pub status: StatusLine,
    pub body: String,
}

impl From<TransportResponse> for CallResult {
    fn from(response: TransportResponse) -> Self {
        Self {
            elapsed: response.headers_elapsed,
            status: response.status,
            body: response.body,
        }
    }
}

// One entry of a batch run
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// 1-based position within the batch
    pub index: u32,
    pub started_at: DateTime<Utc>,
    pub outcome: Result<CallResult, RequestError>,
}

impl CallRecord {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Running count of a batch's outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTally {
    pub completed: u32,
    pub failed: u32,
}

impl BatchTally {
    pub fn add(&mut self, record: &CallRecord) {
        if record.is_ok() {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.completed + self.failed
    }
}
