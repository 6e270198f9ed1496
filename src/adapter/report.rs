// src/adapter/report.rs
// Console output for call results

use std::io::{self, Write};

use crate::domain::model::{BatchTally, CallRecord, CallResult};

pub fn print_result<W: Write>(out: &mut W, result: &CallResult) -> io::Result<()> {
    writeln!(out, "=== Response ===")?;
    writeln!(out, "Status: {}", result.status)?;
    writeln!(out, "Body: {}", result.body)?;
    writeln!(out, "Duration: {:?}", result.elapsed)?;
    writeln!(out)
}

pub fn print_record<W: Write>(out: &mut W, record: &CallRecord) -> io::Result<()> {
    writeln!(out, "----- Request #{} -----", record.index)?;
    match &record.outcome {
        Ok(result) => print_result(out, result),
        Err(e) => {
            writeln!(out, "Request {} failed: {}", record.index, e)?;
            writeln!(out)
        }
    }
}

pub fn print_summary<W: Write>(out: &mut W, tally: &BatchTally) -> io::Result<()> {
    writeln!(
        out,
        "Sent {} requests: {} completed, {} failed",
        tally.total(),
        tally.completed,
        tally.failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RequestError;
    use crate::domain::model::StatusLine;
    use chrono::Utc;
    use std::time::Duration;

    fn ok_record(index: u32) -> CallRecord {
        CallRecord {
            index,
            started_at: Utc::now(),
            outcome: Ok(CallResult {
                elapsed: Duration::from_millis(150),
                status: StatusLine::new(429, "Too Many Requests"),
                body: "rate limited".to_string(),
            }),
        }
    }

    fn failed_record(index: u32) -> CallRecord {
        CallRecord {
            index,
            started_at: Utc::now(),
            outcome: Err(RequestError::Transport("connection reset".to_string())),
        }
    }

    #[test]
    fn record_shows_status_body_and_duration() {
        let mut out = Vec::new();
        print_record(&mut out, &ok_record(2)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("----- Request #2 -----\n"));
        assert!(text.contains("Status: 429 Too Many Requests\n"));
        assert!(text.contains("Body: rate limited\n"));
        assert!(text.contains("Duration: 150ms\n"));
    }

    #[test]
    fn failed_record_shows_the_error() {
        let mut out = Vec::new();
        print_record(&mut out, &failed_record(3)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Request 3 failed: Transport error: connection reset"));
    }

    #[test]
    fn summary_counts_failures() {
        let mut tally = BatchTally::default();
        for record in [ok_record(1), failed_record(2), ok_record(3)] {
            tally.add(&record);
        }

        let mut out = Vec::new();
        print_summary(&mut out, &tally).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sent 3 requests: 2 completed, 1 failed\n"
        );
    }
}
