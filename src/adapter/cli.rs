// src/adapter/cli.rs
// Program shell shared by the swap and pump binaries

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use crate::adapter::prompt::Prompt;
use crate::adapter::report;
use crate::application::usecase::RequestDriver;
use crate::config::{Config, RunMode};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::model::TargetApi;
use crate::infrastructure::http::HyperTransport;

#[derive(Parser, Debug, Default)]
#[command(about = "Measure round-trip latency of a trading API endpoint")]
pub struct Args {
    /// single or batch; omit to pick from a menu
    #[arg(long)]
    pub mode: Option<RunMode>,

    /// Number of requests in batch mode
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Delay between batch requests in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Endpoint URL
    #[arg(long)]
    pub url: Option<String>,

    /// JSON file with the request payload
    #[arg(long)]
    pub payload: Option<String>,

    /// Per-request timeout in milliseconds (0 disables it)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON configuration file used instead of the environment
    #[arg(long, short)]
    pub config: Option<String>,
}

impl Args {
    /// Command-line values win over the environment and config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.run.mode = Some(mode);
        }
        if let Some(count) = self.count {
            config.run.count = Some(count);
        }
        if let Some(interval_ms) = self.interval_ms {
            config.run.interval_ms = Some(interval_ms);
        }
        if let Some(url) = &self.url {
            config.endpoint.url = Some(url.clone());
        }
        if let Some(payload) = &self.payload {
            config.endpoint.payload_file = Some(payload.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.endpoint.timeout_ms = timeout_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

/// What a run will do once all settings are known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPlan {
    Single,
    Batch { count: u32, interval: Duration },
}

/// Entry point for a probe binary targeting `T`.
pub async fn run<T: TargetApi>() -> AppResult<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    args.apply(&mut config);
    config.init_logging()?;

    log::info!("Starting {} latency probe v{}", T::NAME, env!("CARGO_PKG_VERSION"));

    let url = config.url_for::<T>();
    let payload: T = config.load_payload()?;
    log::info!("Target: {}", url);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let plan = {
        let mut prompt = Prompt::new(stdin.lock(), &mut stdout);
        resolve_plan::<T, _, _>(&config, &mut prompt)?
    };

    let Some(plan) = plan else {
        return Ok(());
    };

    let driver = RequestDriver::new(Arc::new(HyperTransport::new())).with_timeout(config.timeout());
    execute_plan(&driver, &url, &payload, plan, &mut stdout).await
}

/// Turn configuration plus, where needed, interactive answers into a plan.
///
/// `None` means the user gave an answer that was not understood; the run
/// then ends without sending anything.
pub fn resolve_plan<T, R, W>(config: &Config, prompt: &mut Prompt<R, W>) -> AppResult<Option<RunPlan>>
where
    T: TargetApi,
    R: BufRead,
    W: Write,
{
    let mode = match config.run.mode {
        Some(mode) => mode,
        None => match prompt.choose_mode(T::NAME)? {
            Some(mode) => mode,
            None => return Ok(None),
        },
    };

    if mode == RunMode::Single {
        return Ok(Some(RunPlan::Single));
    }

    let count = match config.run.count {
        Some(count) => count,
        None => match prompt.ask_count()? {
            Some(count) => count,
            None => return Ok(None),
        },
    };

    let interval_ms = match config.run.interval_ms {
        Some(ms) => ms,
        None if T::PROMPTS_INTERVAL => match prompt.ask_interval_ms()? {
            Some(ms) => ms,
            None => return Ok(None),
        },
        None => 0,
    };

    Ok(Some(RunPlan::Batch {
        count,
        interval: Duration::from_millis(interval_ms),
    }))
}

/// Carry out a plan, printing every response to `out`.
///
/// A failed single request is returned as an error. Failures inside a batch
/// are printed and the batch goes on.
pub async fn execute_plan<T, W>(
    driver: &RequestDriver,
    url: &str,
    payload: &T,
    plan: RunPlan,
    out: &mut W,
) -> AppResult<()>
where
    T: TargetApi,
    W: Write,
{
    match plan {
        RunPlan::Single => {
            let result = driver.execute_timed_request(url, payload).await.map_err(|e| {
                log::error!("Request failed: {}", e);
                AppError::Request(e)
            })?;

            report::print_result(out, &result)?;
            writeln!(out, "Request latency: {:?}", result.elapsed)?;
        }
        RunPlan::Batch { count, interval } => {
            log::info!("Sending {} requests, {:?} apart", count, interval);

            let tally = driver
                .execute_repeated_with(url, payload, count, interval, |record| {
                    if let Err(e) = report::print_record(out, &record) {
                        log::error!("Failed to print request {}: {}", record.index, e);
                    }
                })
                .await;

            report::print_summary(out, &tally)?;
        }
    }

    Ok(())
}
