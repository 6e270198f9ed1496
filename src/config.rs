// src/config.rs
use crate::application::usecase::DEFAULT_TIMEOUT;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::model::TargetApi;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Latency probe configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where and what to send
    pub endpoint: EndpointConfig,

    /// How many calls to make and how far apart
    pub run: RunConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Target endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint URL; the target's built-in URL when unset
    pub url: Option<String>,

    /// JSON file holding the request payload
    pub payload_file: Option<String>,

    /// Per-call timeout in milliseconds, 0 disables it
    pub timeout_ms: u64,
}

/// Run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Single call or batch; asked interactively when unset
    pub mode: Option<RunMode>,

    /// Number of calls in batch mode
    pub count: Option<u32>,

    /// Pause between batch calls in milliseconds
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Single,
    Batch,
}

impl FromStr for RunMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" => Ok(RunMode::Single),
            "batch" | "2" => Ok(RunMode::Batch),
            other => Err(AppError::Config(format!("Unknown run mode: {}", other))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source shaped like the environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_config = EndpointConfig {
            url: lookup("TARGET_URL").filter(|url| !url.trim().is_empty()),
            payload_file: lookup("PAYLOAD_FILE").filter(|path| !path.trim().is_empty()),
            timeout_ms: parse_var(&lookup, "REQUEST_TIMEOUT_MS")?
                .unwrap_or(DEFAULT_TIMEOUT.as_millis() as u64),
        };

        let run_config = RunConfig {
            mode: parse_var(&lookup, "RUN_MODE")?,
            count: parse_var(&lookup, "REQUEST_COUNT")?,
            interval_ms: parse_var(&lookup, "REQUEST_INTERVAL_MS")?,
        };

        let logging_config = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            to_file: lookup("LOG_TO_FILE")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: lookup("LOG_FILE_PATH"),
        };

        Ok(Config {
            endpoint: endpoint_config,
            run: run_config,
            logging: logging_config,
        })
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Endpoint to probe for target `T`
    pub fn url_for<T: TargetApi>(&self) -> String {
        self.endpoint
            .url
            .clone()
            .unwrap_or_else(|| T::DEFAULT_URL.to_string())
    }

    /// Payload from the configured file, or the target's built-in payload.
    pub fn load_payload<T: TargetApi>(&self) -> AppResult<T> {
        let Some(path) = &self.endpoint.payload_file else {
            return Ok(T::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read payload file {}: {}", path, e))
        })?;

        let payload = serde_json::from_str(&contents)?;
        Ok(payload)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.endpoint.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(level_filter(&self.logging.level));

        // Configure output
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(|e| {
                    AppError::Config(format!("Failed to create log file: {}", e))
                })?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder.try_init().map_err(|e| {
            AppError::Config(format!("Failed to initialize logger: {}", e))
        })?;

        Ok(())
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            payload_file: None,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            file_path: None,
        }
    }
}

fn level_filter(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("Invalid {} `{}`: {}", key, raw, e))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SwapRequest, TradeRequest};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("trade_latency_{}_{}", std::process::id(), name))
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.url_for::<SwapRequest>(), "https://swap-v2.solanatracker.io/swap");
        assert_eq!(config.url_for::<TradeRequest>(), "https://pumpportal.fun/api/trade-local");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.run.interval_ms, None);
        assert_eq!(config.run.mode, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.load_payload::<SwapRequest>().unwrap(), SwapRequest::default());
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("TARGET_URL", "http://localhost:9000/trade"),
            ("RUN_MODE", "batch"),
            ("REQUEST_COUNT", "5"),
            ("REQUEST_INTERVAL_MS", "250"),
            ("REQUEST_TIMEOUT_MS", "0"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.url_for::<TradeRequest>(), "http://localhost:9000/trade");
        assert_eq!(config.run.mode, Some(RunMode::Batch));
        assert_eq!(config.run.count, Some(5));
        assert_eq!(config.run.interval_ms, Some(250));
        assert_eq!(config.timeout(), None);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn malformed_count_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[("REQUEST_COUNT", "many")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("RUN_MODE", "parallel")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn run_mode_accepts_menu_numbers() {
        assert_eq!("1".parse::<RunMode>().unwrap(), RunMode::Single);
        assert_eq!(" Batch ".parse::<RunMode>().unwrap(), RunMode::Batch);
        assert!("3".parse::<RunMode>().is_err());
    }

    #[test]
    fn payload_is_read_from_file() {
        let path = temp_path("payload.json");
        let mut payload = TradeRequest::default();
        payload.action = "buy".to_string();
        payload.slippage = 25;
        std::fs::write(&path, serde_json::to_string(&payload).unwrap()).unwrap();

        let mut config = Config::default();
        config.endpoint.payload_file = Some(path.to_string_lossy().into_owned());

        assert_eq!(config.load_payload::<TradeRequest>().unwrap(), payload);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_payload_file_is_reported() {
        let mut config = Config::default();
        config.endpoint.payload_file = Some("/nonexistent/payload.json".to_string());

        let err = config.load_payload::<SwapRequest>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn config_file_fills_missing_sections_with_defaults() {
        let path = temp_path("config.json");
        std::fs::write(&path, r#"{ "run": { "mode": "single" } }"#).unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.run.mode, Some(RunMode::Single));
        assert_eq!(config.endpoint.timeout_ms, 15_000);
        assert_eq!(config.logging.level, "info");
        std::fs::remove_file(&path).ok();
    }
}
