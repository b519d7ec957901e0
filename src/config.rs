//! Runtime configuration, read from the command line or the environment.
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Financial analytics dashboard", long_about = None)]
pub struct Config {
    /// Base URL of the analytics backend.
    #[arg(long, env = "DASHBOARD_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Per-request timeout, in seconds.
    #[arg(long, env = "DASHBOARD_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Loads `.env` if present, then parses arguments and environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
