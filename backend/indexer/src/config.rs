//! Application configuration loaded from environment variables.

use crate::errors::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g. https://soroban-testnet.stellar.org)
    pub rpc_url: String,
    /// The campaign contract address (Strkey format)
    pub contract_id: String,
    /// Path to the SQLite database file
    pub database_url: String,
    /// Port for the REST API server
    pub api_port: u16,
    /// How often (in seconds) to poll the RPC for new events
    pub poll_interval_secs: u64,
    /// Maximum number of events to fetch per RPC request
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved
    pub start_ledger: u32,
    /// Expected number of candidates; `0` sizes the tally to the highest id seen
    pub candidate_count: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            rpc_url: env_var("RPC_URL")
                .unwrap_or_else(|_| "https://soroban-testnet.stellar.org".to_string()),
            contract_id: env_var("CONTRACT_ID").map_err(|_| {
                IndexerError::Config("CONTRACT_ID environment variable is required".to_string())
            })?,
            database_url: env_var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./campaign_events.db".to_string()),
            api_port: parse_or("API_PORT", "3001")?,
            poll_interval_secs: parse_or("POLL_INTERVAL_SECS", "5")?,
            events_per_page: parse_or("EVENTS_PER_PAGE", "100")?,
            start_ledger: parse_or("START_LEDGER", "0")?,
            candidate_count: parse_or("CANDIDATE_COUNT", "0")?,
        })
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| IndexerError::Config(format!("Missing env var: {key}")))
}

fn parse_or<T: std::str::FromStr>(key: &str, default: &str) -> Result<T> {
    env_var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| IndexerError::Config(format!("Invalid {key}")))
}
