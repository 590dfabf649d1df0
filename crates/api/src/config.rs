//! Runtime configuration, read from environment variables at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use bankledger_ledger::AmountPolicy;
use bankledger_observability::LogConfig;
use thiserror::Error;

pub const ADDR_VAR: &str = "BANK_API_ADDR";
pub const LOG_DIR_VAR: &str = "BANK_LOG_DIR";
pub const AMOUNT_POLICY_VAR: &str = "BANK_AMOUNT_POLICY";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidAmountPolicy { var: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub log: LogConfig,
    pub amount_policy: AmountPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (tests pass a map instead of the env).
    ///
    /// An empty `BANK_LOG_DIR` turns file logging off.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let mut log = LogConfig::default();
        if let Some(dir) = lookup(LOG_DIR_VAR) {
            log.dir = if dir.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }

        let amount_policy = match lookup(AMOUNT_POLICY_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|message| ConfigError::InvalidAmountPolicy {
                    var: AMOUNT_POLICY_VAR,
                    message,
                })?,
            None => AmountPolicy::default(),
        };

        Ok(Self {
            addr,
            log,
            amount_policy,
        })
    }
}
