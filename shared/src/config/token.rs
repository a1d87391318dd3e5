//! Token generation and delivery configuration

use serde::{Deserialize, Serialize};

/// Default timeout around a single SMS send, in seconds
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 30;

/// Numeric band tokens are drawn from
///
/// - `Full`: 100000..=999999, every token is six digits with no leading zero
/// - `Legacy`: 111111..=999998, the band of the historical formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRange {
    #[default]
    Full,
    Legacy,
}

impl std::fmt::Display for TokenRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenRange::Full => write!(f, "full"),
            TokenRange::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for TokenRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(TokenRange::Full),
            "legacy" => Ok(TokenRange::Legacy),
            _ => Err(format!("Invalid token range: {}", s)),
        }
    }
}

/// Token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Band tokens are drawn from
    #[serde(default)]
    pub range: TokenRange,

    /// Timeout around the SMS send, in seconds
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            range: TokenRange::default(),
            send_timeout_secs: DEFAULT_SEND_TIMEOUT_SECS,
        }
    }
}

impl TokenConfig {
    /// Load from `TOKEN_RANGE` and `TOKEN_SEND_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unparseable values fall back to defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let range = var("TOKEN_RANGE")
            .and_then(|r| r.parse().ok())
            .unwrap_or_default();
        let send_timeout_secs = var("TOKEN_SEND_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_SEND_TIMEOUT_SECS);

        Self {
            range,
            send_timeout_secs,
        }
    }
}

fn default_send_timeout_secs() -> u64 {
    DEFAULT_SEND_TIMEOUT_SECS
}
