//! SMS transport configuration

use serde::{Deserialize, Serialize};

/// SMS transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS provider name ("simulated" is the only built-in provider)
    pub provider: String,

    /// Artificial latency added by the simulated transport, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,

    /// Make the simulated transport report itself unavailable
    #[serde(default)]
    pub simulate_failure: bool,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("simulated"),
            latency_ms: 0,
            simulate_failure: false,
        }
    }
}

impl SmsConfig {
    /// Load from `SMS_PROVIDER`, `SMS_LATENCY_MS` and `SMS_SIMULATE_FAILURE`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unparseable values fall back to defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let provider = var("SMS_PROVIDER").unwrap_or_else(|| "simulated".to_string());
        let latency_ms = var("SMS_LATENCY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let simulate_failure = var("SMS_SIMULATE_FAILURE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            provider,
            latency_ms,
            simulate_failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = SmsConfig::from_vars(lookup(&[]));
        assert_eq!(config.provider, "simulated");
        assert_eq!(config.latency_ms, 0);
        assert!(!config.simulate_failure);
    }

    #[test]
    fn test_simulate_failure_truthy_values() {
        for value in ["1", "true", "TRUE", "yes", " Yes "] {
            let config = SmsConfig::from_vars(lookup(&[("SMS_SIMULATE_FAILURE", value)]));
            assert!(config.simulate_failure, "{:?} should enable failure", value);
        }
        for value in ["0", "false", "no", "on", ""] {
            let config = SmsConfig::from_vars(lookup(&[("SMS_SIMULATE_FAILURE", value)]));
            assert!(!config.simulate_failure, "{:?} should not enable failure", value);
        }
    }

    #[test]
    fn test_from_vars_reads_provider_and_latency() {
        let config = SmsConfig::from_vars(lookup(&[
            ("SMS_PROVIDER", "mock"),
            ("SMS_LATENCY_MS", "250"),
        ]));
        assert_eq!(config.provider, "mock");
        assert_eq!(config.latency_ms, 250);

        let garbage = SmsConfig::from_vars(lookup(&[("SMS_LATENCY_MS", "fast")]));
        assert_eq!(garbage.latency_ms, 0);
    }
}
