//! Forecast client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the forecast client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Upstream JSON endpoint URL (default: <http://pogoda.ngs.ru/json/>)
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint_url() -> String {
    "http://pogoda.ngs.ru/json/".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.endpoint_url, "http://pogoda.ngs.ru/json/");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: ForecastConfig =
            serde_json::from_str(r#"{"timeout_secs": 5}"#).expect("should deserialize");
        assert_eq!(config.endpoint_url, "http://pogoda.ngs.ru/json/");
        assert_eq!(config.timeout_secs, 5);
    }
}
