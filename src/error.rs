//! Error taxonomy for forecast fetching
//!
//! Every variant carries enough context (city code, station code, or the
//! offending raw value) to diagnose a failure without re-running the fetch.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while fetching and mapping a forecast
///
/// All four are terminal for a fetch: nothing is retried internally and no
/// partial [`ForecastRecord`](crate::ForecastRecord) is ever returned.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The transport collaborator could not complete the exchange
    #[error("transport failed for city '{city}', station '{station}': {source}")]
    Transport {
        city: String,
        station: String,
        #[source]
        source: TransportError,
    },

    /// The response body was not the JSON shape we expect
    #[error("failed to decode forecast payload for city '{city}', station '{station}': {reason}")]
    Decode {
        city: String,
        station: String,
        reason: String,
    },

    /// The upstream API flagged the request as failed
    #[error("upstream reported an error for city '{city}', station '{station}'")]
    Upstream { city: String, station: String },

    /// A sunrise/sunset code has neither 3 nor 4 digits
    #[error("invalid time format: cannot normalize '{value}'")]
    InvalidTimeFormat { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ForecastError::Upstream {
            city: "nsk".to_string(),
            station: "weather/station-54".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("nsk"));
        assert!(message.contains("weather/station-54"));

        let err = ForecastError::InvalidTimeFormat {
            value: "12345".to_string(),
        };
        assert!(err.to_string().contains("12345"));
    }
}
