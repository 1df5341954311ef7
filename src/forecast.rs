//! Forecast fetching and payload mapping
//!
//! This module drives the whole exchange: serialize the upstream request,
//! hand it to the transport, decode the JSON payload into the allow-listed
//! station readings, and derive the human-readable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::clock::{convert_time, day_duration};
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::transport::{HttpTransport, Transport, TransportError};
use crate::wind::wind_direction_name;

/// A single forecast observation with derived presentation fields
///
/// Produced once per fetch and not mutated afterwards. Measurement fields are
/// unset when the upstream payload omits them; the derived fields are always
/// consistent with the raw codes they were computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Wind chill in Celsius
    pub wind_chill: Option<f64>,
    /// Heat index in Celsius
    pub heat_index: Option<f64>,
    /// Pressure in torr (mm Hg)
    pub pressure: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Average wind speed over the past 10 minutes in m/s
    pub wind_speed_10_min_avg: Option<f64>,
    /// Wind bearing in degrees clockwise from true north
    pub wind_direction: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<f64>,
    /// Sunrise as a compact "hmm"/"hhmm" code
    pub time_of_sunrise: Option<u32>,
    /// Sunrise as "h:mm" or "hh:mm"
    pub time_of_sunrise_normal: String,
    /// Sunset as a compact "hmm"/"hhmm" code
    pub time_of_sunset: Option<u32>,
    /// Sunset as "h:mm" or "hh:mm"
    pub time_of_sunset_normal: String,
    /// Ultraviolet index
    pub uv: Option<f64>,
    /// Solar radiation
    pub solar_radiation: Option<f64>,
    /// Length of the day, "<h> h <m> min"
    pub duration_of_the_day: String,
    /// Compass name for the wind bearing, or "no"
    pub wind_direction_name: String,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Request body for the upstream getForecast call
///
/// Key names and parameter order are fixed by the upstream API: the station
/// code comes first, the city code second.
#[derive(Debug, Serialize)]
struct ForecastRequest<'a> {
    method: &'static str,
    params: [&'a str; 2],
}

/// Top-level shape of the upstream response
#[derive(Debug, Deserialize)]
struct ForecastPayload {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    result: Option<StationReadings>,
}

/// Fields copied off the upstream `result` object
///
/// This is the allow-list: anything the upstream sends beyond these names is
/// dropped during decoding, and absent fields stay unset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StationReadings {
    temperature: Option<f64>,
    wind_chill: Option<f64>,
    heat_index: Option<f64>,
    pressure: Option<f64>,
    wind_speed: Option<f64>,
    wind_speed_10_min_avg: Option<f64>,
    wind_direction: Option<f64>,
    humidity: Option<f64>,
    time_of_sunrise: Option<u32>,
    time_of_sunset: Option<u32>,
    uv: Option<f64>,
    solar_radiation: Option<f64>,
}

/// Client that fetches a forecast and maps it into a [`ForecastRecord`]
pub struct ForecastClient {
    transport: Box<dyn Transport>,
}

impl ForecastClient {
    /// Create a client backed by [`HttpTransport`] with the given configuration
    pub fn new(config: &ForecastConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: Box::new(HttpTransport::new(config)?),
        })
    }

    /// Create a client with a custom transport collaborator
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the forecast for a city/station pair
    ///
    /// All-or-nothing: any transport, decode, upstream, or time-normalization
    /// failure aborts the fetch without a partial record.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        city_code: &str,
        station_code: &str,
    ) -> Result<ForecastRecord, ForecastError> {
        let request = ForecastRequest {
            method: "getForecast",
            params: [station_code, city_code],
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| decode_error(city_code, station_code, e.to_string()))?;

        let bytes =
            self.transport
                .send(body)
                .await
                .map_err(|source| ForecastError::Transport {
                    city: city_code.to_string(),
                    station: station_code.to_string(),
                    source,
                })?;

        let payload: ForecastPayload = serde_json::from_slice(&bytes)
            .map_err(|e| decode_error(city_code, station_code, e.to_string()))?;

        if payload.error.as_ref().is_some_and(is_truthy) {
            return Err(ForecastError::Upstream {
                city: city_code.to_string(),
                station: station_code.to_string(),
            });
        }

        let readings = payload.result.ok_or_else(|| {
            decode_error(city_code, station_code, "missing 'result' object".to_string())
        })?;

        debug!(city = city_code, station = station_code, "mapping forecast payload");
        map_readings(readings)
    }
}

/// Build the record from decoded readings, deriving the presentation fields
fn map_readings(readings: StationReadings) -> Result<ForecastRecord, ForecastError> {
    let time_of_sunrise_normal = normalize_time(readings.time_of_sunrise)?;
    let time_of_sunset_normal = normalize_time(readings.time_of_sunset)?;
    let duration_of_the_day =
        day_duration(&time_of_sunrise_normal, &time_of_sunset_normal, false)?;
    let direction_name = readings
        .wind_direction
        .map_or("no", wind_direction_name)
        .to_string();

    Ok(ForecastRecord {
        temperature: readings.temperature,
        wind_chill: readings.wind_chill,
        heat_index: readings.heat_index,
        pressure: readings.pressure,
        wind_speed: readings.wind_speed,
        wind_speed_10_min_avg: readings.wind_speed_10_min_avg,
        wind_direction: readings.wind_direction,
        humidity: readings.humidity,
        time_of_sunrise: readings.time_of_sunrise,
        time_of_sunrise_normal,
        time_of_sunset: readings.time_of_sunset,
        time_of_sunset_normal,
        uv: readings.uv,
        solar_radiation: readings.solar_radiation,
        duration_of_the_day,
        wind_direction_name: direction_name,
        fetched_at: Utc::now(),
    })
}

/// Normalize an optional compact time code
///
/// An absent code cannot be normalized either; the fetch is all-or-nothing.
fn normalize_time(code: Option<u32>) -> Result<String, ForecastError> {
    match code {
        Some(code) => convert_time(code),
        None => Err(ForecastError::InvalidTimeFormat {
            value: String::new(),
        }),
    }
}

/// The upstream error flag is loosely typed; null, false, zero, "" and "0"
/// all count as unset.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

fn decode_error(city: &str, station: &str, reason: String) -> ForecastError {
    ForecastError::Decode {
        city: city.to_string(),
        station: station.to_string(),
        reason,
    }
}
