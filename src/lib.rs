//! Pogoda NGS forecast client
//!
//! Fetches a weather forecast for a city/station pair from the pogoda.ngs.ru
//! JSON API and exposes derived, human-readable fields: sunrise and sunset as
//! clock strings, the length of the day, and a compass name for the wind
//! direction.
//!
//! The HTTP exchange sits behind the [`Transport`] trait so tests (and
//! alternative HTTP stacks) can inject their own collaborator.

pub mod clock;
pub mod config;
pub mod error;
pub mod forecast;
pub mod transport;
pub mod wind;

pub use config::ForecastConfig;
pub use error::ForecastError;
pub use forecast::{ForecastClient, ForecastRecord};
pub use transport::{HttpTransport, Transport, TransportError};
pub use wind::wind_direction_name;
