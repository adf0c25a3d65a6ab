use serde::Deserialize;
use thiserror::Error;

use crate::model::CurrentWeather;

/// The forecast payload could not be turned into a [`CurrentWeather`].
///
/// Covers invalid JSON as well as a missing or wrong-typed required
/// field; the caller gets no partial value in any of those cases.
#[derive(Debug, Error)]
#[error("malformed forecast payload: {source}")]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    timezone: String,
    currently: Currently,
}

/// Wire shape of the `currently` sub-object. The endpoint sends many
/// more fields than these; serde ignores the rest.
#[derive(Debug, Deserialize)]
struct Currently {
    icon: String,
    time: i64,
    temperature: f64,
    humidity: f64,
    #[serde(rename = "precipProbability")]
    precip_probability: f64,
    summary: String,
}

/// Parse a raw forecast response body into a [`CurrentWeather`].
///
/// Pure: no I/O, no side effects. Field values are carried over exactly
/// as received; humidity and precipitation probability stay fractions.
pub fn parse_current(raw: &str) -> Result<CurrentWeather, ParseError> {
    let payload: ForecastPayload = serde_json::from_str(raw)?;

    Ok(CurrentWeather {
        icon_code: payload.currently.icon,
        observed_at: payload.currently.time,
        temperature_f: payload.currently.temperature,
        humidity: payload.currently.humidity,
        precip_probability: payload.currently.precip_probability,
        summary: payload.currently.summary,
        timezone: payload.timezone,
    })
}
