//! FarmSense `moonphases` payload decoding.
//!
//! The service answers with a JSON array; the first row carries `Error`
//! (`0` on success), `ErrorMsg`, `Phase`, `Illumination` and `Moon` (a list
//! of traditional names).

use crate::model::reading::{parse_illumination, MoonReading};
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MoonFeedResult<T> = Result<T, MoonFeedError>;

/// Feed-level failure: the reading as a whole is unavailable.
#[derive(Debug)]
pub enum MoonFeedError {
    /// Body is not JSON.
    InvalidJson(serde_json::Error),
    /// Body is JSON but holds no rows.
    EmptyPayload,
    /// Service reported an error code other than zero.
    Reported { code: i64, message: String },
}

impl Display for MoonFeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "moon feed payload is not valid JSON: {err}"),
            Self::EmptyPayload => write!(f, "moon feed payload contains no readings"),
            Self::Reported { code, message } => {
                write!(f, "moon feed reported error {code}: {message}")
            }
        }
    }
}

impl Error for MoonFeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            Self::EmptyPayload | Self::Reported { .. } => None,
        }
    }
}

impl From<serde_json::Error> for MoonFeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value)
    }
}

/// Request URL for the reading at a unix timestamp in seconds.
pub fn request_url(unix_seconds: i64) -> String {
    format!("https://api.farmsense.net/v1/moonphases/?d={unix_seconds}")
}

/// Decodes a FarmSense response body.
///
/// # Errors
/// - `InvalidJson` when the body does not parse.
/// - `EmptyPayload` when there is no first row.
/// - `Reported` when the row's `Error` is missing or nonzero.
///
/// # Side effects
/// - Emits a `moon_feed_parse` logging event.
pub fn parse_farmsense_payload(body: &str) -> MoonFeedResult<MoonReading> {
    let result = decode(body);
    match &result {
        Ok(reading) => info!(
            "event=moon_feed_parse module=moon status=ok provider=farmsense illumination={:.3} moon_known={}",
            reading.illumination,
            reading.moon_name != crate::model::UNKNOWN
        ),
        Err(err) => warn!(
            "event=moon_feed_parse module=moon status=error provider=farmsense error={}",
            err
        ),
    }
    result
}

fn decode(body: &str) -> MoonFeedResult<MoonReading> {
    let payload: Value = serde_json::from_str(body)?;
    let row = match &payload {
        Value::Array(rows) => rows.first(),
        Value::Object(_) => Some(&payload),
        _ => None,
    }
    .ok_or(MoonFeedError::EmptyPayload)?;

    let code = row.get("Error").and_then(Value::as_i64);
    if code != Some(0) {
        let message = row
            .get("ErrorMsg")
            .and_then(Value::as_str)
            .unwrap_or("Unknown API error")
            .to_string();
        return Err(MoonFeedError::Reported {
            code: code.unwrap_or(-1),
            message,
        });
    }

    Ok(MoonReading::sanitized(
        row.get("Phase").and_then(Value::as_str),
        row.get("Illumination").and_then(illumination_value),
        row.get("Moon").and_then(first_moon_name),
    ))
}

fn illumination_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_illumination(text),
        _ => None,
    }
}

fn first_moon_name(value: &Value) -> Option<&str> {
    match value {
        Value::Array(names) => names.first().and_then(Value::as_str),
        Value::String(name) => Some(name.as_str()),
        _ => None,
    }
}
