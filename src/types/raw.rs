//! Serde structures for the PI_JSON documents returned by the FEWS PI REST service.
//!
//! Every header field is optional at this level. Which fields are required is
//! decided by the parsers in [`crate::parse`], so that an absent field surfaces as
//! [`crate::ParseError::MissingField`] instead of an opaque serde error.
//! Unknown fields are ignored, keeping the schema forward compatible.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A numeric field as it appears on the wire.
///
/// The PI service renders most numbers as JSON strings (`"lon": "-56.83"`),
/// but some deployments emit plain JSON numbers. Both are accepted; strings are
/// parsed strictly when the value is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawNumber::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            RawNumber::Number(_) => None,
            RawNumber::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => f.write_str(s),
        }
    }
}

/// Identifier or name that some deployments emit as a bare JSON number
/// (`"locationId": 6362`). Read back as its decimal text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawText>::deserialize(deserializer)?.map(|raw| match raw {
        RawText::Text(s) => s,
        RawText::Number(n) => n.to_string(),
    }))
}

/// Top level of a `/timeseries` or `/timeseries/displaygroups` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeSeriesResponse {
    #[serde(rename = "timeSeries", default)]
    pub time_series: Vec<RawSeries>,
}

/// One `timeSeries[i]` record: a header plus its event list.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeries {
    pub header: Option<RawHeader>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHeader {
    pub module_instance_id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub parameter_id: Option<String>,
    pub time_step: Option<RawTimeStep>,
    pub start_date: Option<RawDateTime>,
    pub end_date: Option<RawDateTime>,
    pub forecast_date: Option<RawDateTime>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub station_name: Option<String>,
    pub lat: Option<RawNumber>,
    pub lon: Option<RawNumber>,
    pub units: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeStep {
    pub unit: Option<String>,
    pub multiplier: Option<RawNumber>,
}

/// The `{date, time}` pair PI uses for every instant.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDateTime {
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub date: Option<String>,
    pub time: Option<String>,
    pub value: Option<RawNumber>,
}

/// Top level of a `/locations` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocationsResponse {
    #[serde(default)]
    pub locations: Vec<RawLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default, deserialize_with = "text_or_number")]
    pub location_id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub short_name: Option<String>,
    pub lat: Option<RawNumber>,
    pub lon: Option<RawNumber>,
}
