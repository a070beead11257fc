//! Test fixtures: representative PI_JSON payloads from the FEWS PI REST service.
//!
//! Structurally complete but trimmed to what the parsers need. Shape:
//!   timeSeries[]
//!     .header.{moduleInstanceId, locationId, parameterId, stationName, units}
//!     .header.timeStep.{unit, multiplier}   multiplier as a STRING
//!     .header.{startDate, endDate, forecastDate}.{date, time}
//!     .header.{lat, lon}                    coordinates as STRINGS
//!     .events[].{date, time, value, flag}   value as a STRING, -999 = missing
//!   locations[]
//!     .{locationId, shortName, lat, lon, ...}

use crate::types::query::QueryParams;
use crate::transport::error::TransportError;
use crate::transport::PiTransport;
use std::cell::RefCell;

/// Rosario Q.sim forecast with one sentinel event at the start.
pub(crate) fn fixture_rosario_json() -> &'static str {
    r#"{
      "version": "1.32",
      "timeZone": "0.0",
      "timeSeries": [
        {
          "header": {
            "type": "instantaneous",
            "moduleInstanceId": "MGB_Forecast",
            "locationId": "6362",
            "parameterId": "Q.sim",
            "timeStep": { "unit": "second", "multiplier": "86400" },
            "startDate": { "date": "2024-01-01", "time": "00:00:00" },
            "endDate": { "date": "2024-01-04", "time": "00:00:00" },
            "forecastDate": { "date": "2024-01-01", "time": "00:00:00" },
            "missVal": "-999.0",
            "stationName": "Rosario",
            "lat": "-32.94",
            "lon": "-60.63",
            "x": "-60.63",
            "y": "-32.94",
            "units": "m3/s"
          },
          "events": [
            { "date": "2024-01-01", "time": "00:00:00", "value": "-999", "flag": "8" },
            { "date": "2024-01-02", "time": "00:00:00", "value": "16500.5", "flag": "0" },
            { "date": "2024-01-03", "time": "00:00:00", "value": "16720.25", "flag": "0" },
            { "date": "2024-01-04", "time": "00:00:00", "value": "16810", "flag": "0" }
          ]
        }
      ]
    }"#
}

/// Display group response with three series at two locations.
pub(crate) fn fixture_display_group_json() -> &'static str {
    r#"{
      "timeSeries": [
        {
          "header": {
            "moduleInstanceId": "MGB_Forecast",
            "locationId": "5965",
            "parameterId": "Q.sim",
            "timeStep": { "unit": "second", "multiplier": "86400" },
            "forecastDate": { "date": "2025-03-19", "time": "00:00:00" },
            "stationName": "Ladario",
            "lat": "-19.0", "lon": "-57.6",
            "units": "m3/s"
          },
          "events": [
            { "date": "2025-03-19", "time": "00:00:00", "value": "1350.0" }
          ]
        },
        {
          "header": {
            "moduleInstanceId": "MGB_Forecast",
            "locationId": "5965",
            "parameterId": "H.sim",
            "timeStep": { "unit": "second", "multiplier": "86400" },
            "forecastDate": { "date": "2025-03-19", "time": "00:00:00" },
            "stationName": "Ladario",
            "lat": "-19.0", "lon": "-57.6",
            "units": "m"
          },
          "events": [
            { "date": "2025-03-19", "time": "00:00:00", "value": "2.31" }
          ]
        },
        {
          "header": {
            "moduleInstanceId": "MGB_Forecast",
            "locationId": "6362",
            "parameterId": "Q.sim",
            "timeStep": { "unit": "second", "multiplier": "86400" },
            "forecastDate": { "date": "2025-03-19", "time": "00:00:00" },
            "stationName": "Rosario",
            "lat": "-32.94", "lon": "-60.63",
            "units": "m3/s"
          },
          "events": []
        }
      ]
    }"#
}

pub(crate) fn fixture_empty_series_json() -> &'static str {
    r#"{ "version": "1.32", "timeSeries": [] }"#
}

pub(crate) fn fixture_locations_json() -> &'static str {
    r#"{
      "version": "1.32",
      "geoDatum": "WGS 1984",
      "locations": [
        { "locationId": "1", "shortName": "Site A", "lon": "-56.83", "lat": "-14.34", "z": "0.0" },
        { "locationId": "6362", "shortName": "Rosario", "lon": "-60.63", "lat": "-32.94",
          "attributes": [{ "id": "basin", "stringValue": "Parana" }] }
      ]
    }"#
}

pub(crate) fn fixture_empty_locations_json() -> &'static str {
    r#"{ "version": "1.32", "locations": [] }"#
}

/// A request observed by [`FixtureTransport`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub endpoint: String,
    pub params: QueryParams,
}

/// Offline transport answering every request with a fixed body.
pub(crate) struct FixtureTransport {
    body: &'static str,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl FixtureTransport {
    pub(crate) fn new(body: &'static str) -> Self {
        Self {
            body,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl PiTransport for FixtureTransport {
    fn get(&self, endpoint: &str, params: &QueryParams) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            params: params.clone(),
        });
        Ok(self.body.to_string())
    }
}
