use crate::parse::error::ParseError;
use crate::parse::location::parse_point;
use crate::parse::timestamp::{decode_pi_datetime, decode_timestamp};
use crate::types::raw::{RawEvent, RawHeader, RawSeries};
use crate::types::series::{Observation, ParsedSeries, SeriesData, Variable};
use crate::types::station::Station;
use chrono::TimeDelta;
use log::debug;

/// Event value the PI service uses for "no data". Events carrying it are dropped.
pub const MISSING_VALUE: f64 = -999.0;

fn required<'a, T>(field: &'a Option<T>, name: &'static str) -> Result<&'a T, ParseError> {
    field.as_ref().ok_or(ParseError::MissingField(name))
}

fn parse_variable(header: &RawHeader) -> Result<Variable, ParseError> {
    let time_step = required(&header.time_step, "timeStep")?;
    let multiplier = required(&time_step.multiplier, "timeStep.multiplier")?;
    // The multiplier is read as seconds whatever timeStep.unit says.
    let seconds = multiplier
        .as_i64()
        .ok_or_else(|| ParseError::MalformedTimeStep(multiplier.to_string()))?;
    let sampling_interval = TimeDelta::try_seconds(seconds)
        .ok_or_else(|| ParseError::MalformedTimeStep(multiplier.to_string()))?;

    Ok(Variable {
        id: required(&header.parameter_id, "parameterId")?.clone(),
        sampling_interval,
        units: required(&header.units, "units")?.clone(),
        time_step_unit: time_step.unit.clone(),
    })
}

fn parse_station(header: &RawHeader) -> Result<Station, ParseError> {
    Ok(Station {
        id: required(&header.location_id, "locationId")?.clone(),
        name: required(&header.station_name, "stationName")?.clone(),
        location: parse_point(header.lon.as_ref(), header.lat.as_ref())?,
    })
}

/// Converts one event, returning `None` for the missing-value sentinel.
///
/// The value is checked before the timestamp, so a sentinel event is dropped
/// even when its date or time is unusable or absent.
fn parse_event(event: &RawEvent) -> Result<Option<Observation>, ParseError> {
    let raw_value = required(&event.value, "value")?;
    let value = raw_value
        .as_f64()
        .ok_or_else(|| ParseError::MalformedObservation {
            date: event.date.clone().unwrap_or_default(),
            time: event.time.clone().unwrap_or_default(),
            value: raw_value.to_string(),
        })?;

    if value == MISSING_VALUE {
        return Ok(None);
    }

    let date = required(&event.date, "date")?;
    let time = required(&event.time, "time")?;
    Ok(Some(Observation {
        timestamp: decode_timestamp(date, time)?,
        value,
    }))
}

/// Converts a list of events into observations, keeping input order and
/// dropping sentinel values. Any malformed event fails the whole list.
pub fn parse_events(events: &[RawEvent]) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::with_capacity(events.len());
    for event in events {
        if let Some(observation) = parse_event(event)? {
            observations.push(observation);
        }
    }
    Ok(observations)
}

fn parse_series_data(header: &RawHeader, events: &[RawEvent]) -> Result<SeriesData, ParseError> {
    let forecast_issued_at = decode_pi_datetime(required(&header.forecast_date, "forecastDate")?)?;
    let start = header.start_date.as_ref().map(decode_pi_datetime).transpose()?;
    let end = header.end_date.as_ref().map(decode_pi_datetime).transpose()?;
    let observations = parse_events(events)?;

    let dropped = events.len() - observations.len();
    if dropped > 0 {
        debug!(
            "Dropped {} of {} events carrying the missing value {}",
            dropped,
            events.len(),
            MISSING_VALUE
        );
    }

    Ok(SeriesData {
        forecast_issued_at,
        observations,
        start,
        end,
    })
}

/// Converts one raw `timeSeries` record into a [`ParsedSeries`].
///
/// # Errors
///
/// * [`ParseError::MissingField`] when a required header or event field is absent.
/// * [`ParseError::MalformedLocation`] when `lon`/`lat` are not floats.
/// * [`ParseError::MalformedTimeStep`] when `timeStep.multiplier` is not an integer.
/// * [`ParseError::MalformedTimestamp`] for unusable `{date, time}` pairs.
/// * [`ParseError::MalformedObservation`] when an event value is not a float.
pub fn parse_series(raw: &RawSeries) -> Result<ParsedSeries, ParseError> {
    let header = required(&raw.header, "header")?;
    Ok(ParsedSeries {
        variable: parse_variable(header)?,
        station: parse_station(header)?,
        data: parse_series_data(header, &raw.events)?,
        module_instance_id: header.module_instance_id.clone(),
    })
}
