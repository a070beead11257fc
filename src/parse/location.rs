use crate::parse::error::ParseError;
use crate::types::raw::{RawLocation, RawNumber};
use crate::types::station::{Location, Station};

/// Reads a coordinate that must be present and parse as a float.
pub(crate) fn parse_coordinate(
    raw: Option<&RawNumber>,
    field: &'static str,
) -> Result<f64, ParseError> {
    let raw = raw.ok_or(ParseError::MissingField(field))?;
    raw.as_f64().ok_or_else(|| ParseError::MalformedLocation {
        field,
        value: raw.to_string(),
    })
}

pub(crate) fn parse_point(
    lon: Option<&RawNumber>,
    lat: Option<&RawNumber>,
) -> Result<Location, ParseError> {
    Ok(Location::new(
        parse_coordinate(lon, "lon")?,
        parse_coordinate(lat, "lat")?,
    ))
}

/// Converts one `/locations` record into a [`Station`].
pub fn parse_location(raw: &RawLocation) -> Result<Station, ParseError> {
    let id = raw
        .location_id
        .clone()
        .ok_or(ParseError::MissingField("locationId"))?;
    let name = raw
        .short_name
        .clone()
        .ok_or(ParseError::MissingField("shortName"))?;
    Ok(Station {
        id,
        name,
        location: parse_point(raw.lon.as_ref(), raw.lat.as_ref())?,
    })
}

/// Converts `/locations` records into stations, preserving input order.
/// The first malformed record aborts the whole conversion.
pub fn parse_locations(raw: &[RawLocation]) -> Result<Vec<Station>, ParseError> {
    raw.iter().map(parse_location).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fixtures::fixture_locations_json;
    use crate::types::raw::RawLocationsResponse;

    fn raw_location(json: &str) -> RawLocation {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_site_a() -> Result<(), ParseError> {
        let raw = raw_location(r#"{"locationId":"1","shortName":"Site A","lon":"-56.83","lat":"-14.34"}"#);
        let station = parse_location(&raw)?;
        assert_eq!(
            station,
            Station {
                id: "1".to_string(),
                name: "Site A".to_string(),
                location: Location::new(-56.83, -14.34),
            }
        );
        Ok(())
    }

    #[test]
    fn test_numeric_location_id() -> Result<(), ParseError> {
        let raw = raw_location(r#"{"locationId":6362,"shortName":"Rosario","lon":-60.63,"lat":-32.94}"#);
        let station = parse_location(&raw)?;
        assert_eq!(station.id, "6362");
        assert_eq!(station.location, Location::new(-60.63, -32.94));
        Ok(())
    }

    #[test]
    fn test_order_is_preserved() -> Result<(), ParseError> {
        let response: RawLocationsResponse = serde_json::from_str(fixture_locations_json()).unwrap();
        let stations = parse_locations(&response.locations)?;
        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "6362"]);
        assert_eq!(stations[1].location.coordinates(), [-60.63, -32.94]);
        Ok(())
    }

    #[test]
    fn test_malformed_coordinate() {
        let raw = raw_location(r#"{"locationId":"1","shortName":"Site A","lon":"west","lat":"-14.34"}"#);
        assert_eq!(
            parse_location(&raw),
            Err(ParseError::MalformedLocation {
                field: "lon",
                value: "west".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_fields() {
        let raw = raw_location(r#"{"locationId":"1","lon":"1","lat":"2"}"#);
        assert_eq!(parse_location(&raw), Err(ParseError::MissingField("shortName")));

        let raw = raw_location(r#"{"locationId":"1","shortName":"A","lon":"1"}"#);
        assert_eq!(parse_location(&raw), Err(ParseError::MissingField("lat")));
    }

    #[test]
    fn test_empty_input() -> Result<(), ParseError> {
        assert!(parse_locations(&[])?.is_empty());
        Ok(())
    }
}
