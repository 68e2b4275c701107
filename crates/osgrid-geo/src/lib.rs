//! osgrid-geo - Coordinate-conversion operations
//!
//! This crate holds the numerical core of the engine: parsing and formatting
//! alphanumeric grid references, the National Grid Transverse Mercator
//! projection, and datum conversion via Helmert transforms.
//!
//! The usual pipeline composes these left to right:
//! parse a grid reference, inverse-project it to an OSGB36
//! latitude/longitude, then optionally convert the datum for WGS84-based
//! consumers. [`grid_ref_to_latlon`] and [`latlon_to_grid_ref`] wrap the two
//! common compositions.

pub mod codec;
pub mod models;
pub mod projection;
pub mod transform;

use osgrid_core::{Datum, GeodeticPoint, Result};

/// Parses a grid reference and inverse-projects it to an OSGB36
/// latitude/longitude.
pub fn grid_ref_to_latlon(text: &str) -> Result<GeodeticPoint> {
    let grid = codec::parse(text)?;
    projection::NATIONAL_GRID.inverse(&grid)
}

/// Projects a point onto the National Grid and formats it at the requested
/// precision, converting to OSGB36 first when the point is on another datum.
pub fn latlon_to_grid_ref(point: &GeodeticPoint, digits: u8) -> Result<String> {
    let osgb = if point.datum == Datum::Osgb36 {
        *point
    } else {
        transform::convert(point, Datum::Osgb36)?
    };
    let grid = projection::NATIONAL_GRID.forward(&osgb)?;
    codec::format(&grid, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_ref_to_latlon_pipeline() {
        let point = grid_ref_to_latlon("TG 51409 13177").unwrap();
        assert_eq!(point.datum, Datum::Osgb36);
        assert!((point.latitude - 52.6576).abs() < 1e-3);
        assert!((point.longitude - 1.7179).abs() < 1e-3);
    }

    #[test]
    fn test_latlon_to_grid_ref_pipeline() {
        // the inverse projection lands on the SW corner of the metre square,
        // so projecting back may floor one metre low in either axis
        let point = grid_ref_to_latlon("TG 51409 13177").unwrap();
        let formatted = latlon_to_grid_ref(&point, 10).unwrap();

        let back = codec::parse(&formatted).unwrap();
        let original = codec::parse("TG 51409 13177").unwrap();
        assert!((back.easting - original.easting).abs() <= 1.0);
        assert!((back.northing - original.northing).abs() <= 1.0);
    }

    #[test]
    fn test_round_trip_through_wgs84() {
        let osgb = grid_ref_to_latlon("NU 12765 42058").unwrap();
        let wgs = transform::convert(&osgb, Datum::Wgs84).unwrap();
        let formatted = latlon_to_grid_ref(&wgs, 10).unwrap();

        // the Helmert round trip is metre-accurate, so the reference may
        // move by a metre in either axis
        let back = codec::parse(&formatted).unwrap();
        let original = codec::parse("NU 12765 42058").unwrap();
        assert!((back.easting - original.easting).abs() <= 1.0);
        assert!((back.northing - original.northing).abs() <= 1.0);
    }
}
