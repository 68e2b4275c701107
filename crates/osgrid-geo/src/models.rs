//! Re-exports of the core value types plus `geo`/GeoJSON interop.
//!
//! Downstream mapping surfaces usually want a `geo::Point` or a GeoJSON
//! `Feature` rather than our own value types; the conversions live here so
//! the core stays dependency-free.

use geo::Point;
use geojson::{Feature, Geometry, JsonObject, Value};

pub use osgrid_core::{Datum, GeodeticPoint, GridRef, Vector3d};

/// Converts a geodetic point to a `geo::Point` (x = longitude, y = latitude).
pub fn to_geo_point(point: &GeodeticPoint) -> Point<f64> {
    Point::new(point.longitude, point.latitude)
}

/// Converts a geodetic point to a GeoJSON `Feature` with the datum and
/// height carried as properties.
pub fn to_feature(point: &GeodeticPoint) -> Feature {
    let geometry = Geometry::new(Value::Point(vec![point.longitude, point.latitude]));

    let mut properties = JsonObject::new();
    properties.insert("datum".to_string(), serde_json::Value::from(point.datum.name()));
    properties.insert("height".to_string(), serde_json::json!(point.height));

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Extension trait for [`GeodeticPoint`] with geo-crate conversions.
pub trait GeodeticPointExt {
    /// Convert to a `geo::Point`.
    fn to_geo(&self) -> Point<f64>;

    /// Convert to a GeoJSON `Feature`.
    fn to_feature(&self) -> Feature;
}

impl GeodeticPointExt for GeodeticPoint {
    fn to_geo(&self) -> Point<f64> {
        to_geo_point(self)
    }

    fn to_feature(&self) -> Feature {
        to_feature(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_geo_point_orders_axes_lon_lat() {
        let p = GeodeticPoint::new(52.65757, 1.71792, Datum::Osgb36);
        let geo_point = p.to_geo();

        assert_eq!(geo_point.x(), 1.71792);
        assert_eq!(geo_point.y(), 52.65757);
    }

    #[test]
    fn test_to_feature_carries_datum_and_height() {
        let p = GeodeticPoint::with_height(52.0, 1.0, 15.5, Datum::Wgs84);
        let feature = p.to_feature();

        let properties = feature.properties.unwrap();
        assert_eq!(properties["datum"], "WGS84");
        assert_eq!(properties["height"], 15.5);

        match feature.geometry.unwrap().value {
            Value::Point(coords) => assert_eq!(coords, vec![1.0, 52.0]),
            other => panic!("expected a point geometry, got {other:?}"),
        }
    }
}
