//! Geodetic value types.

use crate::datum::Datum;
use serde::{Deserialize, Serialize};

/// A numeric Ordnance Survey grid reference: metres east and north of the
/// false origin, floored to whole metres on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRef {
    pub easting: f64,
    pub northing: f64,
}

impl GridRef {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting: easting.floor(), northing: northing.floor() }
    }
}

/// A latitude/longitude point (decimal degrees) with height above the
/// ellipsoid (metres), tagged with the datum it is defined on.
///
/// The type does not clamp latitude to -90..90 or wrap longitude; callers
/// validate ranges where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
    pub datum: Datum,
}

impl GeodeticPoint {
    /// A point at zero height.
    pub fn new(latitude: f64, longitude: f64, datum: Datum) -> Self {
        Self::with_height(latitude, longitude, 0.0, datum)
    }

    pub fn with_height(latitude: f64, longitude: f64, height: f64, datum: Datum) -> Self {
        Self { latitude, longitude, height, datum }
    }
}
