//! Transverse Mercator projection for the Ordnance Survey National Grid.
//!
//! The forward direction expands easting and northing as Redfearn power
//! series in the longitude offset from the central meridian; the inverse
//! first solves the meridional arc iteratively for the base latitude, then
//! applies the matching inverse series. Both reproduce the published OSGB
//! coefficient formulas and truncation orders, which give sub-millimetre
//! accuracy inside the grid's valid region.

use osgrid_core::{Datum, Ellipsoid, GeodeticPoint, GridRef, OsgridError, Result};
use std::f64::consts::PI;

/// Hard cap on the meridional-arc iteration. Well-formed northings converge
/// in under ten passes; the cap turns pathological input into an error
/// instead of a spin.
const MAX_ITERATIONS: u32 = 20;

/// Convergence tolerance for the inverse solve, in metres (0.01 mm).
const TOLERANCE_M: f64 = 1e-5;

/// A Transverse Mercator projection parametrized for one datum's ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseMercator {
    /// Datum whose ellipsoid the projection is defined on.
    pub datum: Datum,
    /// Scale factor on the central meridian.
    pub scale_factor: f64,
    /// True origin latitude, radians.
    pub origin_lat: f64,
    /// True origin longitude, radians.
    pub origin_lon: f64,
    /// Northing of the true origin, metres.
    pub false_northing: f64,
    /// Easting of the true origin, metres.
    pub false_easting: f64,
}

/// The National Grid: Airy 1830 ellipsoid, true origin 49 N 2 W, false
/// origin 400 km west and 100 km north of it.
pub const NATIONAL_GRID: TransverseMercator = TransverseMercator {
    datum: Datum::Osgb36,
    scale_factor: 0.9996012717,
    origin_lat: 49.0 * (PI / 180.0),
    origin_lon: -2.0 * (PI / 180.0),
    false_northing: -100_000.0,
    false_easting: 400_000.0,
};

impl TransverseMercator {
    /// Meridional arc from the true origin to latitude `phi`: the cumulative
    /// north-south distance along the central meridian, via a fourth-order
    /// series in the third flattening.
    fn meridional_arc(&self, phi: f64) -> f64 {
        let Ellipsoid { a, b, .. } = self.datum.ellipsoid();
        let f0 = self.scale_factor;
        let phi0 = self.origin_lat;

        let n = (a - b) / (a + b);
        let n2 = n * n;
        let n3 = n2 * n;

        let ma = (1.0 + n + 5.0 / 4.0 * n2 + 5.0 / 4.0 * n3) * (phi - phi0);
        let mb = (3.0 * n + 3.0 * n * n + 21.0 / 8.0 * n3) * (phi - phi0).sin() * (phi + phi0).cos();
        let mc =
            (15.0 / 8.0 * n2 + 15.0 / 8.0 * n3) * (2.0 * (phi - phi0)).sin() * (2.0 * (phi + phi0)).cos();
        let md = 35.0 / 24.0 * n3 * (3.0 * (phi - phi0)).sin() * (3.0 * (phi + phi0)).cos();

        b * f0 * (ma - mb + mc - md)
    }

    /// Projects an ellipsoidal latitude/longitude to grid easting/northing.
    ///
    /// The point must already be on this projection's datum; convert first
    /// when it is not.
    pub fn forward(&self, point: &GeodeticPoint) -> Result<GridRef> {
        if point.datum != self.datum {
            return Err(OsgridError::DatumMismatch { expected: self.datum, actual: point.datum });
        }

        let Ellipsoid { a, b, .. } = self.datum.ellipsoid();
        let f0 = self.scale_factor;
        let phi = point.latitude.to_radians();
        let lambda = point.longitude.to_radians();

        let e2 = 1.0 - (b * b) / (a * a);
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        let nu = a * f0 / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let rho = a * f0 * (1.0 - e2) / (1.0 - e2 * sin_phi * sin_phi).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let m = self.meridional_arc(phi);

        let cos3_phi = cos_phi * cos_phi * cos_phi;
        let cos5_phi = cos3_phi * cos_phi * cos_phi;
        let tan2_phi = phi.tan() * phi.tan();
        let tan4_phi = tan2_phi * tan2_phi;

        let i = m + self.false_northing;
        let ii = nu / 2.0 * sin_phi * cos_phi;
        let iii = nu / 24.0 * sin_phi * cos3_phi * (5.0 - tan2_phi + 9.0 * eta2);
        let iiia = nu / 720.0 * sin_phi * cos5_phi * (61.0 - 58.0 * tan2_phi + tan4_phi);
        let iv = nu * cos_phi;
        let v = nu / 6.0 * cos3_phi * (nu / rho - tan2_phi);
        let vi = nu / 120.0
            * cos5_phi
            * (5.0 - 18.0 * tan2_phi + tan4_phi + 14.0 * eta2 - 58.0 * tan2_phi * eta2);

        let dl = lambda - self.origin_lon;
        let dl2 = dl * dl;
        let dl3 = dl2 * dl;
        let dl4 = dl3 * dl;
        let dl5 = dl4 * dl;
        let dl6 = dl5 * dl;

        let northing = i + ii * dl2 + iii * dl4 + iiia * dl6;
        let easting = self.false_easting + iv * dl + v * dl3 + vi * dl5;

        Ok(GridRef::new(easting, northing))
    }

    /// Inverse-projects grid easting/northing to a latitude/longitude on
    /// this projection's datum.
    pub fn inverse(&self, grid: &GridRef) -> Result<GeodeticPoint> {
        let Ellipsoid { a, b, .. } = self.datum.ellipsoid();
        let f0 = self.scale_factor;
        let easting = grid.easting;
        let northing = grid.northing;

        let e2 = 1.0 - (b * b) / (a * a);

        // solve N - N0 = M(phi) for the base latitude by fixed-point
        // iteration; each pass recomputes the meridional arc
        let mut phi = self.origin_lat;
        let mut m = 0.0;
        let mut converged = false;
        for _ in 0..MAX_ITERATIONS {
            phi += (northing - self.false_northing - m) / (a * f0);
            m = self.meridional_arc(phi);
            if northing - self.false_northing - m < TOLERANCE_M {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(OsgridError::Convergence {
                operation: "meridional-arc latitude solve".to_string(),
                iterations: MAX_ITERATIONS,
            });
        }

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let nu = a * f0 / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let rho = a * f0 * (1.0 - e2) / (1.0 - e2 * sin_phi * sin_phi).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let tan_phi = phi.tan();
        let tan2_phi = tan_phi * tan_phi;
        let tan4_phi = tan2_phi * tan2_phi;
        let tan6_phi = tan4_phi * tan2_phi;
        let sec_phi = 1.0 / cos_phi;
        let nu3 = nu * nu * nu;
        let nu5 = nu3 * nu * nu;
        let nu7 = nu5 * nu * nu;

        let vii = tan_phi / (2.0 * rho * nu);
        let viii = tan_phi / (24.0 * rho * nu3)
            * (5.0 + 3.0 * tan2_phi + eta2 - 9.0 * tan2_phi * eta2);
        let ix = tan_phi / (720.0 * rho * nu5) * (61.0 + 90.0 * tan2_phi + 45.0 * tan4_phi);
        let x = sec_phi / nu;
        let xi = sec_phi / (6.0 * nu3) * (nu / rho + 2.0 * tan2_phi);
        let xii = sec_phi / (120.0 * nu5) * (5.0 + 28.0 * tan2_phi + 24.0 * tan4_phi);
        let xiia = sec_phi / (5040.0 * nu7)
            * (61.0 + 662.0 * tan2_phi + 1320.0 * tan4_phi + 720.0 * tan6_phi);

        let de = easting - self.false_easting;
        let de2 = de * de;
        let de3 = de2 * de;
        let de4 = de2 * de2;
        let de5 = de3 * de2;
        let de6 = de4 * de2;
        let de7 = de5 * de2;

        let lat = phi - vii * de2 + viii * de4 - ix * de6;
        let lon = self.origin_lon + x * de - xi * de3 + xii * de5 - xiia * de7;

        Ok(GeodeticPoint::new(lat.to_degrees(), lon.to_degrees(), self.datum))
    }
}
