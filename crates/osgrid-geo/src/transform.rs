//! Datum conversion via 7-parameter Helmert transforms.
//!
//! Points convert between datums over earth-centred Cartesian coordinates:
//! geodetic to Cartesian on the source ellipsoid, a Helmert shift, then
//! Cartesian back to geodetic on the target ellipsoid. WGS84 is always the
//! hub: converting between two non-WGS84 datums goes through it.

use osgrid_core::{Datum, Ellipsoid, GeodeticPoint, OsgridError, Result, Vector3d};

/// Cap on the Cartesian-to-geodetic latitude iteration. The solve needs a
/// handful of passes for any point near the ellipsoid; the cap bounds
/// degenerate input.
const MAX_ITERATIONS: u32 = 50;

/// How a conversion routes through the WGS84 hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionRoute {
    /// Source is WGS84: apply the target datum's transform forwards.
    FromWgs84,
    /// Target is WGS84: apply the source datum's transform sign-negated.
    ToWgs84,
    /// Neither end is WGS84: convert to WGS84 first, then forwards.
    ViaWgs84,
}

/// Resolves the route for a source/target datum pair.
pub fn route(from: Datum, to: Datum) -> ConversionRoute {
    match (from, to) {
        (Datum::Wgs84, _) => ConversionRoute::FromWgs84,
        (_, Datum::Wgs84) => ConversionRoute::ToWgs84,
        _ => ConversionRoute::ViaWgs84,
    }
}

/// Converts a geodetic point to earth-centred Cartesian coordinates on its
/// own datum's ellipsoid.
pub fn to_cartesian(point: &GeodeticPoint) -> Vector3d {
    let Ellipsoid { a, b, .. } = point.datum.ellipsoid();
    let phi = point.latitude.to_radians();
    let lambda = point.longitude.to_radians();
    let h = point.height;

    let sin_phi = phi.sin();
    let cos_phi = phi.cos();
    let sin_lambda = lambda.sin();
    let cos_lambda = lambda.cos();

    let e2 = (a * a - b * b) / (a * a);
    let nu = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();

    Vector3d::new(
        (nu + h) * cos_phi * cos_lambda,
        (nu + h) * cos_phi * sin_lambda,
        ((1.0 - e2) * nu + h) * sin_phi,
    )
}

/// Converts earth-centred Cartesian coordinates to a geodetic point on the
/// given datum's ellipsoid.
///
/// Latitude is solved iteratively to within `1/a` radians, roughly a metre:
/// a Helmert transform cannot generally do better than that anyway.
pub fn from_cartesian(v: Vector3d, datum: Datum) -> Result<GeodeticPoint> {
    let Ellipsoid { a, b, .. } = datum.ellipsoid();
    let e2 = (a * a - b * b) / (a * a);

    let p = (v.x * v.x + v.y * v.y).sqrt();
    let mut phi = v.z.atan2(p * (1.0 - e2));
    let mut nu = a;
    let precision = 1.0 / a;

    let mut converged = false;
    for _ in 0..MAX_ITERATIONS {
        let sin_phi = phi.sin();
        nu = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let refined = (v.z + e2 * nu * sin_phi).atan2(p);
        let delta = (refined - phi).abs();
        phi = refined;
        if delta <= precision {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(OsgridError::Convergence {
            operation: "cartesian-to-geodetic latitude solve".to_string(),
            iterations: MAX_ITERATIONS,
        });
    }

    let lambda = v.y.atan2(v.x);
    let height = p / phi.cos() - nu;

    Ok(GeodeticPoint::with_height(phi.to_degrees(), lambda.to_degrees(), height, datum))
}

/// Converts a point to another datum.
///
/// Conversions *to* WGS84 use the sign-negated transform rather than a true
/// matrix inverse (see [`osgrid_core::HelmertTransform::approximate_inverse`]);
/// round trips are therefore metre-accurate, not exact.
pub fn convert(point: &GeodeticPoint, to: Datum) -> Result<GeodeticPoint> {
    let (source, transform) = match route(point.datum, to) {
        ConversionRoute::FromWgs84 => (*point, to.transform()),
        ConversionRoute::ToWgs84 => (*point, point.datum.transform().approximate_inverse()),
        ConversionRoute::ViaWgs84 => (convert(point, Datum::Wgs84)?, to.transform()),
    };

    let shifted = transform.apply(to_cartesian(&source));
    from_cartesian(shifted, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees_delta_metres(datum: Datum) -> f64 {
        // one metre in degrees of latitude, a conservative bound for both axes
        1.0 / datum.ellipsoid().a * 180.0 / std::f64::consts::PI
    }

    #[test]
    fn test_route_selection() {
        assert_eq!(route(Datum::Wgs84, Datum::Osgb36), ConversionRoute::FromWgs84);
        assert_eq!(route(Datum::Osgb36, Datum::Wgs84), ConversionRoute::ToWgs84);
        assert_eq!(route(Datum::Osgb36, Datum::Irl1975), ConversionRoute::ViaWgs84);
        assert_eq!(route(Datum::Wgs84, Datum::Wgs84), ConversionRoute::FromWgs84);
    }

    #[test]
    fn test_cartesian_round_trip_on_one_ellipsoid() {
        let point = GeodeticPoint::with_height(52.65757, 1.71792, 24.7, Datum::Osgb36);
        let back = from_cartesian(to_cartesian(&point), Datum::Osgb36).unwrap();

        assert!((back.latitude - point.latitude).abs() < degrees_delta_metres(Datum::Osgb36));
        assert!((back.longitude - point.longitude).abs() < degrees_delta_metres(Datum::Osgb36));
        assert!((back.height - point.height).abs() < 1.0);
    }

    #[test]
    fn test_cartesian_of_equatorial_point() {
        let point = GeodeticPoint::new(0.0, 0.0, Datum::Wgs84);
        let v = to_cartesian(&point);

        assert!((v.x - Datum::Wgs84.ellipsoid().a).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn test_osgb36_to_wgs84_shifts_by_expected_amount() {
        let osgb = GeodeticPoint::new(52.65757, 1.71792, Datum::Osgb36);
        let wgs = convert(&osgb, Datum::Wgs84).unwrap();

        assert_eq!(wgs.datum, Datum::Wgs84);
        // OSGB36 and WGS84 graticules differ by roughly 100 m in Great
        // Britain, a few seconds of arc
        let dlat = (wgs.latitude - osgb.latitude).abs();
        let dlon = (wgs.longitude - osgb.longitude).abs();
        assert!(dlat > 1e-5 && dlat < 3e-3);
        assert!(dlon > 1e-5 && dlon < 3e-3);
    }

    #[test]
    fn test_datum_round_trip_is_metre_accurate() {
        for datum in [Datum::Osgb36, Datum::Ed50, Datum::Irl1975, Datum::TokyoJapan] {
            let point = GeodeticPoint::with_height(53.0, -1.5, 10.0, datum);
            let there = convert(&point, Datum::Wgs84).unwrap();
            let back = convert(&there, datum).unwrap();

            assert!(
                (back.latitude - point.latitude).abs() < degrees_delta_metres(datum),
                "latitude drift for {datum}"
            );
            assert!(
                (back.longitude - point.longitude).abs() < degrees_delta_metres(datum),
                "longitude drift for {datum}"
            );
        }
    }

    #[test]
    fn test_non_wgs84_pair_routes_through_hub() {
        let osgb = GeodeticPoint::new(54.5, -6.0, Datum::Osgb36);
        let direct = convert(&osgb, Datum::Irl1975).unwrap();

        let via = convert(&convert(&osgb, Datum::Wgs84).unwrap(), Datum::Irl1975).unwrap();
        assert!((direct.latitude - via.latitude).abs() < 1e-9);
        assert!((direct.longitude - via.longitude).abs() < 1e-9);
        assert_eq!(direct.datum, Datum::Irl1975);
    }

    #[test]
    fn test_from_cartesian_reports_convergence_failure() {
        let err = from_cartesian(Vector3d::new(f64::NAN, 0.0, 0.0), Datum::Wgs84).unwrap_err();
        assert!(matches!(err, OsgridError::Convergence { .. }));
    }
}
