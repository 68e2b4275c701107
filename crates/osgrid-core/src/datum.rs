//! Reference ellipsoids, datums, and Helmert transform parameters.
//!
//! The registries are process-wide constants; lookups are pure functions
//! keyed by [`Datum`]. Helmert parameters are published values taking WGS84
//! coordinates *into* the given datum.

use crate::error::OsgridError;
use crate::units::{arcsec_to_radians, ppm_to_factor};
use crate::vector::Vector3d;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference-ellipsoid parameters: semi-major axis `a`, semi-minor axis `b`
/// (metres), and flattening `f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipsoid {
    pub a: f64,
    pub b: f64,
    pub f: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid { a: 6_378_137.0, b: 6_356_752.3142, f: 1.0 / 298.257223563 };
    pub const GRS80: Ellipsoid = Ellipsoid { a: 6_378_137.0, b: 6_356_752.314140, f: 1.0 / 298.257222101 };
    pub const AIRY_1830: Ellipsoid = Ellipsoid { a: 6_377_563.396, b: 6_356_256.909, f: 1.0 / 299.3249646 };
    pub const AIRY_MODIFIED: Ellipsoid = Ellipsoid { a: 6_377_340.189, b: 6_356_034.448, f: 1.0 / 299.32496 };
    pub const INTL_1924: Ellipsoid = Ellipsoid { a: 6_378_388.0, b: 6_356_911.946, f: 1.0 / 297.0 };
    pub const BESSEL_1841: Ellipsoid = Ellipsoid { a: 6_377_397.155, b: 6_356_078.963, f: 1.0 / 299.152815351 };

    /// First eccentricity squared, `1 - b^2/a^2`.
    pub fn eccentricity_squared(&self) -> f64 {
        1.0 - (self.b * self.b) / (self.a * self.a)
    }
}

/// 7-parameter Helmert transform: translation in metres, rotation in
/// arc-seconds, scale in parts per million.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelmertTransform {
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub s: f64,
}

impl HelmertTransform {
    pub const IDENTITY: HelmertTransform =
        HelmertTransform { tx: 0.0, ty: 0.0, tz: 0.0, rx: 0.0, ry: 0.0, rz: 0.0, s: 0.0 };

    /// Applies the transform to an earth-centred Cartesian point:
    /// `p' = t + p(1+s) + p x r`, expanded per axis with the rotation
    /// parameters normalized from arc-seconds to radians.
    pub fn apply(&self, p: Vector3d) -> Vector3d {
        let rx = arcsec_to_radians(self.rx);
        let ry = arcsec_to_radians(self.ry);
        let rz = arcsec_to_radians(self.rz);
        let s1 = ppm_to_factor(self.s);

        Vector3d::new(
            self.tx + p.x * s1 - p.y * rz + p.z * ry,
            self.ty + p.x * rz + p.y * s1 - p.z * rx,
            self.tz - p.x * ry + p.y * rx + p.z * s1,
        )
    }

    /// Sign-negated inverse.
    ///
    /// This is the published OSGB procedure for reversing a Helmert transform:
    /// it negates each parameter rather than inverting the rotation matrix,
    /// which is accurate only for small rotation and scale terms. Kept as-is
    /// for compatibility with reference values; expect metre-level drift for
    /// datums with large parameters.
    pub fn approximate_inverse(&self) -> HelmertTransform {
        HelmertTransform {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            s: -self.s,
        }
    }
}

/// Identifier for a supported reference datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
    Wgs84,
    Osgb36,
    Ed50,
    Irl1975,
    TokyoJapan,
}

impl Datum {
    pub const ALL: [Datum; 5] =
        [Datum::Wgs84, Datum::Osgb36, Datum::Ed50, Datum::Irl1975, Datum::TokyoJapan];

    /// The ellipsoid this datum is defined on.
    pub fn ellipsoid(self) -> Ellipsoid {
        match self {
            Datum::Wgs84 => Ellipsoid::WGS84,
            Datum::Osgb36 => Ellipsoid::AIRY_1830,
            Datum::Ed50 => Ellipsoid::INTL_1924,
            Datum::Irl1975 => Ellipsoid::AIRY_MODIFIED,
            Datum::TokyoJapan => Ellipsoid::BESSEL_1841,
        }
    }

    /// Helmert parameters taking WGS84 Cartesian coordinates into this datum.
    pub fn transform(self) -> HelmertTransform {
        match self {
            Datum::Wgs84 => HelmertTransform::IDENTITY,
            Datum::Osgb36 => HelmertTransform {
                tx: -446.448,
                ty: 125.157,
                tz: -542.060,
                rx: -0.1502,
                ry: -0.2470,
                rz: -0.8421,
                s: 20.4894,
            },
            Datum::Ed50 => HelmertTransform {
                tx: 89.5,
                ty: 93.8,
                tz: 123.1,
                rx: 0.0,
                ry: 0.0,
                rz: 0.156,
                s: -1.2,
            },
            Datum::Irl1975 => HelmertTransform {
                tx: -482.530,
                ty: 130.596,
                tz: -564.557,
                rx: -1.042,
                ry: -0.214,
                rz: -0.631,
                s: -8.150,
            },
            Datum::TokyoJapan => HelmertTransform {
                tx: 148.0,
                ty: -507.0,
                tz: -685.0,
                rx: 0.0,
                ry: 0.0,
                rz: 0.0,
                s: 0.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS84",
            Datum::Osgb36 => "OSGB36",
            Datum::Ed50 => "ED50",
            Datum::Irl1975 => "Irl1975",
            Datum::TokyoJapan => "TokyoJapan",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = OsgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" => Ok(Datum::Wgs84),
            "osgb36" => Ok(Datum::Osgb36),
            "ed50" => Ok(Datum::Ed50),
            "irl1975" => Ok(Datum::Irl1975),
            "tokyojapan" => Ok(Datum::TokyoJapan),
            other => Err(OsgridError::Parse {
                reason: format!(
                    "unknown datum '{other}' (expected one of WGS84, OSGB36, ED50, Irl1975, TokyoJapan)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid_axes_are_ordered() {
        for datum in Datum::ALL {
            let e = datum.ellipsoid();
            assert!(e.a > e.b && e.b > 0.0, "bad axes for {datum}");
        }
    }

    #[test]
    fn test_eccentricity_squared() {
        let e = Ellipsoid::AIRY_1830;
        let e2 = e.eccentricity_squared();
        assert!((e2 - 0.0066705).abs() < 1e-6);
    }

    #[test]
    fn test_wgs84_transform_is_identity() {
        assert_eq!(Datum::Wgs84.transform(), HelmertTransform::IDENTITY);
        let p = Vector3d::new(3_980_581.0, -111.0, 4_966_824.0);
        assert_eq!(HelmertTransform::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_approximate_inverse_negates_every_parameter() {
        let t = Datum::Osgb36.transform();
        let inv = t.approximate_inverse();
        assert_eq!(inv.tx, -t.tx);
        assert_eq!(inv.ry, -t.ry);
        assert_eq!(inv.s, -t.s);
        assert_eq!(inv.approximate_inverse(), t);
    }

    #[test]
    fn test_translation_only_transform() {
        let t = HelmertTransform { tx: 100.0, ty: -50.0, tz: 25.0, rx: 0.0, ry: 0.0, rz: 0.0, s: 0.0 };
        let p = t.apply(Vector3d::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vector3d::new(101.0, -48.0, 28.0));
    }

    #[test]
    fn test_datum_from_str() {
        assert_eq!("wgs84".parse::<Datum>().unwrap(), Datum::Wgs84);
        assert_eq!("OSGB36".parse::<Datum>().unwrap(), Datum::Osgb36);
        assert_eq!("TokyoJapan".parse::<Datum>().unwrap(), Datum::TokyoJapan);
        assert!("osgb37".parse::<Datum>().is_err());
    }
}
