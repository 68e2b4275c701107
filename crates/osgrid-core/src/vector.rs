//! 3-d vector arithmetic.
//!
//! In this crate a [`Vector3d`] usually holds earth-centred Cartesian
//! coordinates in metres, produced transiently while projecting or
//! transforming points between datums.

use crate::error::{OsgridError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 3-d vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub const ZERO: Vector3d = Vector3d { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot (scalar) product with another vector.
    pub fn dot(self, other: Vector3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross (vector) product with another vector.
    pub fn cross(self, other: Vector3d) -> Vector3d {
        Vector3d::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Magnitude (Euclidean norm).
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides by a scalar, reporting division by zero instead of producing
    /// non-finite components.
    pub fn divided_by(self, divisor: f64) -> Result<Vector3d> {
        if divisor == 0.0 {
            return Err(OsgridError::DivisionByZero);
        }
        Ok(Vector3d::new(self.x / divisor, self.y / divisor, self.z / divisor))
    }

    /// Unit-normalized copy of this vector; a no-op on the zero vector.
    pub fn unit(self) -> Vector3d {
        let norm = self.length();
        if norm == 1.0 || norm == 0.0 {
            return self;
        }
        Vector3d::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Angle to another vector, in radians.
    ///
    /// Uses `atan2(|cross|, dot)` rather than a plain arccosine for numerical
    /// stability near 0 and pi.
    pub fn angle_to(self, other: Vector3d) -> f64 {
        let sin_theta = self.cross(other).length();
        let cos_theta = self.dot(other);
        sin_theta.atan2(cos_theta)
    }

    /// Rotates the unit vector of this point around `axis` by `theta` radians,
    /// using the quaternion-derived rotation matrix.
    pub fn rotate_around(self, axis: Vector3d, theta: f64) -> Vector3d {
        let p = self.unit();
        let a = axis.unit();
        let s = theta.sin();
        let c = theta.cos();
        let q = [
            [
                a.x * a.x * (1.0 - c) + c,
                a.x * a.y * (1.0 - c) - a.z * s,
                a.x * a.z * (1.0 - c) + a.y * s,
            ],
            [
                a.y * a.x * (1.0 - c) + a.z * s,
                a.y * a.y * (1.0 - c) + c,
                a.y * a.z * (1.0 - c) - a.x * s,
            ],
            [
                a.z * a.x * (1.0 - c) - a.y * s,
                a.z * a.y * (1.0 - c) + a.x * s,
                a.z * a.z * (1.0 - c) + c,
            ],
        ];
        Vector3d::new(
            q[0][0] * p.x + q[0][1] * p.y + q[0][2] * p.z,
            q[1][0] * p.x + q[1][1] * p.y + q[1][2] * p.z,
            q[2][0] * p.x + q[2][1] * p.y + q[2][2] * p.z,
        )
    }
}

impl Add for Vector3d {
    type Output = Vector3d;

    fn add(self, other: Vector3d) -> Vector3d {
        Vector3d::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;

    fn sub(self, other: Vector3d) -> Vector3d {
        Vector3d::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, factor: f64) -> Vector3d {
        Vector3d::new(self.x * factor, self.y * factor, self.z * factor)
    }
}
