//! osgrid-core - Domain models and error taxonomy
//!
//! This crate contains the value types shared by the conversion engine:
//! 3-d vectors, ellipsoid and datum registries, geodetic points, and grid
//! references. Every type here is an immutable value; operations return new
//! values and never log or perform I/O.

pub mod datum;
pub mod error;
pub mod models;
pub mod units;
pub mod vector;

pub use datum::{Datum, Ellipsoid, HelmertTransform};
pub use error::{OsgridError, Result};
pub use models::{GeodeticPoint, GridRef};
pub use vector::Vector3d;
