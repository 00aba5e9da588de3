//! Station ground position and ellipsoidal transforms
use crate::{
    constants::{GeodeticSolver, Wgs84},
    error::Error,
};

use dms_coordinates::DMS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Station position, expressed in the ECEF WGS84 frame (meters)
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundPosition(f64, f64, f64);

impl From<(f64, f64, f64)> for GroundPosition {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self(xyz.0, xyz.1, xyz.2)
    }
}

impl From<GroundPosition> for (f64, f64, f64) {
    fn from(val: GroundPosition) -> Self {
        (val.0, val.1, val.2)
    }
}

impl GroundPosition {
    /// Builds Self from ECEF WGS84 coordinates
    pub fn from_ecef_wgs84(pos: (f64, f64, f64)) -> Self {
        Self(pos.0, pos.1, pos.2)
    }
    /// Builds Self from (longitude ddeg, latitude ddeg, altitude m)
    /// geodetic coordinates above the WGS84 ellipsoid
    pub fn from_geodetic(pos: (f64, f64, f64)) -> Self {
        let (lon, lat, alt) = pos;
        let (x, y, z) = geodetic2ecef(lon.to_radians(), lat.to_radians(), alt);
        Self(x, y, z)
    }
    /// Converts Self to ECEF WGS84
    pub fn to_ecef_wgs84(&self) -> (f64, f64, f64) {
        (self.0, self.1, self.2)
    }
    /// Converts Self to (longitude ddeg, latitude ddeg, altitude m)
    /// geodetic coordinates above the WGS84 ellipsoid
    pub fn to_geodetic(&self) -> Result<(f64, f64, f64), Error> {
        let (lat, lon, alt) = ecef2geodetic(self.0, self.1, self.2)?;
        Ok((lon.to_degrees(), lat.to_degrees(), alt))
    }
    /// Returns the geodetic latitude in sexagesimal notation
    pub fn latitude_dms(&self) -> Result<DMS, Error> {
        let (_, lat, _) = self.to_geodetic()?;
        Ok(DMS::from_ddeg_latitude(lat))
    }
    /// Returns the geodetic longitude in sexagesimal notation
    pub fn longitude_dms(&self) -> Result<DMS, Error> {
        let (lon, _, _) = self.to_geodetic()?;
        Ok(DMS::from_ddeg_longitude(lon))
    }
}

impl std::fmt::Display for GroundPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "WGS84 ({}m {}m {}m)", self.0, self.1, self.2)
    }
}

/// Ellipsoidal inverse: ECEF (m) to (latitude rad, longitude rad,
/// altitude m). Fixed point iteration on the reduced z component,
/// bounded by [GeodeticSolver::MAX_ITER]: an input that does not
/// converge is an error, never an unconverged result.
/// At the poles (x = y = 0) longitude is 0 by convention.
fn ecef2geodetic(x: f64, y: f64, z: f64) -> Result<(f64, f64, f64), Error> {
    let e2 = Wgs84::FLATTENING * (2.0 - Wgs84::FLATTENING);
    let r2 = x * x + y * y;

    let mut zc = z;
    let mut zk = 0.0_f64;
    let mut v = Wgs84::SEMI_MAJOR_AXIS_M;
    let mut niter = 0_u8;

    while (zc - zk).abs() >= GeodeticSolver::CONVERGENCE_M {
        if niter == GeodeticSolver::MAX_ITER {
            return Err(Error::CoordinateConversion);
        }
        zk = zc;
        let sinp = zc / (r2 + zc * zc).sqrt();
        v = Wgs84::SEMI_MAJOR_AXIS_M / (1.0 - e2 * sinp * sinp).sqrt();
        zc = z + v * e2 * sinp;
        niter += 1;
    }

    let lat = if r2 > 1.0E-12 {
        (zc / r2.sqrt()).atan()
    } else if z > 0.0 {
        std::f64::consts::FRAC_PI_2
    } else {
        -std::f64::consts::FRAC_PI_2
    };
    let lon = if r2 > 1.0E-12 { y.atan2(x) } else { 0.0 };
    let alt = (r2 + zc * zc).sqrt() - v;

    Ok((lat, lon, alt))
}

/// Ellipsoidal forward: (longitude rad, latitude rad, altitude m)
/// to ECEF (m)
fn geodetic2ecef(lon: f64, lat: f64, alt: f64) -> (f64, f64, f64) {
    let e2 = Wgs84::FLATTENING * (2.0 - Wgs84::FLATTENING);
    let (sinp, cosp) = (lat.sin(), lat.cos());
    let v = Wgs84::SEMI_MAJOR_AXIS_M / (1.0 - e2 * sinp * sinp).sqrt();
    (
        (v + alt) * cosp * lon.cos(),
        (v + alt) * cosp * lon.sin(),
        (v * (1.0 - e2) + alt) * sinp,
    )
}
