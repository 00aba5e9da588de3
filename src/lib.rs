//! This package derives a station description record from a RINEX
//! observation file: site identity, approximate position (ECEF and
//! geodetic), receiver and antenna identification, antenna height and
//! the observation session time bounds. From the derived position it
//! also resolves the 1:100 000 scale topographic map sheet containing
//! the station.
//!
//! The record is the hand off point towards observation journal
//! generators and static map renderers, which are external to this
//! crate: no document or image is produced here.
//!
//! Example:
//! ```no_run
//! use rinex_journal::prelude::*;
//!
//! let record = StationRecord::from_file("MOSC00RUS_R_20242400000_01H_30S_MO.rnx")
//!     .unwrap();
//! let (longitude, latitude, height) = record.geodetic();
//! println!("B = {:.6} L = {:.6} H = {:.6}", latitude, longitude, height);
//! println!("{} occupies sheet {}", record.marker_name, record.map_sheet());
//! ```
mod constants;
mod epoch;
mod error;
mod reader;

pub mod ground_position;
pub mod hardware;
pub mod header;
pub mod mapsheet;
pub mod session;

use std::io::Read;
use std::str::FromStr;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    ground_position::GroundPosition,
    hardware::{Antenna, AntennaMount, Rcvr},
    header::{ObsHeader, HEADER_END_MARKER},
    mapsheet::MapSheet,
    reader::BufferedReader,
    session::Session,
};

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        error::Error,
        ground_position::GroundPosition,
        hardware::{Antenna, AntennaMount, Rcvr},
        header::ObsHeader,
        mapsheet::MapSheet,
        session::Session,
        SiteMetadata, StationRecord,
    };
    // pub re-export
    pub use hifitime::{Duration, Epoch};
}

/// Journal information supplied by the operator, not read from the
/// observation file. Merged into a [StationRecord] by the caller and
/// passed through untouched.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteMetadata {
    /// Operating organization
    pub organization: Option<String>,
    /// Surveyed object / project designation
    pub object: Option<String>,
    /// Operator full name
    pub operator: Option<String>,
    /// Monument type and description
    pub monument: Option<String>,
    /// Benchmark (center mark) type and description
    pub benchmark: Option<String>,
    /// Geometric dilution of precision over the session
    pub gdop: Option<String>,
    /// Position dilution of precision over the session
    pub pdop: Option<String>,
    /// Antenna mounting category
    pub antenna_mount: Option<AntennaMount>,
}

impl SiteMetadata {
    /// Sets the operating organization
    pub fn with_organization(&self, organization: &str) -> Self {
        let mut s = self.clone();
        s.organization = Some(organization.to_string());
        s
    }
    /// Sets the surveyed object designation
    pub fn with_object(&self, object: &str) -> Self {
        let mut s = self.clone();
        s.object = Some(object.to_string());
        s
    }
    /// Sets the operator full name
    pub fn with_operator(&self, operator: &str) -> Self {
        let mut s = self.clone();
        s.operator = Some(operator.to_string());
        s
    }
    /// Sets the monument type and description
    pub fn with_monument(&self, monument: &str) -> Self {
        let mut s = self.clone();
        s.monument = Some(monument.to_string());
        s
    }
    /// Sets the benchmark type and description
    pub fn with_benchmark(&self, benchmark: &str) -> Self {
        let mut s = self.clone();
        s.benchmark = Some(benchmark.to_string());
        s
    }
    /// Sets the session GDOP
    pub fn with_gdop(&self, gdop: &str) -> Self {
        let mut s = self.clone();
        s.gdop = Some(gdop.to_string());
        s
    }
    /// Sets the session PDOP
    pub fn with_pdop(&self, pdop: &str) -> Self {
        let mut s = self.clone();
        s.pdop = Some(pdop.to_string());
        s
    }
    /// Sets the antenna mounting category
    pub fn with_antenna_mount(&self, mount: AntennaMount) -> Self {
        let mut s = self.clone();
        s.antenna_mount = Some(mount);
        s
    }
}

/// Station description record derived from one observation file.
/// Built once per file, immutable afterwards: the geodetic position
/// and map sheet are derived from the approximate position during
/// construction and only exposed through accessors. The only field a
/// caller attaches afterwards is [SiteMetadata], which the derivation
/// never touches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationRecord {
    /// Geodetic marker name, trimmed
    pub marker_name: String,
    /// Station approximate coordinates, as read from the header,
    /// never mutated afterwards
    pub approx_position: GroundPosition,
    /// Receiver identification
    pub rcvr: Rcvr,
    /// Receiver antenna identification and eccentricities
    pub rcvr_antenna: Antenna,
    /// Antenna height: the vertical eccentricity component, in meters
    pub antenna_height: f64,
    /// Observation session time bounds
    pub session: Session,
    /// Caller supplied journal information
    pub metadata: Option<SiteMetadata>,
    geodetic: (f64, f64, f64),
    map_sheet: MapSheet,
}

impl StationRecord {
    /// Derives a station record from given observation file.
    /// Gzip compressed files (".gz") are supported on the "flate2"
    /// feature.
    pub fn from_file(path: &str) -> Result<StationRecord, Error> {
        let mut reader = BufferedReader::new(path)?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        content.parse()
    }
    /// Geodetic coordinates (longitude ddeg, latitude ddeg, height m)
    /// derived from [Self::approx_position], WGS84
    pub fn geodetic(&self) -> (f64, f64, f64) {
        self.geodetic
    }
    /// 1:100 000 map sheet containing the station,
    /// derived from [Self::approx_position]
    pub fn map_sheet(&self) -> &MapSheet {
        &self.map_sheet
    }
    /// Copies and returns Self with given journal information attached
    pub fn with_metadata(&self, metadata: SiteMetadata) -> Self {
        let mut s = self.clone();
        s.metadata = Some(metadata);
        s
    }
}

impl FromStr for StationRecord {
    type Err = Error;
    /// Derives a station record from observation file content:
    /// header section first, then the file body scanned for epoch
    /// markers. Either a complete record is produced, or this fails
    /// with a descriptive [Error] and no partial record exists.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let offset = content
            .find(HEADER_END_MARKER)
            .ok_or(Error::MissingHeaderDelimiter)?;
        let (header, body) = content.split_at(offset);

        let header = ObsHeader::from_str(header)?;
        let session = Session::from_lines(body.lines().skip(1))?;

        let geodetic = header.ground_position.to_geodetic()?;
        let (longitude, latitude, _) = geodetic;
        let map_sheet = MapSheet::from_geodetic(longitude, latitude)?;

        let antenna_height = header
            .rcvr_antenna
            .height
            .ok_or(Error::MissingHeaderField("ANTENNA: DELTA H/E/N"))?;

        debug!(
            "{}: ({:.6}E, {:.6}N), sheet {}",
            header.marker_name, longitude, latitude, map_sheet
        );

        Ok(StationRecord {
            marker_name: header.marker_name,
            approx_position: header.ground_position,
            rcvr: header.rcvr,
            rcvr_antenna: header.rcvr_antenna,
            antenna_height,
            session,
            metadata: None,
            geodetic,
            map_sheet,
        })
    }
}

/*
 * Journal hand off block
 */
impl std::fmt::Display for StationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (longitude, latitude, height) = self.geodetic;
        writeln!(f, "Marker name     : {}", self.marker_name)?;
        writeln!(f, "B = {:.6}", latitude)?;
        writeln!(f, "L = {:.6}", longitude)?;
        writeln!(f, "H = {:.6}", height)?;
        writeln!(f, "1:100 000 sheet : {}", self.map_sheet)?;
        writeln!(f, "Receiver        : {} {}", self.rcvr.model, self.rcvr.sn)?;
        writeln!(
            f,
            "Antenna         : {} {}",
            self.rcvr_antenna.model, self.rcvr_antenna.sn
        )?;
        writeln!(f, "Antenna height  : {:.4} m", self.antenna_height)?;
        write!(f, "Session         : {}", self.session)
    }
}
