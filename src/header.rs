//! RINEX observation header: station description fields
use crate::{
    error::Error,
    ground_position::GroundPosition,
    hardware::{Antenna, Rcvr},
};

use log::trace;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const HEADER_END_MARKER: &str = "END OF HEADER";

/// Station description fields extracted from an observation file
/// header. Fixed shape: populated exactly once while parsing, labels
/// not listed here are discarded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObsHeader {
    /// Geodetic marker name ("MARKER NAME")
    pub marker_name: String,
    /// Station approximate coordinates ("APPROX POSITION XYZ")
    pub ground_position: GroundPosition,
    /// Receiver information ("REC # / TYPE / VERS")
    pub rcvr: Rcvr,
    /// Receiver antenna information ("ANT # / TYPE" and
    /// "ANTENNA: DELTA H/E/N")
    pub rcvr_antenna: Antenna,
}

impl FromStr for ObsHeader {
    type Err = Error;
    /// Parses Self from the header section of an observation file.
    /// Header lines are 60 bytes of content followed by a descriptive
    /// label; shorter lines carry nothing we use and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marker_name: Option<String> = None;
        let mut ground_position: Option<GroundPosition> = None;
        let mut rcvr: Option<Rcvr> = None;
        let mut rcvr_antenna: Option<Antenna> = None;
        let mut antenna_delta: Option<(f64, f64, f64)> = None;

        for line in s.lines() {
            if line.len() < 60 {
                continue; // --> invalid header content
            }
            let (content, marker) = line.split_at(60);
            if marker.trim().eq(HEADER_END_MARKER) {
                break;
            }
            if marker.trim().eq("COMMENT") {
                continue;
            } else if marker.contains("MARKER NAME") {
                marker_name = Some(content.trim().to_string());
            } else if marker.contains("REC # / TYPE / VERS") {
                rcvr = Some(Rcvr::from_str(content)?);
            } else if marker.contains("APPROX POSITION XYZ") {
                // station base coordinates
                let items: Vec<&str> = content.split_ascii_whitespace().collect();
                if items.len() < 3 {
                    return Err(Error::MalformedNumericField(
                        "APPROX POSITION XYZ",
                        content.trim().to_string(),
                    ));
                }

                let x = items[0].trim();
                let x = f64::from_str(x).or(Err(Error::MalformedNumericField(
                    "APPROX POSITION X",
                    x.to_string(),
                )))?;

                let y = items[1].trim();
                let y = f64::from_str(y).or(Err(Error::MalformedNumericField(
                    "APPROX POSITION Y",
                    y.to_string(),
                )))?;

                let z = items[2].trim();
                let z = f64::from_str(z).or(Err(Error::MalformedNumericField(
                    "APPROX POSITION Z",
                    z.to_string(),
                )))?;

                ground_position = Some(GroundPosition::from_ecef_wgs84((x, y, z)));
            } else if marker.contains("ANTENNA: DELTA H/E/N") {
                // Antenna H/E/N eccentricity components:
                // only the height (vertical) component flows into the
                // station record, eastern/northern are kept on the
                // antenna description
                let items: Vec<&str> = content.split_ascii_whitespace().collect();
                if items.len() < 3 {
                    return Err(Error::MalformedNumericField(
                        "ANTENNA: DELTA H/E/N",
                        content.trim().to_string(),
                    ));
                }

                let h = items[0].trim();
                let h = f64::from_str(h).or(Err(Error::MalformedNumericField(
                    "ANTENNA DELTA H",
                    h.to_string(),
                )))?;

                let e = items[1].trim();
                let e = f64::from_str(e).or(Err(Error::MalformedNumericField(
                    "ANTENNA DELTA E",
                    e.to_string(),
                )))?;

                let n = items[2].trim();
                let n = f64::from_str(n).or(Err(Error::MalformedNumericField(
                    "ANTENNA DELTA N",
                    n.to_string(),
                )))?;

                antenna_delta = Some((h, e, n));
            } else if marker.contains("ANT # / TYPE") {
                let (sn, rem) = content.split_at(20);
                let (model, _) = rem.split_at(20);
                rcvr_antenna = Some(
                    Antenna::default()
                        .with_serial_number(sn.trim())
                        .with_model(model.trim()),
                );
            } else {
                trace!("discarding \"{}\"", marker.trim());
            }
        }

        let marker_name = marker_name.ok_or(Error::MissingHeaderField("MARKER NAME"))?;
        let ground_position =
            ground_position.ok_or(Error::MissingHeaderField("APPROX POSITION XYZ"))?;
        let rcvr = rcvr.ok_or(Error::MissingHeaderField("REC # / TYPE / VERS"))?;
        let rcvr_antenna = rcvr_antenna.ok_or(Error::MissingHeaderField("ANT # / TYPE"))?;
        let (h, e, n) = antenna_delta.ok_or(Error::MissingHeaderField("ANTENNA: DELTA H/E/N"))?;

        Ok(ObsHeader {
            marker_name,
            ground_position,
            rcvr,
            rcvr_antenna: rcvr_antenna
                .with_height(h)
                .with_eastern_component(e)
                .with_northern_component(n),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HEADER: &str = "     3.05           OBSERVATION DATA    M                   RINEX VERSION / TYPE
MOSC                                                        MARKER NAME
12345M001                                                   MARKER NUMBER
Surveyor            Geodetic Survey                         OBSERVER / AGENCY
1234567890          ASHTECH Z-XII3      9.9                 REC # / TYPE / VERS
CR620012345         ASH701945E_M    SNOW                    ANT # / TYPE
  2849878.5000  2206972.1000  5248200.3000                  APPROX POSITION XYZ
        1.2340        0.0000        0.0000                  ANTENNA: DELTA H/E/N
G    4 C1C L1C C2W L2W                                      SYS / # / OBS TYPES
                                                            END OF HEADER
";

    #[test]
    fn header_parsing() {
        let header = ObsHeader::from_str(HEADER);
        assert!(header.is_ok(), "{:?}", header.err());
        let header = header.unwrap();
        assert_eq!(header.marker_name, "MOSC");
        assert_eq!(
            header.ground_position,
            GroundPosition::from_ecef_wgs84((2849878.5, 2206972.1, 5248200.3))
        );
        assert_eq!(header.rcvr.sn, "1234567890");
        assert_eq!(header.rcvr.model, "ASHTECH Z-XII3");
        assert_eq!(header.rcvr.firmware, "9.9");
        assert_eq!(header.rcvr_antenna.sn, "CR620012345");
        assert_eq!(header.rcvr_antenna.model, "ASH701945E_M    SNOW");
        assert_eq!(header.rcvr_antenna.height, Some(1.234));
        assert_eq!(header.rcvr_antenna.eastern, Some(0.0));
        assert_eq!(header.rcvr_antenna.northern, Some(0.0));
    }

    #[test]
    fn missing_marker_name() {
        let stripped: String = HEADER
            .lines()
            .filter(|line| !line.contains("MARKER NAME"))
            .map(|line| format!("{}\n", line))
            .collect();
        let header = ObsHeader::from_str(&stripped);
        assert!(matches!(
            header,
            Err(Error::MissingHeaderField("MARKER NAME"))
        ));
    }

    #[test]
    fn missing_antenna_eccentricities() {
        let stripped: String = HEADER
            .lines()
            .filter(|line| !line.contains("ANTENNA: DELTA H/E/N"))
            .map(|line| format!("{}\n", line))
            .collect();
        let header = ObsHeader::from_str(&stripped);
        assert!(matches!(
            header,
            Err(Error::MissingHeaderField("ANTENNA: DELTA H/E/N"))
        ));
    }

    #[test]
    fn malformed_approx_position() {
        let corrupted = HEADER.replace("  2206972.1000", "  22069xx.1000");
        let header = ObsHeader::from_str(&corrupted);
        assert!(matches!(
            header,
            Err(Error::MalformedNumericField("APPROX POSITION Y", _))
        ));
    }
}
