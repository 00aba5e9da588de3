//! Hardware: receiver, antenna informations
use crate::error::Error;
use strum_macros::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GNSS receiver description
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rcvr {
    /// Receiver (hardware) model
    pub model: String,
    /// Receiver (hardware) identification info
    pub sn: String, // serial #
    /// Receiver embedded software info
    pub firmware: String, // firmware #
}

impl std::str::FromStr for Rcvr {
    type Err = Error;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = format!("{:<60}", line);
        let (id, rem) = line.split_at(20);
        let (make, rem) = rem.split_at(20);
        let (version, _) = rem.split_at(20);
        Ok(Rcvr {
            sn: id.trim().to_string(),
            model: make.trim().to_string(),
            firmware: version.trim().to_string(),
        })
    }
}

/// Antenna description
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Antenna {
    /// Hardware model / make descriptor
    pub model: String,
    /// Serial number / identification number
    pub sn: String,
    /// Optionnal `h` eccentricity (height component),
    /// referenced to base/reference point, in meter
    pub height: Option<f64>,
    /// Optionnal `eastern` eccentricity (eastern component),
    /// referenced to base/reference point, in meter
    pub eastern: Option<f64>,
    /// Optionnal `northern` eccentricity (northern component),
    /// referenced to base/reference point, in meter
    pub northern: Option<f64>,
}

impl Antenna {
    /// Sets desired model
    pub fn with_model(&self, m: &str) -> Self {
        let mut s = self.clone();
        s.model = m.to_string();
        s
    }
    /// Sets desired Serial Number
    pub fn with_serial_number(&self, sn: &str) -> Self {
        let mut s = self.clone();
        s.sn = sn.to_string();
        s
    }
    /// Sets antenna `h` eccentricity component
    pub fn with_height(&self, h: f64) -> Self {
        let mut s = self.clone();
        s.height = Some(h);
        s
    }
    /// Sets antenna `eastern` coordinates component
    pub fn with_eastern_component(&self, e: f64) -> Self {
        let mut s = self.clone();
        s.eastern = Some(e);
        s
    }
    /// Sets antenna `northern` coordinates component
    pub fn with_northern_component(&self, n: f64) -> Self {
        let mut s = self.clone();
        s.northern = Some(n);
        s
    }
}

/// Antenna mounting category, as declared by the operator.
/// Determines which mounting sketch the journal carries and how the
/// measured height is to be interpreted.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AntennaMount {
    /// Antenna set directly on the monument,
    /// height measured to the antenna base
    #[strum(serialize = "BASE", serialize = "Base")]
    #[default]
    Base,
    /// Antenna set directly on the monument,
    /// height measured to the phase center
    #[strum(serialize = "PHASE CENTER", serialize = "PhaseCenter")]
    Phase,
    /// Tripod mounted, slant height measurement
    #[strum(serialize = "TRIPOD SLANT", serialize = "TripodSlant")]
    TripodSlant,
    /// Tripod mounted, height measured to the antenna base
    #[strum(serialize = "TRIPOD BASE", serialize = "TripodBase")]
    TripodBase,
    /// Tripod mounted, height measured to the phase center
    #[strum(serialize = "TRIPOD PHASE CENTER", serialize = "TripodPhaseCenter")]
    TripodPhase,
}

impl AntennaMount {
    /// Returns the stable identifier the report generator keys
    /// its mounting sketches on
    pub fn code(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Phase => "phase",
            Self::TripodSlant => "tripod_slant",
            Self::TripodBase => "tripod_base",
            Self::TripodPhase => "tripod_phase",
        }
    }
    /// Returns true if the antenna stands on a tripod
    pub fn is_tripod(&self) -> bool {
        matches!(self, Self::TripodSlant | Self::TripodBase | Self::TripodPhase)
    }
}

impl std::fmt::Display for AntennaMount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn rcvr_parser() {
        let content = "2090088             LEICA GR50          4.51                ";
        let rcvr = Rcvr::from_str(content);
        assert!(rcvr.is_ok());
        let rcvr = rcvr.unwrap();
        assert_eq!(rcvr.model, "LEICA GR50");
        assert_eq!(rcvr.sn, "2090088");
        assert_eq!(rcvr.firmware, "4.51");
    }
    #[test]
    fn rcvr_parser_short_content() {
        // value narrower than the 60 byte field
        let rcvr = Rcvr::from_str("1234567890          ASHTECH Z-XII3       ").unwrap();
        assert_eq!(rcvr.sn, "1234567890");
        assert_eq!(rcvr.model, "ASHTECH Z-XII3");
        assert_eq!(rcvr.firmware, "");
    }
    #[test]
    fn antenna_mount() {
        for (descriptor, mount, code) in [
            ("BASE", AntennaMount::Base, "base"),
            ("PHASE CENTER", AntennaMount::Phase, "phase"),
            ("TRIPOD SLANT", AntennaMount::TripodSlant, "tripod_slant"),
            ("TRIPOD BASE", AntennaMount::TripodBase, "tripod_base"),
            (
                "TRIPOD PHASE CENTER",
                AntennaMount::TripodPhase,
                "tripod_phase",
            ),
        ] {
            let parsed = AntennaMount::from_str(descriptor);
            assert!(parsed.is_ok());
            let parsed = parsed.unwrap();
            assert_eq!(parsed, mount);
            assert_eq!(parsed.code(), code);
        }
        assert!(AntennaMount::from_str("ON A POLE").is_err());
        assert_eq!(AntennaMount::default(), AntennaMount::Base);
        assert!(!AntennaMount::Base.is_tripod());
        assert!(AntennaMount::TripodSlant.is_tripod());
    }
}
