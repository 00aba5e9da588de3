//! Errors that may rise when deriving a station record
use thiserror::Error;

/// Errors that may rise in the station record derivation process.
/// All of them are terminal for the file being processed: either a
/// complete [crate::StationRecord] is produced, or one of these is
/// returned and no partial record exists.
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    IoError(#[from] std::io::Error),
    /// "END OF HEADER" delimiter not found: file is not a readable RINEX
    #[error("header delimiter not found")]
    MissingHeaderDelimiter,
    /// A mandatory header label was not encountered
    #[error("missing mandatory \"{0}\" header field")]
    MissingHeaderField(&'static str),
    /// A numeric header token failed to parse
    #[error("failed to parse \"{0}\" numeric field from \"{1}\"")]
    MalformedNumericField(&'static str, String),
    /// An epoch marker line carried an unparsable timestamp
    #[error("failed to parse epoch from \"{0}\"")]
    EpochParsing(String),
    /// File body contains zero epoch marker lines
    #[error("no epoch record found in file body")]
    NoEpochRecords,
    /// Ellipsoidal inverse did not converge within the iteration bound
    #[error("ecef to geodetic conversion did not converge")]
    CoordinateConversion,
    /// Coordinates resolve outside the 1:100 000 sheet grid
    #[error("coordinates ({0:.6}E, {1:.6}N) resolve outside the sheet grid")]
    OutOfRangeCoordinate(f64, f64),
}
