//! Observation session time bounds
use crate::{epoch, error::Error};
use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observation session time bounds, taken from the first and last
/// epoch marker lines of the file body. Files are assumed time ordered:
/// bounds reflect file order, they are never sorted chronologically.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    /// Timestamp of the first epoch marker, in file order
    pub start: Epoch,
    /// Timestamp of the last epoch marker, in file order
    pub end: Epoch,
}

impl Session {
    /// Reduces the file body into session time bounds.
    /// A body line is an epoch marker if and only if it starts with '>'.
    pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Self, Error> {
        let bounds = lines
            .filter(|line| line.starts_with('>'))
            .map(|line| epoch::parse_utc(line.split_at(1).1))
            .try_fold(None, |bounds, epoch| {
                let epoch = epoch?;
                Ok::<Option<(Epoch, Epoch)>, Error>(match bounds {
                    Some((start, _)) => Some((start, epoch)),
                    None => Some((epoch, epoch)),
                })
            })?;
        let (start, end) = bounds.ok_or(Error::NoEpochRecords)?;
        Ok(Self { start, end })
    }
    /// Returns the session duration
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn session_bounds() {
        let body = "> 2024 08 27 10 00 00.0000000  0  4
G01  20832393.682   109471816.51208
G03  23645777.652   124257370.14208
> 2024 08 27 10 00 30.0000000  0  4
G01  20832400.284   109471851.19808
> 2024 08 27 10 15 30.5000000  0  4
G01  20832410.112   109471899.90408";
        let session = Session::from_lines(body.lines());
        assert!(session.is_ok());
        let session = session.unwrap();
        assert_eq!(
            session.start,
            Epoch::from_gregorian_utc(2024, 8, 27, 10, 0, 0, 0)
        );
        // fractional second truncated
        assert_eq!(
            session.end,
            Epoch::from_gregorian_utc(2024, 8, 27, 10, 15, 30, 0)
        );
        assert_eq!(session.duration(), Duration::from_seconds(930.0));
    }
    #[test]
    fn session_single_epoch() {
        let body = "> 2024 08 27 10 00 00.0000000  0  4";
        let session = Session::from_lines(body.lines()).unwrap();
        assert_eq!(session.start, session.end);
        assert_eq!(session.duration(), Duration::from_seconds(0.0));
    }
    #[test]
    fn session_no_epoch_records() {
        let body = "G01  20832393.682   109471816.51208
G03  23645777.652   124257370.14208";
        let session = Session::from_lines(body.lines());
        assert!(matches!(session, Err(Error::NoEpochRecords)));
    }
    #[test]
    fn session_bounds_follow_file_order() {
        // out of order markers are not reordered:
        // reported bounds reflect file order
        let body = "> 2024 08 27 11 00 00.0000000  0  4
> 2024 08 27 10 00 00.0000000  0  4";
        let session = Session::from_lines(body.lines()).unwrap();
        assert_eq!(
            session.start,
            Epoch::from_gregorian_utc(2024, 8, 27, 11, 0, 0, 0)
        );
        assert_eq!(
            session.end,
            Epoch::from_gregorian_utc(2024, 8, 27, 10, 0, 0, 0)
        );
    }
    #[test]
    fn session_faulty_marker() {
        let body = "> 2024 08 27";
        assert!(matches!(
            Session::from_lines(body.lines()),
            Err(Error::EpochParsing(_))
        ));
    }
}
