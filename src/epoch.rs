//! Epoch timestamp parsing helpers
use crate::error::Error;
use hifitime::Epoch;

/// Parses a UTC [Epoch] from a "yyyy mm dd hh mm ss.sssss" descriptor,
/// as found in epoch marker lines. Resolution is one second: a
/// fractional seconds part is truncated, never rounded. Tokens past
/// the sixth one (event flag, vehicle count..) are ignored.
pub(crate) fn parse_utc(content: &str) -> Result<Epoch, Error> {
    let mut y = 0_i32;
    let mut m = 0_u8;
    let mut d = 0_u8;
    let mut hh = 0_u8;
    let mut mm = 0_u8;
    let mut ss = 0_u8;

    if content.split_ascii_whitespace().count() < 6 {
        return Err(Error::EpochParsing(content.trim().to_string()));
    }

    for (field_index, item) in content.split_ascii_whitespace().enumerate() {
        match field_index {
            0 => {
                y = item
                    .parse::<i32>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;

                /* old RINEX problem: YY is sometimes encoded on two digits */
                if y < 100 {
                    if y < 80 {
                        y += 2000;
                    } else {
                        y += 1900;
                    }
                }
            },
            1 => {
                m = item
                    .parse::<u8>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;
            },
            2 => {
                d = item
                    .parse::<u8>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;
            },
            3 => {
                hh = item
                    .parse::<u8>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;
            },
            4 => {
                mm = item
                    .parse::<u8>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;
            },
            5 => {
                // truncate the fractional part: second resolution
                let seconds = match item.find('.') {
                    Some(dot) => &item[..dot],
                    None => item,
                };
                ss = seconds
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| Error::EpochParsing(content.trim().to_string()))?;
            },
            _ => {},
        }
    }

    // in case provided content is totally invalid,
    // Epoch::from_gregorian may panic
    if y == 0 {
        return Err(Error::EpochParsing(content.trim().to_string()));
    }

    Ok(Epoch::from_gregorian_utc(y, m, d, hh, mm, ss, 0))
}
