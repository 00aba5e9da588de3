//! 1:100 000 map sheet nomenclature
use crate::{constants::SheetGrid, error::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Designator of the 1:100 000 scale topographic map sheet containing
/// a given geodetic position. Renders as "{row}-{column}-{subcell}",
/// like "N-37-4".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapSheet {
    row: char,
    column: u8,
    subcell: u8,
}

impl MapSheet {
    /// Resolves the sheet containing (longitude ddeg, latitude ddeg).
    /// Pure function of its inputs. Coordinates that resolve outside
    /// the grid (latitude off the 23 row bands, in particular) return
    /// [Error::OutOfRangeCoordinate], they never index out of bounds.
    pub fn from_geodetic(longitude: f64, latitude: f64) -> Result<Self, Error> {
        let row_index = (latitude / 4.0).floor();
        if !(0.0..SheetGrid::ROW_LETTERS.len() as f64).contains(&row_index) {
            return Err(Error::OutOfRangeCoordinate(longitude, latitude));
        }
        let row = SheetGrid::ROW_LETTERS[row_index as usize];

        let column = (longitude / 6.0).floor() + 31.0;

        let subcell = SheetGrid::SUBCELL_ORIGIN
            - 12.0 * ((latitude - 4.0 * row_index) / (4.0 / 12.0)).floor()
            + ((longitude - 6.0 * column + SheetGrid::LONGITUDE_OFFSET_DEG) / (6.0 / 12.0)).floor();

        if !(1.0..=61.0).contains(&column) || !(1.0..=144.0).contains(&subcell) {
            return Err(Error::OutOfRangeCoordinate(longitude, latitude));
        }

        Ok(Self {
            row,
            column: column as u8,
            subcell: subcell as u8,
        })
    }
    /// Returns the sheet row letter (4 degree latitude band)
    pub fn row_letter(&self) -> char {
        self.row
    }
    /// Returns the sheet column number (6 degree longitude band)
    pub fn column(&self) -> u8 {
        self.column
    }
    /// Returns the subcell number within the row/column cell, in [1, 144]
    pub fn subcell(&self) -> u8 {
        self.subcell
    }
}

impl std::fmt::Display for MapSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.row, self.column, self.subcell)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn moscow_area_sheet() {
        let sheet = MapSheet::from_geodetic(37.754529682016, 55.697628552569);
        assert!(sheet.is_ok());
        let sheet = sheet.unwrap();
        assert_eq!(sheet.row_letter(), 'N');
        assert_eq!(sheet.column(), 37);
        assert_eq!(sheet.subcell(), 4);
        assert_eq!(sheet.to_string(), "N-37-4");
    }
    #[test]
    fn resolver_is_pure() {
        let a = MapSheet::from_geodetic(37.754529682016, 55.697628552569).unwrap();
        let b = MapSheet::from_geodetic(37.754529682016, 55.697628552569).unwrap();
        assert_eq!(a, b);
    }
    #[test]
    fn subcell_raster_corners() {
        // first band, first column, subcell raster extremes
        let sheet = MapSheet::from_geodetic(0.1, 0.1).unwrap();
        assert_eq!(sheet.to_string(), "A-31-133");
        let sheet = MapSheet::from_geodetic(5.99, 3.99).unwrap();
        assert_eq!(sheet.to_string(), "A-31-12");
        // western hemisphere column
        let sheet = MapSheet::from_geodetic(-0.1, 0.1).unwrap();
        assert_eq!(sheet.to_string(), "A-30-144");
    }
    #[test]
    fn last_row_band() {
        // last table entry: Z, 88..92 degrees
        let sheet = MapSheet::from_geodetic(37.6, 89.0).unwrap();
        assert_eq!(sheet.row_letter(), 'Z');
    }
    #[test]
    fn out_of_range_latitudes() {
        assert!(matches!(
            MapSheet::from_geodetic(37.6, -0.1),
            Err(Error::OutOfRangeCoordinate(_, _))
        ));
        assert!(matches!(
            MapSheet::from_geodetic(37.6, 92.0),
            Err(Error::OutOfRangeCoordinate(_, _))
        ));
    }
}
