//! Process wide immutable constants

/// WGS84 reference ellipsoid
pub(crate) struct Wgs84;

impl Wgs84 {
    /// Semi major axis (m)
    pub const SEMI_MAJOR_AXIS_M: f64 = 6378137.0_f64;
    /// Ellipsoid flattening
    pub const FLATTENING: f64 = 1.0_f64 / 298.257223563_f64;
}

pub(crate) struct GeodeticSolver;

impl GeodeticSolver {
    /// Convergence threshold on the iterated z component (m).
    /// 1E-8 m on z is below 1E-12 degree on the latitude.
    pub const CONVERGENCE_M: f64 = 1.0E-8;
    /// Iteration bound of the ellipsoidal inverse
    pub const MAX_ITER: u8 = 30;
}

/// 1:100 000 sheet nomenclature raster
pub(crate) struct SheetGrid;

impl SheetGrid {
    /// Letters of the 4 degree latitude bands, equator upward.
    /// The sequence runs A..V then jumps straight to Z: W, X and Y
    /// are not part of the table.
    pub const ROW_LETTERS: [char; 23] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'Z',
    ];
    /// Subcell numbering origin of the raster
    pub const SUBCELL_ORIGIN: f64 = 133.0_f64;
    /// Longitude offset of the raster (degrees)
    pub const LONGITUDE_OFFSET_DEG: f64 = 186.0_f64;
}
