use std::fmt;

/// A geographic coordinate: latitude and longitude, in degrees.
///
/// The longitude is unrestricted, i.e. it may exceed ±180°: the zone
/// arithmetic of the projection is well defined for any real longitude.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeographicPoint {
    pub latitude: f64,
    pub longitude: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl GeographicPoint {
    /// A `GeographicPoint` from latitude/longitude, in degrees
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> GeographicPoint {
        GeographicPoint {
            latitude,
            longitude,
        }
    }

    /// A `GeographicPoint` from longitude/latitude, in degrees (i.e. in the
    /// axis order conventionally used in GIS)
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> GeographicPoint {
        GeographicPoint::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for GeographicPoint {
    /// From a (latitude, longitude) tuple
    fn from(value: (f64, f64)) -> Self {
        GeographicPoint::new(value.0, value.1)
    }
}

/// The result of a projection: A zoned grid coordinate, supplemented with
/// the grid convergence and point scale factor at the point.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GridCoordinate {
    /// The zone number. Not clamped: May be zero, negative, or beyond
    /// the nominal range of the grid system, for far-out longitudes
    pub zone: i64,
    /// Metres, including the false easting
    pub easting: f64,
    /// Metres, including the false northing
    pub northing: f64,
    /// The angle from true north to grid north, in degrees
    pub grid_convergence: f64,
    /// The ratio of grid distance to ellipsoidal distance at the point
    pub point_scale_factor: f64,
}

/// Whitespace separated: zone, easting, northing, convergence, scale.
/// The precision, if given, applies to easting and northing. Convergence
/// and scale get 6 more decimals, since they are of the order of unity.
impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(4);
        write!(
            f,
            "{} {:.*} {:.*} {:.*} {:.*}",
            self.zone,
            decimals,
            self.easting,
            decimals,
            self.northing,
            decimals + 6,
            self.grid_convergence,
            decimals + 6,
            self.point_scale_factor
        )
    }
}

// ----- T E S T S ---------------------------------------------------------------------
