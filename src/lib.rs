//! *Geographic to grid coordinates on zoned Transverse Mercator grids*.
//!
//! Redfearn's series
//! =================
//!
//! The crate converts geographic coordinates (latitude, longitude on a
//! reference ellipsoid) into projected grid coordinates (zone, easting,
//! northing) on a UTM-style grid, such as the Map Grid of Australia (MGA),
//! using the [Redfearn (1948)](crate::Bibliography::Red48) formulation of the
//! Transverse Mercator projection, as given in the
//! [GDA technical manual](crate::Bibliography::Gda94).
//!
//! Along with the grid coordinate, each projection returns the grid
//! convergence and the point scale factor.
//!
//! ```
//! use redfearn::prelude::*;
//!
//! let mga = ProjectionEngine::named("mga")?;
//! let grid = mga.project(-37.554082, 144.046702)?;
//! assert_eq!(grid.zone, 55);
//! assert!((grid.easting - 239_116.199).abs() < 1e-3);
//! assert!((grid.northing - 5_839_558.464).abs() < 1e-3);
//! # Ok::<(), redfearn::Error>(())
//! ```
//!
//! The series are accurate to the millimetre within a zone and its immediate
//! neighbours, and degrade with increasing distance from the central meridian.
//! The poles are degenerate and rejected.

mod coordinate;
mod ellipsoid;
mod grid;
mod projection;

/// Free functions for general use: polynomial evaluation and angle handling.
pub mod math;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::GeographicPoint;
    pub use crate::coordinate::GridCoordinate;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::MeridianArc;
    pub use crate::grid::EllipsoidParameters;
    pub use crate::projection::PointTerms;
    pub use crate::projection::ProjectionEngine;
    pub use crate::Error;
}

pub use prelude::*;

use thiserror::Error;

/// The *Redfearn* error messaging enumeration. Badly needs reconsideration
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter {0}: {1}")]
    InvalidParameter(&'static str, String),

    #[error("degenerate input: latitude {0}° is too close to a pole")]
    DegenerateInput(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} not found{1}")]
    NotFound(String, String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("syntax error: {0}")]
    Syntax(String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// J.C.B. Redfearn (1948): *Transverse Mercator formulae*.
    /// Empire Survey Review, 9(69), pp. 318-322,
    /// [DOI](https://doi.org/10.1179/sre.1948.9.69.318)
    Red48,

    /// Intergovernmental Committee on Surveying and Mapping (ICSM):
    /// *Geocentric Datum of Australia Technical Manual*, version 2.3(1),
    /// section 5: *Conversion between geographic and grid coordinates*.
    Gda94,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,

    /// R.E. Deakin, M.N. Hunter and C.F.F. Karney (2012):
    /// A fresh look at the UTM projection:
    /// Karney-Krueger equations.
    /// Surveying and Spatial Sciences Institute (SSSI)
    /// Land Surveying Commission National Conference,
    /// Melbourne, 18-21 April, 2012.
    Dea12,
}
