//! The parameters of a zoned Transverse Mercator grid: The ellipsoid, the
//! scale factor and false origin of the projection, and the zone layout.
mod parameter;
mod parsed_parameters;

use crate::prelude::*;
use log::{debug, error};
use parameter::GridParameter;
use parsed_parameters::{split_into_parameters, ParsedParameters};
use std::str::FromStr;

// ----- P R E S E T S -----------------------------------------------------------------

/// The named grid systems: name, definition. All are UTM-style, i.e. 6°
/// zones with zone 1 centered on 177°W and a central scale factor of 0.9996.
#[rustfmt::skip]
const GRID_PRESETS: [(&str, &str); 3] = [
    // Map Grid of Australia
    ("mga",       "redfearn ellps=6378137,298.257222101 k_0=0.9996 x_0=500000 y_0=10000000 zone_width=6 lon_1=-177"),
    ("utm",       "redfearn ellps=WGS84"),
    ("utm_south", "redfearn ellps=WGS84 south"),
];

/// The false northing implied by the `south` flag
const SOUTHERN_FALSE_NORTHING: f64 = 10_000_000.;

#[rustfmt::skip]
const GAMUT: [GridParameter; 7] = [
    GridParameter::Flag { key: "south" },
    GridParameter::Text { key: "ellps",      default: Some("GRS80") },

    GridParameter::Real { key: "k_0",        default: Some(0.9996) },
    GridParameter::Real { key: "x_0",        default: Some(500_000.) },
    GridParameter::Real { key: "y_0",        default: Some(0.) },

    GridParameter::Real { key: "zone_width", default: Some(6.) },
    GridParameter::Real { key: "lon_1",      default: Some(-177.) },
];

// ----- E L L I P S O I D   P A R A M E T E R S ---------------------------------------

/// The reference ellipsoid and the projection grid. Immutable: the derived
/// constants are computed once, at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidParameters {
    ellps: Ellipsoid,
    central_scale_factor: f64,
    false_easting: f64,
    false_northing: f64,
    zone_width: f64,
    zone_1_central_meridian: f64,

    // Derived
    eccentricity_squared: f64,
    zone_0_western_edge: f64,
    zone_0_central_meridian: f64,
    meridian_arc: MeridianArc,
}

/// The Map Grid of Australia is the default grid
impl Default for EllipsoidParameters {
    fn default() -> EllipsoidParameters {
        let ellps = Ellipsoid::new(6_378_137., 1. / 298.257_222_101);
        EllipsoidParameters::derive(ellps, 0.9996, 500_000., 10_000_000., 6., -177.)
    }
}

/// Constructors
impl EllipsoidParameters {
    /// User defined grid. Fails with [Error::InvalidParameter] for
    /// non-finite values, and for geometrically nonsensical ones:
    /// a non-positive semimajor axis, scale factor, or zone width, or a
    /// flattening outside [0, 1) (i.e. an inverse flattening ≤ 1, except
    /// for the zero used by convention to indicate a sphere).
    pub fn new(
        ellps: Ellipsoid,
        central_scale_factor: f64,
        false_easting: f64,
        false_northing: f64,
        zone_width: f64,
        zone_1_central_meridian: f64,
    ) -> Result<EllipsoidParameters, Error> {
        let a = ellps.semimajor_axis();
        if !(a.is_finite() && a > 0.) {
            return Err(invalid("semimajor_axis", format!("{a} (must be positive)")));
        }

        let f = ellps.flattening();
        if !(f.is_finite() && (0. ..1.).contains(&f)) {
            let rf = ellps.inverse_flattening();
            return Err(invalid("inverse_flattening", format!("{rf} (must exceed 1)")));
        }

        let k = central_scale_factor;
        if !(k.is_finite() && k > 0.) {
            return Err(invalid("central_scale_factor", format!("{k} (must be positive)")));
        }

        let w = zone_width;
        if !(w.is_finite() && w > 0.) {
            return Err(invalid("zone_width", format!("{w} (must be positive)")));
        }

        for (key, value) in [
            ("false_easting", false_easting),
            ("false_northing", false_northing),
            ("zone_1_central_meridian", zone_1_central_meridian),
        ] {
            if !value.is_finite() {
                return Err(invalid(key, format!("{value} (must be finite)")));
            }
        }

        let params = EllipsoidParameters::derive(
            ellps,
            central_scale_factor,
            false_easting,
            false_northing,
            zone_width,
            zone_1_central_meridian,
        );
        debug!("New grid: {params:?}");
        Ok(params)
    }

    /// A grid given by preset name (`mga`, `utm`, `utm_south`), or by a
    /// definition such as
    /// `"redfearn ellps=GRS80 k_0=0.9996 x_0=500000 y_0=10000000 zone_width=6 lon_1=-177"`.
    ///
    /// A definition starting with a preset name takes its defaults from the
    /// preset, so `"mga k_0=1"` is the MGA, with unit central scale factor.
    /// The `south` flag adds a false northing of 10 000 000 m, unless `y_0`
    /// is given explicitly.
    pub fn named(definition: &str) -> Result<EllipsoidParameters, Error> {
        let mut locals = split_into_parameters(definition);
        let name = locals
            .get("name")
            .cloned()
            .unwrap_or_else(|| String::from("redfearn"));

        // Expand the preset, letting the definition override its elements
        if name != "redfearn" {
            let Some(preset) = GRID_PRESETS.iter().find(|p| p.0 == name) else {
                return Err(Error::NotFound(name, String::from(": grid preset")));
            };
            let mut expanded = split_into_parameters(preset.1);
            locals.remove("name");
            expanded.extend(locals);
            locals = expanded;
        }

        let params = ParsedParameters::new(locals, &GAMUT)?;

        let ellps = Ellipsoid::named(&params.text("ellps")?)?;
        let mut y_0 = params.real("y_0")?;
        if params.boolean("south") && !params.given("y_0") {
            y_0 += SOUTHERN_FALSE_NORTHING;
        }

        EllipsoidParameters::new(
            ellps,
            params.real("k_0")?,
            params.real("x_0")?,
            y_0,
            params.real("zone_width")?,
            params.real("lon_1")?,
        )
    }

    // Compute the derived constants. No validation.
    fn derive(
        ellps: Ellipsoid,
        central_scale_factor: f64,
        false_easting: f64,
        false_northing: f64,
        zone_width: f64,
        zone_1_central_meridian: f64,
    ) -> EllipsoidParameters {
        let zone_0_western_edge = zone_1_central_meridian - 1.5 * zone_width;
        EllipsoidParameters {
            ellps,
            central_scale_factor,
            false_easting,
            false_northing,
            zone_width,
            zone_1_central_meridian,
            eccentricity_squared: ellps.eccentricity_squared(),
            zone_0_western_edge,
            zone_0_central_meridian: zone_0_western_edge + zone_width / 2.,
            meridian_arc: ellps.meridian_arc_coefficients(),
        }
    }
}

fn invalid(key: &'static str, reason: String) -> Error {
    error!("Invalid grid parameter {key}: {reason}");
    Error::InvalidParameter(key, reason)
}

impl FromStr for EllipsoidParameters {
    type Err = Error;

    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        EllipsoidParameters::named(definition)
    }
}

// ----- A C C E S S O R S -------------------------------------------------------------

impl EllipsoidParameters {
    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }

    /// The semimajor axis, *a*, in metres
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.ellps.semimajor_axis()
    }

    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        self.ellps.inverse_flattening()
    }

    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.ellps.flattening()
    }

    /// *e² = 2f - f²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }

    /// *K0*, the scale factor along the central meridians
    #[must_use]
    pub fn central_scale_factor(&self) -> f64 {
        self.central_scale_factor
    }

    #[must_use]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    #[must_use]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// Degrees of longitude per zone
    #[must_use]
    pub fn zone_width(&self) -> f64 {
        self.zone_width
    }

    /// The central meridian of zone 1, in degrees
    #[must_use]
    pub fn zone_1_central_meridian(&self) -> f64 {
        self.zone_1_central_meridian
    }

    /// The western edge of zone 0, in degrees
    #[must_use]
    pub fn zone_0_western_edge(&self) -> f64 {
        self.zone_0_western_edge
    }

    /// The central meridian of zone 0, in degrees
    #[must_use]
    pub fn zone_0_central_meridian(&self) -> f64 {
        self.zone_0_central_meridian
    }

    /// The coefficients *A0, A2, A4, A6* of the meridian distance series
    #[must_use]
    pub fn meridian_arc(&self) -> &MeridianArc {
        &self.meridian_arc
    }

    /// The zone containing `longitude` (degrees). Not clamped to any nominal
    /// range: far-out longitudes give zero, negative, or large zone numbers.
    #[must_use]
    pub fn zone(&self, longitude: f64) -> i64 {
        ((longitude - self.zone_0_western_edge) / self.zone_width).floor() as i64
    }

    /// The central meridian of `zone`, in degrees
    #[must_use]
    pub fn central_meridian(&self, zone: i64) -> f64 {
        zone as f64 * self.zone_width + self.zone_0_central_meridian
    }
}

// ----- T E S T S ---------------------------------------------------------------------
