mod constants;
mod meridians;

pub use meridians::MeridianArc;

use crate::Error;

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_101)
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid; built-in, or given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name.trim())
        {
            return Ok(Ellipsoid::new(e.1, flattening_from_reciprocal(e.2)));
        }

        // Remove optional parenthesis
        let mut name = name.trim();
        if let Some(stripped) = name.strip_prefix('(').and_then(|n| n.strip_suffix(')')) {
            name = stripped;
        }

        // The "semimajor, reciprocal-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = name.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let Ok(a) = a_and_rf[0].trim().parse::<f64>() {
                if let Ok(rf) = a_and_rf[1].trim().parse::<f64>() {
                    return Ok(Ellipsoid::new(a, flattening_from_reciprocal(rf)));
                }
            }
        }

        Err(Error::NotFound(
            String::from(name),
            String::from(": Ellipsoid::named()"),
        ))
    }
}

// EPSG convention: zero reciprocal flattening indicates zero flattening
fn flattening_from_reciprocal(rf: f64) -> f64 {
    if rf != 0.0 {
        1.0 / rf
    } else {
        rf
    }
}

impl Ellipsoid {
    // ----- Size ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The reciprocal flattening, *1/f*. Zero for a sphere, following the
    /// EPSG convention.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        flattening_from_reciprocal(self.f)
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a² = 2f - f²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *𝜈* (nu).
    /// Latitude in radians.
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    /// The meridian radius of curvature, *𝜌* (rho).
    /// Latitude in radians.
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------
