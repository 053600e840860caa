use super::*;
use crate::math::horner;
use std::f64::consts::FRAC_PI_2;

// ----- Meridian geometry -----------------------------------------------------

/// The coefficients *A0, A2, A4, A6* of the series for the meridian distance,
/// *m = a·(A0·𝜙 - A2·sin 2𝜙 + A4·sin 4𝜙 - A6·sin 6𝜙)*, truncated after the
/// terms in *e⁶*. See [GDA technical manual](crate::Bibliography::Gda94) §5.4.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeridianArc {
    pub a0: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
}

#[rustfmt::skip]
const A0: [f64; 4] = [1.,  -1. / 4.,  -3. / 64.,  -5. / 256.];
#[rustfmt::skip]
const A2: [f64; 4] = [0.,   1.,        1. / 4.,   15. / 128.];
#[rustfmt::skip]
const A4: [f64; 4] = [0.,   0.,        1.,         3. / 4.];

impl MeridianArc {
    /// The coefficients, as closed form polynomials in the squared eccentricity
    #[must_use]
    pub fn new(eccentricity_squared: f64) -> MeridianArc {
        let es = eccentricity_squared;
        MeridianArc {
            a0: horner(es, &A0),
            a2: 3. / 8. * horner(es, &A2),
            a4: 15. / 256. * horner(es, &A4),
            a6: 35. * es * es * es / 3072.,
        }
    }

    /// The meridian distance from the equator to `latitude` (radians),
    /// on an ellipsoid of semimajor axis `a`
    #[must_use]
    pub fn distance(&self, a: f64, latitude: f64) -> f64 {
        let sines = [
            (2. * latitude).sin(),
            (4. * latitude).sin(),
            (6. * latitude).sin(),
        ];
        self.distance_from_sines(a, latitude, sines)
    }

    /// As [distance](MeridianArc::distance), with the sines of 2𝜙, 4𝜙, 6𝜙 precomputed
    #[must_use]
    pub(crate) fn distance_from_sines(&self, a: f64, latitude: f64, sines: [f64; 3]) -> f64 {
        a * (self.a0 * latitude - self.a2 * sines[0] + self.a4 * sines[1] - self.a6 * sines[2])
    }
}

impl Ellipsoid {
    /// The coefficients for the meridian distance series of this ellipsoid
    #[must_use]
    pub fn meridian_arc_coefficients(&self) -> MeridianArc {
        MeridianArc::new(self.eccentricity_squared())
    }

    /// The meridian distance, *m*, from the equator to `latitude` (radians)
    #[must_use]
    pub fn meridian_distance(&self, latitude: f64) -> f64 {
        self.meridian_arc_coefficients().distance(self.a, latitude)
    }

    /// The Meridian Quadrant, *Qm*, is the distance from the equator to one of the poles.
    #[must_use]
    pub fn meridian_quadrant(&self) -> f64 {
        self.meridian_distance(FRAC_PI_2)
    }
}
