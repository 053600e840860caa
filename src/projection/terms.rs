use crate::prelude::*;
use once_cell::unsync::OnceCell;
use std::f64::consts::PI;

/// Closer to a pole than this (in terms of the cosine of the latitude),
/// several of the series terms blow up.
pub(super) const POLAR_COSINE_LIMIT: f64 = 1e-10;

/// The per-point intermediate quantities of the projection.
///
/// Everything beyond the zone bookkeeping is computed lazily, at most once,
/// on first request, and kept for the lifetime of the `PointTerms`. So
/// asking for e.g. both easting and northing of the same point, shares
/// the trigonometry and the radii of curvature between the two.
#[derive(Debug)]
pub struct PointTerms<'a> {
    params: &'a EllipsoidParameters,
    latitude: f64,
    longitude: f64,
    zone: i64,
    central_meridian: f64,
    latitude_radians: f64,
    longitude_difference: f64,
    w: f64,
    sin_lat: f64,
    cos_lat: f64,

    tan_lat: OnceCell<f64>,
    multiple_angle_sines: OnceCell<[f64; 3]>,
    radii: OnceCell<Radii>,
    meridian_distance: OnceCell<f64>,
    easting: OnceCell<f64>,
    northing: OnceCell<f64>,
    grid_convergence: OnceCell<f64>,
    point_scale_factor: OnceCell<f64>,
}

#[derive(Clone, Copy, Debug)]
struct Radii {
    nu: f64,
    rho: f64,
    psi: f64,
}

impl<'a> PointTerms<'a> {
    /// Latitude and longitude in degrees. If `zone` is `None`, the zone
    /// containing the longitude is used.
    pub(super) fn new(
        params: &'a EllipsoidParameters,
        latitude: f64,
        longitude: f64,
        zone: Option<i64>,
    ) -> Result<PointTerms<'a>, Error> {
        if !(latitude.is_finite() && longitude.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite coordinate ({latitude}, {longitude})"
            )));
        }
        if latitude.abs() > 90. {
            return Err(Error::InvalidInput(format!(
                "latitude {latitude}° outside [-90°, 90°]"
            )));
        }

        let latitude_radians = latitude / 180. * PI;
        let (sin_lat, cos_lat) = latitude_radians.sin_cos();
        if cos_lat.abs() < POLAR_COSINE_LIMIT {
            return Err(Error::DegenerateInput(latitude));
        }

        let zone = zone.unwrap_or_else(|| params.zone(longitude));
        let central_meridian = params.central_meridian(zone);
        let longitude_difference = longitude - central_meridian;

        Ok(PointTerms {
            params,
            latitude,
            longitude,
            zone,
            central_meridian,
            latitude_radians,
            longitude_difference,
            w: longitude_difference / 180. * PI,
            sin_lat,
            cos_lat,
            tan_lat: OnceCell::new(),
            multiple_angle_sines: OnceCell::new(),
            radii: OnceCell::new(),
            meridian_distance: OnceCell::new(),
            easting: OnceCell::new(),
            northing: OnceCell::new(),
            grid_convergence: OnceCell::new(),
            point_scale_factor: OnceCell::new(),
        })
    }

    // ----- Zone bookkeeping ----------------------------------------------------------

    /// The latitude, in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude, in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn zone(&self) -> i64 {
        self.zone
    }

    /// The central meridian of the zone, in degrees
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// The longitude as reckoned from the central meridian, in degrees
    pub fn longitude_difference(&self) -> f64 {
        self.longitude_difference
    }

    /// The longitude as reckoned from the central meridian, *𝜔*, in radians
    pub fn longitude_difference_radians(&self) -> f64 {
        self.w
    }

    // ----- Trigonometry --------------------------------------------------------------

    pub fn latitude_radians(&self) -> f64 {
        self.latitude_radians
    }

    pub fn sin_lat(&self) -> f64 {
        self.sin_lat
    }

    pub fn cos_lat(&self) -> f64 {
        self.cos_lat
    }

    pub fn tan_lat(&self) -> f64 {
        *self.tan_lat.get_or_init(|| self.latitude_radians.tan())
    }

    /// sin 2𝜙, sin 4𝜙, sin 6𝜙
    pub fn multiple_angle_sines(&self) -> [f64; 3] {
        *self.multiple_angle_sines.get_or_init(|| {
            let lat = self.latitude_radians;
            [(2. * lat).sin(), (4. * lat).sin(), (6. * lat).sin()]
        })
    }

    // ----- Ellipsoidal geometry ------------------------------------------------------

    fn radii(&self) -> Radii {
        *self.radii.get_or_init(|| {
            let a = self.params.semimajor_axis();
            let es = self.params.eccentricity_squared();
            let denom = 1. - es * self.sin_lat * self.sin_lat;
            let nu = a / denom.sqrt();
            let rho = a * (1. - es) / denom.powf(1.5);
            Radii {
                nu,
                rho,
                psi: nu / rho,
            }
        })
    }

    /// The radius of curvature in the prime vertical, *𝜈*
    pub fn nu(&self) -> f64 {
        self.radii().nu
    }

    /// The radius of curvature in the meridian, *𝜌*
    pub fn rho(&self) -> f64 {
        self.radii().rho
    }

    /// *𝜓 = 𝜈/𝜌*
    pub fn psi(&self) -> f64 {
        self.radii().psi
    }

    /// The meridian distance from the equator, *m*
    pub fn meridian_distance(&self) -> f64 {
        *self.meridian_distance.get_or_init(|| {
            self.params.meridian_arc().distance_from_sines(
                self.params.semimajor_axis(),
                self.latitude_radians,
                self.multiple_angle_sines(),
            )
        })
    }

    // ----- Redfearn's series ---------------------------------------------------------

    /// Easting, including the false easting
    pub fn easting(&self) -> f64 {
        *self.easting.get_or_init(|| {
            let Radii { nu, psi, .. } = self.radii();
            let (w, c, t) = (self.w, self.cos_lat, self.tan_lat());
            let (psi2, psi3) = (psi * psi, psi * psi * psi);
            let (t2, t4, t6) = (t * t, t * t * t * t, t * t * t * t * t * t);

            let wc = w * c;
            let wc2 = wc * wc;
            let wc3 = wc2 * wc;
            let wc5 = wc3 * wc2;
            let wc7 = wc5 * wc2;

            let first = nu * wc;
            let second = nu * wc3 * (psi - t2) / 6.;
            let third = nu
                * wc5
                * (4. * psi3 * (1. - 6. * t2) + psi2 * (1. + 8. * t2) - 2. * psi * t2 + t4)
                / 120.;
            let fourth = nu * wc7 * (61. - 479. * t2 + 179. * t4 - t6) / 5040.;

            self.params.central_scale_factor() * (first + second + third + fourth)
                + self.params.false_easting()
        })
    }

    /// Northing, including the false northing
    pub fn northing(&self) -> f64 {
        *self.northing.get_or_init(|| {
            let Radii { nu, psi, .. } = self.radii();
            let (w, s, c, t) = (self.w, self.sin_lat, self.cos_lat, self.tan_lat());
            let (psi2, psi3, psi4) = (psi * psi, psi * psi * psi, psi * psi * psi * psi);
            let (t2, t4, t6) = (t * t, t * t * t * t, t * t * t * t * t * t);

            let w2 = w * w;
            let w4 = w2 * w2;
            let w6 = w4 * w2;
            let w8 = w4 * w4;
            let c2 = c * c;
            let c3 = c2 * c;
            let c5 = c3 * c2;
            let c7 = c5 * c2;

            let first = nu * s * w2 * c / 2.;
            let second = nu * s * w4 * c3 * (4. * psi2 + psi - t2) / 24.;
            let third = nu
                * s
                * w6
                * c5
                * (8. * psi4 * (11. - 24. * t2) - 28. * psi3 * (1. - 6. * t2)
                    + psi2 * (1. - 32. * t2)
                    - 2. * psi * t2
                    + t4)
                / 720.;
            let fourth = nu * s * w8 * c7 * (1385. - 3111. * t2 + 543. * t4 - t6) / 40320.;

            self.params.central_scale_factor()
                * (self.meridian_distance() + first + second + third + fourth)
                + self.params.false_northing()
        })
    }

    /// The grid convergence, in degrees
    pub fn grid_convergence(&self) -> f64 {
        *self.grid_convergence.get_or_init(|| {
            let Radii { psi, .. } = self.radii();
            let (w, s, c, t) = (self.w, self.sin_lat, self.cos_lat, self.tan_lat());
            let (psi2, psi3, psi4) = (psi * psi, psi * psi * psi, psi * psi * psi * psi);
            let (t2, t4) = (t * t, t * t * t * t);

            let w3 = w * w * w;
            let w5 = w3 * w * w;
            let w7 = w5 * w * w;
            let c2 = c * c;
            let c4 = c2 * c2;
            let c6 = c4 * c2;

            let first = -s * w;
            let second = -s * w3 * c2 * (2. * psi2 - psi) / 3.;
            let third = -s
                * w5
                * c4
                * (psi4 * (11. - 24. * t2) - psi3 * (11. - 36. * t2)
                    + 2. * psi2 * (1. - 7. * t2)
                    + psi * t2)
                / 15.;
            let fourth = s * w7 * c6 * (17. - 26. * t2 + 2. * t4) / 315.;

            (first + second + third + fourth) / PI * 180.
        })
    }

    /// The point scale factor
    pub fn point_scale_factor(&self) -> f64 {
        *self.point_scale_factor.get_or_init(|| {
            let Radii { psi, .. } = self.radii();
            let t = self.tan_lat();
            let (psi2, psi3) = (psi * psi, psi * psi * psi);
            let (t2, t4) = (t * t, t * t * t * t);

            let wc = self.w * self.cos_lat;
            let wc2 = wc * wc;
            let wc4 = wc2 * wc2;
            let wc6 = wc4 * wc2;

            let first = 1. + wc2 * psi / 2.;
            let second = wc4
                * (4. * psi3 * (1. - 6. * t2) + psi2 * (1. + 24. * t2) - 4. * psi * t2)
                / 24.;
            let third = wc6 * (61. - 148. * t2 + 16. * t4) / 720.;

            self.params.central_scale_factor() * (first + second + third)
        })
    }

    /// All the output quantities, collected
    pub fn grid_coordinate(&self) -> GridCoordinate {
        GridCoordinate {
            zone: self.zone,
            easting: self.easting(),
            northing: self.northing(),
            grid_convergence: self.grid_convergence(),
            point_scale_factor: self.point_scale_factor(),
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------
