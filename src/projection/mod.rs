//! Geographic to grid coordinates, following [Redfearn (1948)](crate::Bibliography::Red48),
//! in the form given in the [GDA technical manual](crate::Bibliography::Gda94).
mod terms;

pub use terms::PointTerms;

use crate::prelude::*;
use log::{debug, warn};

/// The projection engine: A thin, immutable wrapper around a set of
/// [EllipsoidParameters], mapping geographic coordinates to grid coordinates.
///
/// The engine holds no mutable state, so it is `Send + Sync`, and may be
/// shared freely between threads. Per-point intermediates are memoized in
/// the [PointTerms] of each call, and dropped with them.
///
/// The series degrade with the distance from the central meridian, and are
/// degenerate at the poles, where [Error::DegenerateInput] is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectionEngine {
    params: EllipsoidParameters,
}

impl ProjectionEngine {
    #[must_use]
    pub fn new(params: EllipsoidParameters) -> ProjectionEngine {
        debug!("New projection engine: {params:?}");
        ProjectionEngine { params }
    }

    /// An engine for a grid given by preset name, or definition.
    /// See [EllipsoidParameters::named]
    pub fn named(definition: &str) -> Result<ProjectionEngine, Error> {
        Ok(ProjectionEngine::new(EllipsoidParameters::named(definition)?))
    }

    #[must_use]
    pub fn parameters(&self) -> &EllipsoidParameters {
        &self.params
    }

    // ----- F O R W A R D ---------------------------------------------------------------

    /// Project the point at (`latitude`, `longitude`), given in degrees,
    /// into the zone containing the longitude.
    pub fn project(&self, latitude: f64, longitude: f64) -> Result<GridCoordinate, Error> {
        Ok(self.terms(latitude, longitude)?.grid_coordinate())
    }

    /// Project the point at (`latitude`, `longitude`) into `zone`, rather
    /// than into the zone containing the longitude: For points close to a zone
    /// boundary, expressed in the coordinates of the neighbouring zone.
    pub fn project_in_zone(
        &self,
        latitude: f64,
        longitude: f64,
        zone: i64,
    ) -> Result<GridCoordinate, Error> {
        Ok(self
            .terms_in_zone(latitude, longitude, zone)?
            .grid_coordinate())
    }

    pub fn project_point(&self, point: GeographicPoint) -> Result<GridCoordinate, Error> {
        self.project(point.latitude, point.longitude)
    }

    /// Project a batch of points. Each point succeeds or fails on its own.
    pub fn project_all(&self, points: &[GeographicPoint]) -> Vec<Result<GridCoordinate, Error>> {
        let results: Vec<_> = points.iter().map(|p| self.project_point(*p)).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        debug!("Projected {successes} of {} points", points.len());
        results
    }

    // ----- I N T E R M E D I A T E S ---------------------------------------------------

    /// The per-point intermediate quantities, for inspection, or for
    /// selective evaluation of the output quantities
    pub fn terms(&self, latitude: f64, longitude: f64) -> Result<PointTerms<'_>, Error> {
        PointTerms::new(&self.params, latitude, longitude, None)
    }

    /// As [terms](ProjectionEngine::terms), but in a given zone
    pub fn terms_in_zone(
        &self,
        latitude: f64,
        longitude: f64,
        zone: i64,
    ) -> Result<PointTerms<'_>, Error> {
        let terms = PointTerms::new(&self.params, latitude, longitude, Some(zone))?;
        // Within the zone itself, and its immediate neighbours, we're on safe ground
        let difference = terms.longitude_difference();
        if difference.abs() > 1.5 * self.params.zone_width() {
            warn!(
                "Longitude {longitude}° is {difference}° from the central meridian of zone {zone}: accuracy degraded"
            );
        }
        Ok(terms)
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn redfearn() -> Result<(), Error> {
        let mga = ProjectionEngine::named("mga")?;
        assert_eq!(mga, ProjectionEngine::default());

        // Validation values computed using the Krüger series, extended to 6th
        // order by Karney (2011). The two sets of series agree at the 0.1 mm level.
        #[rustfmt::skip]
        let cases = [
            // lat,           lon,           zone, easting,           northing
            (-37.554082,     144.046702,     55,   239_116.198_708,   5_839_558.464_411),
            (-37.652_821_14, 143.926_495_54, 54,   758_173.798_354,   5_828_674.340_004),
            (-35.,           149.,           55,   682_516.093_616,   6_125_129.365_375),
            (-35.,           151.,           56,   317_483.906_384,   6_125_129.365_375),
        ];

        for (lat, lon, zone, easting, northing) in cases {
            let grid = mga.project(lat, lon)?;
            assert_eq!(grid.zone, zone);
            assert_float_eq!(grid.easting, easting, abs <= 1e-3);
            assert_float_eq!(grid.northing, northing, abs <= 1e-3);
        }
        Ok(())
    }

    #[test]
    fn convergence_and_scale() -> Result<(), Error> {
        let mga = ProjectionEngine::default();

        // Validation values (Karney, 2011) agree in magnitude. The sign
        // convention differs: Redfearn's convergence is positive east of the
        // central meridian on the southern hemisphere.
        let grid = mga.project(-37.554082, 144.046702)?;
        assert_float_eq!(grid.grid_convergence, -1.801_079_880_015, abs <= 1e-8);
        assert_float_eq!(grid.point_scale_factor, 1.000_438_421_935, abs <= 1e-9);

        let grid = mga.project(-35., 149.)?;
        assert_float_eq!(grid.grid_convergence, 1.147_469_845_450, abs <= 1e-8);
        assert_float_eq!(grid.point_scale_factor, 1.000_010_571_798, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn in_zone() -> Result<(), Error> {
        let mga = ProjectionEngine::default();

        // The natural zone, forced or not, gives the same result
        let natural = mga.project(-35., 149.)?;
        assert_eq!(natural, mga.project_in_zone(-35., 149., 55)?);

        // In the neighbouring zone, the point lands west of the false origin,
        // with the convergence reversed
        let neighbour = mga.project_in_zone(-35., 149., 56)?;
        assert_eq!(neighbour.zone, 56);
        assert!(neighbour.easting < 500_000.);
        assert!(neighbour.grid_convergence < 0.);
        // ... and at a larger scale, being farther from the central meridian
        assert!(neighbour.point_scale_factor > natural.point_scale_factor);
        Ok(())
    }

    #[test]
    fn batches() -> Result<(), Error> {
        let mga = ProjectionEngine::default();
        let points = [
            GeographicPoint::new(-37.554082, 144.046702),
            GeographicPoint::new(90., 144.),
            GeographicPoint::new(-35., 149.),
        ];
        let results = mga.project_all(&points);
        assert_eq!(results.len(), 3);
        assert_eq!(*results[0].as_ref().unwrap(), mga.project(-37.554082, 144.046702)?);
        assert!(matches!(results[1], Err(Error::DegenerateInput(_))));
        assert_eq!(*results[2].as_ref().unwrap(), mga.project(-35., 149.)?);
        Ok(())
    }
}
