use float_eq::assert_float_eq;
use redfearn::prelude::*;

// ----- R E F E R E N C E   V A L U E S ------------------------------------------------

#[test]
fn reference_scenario() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    let grid = mga.project(-37.554082, 144.046702)?;

    // A southern hemisphere point, west of the central meridian of its zone
    assert_eq!(grid.zone, 55);
    assert!((0.0..1_000_000.).contains(&grid.easting));
    assert!((0.0..10_000_000.).contains(&grid.northing));
    assert!(grid.easting < mga.parameters().false_easting());

    // Validation values computed using the Krüger series (Karney, 2011)
    assert_float_eq!(grid.easting, 239_116.198_708, abs <= 1e-3);
    assert_float_eq!(grid.northing, 5_839_558.464_411, abs <= 1e-3);
    assert_float_eq!(grid.grid_convergence, -1.801_079_880, abs <= 1e-8);
    assert_float_eq!(grid.point_scale_factor, 1.000_438_422, abs <= 1e-9);
    Ok(())
}

#[test]
fn utm() -> Result<(), Error> {
    // Validation values from PROJ:
    // echo 12 55 0 0 | cct -d18 +proj=utm +zone=32 | clip
    let utm = ProjectionEngine::named("utm ellps=GRS80")?;

    let grid = utm.project_in_zone(55., 12., 32)?;
    assert_float_eq!(grid.easting, 691_875.632_139_661, abs <= 1e-3);
    assert_float_eq!(grid.northing, 6_098_907.825_005_012, abs <= 1e-3);

    let grid = utm.project_in_zone(-55., 12., 32)?;
    assert_float_eq!(grid.easting, 691_875.632_139_661, abs <= 1e-3);
    assert_float_eq!(grid.northing, -6_098_907.825_005_012, abs <= 1e-3);

    // The southern aspect differs by the false northing only
    let south = ProjectionEngine::named("utm south ellps=GRS80")?;
    let grid = south.project_in_zone(-55., 12., 32)?;
    assert_float_eq!(grid.northing, 10_000_000. - 6_098_907.825_005_012, abs <= 1e-3);

    // And 12°E is in zone 33, by default
    assert_eq!(utm.project(55., 12.)?.zone, 33);
    Ok(())
}

// ----- P R O P E R T I E S ------------------------------------------------------------

#[test]
fn origin_of_zone_zero() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    let params = mga.parameters();
    let grid = mga.project(0., params.zone_0_central_meridian())?;

    assert_eq!(grid.zone, 0);
    assert_float_eq!(grid.easting, params.false_easting(), abs <= 1e-6);
    assert_float_eq!(grid.northing, params.false_northing(), abs <= 1e-6);
    assert_eq!(grid.grid_convergence, 0.);
    assert_eq!(grid.point_scale_factor, params.central_scale_factor());
    Ok(())
}

#[test]
fn scale_on_the_central_meridian() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    for zone in [-3, 0, 1, 30, 55, 60, 75] {
        let central_meridian = mga.parameters().central_meridian(zone);
        for lat in (-17..=17).map(|i| i as f64 * 5.) {
            let grid = mga.project(lat, central_meridian)?;
            assert_eq!(grid.zone, zone);
            assert_float_eq!(grid.point_scale_factor, 0.9996, abs <= 1e-15);
            assert_float_eq!(grid.grid_convergence, 0., abs <= 1e-15);
            assert_float_eq!(grid.easting, 500_000., abs <= 1e-9);
        }
    }
    Ok(())
}

#[test]
fn zones_are_a_step_function_of_longitude() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    let params = *mga.parameters();

    let mut previous = i64::MIN;
    for i in -1600..=1600 {
        let lon = i as f64 * 0.25;
        let zone = mga.project(-20., lon)?.zone;
        assert!(zone >= previous);
        assert!(zone - previous <= 1 || previous == i64::MIN);
        previous = zone;
    }

    // The steps are at the zone edges
    for zone in -70..130 {
        let edge = params.zone_0_western_edge() + zone as f64 * params.zone_width();
        assert_eq!(mga.project(10., edge)?.zone, zone);
        assert_eq!(mga.project(10., edge + 1e-9)?.zone, zone);
        assert_eq!(mga.project(10., edge - 1e-9)?.zone, zone - 1);
    }

    // Far-out longitudes are not clamped
    assert_eq!(mga.project(0., -720.)?.zone, -89);
    assert_eq!(mga.project(0., 1000.)?.zone, 197);
    Ok(())
}

#[test]
fn antisymmetry_around_the_central_meridian() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    for lat in [-60., -37.5, 0., 12.3, 45., 80.] {
        for delta in [0.1, 1., 2.9] {
            let west = mga.project(lat, 147. - delta)?;
            let east = mga.project(lat, 147. + delta)?;
            assert_eq!(west.zone, east.zone);
            assert_float_eq!(west.easting + east.easting, 1_000_000., abs <= 1e-6);
            assert_float_eq!(west.northing, east.northing, abs <= 1e-6);
            assert_float_eq!(west.grid_convergence, -east.grid_convergence, abs <= 1e-12);
            assert_float_eq!(west.point_scale_factor, east.point_scale_factor, abs <= 1e-14);
        }
    }
    Ok(())
}

#[test]
fn northing_increases_with_latitude() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    for lon in [147., 147.5, 149.9] {
        let mut previous = f64::NEG_INFINITY;
        for lat in (-80..=80).map(|i| i as f64) {
            let northing = mga.project(lat, lon)?.northing;
            assert!(northing > previous, "{lat}, {lon}");
            previous = northing;
        }
    }
    Ok(())
}

#[test]
fn determinism() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    let points: Vec<GeographicPoint> = (0..100)
        .map(|i| GeographicPoint::new(-40. + 0.7 * i as f64, 110. + 0.45 * i as f64))
        .collect();

    let first = mga.project_all(&points);
    let second = mga.project_all(&points);
    for (a, b) in first.iter().zip(second.iter()) {
        let (a, b) = (a.as_ref().unwrap(), b.as_ref().unwrap());
        assert_eq!(a.easting.to_bits(), b.easting.to_bits());
        assert_eq!(a.northing.to_bits(), b.northing.to_bits());
        assert_eq!(a.grid_convergence.to_bits(), b.grid_convergence.to_bits());
        assert_eq!(a.point_scale_factor.to_bits(), b.point_scale_factor.to_bits());
    }

    // Selective evaluation through the intermediates gives the same results,
    // in whatever order the quantities are requested
    let p = points[17];
    let terms = mga.terms(p.latitude, p.longitude)?;
    let scale = terms.point_scale_factor();
    let northing = terms.northing();
    assert_eq!(terms.grid_coordinate(), mga.project_point(p)?);
    assert_eq!(scale, first[17].as_ref().unwrap().point_scale_factor);
    assert_eq!(northing, first[17].as_ref().unwrap().northing);
    Ok(())
}

#[test]
fn shared_between_threads() -> Result<(), Error> {
    let mga = ProjectionEngine::default();
    let expected = mga.project(-37.554082, 144.046702)?;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| mga.project(-37.554082, 144.046702)))
            .collect();
        for handle in handles {
            let grid = handle.join().unwrap().unwrap();
            assert_eq!(grid, expected);
        }
    });
    Ok(())
}

// ----- E D G E   C A S E S ------------------------------------------------------------

#[test]
fn poles() {
    let mga = ProjectionEngine::default();
    for lat in [90., -90.] {
        let Err(Error::DegenerateInput(latitude)) = mga.project(lat, 147.) else {
            panic!("Expected degenerate input at latitude {lat}");
        };
        assert_eq!(latitude, lat);
    }
}

#[test]
fn outside_the_domain() {
    let mga = ProjectionEngine::default();
    assert!(matches!(mga.project(91., 147.), Err(Error::InvalidInput(_))));
    assert!(matches!(mga.project(f64::NAN, 147.), Err(Error::InvalidInput(_))));
    assert!(matches!(
        mga.project(0., f64::NEG_INFINITY),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn invalid_parameters() {
    assert!(matches!(
        ProjectionEngine::named("mga zone_width=-6"),
        Err(Error::InvalidParameter("zone_width", _))
    ));
    assert!(matches!(
        ProjectionEngine::named("mga ellps=-6378137,298"),
        Err(Error::InvalidParameter("semimajor_axis", _))
    ));
    assert!(matches!(
        ProjectionEngine::named("mga ellps=6378137,1"),
        Err(Error::InvalidParameter("inverse_flattening", _))
    ));
}
