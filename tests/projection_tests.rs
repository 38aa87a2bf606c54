use approx::assert_relative_eq;
use statchart::core::{MAX_LATITUDE_DEG, MercatorProjection};

#[test]
fn origin_projects_onto_the_translation() {
    let projection = MercatorProjection::new(100.0, 360.0, 266.0).expect("valid projection");

    let point = projection.project(0.0, 0.0);
    assert_relative_eq!(point.x, 360.0, epsilon = 1e-9);
    assert_relative_eq!(point.y, 266.0, epsilon = 1e-9);
}

#[test]
fn longitude_maps_linearly_in_radians() {
    let projection = MercatorProjection::new(100.0, 0.0, 0.0).expect("valid projection");

    let east = projection.project(180.0, 0.0);
    let west = projection.project(-180.0, 0.0);
    assert_relative_eq!(east.x, 100.0 * std::f64::consts::PI, epsilon = 1e-9);
    assert_relative_eq!(west.x, -east.x, epsilon = 1e-9);
}

#[test]
fn northern_latitudes_move_up_in_pixel_space() {
    let projection = MercatorProjection::new(100.0, 0.0, 200.0).expect("valid projection");

    let north = projection.project(0.0, 50.0);
    let south = projection.project(0.0, -50.0);
    assert!(north.y < 200.0);
    assert!(south.y > 200.0);
    // Symmetric about the equator.
    assert_relative_eq!(200.0 - north.y, south.y - 200.0, epsilon = 1e-9);
}

#[test]
fn polar_input_saturates_to_a_finite_value() {
    let projection = MercatorProjection::new(100.0, 0.0, 0.0).expect("valid projection");

    let pole = projection.project(0.0, 90.0);
    assert!(pole.y.is_finite());

    let cutoff = projection.project(0.0, MAX_LATITUDE_DEG);
    assert_relative_eq!(pole.y, cutoff.y, epsilon = 1e-9);

    let south_pole = projection.project(0.0, -90.0);
    assert!(south_pole.y.is_finite());
    assert_relative_eq!(south_pole.y, -pole.y, epsilon = 1e-9);
}

#[test]
fn projection_is_deterministic_across_calls() {
    let projection = MercatorProjection::new(100.0, 360.0, 266.0).expect("valid projection");

    let first = projection.project(-73.9, 40.7);
    let second = projection.project(-73.9, 40.7);
    assert_eq!(first, second);
}

#[test]
fn project_ring_preserves_vertex_order() {
    let projection = MercatorProjection::new(100.0, 0.0, 0.0).expect("valid projection");
    let ring = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)];

    let projected = projection.project_ring(&ring);
    assert_eq!(projected.len(), 4);
    assert_eq!(projected[0], projected[3]);
    assert!(projected[1].x > projected[0].x);
}

#[test]
fn invalid_projection_parameters_are_rejected() {
    assert!(MercatorProjection::new(0.0, 0.0, 0.0).is_err());
    assert!(MercatorProjection::new(-1.0, 0.0, 0.0).is_err());
    assert!(MercatorProjection::new(100.0, f64::NAN, 0.0).is_err());
}
