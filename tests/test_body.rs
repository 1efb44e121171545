extern crate orrery;
extern crate assert_approx_eq;

mod common;
use assert_approx_eq::assert_approx_eq;
use orrery::{Axes, Body, AccelerationModel};

#[test]
fn new_body_starts_its_path_at_the_initial_position() {
    let planet = common::planets::reference_planet();
    assert_eq!(planet.path(), &[Axes::new(100., 0., 0.)]);
    assert!(!planet.boosted());
    assert!(!planet.stationary);
    assert!(!planet.is_registered());
    assert_eq!(planet.color, "blue");
}

#[test]
fn zero_or_negative_mass_is_rejected() {
    for mass in [0., -1., f64::NAN, f64::INFINITY].iter() {
        let result = Body::new(*mass, Axes::default(), Axes::default(), "black");
        match result {
            Err(e) => assert!(e.is_configuration(), "{}", e),
            Ok(_) => panic!("Mass {} should have been rejected", mass),
        }
    }
    assert!(Body::new_stationary(0., Axes::default(), Axes::default()).is_err());
}

#[test]
fn sun_is_stationary_yellow_and_massive() {
    let sun = common::stars::sun();
    assert!(sun.stationary);
    assert_eq!(sun.mass(), 1000.);
    assert_eq!(sun.color, "yellow");
    assert_eq!(sun.position, Axes::default());
    assert_eq!(sun, Body::new_stationary(1000., Axes::default(), Axes::default()).unwrap());
}

#[test]
fn stationary_move_keeps_position_and_path() {
    let mut sun = Body::new_stationary(1000., Axes::new(1., 2., 3.), Axes::new(4., 5., 6.)).unwrap();
    for _ in 0..10 {
        sun.move_body(1.);
    }
    assert_eq!(sun.position, Axes::new(1., 2., 3.));
    // The stationary body never grows its path
    assert_eq!(sun.path().len(), 1);
}

#[test]
fn move_integrates_position_with_explicit_euler() {
    let mut planet = common::planets::reference_planet();
    planet.move_body(0.5);
    assert_eq!(planet.position, Axes::new(100., 5., 0.));
    planet.velocity = Axes::new(-2., 0., 4.);
    planet.move_body(2.);
    assert_eq!(planet.position, Axes::new(96., 5., 8.));
    assert_eq!(planet.path(), &[Axes::new(100., 0., 0.), Axes::new(100., 5., 0.), Axes::new(96., 5., 8.)]);
}

#[test]
fn path_grows_by_one_per_move() {
    let mut planet = common::planets::reference_planet();
    let initial_length = planet.path().len();
    let k = 37;
    for _ in 0..k {
        planet.move_body(1.);
    }
    assert_eq!(planet.path().len(), initial_length + k);
    assert_eq!(*planet.path().last().unwrap(), planet.position);
}

#[test]
fn gravity_deltas_are_opposite_and_mass_independent() {
    let mut planet = common::planets::reference_planet();
    let mut sun = common::stars::sun();
    let planet_velocity = planet.velocity;
    let sun_velocity = sun.velocity;

    planet.gravity(&mut sun, 1., AccelerationModel::MassIndependent).unwrap();

    let planet_delta = Axes::new(planet.velocity.x - planet_velocity.x, planet.velocity.y - planet_velocity.y, planet.velocity.z - planet_velocity.z);
    let sun_delta = Axes::new(sun.velocity.x - sun_velocity.x, sun.velocity.y - sun_velocity.y, sun.velocity.z - sun_velocity.z);
    assert_eq!(planet_delta.x, -sun_delta.x);
    assert_eq!(planet_delta.y, -sun_delta.y);
    assert_eq!(planet_delta.z, -sun_delta.z);
    // F = 10 * 1000 / 100^2 = 1 towards the sun. The 100x heavier sun gets
    // the same velocity change as the planet: the force is not divided by the mass.
    assert_eq!(planet_delta, Axes::new(-1., 0., 0.));
    assert_eq!(sun_delta, Axes::new(1., 0., 0.));
}

#[test]
fn gravity_scales_with_time_step_and_inverse_square_distance() {
    let mut body_a = common::planets::planet_at(2., 0., 0., 0.);
    let mut body_b = common::planets::planet_at(3., 0., 0., 2.);
    body_a.gravity(&mut body_b, 0.5, AccelerationModel::MassIndependent).unwrap();
    // F = 2 * 3 / 2^2 = 1.5 along +z, dv = F * dt
    assert_approx_eq!(body_a.velocity.z, 0.75, 1e-15);
    assert_approx_eq!(body_b.velocity.z, -0.75, 1e-15);
    assert_eq!(body_a.velocity.x, 0.);
    assert_eq!(body_b.velocity.y, 0.);
}

#[test]
fn newtonian_model_divides_by_each_mass() {
    let mut planet = common::planets::reference_planet();
    let mut sun = common::stars::sun();
    planet.gravity(&mut sun, 1., AccelerationModel::Newtonian).unwrap();
    assert_approx_eq!(planet.velocity.x, -0.1, 1e-15);
    assert_approx_eq!(planet.velocity.y, 10., 1e-15);
    assert_approx_eq!(sun.velocity.x, 0.001, 1e-15);
}

#[test]
fn coincident_bodies_raise_a_domain_error() {
    let mut body_a = common::planets::planet_at(1., 5., 5., 5.);
    let mut body_b = common::planets::planet_at(2., 5., 5., 5.);
    body_a.velocity = Axes::new(1., 2., 3.);

    let result = body_a.gravity(&mut body_b, 1., AccelerationModel::MassIndependent);
    match result {
        Err(e) => assert!(e.is_domain(), "{}", e),
        Ok(_) => panic!("Zero separation must not be silently accepted"),
    }
    // Nothing was applied
    assert_eq!(body_a.velocity, Axes::new(1., 2., 3.));
    assert_eq!(body_b.velocity, Axes::default());
    assert!(body_a.velocity.is_finite() && body_b.velocity.is_finite());
}

#[test]
fn boost_adds_velocity_and_marks_the_body() {
    let mut planet = common::planets::reference_planet();
    planet.boost_velocity(2.5, 0., 0.);
    assert_eq!(planet.velocity, Axes::new(2.5, 10., 0.));
    assert!(planet.boosted());

    planet.move_body(1.);
    assert_eq!(planet.position, Axes::new(102.5, 10., 0.));
}

#[test]
fn repeated_boosts_keep_adding() {
    let mut planet = common::planets::reference_planet();
    planet.boost_velocity(1., 0., 0.);
    planet.move_body(1.);
    planet.boost_velocity(1., 0., -1.);
    assert_eq!(planet.velocity, Axes::new(2., 10., -1.));
    // Segments are split at the first boost only
    assert_eq!(planet.boost_path_index(), Some(1));
}

#[test]
fn path_segments_share_the_boost_point() {
    let mut planet = common::planets::reference_planet();
    let (pre_boost_path, post_boost_path) = planet.path_segments();
    assert_eq!(pre_boost_path.len(), 1);
    assert!(post_boost_path.is_empty());

    for _ in 0..3 {
        planet.move_body(1.);
    }
    planet.boost_velocity(0., 0., 2.5);
    for _ in 0..2 {
        planet.move_body(1.);
    }

    let (pre_boost_path, post_boost_path) = planet.path_segments();
    assert_eq!(pre_boost_path.len(), 4);
    assert_eq!(post_boost_path.len(), 3);
    assert_eq!(pre_boost_path.last(), post_boost_path.first());
    assert_eq!(post_boost_path[1].z, 2.5);
}

#[test]
fn diagnostics_follow_classical_definitions() {
    let mut body = common::planets::planet_at(2., 1., 0., 0.);
    body.velocity = Axes::new(0., 3., 4.);
    assert_eq!(body.kinetic_energy(), 25.);
    assert_eq!(body.momentum(), Axes::new(0., 6., 8.));
    assert_eq!(body.angular_momentum(), Axes::new(0., -8., 6.));
    let other = common::planets::planet_at(1., 4., 4., 0.);
    assert_eq!(body.distance_to(&other), 5.);
}
