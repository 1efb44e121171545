extern crate assert_approx_eq;
extern crate orrery;
use self::assert_approx_eq::assert_approx_eq;

#[allow(dead_code)]
pub fn planet_and_sun_world() -> orrery::World {
    let (time_step, size, _n_frames, _historic_snapshot_period) = super::simulation_properties();
    let mut world = orrery::World::with_size(time_step, size).unwrap();
    world.register(super::planets::reference_planet()).unwrap();
    world.register(super::stars::sun()).unwrap();
    world
}

#[allow(dead_code)]
pub fn tick_n(world: &mut orrery::World, n_ticks: usize) {
    for _ in 0..n_ticks {
        world.tick().unwrap();
    }
}

#[allow(dead_code)]
pub fn assert_axes(axes: orrery::Axes, expected: orrery::Axes, precision: f64) {
    assert_approx_eq!(axes.x, expected.x, precision);
    assert_approx_eq!(axes.y, expected.y, precision);
    assert_approx_eq!(axes.z, expected.z, precision);
}

/// Bit-for-bit comparison of every body of two worlds.
#[allow(dead_code)]
pub fn assert_identical(world: &orrery::World, parallel_world: &orrery::World) {
    assert_eq!(world.n_bodies(), parallel_world.n_bodies());
    for (body, parallel_body) in world.bodies().iter().zip(parallel_world.bodies().iter()) {
        assert_eq!(body.position, parallel_body.position);
        assert_eq!(body.velocity, parallel_body.velocity);
        assert_eq!(body.path(), parallel_body.path());
        assert_eq!(body.boosted(), parallel_body.boosted());
    }
}
