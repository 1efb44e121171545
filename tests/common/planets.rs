extern crate orrery;

#[allow(dead_code)]
pub fn reference_planet() -> orrery::Body {
    let planet_mass: f64 = 10.;
    let planet_position = orrery::Axes{x:100., y:0., z:0.};
    let planet_velocity = orrery::Axes{x:0., y:10., z:0.};
    orrery::Body::new(planet_mass, planet_position, planet_velocity, "blue").unwrap()
}

#[allow(dead_code)]
pub fn planet_at(mass: f64, x: f64, y: f64, z: f64) -> orrery::Body {
    orrery::Body::new(mass, orrery::Axes{x:x, y:y, z:z}, orrery::Axes{x:0., y:0., z:0.}, "black").unwrap()
}

#[allow(dead_code)]
pub fn basic_configuration() -> Vec<orrery::Body> {
    vec![
        orrery::Body::new(10., orrery::Axes{x:100., y:0., z:0.}, orrery::Axes{x:0., y:10., z:0.}, "blue").unwrap(),
        orrery::Body::new(5., orrery::Axes{x:-150., y:20., z:5.}, orrery::Axes{x:0., y:-8., z:0.5}, "green").unwrap(),
        orrery::Body::new(2., orrery::Axes{x:0., y:200., z:-10.}, orrery::Axes{x:7., y:0., z:0.}, "red").unwrap(),
    ]
}
