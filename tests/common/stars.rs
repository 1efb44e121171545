extern crate orrery;

#[allow(dead_code)]
pub fn sun() -> orrery::Body {
    orrery::Body::sun().unwrap()
}

#[allow(dead_code)]
pub fn moving_star(star_mass: f64) -> orrery::Body {
    orrery::Body::new(star_mass, orrery::Axes{x:0., y:0., z:0.}, orrery::Axes{x:0., y:0., z:0.}, "orange").unwrap()
}
