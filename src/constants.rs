//// Simulation units
// Masses, lengths and times are in arbitrary simulation units, there is no
// explicit gravitational constant (G = 1).
pub const G: f64 = 1.;

pub const DEFAULT_TIME_STEP: f64 = 1.;
pub const DEFAULT_WORLD_SIZE: f64 = 500.; // Axis limits are [-size/2, size/2]
pub const DEFAULT_N_FRAMES: usize = 500;
pub const DEFAULT_HISTORIC_SNAPSHOT_PERIOD: usize = 1; // frames

//// Bodies
pub const DEFAULT_COLOR: &str = "black";
pub const STATIONARY_COLOR: &str = "yellow";
pub const SUN_MASS: f64 = 1000.;

//// Reference planet (orbiting the sun)
pub const PLANET_MASS: f64 = 10.;
pub const PLANET_POSITION: [f64; 3] = [100., 0., 0.];
pub const PLANET_VELOCITY: [f64; 3] = [0., 10., 0.];
pub const PLANET_COLOR: &str = "blue";

//// Scripted perturbation
pub const BOOST_FRAME: usize = 62;
pub const BOOST_MAGNITUDE: f64 = 2.5;
