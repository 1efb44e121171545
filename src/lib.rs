extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate csv;
extern crate time;

pub mod constants;
pub mod errors;
pub use self::errors::SimulationError;

mod bodies;
pub use self::bodies::Axes;
pub use self::bodies::Body;
pub use self::bodies::BodyId;
pub use self::bodies::World;
pub use self::bodies::WorldId;
pub use self::bodies::AccelerationModel;
pub use self::bodies::interaction_pairs;

mod integrator;
pub use self::integrator::*;

pub mod scenario;
pub use self::scenario::{Scenario, BodyDescription, BoostDirection};

pub mod tools;
