//! JSON description of a run and the built-in planet/sun cases.
//!
//! ```text
//! {
//!     "time_step": 1.0,
//!     "n_frames": 500,
//!     "bodies": [
//!         {"mass": 10.0, "position": {"x": 100.0, "y": 0.0, "z": 0.0}, "velocity": {"x": 0.0, "y": 10.0, "z": 0.0}, "color": "blue"},
//!         {"mass": 1000.0, "stationary": true}
//!     ],
//!     "boosts": [{"frame": 62, "body": 0, "velocity": {"x": 2.5, "y": 0.0, "z": 0.0}}]
//! }
//! ```
use std::fs::File;
use std::io::{Read, BufReader};
use std::path::Path;
use super::bodies::{Axes, Body, BodyId, World, AccelerationModel};
use super::constants::{DEFAULT_TIME_STEP, DEFAULT_WORLD_SIZE, DEFAULT_N_FRAMES, DEFAULT_HISTORIC_SNAPSHOT_PERIOD};
use super::constants::{DEFAULT_COLOR, STATIONARY_COLOR, SUN_MASS, BOOST_FRAME, BOOST_MAGNITUDE};
use super::constants::{PLANET_MASS, PLANET_POSITION, PLANET_VELOCITY, PLANET_COLOR};
use super::errors::SimulationError;
use super::integrator::{FrameDriver, ScheduledBoost};

fn default_time_step() -> f64 { DEFAULT_TIME_STEP }
fn default_size() -> f64 { DEFAULT_WORLD_SIZE }
fn default_n_frames() -> usize { DEFAULT_N_FRAMES }
fn default_historic_snapshot_period() -> usize { DEFAULT_HISTORIC_SNAPSHOT_PERIOD }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyDescription {
    pub mass: f64,
    #[serde(default)]
    pub position: Axes,
    #[serde(default)]
    pub velocity: Axes,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub stationary: bool,
}

impl BodyDescription {
    pub fn build(&self) -> Result<Body, SimulationError> {
        if self.stationary {
            let body = Body::new_stationary(self.mass, self.position, self.velocity)?;
            Ok(body.with_color(self.color.as_deref().unwrap_or(STATIONARY_COLOR)))
        } else {
            Body::new(self.mass, self.position, self.velocity, self.color.as_deref().unwrap_or(DEFAULT_COLOR))
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoostDirection {
    X,
    Y,
    Z,
}

impl BoostDirection {
    pub fn all() -> [BoostDirection; 3] {
        [BoostDirection::X, BoostDirection::Y, BoostDirection::Z]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoostDirection::X => "x",
            BoostDirection::Y => "y",
            BoostDirection::Z => "z",
        }
    }

    pub fn velocity(&self, magnitude: f64) -> Axes {
        match self {
            BoostDirection::X => Axes::new(magnitude, 0., 0.),
            BoostDirection::Y => Axes::new(0., magnitude, 0.),
            BoostDirection::Z => Axes::new(0., 0., magnitude),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_n_frames")]
    pub n_frames: usize,
    #[serde(default)]
    pub acceleration_model: AccelerationModel,
    #[serde(default = "default_historic_snapshot_period")]
    pub historic_snapshot_period: usize,
    pub bodies: Vec<BodyDescription>,
    #[serde(default)]
    pub boosts: Vec<ScheduledBoost>,
}

impl Scenario {
    /// Planet of mass 10 at (100, 0, 0) moving at (0, 10, 0) around a
    /// stationary sun of mass 1000 at the origin. The planet is registered first.
    pub fn planet_and_sun() -> Scenario {
        Scenario {
            time_step: DEFAULT_TIME_STEP,
            size: DEFAULT_WORLD_SIZE,
            n_frames: DEFAULT_N_FRAMES,
            acceleration_model: AccelerationModel::default(),
            historic_snapshot_period: DEFAULT_HISTORIC_SNAPSHOT_PERIOD,
            bodies: vec![
                BodyDescription {
                    mass: PLANET_MASS,
                    position: Axes::from_array(PLANET_POSITION),
                    velocity: Axes::from_array(PLANET_VELOCITY),
                    color: Some(PLANET_COLOR.to_string()),
                    stationary: false,
                },
                BodyDescription {
                    mass: SUN_MASS,
                    position: Axes::default(),
                    velocity: Axes::default(),
                    color: Some(STATIONARY_COLOR.to_string()),
                    stationary: true,
                },
            ],
            boosts: Vec::new(),
        }
    }

    /// `planet_and_sun` with the planet boosted by 2.5 along `direction` at frame 62.
    pub fn boosted(direction: BoostDirection) -> Scenario {
        let mut scenario = Scenario::planet_and_sun();
        scenario.boosts.push(ScheduledBoost {
            frame: BOOST_FRAME,
            body: BodyId(0),
            velocity: direction.velocity(BOOST_MAGNITUDE),
        });
        scenario
    }

    pub fn from_json_str(json_encoded: &str) -> Result<Scenario, SimulationError> {
        let scenario: Scenario = serde_json::from_str(json_encoded)?;
        Ok(scenario)
    }

    pub fn from_json_file(scenario_path: &Path) -> Result<Scenario, SimulationError> {
        let scenario_file = match File::open(scenario_path) {
            Ok(f) => f,
            Err(why) => return Err(SimulationError::Configuration(format!("Couldn't open {}: {}", scenario_path.display(), why))),
        };
        let mut json_encoded = String::new();
        BufReader::new(scenario_file).read_to_string(&mut json_encoded)?;
        Scenario::from_json_str(&json_encoded)
    }

    pub fn to_json_string(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates everything eagerly and returns a driver ready to iterate.
    pub fn build(&self) -> Result<FrameDriver, SimulationError> {
        if self.bodies.is_empty() {
            return Err(SimulationError::Configuration("A scenario needs at least one body".to_string()));
        }
        let mut world = World::with_size(self.time_step, self.size)?
                            .with_acceleration_model(self.acceleration_model);
        for description in self.bodies.iter() {
            world.register(description.build()?)?;
        }
        let mut driver = FrameDriver::new(world, self.n_frames, self.historic_snapshot_period)?;
        for boost in self.boosts.iter() {
            driver.schedule_boost(*boost)?;
        }
        Ok(driver)
    }
}
