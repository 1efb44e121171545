use std::sync::atomic::{AtomicUsize, Ordering};
use super::super::constants::{G, DEFAULT_WORLD_SIZE};
use super::super::errors::SimulationError;
use super::{Axes, Body, BodyId, AccelerationModel};

static NEXT_WORLD_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct WorldId(pub usize);

/// A set of bodies sharing one clock.
///
/// Bodies interact in registration order: for every tick, all gravitational
/// pulls are computed from the current positions first and only then every
/// body moves.
///
/// A clone is a new world: it gets its own id and owns copies of the bodies.
#[derive(Debug, Serialize, PartialEq)]
pub struct World {
    id: WorldId,
    time_step: f64,
    size: f64,
    pub acceleration_model: AccelerationModel,
    bodies: Vec<Body>,
    n_ticks: usize,
}

fn next_world_id() -> WorldId {
    WorldId(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
}

impl Clone for World {
    fn clone(&self) -> World {
        let id = next_world_id();
        let mut bodies = self.bodies.clone();
        for (i, body) in bodies.iter_mut().enumerate() {
            body.attach(id, BodyId(i));
        }
        World {
            id: id,
            time_step: self.time_step,
            size: self.size,
            acceleration_model: self.acceleration_model,
            bodies: bodies,
            n_ticks: self.n_ticks,
        }
    }
}

impl World {
    pub fn new(time_step: f64) -> Result<World, SimulationError> {
        World::with_size(time_step, DEFAULT_WORLD_SIZE)
    }

    pub fn with_size(time_step: f64, size: f64) -> Result<World, SimulationError> {
        if !time_step.is_finite() || time_step <= 0. {
            return Err(SimulationError::Configuration(format!("Time step must be a positive finite number (found {})", time_step)));
        }
        if !size.is_finite() || size <= 0. {
            return Err(SimulationError::Configuration(format!("World size must be a positive finite number (found {})", size)));
        }
        Ok(World {
            id: next_world_id(),
            time_step: time_step,
            size: size,
            acceleration_model: AccelerationModel::default(),
            bodies: Vec::new(),
            n_ticks: 0,
        })
    }

    pub fn with_acceleration_model(mut self, acceleration_model: AccelerationModel) -> World {
        self.acceleration_model = acceleration_model;
        self
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Drawing bounds, the same on the three axes.
    pub fn axis_limits(&self) -> (f64, f64) {
        (-self.size/2., self.size/2.)
    }

    pub fn n_ticks(&self) -> usize {
        self.n_ticks
    }

    pub fn n_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Hands the body over to this world. A body can only ever be registered once.
    pub fn register(&mut self, mut body: Body) -> Result<BodyId, SimulationError> {
        if let Some(owner) = body.world() {
            return Err(SimulationError::Configuration(format!("Body {} already belongs to world {}", body.id().0, owner.0)));
        }
        let id = BodyId(self.bodies.len());
        body.attach(self.id, id);
        self.bodies.push(body);
        Ok(id)
    }

    pub fn check_ownership(&self) -> Result<(), SimulationError> {
        for (i, body) in self.bodies.iter().enumerate() {
            if body.world() != Some(self.id) || body.id() != BodyId(i) {
                return Err(SimulationError::Configuration(format!("Body #{} ({:?}, {:?}) is not owned by world {}", i, body.id(), body.world(), self.id.0)));
            }
        }
        Ok(())
    }

    /// Gravity phase: every unordered pair interacts exactly once.
    /// Returns the number of pairs evaluated.
    ///
    /// All separations are checked before any velocity changes, so a
    /// singular pair leaves the whole world untouched.
    pub fn step_gravity(&mut self) -> Result<usize, SimulationError> {
        for (i, j) in interaction_pairs(self.bodies.len()) {
            self.bodies[i].separation(&self.bodies[j])?;
        }
        let time_step = self.time_step;
        let acceleration_model = self.acceleration_model;
        let mut n_interactions = 0;
        for (i, j) in interaction_pairs(self.bodies.len()) {
            let (head, tail) = self.bodies.split_at_mut(j);
            head[i].gravity(&mut tail[0], time_step, acceleration_model)?;
            n_interactions += 1;
        }
        Ok(n_interactions)
    }

    /// Motion phase: each move only reads the body's own state.
    pub fn step_motion(&mut self) {
        for body in self.bodies.iter_mut() {
            body.move_body(self.time_step);
        }
        self.n_ticks += 1;
    }

    pub fn tick(&mut self) -> Result<(), SimulationError> {
        self.step_gravity()?;
        self.step_motion();
        Ok(())
    }

    pub fn boost(&mut self, id: BodyId, dx: f64, dy: f64, dz: f64) -> Result<(), SimulationError> {
        match self.bodies.get_mut(id.0) {
            Some(body) => {
                body.boost_velocity(dx, dy, dz);
                Ok(())
            },
            None => Err(SimulationError::Configuration(format!("World {} has no body {}", self.id.0, id.0))),
        }
    }

    pub fn compute_total_energy(&self) -> f64 {
        let mut e_kin = 0.;
        let mut e_pot = 0.;

        for body in self.bodies.iter() {
            e_kin += body.kinetic_energy();
        }
        for (i, j) in interaction_pairs(self.bodies.len()) {
            let body_a = &self.bodies[i];
            let body_b = &self.bodies[j];
            e_pot -= G*body_a.mass()*body_b.mass()/body_a.distance_to(body_b);
        }
        e_kin + e_pot
    }

    pub fn compute_total_momentum(&self) -> Axes {
        let mut total_momentum = Axes::default();
        for body in self.bodies.iter() {
            let momentum = body.momentum();
            total_momentum.x += momentum.x;
            total_momentum.y += momentum.y;
            total_momentum.z += momentum.z;
        }
        total_momentum
    }

    pub fn compute_total_angular_momentum(&self) -> f64 {
        let mut total_angular_momentum = Axes::default();
        for body in self.bodies.iter() {
            let angular_momentum = body.angular_momentum();
            total_angular_momentum.x += angular_momentum.x;
            total_angular_momentum.y += angular_momentum.y;
            total_angular_momentum.z += angular_momentum.z;
        }
        total_angular_momentum.norm()
    }

    pub fn center_of_mass(&self) -> (Axes, Axes) {
        calculate_center_of_mass(&self.bodies)
    }
}

/// Unordered pairs (i, j) with i < j, in the order the gravity phase visits them.
pub fn interaction_pairs(n_bodies: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n_bodies).flat_map(move |i| (i+1..n_bodies).map(move |j| (i, j)))
}

pub fn calculate_center_of_mass(bodies: &[Body]) -> (Axes, Axes) {
    let mut center_of_mass_position = Axes::default();
    let mut center_of_mass_velocity = Axes::default();
    let mut center_of_mass_mass = 0.;

    for body in bodies.iter() {
        center_of_mass_position.x += body.position.x*body.mass();
        center_of_mass_position.y += body.position.y*body.mass();
        center_of_mass_position.z += body.position.z*body.mass();
        center_of_mass_velocity.x += body.velocity.x*body.mass();
        center_of_mass_velocity.y += body.velocity.y*body.mass();
        center_of_mass_velocity.z += body.velocity.z*body.mass();
        center_of_mass_mass += body.mass();
    }
    if center_of_mass_mass > 0. {
        center_of_mass_position.x /= center_of_mass_mass;
        center_of_mass_position.y /= center_of_mass_mass;
        center_of_mass_position.z /= center_of_mass_mass;
        center_of_mass_velocity.x /= center_of_mass_mass;
        center_of_mass_velocity.y /= center_of_mass_mass;
        center_of_mass_velocity.z /= center_of_mass_mass;
    }
    (center_of_mass_position, center_of_mass_velocity)
}
