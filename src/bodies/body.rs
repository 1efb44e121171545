use super::super::constants::{G, STATIONARY_COLOR, SUN_MASS};
use super::super::errors::SimulationError;
use super::Axes;
use super::WorldId;

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// How the gravitational force between two bodies is turned into a change of velocity.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccelerationModel {
    /// dv = F * dt for both bodies. The force is never divided by the body
    /// mass, so the mass only enters through the force magnitude. Every
    /// reference trajectory was produced this way.
    MassIndependent,
    /// dv = F / m * dt.
    Newtonian,
}

impl Default for AccelerationModel {
    fn default() -> Self {
        AccelerationModel::MassIndependent
    }
}

/// Bodies are only built through the validating constructors: there is no
/// `Deserialize`, and the mass cannot be changed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Body {
    id: BodyId, // Index inside the owning world, set by World::register
    world: Option<WorldId>,
    mass: f64,
    pub position: Axes,
    pub velocity: Axes,
    pub color: String,
    pub stationary: bool, // Dominant mass that never moves (e.g., central star)
    path: Vec<Axes>,
    boosted: bool,
    boost_path_index: Option<usize>,
}

impl Body {
    pub fn new(mass: f64, position: Axes, velocity: Axes, color: &str) -> Result<Body, SimulationError> {
        if !mass.is_finite() || mass <= 0. {
            return Err(SimulationError::Configuration(format!("Body mass must be a positive finite number (found {})", mass)));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(SimulationError::Configuration(format!("Body position and velocity must be finite (found {:?} and {:?})", position, velocity)));
        }
        Ok(Body {
            id: BodyId(0),
            world: None,
            mass: mass,
            position: position,
            velocity: velocity,
            color: color.to_string(),
            stationary: false,
            path: vec![position],
            boosted: false,
            boost_path_index: None,
        })
    }

    /// A body whose position never changes. Gravity still updates its velocity.
    pub fn new_stationary(mass: f64, position: Axes, velocity: Axes) -> Result<Body, SimulationError> {
        let mut body = Body::new(mass, position, velocity, STATIONARY_COLOR)?;
        body.stationary = true;
        Ok(body)
    }

    pub fn sun() -> Result<Body, SimulationError> {
        Body::new_stationary(SUN_MASS, Axes::default(), Axes::default())
    }

    pub fn with_color(mut self, color: &str) -> Body {
        self.color = color.to_string();
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    pub fn is_registered(&self) -> bool {
        self.world.is_some()
    }

    pub(crate) fn attach(&mut self, world: WorldId, id: BodyId) {
        self.world = Some(world);
        self.id = id;
    }

    pub fn path(&self) -> &[Axes] {
        &self.path
    }

    pub fn boosted(&self) -> bool {
        self.boosted
    }

    pub fn boost_path_index(&self) -> Option<usize> {
        self.boost_path_index
    }

    /// Path split at the first boost: (before, after). The point where the
    /// boost happened is the last point of the first segment and the first
    /// point of the second one, so both segments can be drawn as lines.
    pub fn path_segments(&self) -> (&[Axes], &[Axes]) {
        match self.boost_path_index {
            Some(index) => (&self.path[..index], &self.path[index-1..]),
            None => (&self.path[..], &self.path[self.path.len()..]),
        }
    }

    /// Vector from `self` to `other` and its length. Coincident (or non-finite)
    /// positions are a domain error since the force would divide by zero.
    pub fn separation(&self, other: &Body) -> Result<(Axes, f64), SimulationError> {
        let dx = other.position.x - self.position.x;
        let dy = other.position.y - self.position.y;
        let dz = other.position.z - self.position.z;
        let distance = (dx*dx + dy*dy + dz*dz).sqrt();
        if !(distance > 0.) || !distance.is_finite() {
            return Err(SimulationError::Domain(format!("Zero-distance singularity between bodies {} and {} (separation {})", self.id.0, other.id.0, distance)));
        }
        Ok((Axes::new(dx, dy, dz), distance))
    }

    /// Mutual gravitational pull between `self` and `other`, applied to both velocities.
    pub fn gravity(&mut self, other: &mut Body, time_step: f64, acceleration_model: AccelerationModel) -> Result<(), SimulationError> {
        let (separation, distance) = self.separation(other)?;
        let unit_x = separation.x / distance;
        let unit_y = separation.y / distance;
        let unit_z = separation.z / distance;
        let force_magnitude = G * self.mass * other.mass / distance.powi(2);
        let force = Axes {
            x: unit_x * force_magnitude,
            y: unit_y * force_magnitude,
            z: unit_z * force_magnitude,
        };

        let mut switch = 1.;
        for body in [self, other] {
            // NOTE: MassIndependent does not divide the force by the body
            // mass. Reference trajectories depend on it, do not "fix" it here,
            // switch to AccelerationModel::Newtonian instead.
            let factor = match acceleration_model {
                AccelerationModel::MassIndependent => time_step * switch,
                AccelerationModel::Newtonian => time_step * switch / body.mass,
            };
            body.velocity.x += force.x * factor;
            body.velocity.y += force.y * factor;
            body.velocity.z += force.z * factor;
            switch *= -1.;
        }
        Ok(())
    }

    /// Explicit Euler position update. Stationary bodies neither move nor grow their path.
    pub fn move_body(&mut self, time_step: f64) {
        if self.stationary {
            return;
        }
        self.position.x += self.velocity.x * time_step;
        self.position.y += self.velocity.y * time_step;
        self.position.z += self.velocity.z * time_step;
        self.path.push(self.position);
    }

    /// Instantaneous velocity change (not a force). Each call adds again.
    pub fn boost_velocity(&mut self, dx: f64, dy: f64, dz: f64) {
        self.velocity.x += dx;
        self.velocity.y += dy;
        self.velocity.z += dz;
        if !self.boosted {
            self.boost_path_index = Some(self.path.len());
        }
        self.boosted = true;
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        let dx = self.position.x - other.position.x;
        let dy = self.position.y - other.position.y;
        let dz = self.position.z - other.position.z;
        (dx*dx + dy*dy + dz*dz).sqrt()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_2()
    }

    pub fn momentum(&self) -> Axes {
        Axes {
            x: self.mass * self.velocity.x,
            y: self.mass * self.velocity.y,
            z: self.mass * self.velocity.z,
        }
    }

    pub fn angular_momentum(&self) -> Axes {
        Axes {
            x: self.mass*(self.position.y*self.velocity.z - self.position.z*self.velocity.y),
            y: self.mass*(self.position.z*self.velocity.x - self.position.x*self.velocity.z),
            z: self.mass*(self.position.x*self.velocity.y - self.position.y*self.velocity.x),
        }
    }
}

