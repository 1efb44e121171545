use std::io::Write;
use super::{Integrator, Progress};
use super::output::write_historic_snapshot;
use super::super::bodies::{Axes, BodyId, World};
use super::super::errors::SimulationError;
use super::super::tools::{utc_timestamp, calculate_path_extent};

/// Velocity boost applied to one body at a given frame.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledBoost {
    pub frame: usize,
    pub body: BodyId,
    pub velocity: Axes,
}

/// Advances a world one frame at a time, like an animation callback would.
///
/// A frame is the gravity phase, then any boost scheduled for that frame,
/// then the motion phase. Boosts therefore change velocities after the
/// gravitational kick and before the bodies move.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameDriver {
    pub world: World,
    pub n_frames: usize,
    current_frame: usize,
    boosts: Vec<ScheduledBoost>,
    pub historic_snapshot_period: usize, // frames
}

impl FrameDriver {
    pub fn new(world: World, n_frames: usize, historic_snapshot_period: usize) -> Result<FrameDriver, SimulationError> {
        if historic_snapshot_period == 0 {
            return Err(SimulationError::Configuration("Historic snapshot period must be at least one frame".to_string()));
        }
        world.check_ownership()?;
        Ok(FrameDriver {
            world: world,
            n_frames: n_frames,
            current_frame: 0,
            boosts: Vec::new(),
            historic_snapshot_period: historic_snapshot_period,
        })
    }

    pub fn schedule_boost(&mut self, boost: ScheduledBoost) -> Result<(), SimulationError> {
        if self.world.body(boost.body).is_none() {
            return Err(SimulationError::Configuration(format!("Boost scheduled for unknown body {}", boost.body.0)));
        }
        if !boost.velocity.is_finite() {
            return Err(SimulationError::Configuration(format!("Boost velocity must be finite (found {:?})", boost.velocity)));
        }
        if boost.frame >= self.n_frames {
            println!("[WARNING {} UTC] Boost for body {} at frame {} will never happen ({} frames)", utc_timestamp(), boost.body.0, boost.frame, self.n_frames);
        }
        self.boosts.push(boost);
        Ok(())
    }

    pub fn boosts(&self) -> &[ScheduledBoost] {
        &self.boosts
    }

    pub fn is_completed(&self) -> bool {
        self.current_frame >= self.n_frames
    }

    fn report_completion(&self) {
        let (_, upper_limit) = self.world.axis_limits();
        for body in self.world.bodies().iter() {
            let extent = calculate_path_extent(body.path());
            if extent > upper_limit {
                println!("[WARNING {} UTC] Body {} reached {:0.3}, outside the drawing area (+/-{:0.3})", utc_timestamp(), body.id().0, extent, upper_limit);
            }
        }
    }
}

impl Integrator for FrameDriver {

    fn get_n_bodies(&self) -> usize {
        self.world.n_bodies()
    }

    fn get_current_frame(&self) -> usize {
        self.current_frame
    }

    fn iterate<W: Write>(&mut self, history_writer: &mut csv::Writer<W>, silent_mode: bool) -> Result<Progress, SimulationError> {
        if self.is_completed() {
            return Ok(Progress::Completed);
        }
        let frame = self.current_frame;

        self.world.step_gravity()?;
        for boost in self.boosts.iter().filter(|boost| boost.frame == frame) {
            self.world.boost(boost.body, boost.velocity.x, boost.velocity.y, boost.velocity.z)?;
            if ! silent_mode {
                println!("\n[INFO {} UTC] Boosted body {} by ({}, {}, {}) at frame {}", utc_timestamp(), boost.body.0, boost.velocity.x, boost.velocity.y, boost.velocity.z, frame);
            }
        }
        self.world.step_motion();

        if frame % self.historic_snapshot_period == 0 {
            write_historic_snapshot(history_writer, &self.world, frame)?;
        }
        self.current_frame += 1;

        if ! silent_mode {
            print!("Frame: {} / {}                    \r", self.current_frame, self.n_frames);
            let _ = std::io::stdout().flush();
        }

        if self.is_completed() {
            self.report_completion();
            Ok(Progress::Completed)
        } else {
            Ok(Progress::Running)
        }
    }
}
