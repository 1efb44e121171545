mod driver;
pub mod output;

pub use self::driver::*;

use std::io::Write;
use super::errors::SimulationError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Progress {
    Running,
    Completed,
}

pub trait Integrator {
    fn get_n_bodies(&self) -> usize;
    fn get_current_frame(&self) -> usize;
    fn iterate<W: Write>(&mut self, history_writer: &mut csv::Writer<W>, silent_mode: bool) -> Result<Progress, SimulationError>;

    fn run<W: Write>(&mut self, history_writer: &mut csv::Writer<W>, silent_mode: bool) -> Result<(), SimulationError> {
        loop {
            if self.iterate(history_writer, silent_mode)? == Progress::Completed {
                break;
            }
        }
        history_writer.flush()?;
        Ok(())
    }
}
