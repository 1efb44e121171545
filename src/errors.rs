use std::error::Error;
use std::fmt;
use std::io;

/// Everything that can go wrong while building or running a simulation.
///
/// None of these are transient: a failure means the scenario is wrong
/// (`Configuration`), the dynamics hit a singularity (`Domain`), or the
/// output could not be written.
#[derive(Debug)]
pub enum SimulationError {
    Configuration(String),
    Domain(String),
    Io(io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl SimulationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimulationError::Configuration(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, SimulationError::Domain(_))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::Configuration(message) => write!(f, "Configuration error: {}", message),
            SimulationError::Domain(message) => write!(f, "Domain error: {}", message),
            SimulationError::Io(e) => write!(f, "I/O error: {}", e),
            SimulationError::Json(e) => write!(f, "JSON error: {}", e),
            SimulationError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulationError::Io(e) => Some(e),
            SimulationError::Json(e) => Some(e),
            SimulationError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SimulationError {
    fn from(e: io::Error) -> Self {
        SimulationError::Io(e)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::Json(e)
    }
}

impl From<csv::Error> for SimulationError {
    fn from(e: csv::Error) -> Self {
        SimulationError::Csv(e)
    }
}
