use std::fs::{File, OpenOptions};
use std::io::{self, Write, BufWriter};
use std::path::Path;
use super::super::bodies::World;
use super::super::errors::SimulationError;

#[derive(Debug, Serialize)]
struct HistoryRecord<'a> {
    frame: usize,
    body: usize,
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
    boosted: bool,
    color: &'a str,
}

#[derive(Debug, Serialize)]
struct PathRecord {
    body: usize,
    index: usize,
    x: f64,
    y: f64,
    z: f64,
    segment: &'static str,
}

/// Creates a buffered CSV writer. Existing files are never overwritten.
pub fn get_csv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>, SimulationError> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(ref e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(SimulationError::Configuration(format!("File '{}' already exists.", path.display())));
        },
        Err(e) => return Err(SimulationError::Io(e)),
    };
    Ok(csv::Writer::from_writer(BufWriter::new(file)))
}

/// One row per body with the state reached at the end of `frame`.
pub fn write_historic_snapshot<W: Write>(history_writer: &mut csv::Writer<W>, world: &World, frame: usize) -> Result<(), SimulationError> {
    for body in world.bodies().iter() {
        history_writer.serialize(HistoryRecord {
            frame: frame,
            body: body.id().0,
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            vx: body.velocity.x,
            vy: body.velocity.y,
            vz: body.velocity.z,
            boosted: body.boosted(),
            color: &body.color,
        })?;
    }
    Ok(())
}

/// Full path of every body, tagged with the segment it belongs to so that the
/// part travelled after a boost can be drawn differently. The boost point is
/// written in both segments.
pub fn write_paths<W: Write>(paths_writer: &mut csv::Writer<W>, world: &World) -> Result<(), SimulationError> {
    for body in world.bodies().iter() {
        let (pre_boost_path, post_boost_path) = body.path_segments();
        for (index, point) in pre_boost_path.iter().enumerate() {
            paths_writer.serialize(PathRecord {
                body: body.id().0,
                index: index,
                x: point.x,
                y: point.y,
                z: point.z,
                segment: "pre_boost",
            })?;
        }
        let offset = body.path().len() - post_boost_path.len();
        for (index, point) in post_boost_path.iter().enumerate() {
            paths_writer.serialize(PathRecord {
                body: body.id().0,
                index: offset + index,
                x: point.x,
                y: point.y,
                z: point.z,
                segment: "post_boost",
            })?;
        }
    }
    paths_writer.flush()?;
    Ok(())
}

pub fn write_paths_file(path: &Path, world: &World) -> Result<(), SimulationError> {
    let mut paths_writer = get_csv_writer(path)?;
    write_paths(&mut paths_writer, world)
}
