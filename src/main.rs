extern crate orrery;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command};
use orrery::{Integrator, Scenario, BoostDirection, SimulationError};
use orrery::output::{get_csv_writer, write_paths_file};
use orrery::tools::utc_timestamp;
use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

fn main() {
    let t1 = Instant::now();

    let matches = Command::new("Orrery")
                            .version(env!("CARGO_PKG_VERSION"))
                            .about("Toy N-body gravity simulator: integrates a few point masses frame by frame and exports their trajectories.")
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                            .subcommand(Command::new("run")
                                    .about("Run a scenario")
                                    .arg(Arg::new("scenario_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON scenario description"))
                                    .arg(Arg::new("history_filename")
                                        .required(true)
                                        .index(2)
                                        .help("CSV file receiving the state of every body per frame"))
                                    .arg(Arg::new("paths_filename")
                                        .long("paths")
                                        .value_name("csv")
                                        .help("CSV file receiving the full path of every body"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/ERROR messages"))
                                     )
                            .subcommand(Command::new("demo")
                                    .about("Run the planet/sun case three times, boosting the planet along x, y and z")
                                    .arg(Arg::new("output_dirname")
                                        .required(true)
                                        .index(1)
                                        .help("Directory receiving the history and path files"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/ERROR messages"))
                                    )
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run(run_matches),
        Some(("demo", demo_matches)) => demo(demo_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        println!("\n[ERROR {} UTC] {}", utc_timestamp(), e);
        process::exit(1);
    }

    println!("\n[INFO {} UTC] Execution time: {} seconds", utc_timestamp(), t1.elapsed().as_secs_f64());
}

fn required_value<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(String::as_str).expect("required by clap")
}

fn run(matches: &ArgMatches) -> Result<(), SimulationError> {
    let scenario_filename = required_value(matches, "scenario_filename");
    let history_filename = required_value(matches, "history_filename");
    let paths_filename = matches.get_one::<String>("paths_filename");
    let silent_mode = matches.get_flag("silent");

    let scenario = Scenario::from_json_file(Path::new(scenario_filename))?;
    println!("[INFO {} UTC] Loaded scenario '{}' ({} bodies, {} frames).", utc_timestamp(), scenario_filename, scenario.bodies.len(), scenario.n_frames);
    let paths_path = paths_filename.map(Path::new);
    simulate(&scenario, Path::new(history_filename), paths_path, silent_mode)
}

fn demo(matches: &ArgMatches) -> Result<(), SimulationError> {
    let output_dirname = required_value(matches, "output_dirname");
    let silent_mode = matches.get_flag("silent");
    fs::create_dir_all(output_dirname)?;

    for direction in BoostDirection::all().iter() {
        println!("[INFO {} UTC] Velocity boost in {} direction.", utc_timestamp(), direction.label());
        let scenario = Scenario::boosted(*direction);
        let history_path = Path::new(output_dirname).join(format!("boost_{}_history.csv", direction.label()));
        let paths_path = Path::new(output_dirname).join(format!("boost_{}_paths.csv", direction.label()));
        simulate(&scenario, &history_path, Some(paths_path.as_path()), silent_mode)?;
    }
    Ok(())
}

fn simulate(scenario: &Scenario, history_path: &Path, paths_path: Option<&Path>, silent_mode: bool) -> Result<(), SimulationError> {
    let mut driver = scenario.build()?;
    let mut history_writer = get_csv_writer(history_path)?;
    driver.run(&mut history_writer, silent_mode)?;
    println!("\n[INFO {} UTC] Completed {} frames, history written to '{}'.", utc_timestamp(), driver.get_current_frame(), history_path.display());
    if let Some(paths_path) = paths_path {
        write_paths_file(paths_path, &driver.world)?;
        println!("[INFO {} UTC] Paths written to '{}'.", utc_timestamp(), paths_path.display());
    }
    Ok(())
}
