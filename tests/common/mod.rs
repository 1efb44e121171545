pub mod planets;
pub mod stars;
pub mod world;

pub fn simulation_properties() -> (f64, f64, usize, usize) {
    let time_step: f64 = 1.;
    let size: f64 = 500.;
    let n_frames: usize = 500;
    let historic_snapshot_period: usize = 1; // frames
    (time_step, size, n_frames, historic_snapshot_period)
}

#[allow(dead_code)]
pub fn get_data_dirname(test_name: &str) -> String {
    let dirname = std::env::temp_dir().join(format!("orrery-{}-{}", test_name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dirname);
    std::fs::create_dir_all(&dirname).unwrap();
    dirname.to_str().unwrap().to_string()
}
