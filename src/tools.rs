use time::macros::format_description;
use time::OffsetDateTime;
use super::Axes;

/// Timestamp used in log lines: `2026.10.16 09:41:07`
pub fn utc_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

pub fn format_timestamp(datetime: OffsetDateTime) -> String {
    let format = format_description!("[year].[month].[day] [hour]:[minute]:[second]");
    match datetime.format(&format) {
        Ok(formatted) => formatted,
        Err(_) => String::from("????.??.?? ??:??:??"),
    }
}

/// Largest absolute coordinate reached along a path (useful to pick axis limits).
pub fn calculate_path_extent(path: &[Axes]) -> f64 {
    path.iter()
        .map(|point| point.x.abs().max(point.y.abs()).max(point.z.abs()))
        .fold(0., f64::max)
}
