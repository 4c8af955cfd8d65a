//! Text and axis helpers shared by every frontend.

use std::time::Duration;

/// Upper bound of the temperature axis, in °C.
pub const TEMP_AXIS_MAX_C: f64 = 250.0;
/// Spacing of the temperature grid lines, in °C.
pub const TEMP_GRID_STEP_C: f64 = 10.0;
/// Spacing of the time axis ticks, in minutes.
pub const TIME_TICK_STEP_MIN: f64 = 1.0;

/// `mm:ss` from whole elapsed seconds. Minutes are not capped at 59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn format_mean(mean_c: Option<f64>) -> String {
    match mean_c {
        Some(m) => format!("Mean (1s): {m:.1} °C"),
        None => "Mean (1s): N/A".to_string(),
    }
}

/// Tick positions from 0 to `watermark_min` inclusive, one per minute.
pub fn time_ticks(watermark_min: f64) -> Vec<f64> {
    let count = (watermark_min / TIME_TICK_STEP_MIN).floor().max(0.0) as usize;
    (0..=count).map(|i| i as f64 * TIME_TICK_STEP_MIN).collect()
}

/// Temperature grid positions from 0 to [`TEMP_AXIS_MAX_C`] inclusive.
pub fn temperature_ticks() -> Vec<f64> {
    let count = (TEMP_AXIS_MAX_C / TEMP_GRID_STEP_C) as usize;
    (0..=count).map(|i| i as f64 * TEMP_GRID_STEP_C).collect()
}
