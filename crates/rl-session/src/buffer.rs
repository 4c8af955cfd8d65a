//! Accepted samples of the current session and the visible-time watermark.

use std::time::Duration;

use rl_core::SECONDS_PER_MINUTE;
use serde::Serialize;

/// Right edge of the visible time axis when a session starts, in minutes.
pub const INITIAL_WATERMARK_MIN: f64 = 20.0;
/// Amount the watermark grows by each time the trace reaches it.
pub const WATERMARK_STEP_MIN: f64 = 10.0;

/// One accepted temperature sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Minutes since session start, never negative.
    pub time_min: f64,
    pub temp_c: f64,
}

impl Reading {
    pub fn new(time_min: f64, temp_c: f64) -> Self {
        Self { time_min, temp_c }
    }
}

/// Append-only sample series for one session.
///
/// Callers append in time order; the buffer does not re-sort. The watermark
/// starts at [`INITIAL_WATERMARK_MIN`] and only grows until the next clear.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBuffer {
    start_time: Duration,
    samples: Vec<Reading>,
    watermark: f64,
}

impl SessionBuffer {
    /// Empty buffer whose session started at `start_time` on the session clock.
    pub fn new(start_time: Duration) -> Self {
        Self {
            start_time,
            samples: Vec::new(),
            watermark: INITIAL_WATERMARK_MIN,
        }
    }

    pub fn append(&mut self, reading: Reading) {
        self.samples.push(reading);
    }

    /// Drop every sample and put the watermark back to its initial value.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.watermark = INITIAL_WATERMARK_MIN;
    }

    /// Clear and begin a new session at `start_time`.
    pub fn restart(&mut self, start_time: Duration) {
        self.clear();
        self.start_time = start_time;
    }

    /// Grow the watermark by one step if `latest_time_min` has reached it.
    ///
    /// Returns `true` when the axis changed.
    pub fn maybe_grow_watermark(&mut self, latest_time_min: f64) -> bool {
        if latest_time_min >= self.watermark {
            self.watermark += WATERMARK_STEP_MIN;
            tracing::debug!(watermark = self.watermark, "time axis extended");
            true
        } else {
            false
        }
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    /// Session time elapsed at clock reading `now`.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.start_time)
    }

    pub fn elapsed_min(&self, now: Duration) -> f64 {
        self.elapsed(now).as_secs_f64() / SECONDS_PER_MINUTE
    }

    pub fn samples(&self) -> &[Reading] {
        &self.samples
    }

    pub fn watermark(&self) -> f64 {
        self.watermark
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for SessionBuffer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn append_keeps_every_reading_in_order(
            steps in prop::collection::vec((0.0_f64..0.5, 0.0_f64..250.0), 0..200)
        ) {
            let mut buffer = SessionBuffer::default();
            let mut t = 0.0;
            for (dt, temp) in &steps {
                t += dt;
                buffer.append(Reading::new(t, *temp));
                buffer.maybe_grow_watermark(t);
            }
            prop_assert_eq!(buffer.len(), steps.len());
            prop_assert!(buffer.samples().windows(2).all(|w| w[0].time_min <= w[1].time_min));
            prop_assert!(buffer.watermark() >= INITIAL_WATERMARK_MIN);
        }
    }
}
