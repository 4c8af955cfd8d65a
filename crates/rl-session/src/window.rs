//! Trailing-window mean over the session buffer.

use crate::buffer::SessionBuffer;

/// One second, in minutes.
pub const DEFAULT_WINDOW_MIN: f64 = 1.0 / 60.0;

/// Mean of the samples in `[now - width, now]`.
///
/// Scans backwards from the newest sample and stops at the first sample
/// older than the window, so the cost is proportional to the window
/// population. Relies on the buffer being time-ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingWindow {
    width_min: f64,
}

impl RollingWindow {
    pub fn new(width_min: f64) -> Self {
        Self {
            width_min: width_min.max(0.0),
        }
    }

    pub fn width_min(&self) -> f64 {
        self.width_min
    }

    /// Mean temperature of the samples in the closed window ending at
    /// `now_min`, or `None` when the window is empty.
    pub fn update(&self, buffer: &SessionBuffer, now_min: f64) -> Option<f64> {
        let lower = now_min - self.width_min;
        let (sum, count) = buffer
            .samples()
            .iter()
            .rev()
            .skip_while(|r| r.time_min > now_min)
            .take_while(|r| r.time_min >= lower)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.temp_c, count + 1));
        (count > 0).then(|| sum / count as f64)
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Reading;

    fn buffer_of(samples: &[(f64, f64)]) -> SessionBuffer {
        let mut buffer = SessionBuffer::default();
        for &(t, temp) in samples {
            buffer.append(Reading::new(t, temp));
        }
        buffer
    }

    #[test]
    fn only_samples_inside_window_count() {
        let buffer = buffer_of(&[(0.0, 10.0), (0.01, 20.0), (0.5, 30.0), (1.0, 40.0)]);
        let window = RollingWindow::default();
        assert_eq!(window.update(&buffer, 1.0), Some(40.0));
    }

    #[test]
    fn window_bounds_are_closed() {
        let width = 0.25;
        let buffer = buffer_of(&[(0.5, 10.0), (0.75, 20.0), (1.0, 30.0)]);
        let window = RollingWindow::new(width);
        assert_eq!(window.update(&buffer, 1.0), Some(25.0));
        assert_eq!(window.update(&buffer, 0.75), Some(15.0));
    }

    #[test]
    fn empty_window_is_absent() {
        let window = RollingWindow::default();
        assert_eq!(window.update(&SessionBuffer::default(), 3.0), None);

        let buffer = buffer_of(&[(0.0, 10.0)]);
        assert_eq!(window.update(&buffer, 3.0), None);
    }

    #[test]
    fn future_samples_are_ignored() {
        let buffer = buffer_of(&[(1.0, 10.0), (1.005, 20.0), (2.0, 99.0)]);
        assert_eq!(RollingWindow::default().update(&buffer, 1.01), Some(15.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::Reading;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mean_matches_full_scan(
            steps in prop::collection::vec((0.0_f64..0.01, 0.0_f64..250.0), 1..100),
            width in 0.0_f64..0.1,
        ) {
            let mut buffer = SessionBuffer::default();
            let mut t = 0.0;
            for (dt, temp) in &steps {
                t += dt;
                buffer.append(Reading::new(t, *temp));
            }
            let window = RollingWindow::new(width);
            let inside: Vec<f64> = buffer
                .samples()
                .iter()
                .filter(|r| r.time_min >= t - width && r.time_min <= t)
                .map(|r| r.temp_c)
                .collect();
            let expected = inside.iter().sum::<f64>() / inside.len() as f64;
            let got = window.update(&buffer, t).unwrap();
            prop_assert!((got - expected).abs() < 1e-9);
        }
    }
}
