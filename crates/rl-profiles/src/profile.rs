//! Reference roast curve types.

use rl_core::{ensure_finite, lerp};
use serde::Serialize;

use crate::error::{ProfileError, ProfileResult};

/// One sample of a reference curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    /// Elapsed roast time in minutes.
    pub time_min: f64,
    /// Bean temperature in °C.
    pub temp_c: f64,
}

impl ProfilePoint {
    pub fn new(time_min: f64, temp_c: f64) -> Self {
        Self { time_min, temp_c }
    }
}

impl From<(f64, f64)> for ProfilePoint {
    fn from((time_min, temp_c): (f64, f64)) -> Self {
        Self { time_min, temp_c }
    }
}

/// A named reference roast curve.
///
/// Points are non-empty, finite, and strictly increasing in time. The only
/// way to obtain a `Profile` is through [`Profile::new`], which checks this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    id: String,
    longname: String,
    points: Vec<ProfilePoint>,
}

impl Profile {
    /// Build and validate a profile.
    pub fn new(
        id: impl Into<String>,
        longname: impl Into<String>,
        points: impl IntoIterator<Item = ProfilePoint>,
    ) -> ProfileResult<Self> {
        let profile = Self {
            id: id.into(),
            longname: longname.into(),
            points: points.into_iter().collect(),
        };
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> ProfileResult<()> {
        if self.id.trim().is_empty() {
            return Err(ProfileError::invalid(&self.id, "profile id is empty"));
        }
        if self.points.is_empty() {
            return Err(ProfileError::invalid(&self.id, "curve has no points"));
        }
        for p in &self.points {
            ensure_finite(p.time_min, "time_min")
                .and_then(|_| ensure_finite(p.temp_c, "temp_c"))
                .map_err(|e| ProfileError::invalid(&self.id, e.to_string()))?;
        }
        if let Some(i) = self
            .points
            .windows(2)
            .position(|w| w[1].time_min <= w[0].time_min)
        {
            return Err(ProfileError::invalid(
                &self.id,
                format!(
                    "time must strictly increase (point {} at {} min follows {} min)",
                    i + 1,
                    self.points[i + 1].time_min,
                    self.points[i].time_min
                ),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn longname(&self) -> &str {
        &self.longname
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Time of the last point, in minutes.
    pub fn duration_min(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.time_min)
    }

    /// Reference temperature at `time_min`.
    ///
    /// Linear between the two bracketing points; clamps to the first point
    /// before the curve starts and to the last point after it ends.
    pub fn temperature_at(&self, time_min: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return f64::NAN;
        };
        let idx = self.points.partition_point(|p| p.time_min <= time_min);
        if idx == 0 {
            return first.temp_c;
        }
        if idx == self.points.len() {
            return last.temp_c;
        }
        let (a, b) = (self.points[idx - 1], self.points[idx]);
        lerp(a.time_min, a.temp_c, b.time_min, b.temp_c, time_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nsr_head() -> Profile {
        Profile::new(
            "nsr",
            "Nicaragua San Ramon",
            [(0.0, 195.0), (0.5, 86.0)].map(ProfilePoint::from),
        )
        .unwrap()
    }

    #[test]
    fn interpolates_between_points() {
        let p = nsr_head();
        assert_eq!(p.temperature_at(0.25), 140.5);
        assert_eq!(p.temperature_at(0.0), 195.0);
    }

    #[test]
    fn clamps_outside_curve() {
        let p = nsr_head();
        assert_eq!(p.temperature_at(0.5), 86.0);
        assert_eq!(p.temperature_at(12.0), 86.0);
        assert_eq!(p.temperature_at(-1.0), 195.0);
    }

    #[test]
    fn rejects_empty_curve() {
        let err = Profile::new("x", "X", Vec::new()).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProfileData { .. }));
    }

    #[test]
    fn rejects_repeated_time() {
        let err = Profile::new(
            "x",
            "X",
            [(0.0, 1.0), (1.0, 2.0), (1.0, 3.0)].map(ProfilePoint::from),
        )
        .unwrap_err();
        assert!(err.to_string().contains("strictly increase"));
    }

    #[test]
    fn rejects_non_finite_temperature() {
        let err = Profile::new("x", "X", [ProfilePoint::new(0.0, f64::NAN)]).unwrap_err();
        assert!(err.to_string().contains("Non-finite"));
    }

    #[test]
    fn duration_is_last_time() {
        assert_eq!(nsr_head().duration_min(), 0.5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolation_stays_within_curve_range(
            temps in prop::collection::vec(0.0_f64..260.0, 2..20),
            t in -5.0_f64..40.0,
        ) {
            let points = temps
                .iter()
                .enumerate()
                .map(|(i, temp)| ProfilePoint::from((i as f64 * 0.5, *temp)))
                .collect::<Vec<_>>();
            let profile = Profile::new("p", "Prop", points).unwrap();
            let lo = temps.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let value = profile.temperature_at(t);
            prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
        }
    }
}
