use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rl_profiles::Profile;
use tracing::warn;

use super::{SampleRequest, SampleSource, SourceEvent, SourceMode};
use crate::error::SessionResult;

/// Synthesizes readings from a reference curve plus uniform jitter.
#[derive(Debug, Clone)]
pub struct DemoSource {
    rng: StdRng,
    jitter_c: f64,
}

impl DemoSource {
    /// `jitter_c` is the half-width of the symmetric jitter band; a
    /// non-finite value disables jitter. A fixed `seed` makes the sequence
    /// reproducible.
    pub fn new(jitter_c: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let jitter_c = if jitter_c.is_finite() {
            jitter_c.abs()
        } else {
            warn!(jitter_c, "non-finite demo jitter, synthesizing without jitter");
            0.0
        };
        Self { rng, jitter_c }
    }

    /// Curve temperature at `elapsed_min`, before jitter.
    pub fn base_temperature(profile: &Profile, elapsed_min: f64) -> f64 {
        profile.temperature_at(elapsed_min.max(0.0))
    }

    fn jitter(&mut self) -> f64 {
        if self.jitter_c > 0.0 {
            self.rng.random_range(-self.jitter_c..=self.jitter_c)
        } else {
            0.0
        }
    }
}

impl SampleSource for DemoSource {
    fn next(&mut self, request: &SampleRequest<'_>) -> SessionResult<SourceEvent> {
        let base = Self::base_temperature(request.profile, request.elapsed_min);
        Ok(SourceEvent::Temperature(base + self.jitter()))
    }

    fn mode(&self) -> SourceMode {
        SourceMode::Demo
    }
}
