//! Startup configuration.
//!
//! Every value is resolved once before the session starts; nothing here is
//! reconfigured at runtime.

use std::path::Path;
use std::time::Duration;

use rl_profiles::{ActiveSelection, ProfileCatalog};
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Catalog id, or `"all"` / `"a"` for the overlay.
    pub profile: String,
    /// Serial port identifier.
    pub port: String,
    pub baud: u32,
    /// Upper bound on one blocking line read.
    pub read_timeout_ms: u64,
    /// Subtracted from every raw sensor value. Depends on the probe and
    /// board generation, so it is set per device.
    pub calibration_offset_c: f64,
    /// Half-width of the uniform jitter added to demo samples.
    pub demo_jitter_c: f64,
    /// Fixed seed for reproducible demo runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_seed: Option<u64>,
    /// Presentation pacing between ticks.
    pub pacing_ms: u64,
    /// Skip the transport probe and go straight to demo data.
    pub force_demo: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            profile: "nsr".to_string(),
            port: "/dev/ttyUSB0".to_string(),
            baud: 115_200,
            read_timeout_ms: 1_000,
            calibration_offset_c: 3.7,
            demo_jitter_c: 3.0,
            demo_seed: None,
            pacing_ms: 100,
            force_demo: false,
        }
    }
}

impl SessionConfig {
    pub fn load_yaml(path: &Path) -> SessionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SessionConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_yaml(&self, path: &Path) -> SessionResult<()> {
        self.validate()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Structural checks that do not need the catalog.
    pub fn validate(&self) -> SessionResult<()> {
        if self.baud == 0 {
            return Err(invalid("baud must be positive"));
        }
        if self.read_timeout_ms == 0 {
            return Err(invalid("read_timeout_ms must be positive"));
        }
        if !self.calibration_offset_c.is_finite() {
            return Err(invalid("calibration_offset_c must be finite"));
        }
        if !self.demo_jitter_c.is_finite() || self.demo_jitter_c < 0.0 {
            return Err(invalid("demo_jitter_c must be finite and non-negative"));
        }
        if self.port.trim().is_empty() && !self.force_demo {
            return Err(invalid("port must not be empty"));
        }
        Ok(())
    }

    /// Resolve the configured profile against `catalog`.
    pub fn selection(&self, catalog: &ProfileCatalog) -> SessionResult<ActiveSelection> {
        Ok(ActiveSelection::parse(&self.profile, catalog)?)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

/// Command-line values layered over a config file. `None` keeps the file's
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub profile: Option<String>,
    pub port: Option<String>,
    pub baud: Option<u32>,
    pub calibration_offset_c: Option<f64>,
    pub demo_seed: Option<u64>,
    pub force_demo: bool,
}

impl SessionConfig {
    /// Load `path` (or the defaults), apply `overrides`, then validate.
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> SessionResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_yaml(path)?,
            None => Self::default(),
        };
        if let Some(profile) = &overrides.profile {
            config.profile = profile.clone();
        }
        if let Some(port) = &overrides.port {
            config.port = port.clone();
        }
        if let Some(baud) = overrides.baud {
            config.baud = baud;
        }
        if let Some(offset) = overrides.calibration_offset_c {
            config.calibration_offset_c = offset;
        }
        if overrides.demo_seed.is_some() {
            config.demo_seed = overrides.demo_seed;
        }
        config.force_demo |= overrides.force_demo;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(what: &str) -> SessionError {
    SessionError::Config {
        what: what.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        config.validate().unwrap();
        assert_eq!(config.read_timeout(), Duration::from_secs(1));
        assert_eq!(config.pacing(), Duration::from_millis(100));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: SessionConfig =
            serde_yaml::from_str("profile: kr\ncalibration_offset_c: 1.7\n").unwrap();
        assert_eq!(config.profile, "kr");
        assert_eq!(config.calibration_offset_c, 1.7);
        assert_eq!(config.baud, 115_200);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<SessionConfig, _> = serde_yaml::from_str("bogus: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn negative_jitter_rejected() {
        let config = SessionConfig {
            demo_jitter_c: -1.0,
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(), Err(SessionError::Config { .. })));
    }

    #[test]
    fn unknown_profile_surfaces() {
        let catalog = ProfileCatalog::builtin().unwrap();
        let config = SessionConfig {
            profile: "bogus-id".into(),
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.selection(&catalog),
            Err(SessionError::Profile(_))
        ));
    }

    #[test]
    fn yaml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        let config = SessionConfig {
            profile: "all".into(),
            demo_seed: Some(7),
            force_demo: true,
            ..SessionConfig::default()
        };
        config.save_yaml(&path).unwrap();
        assert_eq!(SessionConfig::load_yaml(&path).unwrap(), config);
    }

    #[test]
    fn overrides_layer_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "profile: bs\nport: /dev/ttyACM0\nbaud: 9600\n").unwrap();

        let overrides = ConfigOverrides {
            profile: Some("a".into()),
            calibration_offset_c: Some(2.5),
            ..ConfigOverrides::default()
        };
        let config = SessionConfig::resolve(Some(&path), &overrides).unwrap();
        assert_eq!(config.profile, "a");
        assert_eq!(config.port, "/dev/ttyACM0");
        assert_eq!(config.baud, 9600);
        assert_eq!(config.calibration_offset_c, 2.5);
        assert!(!config.force_demo);
    }

    #[test]
    fn resolve_without_file_uses_defaults() {
        let overrides = ConfigOverrides {
            force_demo: true,
            demo_seed: Some(3),
            ..ConfigOverrides::default()
        };
        let config = SessionConfig::resolve(None, &overrides).unwrap();
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.demo_seed, Some(3));
        assert!(config.force_demo);
    }

    #[test]
    fn invalid_override_rejected() {
        let overrides = ConfigOverrides {
            baud: Some(0),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            SessionConfig::resolve(None, &overrides),
            Err(SessionError::Config { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SessionConfig::resolve(
            Some(&dir.path().join("absent.yaml")),
            &ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(SessionError::Io(_))));
    }
}
