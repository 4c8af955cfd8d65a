//! Events the engine hands to the presentation layer.

use rl_profiles::{ActiveSelection, Profile, ProfilePoint};
use serde::Serialize;

use crate::buffer::Reading;

/// Emitted after every accepted sample.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderUpdate {
    /// Every sample of the session so far, oldest first.
    pub samples: Vec<Reading>,
    pub latest: Reading,
    pub watermark: f64,
    /// The time axis grew on this update; ticks need redrawing.
    pub watermark_changed: bool,
    pub mean_c: Option<f64>,
    pub mean_text: String,
    pub elapsed_text: String,
}

/// Emitted when the session is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReset {
    pub watermark: f64,
    pub mean_text: String,
    pub elapsed_text: String,
}

/// A reference curve ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCurve {
    pub id: String,
    pub longname: String,
    pub points: Vec<ProfilePoint>,
}

impl From<&Profile> for ReferenceCurve {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            longname: profile.longname().to_string(),
            points: profile.points().to_vec(),
        }
    }
}

/// Emitted when the active selection changes (and once at start).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileChanged {
    pub selection: ActiveSelection,
    pub curves: Vec<ReferenceCurve>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Update(RenderUpdate),
    Reset(RenderReset),
    ProfileChanged(ProfileChanged),
}
