//! Reference roast curves for roastline.
//!
//! Provides:
//! - `Profile` / `ProfilePoint`: a named temperature-over-time curve
//! - `ProfileCatalog`: the validated, read-only set of known curves
//! - `ActiveSelection`: one catalog entry or the "all profiles" overlay
//! - the built-in curve table shipped with the application

mod builtin;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod selection;

pub use catalog::ProfileCatalog;
pub use error::{ProfileError, ProfileResult};
pub use profile::{Profile, ProfilePoint};
pub use selection::{ALL_ALIAS, ALL_PROFILES, ActiveSelection};
