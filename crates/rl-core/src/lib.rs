//! rl-core: shared foundation for roastline.
//!
//! Contains:
//! - numeric (finite checks, interpolation)
//! - clock (session time base, real and manual)
//! - error (shared error types)

pub mod clock;
pub mod error;
pub mod numeric;

pub use clock::{Clock, ManualClock, SECONDS_PER_MINUTE, SystemClock};
pub use error::{CoreError, CoreResult};
pub use numeric::{ensure_finite, lerp};
