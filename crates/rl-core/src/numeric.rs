use crate::{CoreError, CoreResult};

/// Pass `v` through if it is finite; NaN and infinities are rejected.
pub fn ensure_finite(v: f64, what: &'static str) -> CoreResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// Degenerate spans (`x0 == x1`) return `y0`.
pub fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let span = x1 - x0;
    if span == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / span
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_stays_between_endpoints(
            y0 in -300.0_f64..300.0,
            y1 in -300.0_f64..300.0,
            t in 0.0_f64..=1.0,
        ) {
            let y = lerp(0.0, y0, 2.0, y1, 2.0 * t);
            prop_assert!(y >= y0.min(y1) - 1e-9);
            prop_assert!(y <= y0.max(y1) + 1e-9);
        }
    }
}
