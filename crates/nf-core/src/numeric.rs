use crate::NfError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// Distance of a router no query has reached yet
pub const UNREACHED: Real = Real::INFINITY;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NfError::NonFinite { what, value: v })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, NfError> {
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(NfError::Negative { what, value: v })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e9_f64..1e9, b in -1e9_f64..1e9) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn finite_weights_accepted(w in 0.0_f64..1e12) {
            prop_assert_eq!(ensure_finite(w, "weight"), Ok(w));
            prop_assert_eq!(ensure_non_negative(w, "weight"), Ok(w));
        }
    }
}
