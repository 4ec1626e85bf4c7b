//! Response curves mapping a normalized thickness factor to a roll intensity.

pub use self::piecewise::{CurveError, CurveKey, PiecewiseLinear};

mod piecewise;

use crate::math::Real;

/// A response curve mapping a normalized input in `[0, 1]` to a normalized
/// intensity in `[0, 1]`.
///
/// Curves are externally authored configuration: the engine evaluates them but
/// assumes nothing about their shape beyond the domain and range bounds.
/// Monotonic curves are the intended configuration (a thicker slice should
/// never roll harder than a thinner one), but the engine clamps the output and
/// never relies on monotonicity.
pub trait ResponseCurve {
    /// Evaluates the curve at `t`.
    ///
    /// Callers pass `t` in `[0, 1]`; implementations should return a value in
    /// `[0, 1]` but the caller clamps the result regardless.
    fn evaluate(&self, t: Real) -> Real;
}

impl<F: Fn(Real) -> Real> ResponseCurve for F {
    #[inline]
    fn evaluate(&self, t: Real) -> Real {
        self(t)
    }
}

/// The identity response: the intensity equals the thickness factor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearResponse;

impl ResponseCurve for LinearResponse {
    #[inline]
    fn evaluate(&self, t: Real) -> Real {
        t.clamp(0.0, 1.0)
    }
}
