use crate::curve::ResponseCurve;
use crate::math::Real;

/// One key of a [`PiecewiseLinear`] curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveKey {
    /// The position of the key on the input axis, in `[0, 1]`.
    pub time: Real,
    /// The curve value at `time`, in `[0, 1]`.
    pub value: Real,
}

impl CurveKey {
    /// Initializes a curve key from its input position and value.
    pub fn new(time: Real, value: Real) -> Self {
        Self { time, value }
    }
}

/// Indicates an inconsistency in the keys of a piecewise-linear curve.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum CurveError {
    /// A curve must contain at least one key.
    #[error("a response curve must contain at least one key.")]
    NoKeys,
    /// Key times must be strictly increasing.
    #[error("the curve keys {0} and {1} are not in strictly increasing time order.")]
    UnsortedKeys(usize, usize),
    /// Every key must lie inside the unit square.
    #[error("the curve key {0} lies outside of the [0, 1] × [0, 1] domain.")]
    KeyOutOfRange(usize),
}

/// A piecewise-linear response curve defined by a set of authored keys.
///
/// This is the configurable counterpart of a hand-tuned animation curve:
/// evaluation clamps to the first and last key outside of the keyed range and
/// interpolates linearly in between.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseLinear {
    keys: Vec<CurveKey>,
}

impl PiecewiseLinear {
    /// Builds a curve from its keys.
    ///
    /// Fails if there is no key, if the keys are not strictly increasing in
    /// time, or if any key lies outside of the unit square.
    pub fn new(keys: Vec<CurveKey>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::NoKeys);
        }

        for (i, key) in keys.iter().enumerate() {
            if key.time < 0.0 || key.time > 1.0 || key.value < 0.0 || key.value > 1.0 {
                return Err(CurveError::KeyOutOfRange(i));
            }

            if i > 0 && keys[i - 1].time >= key.time {
                return Err(CurveError::UnsortedKeys(i - 1, i));
            }
        }

        Ok(Self { keys })
    }

    /// The keys defining this curve.
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }
}

impl ResponseCurve for PiecewiseLinear {
    fn evaluate(&self, t: Real) -> Real {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];

        if t <= first.time {
            return first.value;
        }

        if t >= last.time {
            return last.value;
        }

        // `t` is strictly inside the keyed range, so a bracketing pair exists.
        for window in self.keys.windows(2) {
            let [a, b] = [window[0], window[1]];
            if t <= b.time {
                let s = (t - a.time) / (b.time - a.time);
                return a.value + (b.value - a.value) * s;
            }
        }

        last.value
    }
}

#[cfg(test)]
mod test {
    use super::{CurveError, CurveKey, PiecewiseLinear};
    use crate::curve::ResponseCurve;
    use approx::assert_relative_eq;

    #[test]
    fn evaluate_interpolates_between_keys() {
        let curve = PiecewiseLinear::new(vec![
            CurveKey::new(0.0, 0.0),
            CurveKey::new(0.5, 0.8),
            CurveKey::new(1.0, 1.0),
        ])
        .unwrap();

        assert_relative_eq!(curve.evaluate(0.0), 0.0);
        assert_relative_eq!(curve.evaluate(0.25), 0.4);
        assert_relative_eq!(curve.evaluate(0.5), 0.8);
        assert_relative_eq!(curve.evaluate(0.75), 0.9);
        assert_relative_eq!(curve.evaluate(1.0), 1.0);
    }

    #[test]
    fn evaluate_clamps_outside_of_keyed_range() {
        let curve =
            PiecewiseLinear::new(vec![CurveKey::new(0.2, 0.3), CurveKey::new(0.8, 0.9)]).unwrap();

        assert_relative_eq!(curve.evaluate(0.0), 0.3);
        assert_relative_eq!(curve.evaluate(1.0), 0.9);
    }

    #[test]
    fn single_key_curve_is_constant() {
        let curve = PiecewiseLinear::new(vec![CurveKey::new(0.5, 0.7)]).unwrap();
        assert_relative_eq!(curve.evaluate(0.0), 0.7);
        assert_relative_eq!(curve.evaluate(0.5), 0.7);
        assert_relative_eq!(curve.evaluate(1.0), 0.7);
    }

    #[test]
    fn construction_rejects_bad_keys() {
        assert_eq!(PiecewiseLinear::new(vec![]).unwrap_err(), CurveError::NoKeys);
        assert_eq!(
            PiecewiseLinear::new(vec![CurveKey::new(0.5, 0.0), CurveKey::new(0.5, 1.0)])
                .unwrap_err(),
            CurveError::UnsortedKeys(0, 1)
        );
        assert_eq!(
            PiecewiseLinear::new(vec![CurveKey::new(0.0, 1.5)]).unwrap_err(),
            CurveError::KeyOutOfRange(0)
        );
    }
}
