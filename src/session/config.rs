use crate::math::{Real, DIM};

/// Tuning of the roll response derived from a slice's thickness.
///
/// Each output parameter is interpolated between its `min` and `max` bound by
/// the response factor produced by the configured curve. The defaults mirror a
/// hand-tuned setup where thin slices curl tightly (small radius) and thick
/// slices barely bend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RollConfig {
    /// Roll radius assigned at response factor 0. The lower the radius, the
    /// stronger the rolling.
    pub min_roll_radius: Real,
    /// Roll radius assigned at response factor 1.
    pub max_roll_radius: Real,
    /// Roll anchor offset assigned at response factor 0.
    pub min_point_x: Real,
    /// Roll anchor offset assigned at response factor 1.
    pub max_point_x: Real,
    /// Lateral deviation assigned at response factor 0.
    pub min_deviation: Real,
    /// Lateral deviation assigned at response factor 1.
    pub max_deviation: Real,
    /// The thickness beyond which the roll response no longer changes.
    pub max_slice_thickness: Real,
    /// Index of the local-frame axis along which the tool digs into a piece
    /// (0 = X, 1 = Y, 2 = Z).
    pub depth_axis: usize,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            min_roll_radius: 0.5,
            max_roll_radius: 3.0,
            min_point_x: 0.0,
            max_point_x: 0.3,
            min_deviation: 0.0,
            max_deviation: 0.3,
            max_slice_thickness: 0.5,
            depth_axis: 1,
        }
    }
}

/// Indicates an inconsistency in a [`RollConfig`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum RollConfigError {
    /// The thickness saturation point must be strictly positive.
    #[error("`max_slice_thickness` must be strictly positive (found {0}).")]
    NonPositiveMaxThickness(Real),
    /// A parameter's lower bound exceeds its upper bound.
    #[error("the bounds of `{0}` are inverted (min > max).")]
    InvertedBounds(&'static str),
    /// The depth axis must index one of the three local-frame axes.
    #[error("the depth axis index must be 0, 1 or 2 (found {0}).")]
    InvalidDepthAxis(usize),
}

impl RollConfig {
    /// Checks this configuration for inconsistencies.
    pub fn validate(&self) -> Result<(), RollConfigError> {
        if self.max_slice_thickness <= 0.0 {
            return Err(RollConfigError::NonPositiveMaxThickness(
                self.max_slice_thickness,
            ));
        }

        if self.min_roll_radius > self.max_roll_radius {
            return Err(RollConfigError::InvertedBounds("roll_radius"));
        }

        if self.min_point_x > self.max_point_x {
            return Err(RollConfigError::InvertedBounds("point_x"));
        }

        if self.min_deviation > self.max_deviation {
            return Err(RollConfigError::InvertedBounds("deviation"));
        }

        if self.depth_axis >= DIM {
            return Err(RollConfigError::InvalidDepthAxis(self.depth_axis));
        }

        Ok(())
    }
}
