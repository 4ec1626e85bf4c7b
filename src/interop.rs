//! Boundary types and traits between the coordinator and the host engine.
//!
//! Everything in this module is specified at the boundary only: the splitting
//! algorithm, the shader evaluating the scalar parameters, and the physics
//! engine toggling simulation are all external collaborators.

use crate::math::{Isometry, Point, Real, UnitVector};
use smallvec::SmallVec;

/// An opaque handle identifying a body owned by the host engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// An opaque handle identifying one material of a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Conventional names of the scalar shader parameters driven by the
/// coordinator.
pub mod param {
    /// Horizontal offset of the roll anchor point.
    pub const POINT_X: &str = "point_x";
    /// Lateral deviation of the rolled-up sheet.
    pub const DEVIATION: &str = "deviation";
    /// Virtual radius around which the slice rolls. The lower the radius, the
    /// stronger the rolling.
    pub const RADIUS: &str = "radius";
    /// Deepest point reached by the tool, in the piece's local frame.
    pub const CUT_DEPTH: &str = "cut_depth";
}

/// The plane swept by the cutting tool.
///
/// The plane passes through the point `normal * bias`, following the usual
/// half-space convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutPlane {
    /// The outward normal of the plane, along which slice thickness is
    /// measured.
    pub normal: UnitVector<Real>,
    /// The shift of the plane along its normal.
    pub bias: Real,
}

impl CutPlane {
    /// Initializes a cutting plane from its normal and bias.
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Self {
        Self { normal, bias }
    }

    /// The signed distance from `pt` to this plane.
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        pt.coords.dot(&self.normal) - self.bias
    }
}

/// Geometry and bindings of one piece produced by a split.
#[derive(Clone, Debug)]
pub struct Piece {
    /// The host-engine body backing this piece.
    pub body: BodyHandle,
    /// The piece's local coordinate frame at the time of the split.
    pub local_frame: Isometry<Real>,
    /// Sample points of the piece's geometry, in its local frame. Used only to
    /// measure the slice thickness; an empty set yields a thickness of zero.
    pub points: Vec<Point<Real>>,
    /// The materials whose scalar parameters drive this piece's roll
    /// deformation.
    pub materials: SmallVec<[MaterialHandle; 4]>,
}

impl Piece {
    /// The extent of this piece's sample points along `axis`.
    pub fn extent_along(&self, axis: &UnitVector<Real>) -> Real {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for pt in &self.points {
            let coord = pt.coords.dot(axis);
            min = min.min(coord);
            max = max.max(coord);
        }

        if min > max {
            0.0
        } else {
            max - min
        }
    }
}

/// The outcome reported by the splitting collaborator for one split attempt.
#[derive(Clone, Debug)]
pub enum SplitOutcome {
    /// The split succeeded and produced this piece.
    Split(Piece),
    /// The plane did not partition the body; nothing was produced.
    Failed,
}

/// The splitting capability of a target body.
///
/// Splitting may take several scheduler ticks to complete; `on_complete` fires
/// once with the outcome, possibly after `try_split` returned. An attempt that
/// never completes simply leaves the would-be piece unregistered.
pub trait Sliceable {
    /// Attempts to partition this body along `plane`.
    fn try_split(&mut self, plane: &CutPlane, on_complete: &mut dyn FnMut(SplitOutcome));
}

/// Sink receiving the named scalar parameters applied to a piece's materials.
///
/// Calls are fire-and-forget; no acknowledgment is consumed.
pub trait MaterialSink {
    /// Sets the scalar shader parameter `name` on `material`.
    fn set_scalar_parameter(&mut self, material: MaterialHandle, name: &str, value: Real);
}

/// Sink toggling whether a piece's motion is kinematic (during the cut) or
/// physically simulated (after finalization).
pub trait PhysicsSink {
    /// Enables or disables physical simulation of `body`.
    fn set_simulated(&mut self, body: BodyHandle, simulated: bool);
}

#[cfg(test)]
mod test {
    use super::{BodyHandle, CutPlane, Piece};
    use crate::math::{Isometry, Point, Vector};
    use approx::assert_relative_eq;
    use smallvec::SmallVec;

    #[test]
    fn extent_along_measures_the_spread_of_the_points() {
        let piece = Piece {
            body: BodyHandle(0),
            local_frame: Isometry::identity(),
            points: vec![
                Point::new(1.0, 5.0, -0.2),
                Point::new(-3.0, 0.0, 0.1),
                Point::new(0.0, 2.0, 0.25),
            ],
            materials: SmallVec::new(),
        };

        assert_relative_eq!(piece.extent_along(&Vector::z_axis()), 0.45);
        assert_relative_eq!(piece.extent_along(&Vector::x_axis()), 4.0);
    }

    #[test]
    fn extent_along_is_zero_without_points() {
        let piece = Piece {
            body: BodyHandle(0),
            local_frame: Isometry::identity(),
            points: vec![],
            materials: SmallVec::new(),
        };

        assert_eq!(piece.extent_along(&Vector::z_axis()), 0.0);
    }

    #[test]
    fn signed_distance_accounts_for_the_bias() {
        let plane = CutPlane::new(Vector::y_axis(), 2.0);
        assert_relative_eq!(plane.signed_distance(&Point::new(10.0, 5.0, -3.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point::new(0.0, 0.0, 0.0)), -2.0);
    }
}
