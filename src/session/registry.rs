use crate::curve::ResponseCurve;
use crate::interop::{BodyHandle, MaterialHandle, MaterialSink};
use crate::math::{Isometry, Real};
use crate::session::RollConfig;
use smallvec::SmallVec;

/// The rolling parameters applied to a slice's materials.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RollParams {
    /// Horizontal offset of the roll anchor point.
    pub point_x: Real,
    /// Lateral deviation of the rolled-up sheet.
    pub deviation: Real,
    /// Virtual radius around which the slice rolls.
    pub radius: Real,
}

/// The in-flight state of one piece of the active cutting session.
#[derive(Clone, Debug)]
pub struct SliceRecord {
    /// The host-engine body backing this slice.
    pub body: BodyHandle,
    /// The 1-based registration rank of this slice within its session.
    pub order: u32,
    /// The extent of the slice along the cut normal, measured once at
    /// registration.
    pub thickness: Real,
    /// The rolling parameters derived from `thickness`, after the
    /// non-overtaking constraint was applied.
    pub params: RollParams,
    /// The deepest tool position recorded for this slice, in its local frame.
    /// Starts at `Real::INFINITY` ("not yet cut") and only ever decreases.
    pub recorded_depth: Real,
    pub(crate) local_frame: Isometry<Real>,
    pub(crate) materials: SmallVec<[MaterialHandle; 4]>,
}

impl SliceRecord {
    /// The materials whose scalar parameters drive this slice's deformation.
    pub fn materials(&self) -> &[MaterialHandle] {
        &self.materials
    }
}

/// The insertion-ordered set of slices belonging to the active session.
///
/// Records are stored in registration order, so the record at index `i` has
/// `order == i + 1` and the predecessor of a slice is simply the record stored
/// right before it. The registry is empty exactly when no session is active.
#[derive(Clone, Debug, Default)]
pub struct SliceRegistry {
    records: Vec<SliceRecord>,
}

impl SliceRegistry {
    /// The number of registered slices.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Does this registry contain no slice at all?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The registered slices, in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SliceRecord> {
        self.records.iter()
    }

    /// The record of the slice backed by `body`, if it is registered.
    pub fn get(&self, body: BodyHandle) -> Option<&SliceRecord> {
        self.records.iter().find(|rec| rec.body == body)
    }

    /// Is the slice backed by `body` registered?
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.get(body).is_some()
    }

    /// The most recently registered slice, i.e., the active one.
    pub fn active(&self) -> Option<&SliceRecord> {
        self.records.last()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut SliceRecord> {
        self.records.last_mut()
    }

    pub(crate) fn push(&mut self, record: SliceRecord) {
        self.records.push(record);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

/// Derives the rolling parameters of a slice from its thickness.
///
/// The thickness is normalized against the configured saturation point, run
/// through the response curve, and the resulting factor interpolates every
/// output parameter between its configured bounds. If the slice is strictly
/// thinner than its immediate predecessor in the cascade, the freshly computed
/// parameters are discarded in favor of the predecessor's: a thinner slice
/// would otherwise roll faster than the thicker slice it was cut from and
/// visually clip through it.
pub(crate) fn derive_params(
    config: &RollConfig,
    curve: &impl ResponseCurve,
    thickness: Real,
    predecessor: Option<&SliceRecord>,
) -> RollParams {
    let thickness_factor = (thickness / config.max_slice_thickness).clamp(0.0, 1.0);
    let response = curve.evaluate(thickness_factor).clamp(0.0, 1.0);

    let fresh = RollParams {
        point_x: lerp(config.min_point_x, config.max_point_x, response),
        deviation: lerp(config.min_deviation, config.max_deviation, response),
        radius: lerp(config.min_roll_radius, config.max_roll_radius, response),
    };

    match predecessor {
        Some(prev) if thickness < prev.thickness => {
            log::trace!(
                "thickness {thickness} < predecessor's {}: inheriting its roll parameters",
                prev.thickness
            );
            prev.params
        }
        _ => fresh,
    }
}

/// Pushes `params` to every material of `materials`.
pub(crate) fn apply_params(
    sink: &mut dyn MaterialSink,
    materials: &[MaterialHandle],
    params: &RollParams,
) {
    use crate::interop::param;

    for &mat in materials {
        sink.set_scalar_parameter(mat, param::POINT_X, params.point_x);
        sink.set_scalar_parameter(mat, param::DEVIATION, params.deviation);
        sink.set_scalar_parameter(mat, param::RADIUS, params.radius);
    }
}

#[inline]
fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}
