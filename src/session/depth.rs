use crate::curve::ResponseCurve;
use crate::interop::{param, MaterialHandle, MaterialSink};
use crate::math::{Point, Real};
use crate::session::SliceCoordinator;

impl<C: ResponseCurve> SliceCoordinator<C> {
    /// Entry point for a tool-movement tick.
    ///
    /// The tool's world position is reinterpreted in the local frame of the
    /// active slice (the most recently registered one), because the cut-depth
    /// of a slice only makes sense along its own depth axis. If the tool
    /// reached a new deepest point, the session depth and the active slice's
    /// recorded depth are updated. The deepest depth is then pushed to the
    /// active slice's materials and to the materials of every sibling whose
    /// recorded depth still lags behind: all slices of a session originate
    /// from one continuous sweep and must visually show the same cut-depth.
    ///
    /// Sibling records are not rewritten: propagation is a visual
    /// synchronization side effect, not a registry mutation. A tick arriving
    /// while no session is active is a no-op.
    pub fn on_tool_moved(&mut self, tool_position: &Point<Real>, sink: &mut dyn MaterialSink) {
        if !self.session.is_cutting() {
            return;
        }

        let depth_axis = self.config.depth_axis;
        let Some(active) = self.registry.active_mut() else {
            return;
        };

        let local_depth = active.local_frame.inverse_transform_point(tool_position)[depth_axis];

        if local_depth < self.session.deepest_depth() {
            self.session.set_deepest_depth(local_depth);
            active.recorded_depth = local_depth;
            log::trace!("new deepest cut-depth: {local_depth}");
        }

        let active_body = active.body;
        let deepest = self.session.deepest_depth();

        for record in self.registry.iter() {
            if record.body == active_body {
                // The active slice always reflects the current depth.
                apply_depth(sink, record.materials(), deepest);
                continue;
            }

            if record.recorded_depth > deepest {
                apply_depth(sink, record.materials(), deepest);
            }
        }
    }
}

fn apply_depth(sink: &mut dyn MaterialSink, materials: &[MaterialHandle], depth: Real) {
    for &mat in materials {
        sink.set_scalar_parameter(mat, param::CUT_DEPTH, depth);
    }
}
