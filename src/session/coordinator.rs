use crate::curve::ResponseCurve;
use crate::interop::{CutPlane, MaterialSink, PhysicsSink, Sliceable, SplitOutcome};
use crate::math::Real;
use crate::session::registry::{apply_params, derive_params};
use crate::session::{
    CutSession, RollConfig, RollConfigError, SessionState, SliceRecord, SliceRegistry,
};

/// The slice-session coordinator.
///
/// One coordinator instance owns the state of at most one cutting session at a
/// time: the ordered registry of in-flight slices, the session lifecycle, and
/// the deepest cut-depth reached by the tool. Event wiring holds the instance
/// explicitly and forwards collision/trigger events to [`Self::cut`],
/// [`Self::on_tool_moved`](SliceCoordinator::on_tool_moved) and
/// [`Self::finalize`]; there is no ambient global access.
///
/// All operations are synchronous and run to completion on the caller's
/// thread. The only asynchronous boundary is the splitting collaborator, whose
/// completions re-enter through [`Self::on_split_complete`].
pub struct SliceCoordinator<C> {
    pub(crate) config: RollConfig,
    pub(crate) curve: C,
    pub(crate) session: CutSession,
    pub(crate) registry: SliceRegistry,
}

impl<C: ResponseCurve> SliceCoordinator<C> {
    /// Initializes an idle coordinator from a validated configuration and a
    /// response curve.
    pub fn new(config: RollConfig, curve: C) -> Result<Self, RollConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            curve,
            session: CutSession::new(),
            registry: SliceRegistry::default(),
        })
    }

    /// The configuration this coordinator was built with.
    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Is a cutting session in progress?
    pub fn is_cutting(&self) -> bool {
        self.session.is_cutting()
    }

    /// The slices registered by the active session, if any.
    pub fn registry(&self) -> &SliceRegistry {
        &self.registry
    }

    /// The deepest tool position observed this session, or `Real::INFINITY`
    /// when no tool-movement tick was seen yet.
    pub fn deepest_depth(&self) -> Real {
        self.session.deepest_depth()
    }

    /// Entry point for a "cut" collision event.
    ///
    /// A target without the splitting capability (`None`) is a silent no-op.
    /// Otherwise the split is attempted and, whenever the collaborator
    /// completes it, the produced piece is registered through
    /// [`Self::on_split_complete`]. Collaborators that defer completion past
    /// this call must deliver the outcome to `on_split_complete` themselves.
    pub fn cut(
        &mut self,
        target: Option<&mut dyn Sliceable>,
        plane: &CutPlane,
        sink: &mut dyn MaterialSink,
    ) {
        let Some(target) = target else {
            return;
        };

        target.try_split(plane, &mut |outcome| {
            self.on_split_complete(outcome, plane, &mut *sink);
        });
    }

    /// Registers the outcome of one split attempt.
    ///
    /// A failed split leaves the session untouched. A successful one
    /// registers the produced piece in creation order, derives its rolling
    /// parameters, and makes it the active piece of the session (starting the
    /// session if none is in progress). Registration is idempotent: a piece
    /// already present keeps its record unchanged.
    pub fn on_split_complete(
        &mut self,
        outcome: SplitOutcome,
        plane: &CutPlane,
        sink: &mut dyn MaterialSink,
    ) {
        let piece = match outcome {
            SplitOutcome::Split(piece) => piece,
            SplitOutcome::Failed => return,
        };

        if self.registry.contains(piece.body) {
            return;
        }

        if !self.session.is_cutting() {
            self.session.begin();
            log::debug!("cutting session started");
        }

        let thickness = piece.extent_along(&plane.normal);
        let order = self.registry.len() as u32 + 1;

        // The predecessor in the cascade is the previously active slice.
        let params = derive_params(&self.config, &self.curve, thickness, self.registry.active());
        apply_params(sink, &piece.materials, &params);

        log::debug!(
            "registered slice #{order}: thickness {thickness}, radius {}",
            params.radius
        );

        self.registry.push(SliceRecord {
            body: piece.body,
            order,
            thickness,
            params,
            recorded_depth: self.session.deepest_depth(),
            local_frame: piece.local_frame,
            materials: piece.materials,
        });
    }

    /// Entry point for the terminal-surface collision event.
    ///
    /// Hands every registered slice over to physics simulation, then clears
    /// the registry and returns to `Idle`, atomically within this call. A
    /// no-op while idle.
    pub fn finalize(&mut self, physics: &mut dyn PhysicsSink) {
        if !self.session.is_cutting() {
            return;
        }

        for record in self.registry.iter() {
            physics.set_simulated(record.body, true);
        }

        log::debug!("cutting session finalized, {} slices released", self.registry.len());

        self.registry.clear();
        self.session.end();
    }
}
