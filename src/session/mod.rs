//! The slice-session coordinator and its supporting state.

pub use self::config::{RollConfig, RollConfigError};
pub use self::coordinator::SliceCoordinator;
pub use self::registry::{RollParams, SliceRecord, SliceRegistry};

mod config;
mod coordinator;
mod depth;
mod registry;

use crate::math::Real;

/// The lifecycle state of a cutting session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No cut is in progress; the registry is empty and tool-movement ticks
    /// are ignored.
    Idle,
    /// At least one piece was produced and not yet finalized.
    Cutting,
}

/// Process state of the active cutting session.
///
/// This is the single source of truth for "is a cut in progress": the
/// registry's emptiness always agrees with it, but is never consulted to
/// answer that question.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CutSession {
    state: SessionState,
    /// The deepest tool position observed this session, in the active piece's
    /// local frame. `Real::INFINITY` until the first tool-movement tick.
    deepest_depth: Real,
}

impl CutSession {
    pub(crate) fn new() -> Self {
        Self {
            state: SessionState::Idle,
            deepest_depth: Real::INFINITY,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn is_cutting(&self) -> bool {
        self.state == SessionState::Cutting
    }

    pub(crate) fn deepest_depth(&self) -> Real {
        self.deepest_depth
    }

    pub(crate) fn set_deepest_depth(&mut self, depth: Real) {
        self.deepest_depth = depth;
    }

    /// Transitions `Idle → Cutting`, resetting the depth sentinel.
    pub(crate) fn begin(&mut self) {
        self.state = SessionState::Cutting;
        self.deepest_depth = Real::INFINITY;
    }

    /// Transitions `Cutting → Idle`.
    pub(crate) fn end(&mut self) {
        self.state = SessionState::Idle;
        self.deepest_depth = Real::INFINITY;
    }
}
