//! Stage-indexed registry of observer callbacks.

use indexmap::IndexMap;
use rill_core::HookId;
use rill_field::FluidState;

/// Pipeline checkpoints a hook can attach to, in firing order.
///
/// `Never` parks a hook: it stays registered but does not fire, which
/// lets callers toggle observers without re-registering them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookStage {
    /// Before any stage of the frame runs.
    Start,
    /// After the advection stage's checkpoint.
    AfterAdvection,
    /// After the diffusion stage's checkpoint.
    AfterDiffusion,
    /// After the divergence stage's checkpoint.
    AfterDivergence,
    /// After the pressure stage's checkpoint.
    AfterPressure,
    /// After projection (and the divergence verification, when
    /// enabled).
    AfterProjection,
    /// Parked; never fires.
    Never,
}

/// An observer callback: reads fields for display or diagnostics.
///
/// Boxed with owned captures, so a hook can outlive the scope that
/// registered it; it must not assume ownership of the state it is
/// handed.
pub type HookFn = Box<dyn FnMut(&FluidState, f32) + Send>;

/// Registry mapping hook identifiers to `(callback, stage)` pairs.
///
/// Identifiers are allocated from a monotonically increasing counter
/// and never reused. Hooks at the same stage fire in registration
/// order, though callers must not rely on any ordering among them.
#[derive(Default)]
pub struct HookRegistry {
    hooks: IndexMap<HookId, (HookFn, HookStage)>,
    next_id: u64,
}

impl HookRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback at a stage, returning its fresh identifier.
    pub fn register(&mut self, hook: HookFn, stage: HookStage) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.hooks.insert(id, (hook, stage));
        id
    }

    /// Reassign a hook to a different stage.
    ///
    /// Returns `false` for an unknown identifier — hook lifecycles are
    /// dynamic, so this is a soft failure rather than an abort.
    pub fn set_stage(&mut self, id: HookId, stage: HookStage) -> bool {
        match self.hooks.get_mut(&id) {
            Some(entry) => {
                entry.1 = stage;
                true
            }
            None => false,
        }
    }

    /// Remove a hook. Idempotent: removing an unknown or already
    /// removed identifier is a no-op.
    pub fn remove(&mut self, id: HookId) {
        self.hooks.shift_remove(&id);
    }

    /// Fire every hook registered at `stage`.
    pub fn fire(&mut self, stage: HookStage, state: &FluidState, dt: f32) {
        for (hook, when) in self.hooks.values_mut() {
            if *when == stage {
                hook(state, dt);
            }
        }
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
