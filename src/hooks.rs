//! Lifecycle hooks a concrete renderer variant may override.

#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;
#[cfg(any(test, feature = "testing"))]
use thiserror::Error;

use crate::BoxError;
#[cfg(any(test, feature = "testing"))]
use crate::{HookStage, MountHandle, MountState};

/// Outcome of a single lifecycle hook.
pub type HookResult = Result<(), BoxError>;

/// Lifecycle hooks invoked at fixed points of the show/hide protocol.
///
/// Every hook defaults to a no-op, so a concrete variant overrides exactly
/// the subset it cares about; a variant with no overrides is valid and never
/// an error. A hook returning `Err` aborts the enclosing sequence; see
/// [`LifecycleError`](crate::LifecycleError) for what is skipped.
///
/// # Example
///
/// ```rust
/// use oxide_view::{HookResult, Lifecycle};
///
/// struct Fader {
///     opacity: f32,
/// }
///
/// impl Lifecycle for Fader {
///     fn on_enter(&mut self) -> HookResult {
///         self.opacity = 0.0;
///         Ok(())
///     }
///
///     fn on_enter_completed(&mut self) -> HookResult {
///         self.opacity = 1.0;
///         Ok(())
///     }
/// }
/// ```
pub trait Lifecycle {
    /// Called while the view is being brought in: once during `setup`, and as
    /// the first hook of `show`, with the content already present in the
    /// mount.
    fn on_enter(&mut self) -> HookResult {
        Ok(())
    }

    /// Called once the entrance is complete: after the transition's `show`
    /// step has fully resolved, or immediately after
    /// [`on_enter`](Self::on_enter) when no transition applies.
    fn on_enter_completed(&mut self) -> HookResult {
        Ok(())
    }

    /// Called before the view leaves, while its content is still present in
    /// the mount.
    fn on_leave(&mut self) -> HookResult {
        Ok(())
    }

    /// Called once the view's content has been removed from the mount.
    fn on_leave_completed(&mut self) -> HookResult {
        Ok(())
    }
}

/// Hook-free variant: every hook stays a no-op.
impl Lifecycle for () {}

#[cfg(any(test, feature = "testing"))]
/// A lifecycle moment observed by the instrumentation types.
///
/// Only available with the `testing` feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Enter,
    EnterCompleted,
    Leave,
    LeaveCompleted,
    TransitionShow,
    TransitionHide,
}

#[cfg(any(test, feature = "testing"))]
/// One journal entry: the stage reached and, when a mount is being watched,
/// its occupancy at that exact moment.
///
/// Only available with the `testing` feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageEntry {
    /// The stage that was reached.
    pub stage: Stage,
    /// Mount occupancy at that moment, if the observer watches a mount.
    pub mount: Option<MountState>,
}

#[cfg(any(test, feature = "testing"))]
impl StageEntry {
    /// Entry for a stage observed with the mount in the given state.
    pub fn at(stage: Stage, mount: MountState) -> Self {
        Self {
            stage,
            mount: Some(mount),
        }
    }

    /// Entry for a stage observed without watching the mount.
    pub fn bare(stage: Stage) -> Self {
        Self { stage, mount: None }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Shared journal of lifecycle observations for assertions.
///
/// Only available with the `testing` feature.
///
/// Clone the recorder into hooks and stub transitions; all clones append to
/// the same journal, so a single recorder captures the interleaving of hook
/// dispatch and transition resolution across a whole sequence.
///
/// # Example
///
/// ```rust
/// use oxide_view::{Stage, StageRecorder};
///
/// let recorder = StageRecorder::new();
/// recorder.record(Stage::Enter, None);
///
/// assert_eq!(recorder.count(), 1);
/// recorder.with_entries(|entries| {
///     assert_eq!(entries[0].stage, Stage::Enter);
/// });
/// ```
#[derive(Clone)]
pub struct StageRecorder {
    entries: Arc<Mutex<Vec<StageEntry>>>,
}

#[cfg(any(test, feature = "testing"))]
impl StageRecorder {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append an observation, snapshotting the mount's occupancy when one is
    /// being watched.
    pub fn record(&self, stage: Stage, mount: Option<&MountHandle>) {
        let mount = mount.map(MountHandle::state);
        self.entries.lock().push(StageEntry { stage, mount });
    }

    /// Number of observations recorded so far.
    pub fn count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Inspect the journal with a closure.
    pub fn with_entries<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<StageEntry>) -> R,
    {
        let entries = self.entries.lock();
        f(&entries)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for StageRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Failure injected by the instrumentation types.
///
/// Only available with the `testing` feature.
#[derive(Debug, Error)]
#[error("injected failure in {0}")]
pub struct InjectedFailure(pub &'static str);

#[cfg(any(test, feature = "testing"))]
/// Hooks that journal every invocation into a [`StageRecorder`].
///
/// Only available with the `testing` feature.
///
/// Optionally watches the mount, capturing its occupancy at each hook, and
/// can inject a failure at a chosen stage to drive abort paths.
pub struct RecordingHooks {
    recorder: StageRecorder,
    mount: Option<MountHandle>,
    fail_at: Option<HookStage>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingHooks {
    /// Hooks that journal stages only.
    pub fn new(recorder: StageRecorder) -> Self {
        Self {
            recorder,
            mount: None,
            fail_at: None,
        }
    }

    /// Hooks that journal stages together with the mount's occupancy at each
    /// invocation.
    pub fn watching(recorder: StageRecorder, mount: MountHandle) -> Self {
        Self {
            recorder,
            mount: Some(mount),
            fail_at: None,
        }
    }

    /// Hooks that journal the attempted stage, then fail at it.
    pub fn failing(recorder: StageRecorder, stage: HookStage) -> Self {
        Self {
            recorder,
            mount: None,
            fail_at: Some(stage),
        }
    }

    fn run(&mut self, stage: HookStage) -> HookResult {
        let observed = match stage {
            HookStage::Enter => Stage::Enter,
            HookStage::EnterCompleted => Stage::EnterCompleted,
            HookStage::Leave => Stage::Leave,
            HookStage::LeaveCompleted => Stage::LeaveCompleted,
        };
        self.recorder.record(observed, self.mount.as_ref());

        if self.fail_at == Some(stage) {
            return Err(Box::new(InjectedFailure(stage.name())));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "testing"))]
impl Lifecycle for RecordingHooks {
    fn on_enter(&mut self) -> HookResult {
        self.run(HookStage::Enter)
    }

    fn on_enter_completed(&mut self) -> HookResult {
        self.run(HookStage::EnterCompleted)
    }

    fn on_leave(&mut self) -> HookResult {
        self.run(HookStage::Leave)
    }

    fn on_leave_completed(&mut self) -> HookResult {
        self.run(HookStage::LeaveCompleted)
    }
}
