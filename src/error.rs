//! Failure surface for lifecycle sequences.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use core::fmt;

use thiserror::Error;

/// Boxed error carried out of hooks and transition steps.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// The lifecycle hook a failure originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookStage {
    Enter,
    EnterCompleted,
    Leave,
    LeaveCompleted,
}

impl HookStage {
    /// Hook method name, as implementors know it.
    pub fn name(self) -> &'static str {
        match self {
            HookStage::Enter => "on_enter",
            HookStage::EnterCompleted => "on_enter_completed",
            HookStage::Leave => "on_leave",
            HookStage::LeaveCompleted => "on_leave_completed",
        }
    }
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The transition step a failure originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    Show,
    Hide,
}

impl TransitionStep {
    /// Step method name on the transition effect.
    pub fn name(self) -> &'static str {
        match self {
            TransitionStep::Show => "show",
            TransitionStep::Hide => "hide",
        }
    }
}

impl fmt::Display for TransitionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure raised while driving a `setup`, `show`, or `hide` sequence.
///
/// A failing hook or transition step aborts the sequence where it stands:
/// every later step is skipped and the mount is left exactly as the completed
/// prefix left it. In particular, a `hide` whose transition step fails has NOT
/// cleared the mount. There is no retry; recovery is the caller's concern.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A lifecycle hook reported a failure.
    #[error("{stage} hook failed: {source}")]
    Hook {
        /// The hook that failed.
        stage: HookStage,
        source: BoxError,
    },

    /// The transition effect failed while running a step.
    #[error("transition {step} step failed: {source}")]
    Transition {
        /// The step that failed.
        step: TransitionStep,
        source: BoxError,
    },
}
