//! Transition effect contract and the per-call override.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use core::fmt;
use core::future::Future;
use core::pin::Pin;

use crate::{BoxError, MountHandle};
#[cfg(any(test, feature = "testing"))]
use crate::{
    hooks::{InjectedFailure, Stage, StageRecorder},
    TransitionStep,
};

/// Outcome of a single transition step.
pub type TransitionResult = Result<(), BoxError>;

/// Boxed future returned by a transition step; resolves once the step is
/// visually complete.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = TransitionResult> + Send + 'a>>;

/// Visual entrance and exit steps bound to a view mount.
///
/// An effect is constructed against the [`MountHandle`] it animates (see
/// [`TransitionFactory`]) and owned by exactly one renderer, so it never
/// outlives it. The renderer awaits each step to completion before moving on:
/// `hide` resolving is the signal that it is safe to clear the mount.
///
/// A step resolving `Err` aborts the enclosing sequence.
///
/// # Example
///
/// ```rust
/// use oxide_view::{MountHandle, StepFuture, TransitionEffect};
///
/// struct Fade {
///     mount: MountHandle,
/// }
///
/// impl TransitionEffect for Fade {
///     fn show(&mut self) -> StepFuture<'_> {
///         Box::pin(async {
///             // drive the entrance animation against the bound mount
///             Ok(())
///         })
///     }
///
///     fn hide(&mut self) -> StepFuture<'_> {
///         Box::pin(async { Ok(()) })
///     }
/// }
/// ```
pub trait TransitionEffect {
    /// Entrance step; resolves when the entrance is visually complete.
    fn show(&mut self) -> StepFuture<'_>;

    /// Exit step; resolves when the exit is complete and the mount may be
    /// cleared.
    fn hide(&mut self) -> StepFuture<'_>;
}

/// Constructor binding a [`TransitionEffect`] to the view mount.
///
/// Consumed at most once, when the renderer is built.
pub type TransitionFactory =
    Box<dyn FnOnce(MountHandle) -> Box<dyn TransitionEffect + Send> + Send>;

/// Per-call choice of transition behavior for one `show`/`hide` invocation.
///
/// The renderer resolves the choice before awaiting anything, so a
/// substituted effect runs under exactly the same sequencing guarantees as a
/// configured one.
#[derive(Default)]
pub enum TransitionOverride {
    /// Run the transition configured on the renderer, if any.
    #[default]
    Configured,
    /// Skip the transition for this invocation only; hooks and mount mutation
    /// still run.
    Suppressed,
    /// Run this effect instead of the configured one, for this invocation
    /// only. The caller binds it to the same mount.
    Substitute(Box<dyn TransitionEffect + Send>),
}

impl fmt::Debug for TransitionOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionOverride::Configured => f.write_str("Configured"),
            TransitionOverride::Suppressed => f.write_str("Suppressed"),
            TransitionOverride::Substitute(_) => f.write_str("Substitute(..)"),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Manually released latch holding a [`StubTransition`] step open.
///
/// Only available with the `testing` feature.
///
/// Each [`release`](Self::release) lets one pending or future step resolve.
/// Dropping the gate releases every step still waiting on it.
pub struct TransitionGate {
    permits: flume::Sender<()>,
}

#[cfg(any(test, feature = "testing"))]
impl TransitionGate {
    /// Let one gated step resolve.
    pub fn release(&self) {
        let _ = self.permits.send(());
    }
}

#[cfg(any(test, feature = "testing"))]
/// Scripted transition effect journaling each step's resolution.
///
/// Only available with the `testing` feature.
///
/// Steps resolve immediately, wait on a [`TransitionGate`], or fail on
/// demand; resolution is journaled into the shared [`StageRecorder`],
/// optionally together with the mount's occupancy at that moment.
pub struct StubTransition {
    recorder: StageRecorder,
    mount: Option<MountHandle>,
    gate: Option<flume::Receiver<()>>,
    fail_on: Option<TransitionStep>,
}

#[cfg(any(test, feature = "testing"))]
impl StubTransition {
    /// Steps resolve on first poll.
    pub fn immediate(recorder: StageRecorder) -> Self {
        Self {
            recorder,
            mount: None,
            gate: None,
            fail_on: None,
        }
    }

    /// Steps wait for one gate release each before resolving.
    pub fn gated(recorder: StageRecorder) -> (Self, TransitionGate) {
        let (permits, gate) = flume::unbounded();
        let stub = Self {
            recorder,
            mount: None,
            gate: Some(gate),
            fail_on: None,
        };
        (stub, TransitionGate { permits })
    }

    /// The named step resolves with an error instead of completing.
    pub fn failing(recorder: StageRecorder, step: TransitionStep) -> Self {
        Self {
            recorder,
            mount: None,
            gate: None,
            fail_on: Some(step),
        }
    }

    /// Capture the mount's occupancy at each step resolution.
    pub fn watching(mut self, mount: MountHandle) -> Self {
        self.mount = Some(mount);
        self
    }

    /// Box the stub for use as a configured or substituted effect.
    pub fn boxed(self) -> Box<dyn TransitionEffect + Send> {
        Box::new(self)
    }

    async fn step(&mut self, step: TransitionStep) -> TransitionResult {
        if let Some(gate) = &self.gate {
            let _ = gate.recv_async().await;
        }

        if self.fail_on == Some(step) {
            return Err(Box::new(InjectedFailure(step.name())));
        }

        let observed = match step {
            TransitionStep::Show => Stage::TransitionShow,
            TransitionStep::Hide => Stage::TransitionHide,
        };
        self.recorder.record(observed, self.mount.as_ref());
        Ok(())
    }
}

#[cfg(any(test, feature = "testing"))]
impl TransitionEffect for StubTransition {
    fn show(&mut self) -> StepFuture<'_> {
        Box::pin(self.step(TransitionStep::Show))
    }

    fn hide(&mut self) -> StepFuture<'_> {
        Box::pin(self.step(TransitionStep::Hide))
    }
}
