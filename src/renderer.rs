//! The lifecycle controller owning one view's mount protocol.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use log::{debug, trace};

use crate::{
    DocumentHandle, HookResult, HookStage, Lifecycle, LifecycleError, MountHandle,
    TransitionEffect, TransitionOverride, TransitionStep, ViewProperties,
};

/// Lifecycle controller for a single view.
///
/// A renderer owns one view's mount protocol: it installs and removes the
/// view's markup, keeps the document title current, dispatches the
/// [`Lifecycle`] hooks at fixed points, and awaits the transition effect's
/// steps so that entrance and exit never overlap mount mutation.
///
/// One renderer is created per view activation and dropped once its view has
/// been fully hidden; it is never reused. Renderers sharing a mount must be
/// driven strictly in alternation: the mount carries no mutual exclusion of
/// its own, and two overlapping shows corrupt its content.
///
/// See the [crate-level documentation](crate) for a complete example.
///
/// # Type Parameters
///
/// * `Hooks` - The lifecycle hook implementation (implements [`Lifecycle`]);
///   use `()` for a hook-free renderer
pub struct Renderer<Hooks: Lifecycle> {
    document: DocumentHandle,
    mount: MountHandle,
    properties: ViewProperties,
    transition: Option<Box<dyn TransitionEffect + Send>>,
    hooks: Hooks,
}

impl<Hooks: Lifecycle> Renderer<Hooks> {
    /// Build a renderer for one view.
    ///
    /// The transition factory, when configured, is consumed here to bind the
    /// effect to the document's mount. Without one, `show` and `hide` skip
    /// the transition await entirely.
    ///
    /// # Arguments
    ///
    /// * `properties` - The view's configuration (slug, page metadata, markup,
    ///   optional transition factory)
    /// * `document` - Handle to the host document holding the view mount
    /// * `hooks` - Lifecycle hook implementation for this view
    pub fn new(mut properties: ViewProperties, document: DocumentHandle, hooks: Hooks) -> Self {
        let mount = document.mount();
        let transition = properties
            .transition
            .take()
            .map(|factory| factory(mount.clone()));

        Self {
            document,
            mount,
            properties,
            transition,
            hooks,
        }
    }

    /// The configured view identifier.
    pub fn slug(&self) -> &str {
        &self.properties.slug
    }

    /// The configuration this renderer was built with.
    pub fn properties(&self) -> &ViewProperties {
        &self.properties
    }

    /// One-time initialization for the very first view a document displays.
    ///
    /// Runs `on_enter` then `on_enter_completed`, in that order, with no
    /// transition involved: there is no prior view whose exit could overlap
    /// the entrance. Hook failures propagate to the caller.
    pub fn setup(&mut self) -> Result<(), LifecycleError> {
        debug!("view: setup slug={}", self.properties.slug);

        run_hook(self.hooks.on_enter(), HookStage::Enter)?;
        run_hook(self.hooks.on_enter_completed(), HookStage::EnterCompleted)?;
        Ok(())
    }

    /// Install the view: write the identifying attribute and replace the
    /// mount's entire markup with the configured fragment.
    ///
    /// Idempotent in effect; re-invoking rewrites the same content. Any
    /// state previously held inside the mount is destroyed.
    pub fn add(&self) {
        debug!("view: install slug={}", self.properties.slug);
        self.mount
            .install(&self.properties.slug, &self.properties.view);
    }

    /// Empty the mount entirely.
    ///
    /// Callers sequence this strictly after any exit step that needs the old
    /// content visible; [`hide`](Self::hide) already does.
    pub fn remove(&self) {
        debug!("view: clear mount slug={}", self.properties.slug);
        self.mount.clear();
    }

    /// Write the configured page title into the document.
    pub fn update(&self) {
        trace!("view: title -> {:?}", self.properties.page.title);
        self.document.set_title(&self.properties.page.title);
    }

    /// Bring the view in, playing the entrance transition if one applies.
    ///
    /// Sequence, each step awaited before the next: [`update`](Self::update),
    /// `on_enter`, the transition's `show` step as selected by `transition`,
    /// then `on_enter_completed`, never before the transition step has fully
    /// resolved. When no transition applies, the whole sequence is
    /// synchronous and the future resolves on its first poll.
    ///
    /// The view's content must already be installed via [`add`](Self::add);
    /// `show` does not install it.
    ///
    /// A hook or transition failure resolves the future with `Err` and skips
    /// every later step.
    pub async fn show(&mut self, transition: TransitionOverride) -> Result<(), LifecycleError> {
        debug!(
            "view: show slug={} transition={:?}",
            self.properties.slug, transition
        );

        self.update();
        run_hook(self.hooks.on_enter(), HookStage::Enter)?;
        self.run_transition(transition, TransitionStep::Show).await?;
        run_hook(self.hooks.on_enter_completed(), HookStage::EnterCompleted)?;

        Ok(())
    }

    /// Take the view out, playing the exit transition if one applies.
    ///
    /// Sequence: `on_leave` (content still present), the transition's `hide`
    /// step, [`remove`](Self::remove) once the exit has fully resolved, then
    /// `on_leave_completed`, strictly after removal.
    ///
    /// If the transition step fails, the sequence aborts with the mount left
    /// untouched: content is not removed.
    pub async fn hide(&mut self, transition: TransitionOverride) -> Result<(), LifecycleError> {
        debug!(
            "view: hide slug={} transition={:?}",
            self.properties.slug, transition
        );

        run_hook(self.hooks.on_leave(), HookStage::Leave)?;
        self.run_transition(transition, TransitionStep::Hide).await?;
        self.remove();
        run_hook(self.hooks.on_leave_completed(), HookStage::LeaveCompleted)?;

        Ok(())
    }

    async fn run_transition(
        &mut self,
        transition: TransitionOverride,
        step: TransitionStep,
    ) -> Result<(), LifecycleError> {
        match transition {
            TransitionOverride::Configured => match self.transition.as_deref_mut() {
                Some(effect) => drive(effect, step).await,
                None => Ok(()),
            },
            TransitionOverride::Suppressed => {
                trace!("view: transition suppressed for this call");
                Ok(())
            }
            TransitionOverride::Substitute(mut effect) => drive(effect.as_mut(), step).await,
        }
    }
}

async fn drive(
    effect: &mut (dyn TransitionEffect + Send),
    step: TransitionStep,
) -> Result<(), LifecycleError> {
    trace!("view: awaiting transition {} step", step);
    let result = match step {
        TransitionStep::Show => effect.show().await,
        TransitionStep::Hide => effect.hide().await,
    };
    result.map_err(|source| LifecycleError::Transition { step, source })
}

fn run_hook(result: HookResult, stage: HookStage) -> Result<(), LifecycleError> {
    trace!("view: dispatched {} hook", stage);
    result.map_err(|source| LifecycleError::Hook { stage, source })
}

#[cfg(any(test, feature = "testing"))]
/// Drive a lifecycle future to completion on the current thread.
///
/// Only available with the `testing` feature. Thin wrapper over
/// `futures::executor::block_on` for tests that do not need manual polling.
pub fn drive_to_completion<F: core::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
