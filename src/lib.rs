#![cfg_attr(feature = "no_std", no_std)]

//! A lightweight view-transition lifecycle runtime for Rust with `no_std` support.
//!
//! Sequences the swap of a single visible "page view" inside a host document:
//! mount mutation, title metadata, lifecycle hooks, and an optionally-async
//! transition effect run as one deterministic, non-overlapping protocol.
//!
//! ## Example
//!
//! ```rust
//! use oxide_view::{
//!     DocumentHandle, HookResult, Lifecycle, PageMeta, Renderer, TransitionOverride,
//!     ViewFragment, ViewProperties,
//! };
//!
//! struct Announce;
//!
//! impl Lifecycle for Announce {
//!     fn on_enter_completed(&mut self) -> HookResult {
//!         // the view is fully visible at this point
//!         Ok(())
//!     }
//! }
//!
//! let document = DocumentHandle::new();
//!
//! let properties = ViewProperties::new(
//!     "home",
//!     PageMeta::new("Home"),
//!     ViewFragment::new("<div>Hi</div>"),
//! );
//!
//! let mut renderer = Renderer::new(properties, document.clone(), Announce);
//!
//! // The very first view a document displays is set up synchronously.
//! renderer.add();
//! renderer.setup().unwrap();
//! assert_eq!(document.mount().slug(), Some("home".to_string()));
//!
//! // Later activations drive the asynchronous protocol instead.
//! futures::executor::block_on(renderer.show(TransitionOverride::Configured)).unwrap();
//! assert_eq!(document.title(), "Home");
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod document;
mod error;
mod hooks;
mod mount;
mod properties;
mod renderer;
mod transition;

// Public re-exports
pub use document::DocumentHandle;
pub use error::{BoxError, HookStage, LifecycleError, TransitionStep};
pub use hooks::{HookResult, Lifecycle};
pub use mount::{MountHandle, MountState, ViewMount};
pub use properties::{PageMeta, ViewFragment, ViewProperties};
pub use renderer::Renderer;
pub use transition::{
    StepFuture, TransitionEffect, TransitionFactory, TransitionOverride, TransitionResult,
};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use hooks::{InjectedFailure, RecordingHooks, Stage, StageEntry, StageRecorder};
#[cfg(any(test, feature = "testing"))]
pub use renderer::drive_to_completion;
#[cfg(any(test, feature = "testing"))]
pub use transition::{StubTransition, TransitionGate};
