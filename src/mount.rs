//! The shared mount slot holding the active view's markup.

#[cfg(feature = "no_std")]
use alloc::borrow::ToOwned;
#[cfg(feature = "no_std")]
use alloc::string::String;

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::ViewFragment;

/// Occupancy of the view mount.
///
/// Tracked explicitly so sequencing mistakes surface as a wrong state rather
/// than silently stacked markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountState {
    /// No view markup is installed.
    Empty,
    /// A view's markup is installed.
    Occupied,
}

/// The single persistent slot designated to hold the active view's markup.
///
/// Owned by the host document and shared, via [`MountHandle`], with every
/// renderer that operates on it. The identifying attribute mirrors the
/// installed view's slug and survives [`clear`](Self::clear): emptying the
/// mount removes content only, the marker stays behind.
#[derive(Debug)]
pub struct ViewMount {
    slug: Option<String>,
    markup: String,
    state: MountState,
}

impl ViewMount {
    /// Create an empty mount with no identifying attribute.
    pub fn new() -> Self {
        Self {
            slug: None,
            markup: String::new(),
            state: MountState::Empty,
        }
    }

    /// Install a view: set the identifying attribute and replace all markup.
    ///
    /// Re-installing rewrites the same content. Any state previously held
    /// inside the mount is destroyed.
    pub fn install(&mut self, slug: &str, view: &ViewFragment) {
        self.slug = Some(slug.to_owned());
        self.markup = view.markup().to_owned();
        self.state = MountState::Occupied;
    }

    /// Empty the mount's markup, whatever it held. The identifying attribute
    /// is retained.
    pub fn clear(&mut self) {
        self.markup.clear();
        self.state = MountState::Empty;
    }

    /// The identifying attribute, if a view was ever installed.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// The markup currently held by the mount.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Current occupancy.
    pub fn state(&self) -> MountState {
        self.state
    }
}

impl Default for ViewMount {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a host document's [`ViewMount`].
///
/// Cloning the handle shares the same mount. The mount carries no mutual
/// exclusion of its own: renderers holding clones must be driven strictly in
/// alternation, never concurrently.
///
/// # Example
///
/// ```rust
/// use oxide_view::{MountHandle, MountState, ViewFragment};
///
/// let mount = MountHandle::new();
/// mount.install("home", &ViewFragment::new("<div>Hi</div>"));
///
/// assert_eq!(mount.slug(), Some("home".to_string()));
/// assert!(mount.is_occupied());
///
/// mount.clear();
/// assert_eq!(mount.state(), MountState::Empty);
/// // The identifying attribute outlives the content.
/// assert_eq!(mount.slug(), Some("home".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct MountHandle {
    inner: Arc<Mutex<ViewMount>>,
}

impl MountHandle {
    /// Create a handle to a fresh, empty mount.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewMount::new())),
        }
    }

    /// Install a view's markup under the given identifying attribute.
    pub fn install(&self, slug: &str, view: &ViewFragment) {
        self.inner.lock().install(slug, view);
    }

    /// Empty the mount's markup.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// The identifying attribute, if a view was ever installed.
    pub fn slug(&self) -> Option<String> {
        self.inner.lock().slug().map(ToOwned::to_owned)
    }

    /// The markup currently held by the mount.
    pub fn markup(&self) -> String {
        self.inner.lock().markup().to_owned()
    }

    /// Current occupancy.
    pub fn state(&self) -> MountState {
        self.inner.lock().state()
    }

    /// Whether a view's markup is currently installed.
    pub fn is_occupied(&self) -> bool {
        self.state() == MountState::Occupied
    }

    /// Inspect the mount with a closure.
    ///
    /// The closure receives the mount under its lock; keep it short and never
    /// call back into a renderer from inside it.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewMount) -> R,
    {
        let mount = self.inner.lock();
        f(&mount)
    }
}

impl Default for MountHandle {
    fn default() -> Self {
        Self::new()
    }
}
