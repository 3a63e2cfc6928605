//! The host document collaborator: title metadata plus the single view mount.

#[cfg(feature = "no_std")]
use alloc::borrow::ToOwned;
#[cfg(feature = "no_std")]
use alloc::string::String;

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::MountHandle;

/// Handle to the host document a renderer writes into.
///
/// Carries the document's title slot and the one [`MountHandle`] designated as
/// the view mount. Construct it once, before any renderer, and clone it
/// freely: clones share the same document.
///
/// # Example
///
/// ```rust
/// use oxide_view::DocumentHandle;
///
/// let document = DocumentHandle::new();
/// document.set_title("Home");
///
/// assert_eq!(document.title(), "Home");
/// assert!(!document.mount().is_occupied());
/// ```
#[derive(Clone, Debug)]
pub struct DocumentHandle {
    title: Arc<Mutex<String>>,
    mount: MountHandle,
}

impl DocumentHandle {
    /// Create a document with an empty title and an empty mount.
    pub fn new() -> Self {
        Self {
            title: Arc::new(Mutex::new(String::new())),
            mount: MountHandle::new(),
        }
    }

    /// Current document title.
    pub fn title(&self) -> String {
        self.title.lock().clone()
    }

    /// Replace the document title.
    pub fn set_title(&self, title: &str) {
        *self.title.lock() = title.to_owned();
    }

    /// The document's view mount.
    pub fn mount(&self) -> MountHandle {
        self.mount.clone()
    }
}

impl Default for DocumentHandle {
    fn default() -> Self {
        Self::new()
    }
}
