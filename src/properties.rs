//! Construction-time configuration for a renderer.

#[cfg(feature = "no_std")]
use alloc::string::String;

use crate::TransitionFactory;

/// Metadata describing the page a view belongs to.
///
/// Minimally the document title, written verbatim by
/// [`Renderer::update`](crate::Renderer::update).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Title the document takes while this view is active.
    pub title: String,
}

impl PageMeta {
    /// Metadata carrying the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A detached fragment of markup, ready to be installed into the mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewFragment(String);

impl ViewFragment {
    /// Wrap detached markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The fragment's markup.
    pub fn markup(&self) -> &str {
        &self.0
    }
}

/// Immutable configuration a renderer is constructed with.
///
/// The renderer takes ownership for its own lifetime. The transition factory,
/// when present, is consumed exactly once at construction to bind the effect
/// to the mount; without one, `show` and `hide` run fully synchronous
/// sequences.
///
/// # Example
///
/// ```rust
/// use oxide_view::{PageMeta, ViewFragment, ViewProperties};
///
/// let properties = ViewProperties::new(
///     "home",
///     PageMeta::new("Home"),
///     ViewFragment::new("<div>Hi</div>"),
/// );
///
/// assert_eq!(properties.slug, "home");
/// assert!(properties.transition.is_none());
/// ```
pub struct ViewProperties {
    /// Identifier written as the mount's identifying attribute.
    pub slug: String,
    /// Page metadata applied by `update`.
    pub page: PageMeta,
    /// Markup installed by `add`.
    pub view: ViewFragment,
    /// Optional constructor for the transition effect.
    pub transition: Option<TransitionFactory>,
}

impl ViewProperties {
    /// Properties with no transition effect.
    pub fn new(slug: impl Into<String>, page: PageMeta, view: ViewFragment) -> Self {
        Self {
            slug: slug.into(),
            page,
            view,
            transition: None,
        }
    }

    /// Attach a transition factory.
    pub fn with_transition(mut self, factory: TransitionFactory) -> Self {
        self.transition = Some(factory);
        self
    }
}
