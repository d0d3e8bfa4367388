//! DOM Seam
//!
//! Abstraction over the handful of host-page operations the embedding shell
//! performs. The browser implementation lives in the `widget-web` crate; an
//! in-memory [`MockDom`] backs native tests and consumer test suites.

mod mock;

pub use mock::{MockDom, MockElement};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A reported content size, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Pieces of a freshly created, already-attached iframe
///
/// `head` and `body` belong to the iframe's own document, not the host page.
pub struct IframeParts<E> {
    pub frame: E,
    pub head: E,
    pub body: E,
}

/// Where an inline render should attach: a selector or a resolved element
#[derive(Clone, Debug)]
pub enum HostTarget<E> {
    Selector(String),
    Element(E),
}

impl<E> HostTarget<E> {
    /// Wrap an already-resolved element
    pub fn element(element: E) -> Self {
        HostTarget::Element(element)
    }
}

impl<E> From<&str> for HostTarget<E> {
    fn from(selector: &str) -> Self {
        HostTarget::Selector(selector.to_string())
    }
}

impl<E> From<String> for HostTarget<E> {
    fn from(selector: String) -> Self {
        HostTarget::Selector(selector)
    }
}

/// Host document operations (Strategy pattern)
///
/// Implement this per platform: `web-sys` in the browser, [`MockDom`] in
/// tests. Element handles are cheap clones referring to the same node.
/// Implementations are `'static`: the widget shares them with surface event
/// callbacks that may outlive any one render call.
pub trait Dom: 'static {
    type Element: Clone + 'static;

    /// Look up an element by CSS selector
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// The document's top-level body element
    fn body(&self) -> Self::Element;

    /// Create an iframe, append it as the last child of `host`, and expose
    /// the head and body of the iframe's own document
    fn create_iframe(&self, host: &Self::Element) -> Result<IframeParts<Self::Element>>;

    /// Set an attribute on an element
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Set an inline style property on an element
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Append a style block containing `css` to a document head
    fn append_style(&self, head: &Self::Element, css: &str) -> Result<()>;

    /// Append an empty mount point element to a document body
    fn append_mount_point(&self, body: &Self::Element) -> Result<Self::Element>;

    /// Detach an element from its parent; `false` if already detached
    fn remove(&self, element: &Self::Element) -> bool;
}
