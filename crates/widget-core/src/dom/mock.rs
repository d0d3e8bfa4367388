//! Mock DOM
//!
//! For testing and demo purposes. Models just enough of a document tree to
//! observe what the embedding shell does: attachment, attributes, inline
//! styles, and the iframe's injected head/body content.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{Dom, IframeParts};
use crate::error::Result;

struct NodeData {
    tag: String,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    children: Vec<MockElement>,
    parent: Weak<RefCell<NodeData>>,
}

/// Handle to a mock DOM node; clones refer to the same node
#[derive(Clone)]
pub struct MockElement(Rc<RefCell<NodeData>>);

// Manual impl: the node tree is recursive, so print a flat summary
impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MockElement")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("styles", &data.styles)
            .field("children", &data.children.len())
            .finish()
    }
}

impl MockElement {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    fn append(&self, child: &MockElement) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Identity comparison, like comparing DOM node references
    pub fn same_node(&self, other: &MockElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn child(&self, index: usize) -> Option<MockElement> {
        self.0.borrow().children.get(index).cloned()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().parent.upgrade().is_some()
    }
}

/// Mock document with a body and registered selector lookups
pub struct MockDom {
    body: MockElement,
    selectors: RefCell<HashMap<String, MockElement>>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    pub fn new() -> Self {
        Self {
            body: MockElement::new("body"),
            selectors: RefCell::new(HashMap::new()),
        }
    }

    /// Create a div under the body and register it for selector lookup
    pub fn insert_host(&self, selector: &str) -> MockElement {
        let host = MockElement::new("div");
        self.body.append(&host);
        self.selectors
            .borrow_mut()
            .insert(selector.to_string(), host.clone());
        host
    }
}

impl Dom for MockDom {
    type Element = MockElement;

    fn query_selector(&self, selector: &str) -> Option<MockElement> {
        self.selectors.borrow().get(selector).cloned()
    }

    fn body(&self) -> MockElement {
        self.body.clone()
    }

    fn create_iframe(&self, host: &MockElement) -> Result<IframeParts<MockElement>> {
        let frame = MockElement::new("iframe");
        host.append(&frame);

        // The iframe document is modeled as head/body children of the frame
        let head = MockElement::new("head");
        let body = MockElement::new("body");
        frame.append(&head);
        frame.append(&body);

        Ok(IframeParts { frame, head, body })
    }

    fn set_attribute(&self, element: &MockElement, name: &str, value: &str) {
        element
            .0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_style(&self, element: &MockElement, property: &str, value: &str) {
        element
            .0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn append_style(&self, head: &MockElement, css: &str) -> Result<()> {
        let style = MockElement::new("style");
        style.0.borrow_mut().text = css.to_string();
        head.append(&style);
        Ok(())
    }

    fn append_mount_point(&self, body: &MockElement) -> Result<MockElement> {
        let mount_point = MockElement::new("div");
        body.append(&mount_point);
        Ok(mount_point)
    }

    fn remove(&self, element: &MockElement) -> bool {
        let Some(parent) = element.0.borrow().parent.upgrade() else {
            return false;
        };
        parent
            .borrow_mut()
            .children
            .retain(|child| !Rc::ptr_eq(&child.0, &element.0));
        element.0.borrow_mut().parent = Weak::new();
        true
    }
}
