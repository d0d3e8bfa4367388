//! Browser DOM Backend
//!
//! `web-sys` implementation of the `widget-core` DOM seam. Mirrors what the
//! shell needs and nothing more: selector lookup, iframe creation with access
//! to the frame's own document, attribute/style mutation, and detachment.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement};

use widget_core::error::{EmbedError, Result};
use widget_core::{Dom, IframeParts};

/// DOM backend over the page's `window.document`
pub struct WebDom {
    document: Document,
    body: HtmlElement,
}

impl WebDom {
    /// Bind to the global window's document
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| EmbedError::Surface("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EmbedError::Surface("window has no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| EmbedError::Surface("document has no body".into()))?;
        Ok(Self { document, body })
    }
}

fn surface_err(context: &str) -> impl FnOnce(JsValue) -> EmbedError + '_ {
    move |value| EmbedError::Surface(format!("{context}: {value:?}"))
}

impl Dom for WebDom {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Element {
        self.body.clone().into()
    }

    fn create_iframe(&self, host: &Element) -> Result<IframeParts<Element>> {
        let frame = self
            .document
            .create_element("iframe")
            .map_err(surface_err("create iframe"))?;
        host.append_child(&frame)
            .map_err(surface_err("attach iframe"))?;

        // Same-origin about:blank document, available right after attach
        let inner = frame
            .dyn_ref::<HtmlIFrameElement>()
            .and_then(HtmlIFrameElement::content_document)
            .ok_or_else(|| EmbedError::Surface("frame document unavailable".into()))?;
        let head = inner
            .head()
            .ok_or_else(|| EmbedError::Surface("frame document has no head".into()))?;
        let body = inner
            .body()
            .ok_or_else(|| EmbedError::Surface("frame document has no body".into()))?;

        Ok(IframeParts {
            frame,
            head: head.into(),
            body: body.into(),
        })
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn append_style(&self, head: &Element, css: &str) -> Result<()> {
        let style = self
            .document
            .create_element("style")
            .map_err(surface_err("create style"))?;
        style.set_inner_html(css);
        head.append_child(&style)
            .map_err(surface_err("inject style"))?;
        Ok(())
    }

    fn append_mount_point(&self, body: &Element) -> Result<Element> {
        let mount_point = self
            .document
            .create_element("div")
            .map_err(surface_err("create mount point"))?;
        body.append_child(&mount_point)
            .map_err(surface_err("attach mount point"))?;
        Ok(mount_point)
    }

    fn remove(&self, element: &Element) -> bool {
        match element.parent_node() {
            Some(parent) => parent.remove_child(element).is_ok(),
            None => false,
        }
    }
}
