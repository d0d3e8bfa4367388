//! # widget-web
//!
//! Browser side of the payment widget: a `web-sys` implementation of the
//! `widget-core` DOM seam plus a `wasm-bindgen` facade exposing the widget
//! classes to JavaScript host pages.
//!
//! Everything here touches real browser APIs, so the modules only exist on
//! `wasm32` targets; on native targets this crate compiles to nothing and the
//! core stays testable with plain `cargo test`.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod js_api;

#[cfg(target_arch = "wasm32")]
pub use dom::WebDom;
#[cfg(target_arch = "wasm32")]
pub use js_api::{JsMountApp, WebPayWidget, WebWidgetFactory};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}
