//! JavaScript Facade
//!
//! Exposes the widget to host pages as plain JS classes and adapts the
//! injected `mountApp` function to the core's mount bridge. The JS surface
//! mirrors the classic embed API: a factory constructed with the mount
//! function, widgets with `setAmount` / `setCurrency`, and Promise-returning
//! `renderInline` / `renderModal`.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::Element;

use widget_core::{
    AmountValue, EmbedParams, HostTarget, MountApp, MountOptions, PayWidget, RenderData,
    RenderMode, Size, SurfaceEvents, WidgetFactory,
};

use crate::dom::WebDom;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn js_failure(context: &str, value: &JsValue) -> anyhow::Error {
    anyhow::anyhow!("{context}: {value:?}")
}

/// Adapts an injected JS `mountApp(mountPoint, renderData, options)` function
/// to the core mount bridge
pub struct JsMountApp {
    mount: Function,
}

impl JsMountApp {
    pub fn new(mount: Function) -> Self {
        Self { mount }
    }

    fn options_object(options: &MountOptions) -> Result<Object, anyhow::Error> {
        let object = Object::new();
        Reflect::set(
            &object,
            &JsValue::from_str("isInModal"),
            &JsValue::from_bool(options.is_in_modal()),
        )
        .map_err(|value| js_failure("set isInModal", &value))?;

        // Exactly one lifecycle callback is exposed, matching the mode. The
        // collaborator may invoke it for the widget's whole lifetime, so the
        // closure is handed over to the JS side permanently.
        match options.mode {
            RenderMode::Inline => {
                let events = Rc::clone(&options.events);
                let resize = Closure::wrap(Box::new(move |size: JsValue| {
                    let width = Reflect::get(&size, &JsValue::from_str("width"))
                        .ok()
                        .and_then(|value| value.as_f64());
                    let height = Reflect::get(&size, &JsValue::from_str("height"))
                        .ok()
                        .and_then(|value| value.as_f64());
                    if let (Some(width), Some(height)) = (width, height) {
                        events.on_resize(Size {
                            width: width as u32,
                            height: height as u32,
                        });
                    }
                }) as Box<dyn Fn(JsValue)>);
                Reflect::set(
                    &object,
                    &JsValue::from_str("iframeResizeHandler"),
                    resize.as_ref(),
                )
                .map_err(|value| js_failure("set iframeResizeHandler", &value))?;
                resize.forget();
            }
            RenderMode::Modal => {
                let events = Rc::clone(&options.events);
                let destroy =
                    Closure::wrap(Box::new(move || events.on_destroy()) as Box<dyn Fn()>);
                Reflect::set(
                    &object,
                    &JsValue::from_str("destroyHandler"),
                    destroy.as_ref(),
                )
                .map_err(|value| js_failure("set destroyHandler", &value))?;
                destroy.forget();
            }
        }

        Ok(object)
    }
}

#[async_trait(?Send)]
impl MountApp<Element> for JsMountApp {
    async fn mount(
        &self,
        mount_point: Element,
        data: RenderData,
        options: MountOptions,
    ) -> anyhow::Result<()> {
        let data_js = serde_wasm_bindgen::to_value(&data)
            .map_err(|err| anyhow::anyhow!("serialize render data: {err}"))?;
        let options_js = Self::options_object(&options)?;

        let result = self
            .mount
            .call3(
                &JsValue::NULL,
                &JsValue::from(mount_point),
                &data_js,
                &options_js,
            )
            .map_err(|value| js_failure("mountApp call", &value))?;

        // Await the collaborator's completion signal when it returns one
        if let Ok(promise) = result.dyn_into::<Promise>() {
            JsFuture::from(promise)
                .await
                .map_err(|value| js_failure("mountApp rejected", &value))?;
        }

        Ok(())
    }
}

/// Factory class exported to JS; constructed once with the mount function
#[wasm_bindgen(js_name = PayWidgetFactory)]
pub struct WebWidgetFactory {
    factory: WidgetFactory<WebDom>,
}

#[wasm_bindgen(js_class = "PayWidgetFactory")]
impl WebWidgetFactory {
    /// `new PayWidgetFactory(mountApp)`
    #[wasm_bindgen(constructor)]
    pub fn new(mount_app: Function) -> Result<WebWidgetFactory, JsValue> {
        let dom = Rc::new(WebDom::from_window().map_err(to_js_error)?);
        let mount = Rc::new(JsMountApp::new(mount_app));
        Ok(Self {
            factory: WidgetFactory::new(dom, mount),
        })
    }

    /// `factory.widget({ projectID, region, email, paymentMethod, account })`
    pub fn widget(&self, params: JsValue) -> Result<WebPayWidget, JsValue> {
        let params: EmbedParams = serde_wasm_bindgen::from_value(params).map_err(to_js_error)?;
        let widget = self.factory.widget(params).map_err(to_js_error)?;
        Ok(WebPayWidget { inner: widget })
    }
}

/// Widget class exported to JS
#[wasm_bindgen(js_name = PayWidget)]
pub struct WebPayWidget {
    inner: PayWidget<WebDom>,
}

#[wasm_bindgen(js_class = "PayWidget")]
impl WebPayWidget {
    /// `widget.setAmount(25)` or `widget.setAmount("10.5")`
    #[wasm_bindgen(js_name = setAmount)]
    pub fn set_amount(&mut self, amount: JsValue) -> Result<(), JsValue> {
        let value = if let Some(number) = amount.as_f64() {
            AmountValue::Number(number)
        } else if let Some(text) = amount.as_string() {
            AmountValue::Text(text)
        } else {
            return Err(to_js_error("Amount value must be a string or number"));
        };
        self.inner.set_amount(value).map_err(to_js_error)?;
        Ok(())
    }

    /// `widget.setCurrency("EUR")`
    #[wasm_bindgen(js_name = setCurrency)]
    pub fn set_currency(&mut self, currency: String) {
        self.inner.set_currency(currency);
    }

    /// `widget.renderInline("#checkout")`, also accepts an element
    ///
    /// Resolves to the outer frame element once the form is mounted.
    #[wasm_bindgen(js_name = renderInline)]
    pub fn render_inline(&self, host: JsValue) -> Result<Promise, JsValue> {
        let target: HostTarget<Element> = if let Some(selector) = host.as_string() {
            HostTarget::Selector(selector)
        } else if let Ok(element) = host.dyn_into::<Element>() {
            HostTarget::Element(element)
        } else {
            return Err(to_js_error(
                "Mount element or selector is required for embedded form render",
            ));
        };

        // Render against a snapshot so the JS object stays free for setters
        let widget = self.inner.clone();
        Ok(future_to_promise(async move {
            let frame = widget.render_inline(target).await.map_err(to_js_error)?;
            Ok(JsValue::from(frame))
        }))
    }

    /// `widget.renderModal()`
    ///
    /// Resolves to the overlay frame element once the form is mounted.
    #[wasm_bindgen(js_name = renderModal)]
    pub fn render_modal(&self) -> Promise {
        let widget = self.inner.clone();
        future_to_promise(async move {
            let frame = widget.render_modal().await.map_err(to_js_error)?;
            Ok(JsValue::from(frame))
        })
    }
}
