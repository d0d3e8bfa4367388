//! Widget Handle
//!
//! The public, stateful object host pages interact with. A [`WidgetFactory`]
//! is constructed once with the DOM backend and the mount collaborator, then
//! produces any number of [`PayWidget`] handles. A handle validates its
//! configuration up front, accepts amount/currency mutations, and offers the
//! two render entry points.

use std::fmt;
use std::rc::Rc;

use crate::config::{EmbedConfig, EmbedParams};
use crate::dom::{Dom, HostTarget, Size};
use crate::error::{EmbedError, Result};
use crate::intent::{AmountValue, PaymentIntent};
use crate::mount::{MountApp, MountOptions, RenderData, RenderMode, SurfaceEvents};
use crate::surface::{
    create_surface, INITIAL_FRAME_HEIGHT, INITIAL_FRAME_WIDTH, MODAL_OVERLAY_STYLES,
};

/// Produces widget handles bound to one DOM backend and one mount collaborator
pub struct WidgetFactory<D: Dom> {
    dom: Rc<D>,
    mount: Rc<dyn MountApp<D::Element>>,
}

impl<D: Dom> WidgetFactory<D> {
    /// Inject the dependencies once, before any handle exists
    pub fn new(dom: Rc<D>, mount: Rc<dyn MountApp<D::Element>>) -> Self {
        Self { dom, mount }
    }

    /// Validate configuration and produce a widget handle
    pub fn widget(&self, params: EmbedParams) -> Result<PayWidget<D>> {
        let config = EmbedConfig::validate(params)?;
        Ok(PayWidget {
            dom: Rc::clone(&self.dom),
            mount: Rc::clone(&self.mount),
            config,
            intent: PaymentIntent::default(),
        })
    }
}

/// A configured payment widget
///
/// May be rendered any number of times; every render call creates its own
/// independent surface and never transitions the handle out of its configured
/// state. Surface teardown is a DOM-level effect only.
pub struct PayWidget<D: Dom> {
    dom: Rc<D>,
    mount: Rc<dyn MountApp<D::Element>>,
    config: EmbedConfig,
    intent: PaymentIntent,
}

impl<D: Dom> Clone for PayWidget<D> {
    fn clone(&self) -> Self {
        Self {
            dom: Rc::clone(&self.dom),
            mount: Rc::clone(&self.mount),
            config: self.config.clone(),
            intent: self.intent.clone(),
        }
    }
}

// Manual impl: neither the DOM backend nor the mount collaborator is Debug
impl<D: Dom> fmt::Debug for PayWidget<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayWidget")
            .field("config", &self.config)
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}

impl<D: Dom> PayWidget<D> {
    /// The validated configuration this widget was constructed with
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Set the payment amount from a number or numeric string
    pub fn set_amount(&mut self, amount: impl Into<AmountValue>) -> Result<&mut Self> {
        self.intent.set_amount(amount.into())?;
        Ok(self)
    }

    /// Set the payment currency
    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.intent.currency = currency.into();
        self
    }

    /// Render the payment form into a caller-chosen container
    ///
    /// Resolves to the outer frame once the collaborator's initial mount
    /// completes. The frame starts at placeholder dimensions; the collaborator
    /// reports real content sizes through the resize contract afterwards.
    pub async fn render_inline(
        &self,
        host: impl Into<HostTarget<D::Element>>,
    ) -> Result<D::Element> {
        let target = host.into();
        if let HostTarget::Selector(selector) = &target {
            if selector.trim().is_empty() {
                return Err(EmbedError::Validation(
                    "Mount element or selector is required for embedded form render".into(),
                ));
            }
        }

        let data = self.render_data()?;
        let host = self.resolve_host(target)?;
        let surface = create_surface(self.dom.as_ref(), &host)?;

        // Initial sizes only; the mounted app reports its actual size
        self.dom
            .set_attribute(&surface.frame, "width", &INITIAL_FRAME_WIDTH.to_string());
        self.dom
            .set_attribute(&surface.frame, "height", &INITIAL_FRAME_HEIGHT.to_string());

        tracing::debug!(project_id = %self.config.project_id, "mounting inline payment form");

        let events = Rc::new(InlineSurfaceEvents {
            dom: Rc::clone(&self.dom),
            frame: surface.frame.clone(),
        });
        self.mount
            .mount(
                surface.mount_point,
                data,
                MountOptions::new(RenderMode::Inline, events),
            )
            .await
            .map_err(EmbedError::Mount)?;

        Ok(surface.frame)
    }

    /// Render the payment form as a full-screen modal overlay
    ///
    /// The frame is attached under the document body and dismissed by the
    /// collaborator through the destroy contract.
    pub async fn render_modal(&self) -> Result<D::Element> {
        let data = self.render_data()?;
        let host = self.dom.body();
        let surface = create_surface(self.dom.as_ref(), &host)?;

        for (property, value) in MODAL_OVERLAY_STYLES {
            self.dom.set_style(&surface.frame, property, value);
        }

        tracing::debug!(project_id = %self.config.project_id, "mounting modal payment form");

        let events = Rc::new(ModalSurfaceEvents {
            dom: Rc::clone(&self.dom),
            frame: surface.frame.clone(),
        });
        self.mount
            .mount(
                surface.mount_point,
                data,
                MountOptions::new(RenderMode::Modal, events),
            )
            .await
            .map_err(EmbedError::Mount)?;

        Ok(surface.frame)
    }

    /// Snapshot configuration and intent for the collaborator
    fn render_data(&self) -> Result<RenderData> {
        let amount = self.intent.renderable_amount()?;
        Ok(RenderData {
            project_id: self.config.project_id.clone(),
            region: self.config.region.clone(),
            amount,
            currency: self.intent.currency.clone(),
            email: self.config.email.clone(),
            payment_method: self.config.payment_method.clone(),
            account: self.config.account.clone(),
        })
    }

    fn resolve_host(&self, target: HostTarget<D::Element>) -> Result<D::Element> {
        match target {
            HostTarget::Element(element) => Ok(element),
            HostTarget::Selector(selector) => self
                .dom
                .query_selector(&selector)
                .ok_or(EmbedError::Resolution(selector)),
        }
    }
}

/// Inline mode: size reports replace the frame's dimension attributes
struct InlineSurfaceEvents<D: Dom> {
    dom: Rc<D>,
    frame: D::Element,
}

impl<D: Dom> SurfaceEvents for InlineSurfaceEvents<D> {
    fn on_resize(&self, size: Size) {
        self.dom
            .set_attribute(&self.frame, "width", &size.width.to_string());
        self.dom
            .set_attribute(&self.frame, "height", &size.height.to_string());
    }
}

/// Modal mode: the collaborator dismisses the overlay
struct ModalSurfaceEvents<D: Dom> {
    dom: Rc<D>,
    frame: D::Element,
}

impl<D: Dom> SurfaceEvents for ModalSurfaceEvents<D> {
    fn on_destroy(&self) {
        if !self.dom.remove(&self.frame) {
            tracing::debug!("modal frame already detached, ignoring destroy");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MockDom, MockElement};
    use std::cell::RefCell;

    use async_trait::async_trait;

    struct MountCall {
        mount_point: MockElement,
        data: RenderData,
        mode: RenderMode,
        events: Rc<dyn SurfaceEvents>,
    }

    /// Records every mount and lets tests drive the event contract later
    #[derive(Default)]
    struct RecordingMountApp {
        calls: RefCell<Vec<MountCall>>,
    }

    #[async_trait(?Send)]
    impl MountApp<MockElement> for RecordingMountApp {
        async fn mount(
            &self,
            mount_point: MockElement,
            data: RenderData,
            options: MountOptions,
        ) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(MountCall {
                mount_point,
                data,
                mode: options.mode,
                events: Rc::clone(&options.events),
            });
            Ok(())
        }
    }

    struct FailingMountApp;

    #[async_trait(?Send)]
    impl MountApp<MockElement> for FailingMountApp {
        async fn mount(
            &self,
            _mount_point: MockElement,
            _data: RenderData,
            _options: MountOptions,
        ) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("collaborator exploded"))
        }
    }

    fn factory() -> (Rc<MockDom>, Rc<RecordingMountApp>, WidgetFactory<MockDom>) {
        let dom = Rc::new(MockDom::new());
        let mount = Rc::new(RecordingMountApp::default());
        let factory = WidgetFactory::new(Rc::clone(&dom), mount.clone());
        (dom, mount, factory)
    }

    fn params(project_id: &str) -> EmbedParams {
        EmbedParams {
            project_id: Some(project_id.to_string()),
            ..EmbedParams::default()
        }
    }

    #[test]
    fn test_construction_requires_project_id() {
        let (dom, mount, factory) = factory();

        let err = factory.widget(EmbedParams::default()).unwrap_err();
        assert!(matches!(err, EmbedError::Config(_)));

        // No DOM mutation, no collaborator call
        assert_eq!(dom.body().child_count(), 0);
        assert!(mount.calls.borrow().is_empty());
    }

    #[test]
    fn test_widget_debug_output() {
        let (_dom, _mount, factory) = factory();
        let widget = factory.widget(params("p1")).unwrap();

        let rendered = format!("{widget:?}");
        assert!(rendered.contains("p1"));
        assert!(rendered.contains("USD"));
    }

    #[tokio::test]
    async fn test_inline_render_happy_path() {
        let (dom, mount, factory) = factory();
        let host = dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        let frame = widget.render_inline("#host").await.unwrap();

        assert_eq!(host.child_count(), 1);
        assert!(host.child(0).unwrap().same_node(&frame));
        assert_eq!(frame.attribute("width").as_deref(), Some("560"));
        assert_eq!(frame.attribute("height").as_deref(), Some("600"));

        let calls = mount.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].mode, RenderMode::Inline);
        assert_eq!(calls[0].data.amount, 25.0);
        assert_eq!(calls[0].data.currency, "USD");
        assert_eq!(calls[0].data.project_id, "p1");
        assert_eq!(calls[0].mount_point.child_count(), 0);
    }

    #[tokio::test]
    async fn test_inline_render_accepts_resolved_element() {
        let (dom, _mount, factory) = factory();
        let host = dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        widget
            .render_inline(HostTarget::element(host.clone()))
            .await
            .unwrap();
        assert_eq!(host.child_count(), 1);
    }

    #[tokio::test]
    async fn test_render_requires_amount() {
        let (dom, mount, factory) = factory();
        dom.insert_host("#host");

        let widget = factory.widget(params("p1")).unwrap();

        let err = widget.render_inline("#host").await.unwrap_err();
        assert!(matches!(err, EmbedError::Validation(_)));
        let err = widget.render_modal().await.unwrap_err();
        assert!(matches!(err, EmbedError::Validation(_)));

        // All-or-nothing: no surface was created
        assert_eq!(dom.query_selector("#host").unwrap().child_count(), 0);
        assert_eq!(dom.body().child_count(), 1); // just the host div
        assert!(mount.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_inline_render_rejects_empty_selector() {
        let (_dom, _mount, factory) = factory();
        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        let err = widget.render_inline("").await.unwrap_err();
        assert!(matches!(err, EmbedError::Validation(_)));
    }

    #[tokio::test]
    async fn test_inline_render_unknown_selector() {
        let (dom, mount, factory) = factory();
        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        let err = widget.render_inline("#nowhere").await.unwrap_err();
        assert!(matches!(err, EmbedError::Resolution(selector) if selector == "#nowhere"));
        assert_eq!(dom.body().child_count(), 0);
        assert!(mount.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_resize_is_last_write_wins() {
        let (dom, mount, factory) = factory();
        dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();
        let frame = widget.render_inline("#host").await.unwrap();

        let events = Rc::clone(&mount.calls.borrow()[0].events);
        events.on_resize(Size { width: 320, height: 480 });
        events.on_resize(Size { width: 360, height: 720 });
        assert_eq!(frame.attribute("width").as_deref(), Some("360"));
        assert_eq!(frame.attribute("height").as_deref(), Some("720"));

        // Same pair twice is idempotent
        events.on_resize(Size { width: 360, height: 720 });
        assert_eq!(frame.attribute("width").as_deref(), Some("360"));
        assert_eq!(frame.attribute("height").as_deref(), Some("720"));
    }

    #[tokio::test]
    async fn test_modal_render_happy_path() {
        let (dom, mount, factory) = factory();

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount("10.5").unwrap();
        widget.set_currency("EUR");

        let frame = widget.render_modal().await.unwrap();

        assert!(dom.body().child(0).unwrap().same_node(&frame));
        assert_eq!(frame.style("position").as_deref(), Some("fixed"));
        assert_eq!(frame.style("width").as_deref(), Some("100%"));
        assert_eq!(frame.style("height").as_deref(), Some("100%"));
        assert_eq!(frame.style("background").as_deref(), Some("rgba(0, 0, 0, 0.6)"));
        assert_eq!(frame.style("top").as_deref(), Some("0"));

        let calls = mount.calls.borrow();
        assert_eq!(calls[0].mode, RenderMode::Modal);
        assert_eq!(calls[0].data.amount, 10.5);
        assert_eq!(calls[0].data.currency, "EUR");
    }

    #[tokio::test]
    async fn test_destroy_detaches_exactly_once() {
        let (dom, mount, factory) = factory();

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();
        let frame = widget.render_modal().await.unwrap();
        assert!(frame.is_attached());

        let events = Rc::clone(&mount.calls.borrow()[0].events);
        events.on_destroy();
        assert!(!frame.is_attached());
        assert_eq!(dom.body().child_count(), 0);

        // Second invocation must not error or mutate anything
        events.on_destroy();
        assert!(!frame.is_attached());
    }

    #[tokio::test]
    async fn test_repeated_renders_are_independent() {
        let (dom, mount, factory) = factory();
        let host = dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        let first = widget.render_inline("#host").await.unwrap();
        let second = widget.render_inline("#host").await.unwrap();

        assert_eq!(host.child_count(), 2);
        assert!(!first.same_node(&second));

        let calls = mount.calls.borrow();
        assert!(!calls[0].mount_point.same_node(&calls[1].mount_point));
    }

    #[tokio::test]
    async fn test_snapshot_is_not_live() {
        let (dom, mount, factory) = factory();
        dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();
        widget.render_inline("#host").await.unwrap();

        // Later mutation must not affect the captured snapshot
        widget.set_amount(99).unwrap();
        widget.set_currency("EUR");

        let calls = mount.calls.borrow();
        assert_eq!(calls[0].data.amount, 25.0);
        assert_eq!(calls[0].data.currency, "USD");
    }

    #[tokio::test]
    async fn test_config_fields_reach_collaborator() {
        let (dom, mount, factory) = factory();
        dom.insert_host("#host");

        let mut widget = factory
            .widget(EmbedParams {
                project_id: Some("p1".into()),
                region: Some("eu".into()),
                email: Some("x@y.z".into()),
                payment_method: None,
                account: Some("acct-7".into()),
            })
            .unwrap();
        widget.set_amount(25).unwrap();
        widget.render_inline("#host").await.unwrap();

        let calls = mount.calls.borrow();
        assert_eq!(calls[0].data.region.as_deref(), Some("eu"));
        assert_eq!(calls[0].data.email.as_deref(), Some("x@y.z"));
        assert_eq!(calls[0].data.payment_method, None);
        assert_eq!(calls[0].data.account.as_deref(), Some("acct-7"));
    }

    #[tokio::test]
    async fn test_mount_failure_propagates() {
        let dom = Rc::new(MockDom::new());
        let host = dom.insert_host("#host");
        let factory = WidgetFactory::new(Rc::clone(&dom), Rc::new(FailingMountApp));

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount(25).unwrap();

        let err = widget.render_inline("#host").await.unwrap_err();
        assert!(matches!(err, EmbedError::Mount(_)));
        assert!(err.to_string().contains("collaborator exploded"));

        // The half-built surface is left for the caller to clean up
        assert_eq!(host.child_count(), 1);
    }

    #[tokio::test]
    async fn test_fluent_setters() {
        let (dom, mount, factory) = factory();
        dom.insert_host("#host");

        let mut widget = factory.widget(params("p1")).unwrap();
        widget.set_amount("42").unwrap().set_currency("GBP");
        widget.render_inline("#host").await.unwrap();

        let calls = mount.calls.borrow();
        assert_eq!(calls[0].data.amount, 42.0);
        assert_eq!(calls[0].data.currency, "GBP");
    }
}
