//! # widget-core
//!
//! Embedding shell for a hosted payment form. The crate owns everything on
//! the host-page side of the boundary: configuration validation, creation of
//! an isolated rendering surface (an iframe with injected base styling), the
//! inline/modal render lifecycles, and the size/teardown negotiation with the
//! external application that draws the actual form.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Host Page                               │
//! │  ┌──────────────┐   renders into   ┌───────────────────────┐ │
//! │  │  PayWidget   │─────────────────▶│  RenderSurface        │ │
//! │  │  (handle)    │                  │  (isolated iframe)    │ │
//! │  └──────┬───────┘                  │  ┌─────────────────┐  │ │
//! │         │ mount(point, data, opts) │  │  mount point    │  │ │
//! │         ▼                          │  └────────┬────────┘  │ │
//! │  ┌──────────────┐                  └───────────┼───────────┘ │
//! │  │  MountApp    │ ────── form UI ──────────────┘             │
//! │  │  (Strategy)  │ ◀── on_resize / on_destroy via             │
//! │  └──────────────┘     SurfaceEvents                          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Dom` trait is the seam to the actual browser; `widget-web` provides
//! the `web-sys` implementation, while [`dom::MockDom`] backs native tests.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use widget_core::{EmbedParams, WidgetFactory};
//!
//! let factory = WidgetFactory::new(dom, mount_app);
//! let mut widget = factory.widget(EmbedParams {
//!     project_id: Some("p1".into()),
//!     ..EmbedParams::default()
//! })?;
//! widget.set_amount(25)?.set_currency("EUR");
//! let frame = widget.render_inline("#checkout").await?;
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod intent;
pub mod mount;
pub mod surface;
pub mod widget;

pub use config::{EmbedConfig, EmbedParams};
pub use dom::{Dom, HostTarget, IframeParts, Size};
pub use error::{ConfigError, EmbedError, Result};
pub use intent::{AmountValue, PaymentIntent, DEFAULT_CURRENCY};
pub use mount::{MountApp, MountOptions, RenderData, RenderMode, SurfaceEvents};
pub use surface::{
    create_surface, RenderSurface, BASE_STYLES, INITIAL_FRAME_HEIGHT, INITIAL_FRAME_WIDTH,
};
pub use widget::{PayWidget, WidgetFactory};
