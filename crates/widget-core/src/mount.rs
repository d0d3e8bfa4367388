//! Mount Bridge
//!
//! The contract between the embedding shell and the external application that
//! actually renders the payment form. The shell hands over a mount point, a
//! flattened data snapshot, and a mode-aware event contract; everything past
//! that boundary (form UI, payment backend traffic) is the collaborator's.

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dom::Size;

/// How the widget is being presented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Embedded within the caller's layout
    Inline,
    /// Full-screen dimmed overlay
    Modal,
}

/// Flattened snapshot of configuration plus payment intent at render time
///
/// Snapshots are not live; mutating the widget after a render call does not
/// affect an in-flight or completed render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderData {
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub region: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub email: Option<String>,
    pub payment_method: Option<String>,
    pub account: Option<String>,
}

/// Callbacks the shell exposes to the collaborator
///
/// Only one method is meaningful per mode, so both default to no-ops and each
/// mode implements its own: resize for inline frames, destroy for modals.
pub trait SurfaceEvents {
    /// Inline mode: the rendered content's natural size changed.
    ///
    /// May fire any number of times; each call fully replaces the frame's
    /// prior dimensions.
    fn on_resize(&self, size: Size) {
        let _ = size;
    }

    /// Modal mode: the user completed or cancelled the flow.
    ///
    /// Detaches the overlay frame; invoking it again is a no-op.
    fn on_destroy(&self) {}
}

/// Mode-specific options handed to the collaborator
pub struct MountOptions {
    pub mode: RenderMode,
    pub events: Rc<dyn SurfaceEvents>,
}

impl MountOptions {
    pub fn new(mode: RenderMode, events: Rc<dyn SurfaceEvents>) -> Self {
        Self { mode, events }
    }

    pub fn is_in_modal(&self) -> bool {
        self.mode == RenderMode::Modal
    }
}

/// The external rendering collaborator (Strategy pattern)
///
/// `?Send` by design: the widget runs on a browser's single UI thread and the
/// collaborator may hold `Rc` handles across awaits.
#[async_trait(?Send)]
pub trait MountApp<E> {
    /// Render the payment form into `mount_point`
    ///
    /// Resolves once the initial mount is complete. Failures propagate to the
    /// render caller unchanged; the shell performs no retries.
    async fn mount(
        &self,
        mount_point: E,
        data: RenderData,
        options: MountOptions,
    ) -> anyhow::Result<()>;
}
