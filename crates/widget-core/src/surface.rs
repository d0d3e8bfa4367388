//! Surface Factory
//!
//! Creates the isolated rendering surface: an iframe whose document never
//! shares styles or DOM with the host page, in either direction. The baseline
//! stylesheet is injected into the surface document before the mount point
//! exists, so the collaborator always renders into a styled document.

use crate::dom::{Dom, IframeParts};
use crate::error::Result;

/// Placeholder frame width until the collaborator reports its content size
pub const INITIAL_FRAME_WIDTH: u32 = 560;

/// Placeholder frame height until the collaborator reports its content size
pub const INITIAL_FRAME_HEIGHT: u32 = 600;

/// Baseline presentation rules injected verbatim into every surface
pub const BASE_STYLES: &str = include_str!("../assets/base.css");

/// Inline styles that turn the outer frame into a full-viewport dimmed overlay
pub const MODAL_OVERLAY_STYLES: [(&str, &str); 8] = [
    ("width", "100%"),
    ("height", "100%"),
    ("position", "fixed"),
    ("background", "rgba(0, 0, 0, 0.6)"),
    ("top", "0"),
    ("left", "0"),
    ("right", "0"),
    ("bottom", "0"),
];

/// An isolated rendering surface created for a single render call
///
/// `frame` is the host-page-visible element the shell sizes and detaches;
/// `mount_point` is the node inside the surface the collaborator renders into.
pub struct RenderSurface<E> {
    pub frame: E,
    pub mount_point: E,
}

/// Create a surface attached as the last child of `host`
pub fn create_surface<D: Dom>(dom: &D, host: &D::Element) -> Result<RenderSurface<D::Element>> {
    let IframeParts { frame, head, body } = dom.create_iframe(host)?;
    dom.set_attribute(&frame, "frameborder", "0");

    // Styling must land before the mount point is populated
    dom.append_style(&head, BASE_STYLES)?;
    let mount_point = dom.append_mount_point(&body)?;

    Ok(RenderSurface { frame, mount_point })
}
