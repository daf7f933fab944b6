//! Overlay navigation sidebar.
//!
//! Simpler variant used on pages without the persistent preference: the
//! sidebar slides in over the content with a backdrop, and docks permanently
//! above the tablet width. Nothing is persisted.

use crate::services::dom::{ElementHandle, ElementRegistry};
use crate::services::logging::Logger;

const COMPONENT: &str = "overlay-sidebar";

/// Identifiers, class names and the docking breakpoint.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub sidebar_id: &'static str,
    pub toggle_id: &'static str,
    pub overlay_id: &'static str,
    /// Off-canvas transform class carried while the sidebar is hidden.
    pub off_canvas_class: &'static str,
    /// Class hiding the backdrop overlay.
    pub hidden_class: &'static str,
    /// Widths above this dock the sidebar permanently, with no backdrop.
    pub overlay_max_width: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar",
            toggle_id: "sidebarToggle",
            overlay_id: "sidebarOverlay",
            off_canvas_class: "-translate-x-full",
            hidden_class: "hidden",
            overlay_max_width: 1024,
        }
    }
}

/// Sidebar shown over the content with a backdrop; the backdrop is visible
/// exactly while the sidebar is.
pub struct OverlaySidebar<R: ElementRegistry> {
    sidebar: R::Handle,
    toggle: R::Handle,
    overlay: R::Handle,
    config: OverlayConfig,
}

impl<R: ElementRegistry> OverlaySidebar<R> {
    /// Bind to the page. All three elements must be rendered; if any is
    /// missing the whole feature silently stays off.
    pub fn mount(registry: &R, config: OverlayConfig) -> Option<Self> {
        let sidebar = Self::lookup(registry, config.sidebar_id)?;
        let toggle = Self::lookup(registry, config.toggle_id)?;
        let overlay = Self::lookup(registry, config.overlay_id)?;
        Some(Self {
            sidebar,
            toggle,
            overlay,
            config,
        })
    }

    fn lookup(registry: &R, id: &str) -> Option<R::Handle> {
        let element = registry.element_by_id(id);
        if element.is_none() {
            Logger::debug_with_component(COMPONENT, &format!("#{id} not on page, staying off"));
        }
        element
    }

    /// The control the browser wiring attaches the click listener to.
    pub fn toggle_control(&self) -> &R::Handle {
        &self.toggle
    }

    /// The backdrop element.
    pub fn overlay(&self) -> &R::Handle {
        &self.overlay
    }

    /// Flip sidebar and backdrop together.
    pub fn on_toggle(&self) {
        let c = &self.config;
        if self.sidebar.has_class(c.off_canvas_class) {
            self.sidebar.remove_class(c.off_canvas_class);
            self.overlay.remove_class(c.hidden_class);
        } else {
            self.sidebar.add_class(c.off_canvas_class);
            self.overlay.add_class(c.hidden_class);
        }
    }

    /// Clicking the backdrop always dismisses both.
    pub fn on_overlay_click(&self) {
        self.sidebar.add_class(self.config.off_canvas_class);
        self.overlay.add_class(self.config.hidden_class);
    }

    /// Dock above the overlay width, hide below it. The backdrop is only
    /// touched when docking; explicit interaction owns it otherwise.
    pub fn on_resize(&self, width: u32) {
        let c = &self.config;
        if width > c.overlay_max_width {
            self.sidebar.remove_class(c.off_canvas_class);
            self.overlay.add_class(c.hidden_class);
        } else {
            self.sidebar.add_class(c.off_canvas_class);
        }
    }
}
