//! Collapsible navigation sidebar.
//!
//! Desktop keeps a collapsed/expanded preference across page loads, and
//! tablet always collapses. Mobile treats the sidebar as an ephemeral
//! slide-in overlay and never touches that preference. The visual state is
//! recomputed from the persisted flag and the viewport width on every
//! resize.

use crate::services::dom::{ElementHandle, ElementRegistry};
use crate::services::logging::Logger;
use crate::services::storage::PreferenceStore;

const COMPONENT: &str = "sidebar";

/// Width bands selecting the sidebar's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportBand {
    Mobile,
    Tablet,
    Desktop,
}

/// Identifiers, class names and band boundaries for the collapsible sidebar.
#[derive(Debug, Clone)]
pub struct SidebarConfig {
    pub sidebar_id: &'static str,
    pub toggle_id: &'static str,
    pub collapsed_class: &'static str,
    /// Mobile slide-in state.
    pub shown_class: &'static str,
    /// Marker class on `<body>` while the mobile overlay is open.
    pub body_open_class: &'static str,
    pub storage_key: &'static str,
    /// Widths up to this are the mobile band.
    pub mobile_max_width: u32,
    /// Widths above mobile up to this are the tablet band.
    pub tablet_max_width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar",
            toggle_id: "sidebarToggle",
            collapsed_class: "collapsed",
            shown_class: "show",
            body_open_class: "sidebar-open",
            storage_key: "sidebarCollapsed",
            mobile_max_width: 768,
            tablet_max_width: 1024,
        }
    }
}

impl SidebarConfig {
    pub fn band(&self, width: u32) -> ViewportBand {
        if width <= self.mobile_max_width {
            ViewportBand::Mobile
        } else if width <= self.tablet_max_width {
            ViewportBand::Tablet
        } else {
            ViewportBand::Desktop
        }
    }
}

/// Sidebar with a collapse preference persisted across page loads.
///
/// The persisted flag is mutated only by tablet/desktop transitions; mobile
/// show/hide interactions are viewport-local and leave it alone.
pub struct CollapsibleSidebar<R: ElementRegistry, S: PreferenceStore> {
    sidebar: R::Handle,
    toggle: R::Handle,
    body: R::Handle,
    store: S,
    config: SidebarConfig,
}

impl<R: ElementRegistry, S: PreferenceStore> CollapsibleSidebar<R, S> {
    /// Bind to the page. Returns `None` (feature disabled) when the sidebar,
    /// its toggle control, or the body is not rendered.
    pub fn mount(registry: &R, store: S, config: SidebarConfig) -> Option<Self> {
        let sidebar = Self::lookup(registry, config.sidebar_id)?;
        let toggle = Self::lookup(registry, config.toggle_id)?;
        let Some(body) = registry.body() else {
            Logger::debug_with_component(COMPONENT, "no body element, staying off");
            return None;
        };
        Some(Self {
            sidebar,
            toggle,
            body,
            store,
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

    /// The element the document-level click listener is attached to.
    pub fn page_body(&self) -> &R::Handle {
        &self.body
    }

    /// Apply the persisted preference, then normalize for the current band.
    pub fn initialize(&self, width: u32) {
        if self.config.band(width) == ViewportBand::Desktop && self.collapsed_flag() {
            self.sidebar.add_class(self.config.collapsed_class);
        }
        self.on_resize(width);
    }

    /// Toggle-control activation. Mobile flips the ephemeral slide-in state;
    /// tablet/desktop flip the collapsed state and persist it immediately.
    pub fn on_toggle(&self, width: u32) {
        match self.config.band(width) {
            ViewportBand::Mobile => {
                self.sidebar.toggle_class(self.config.shown_class);
                self.body.toggle_class(self.config.body_open_class);
            }
            ViewportBand::Tablet | ViewportBand::Desktop => {
                let collapsed = self.sidebar.toggle_class(self.config.collapsed_class);
                self.persist(collapsed);
            }
        }
    }

    /// Document-level click handler. On mobile, a click that lands outside
    /// both the sidebar and the toggle control closes the open overlay.
    pub fn on_document_click(&self, width: u32, target: &R::Handle) {
        if self.config.band(width) != ViewportBand::Mobile {
            return;
        }
        if self.sidebar.has_class(self.config.shown_class)
            && !self.sidebar.contains(target)
            && !self.toggle.contains(target)
        {
            self.sidebar.remove_class(self.config.shown_class);
            self.body.remove_class(self.config.body_open_class);
        }
    }

    /// Recompute the visual state for the current band: mobile resets to the
    /// neutral off-canvas default, tablet forces collapsed (and persists
    /// that), desktop restores the stored preference.
    pub fn on_resize(&self, width: u32) {
        let c = &self.config;
        match c.band(width) {
            ViewportBand::Mobile => {
                self.sidebar.remove_class(c.collapsed_class);
                self.sidebar.remove_class(c.shown_class);
                self.body.remove_class(c.body_open_class);
            }
            ViewportBand::Tablet => {
                self.sidebar.add_class(c.collapsed_class);
                self.sidebar.remove_class(c.shown_class);
                self.body.remove_class(c.body_open_class);
                self.persist(true);
            }
            ViewportBand::Desktop => {
                if self.collapsed_flag() {
                    self.sidebar.add_class(c.collapsed_class);
                } else {
                    self.sidebar.remove_class(c.collapsed_class);
                }
                self.sidebar.remove_class(c.shown_class);
                self.body.remove_class(c.body_open_class);
            }
        }
    }

    fn collapsed_flag(&self) -> bool {
        self.store.get(self.config.storage_key).as_deref() == Some("true")
    }

    fn persist(&self, collapsed: bool) {
        self.store
            .set(self.config.storage_key, if collapsed { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dom::fake::{FakeDom, FakeElement};
    use crate::services::storage::memory::MemoryStore;

    const DESKTOP: u32 = 1200;
    const TABLET: u32 = 900;
    const MOBILE: u32 = 500;

    const KEY: &str = "sidebarCollapsed";

    fn mounted(store: MemoryStore) -> (FakeDom, CollapsibleSidebar<FakeDom, MemoryStore>) {
        let dom = FakeDom::new();
        dom.insert("sidebar");
        dom.insert("sidebarToggle");
        let sidebar = CollapsibleSidebar::mount(&dom, store, SidebarConfig::default()).unwrap();
        (dom, sidebar)
    }

    fn sidebar_has(dom: &FakeDom, class: &str) -> bool {
        dom.element_by_id("sidebar").unwrap().has_class(class)
    }

    #[test]
    fn bands_split_at_768_and_1024() {
        let config = SidebarConfig::default();
        assert_eq!(config.band(768), ViewportBand::Mobile);
        assert_eq!(config.band(769), ViewportBand::Tablet);
        assert_eq!(config.band(1024), ViewportBand::Tablet);
        assert_eq!(config.band(1025), ViewportBand::Desktop);
    }

    #[test]
    fn starts_collapsed_from_persisted_preference() {
        let store = MemoryStore::with(KEY, "true");
        let (dom, sidebar) = mounted(store);
        sidebar.initialize(DESKTOP);
        assert!(sidebar_has(&dom, "collapsed"));
        assert!(!sidebar_has(&dom, "show"));
    }

    #[test]
    fn starts_expanded_without_preference() {
        let (dom, sidebar) = mounted(MemoryStore::new());
        sidebar.initialize(DESKTOP);
        assert!(!sidebar_has(&dom, "collapsed"));
    }

    #[test]
    fn tablet_initialize_forces_collapse_and_persists() {
        let store = MemoryStore::with(KEY, "false");
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(TABLET);
        assert!(sidebar_has(&dom, "collapsed"));
        assert_eq!(store.get(KEY).as_deref(), Some("true"));
    }

    #[test]
    fn mobile_initialize_clears_state_and_keeps_flag() {
        let store = MemoryStore::with(KEY, "true");
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(MOBILE);
        assert!(!sidebar_has(&dom, "collapsed"));
        assert!(!sidebar_has(&dom, "show"));
        assert_eq!(store.get(KEY).as_deref(), Some("true"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn desktop_toggle_flips_and_persists() {
        let store = MemoryStore::new();
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(DESKTOP);

        sidebar.on_toggle(DESKTOP);
        assert!(sidebar_has(&dom, "collapsed"));
        assert_eq!(store.get(KEY).as_deref(), Some("true"));

        sidebar.on_toggle(DESKTOP);
        assert!(!sidebar_has(&dom, "collapsed"));
        assert_eq!(store.get(KEY).as_deref(), Some("false"));
    }

    #[test]
    fn mobile_double_toggle_is_identity_and_never_persists() {
        let store = MemoryStore::new();
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(MOBILE);

        sidebar.on_toggle(MOBILE);
        assert!(sidebar_has(&dom, "show"));
        assert!(dom.body_element().has_class("sidebar-open"));

        sidebar.on_toggle(MOBILE);
        assert!(!sidebar_has(&dom, "show"));
        assert!(!dom.body_element().has_class("sidebar-open"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn resize_to_tablet_forces_collapse_regardless_of_flag() {
        let store = MemoryStore::with(KEY, "false");
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(DESKTOP);
        assert!(!sidebar_has(&dom, "collapsed"));

        sidebar.on_resize(TABLET);
        assert!(sidebar_has(&dom, "collapsed"));
        assert_eq!(store.get(KEY).as_deref(), Some("true"));
    }

    #[test]
    fn resize_to_mobile_clears_classes_and_keeps_flag() {
        let store = MemoryStore::with(KEY, "true");
        let (dom, sidebar) = mounted(store.clone());
        sidebar.initialize(DESKTOP);
        assert!(sidebar_has(&dom, "collapsed"));

        sidebar.on_resize(MOBILE);
        assert!(!sidebar_has(&dom, "collapsed"));
        assert!(!sidebar_has(&dom, "show"));
        assert_eq!(store.get(KEY).as_deref(), Some("true"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn resize_back_to_desktop_restores_preference() {
        let store = MemoryStore::with(KEY, "true");
        let (dom, sidebar) = mounted(store);
        sidebar.initialize(MOBILE);
        assert!(!sidebar_has(&dom, "collapsed"));

        sidebar.on_resize(DESKTOP);
        assert!(sidebar_has(&dom, "collapsed"));
    }

    #[test]
    fn outside_click_closes_mobile_overlay() {
        let (dom, sidebar) = mounted(MemoryStore::new());
        sidebar.initialize(MOBILE);
        sidebar.on_toggle(MOBILE);
        assert!(sidebar_has(&dom, "show"));

        let elsewhere = dom.insert("content");
        sidebar.on_document_click(MOBILE, &elsewhere);
        assert!(!sidebar_has(&dom, "show"));
        assert!(!dom.body_element().has_class("sidebar-open"));
    }

    #[test]
    fn clicks_inside_sidebar_or_toggle_keep_overlay_open() {
        let (dom, sidebar) = mounted(MemoryStore::new());
        sidebar.initialize(MOBILE);
        sidebar.on_toggle(MOBILE);

        let link = FakeElement::new();
        dom.element_by_id("sidebar").unwrap().append_child(&link);
        sidebar.on_document_click(MOBILE, &link);
        assert!(sidebar_has(&dom, "show"));

        let toggle = dom.element_by_id("sidebarToggle").unwrap();
        sidebar.on_document_click(MOBILE, &toggle);
        assert!(sidebar_has(&dom, "show"));
    }

    #[test]
    fn outside_click_is_ignored_off_mobile() {
        let (dom, sidebar) = mounted(MemoryStore::new());
        dom.element_by_id("sidebar").unwrap().add_class("show");

        let elsewhere = dom.insert("content");
        sidebar.on_document_click(DESKTOP, &elsewhere);
        assert!(sidebar_has(&dom, "show"));
    }

    #[test]
    fn mount_requires_sidebar_and_toggle() {
        let dom = FakeDom::new();
        dom.insert("sidebar");
        assert!(
            CollapsibleSidebar::mount(&dom, MemoryStore::new(), SidebarConfig::default())
                .is_none()
        );
    }
}
