//! Browser wiring.
//!
//! Binds the behavior components to the live page and exposes the entry
//! points the host templates call. Each page invokes the initializer for the
//! sidebar variant its markup carries, once, after the DOM is ready; the
//! modal entry points are called directly from the request-list rows.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::overlay_sidebar::{OverlayConfig, OverlaySidebar};
use crate::components::request_modal::{ModalPresenter, RequestDetails};
use crate::components::sidebar::{CollapsibleSidebar, SidebarConfig};
use crate::services::dom::{WebDom, WebElement};
use crate::services::logging::Logger;
use crate::services::storage::BrowserStorage;

#[wasm_bindgen(start)]
pub fn start() {
    Logger::debug_with_component("boot", "gso-ui module loaded");
}

fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0) as u32
}

/// Populate and show the request-detail modal.
///
/// Errors (a display slot missing from the page) surface as thrown
/// exceptions: that is a template/script version mismatch, not a runtime
/// condition to recover from.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn open_request_modal(
    id: String,
    date: String,
    requestor: String,
    office: String,
    unit: String,
    description: String,
    status: String,
    personnel: Option<String>,
    materials: Option<String>,
    reports: Option<String>,
) -> Result<(), JsError> {
    present(&RequestDetails {
        id,
        date,
        requestor,
        office,
        unit,
        description,
        status,
        personnel,
        materials,
        reports,
    })
}

/// Same as [`open_request_modal`], taking the payload as one JSON document,
/// e.g. from a row's `data-request` attribute.
#[wasm_bindgen]
pub fn open_request_modal_json(payload: &str) -> Result<(), JsError> {
    present(&RequestDetails::from_json(payload)?)
}

fn present(details: &RequestDetails) -> Result<(), JsError> {
    let dom = WebDom::new().ok_or_else(|| JsError::new("document is not available"))?;
    ModalPresenter::default().present(&dom, details)?;
    Ok(())
}

/// Wire the collapsible sidebar, if this page renders one.
#[wasm_bindgen]
pub fn init_collapsible_sidebar() {
    let Some(dom) = WebDom::new() else { return };
    let Some(store) = BrowserStorage::new() else {
        Logger::warn_with_component("sidebar", "local storage unavailable, sidebar stays off");
        return;
    };
    let Some(sidebar) = CollapsibleSidebar::mount(&dom, store, SidebarConfig::default()) else {
        return;
    };
    let sidebar = Rc::new(sidebar);
    sidebar.initialize(viewport_width());

    {
        let handler = Rc::clone(&sidebar);
        EventListener::new(sidebar.toggle_control().raw(), "click", move |_| {
            handler.on_toggle(viewport_width());
        })
        .forget();
    }
    {
        let handler = Rc::clone(&sidebar);
        EventListener::new(sidebar.page_body().raw(), "click", move |event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            handler.on_document_click(viewport_width(), &WebElement::from(target));
        })
        .forget();
    }
    if let Some(window) = web_sys::window() {
        let handler = Rc::clone(&sidebar);
        EventListener::new(&window, "resize", move |_| {
            handler.on_resize(viewport_width());
        })
        .forget();
    }
}

/// Wire the overlay sidebar, if this page renders one.
#[wasm_bindgen]
pub fn init_overlay_sidebar() {
    let Some(dom) = WebDom::new() else { return };
    let Some(sidebar) = OverlaySidebar::mount(&dom, OverlayConfig::default()) else {
        return;
    };
    let sidebar = Rc::new(sidebar);

    {
        let handler = Rc::clone(&sidebar);
        EventListener::new(sidebar.toggle_control().raw(), "click", move |_| {
            handler.on_toggle();
        })
        .forget();
    }
    {
        let handler = Rc::clone(&sidebar);
        EventListener::new(sidebar.overlay().raw(), "click", move |_| {
            handler.on_overlay_click();
        })
        .forget();
    }
    if let Some(window) = web_sys::window() {
        let handler = Rc::clone(&sidebar);
        EventListener::new(&window, "resize", move |_| {
            handler.on_resize(viewport_width());
        })
        .forget();
    }
}
